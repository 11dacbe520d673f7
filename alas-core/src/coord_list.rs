//! Text serialization of coordinate lists.
//!
//! A list looks like `[(-33.4500000, -70.6600000), (-33.4600000, -70.6700000)]`.
//! The annotated variant appends a C-style comment to every entry.

use crate::entities::{CoordInfo, GeoPoint, IndexedPoint};

const PAIR_SEPARATOR: &str = "), (";
const VALUE_SEPARATOR: &str = ", ";
const LIST_SEPARATOR: &str = ", ";

fn format_point(pos: &GeoPoint) -> String {
    format!("({:.7}, {:.7})", pos.latitude, pos.longitude)
}

fn wrap_list(entries: Vec<String>) -> String {
    format!("[{}]", entries.join(LIST_SEPARATOR))
}

/// Format the coordinates in their current order,
/// numbering them from 1.
pub fn format_annotated(coords: &[CoordInfo]) -> String {
    let entries = coords
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "{} /* Orden #{}, Vehicle Location: {} */",
                format_point(&c.pos),
                i + 1,
                c.vehicle_location
            )
        })
        .collect();
    wrap_list(entries)
}

pub fn format_clean<'a, I>(points: I) -> String
where
    I: IntoIterator<Item = &'a GeoPoint>,
{
    wrap_list(points.into_iter().map(format_point).collect())
}

fn parse_pair(pair: &str) -> Option<GeoPoint> {
    let pair = pair.trim_matches(['(', ')']);
    let mut values = pair.split(VALUE_SEPARATOR);
    let (lat, lon) = match (values.next(), values.next(), values.next()) {
        (Some(lat), Some(lon), None) => (lat, lon),
        _ => return None,
    };
    let latitude = parse_finite(lat)?;
    let longitude = parse_finite(lon)?;
    Some(GeoPoint::from_lat_lon(latitude, longitude))
}

// Out of range literals like `1e400` parse to infinity.
fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a coordinate list.
///
/// Malformed pairs are skipped, so the result may be empty.
pub fn parse_coordinate_list(text: &str) -> Vec<IndexedPoint> {
    let text = text.trim();
    let text = text.strip_prefix('[').unwrap_or(text);
    let text = text.strip_suffix(']').unwrap_or(text);
    text.split(PAIR_SEPARATOR)
        .filter_map(parse_pair)
        .enumerate()
        .map(|(i, pos)| IndexedPoint { index: i + 1, pos })
        .collect()
}
