use crate::entities::GeoPoint;

/// Arithmetic mean of all latitudes and all longitudes.
///
/// Returns `None` for an empty set of points.
pub fn centroid<'a, I>(points: I) -> Option<GeoPoint>
where
    I: IntoIterator<Item = &'a GeoPoint>,
{
    let (count, lat_sum, lon_sum) = points
        .into_iter()
        .fold((0_usize, 0.0, 0.0), |(n, lat, lon), p| {
            (n + 1, lat + p.latitude, lon + p.longitude)
        });
    if count == 0 {
        return None;
    }
    let n = count as f64;
    Some(GeoPoint::from_lat_lon(lat_sum / n, lon_sum / n))
}
