use super::prelude::*;
use crate::util::sort::ByVehicleLocation;

/// Drop orders without a location and order the rest by vehicle location.
pub fn collect_coordinates<I>(orders: I) -> Vec<CoordInfo>
where
    I: IntoIterator<Item = CoordInfo>,
{
    let mut coords: Vec<_> = orders.into_iter().filter(|c| c.pos.is_valid()).collect();
    log::debug!("{} orders with a valid location", coords.len());
    coords.sort_by_vehicle_location();
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_coord(index: usize, lat: f64, lon: f64, vehicle_location: i64) -> CoordInfo {
        CoordInfo {
            pos: GeoPoint::from_lat_lon(lat, lon),
            vehicle_location,
            index,
        }
    }

    #[test]
    fn filter_missing_locations_and_sort() {
        let orders = vec![
            new_coord(0, -33.1, -70.1, 4),
            new_coord(1, 0.0, 0.0, 1),
            new_coord(2, -33.2, -70.2, 2),
            new_coord(3, -33.3, -70.3, 4),
        ];
        let coords = collect_coordinates(orders);
        let indexes: Vec<_> = coords.iter().map(|c| c.index).collect();
        assert_eq!(indexes, vec![2, 0, 3]);
    }

    #[test]
    fn keep_points_with_a_single_zero_component() {
        // Only the exact (0, 0) pair marks a missing location.
        let orders = vec![new_coord(0, 0.0, -70.1, 1), new_coord(1, -33.1, 0.0, 2)];
        assert_eq!(collect_coordinates(orders).len(), 2);
    }

    #[test]
    fn nothing_left() {
        let orders = vec![new_coord(0, 0.0, 0.0, 1)];
        assert!(collect_coordinates(orders).is_empty());
    }
}
