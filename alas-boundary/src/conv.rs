use super::*;
use alas_entities as e;

impl From<GeoLocation> for e::geo::GeoPoint {
    fn from(from: GeoLocation) -> Self {
        let GeoLocation { lat, lon } = from;
        Self::from_lat_lon(lat, lon)
    }
}

impl From<e::geo::GeoPoint> for GeoLocation {
    fn from(from: e::geo::GeoPoint) -> Self {
        let e::geo::GeoPoint {
            latitude,
            longitude,
        } = from;
        Self {
            lat: latitude,
            lon: longitude,
        }
    }
}

impl DeliveryOrder {
    /// Convert into a domain entity at the given response position.
    pub fn into_coord_info(self, index: usize) -> e::coordinate::CoordInfo {
        let DeliveryOrder {
            destination,
            vehicle_location,
        } = self;
        e::coordinate::CoordInfo {
            pos: destination.geo_location.into(),
            vehicle_location,
            index,
        }
    }
}
