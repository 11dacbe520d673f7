/// A geographical position in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn from_lat_lon(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The delivery API reports `(0, 0)` for orders without a location.
    ///
    /// NOTE: A real point on the intersection of the equator
    /// and the prime meridian is treated as missing as well.
    pub fn is_missing(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    pub fn is_valid(&self) -> bool {
        !self.is_missing()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::from_lat_lon(latitude, longitude)
    }
}
