use crate::geo::GeoPoint;

/// A delivery destination as returned by the search API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordInfo {
    pub pos: GeoPoint,
    /// Ordering key supplied by the API.
    pub vehicle_location: i64,
    /// Position of the item in the API response.
    pub index: usize,
}

/// A point read back from a coordinate list,
/// numbered from 1 for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint {
    pub index: usize,
    pub pos: GeoPoint,
}
