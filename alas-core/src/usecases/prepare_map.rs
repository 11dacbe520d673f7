use super::prelude::*;
use crate::util::geo::centroid;

/// Everything needed to draw a map of a coordinate list.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRenderRequest {
    pub points: Vec<GeoPoint>,
    pub center: GeoPoint,
}

pub fn prepare_map(points: Vec<GeoPoint>) -> Result<MapRenderRequest> {
    let center = centroid(&points).ok_or(Error::EmptyResult)?;
    Ok(MapRenderRequest { points, center })
}
