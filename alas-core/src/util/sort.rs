use crate::entities::CoordInfo;

pub trait ByVehicleLocation {
    /// Stable ascending sort, equal keys keep their response order.
    fn sort_by_vehicle_location(&mut self);
}

impl ByVehicleLocation for [CoordInfo] {
    fn sort_by_vehicle_location(&mut self) {
        self.sort_by_key(|c| c.vehicle_location);
    }
}
