mod collect_coordinates;
mod error;
mod export_coordinates;
mod pallet_codes;
mod prepare_map;

pub use self::{
    collect_coordinates::*, error::Error, export_coordinates::*, pallet_codes::*, prepare_map::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::entities::*;
}
