pub mod coord_list;
pub mod gateways;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use alas_entities::{coordinate::*, geo::*, pallet::*};
}
