#[macro_use]
extern crate log;

mod render_map;
mod retrieve_coordinates;

pub mod prelude {
    pub use super::{render_map::*, retrieve_coordinates::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use alas_core::{coord_list, entities::*, gateways, usecases};

#[cfg(test)]
pub(crate) mod tests;
