pub mod geo;
pub mod sort;
pub mod validate;
