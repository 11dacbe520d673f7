pub mod alas_api;
pub mod map;
