pub mod map;
pub mod search;
