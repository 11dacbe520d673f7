use crate::gateways::search::SearchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("At least one valid pallet code is required")]
    NoValidInput,
    #[error("No valid coordinates found")]
    EmptyResult,
    #[error(transparent)]
    Search(#[from] SearchError),
}
