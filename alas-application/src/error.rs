use alas_core::{gateways::search::SearchError, usecases::Error as BError};
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error("Unable to process the API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("The file does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Render(#[from] anyhow::Error),
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        BError::from(err).into()
    }
}

/// Classification of failures as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoValidInput,
    Connection,
    ApiStatus,
    Transport,
    DecodeFailure,
    EmptyResult,
    Io,
    NotFound,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Business(err) => match err {
                BError::NoValidInput => ErrorKind::NoValidInput,
                BError::EmptyResult => ErrorKind::EmptyResult,
                BError::Search(SearchError::Connection(_)) => ErrorKind::Connection,
                BError::Search(SearchError::Status { .. }) => ErrorKind::ApiStatus,
                BError::Search(SearchError::Transport(_)) => ErrorKind::Transport,
            },
            Self::Decode(_) => ErrorKind::DecodeFailure,
            // The map document could not be produced.
            Self::Io(_) | Self::Render(_) => ErrorKind::Io,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
