use thiserror::Error;

use crate::core::TourError;
use crate::services::{ReaderError, WriterError};

/// Any failure between reading the input and printing the tour
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error(transparent)]
    Tour(#[from] TourError),

    #[error(transparent)]
    Writer(#[from] WriterError),
}

pub type Result<T> = std::result::Result<T, AppError>;
