use thiserror::Error;

use color_engine::{
    BlendError, EngineError, ExtractError, ParseHexError, SlotError, SuggestError,
};

/// Host-level error: everything a tinct command can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("output encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ParseHexError> for AppError {
    fn from(err: ParseHexError) -> Self {
        AppError::Engine(err.into())
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        AppError::Engine(err.into())
    }
}

impl From<BlendError> for AppError {
    fn from(err: BlendError) -> Self {
        AppError::Engine(err.into())
    }
}

impl From<SuggestError> for AppError {
    fn from(err: SuggestError) -> Self {
        AppError::Engine(err.into())
    }
}

impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError::Engine(err.into())
    }
}
