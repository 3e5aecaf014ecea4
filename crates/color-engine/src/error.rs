//! Unified error type for the color-engine public API.
//!
//! [`EngineError`] wraps every component error into one enum for
//! convenient `?` propagation in application code. All engine failures
//! are recoverable: each one reports once and leaves slot and guard state
//! exactly as it was before the failed call.

use thiserror::Error;

use crate::board::SlotError;
use crate::color::ParseHexError;
use crate::extract::ExtractError;
use crate::mixer::BlendError;
use crate::suggest::SuggestError;

/// Unified error type for the color-engine public API.
///
/// # Example
///
/// ```
/// use color_engine::{EngineError, Rgb};
///
/// fn parse_pair(a: &str, b: &str) -> Result<(Rgb, Rgb), EngineError> {
///     Ok((a.parse::<Rgb>()?, b.parse::<Rgb>()?))
/// }
///
/// assert!(parse_pair("#000000", "bogus").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Malformed hex color input
    #[error("invalid color: {0}")]
    ParseHex(#[from] ParseHexError),

    /// Degenerate pixel buffer
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// Guarded blend invoked twice without a fresh input
    #[error("blend refused: {0}")]
    Blend(#[from] BlendError),

    /// Suggestion preconditions not met
    #[error("suggestion failed: {0}")]
    Suggest(#[from] SuggestError),

    /// Slot selection or count change rejected
    #[error("slot state error: {0}")]
    Slot(#[from] SlotError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_messages_include_source() {
        let err = EngineError::from(ExtractError::EmptyBuffer);
        assert_eq!(err.to_string(), "extraction failed: pixel buffer is empty");

        let err = EngineError::from(BlendError::AddAlreadyUsed);
        assert_eq!(
            err.to_string(),
            "blend refused: add already used; change color 1 or color 2 first"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let parse_err = "oops".parse::<crate::Rgb>().unwrap_err();
        let err: EngineError = parse_err.into();
        assert!(matches!(err, EngineError::ParseHex(_)));
    }
}
