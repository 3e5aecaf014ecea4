//! Color types and conversion utilities
//!
//! Two types cover the engine's color handling:
//!
//! - **[`Rgb`]**: 8-bit integer channels, the interchange and storage form.
//!   Hex strings (`#RRGGBB`) parse into and print from this type.
//! - **[`Hsv`]**: unit-interval hue/saturation/value, used internally by
//!   the suggestion algorithms for hue rotation.
//!
//! # Example
//!
//! ```
//! use color_engine::{Hsv, Rgb};
//!
//! let base: Rgb = "#FF0000".parse().unwrap();
//! let complement = Rgb::from(Hsv::from(base).rotate(0.5));
//! assert_eq!(complement.to_hex(), "#00FFFF");
//! ```

mod hsv;
mod rgb;

pub use hsv::Hsv;
pub use rgb::{ParseHexError, Rgb};
