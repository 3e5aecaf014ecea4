//! Palette suggestion algorithms.
//!
//! Three related but distinct derivations, all working in HSV internally:
//!
//! - **Hue rotation** ([`rotation_suggestions`]): stepped 0.1-turn hue
//!   offsets from the main color fill the remaining enabled slots.
//! - **Complementary / analogous** ([`complementary`],
//!   [`analogous_colors`]): one-off harmony transforms.
//! - **Layer palettes** ([`layer_palette`]): monochromatic gradients from
//!   uniform per-channel intensity shifts -- no hue change at all, which
//!   is what distinguishes them from the rotation flow.

mod layer;
mod rotation;

use thiserror::Error;

pub use layer::{apply_layer, layer_palette, LayerShade};
pub use rotation::{
    analogous_colors, complementary, complementary_suggestions, rotation_suggestions,
    SlotSuggestion, SuggestionReport,
};

/// Error type for palette suggestion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SuggestError {
    /// A single color has no combination to suggest; the layer tool
    /// handles single-color palettes
    #[error("one color is too simple to combine; try the layer tool for single-color palettes")]
    SingleColor,
    /// No main color has been set in the first slot
    #[error("no main color set; choose a color for the first slot")]
    MissingBaseColor,
}
