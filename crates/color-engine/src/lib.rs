//! color-engine: color derivation for the tinct toolbox
//!
//! This library holds the algorithmic core behind the toolbox's three
//! interactive tools: pairwise mixing, palette suggestion and layer
//! palettes. Everything here is a pure (or guard-mutating) synchronous
//! function over plain values -- no I/O, no image decoding, no rendering.
//! The hosting binary owns those collaborators and hands the engine
//! decoded buffers and parsed colors.
//!
//! # Quick Start
//!
//! ```
//! use color_engine::{Mixer, MixerSlot, Rgb};
//!
//! let mut mixer = Mixer::new();
//! mixer.set_color(MixerSlot::Color1, "#336699".parse().unwrap());
//! mixer.set_color(MixerSlot::Color2, Rgb::new(0, 0, 0));
//!
//! let blended = mixer.add().unwrap();
//! assert_eq!(blended.to_hex(), "#19334C");
//! ```
//!
//! # Components
//!
//! - [`Rgb`] / [`Hsv`]: the color codec -- hex parsing and formatting,
//!   plus the HSV space the suggestion algorithms rotate in.
//! - [`PixelBuffer`] and the [`DominantColor`] strategies
//!   ([`ModeExtract`], [`MeanExtract`], [`ClusterExtract`]): reduce a
//!   decoded image to one representative color.
//! - [`Mixer`]: clamped add/subtract blending over two slots with
//!   one-shot guards.
//! - [`SlotBoard`] and the suggestion functions
//!   ([`rotation_suggestions`], [`complementary`], [`analogous_colors`],
//!   [`layer_palette`]): multi-slot palette state and derivation.
//!
//! # State Model
//!
//! [`Mixer`] and [`SlotBoard`] are plain owned values. Each belongs to
//! exactly one tool instance; callers needing several independent tools
//! (or windows) create one value per tool. Nothing in the crate is
//! shared, global, or interior-mutable.

pub mod board;
pub mod color;
pub mod error;
pub mod extract;
pub mod mixer;
pub mod suggest;

pub use board::{Slot, SlotBoard, SlotError};
pub use color::{Hsv, ParseHexError, Rgb};
pub use error::EngineError;
pub use extract::{
    ClusterExtract, DominantColor, ExtractError, ExtractStrategy, MeanExtract, ModeExtract,
    PixelBuffer,
};
pub use mixer::{BlendError, Mixer, MixerSlot};
pub use suggest::{
    analogous_colors, apply_layer, complementary, complementary_suggestions, layer_palette,
    rotation_suggestions, LayerShade, SlotSuggestion, SuggestError, SuggestionReport,
};
