//! Tinct: color mixing, dominant-color extraction and palette suggestion.
//!
//! The binary is a thin host around the [`color_engine`] crate: it decodes
//! images, parses command-line colors, drives the engine and renders the
//! results. All color algorithms live in the engine.

pub mod commands;
pub mod error;
pub mod imaging;
pub mod report;
