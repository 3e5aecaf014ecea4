//! Result rendering: the display sink for engine output.
//!
//! Commands produce engine values; this module turns them into the text a
//! user sees or, with `--json`, into machine-readable JSON. The engine
//! itself never formats messages.

use serde::Serialize;

use color_engine::{Rgb, SlotSuggestion, SuggestionReport};

/// Output encoding selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// A named swatch: label plus hex and channel renderings of one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    /// Slot or role name
    pub label: String,
    /// Canonical `#RRGGBB` form
    pub hex: String,
    /// Channel values
    pub rgb: [u8; 3],
}

impl Swatch {
    /// Build a swatch for `color` under `label`.
    pub fn new(label: impl Into<String>, color: Rgb) -> Self {
        Self {
            label: label.into(),
            hex: color.to_hex(),
            rgb: color.channels(),
        }
    }
}

/// Render a list of swatches.
pub fn render_swatches(format: OutputFormat, swatches: &[Swatch]) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(swatches),
        OutputFormat::Text => Ok(swatches
            .iter()
            .map(|swatch| format!("{}: {}", swatch.label, swatch.hex))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// One row of a JSON suggestion rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionEntry {
    /// Target slot name
    pub slot: &'static str,
    /// Suggested or confirmed color
    pub hex: String,
    /// Whether the slot already matches
    pub already_perfect: bool,
}

/// JSON shape of a full suggestion report.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionRendering {
    /// True when every non-base slot already matches
    pub already_optimal: bool,
    /// Per-slot rows (empty when already optimal)
    pub suggestions: Vec<SuggestionEntry>,
}

/// Render a suggestion report.
///
/// Text output follows the toolbox's message conventions: one line of
/// per-slot suggestions, or a confirmation that the palette needs no
/// change.
pub fn render_suggestions(
    format: OutputFormat,
    report: &SuggestionReport,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let rendering = match report {
                SuggestionReport::AlreadyOptimal => SuggestionRendering {
                    already_optimal: true,
                    suggestions: Vec::new(),
                },
                SuggestionReport::Suggestions(entries) => SuggestionRendering {
                    already_optimal: false,
                    suggestions: entries
                        .iter()
                        .map(|entry| SuggestionEntry {
                            slot: entry.slot().label(),
                            hex: entry.color().to_hex(),
                            already_perfect: entry.is_perfect(),
                        })
                        .collect(),
                },
            };
            serde_json::to_string_pretty(&rendering)
        }
        OutputFormat::Text => Ok(match report {
            SuggestionReport::AlreadyOptimal => "Current colors are already perfect".to_string(),
            SuggestionReport::Suggestions(entries) => {
                let parts: Vec<String> = entries
                    .iter()
                    .map(|entry| match entry {
                        SlotSuggestion::Proposed { slot, color } => {
                            format!("{}: {}", slot.label(), color.to_hex())
                        }
                        SlotSuggestion::AlreadyPerfect { slot, color } => {
                            format!("{}: {} (Already Perfect)", slot.label(), color.to_hex())
                        }
                    })
                    .collect();
                format!("Suggested colors: {}", parts.join(", "))
            }
        }),
    }
}
