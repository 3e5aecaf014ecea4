//! Command implementations behind the CLI.
//!
//! Each function builds the engine state a tool instance would hold,
//! drives the requested operations, and returns the rendered output.
//! Keeping these as library functions lets the integration tests exercise
//! full command flows without spawning the binary.

use std::path::Path;

use rand::Rng;

use color_engine::{
    analogous_colors, apply_layer, complementary_suggestions, rotation_suggestions,
    ExtractStrategy, LayerShade, Mixer, MixerSlot, Rgb, Slot, SlotBoard,
};

use crate::error::AppError;
use crate::imaging;
use crate::report::{render_suggestions, render_swatches, OutputFormat, Swatch};

/// Blend operation selection for the mixer command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MixOp {
    /// Per-channel average of the two colors
    Add,
    /// Per-channel difference, clamped at zero
    Subtract,
}

/// Mixer slot selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MixTarget {
    /// Blend into the first color
    Color1,
    /// Blend into the second color
    Color2,
}

impl From<MixTarget> for MixerSlot {
    fn from(target: MixTarget) -> Self {
        match target {
            MixTarget::Color1 => MixerSlot::Color1,
            MixTarget::Color2 => MixerSlot::Color2,
        }
    }
}

/// Layer gradient direction on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShadeArg {
    /// Darken in 20-unit steps
    Deep,
    /// Lighten in 20-unit steps
    Light,
}

impl From<ShadeArg> for LayerShade {
    fn from(shade: ShadeArg) -> Self {
        match shade {
            ShadeArg::Deep => LayerShade::Deep,
            ShadeArg::Light => LayerShade::Light,
        }
    }
}

/// Extraction strategy on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Most frequent exact pixel value over a 50x50 downsample
    Mode,
    /// Per-channel arithmetic mean at native resolution
    Mean,
    /// k-means cluster center over a 100x100 downsample
    Cluster,
}

impl StrategyArg {
    /// Resolve to an engine strategy, attaching the cluster count where it
    /// applies.
    pub fn resolve(self, clusters: usize) -> ExtractStrategy {
        match self {
            StrategyArg::Mode => ExtractStrategy::Mode,
            StrategyArg::Mean => ExtractStrategy::Mean,
            StrategyArg::Cluster => ExtractStrategy::ClusterCenter { clusters },
        }
    }
}

/// Run the pairwise mixer: store both colors, then apply the requested
/// blend operations in order.
///
/// A refused blend (its one-shot guard already fired) is a warning, not a
/// failure: the run continues and the warning is appended to text output.
pub fn mix(
    color1: Rgb,
    color2: Rgb,
    target: MixerSlot,
    ops: &[MixOp],
    format: OutputFormat,
) -> Result<String, AppError> {
    let mut mixer = Mixer::new();
    mixer.set_color(MixerSlot::Color1, color1);
    mixer.set_color(MixerSlot::Color2, color2);
    mixer.select(target);

    let mut warnings = Vec::new();
    for &op in ops {
        let outcome = match op {
            MixOp::Add => mixer.add(),
            MixOp::Subtract => mixer.subtract(),
        };
        match outcome {
            Ok(result) => tracing::info!(result = %result.to_hex(), ?op, "blended"),
            Err(err) => {
                tracing::warn!(%err, ?op, "blend refused");
                warnings.push(err.to_string());
            }
        }
    }

    let swatches = [
        Swatch::new("color 1", mixer.color(MixerSlot::Color1)),
        Swatch::new("color 2", mixer.color(MixerSlot::Color2)),
        Swatch::new("result", mixer.color(target)),
    ];
    let mut output = render_swatches(format, &swatches)?;
    if format == OutputFormat::Text {
        for warning in &warnings {
            output.push_str(&format!("\nwarning: {warning}"));
        }
    }
    Ok(output)
}

/// Suggest companion colors for a board via stepped hue rotation.
///
/// `colors` assigns initial slot values through the gated input path, so
/// a slot outside the enabled count is rejected exactly as it would be in
/// an interactive tool.
pub fn suggest(
    count: usize,
    colors: &[(Slot, Rgb)],
    format: OutputFormat,
) -> Result<String, AppError> {
    let mut board = SlotBoard::new();
    board.set_active_count(count)?;
    for &(slot, color) in colors {
        board.select(slot)?;
        board.set_color(color);
    }

    let report = rotation_suggestions(&board)?;
    Ok(render_suggestions(format, &report)?)
}

/// Build a deep or light layer palette from a base color.
///
/// The import path seeds every slot with the base before the gradient is
/// derived over the last four, mirroring the interactive layer tool.
pub fn layer(base: Rgb, shade: LayerShade, format: OutputFormat) -> Result<String, AppError> {
    let mut board = SlotBoard::new();
    board.seed_all(base);
    apply_layer(&mut board, shade)?;

    let swatches: Vec<Swatch> = Slot::ALL
        .iter()
        .map(|&slot| Swatch::new(slot.label(), board.display_color(slot)))
        .collect();
    Ok(render_swatches(format, &swatches)?)
}

/// Extract the dominant color of an image file with the given strategy.
pub fn extract(
    path: &Path,
    strategy: ExtractStrategy,
    format: OutputFormat,
) -> Result<String, AppError> {
    tracing::info!(path = %path.display(), ?strategy, "extracting dominant color");
    let decoded = imaging::load_for_strategy(path, strategy)?;
    let dominant = strategy.extract(&decoded.buffer()?)?;
    Ok(render_swatches(format, &[Swatch::new("dominant", dominant)])?)
}

/// Validate a hex string and show both renderings of the color.
pub fn convert(input: &str, format: OutputFormat) -> Result<String, AppError> {
    let color: Rgb = input.parse()?;
    Ok(render_swatches(format, &[Swatch::new("color", color)])?)
}

/// Generate random colors, one swatch each.
pub fn random(count: usize, format: OutputFormat) -> Result<String, AppError> {
    let mut rng = rand::thread_rng();
    let swatches: Vec<Swatch> = (0..count)
        .map(|i| {
            let color = Rgb::new(rng.gen(), rng.gen(), rng.gen());
            Swatch::new(format!("random {}", i + 1), color)
        })
        .collect();
    Ok(render_swatches(format, &swatches)?)
}

/// Show the complementary color of each base color, in order.
pub fn complement(bases: &[Rgb], format: OutputFormat) -> Result<String, AppError> {
    let complements = complementary_suggestions(bases);
    let mut swatches = Vec::with_capacity(bases.len() * 2);
    for (base, derived) in bases.iter().zip(complements) {
        swatches.push(Swatch::new("base", *base));
        swatches.push(Swatch::new("complement", derived));
    }
    Ok(render_swatches(format, &swatches)?)
}

/// Show `count` analogous colors at 30-degree hue offsets from a base.
pub fn analogous(base: Rgb, count: usize, format: OutputFormat) -> Result<String, AppError> {
    let mut swatches = vec![Swatch::new("base", base)];
    for (i, color) in analogous_colors(base, count).into_iter().enumerate() {
        swatches.push(Swatch::new(format!("analogous {}", i + 1), color));
    }
    Ok(render_swatches(format, &swatches)?)
}
