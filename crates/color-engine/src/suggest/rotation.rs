//! Hue-rotation suggestions and harmony transforms.

use super::SuggestError;
use crate::board::{Slot, SlotBoard};
use crate::color::{Hsv, Rgb};

/// Hue step between successive suggested slots, as a turn fraction (36°).
const SUGGESTION_HUE_STEP: f32 = 0.1;

/// Hue step between successive analogous colors, in degrees.
const ANALOGOUS_HUE_STEP_DEGREES: f32 = 30.0;

/// Per-slot outcome of a hue-rotation suggestion pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotSuggestion {
    /// The slot should change to the computed color
    Proposed {
        /// Slot the suggestion targets
        slot: Slot,
        /// Computed suggestion
        color: Rgb,
    },
    /// The slot's current rendering already matches the computed color,
    /// or the slot is still on its unset/white marker
    AlreadyPerfect {
        /// Slot the suggestion targets
        slot: Slot,
        /// The slot's current displayed color
        color: Rgb,
    },
}

impl SlotSuggestion {
    /// The slot this entry refers to.
    pub fn slot(&self) -> Slot {
        match *self {
            SlotSuggestion::Proposed { slot, .. } => slot,
            SlotSuggestion::AlreadyPerfect { slot, .. } => slot,
        }
    }

    /// The color this entry reports.
    pub fn color(&self) -> Rgb {
        match *self {
            SlotSuggestion::Proposed { color, .. } => color,
            SlotSuggestion::AlreadyPerfect { color, .. } => color,
        }
    }

    /// Whether the slot needs no change.
    pub fn is_perfect(&self) -> bool {
        matches!(self, SlotSuggestion::AlreadyPerfect { .. })
    }
}

/// Result of a hue-rotation suggestion pass over a board.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionReport {
    /// Every non-base slot already matches its computed suggestion
    AlreadyOptimal,
    /// Per-slot entries for the enabled slots after the first
    Suggestions(Vec<SlotSuggestion>),
}

/// Suggest companion colors for the board's main color by stepped hue
/// rotation.
///
/// For each enabled slot after the first, the suggestion is the main color
/// with its hue advanced by `0.1 * i` turns (36° per step), saturation and
/// value fixed. Slots whose stored value already equals the computed color,
/// or that are still unset/white, are reported as already perfect rather
/// than proposed. If every non-base slot is perfect the whole palette is
/// reported as already optimal.
///
/// # Errors
///
/// - [`SuggestError::SingleColor`] when only one slot is enabled -- a
///   single color has nothing to combine with; the layer tool covers that
///   case.
/// - [`SuggestError::MissingBaseColor`] when the first slot is unset.
///
/// # Example
///
/// ```
/// use color_engine::{rotation_suggestions, Rgb, Slot, SlotBoard, SuggestionReport};
///
/// let mut board = SlotBoard::new();
/// board.set_active_count(2).unwrap();
/// board.set_color(Rgb::new(255, 0, 0));
/// board.select(Slot::Second).unwrap();
/// board.set_color(Rgb::new(0, 0, 0));
///
/// match rotation_suggestions(&board).unwrap() {
///     SuggestionReport::Suggestions(entries) => {
///         assert_eq!(entries[0].color(), Rgb::new(255, 153, 0));
///     }
///     SuggestionReport::AlreadyOptimal => unreachable!(),
/// }
/// ```
pub fn rotation_suggestions(board: &SlotBoard) -> Result<SuggestionReport, SuggestError> {
    let count = board.active_count();
    if count == 1 {
        return Err(SuggestError::SingleColor);
    }
    let base = board
        .color(Slot::First)
        .ok_or(SuggestError::MissingBaseColor)?;
    let base_hsv = Hsv::from(base);

    let mut entries = Vec::with_capacity(count - 1);
    for (step, &slot) in Slot::ALL.iter().enumerate().take(count).skip(1) {
        let suggested = Rgb::from(base_hsv.rotate(SUGGESTION_HUE_STEP * step as f32));
        let entry = match board.color(slot) {
            Some(existing) if existing == suggested || existing == Rgb::WHITE => {
                SlotSuggestion::AlreadyPerfect {
                    slot,
                    color: existing,
                }
            }
            None => SlotSuggestion::AlreadyPerfect {
                slot,
                color: Rgb::WHITE,
            },
            Some(_) => SlotSuggestion::Proposed {
                slot,
                color: suggested,
            },
        };
        entries.push(entry);
    }

    if entries.iter().all(SlotSuggestion::is_perfect) {
        Ok(SuggestionReport::AlreadyOptimal)
    } else {
        Ok(SuggestionReport::Suggestions(entries))
    }
}

/// Complementary color: hue advanced by exactly half a turn (180°),
/// saturation and value unchanged.
///
/// # Example
///
/// ```
/// use color_engine::{complementary, Rgb};
///
/// assert_eq!(complementary(Rgb::new(255, 0, 0)), Rgb::new(0, 255, 255));
/// ```
pub fn complementary(color: Rgb) -> Rgb {
    Rgb::from(Hsv::from(color).rotate(0.5))
}

/// Complementary suggestion for each of the given colors, in order.
///
/// A one-off transform over an existing palette, separate from the
/// multi-slot rotation flow.
pub fn complementary_suggestions(colors: &[Rgb]) -> Vec<Rgb> {
    colors.iter().copied().map(complementary).collect()
}

/// Analogous palette: `count` colors at successive 30° hue offsets from
/// `base`, saturation and value unchanged.
///
/// This sub-algorithm works in degrees with a degree modulus; it never
/// mixes with the unit-interval arithmetic of the rotation flow.
pub fn analogous_colors(base: Rgb, count: usize) -> Vec<Rgb> {
    let base_hsv = Hsv::from(base);
    let base_degrees = base_hsv.h * 360.0;

    (1..=count)
        .map(|i| {
            let offset = (base_degrees + i as f32 * ANALOGOUS_HUE_STEP_DEGREES) % 360.0;
            Rgb::from(Hsv::new(offset / 360.0, base_hsv.s, base_hsv.v))
        })
        .collect()
}
