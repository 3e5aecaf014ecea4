//! Slot board: named palette positions with count gating.
//!
//! The suggestion and layer tools work over five named slots. An
//! `active_count` of N enables exactly the first N slots in fixed order;
//! disabled slots cannot become the active input target. Every input
//! operation writes through the active slot, so the gating cannot be
//! bypassed by callers.

use std::fmt;

use thiserror::Error;

use crate::color::Rgb;

/// Named palette positions, in their fixed enable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The main color and base of all derivations
    First,
    /// Secondary color
    Second,
    /// First decorative color
    Third,
    /// Second decorative color
    Fourth,
    /// Third decorative color
    Fifth,
}

impl Slot {
    /// All slots in enable order.
    pub const ALL: [Slot; 5] = [
        Slot::First,
        Slot::Second,
        Slot::Third,
        Slot::Fourth,
        Slot::Fifth,
    ];

    /// Zero-based position in the enable order.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
            Slot::Third => 2,
            Slot::Fourth => 3,
            Slot::Fifth => 4,
        }
    }

    /// Placeholder label shown while the slot is unset.
    pub fn label(self) -> &'static str {
        match self {
            Slot::First => "first",
            Slot::Second => "second",
            Slot::Third => "third",
            Slot::Fourth => "fourth",
            Slot::Fifth => "fifth",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type for slot selection and count changes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotError {
    /// The slot is outside the enabled range for the current count
    #[error("slot '{0}' is disabled at the current color count")]
    Disabled(Slot),
    /// Requested active count is outside 1..=5
    #[error("color count {0} is out of range (1-5)")]
    CountOutOfRange(usize),
}

/// One tool instance's palette state: five slots plus selection gating.
///
/// Each slot holds either an unset marker (rendered as white with its
/// placeholder label) or its own [`Rgb`] value -- colors are copied in,
/// never shared between slots.
///
/// # Example
///
/// ```
/// use color_engine::{Rgb, Slot, SlotBoard};
///
/// let mut board = SlotBoard::new();
/// board.set_active_count(3).unwrap();
/// board.set_color(Rgb::new(200, 40, 40)); // writes the active slot (first)
///
/// board.select(Slot::Second).unwrap();
/// assert!(board.select(Slot::Fourth).is_err()); // disabled at count 3
/// ```
#[derive(Debug, Clone)]
pub struct SlotBoard {
    colors: [Option<Rgb>; 5],
    active_slot: Slot,
    active_count: usize,
}

impl Default for SlotBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotBoard {
    /// Create a board with all slots unset, count 1, `first` active.
    pub fn new() -> Self {
        Self {
            colors: [None; 5],
            active_slot: Slot::First,
            active_count: 1,
        }
    }

    /// The slot currently receiving input operations.
    #[inline]
    pub fn active_slot(&self) -> Slot {
        self.active_slot
    }

    /// How many slots are enabled.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Whether `slot` is within the enabled range.
    #[inline]
    pub fn is_enabled(&self, slot: Slot) -> bool {
        slot.index() < self.active_count
    }

    /// Set how many slots are enabled (1-5).
    ///
    /// Changing the count always resets the active slot to `first` and
    /// re-derives the enabled set; previously selected slots beyond the
    /// new count become unselectable.
    ///
    /// # Errors
    ///
    /// [`SlotError::CountOutOfRange`] if `count` is not in 1..=5.
    pub fn set_active_count(&mut self, count: usize) -> Result<(), SlotError> {
        if !(1..=5).contains(&count) {
            return Err(SlotError::CountOutOfRange(count));
        }
        self.active_count = count;
        self.active_slot = Slot::First;
        Ok(())
    }

    /// Make `slot` the active input target.
    ///
    /// # Errors
    ///
    /// [`SlotError::Disabled`] if the slot is outside the enabled range;
    /// the active slot is unchanged.
    pub fn select(&mut self, slot: Slot) -> Result<(), SlotError> {
        if !self.is_enabled(slot) {
            return Err(SlotError::Disabled(slot));
        }
        self.active_slot = slot;
        Ok(())
    }

    /// Store a color in the active slot.
    pub fn set_color(&mut self, color: Rgb) {
        self.colors[self.active_slot.index()] = Some(color);
    }

    /// Clear the active slot back to its unset marker.
    pub fn clear(&mut self) {
        self.colors[self.active_slot.index()] = None;
    }

    /// Seed every slot with `color`.
    ///
    /// The layer tool's import does this: the base color fills all five
    /// positions before a gradient is derived over the last four.
    pub fn seed_all(&mut self, color: Rgb) {
        self.colors = [Some(color); 5];
    }

    /// The color stored in `slot`, if set.
    #[inline]
    pub fn color(&self, slot: Slot) -> Option<Rgb> {
        self.colors[slot.index()]
    }

    /// The swatch color to render for `slot`: its value, or white while
    /// unset.
    #[inline]
    pub fn display_color(&self, slot: Slot) -> Rgb {
        self.color(slot).unwrap_or(Rgb::WHITE)
    }

    /// The label text to render for `slot`: its hex value, or the
    /// placeholder name while unset.
    pub fn display_label(&self, slot: Slot) -> String {
        match self.color(slot) {
            Some(color) => color.to_hex(),
            None => slot.label().to_string(),
        }
    }

    /// Derived-computation write path: stores `color` in `slot` directly.
    ///
    /// Only engine algorithms use this -- derived colors (layer gradients)
    /// land in slots the user cannot select, which is intentional and
    /// distinct from the gated input path.
    pub(crate) fn put(&mut self, slot: Slot, color: Rgb) {
        self.colors[slot.index()] = Some(color);
    }
}
