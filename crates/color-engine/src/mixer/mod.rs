//! Pairwise color mixer with one-shot blend guards.
//!
//! [`Mixer`] owns two named color slots and blends them with clamped
//! arithmetic. Each blend operation may fire once per fresh input: without
//! the guard, repeatedly averaging a slot into itself would silently
//! compound and the displayed result would no longer describe what was
//! actually combined.
//!
//! # Example
//!
//! ```
//! use color_engine::{Mixer, MixerSlot, Rgb};
//!
//! let mut mixer = Mixer::new();
//! mixer.set_color(MixerSlot::Color1, Rgb::new(100, 100, 100));
//! mixer.set_color(MixerSlot::Color2, Rgb::new(20, 20, 20));
//!
//! let blended = mixer.add().unwrap();
//! assert_eq!(blended, Rgb::new(60, 60, 60));
//! assert!(mixer.add().is_err()); // guard: no second add without fresh input
//! ```

use thiserror::Error;

use crate::color::Rgb;

/// Named slots of the pairwise mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixerSlot {
    /// The first mixer color
    Color1,
    /// The second mixer color
    Color2,
}

impl MixerSlot {
    /// The opposite slot.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            MixerSlot::Color1 => MixerSlot::Color2,
            MixerSlot::Color2 => MixerSlot::Color1,
        }
    }
}

/// Error type for guarded blend operations.
///
/// Surfaced as a warning, not a hard failure: the mixer state is left
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlendError {
    /// `add` was already used since the last fresh input
    #[error("add already used; change color 1 or color 2 first")]
    AddAlreadyUsed,
    /// `subtract` was already used since the last fresh input
    #[error("subtract already used; change color 1 or color 2 first")]
    SubtractAlreadyUsed,
}

/// Two-slot color mixer with per-operation one-shot guards.
///
/// Both slots start white. The selected slot determines blend order (it
/// supplies the left-hand operand) and receives the blended result; the
/// other slot is never modified by a blend.
///
/// Guards reset together whenever either slot receives a color through a
/// non-arithmetic path ([`set_color`](Self::set_color) or
/// [`reset`](Self::reset)); a successful blend sets only its own guard.
///
/// One `Mixer` belongs to one tool instance and must not be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Mixer {
    color1: Rgb,
    color2: Rgb,
    selected: MixerSlot,
    add_used: bool,
    subtract_used: bool,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mixer {
    /// Create a mixer with both slots white and `Color1` selected.
    pub fn new() -> Self {
        Self {
            color1: Rgb::WHITE,
            color2: Rgb::WHITE,
            selected: MixerSlot::Color1,
            add_used: false,
            subtract_used: false,
        }
    }

    /// The color stored in `slot`.
    #[inline]
    pub fn color(&self, slot: MixerSlot) -> Rgb {
        match slot {
            MixerSlot::Color1 => self.color1,
            MixerSlot::Color2 => self.color2,
        }
    }

    /// The currently selected slot.
    #[inline]
    pub fn selected(&self) -> MixerSlot {
        self.selected
    }

    /// Whether the add guard has fired.
    #[inline]
    pub fn add_used(&self) -> bool {
        self.add_used
    }

    /// Whether the subtract guard has fired.
    #[inline]
    pub fn subtract_used(&self) -> bool {
        self.subtract_used
    }

    /// Select the slot that supplies the left-hand operand and receives
    /// blend results. Selection alone is not a fresh input.
    pub fn select(&mut self, slot: MixerSlot) {
        self.selected = slot;
    }

    /// Store a fresh color in `slot`.
    ///
    /// This is the fresh-input path shared by the picker, manual entry,
    /// randomization, upload and capture flows: it clears both blend
    /// guards.
    pub fn set_color(&mut self, slot: MixerSlot, color: Rgb) {
        match slot {
            MixerSlot::Color1 => self.color1 = color,
            MixerSlot::Color2 => self.color2 = color,
        }
        self.reset_guards();
    }

    /// Reset the selected slot to white and clear both guards.
    ///
    /// When both slots are already white there is nothing to reset and the
    /// slot colors stay as they are.
    pub fn reset(&mut self) {
        if self.color1 != Rgb::WHITE || self.color2 != Rgb::WHITE {
            match self.selected {
                MixerSlot::Color1 => self.color1 = Rgb::WHITE,
                MixerSlot::Color2 => self.color2 = Rgb::WHITE,
            }
        }
        self.reset_guards();
    }

    /// Clear both one-shot guards.
    pub fn reset_guards(&mut self) {
        self.add_used = false;
        self.subtract_used = false;
    }

    /// Average the two slots per channel and store the result in the
    /// selected slot.
    ///
    /// Despite the name this is `(c1 + c2) / 2` with integer floor
    /// division -- an average, never a sum, so the result cannot leave
    /// the channel range.
    ///
    /// # Errors
    ///
    /// [`BlendError::AddAlreadyUsed`] if `add` already fired since the
    /// last fresh input; no state is modified.
    pub fn add(&mut self) -> Result<Rgb, BlendError> {
        if self.add_used {
            return Err(BlendError::AddAlreadyUsed);
        }

        let (first, second) = self.operands();
        let blended = Rgb::new(
            ((first.r as u16 + second.r as u16) / 2) as u8,
            ((first.g as u16 + second.g as u16) / 2) as u8,
            ((first.b as u16 + second.b as u16) / 2) as u8,
        );

        self.store_selected(blended);
        self.add_used = true;
        Ok(blended)
    }

    /// Subtract the other slot from the selected slot per channel,
    /// clamping at zero, and store the result in the selected slot.
    ///
    /// # Errors
    ///
    /// [`BlendError::SubtractAlreadyUsed`] if `subtract` already fired
    /// since the last fresh input; no state is modified.
    pub fn subtract(&mut self) -> Result<Rgb, BlendError> {
        if self.subtract_used {
            return Err(BlendError::SubtractAlreadyUsed);
        }

        let (first, second) = self.operands();
        let blended = Rgb::new(
            first.r.saturating_sub(second.r),
            first.g.saturating_sub(second.g),
            first.b.saturating_sub(second.b),
        );

        self.store_selected(blended);
        self.subtract_used = true;
        Ok(blended)
    }

    /// Blend operands in selection order: selected slot first.
    fn operands(&self) -> (Rgb, Rgb) {
        (
            self.color(self.selected),
            self.color(self.selected.other()),
        )
    }

    /// Arithmetic-result write path: does not touch the guards.
    fn store_selected(&mut self, color: Rgb) {
        match self.selected {
            MixerSlot::Color1 => self.color1 = color,
            MixerSlot::Color2 => self.color2 = color,
        }
    }
}
