//! Monochromatic layer palettes.

use super::SuggestError;
use crate::board::{Slot, SlotBoard};
use crate::color::Rgb;

/// Per-step channel shift for layer palettes.
const LAYER_STEP: i16 = 20;

/// Direction of a layer gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerShade {
    /// Step the base color darker
    Deep,
    /// Step the base color lighter
    Light,
}

/// Derive a four-step monochromatic gradient from `base`.
///
/// Step `i` (1..=4) shifts every channel of the base color by `20 * i`,
/// downward for [`LayerShade::Deep`] and upward for [`LayerShade::Light`],
/// clamping each channel to the valid range. Unlike the hue-rotation
/// suggestions this never changes the hue -- it is an intensity ladder
/// over a single color.
///
/// # Example
///
/// ```
/// use color_engine::{layer_palette, LayerShade, Rgb};
///
/// let steps = layer_palette(Rgb::new(100, 100, 100), LayerShade::Deep);
/// assert_eq!(steps[0], Rgb::new(80, 80, 80));
/// assert_eq!(steps[3], Rgb::new(20, 20, 20));
/// ```
pub fn layer_palette(base: Rgb, shade: LayerShade) -> [Rgb; 4] {
    let step = match shade {
        LayerShade::Deep => -LAYER_STEP,
        LayerShade::Light => LAYER_STEP,
    };
    std::array::from_fn(|i| shift_intensity(base, step * (i as i16 + 1)))
}

/// Derive a layer gradient over a board in place.
///
/// Reads the base color from the first slot and writes the four derived
/// steps into the remaining slots.
///
/// # Errors
///
/// [`SuggestError::MissingBaseColor`] when the first slot is unset; the
/// board is unchanged.
pub fn apply_layer(board: &mut SlotBoard, shade: LayerShade) -> Result<[Rgb; 4], SuggestError> {
    let base = board
        .color(Slot::First)
        .ok_or(SuggestError::MissingBaseColor)?;
    let steps = layer_palette(base, shade);
    for (&slot, &color) in Slot::ALL[1..].iter().zip(steps.iter()) {
        board.put(slot, color);
    }
    Ok(steps)
}

/// Shift every channel by `change`, clamped to the channel range.
fn shift_intensity(color: Rgb, change: i16) -> Rgb {
    let adjust = |channel: u8| (channel as i16 + change).clamp(0, 255) as u8;
    Rgb::new(adjust(color.r), adjust(color.g), adjust(color.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_steps_down_by_twenty() {
        let steps = layer_palette(Rgb::new(100, 100, 100), LayerShade::Deep);
        assert_eq!(
            steps,
            [
                Rgb::new(80, 80, 80),
                Rgb::new(60, 60, 60),
                Rgb::new(40, 40, 40),
                Rgb::new(20, 20, 20),
            ]
        );
    }

    #[test]
    fn test_light_steps_up_by_twenty() {
        let steps = layer_palette(Rgb::new(100, 100, 100), LayerShade::Light);
        assert_eq!(
            steps,
            [
                Rgb::new(120, 120, 120),
                Rgb::new(140, 140, 140),
                Rgb::new(160, 160, 160),
                Rgb::new(180, 180, 180),
            ]
        );
    }

    #[test]
    fn test_deep_clamps_at_zero() {
        let steps = layer_palette(Rgb::new(10, 10, 10), LayerShade::Deep);
        assert_eq!(steps[0], Rgb::new(0, 0, 0), "must clamp, never wrap negative");
        assert_eq!(steps[3], Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_light_clamps_at_full() {
        let steps = layer_palette(Rgb::new(250, 200, 100), LayerShade::Light);
        assert_eq!(steps[0], Rgb::new(255, 220, 120));
        assert_eq!(steps[3], Rgb::new(255, 255, 180));
    }

    #[test]
    fn test_channels_shift_independently() {
        let steps = layer_palette(Rgb::new(200, 100, 30), LayerShade::Deep);
        assert_eq!(steps[1], Rgb::new(160, 60, 0), "each channel clamps on its own");
    }

    #[test]
    fn test_apply_layer_writes_remaining_slots() {
        let mut board = SlotBoard::new();
        board.seed_all(Rgb::new(100, 100, 100));

        let steps = apply_layer(&mut board, LayerShade::Deep).unwrap();
        assert_eq!(board.color(Slot::First), Some(Rgb::new(100, 100, 100)));
        assert_eq!(board.color(Slot::Second), Some(steps[0]));
        assert_eq!(board.color(Slot::Third), Some(steps[1]));
        assert_eq!(board.color(Slot::Fourth), Some(steps[2]));
        assert_eq!(board.color(Slot::Fifth), Some(steps[3]));
    }

    #[test]
    fn test_apply_layer_without_base_fails_cleanly() {
        let mut board = SlotBoard::new();
        let result = apply_layer(&mut board, LayerShade::Light);
        assert_eq!(result, Err(SuggestError::MissingBaseColor));
        for slot in Slot::ALL {
            assert_eq!(board.color(slot), None, "failed call must not write slots");
        }
    }
}
