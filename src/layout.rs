//! Kitchen deployment data
//!
//! Physical constants of the installed strip: one 5 m run of 60 LED/m
//! pixels closed into a ring behind seven cabinet sections. Pixel indexing
//! runs right to left along the worktop.

use crate::effect::ReversalPeriod;
use crate::geometry::{CabinetRange, CabinetTable, GeometryError};

/// Pixels per meter of the installed strip
pub const LEDS_PER_METER: u32 = 60;

/// Total pixel count (60 LED/m * 5 m)
pub const RING_LEN: usize = 300;

/// Width of the idle wave, in centimeters of strip
pub const WAVE_WIDTH_CM: u32 = 100;

/// Direction reversal period of the idle wave
pub const WAVE_REVERSAL: ReversalPeriod = ReversalPeriod::EveryFourthPass;

/// Convert a physical length to a pixel count
#[allow(clippy::cast_possible_truncation)]
pub const fn cm_to_pixels(cm: u32) -> u16 {
    (cm * LEDS_PER_METER / 100) as u16
}

/// Cabinet sections, indexed by cabinet id minus one
///
/// Widths in the comments are the physical cabinet fronts.
pub const CABINET_RANGES: [CabinetRange; 7] = [
    CabinetRange::new(150, 36), // 1: 60cm oven pull-out drawer
    CabinetRange::new(102, 48), // 2: 80cm
    CabinetRange::new(54, 48),  // 3: 80cm
    CabinetRange::new(30, 24),  // 4: 40cm
    CabinetRange::new(0, 30),   // 5: 50cm (feed point, fridge side)
    CabinetRange::new(234, 24), // 6: 40cm
    CabinetRange::new(186, 48), // 7: 80cm sink
];

/// Cabinet ids in physical right-to-left order
pub const CABINET_ORDER_R2L: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];

/// Cabinet ids in physical left-to-right order
pub const CABINET_ORDER_L2R: [u8; 7] = [6, 7, 1, 2, 3, 4, 5];

/// Build the validated table for the kitchen deployment
#[allow(clippy::cast_possible_truncation)]
pub fn kitchen_table() -> Result<CabinetTable, GeometryError> {
    CabinetTable::new(RING_LEN as u16, &CABINET_RANGES)
}
