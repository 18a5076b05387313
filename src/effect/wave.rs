//! Wave effect
//!
//! The idle/ambient animation: a mirror-symmetric brightness pulse centered
//! on a slowly traveling point of the ring. An 8-bit wrapping cycle counter
//! drives both the channel selection of each frame and the phase-locked
//! direction reversal, so the travel direction only flips while the wave is
//! fully faded.

use crate::color::{PackedColor, WaveChannel};
use crate::falloff::FalloffTable;
use crate::ring::PixelRing;

const COLOR_MASK_BITS: u8 = 0b111;

/// How often the wave reverses its travel direction
///
/// One "pass" is a full 8-step fade cycle of the color mask; the selector
/// widens the counter mask so the flip fires on every 1st, 2nd, 4th, 8th
/// or 16th pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReversalPeriod {
    EveryPass = 0,
    EverySecondPass = 1,
    EveryFourthPass = 2,
    EveryEighthPass = 3,
    EverySixteenthPass = 4,
}

impl ReversalPeriod {
    /// Decode a raw configuration selector (0..=4)
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::EveryPass,
            1 => Self::EverySecondPass,
            2 => Self::EveryFourthPass,
            3 => Self::EveryEighthPass,
            4 => Self::EverySixteenthPass,
            _ => return None,
        })
    }

    /// Low-bit mask selecting which passes may flip the direction
    pub const fn period_mask(self) -> u8 {
        match self {
            Self::EveryPass => 0,
            Self::EverySecondPass => 1,
            Self::EveryFourthPass => 3,
            Self::EveryEighthPass => 7,
            Self::EverySixteenthPass => 15,
        }
    }

    /// Full counter mask used by the reversal check
    pub const fn reversal_mask(self) -> u8 {
        COLOR_MASK_BITS | (self.period_mask() << 3)
    }
}

/// Traveling symmetric wave state
#[derive(Debug, Clone)]
pub struct WaveEffect {
    ring_len: i32,
    half_width: i32,
    reversal: ReversalPeriod,
    center: i32,
    direction: i32,
    cycle: u8,
}

impl WaveEffect {
    /// Create the wave centered at the ring midpoint
    ///
    /// `width_pixels` is the full wave width; each mirrored half paints
    /// `width_pixels / 2` samples.
    pub const fn new(ring_len: u16, width_pixels: u16, reversal: ReversalPeriod) -> Self {
        Self {
            ring_len: ring_len as i32,
            half_width: (width_pixels / 2) as i32,
            reversal,
            center: (ring_len / 2) as i32,
            direction: 1,
            cycle: 0,
        }
    }

    /// Current center position on the ring
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn center(&self) -> u16 {
        self.center as u16
    }

    /// Current travel direction (+1 or -1)
    pub const fn direction(&self) -> i32 {
        self.direction
    }

    /// Current cycle counter value
    pub const fn cycle(&self) -> u8 {
        self.cycle
    }

    /// Paint one wave frame and advance the state
    ///
    /// Writes `2 * half_width` mirrored pixels around the current center,
    /// then moves the center one step and evaluates the phase-locked
    /// reversal rule.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance<const N: usize>(&mut self, falloff: &FalloffTable, ring: &mut PixelRing<N>) {
        debug_assert_eq!(ring.len(), self.ring_len as usize);

        self.cycle = self.cycle.wrapping_add(1);
        let color_mask = self.cycle & COLOR_MASK_BITS;

        let mut n = 0;
        while n < self.half_width {
            let index = 255 - (256 * n / self.half_width) as u8;
            let mut intensity = falloff.sample(index);

            // Mixed-channel frames would look overbright without this.
            if color_mask == 3 || color_mask >= 5 {
                intensity /= if color_mask < 7 { 2 } else { 3 };
            }

            let mut color = PackedColor::BLACK;
            for bit in 0..2u8 {
                if color_mask & (1 << bit) != 0 {
                    if let Some(channel) = WaveChannel::from_mask_bit(bit) {
                        color = color.with_channel(channel, intensity);
                    }
                }
            }
            if n + 1 >= self.half_width {
                // The outermost sample stays dark, leaving a visible gap
                // between successive waves.
                color = PackedColor::BLACK;
            }

            ring.set(self.center - n, color);
            ring.set(self.center + n, color);
            n += 1;
        }

        self.center = (self.center + self.direction).rem_euclid(self.ring_len);

        // Flip only when the counter sits at the fully-faded phase of a
        // pass selected by the configured period.
        let reversal_mask = self.reversal.reversal_mask();
        if self.cycle & reversal_mask == reversal_mask ^ COLOR_MASK_BITS {
            self.direction = -self.direction;
        }
    }
}
