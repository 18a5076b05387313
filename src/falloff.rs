//! Brightness falloff lookup table
//!
//! The wave effect samples a 256-entry intensity table instead of doing
//! per-pixel trigonometry. Index 255 is the wave center (brightest), index 0
//! the wave edge (dark). Deployments can provide their own curve via
//! [`FalloffTable::from_raw`]; [`FalloffTable::sine`] builds the default
//! quarter-sine ramp once at startup.

use core::f32::consts::FRAC_PI_2;

/// Number of samples in the falloff curve
pub const FALLOFF_SAMPLES: usize = 256;

/// 256-entry brightness falloff curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FalloffTable([u8; FALLOFF_SAMPLES]);

impl FalloffTable {
    /// Wrap a caller-provided curve
    pub const fn from_raw(samples: [u8; FALLOFF_SAMPLES]) -> Self {
        Self(samples)
    }

    /// Build the default quarter-sine ramp
    ///
    /// Rises monotonically from 0 at index 0 to 255 at index 255, giving the
    /// mirrored wave its bell-shaped intensity profile.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn sine() -> Self {
        let mut samples = [0u8; FALLOFF_SAMPLES];
        for (i, sample) in samples.iter_mut().enumerate() {
            let phase = (i as f32) / 255.0 * FRAC_PI_2;
            *sample = (libm::sinf(phase) * 255.0 + 0.5) as u8;
        }
        Self(samples)
    }

    /// Sample the curve
    pub const fn sample(&self, index: u8) -> u8 {
        self.0[index as usize]
    }
}

impl Default for FalloffTable {
    fn default() -> Self {
        Self::sine()
    }
}
