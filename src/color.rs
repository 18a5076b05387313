//! Packed two-channel color values
//!
//! The wave effect drives at most two independent intensity channels per
//! frame, packed into a single `u32` the way the strip driver consumes it.
//! The channel placement (bit offsets 0 and 4) is part of the wire contract
//! with the driver and is kept explicit here instead of being spread around
//! as raw shifts.

use smart_leds::RGB8;

pub type Rgb = RGB8;

const CHANNEL_WIDTH: u32 = 8;
const CHANNEL_MASK: u32 = (1 << CHANNEL_WIDTH) - 1;

/// One of the two intensity channels a wave frame can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveChannel {
    /// Selected by bit 0 of the color mask, packed at bit offset 0
    Primary,
    /// Selected by bit 1 of the color mask, packed at bit offset 4
    Secondary,
}

impl WaveChannel {
    /// Channel selected by the given mask bit, if any
    pub const fn from_mask_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::Primary),
            1 => Some(Self::Secondary),
            _ => None,
        }
    }

    /// Bit offset of this channel within the packed value
    pub const fn shift(self) -> u32 {
        match self {
            Self::Primary => 0,
            Self::Secondary => 4,
        }
    }
}

/// Packed color value as written into the pixel ring.
///
/// The two wave channels overlap by four bits when both are active; the
/// packing ORs them together, matching what the strip hardware receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackedColor(u32);

impl PackedColor {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(0x00FF_FFFF);

    /// Wrap a raw `0x00RRGGBB` value
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// OR the given intensity into the selected channel
    #[must_use]
    pub const fn with_channel(self, channel: WaveChannel, intensity: u8) -> Self {
        Self(self.0 | ((intensity as u32) << channel.shift()))
    }

    /// Read the eight bits at the selected channel's offset
    #[allow(clippy::cast_possible_truncation)]
    pub const fn channel(self, channel: WaveChannel) -> u8 {
        ((self.0 >> channel.shift()) & CHANNEL_MASK) as u8
    }

    pub const fn is_black(self) -> bool {
        self.0 == 0
    }

    /// Convert to an `RGB8` triple using the driver's `0x00RRGGBB` layout
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: ((self.0 >> 16) & 0xFF) as u8,
            g: ((self.0 >> 8) & 0xFF) as u8,
            b: (self.0 & 0xFF) as u8,
        }
    }
}
