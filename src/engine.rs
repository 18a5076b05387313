//! Light engine facade
//!
//! Owns the pixel ring, the cabinet table and both effect state machines,
//! and exposes the per-tick operations the scheduling loop calls into. The
//! scheduler decides *what* runs each tick (walker while a drawer is open,
//! wave while idle) and when a finished frame is flushed; the engine does
//! the per-tick work.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::color::{PackedColor, Rgb};
use crate::effect::{ReversalPeriod, SessionKey, WalkerEffect, WaveEffect};
use crate::falloff::FalloffTable;
use crate::geometry::{CabinetRange, CabinetTable, GeometryError};
use crate::ring::PixelRing;

/// Configuration for the light engine
#[derive(Clone)]
pub struct EngineConfig<'a> {
    /// Cabinet sections, indexed by cabinet id minus one
    pub ranges: &'a [CabinetRange],
    /// Full wave width in pixels
    pub wave_width: u16,
    /// Wave direction reversal period
    pub wave_reversal: ReversalPeriod,
    /// Color painted at the walker's pixel
    pub walker_color: PackedColor,
}

/// Animation engine for one `N`-pixel ring
#[derive(Debug)]
pub struct LightEngine<const N: usize> {
    table: CabinetTable,
    walker: WalkerEffect,
    wave: WaveEffect,
    falloff: FalloffTable,
    ring: PixelRing<N>,
    walker_color: PackedColor,
}

impl<const N: usize> LightEngine<N> {
    /// Validate the geometry and build the engine
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(config: &EngineConfig<'_>) -> Result<Self, GeometryError> {
        let ring_len = N as u16;
        let table = CabinetTable::new(ring_len, config.ranges)?;
        Ok(Self {
            table,
            walker: WalkerEffect::new(),
            wave: WaveEffect::new(ring_len, config.wave_width, config.wave_reversal),
            falloff: FalloffTable::sine(),
            ring: PixelRing::new(),
            walker_color: config.walker_color,
        })
    }

    /// Resolve a cabinet identifier to its pixel range
    pub fn range_of(&self, cabinet_id: u8) -> Result<CabinetRange, GeometryError> {
        self.table.range_of(cabinet_id)
    }

    /// Advance the walker for an open drawer and paint its pixel
    ///
    /// Returns the painted index. An invalid cabinet id fails the call and
    /// leaves the ring untouched; the caller simply skips that tick.
    pub fn walker_tick(&mut self, cabinet_id: u8, event_tag: u8) -> Result<u16, GeometryError> {
        let range = match self.table.range_of(cabinet_id) {
            Ok(range) => range,
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("walker tick rejected: {:?}", err);
                return Err(err);
            }
        };
        let key = SessionKey::new(cabinet_id, event_tag);
        let index = self.walker.next_pixel(range, key);
        self.ring.set(i32::from(index), self.walker_color);
        Ok(index)
    }

    /// Advance the idle wave by one frame
    pub fn wave_tick(&mut self) {
        self.wave.advance(&self.falloff, &mut self.ring);
    }

    /// Push the current frame to the strip
    pub fn flush<D: StripDriver>(&self, driver: &mut D) {
        let mut frame = [Rgb::default(); N];
        for (out, cell) in frame.iter_mut().zip(self.ring.as_slice()) {
            *out = cell.to_rgb();
        }
        driver.write(&frame);
    }

    /// Reset every pixel to black
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    pub const fn ring(&self) -> &PixelRing<N> {
        &self.ring
    }

    pub const fn wave(&self) -> &WaveEffect {
        &self.wave
    }

    pub const fn table(&self) -> &CabinetTable {
        &self.table
    }
}
