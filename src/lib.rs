#![no_std]

pub mod color;
pub mod effect;
pub mod engine;
pub mod falloff;
pub mod geometry;
pub mod layout;
pub mod ring;
pub mod tick_scheduler;

pub use color::{PackedColor, Rgb, WaveChannel};
pub use effect::{ReversalPeriod, SessionKey, WalkerEffect, WaveEffect};
pub use engine::{EngineConfig, LightEngine};
pub use falloff::FalloffTable;
pub use geometry::{CabinetRange, CabinetTable, GeometryError};
pub use ring::PixelRing;
pub use tick_scheduler::TickScheduler;

pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine renders into its ring buffer and hands finished frames
/// to this trait; transmission timing is owned by the caller.
pub trait StripDriver {
    /// Write a full frame to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
