//! Animation tick pacing
//!
//! Portable tick timing without async/await or platform-specific timers.
//! The caller runs the effects between ticks and is responsible for
//! sleeping/waiting until the returned deadline.

use embassy_time::{Duration, Instant};

/// Default animation tick rate (50 Hz).
pub const DEFAULT_TICK_HZ: u32 = 50;

/// Default tick duration based on the default rate.
pub const DEFAULT_TICK_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_TICK_HZ as u64);

/// Result of one tick advance.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drift-corrected tick scheduler.
///
/// Tracks tick deadlines and skips the backlog instead of catching up when
/// the caller stalls for more than two ticks.
///
/// # Usage
///
/// ```ignore
/// let mut ticks = TickScheduler::new();
///
/// loop {
///     let result = ticks.advance(Instant::now());
///     if drawer_open {
///         engine.walker_tick(cabinet, event)?;
///     } else {
///         engine.wave_tick();
///     }
///     engine.flush(&mut strip);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler {
    next_tick: Instant,
    tick_duration: Duration,
}

impl TickScheduler {
    /// Create a scheduler with the default 50 Hz tick.
    pub const fn new() -> Self {
        Self::with_tick_duration(DEFAULT_TICK_DURATION)
    }

    /// Create a scheduler with a custom tick duration.
    pub const fn with_tick_duration(tick_duration: Duration) -> Self {
        Self {
            next_tick: Instant::from_millis(0),
            tick_duration,
        }
    }

    /// Account for one tick and return timing information.
    ///
    /// Applies drift correction if the caller has fallen too far behind,
    /// then computes the next deadline and how long to sleep for it.
    pub fn advance(&mut self, now: Instant) -> TickResult {
        // Drift correction: if we've fallen too far behind, reset to now.
        // This prevents catch-up bursts after long stalls.
        let max_drift_ms = self.tick_duration.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        self.next_tick += self.tick_duration;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
