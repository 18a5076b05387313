//! Stateful animation effects
//!
//! Both effects are plain per-tick state machines: the caller invokes them
//! once per animation tick from a single scheduling loop, and each call is
//! bounded and atomic. State is owned by the effect structs and injected by
//! the caller, so independent instances can be tested in isolation.

mod walker;
mod wave;

pub use walker::{SessionKey, WalkerEffect};
pub use wave::{ReversalPeriod, WaveEffect};
