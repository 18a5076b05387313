//! Walker effect
//!
//! A single bright pixel bouncing back and forth inside one cabinet's
//! range, used to mark an open drawer. The walker resumes where it left
//! off as long as the same (cabinet, event) session keeps ticking and
//! restarts from the range midpoint when the session changes.

use crate::geometry::CabinetRange;

/// Identifies one animation session
///
/// Changes whenever either the cabinet or the triggering event changes,
/// which is what resets the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionKey(u16);

impl SessionKey {
    pub const fn new(cabinet_id: u8, event_tag: u8) -> Self {
        Self(((cabinet_id as u16) << 8) | event_tag as u16)
    }
}

#[derive(Debug, Clone, Copy)]
struct Session {
    key: SessionKey,
    position: i32,
    direction: i32,
}

/// Bouncing single-pixel effect state
///
/// Created lazily: the first call always starts a fresh session.
#[derive(Debug, Clone, Default)]
pub struct WalkerEffect {
    session: Option<Session>,
}

impl WalkerEffect {
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Emit the next walker pixel and advance the bounce state
    ///
    /// A new session starts at `from_pos + (length - 1) / 2` heading right.
    /// The right bound deliberately checks `> length` rather than
    /// `>= length`, so the emitted index reaches `from_pos + length` (one
    /// past the nominal range) before turning around, and the boundary
    /// pixel at each end is emitted twice. Downstream tuning relies on this
    /// exact bounce; do not tighten the bound.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn next_pixel(&mut self, range: CabinetRange, key: SessionKey) -> u16 {
        let from = i32::from(range.from_pos);
        let length = i32::from(range.length);

        let mut session = match self.session.take() {
            Some(session) if session.key == key => session,
            _ => Session {
                key,
                position: from + (length - 1) / 2,
                direction: 1,
            },
        };

        let emitted = session.position;
        if session.direction == 1 {
            session.position += 1;
            if session.position - from > length {
                session.position -= 1;
                session.direction = -1;
            }
        } else {
            session.position -= 1;
            if session.position < from {
                session.position += 1;
                session.direction = 1;
            }
        }
        self.session = Some(session);
        emitted as u16
    }

    /// Forget the current session; the next call starts fresh
    pub fn reset(&mut self) {
        self.session = None;
    }
}
