//! Injectable environment for the store.
//!
//! The store never reads the wall clock or a global random generator
//! directly. It is generic over a [`Clock`] and a [`RandomSource`], so tests
//! can supply deterministic sources and assert exact identifiers, timestamps
//! and synthetic devices.

mod clock;
mod random;

pub use clock::{Clock, ManualClock, SystemClock};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
