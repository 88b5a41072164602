//! Rapid-fire quiz engine.
//!
//! Maintains a pool of transient question targets, a discrete-event spawn
//! scheduler, a round countdown, and a scoring/combo/difficulty model. All
//! timing flows through `sched::TimerQueue` over virtual milliseconds and all
//! randomness through a seeded RNG, so whole rounds replay identically.

pub mod engine;
pub mod state;

pub use state::{RapidFire, RapidFireConfig, RoundTimer, Target, SPAWN_GRID};
