//! Platformer engine with quiz-gate checkpoints.
//!
//! Player kinematics, platform collision, coin pickups, gate interrupts and
//! goal progression advance one animation frame at a time through
//! `Platformer::frame`; the particle system integrates on its own fixed
//! cadence via `Platformer::step_particles`. No rendering or platform
//! dependencies; the view reads engine state directly.

pub mod input;
pub mod level;
pub mod particles;
pub mod state;
pub mod tick;

pub use input::{Action, action_for_key};
pub use level::{builtin_levels, Coin, Gate, Goal, Level, Platform};
pub use particles::{Particle, ParticleKind, ParticleSystem};
pub use state::{GameStatus, Platformer, Player};
