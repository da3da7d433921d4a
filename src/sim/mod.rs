//! Deterministic battle simulation.
//!
//! The simulation advances in fixed ticks with no wall-clock coupling:
//! the same seed, roster, and input sequence always produce the same
//! battle. Velocities are expressed in units per tick.

pub mod combat;
pub mod cpu;
pub mod effects;
pub mod physics;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use cpu::CpuIntent;
pub use effects::{BurstKind, Particle};
pub use rect::Rect;
pub use state::{BattlePhase, BattleState, Entity, EntityId, Platform, Projectile};
pub use tick::{tick, TickInput};
