//! Battle Street - a 2D platform-brawler simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, combat, projectiles, CPU AI)
//! - `catalog`: Static weapon data table with validated identifiers
//! - `profile`: Persistent player profile and shop operations
//! - `persistence`: JSON save/load of the profile
//! - `maps`: Static platform layouts
//!
//! The crate owns no rendering or input polling; a presentation layer reads
//! battle state each tick and feeds movement/attack intents in.

pub mod catalog;
pub mod config;
pub mod error;
pub mod maps;
pub mod persistence;
pub mod profile;
pub mod sim;

pub use catalog::{WeaponCatalog, WeaponId, WeaponSpec};
pub use config::SimConfig;
pub use error::{GameError, GameResult};
pub use profile::PlayerProfile;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_RATE: u64 = 60;

    /// World dimensions (simulation units)
    pub const WORLD_WIDTH: f64 = 1000.0;
    pub const WORLD_HEIGHT: f64 = 700.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f64 = 0.5;
    /// Extra slack below a platform top when testing a landing, on top of
    /// the current fall speed (prevents tunneling through thin platforms)
    pub const LANDING_SLACK: f64 = 5.0;

    /// Combatant body size
    pub const ENTITY_WIDTH: f64 = 40.0;
    pub const ENTITY_HEIGHT: f64 = 60.0;

    /// Starting health
    pub const PLAYER_HEALTH: i32 = 100;
    pub const CPU_HEALTH: i32 = 80;

    /// Horizontal movement speed (units/tick)
    pub const MOVE_SPEED: f64 = 5.0;
    /// Jump impulses (CPUs jump a little lower)
    pub const PLAYER_JUMP_VELOCITY: f64 = -12.0;
    pub const CPU_JUMP_VELOCITY: f64 = -10.0;

    /// Player spawn point (top-left of the bounding box)
    pub const PLAYER_SPAWN: (f64, f64) = (100.0, 300.0);

    /// Horizontal shove applied to melee victims
    pub const MELEE_KNOCKBACK: f64 = 10.0;
    /// Cosmetic "attacking" flag duration (200 ms)
    pub const ATTACK_ANIM_TICKS: u64 = 200 * TICK_RATE / 1000;
    /// Attack cooldown bounds (milliseconds)
    pub const MIN_COOLDOWN_MS: u64 = 200;
    pub const COOLDOWN_BUDGET_MS: u64 = 2000;

    /// Projectile flight parameters
    pub const PROJECTILE_SPEED: f64 = 10.0;
    pub const PROJECTILE_ARC_VY: f64 = -2.0;
    pub const PROJECTILE_GRAVITY: f64 = 0.5;
    pub const PROJECTILE_SIZE: f64 = 10.0;
    /// Flight time budget (~1.6 s at 60 ticks/s)
    pub const PROJECTILE_LIFE_TICKS: u32 = 100;

    /// Currency swings on battle end
    pub const WIN_REWARD: i64 = 50;
    pub const LOSE_PENALTY: i64 = 20;
}

/// Convert a duration in milliseconds to whole simulation ticks
#[inline]
pub fn ms_to_ticks(ms: u64) -> u64 {
    ms * consts::TICK_RATE / 1000
}
