//! World and balance configuration.
//!
//! An immutable configuration object handed to the battle session at
//! construction. Nothing in the simulation reads ambient globals; tests
//! tweak a [`SimConfig`] instead.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Simulation configuration, fixed for the lifetime of a battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// World width in simulation units
    pub world_width: f64,
    /// World height; the floor clamp lives at the bottom edge
    pub world_height: f64,
    /// Downward acceleration per tick
    pub gravity: f64,
    /// Base horizontal movement speed (units/tick)
    pub move_speed: f64,
    /// Coins credited per CPU kill
    pub win_reward: i64,
    /// Coins deducted when the player falls (never below zero)
    pub lose_penalty: i64,

    // === CPU tuning ===
    /// Fraction of base speed CPUs move at
    pub cpu_speed_factor: f64,
    /// Preferred engagement distance for ranged CPUs
    pub cpu_ranged_range: f64,
    /// Fallback reach when a melee weapon carries no range of its own
    pub cpu_melee_fallback_range: f64,
    /// Width of the hold-position band inside the desired range
    pub cpu_kiting_band: f64,
    /// Per-tick probability of a jump while grounded
    pub cpu_jump_chance: f64,
    /// Per-tick probability of an attack attempt when in range
    pub cpu_attack_chance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: consts::WORLD_WIDTH,
            world_height: consts::WORLD_HEIGHT,
            gravity: consts::GRAVITY,
            move_speed: consts::MOVE_SPEED,
            win_reward: consts::WIN_REWARD,
            lose_penalty: consts::LOSE_PENALTY,
            cpu_speed_factor: 0.7,
            cpu_ranged_range: 300.0,
            cpu_melee_fallback_range: 200.0,
            cpu_kiting_band: 100.0,
            cpu_jump_chance: 0.008,
            cpu_attack_chance: 0.06,
        }
    }
}
