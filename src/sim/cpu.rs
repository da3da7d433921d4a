//! CPU combatant controller.
//!
//! Each CPU is a simple reactive agent: it keeps a weapon-dependent
//! engagement distance from the player, with randomized jumps and attack
//! triggers drawn from the battle's seeded RNG. Intents computed here are
//! applied at the start of the following tick.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::catalog::WeaponSpec;
use crate::config::SimConfig;

use super::state::Entity;

/// One tick's worth of CPU decisions, applied like player input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuIntent {
    /// Horizontal velocity to apply (already scaled)
    pub vel_x: f64,
    pub facing_right: bool,
    pub jump: bool,
    pub attack: bool,
}

/// Decide what a CPU does next, based on where the player currently is.
pub fn decide(
    cpu: &Entity,
    player: &Entity,
    spec: &WeaponSpec,
    config: &SimConfig,
    rng: &mut Pcg32,
) -> CpuIntent {
    let dist = (player.center_x() - cpu.center_x()).abs();
    let facing_right = cpu.center_x() < player.center_x();
    let toward = if facing_right { 1.0 } else { -1.0 };
    let speed = cpu.move_speed * config.cpu_speed_factor;

    let desired_range = if spec.melee {
        spec.melee_range.unwrap_or(config.cpu_melee_fallback_range)
    } else {
        config.cpu_ranged_range
    };

    // Close when too far, back off when crowded, hold inside the band
    let vel_x = if dist > desired_range {
        toward * speed
    } else if dist < desired_range - config.cpu_kiting_band {
        -toward * speed
    } else {
        0.0
    };

    let jump = cpu.on_ground && rng.random_bool(config.cpu_jump_chance);
    let attack = dist < desired_range + 50.0 && rng.random_bool(config.cpu_attack_chance);

    CpuIntent { vel_x, facing_right, jump, attack }
}
