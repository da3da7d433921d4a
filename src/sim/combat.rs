//! Combat resolution: attack gating, melee hit-boxes, projectile spawning,
//! knockback, and death handling.

use glam::DVec2;

use crate::catalog::WeaponSpec;
use crate::consts;
use crate::ms_to_ticks;

use super::effects::{self, BurstKind};
use super::state::{BattleState, EntityId, Projectile};

/// Attack cooldown in ticks for a weapon. Faster weapons cool down sooner,
/// floored at 200 ms; CPUs carry a 1.5x handicap.
pub fn cooldown_ticks(spec: &WeaponSpec, is_cpu: bool) -> u64 {
    let mut ms = (consts::COOLDOWN_BUDGET_MS / spec.attack_speed.max(1) as u64)
        .max(consts::MIN_COOLDOWN_MS);
    if is_cpu {
        ms = ms * 3 / 2;
    }
    ms_to_ticks(ms)
}

/// Attempt one attack. Rejected (and a complete no-op) while the
/// attacker's cooldown is still running; returns whether it was accepted.
pub fn perform_attack(state: &mut BattleState, attacker_id: EntityId) -> bool {
    let now = state.tick;
    let Some(attacker) = state.entity(attacker_id) else {
        return false;
    };
    if attacker.is_dead() {
        return false;
    }
    if now - attacker.last_attack_tick < attacker.attack_cooldown_ticks {
        return false;
    }

    let weapon = attacker.weapon;
    let is_cpu = attacker.is_cpu;
    let facing_right = attacker.facing_right;
    let body = attacker.bounds();
    let attacker_center_x = attacker.center_x();
    let spec = state.catalog.spec(weapon).clone();

    if let Some(attacker) = state.entity_mut(attacker_id) {
        attacker.last_attack_tick = now;
        attacker.attacking_until_tick = now + consts::ATTACK_ANIM_TICKS;
        attacker.attack_cooldown_ticks = cooldown_ticks(&spec, is_cpu);
    }

    if spec.melee {
        // Hit-box: the attacker's body translated one box-width toward facing
        let dx = if facing_right { body.width } else { -body.width };
        let hit_box = body.translated(dx, 0.0);

        // Every opposing entity in the box takes the hit
        for i in 0..state.entities.len() {
            let target = &state.entities[i];
            if target.is_cpu == is_cpu || target.is_dead() {
                continue;
            }
            if !hit_box.intersects(&target.bounds()) {
                continue;
            }
            let shove = if attacker_center_x < state.entities[i].center_x() {
                consts::MELEE_KNOCKBACK
            } else {
                -consts::MELEE_KNOCKBACK
            };
            let target = &mut state.entities[i];
            target.pos.x += shove;
            if target.take_damage(spec.damage) {
                handle_kill(state, i);
            }
        }
    } else {
        // Projectile leaves from the facing-side edge with a slight upward arc
        let (start_x, vx) = if facing_right {
            (body.right(), consts::PROJECTILE_SPEED)
        } else {
            (body.left(), -consts::PROJECTILE_SPEED)
        };
        let gravity = if spec.explosive { consts::PROJECTILE_GRAVITY } else { 0.0 };
        state.projectiles.push(Projectile {
            pos: DVec2::new(start_x, body.center().y),
            vel: DVec2::new(vx, consts::PROJECTILE_ARC_VY),
            weapon,
            owner: attacker_id,
            from_cpu: is_cpu,
            gravity,
            remaining_ticks: consts::PROJECTILE_LIFE_TICKS,
            retired: false,
        });
    }

    true
}

/// Death handling: cosmetic explosion at the victim's last position and
/// the currency swing for the player. Runs exactly once per victim, at
/// the damage application that brought it down; the roster prune happens
/// later in the retire pass.
pub(crate) fn handle_kill(state: &mut BattleState, victim_idx: usize) {
    let victim = &state.entities[victim_idx];
    let center = victim.bounds().center();
    let victim_is_cpu = victim.is_cpu;
    let name = victim.name.clone();

    effects::spawn_burst(&mut state.particles, &mut state.rng, center, BurstKind::Explosion);

    if victim_is_cpu {
        state.coin_delta += state.config.win_reward;
        log::info!("{name} eliminated (+{} coins)", state.config.win_reward);
    } else {
        state.coin_delta -= state.config.lose_penalty;
        log::info!("{name} eliminated (-{} coins)", state.config.lose_penalty);
    }
}
