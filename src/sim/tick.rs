//! Fixed-timestep battle advancement.
//!
//! One call to [`tick`] advances the battle by exactly one step: inputs
//! and stored CPU intents are applied, physics integrates, queued attacks
//! resolve, projectiles fly, the outcome is checked, and the next round of
//! CPU intents is computed for the following tick.

use crate::consts;

use super::combat;
use super::cpu;
use super::effects;
use super::physics;
use super::projectile;
use super::state::{BattlePhase, BattleState};

/// Player input sampled for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub attack: bool,
}

/// Advance the battle by one tick. A no-op once the battle is decided.
pub fn tick(state: &mut BattleState, input: &TickInput) {
    if state.phase != BattlePhase::Active {
        return;
    }

    apply_player_input(state, input);
    apply_cpu_intents(state);

    {
        let BattleState { entities, platforms, config, .. } = state;
        for entity in entities.iter_mut() {
            physics::step(entity, platforms, config);
        }
    }

    for attacker in std::mem::take(&mut state.queued_attacks) {
        combat::perform_attack(state, attacker);
    }
    state.retire_dead();

    projectile::update(state);
    state.retire_dead();

    state.check_outcome();
    plan_cpu_intents(state);

    effects::update(&mut state.particles);
    state.tick += 1;
}

fn apply_player_input(state: &mut BattleState, input: &TickInput) {
    let player_id = state.player_id;
    let Some(player) = state.entity_mut(player_id) else {
        return;
    };
    let dir = (input.move_right as i8 - input.move_left as i8) as f64;
    player.vel.x = dir * player.move_speed;
    if dir != 0.0 {
        player.facing_right = dir > 0.0;
    }
    if input.jump && player.on_ground {
        player.vel.y = consts::PLAYER_JUMP_VELOCITY;
    }
    if input.attack {
        state.queue_attack(player_id);
    }
}

fn apply_cpu_intents(state: &mut BattleState) {
    for (id, intent) in std::mem::take(&mut state.cpu_intents) {
        let Some(entity) = state.entity_mut(id) else {
            continue;
        };
        entity.vel.x = intent.vel_x;
        entity.facing_right = intent.facing_right;
        if intent.jump && entity.on_ground {
            entity.vel.y = consts::CPU_JUMP_VELOCITY;
        }
        if intent.attack {
            state.queue_attack(id);
        }
    }
}

/// Compute what each CPU will do at the start of the next tick.
fn plan_cpu_intents(state: &mut BattleState) {
    state.cpu_intents.clear();
    if state.phase != BattlePhase::Active {
        return;
    }
    let Some(player) = state.player().cloned() else {
        return;
    };
    let BattleState { entities, catalog, config, rng, cpu_intents, .. } = state;
    for entity in entities.iter().filter(|e| e.is_cpu && !e.is_dead()) {
        let spec = catalog.spec(entity.weapon);
        cpu_intents.push((entity.id, cpu::decide(entity, &player, spec, config, rng)));
    }
}
