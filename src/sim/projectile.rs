//! Projectile flight and impact resolution.
//!
//! Each projectile retires for exactly one reason per tick, checked in
//! order: lifetime/out-of-bounds first, then the first opposing entity it
//! overlaps (roster order), then the first platform.

use super::combat;
use super::effects::{self, BurstKind};
use super::state::BattleState;

/// Advance every projectile one tick and resolve impacts.
pub fn update(state: &mut BattleState) {
    for idx in 0..state.projectiles.len() {
        {
            let p = &mut state.projectiles[idx];
            p.pos += p.vel;
            p.vel.y += p.gravity;
            p.remaining_ticks = p.remaining_ticks.saturating_sub(1);
        }

        let p = &state.projectiles[idx];
        let bounds = p.bounds();
        let out_of_bounds = p.pos.y > state.config.world_height
            || p.pos.x < 0.0
            || p.pos.x > state.config.world_width;
        if p.remaining_ticks == 0 || out_of_bounds {
            state.projectiles[idx].retired = true;
            continue;
        }

        // First opposing combatant on the roster absorbs the hit
        let from_cpu = p.from_cpu;
        let damage = state.catalog.spec(p.weapon).damage;
        let hit = state
            .entities
            .iter()
            .position(|e| e.is_cpu != from_cpu && !e.is_dead() && bounds.intersects(&e.bounds()));
        if let Some(target_idx) = hit {
            let impact = state.projectiles[idx].pos;
            effects::spawn_burst(&mut state.particles, &mut state.rng, impact, BurstKind::Hit);
            if state.entities[target_idx].take_damage(damage) {
                combat::handle_kill(state, target_idx);
            }
            state.projectiles[idx].retired = true;
            continue;
        }

        // Terrain stops anything that got this far
        if state.platforms.iter().any(|pl| bounds.intersects(&pl.rect)) {
            let impact = state.projectiles[idx].pos;
            effects::spawn_burst(&mut state.particles, &mut state.rng, impact, BurstKind::Impact);
            state.projectiles[idx].retired = true;
        }
    }

    state.projectiles.retain(|p| !p.retired);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use glam::DVec2;

    use super::*;
    use crate::catalog::WeaponCatalog;
    use crate::config::SimConfig;
    use crate::sim::state::{EntityId, Platform, Projectile};

    fn arena() -> (BattleState, EntityId, EntityId) {
        let catalog = WeaponCatalog::standard();
        let gun = catalog.resolve("Water Gun").unwrap();
        let mut state = BattleState::new(
            SimConfig::default(),
            catalog,
            vec![Platform::new(0.0, 650.0, 1000.0, 50.0)],
            3,
        );
        let player = state.spawn_player("P", gun, BTreeSet::new());
        let cpu = state.spawn_cpu(0, gun);
        state.entity_mut(player).unwrap().pos = DVec2::new(100.0, 300.0);
        state.entity_mut(cpu).unwrap().pos = DVec2::new(500.0, 300.0);
        (state, player, cpu)
    }

    fn shot(state: &BattleState, owner: EntityId, pos: DVec2, vel: DVec2) -> Projectile {
        let from_cpu = state.entity(owner).unwrap().is_cpu;
        Projectile {
            pos,
            vel,
            weapon: state.entity(owner).unwrap().weapon,
            owner,
            from_cpu,
            gravity: 0.0,
            remaining_ticks: 100,
            retired: false,
        }
    }

    #[test]
    fn test_flat_flight_integration() {
        let (mut state, player, _) = arena();
        let p = shot(&state, player, DVec2::new(140.0, 330.0), DVec2::new(10.0, -2.0));
        state.projectiles.push(p);

        update(&mut state);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].pos, DVec2::new(150.0, 328.0));
        assert_eq!(state.projectiles[0].vel.y, -2.0);
        assert_eq!(state.projectiles[0].remaining_ticks, 99);
    }

    #[test]
    fn test_arcing_flight_accumulates_gravity() {
        let (mut state, player, _) = arena();
        let mut p = shot(&state, player, DVec2::new(140.0, 330.0), DVec2::new(10.0, -2.0));
        p.gravity = 0.5;
        state.projectiles.push(p);

        update(&mut state);
        assert_eq!(state.projectiles[0].vel.y, -1.5);
        update(&mut state);
        assert_eq!(state.projectiles[0].vel.y, -1.0);
        assert_eq!(state.projectiles[0].pos.y, 330.0 - 2.0 - 1.5);
    }

    #[test]
    fn test_hit_damages_opposing_entity() {
        let (mut state, player, cpu) = arena();
        let p = shot(&state, player, DVec2::new(490.0, 330.0), DVec2::new(10.0, 0.0));
        state.projectiles.push(p);

        update(&mut state);
        // Water Gun does 10
        assert_eq!(state.entity(cpu).unwrap().health, 70);
        assert!(state.projectiles.is_empty());
        assert!(!state.particles.is_empty());
    }

    #[test]
    fn test_no_friendly_fire() {
        let (mut state, player, cpu) = arena();
        // CPU shot flying through the CPU's own body
        let p = shot(&state, cpu, DVec2::new(510.0, 330.0), DVec2::new(1.0, 0.0));
        state.projectiles.push(p);

        update(&mut state);
        assert_eq!(state.entity(cpu).unwrap().health, 80);
        assert!(!state.projectiles.is_empty());
        assert_eq!(state.entity(player).unwrap().health, 100);
    }

    #[test]
    fn test_out_of_bounds_retires_without_damage() {
        let (mut state, player, cpu) = arena();
        // Overlaps the CPU's body this tick, but has already left the world
        let p = shot(&state, player, DVec2::new(995.0, 330.0), DVec2::new(10.0, 0.0));
        state.entity_mut(cpu).unwrap().pos.x = 960.0;
        state.projectiles.push(p);

        update(&mut state);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.entity(cpu).unwrap().health, 80);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_expiry_retires_without_damage() {
        let (mut state, player, cpu) = arena();
        let mut p = shot(&state, player, DVec2::new(490.0, 330.0), DVec2::new(10.0, 0.0));
        p.remaining_ticks = 1;
        state.projectiles.push(p);

        update(&mut state);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.entity(cpu).unwrap().health, 80);
    }

    #[test]
    fn test_platform_stops_projectile() {
        let (mut state, player, _) = arena();
        let p = shot(&state, player, DVec2::new(300.0, 648.0), DVec2::new(0.0, 5.0));
        state.projectiles.push(p);

        update(&mut state);
        assert!(state.projectiles.is_empty());
        // Impact burst only
        assert_eq!(state.particles.len(), 15);
    }

    #[test]
    fn test_dead_owner_projectile_still_damages() {
        let (mut state, player, cpu) = arena();
        // CPU fires at the player, then dies and leaves the roster
        let p = shot(&state, cpu, DVec2::new(150.0, 330.0), DVec2::new(-10.0, 0.0));
        state.projectiles.push(p);
        state.entity_mut(cpu).unwrap().take_damage(200);
        state.retire_dead();
        assert!(state.entity(cpu).is_none());

        // Faction routing works without the owner on the roster
        update(&mut state);
        assert_eq!(state.entity(player).unwrap().health, 90);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_kill_by_projectile_credits_player() {
        let (mut state, player, cpu) = arena();
        state.entity_mut(cpu).unwrap().health = 5;
        let p = shot(&state, player, DVec2::new(490.0, 330.0), DVec2::new(10.0, 0.0));
        state.projectiles.push(p);

        update(&mut state);
        assert!(state.entity(cpu).unwrap().is_dead());
        assert_eq!(state.coin_delta, 50);
    }
}
