//! Battle state and core simulation types.
//!
//! A [`BattleState`] owns every combatant, platform, projectile, and
//! cosmetic effect for the duration of one battle. Entities carry stable
//! identifiers; removal is deferred to a retire pass after each update
//! traversal so nothing is pruned mid-iteration.

use std::collections::BTreeSet;

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cpu::CpuIntent;
use super::effects::Particle;
use super::rect::Rect;
use crate::catalog::{WeaponCatalog, WeaponId};
use crate::config::SimConfig;
use crate::consts;

/// Stable identifier for a combatant within one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Outcome phase of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Fight in progress
    Active,
    /// All CPUs eliminated
    Won,
    /// Player eliminated
    Lost,
}

/// A combatant: the player or one CPU.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Display name (username or "CPU n")
    pub name: String,
    /// Top-left corner of the bounding box
    pub pos: DVec2,
    /// Velocity in units/tick
    pub vel: DVec2,
    pub health: i32,
    pub max_health: i32,
    pub facing_right: bool,
    /// Currently equipped weapon
    pub weapon: WeaponId,
    /// Weapons carried into the battle
    pub inventory: BTreeSet<WeaponId>,
    pub on_ground: bool,
    /// Tick of the last accepted attack
    pub last_attack_tick: u64,
    /// Ticks that must elapse before the next attack is accepted
    pub attack_cooldown_ticks: u64,
    /// Cosmetic swing flag, cleared 200 ms after an accepted attack
    pub attacking_until_tick: u64,
    pub is_cpu: bool,
    /// Base horizontal speed (units/tick)
    pub move_speed: f64,
}

impl Entity {
    fn new(id: EntityId, name: String, pos: DVec2, weapon: WeaponId, is_cpu: bool) -> Self {
        let max_health = if is_cpu { consts::CPU_HEALTH } else { consts::PLAYER_HEALTH };
        let mut inventory = BTreeSet::new();
        inventory.insert(weapon);
        Self {
            id,
            name,
            pos,
            vel: DVec2::ZERO,
            health: max_health,
            max_health,
            facing_right: !is_cpu,
            weapon,
            inventory,
            on_ground: false,
            last_attack_tick: 0,
            attack_cooldown_ticks: 0,
            attacking_until_tick: 0,
            is_cpu,
            move_speed: consts::MOVE_SPEED,
        }
    }

    /// Bounding box, always derived from position and the fixed body size.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, consts::ENTITY_WIDTH, consts::ENTITY_HEIGHT)
    }

    /// Horizontal center of the body.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.pos.x + consts::ENTITY_WIDTH / 2.0
    }

    /// Apply damage, clamping health to `[0, max_health]`.
    /// Returns `true` when this application brought the entity down.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.health <= 0 {
            return false;
        }
        self.health = (self.health - amount.max(0)).clamp(0, self.max_health);
        self.health == 0
    }

    /// Whether the entity has been eliminated (awaiting the retire pass).
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Cosmetic: whether the attack swing animation is active.
    #[inline]
    pub fn is_attacking(&self, now: u64) -> bool {
        now < self.attacking_until_tick
    }
}

/// A static collision surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { rect: Rect::new(x, y, width, height) }
    }
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Center position
    pub pos: DVec2,
    pub vel: DVec2,
    pub weapon: WeaponId,
    /// Spawning entity; may refer to a combatant that has since died.
    /// Faction routing uses `from_cpu`, so a dead owner is never looked up.
    pub owner: EntityId,
    pub from_cpu: bool,
    /// Per-tick downward acceleration (0 for flat-flying projectiles)
    pub gravity: f64,
    pub remaining_ticks: u32,
    /// Set during the update traversal, pruned afterwards
    pub retired: bool,
}

impl Projectile {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, consts::PROJECTILE_SIZE, consts::PROJECTILE_SIZE)
    }
}

/// Complete battle session state.
#[derive(Debug, Clone)]
pub struct BattleState {
    pub config: SimConfig,
    pub catalog: WeaponCatalog,
    /// Seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub tick: u64,
    pub phase: BattlePhase,
    /// Active roster; the player is always spawned first
    pub entities: Vec<Entity>,
    pub player_id: EntityId,
    pub platforms: Vec<Platform>,
    pub projectiles: Vec<Projectile>,
    /// Cosmetic particles, no gameplay coupling
    pub particles: Vec<Particle>,
    /// Net coin change for the player, applied to the profile on battle end
    pub coin_delta: i64,
    /// Attack intents accepted this tick, resolved in the combat phase
    pub(crate) queued_attacks: Vec<EntityId>,
    /// CPU intents computed at the end of a tick, applied at the start of
    /// the next one
    pub(crate) cpu_intents: Vec<(EntityId, CpuIntent)>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl BattleState {
    /// Create an empty battle session with the given seed.
    pub fn new(config: SimConfig, catalog: WeaponCatalog, platforms: Vec<Platform>, seed: u64) -> Self {
        Self {
            config,
            catalog,
            seed,
            tick: 0,
            phase: BattlePhase::Active,
            entities: Vec::new(),
            player_id: EntityId(0),
            platforms,
            projectiles: Vec::new(),
            particles: Vec::new(),
            coin_delta: 0,
            queued_attacks: Vec::new(),
            cpu_intents: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID.
    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn the player at the standard spawn point.
    pub fn spawn_player(
        &mut self,
        name: impl Into<String>,
        weapon: WeaponId,
        inventory: BTreeSet<WeaponId>,
    ) -> EntityId {
        let id = self.next_entity_id();
        let (x, y) = consts::PLAYER_SPAWN;
        let mut entity = Entity::new(id, name.into(), DVec2::new(x, y), weapon, false);
        entity.move_speed = self.config.move_speed;
        entity.inventory.extend(inventory);
        self.player_id = id;
        self.entities.push(entity);
        id
    }

    /// Spawn the `index`-th CPU near the far edge of the world.
    pub fn spawn_cpu(&mut self, index: usize, weapon: WeaponId) -> EntityId {
        let id = self.next_entity_id();
        let x = self.config.world_width - 100.0 - (index as f64) * 100.0;
        let name = format!("CPU {}", index + 1);
        let mut entity = Entity::new(id, name, DVec2::new(x, 100.0), weapon, true);
        entity.move_speed = self.config.move_speed;
        self.entities.push(entity);
        id
    }

    /// Convenience constructor: one player versus `num_cpus` CPUs, all
    /// armed with the player's current weapon.
    pub fn versus_cpus(
        config: SimConfig,
        catalog: WeaponCatalog,
        platforms: Vec<Platform>,
        seed: u64,
        player_name: impl Into<String>,
        weapon: WeaponId,
        inventory: BTreeSet<WeaponId>,
        num_cpus: usize,
    ) -> Self {
        let mut state = Self::new(config, catalog, platforms, seed);
        state.spawn_player(player_name, weapon, inventory);
        for i in 0..num_cpus {
            state.spawn_cpu(i, weapon);
        }
        state
    }

    /// Look up an entity by ID.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// The player, while still on the roster.
    pub fn player(&self) -> Option<&Entity> {
        self.entity(self.player_id)
    }

    /// Number of CPUs still standing.
    pub fn live_cpu_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_cpu && !e.is_dead()).count()
    }

    /// Queue an attack intent for resolution in this tick's combat phase.
    pub fn queue_attack(&mut self, attacker: EntityId) {
        self.queued_attacks.push(attacker);
    }

    /// Remove eliminated entities from the roster. Kill handling has
    /// already run at the point of death; this is only the prune.
    pub(crate) fn retire_dead(&mut self) {
        self.entities.retain(|e| !e.is_dead());
    }

    /// Update the battle phase from the current roster.
    pub(crate) fn check_outcome(&mut self) {
        if self.phase != BattlePhase::Active {
            return;
        }
        let player_alive = self.player().is_some_and(|p| !p.is_dead());
        if !player_alive {
            self.phase = BattlePhase::Lost;
        } else if self.live_cpu_count() == 0 {
            self.phase = BattlePhase::Won;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> BattleState {
        let catalog = WeaponCatalog::standard();
        let fist = catalog.fist();
        BattleState::versus_cpus(
            SimConfig::default(),
            catalog,
            vec![Platform::new(0.0, 650.0, 1000.0, 50.0)],
            7,
            "Tester",
            fist,
            BTreeSet::new(),
            2,
        )
    }

    #[test]
    fn test_spawn_layout() {
        let state = test_state();
        assert_eq!(state.entities.len(), 3);
        let player = state.player().unwrap();
        assert_eq!(player.pos, DVec2::new(100.0, 300.0));
        assert_eq!(player.max_health, 100);
        assert!(!player.is_cpu);

        let cpus: Vec<_> = state.entities.iter().filter(|e| e.is_cpu).collect();
        assert_eq!(cpus[0].pos.x, 900.0);
        assert_eq!(cpus[1].pos.x, 800.0);
        assert_eq!(cpus[0].max_health, 80);
    }

    #[test]
    fn test_take_damage_clamps() {
        let mut state = test_state();
        let player_id = state.player_id;
        let player = state.entity_mut(player_id).unwrap();
        assert!(!player.take_damage(30));
        assert_eq!(player.health, 70);
        // Overkill clamps to zero and reports the death once
        assert!(player.take_damage(1000));
        assert_eq!(player.health, 0);
        assert!(!player.take_damage(10));
    }

    #[test]
    fn test_outcome_detection() {
        let mut state = test_state();
        for e in state.entities.iter_mut().filter(|e| e.is_cpu) {
            e.health = 0;
        }
        state.check_outcome();
        assert_eq!(state.phase, BattlePhase::Won);

        let mut state = test_state();
        let player_id = state.player_id;
        state.entity_mut(player_id).unwrap().health = 0;
        state.check_outcome();
        assert_eq!(state.phase, BattlePhase::Lost);
    }

    #[test]
    fn test_retire_dead_prunes_roster() {
        let mut state = test_state();
        let cpu_id = state.entities.iter().find(|e| e.is_cpu).unwrap().id;
        state.entity_mut(cpu_id).unwrap().health = 0;
        state.retire_dead();
        assert_eq!(state.entities.len(), 2);
        assert!(state.entity(cpu_id).is_none());
    }
}
