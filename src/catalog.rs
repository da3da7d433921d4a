//! Static weapon catalog.
//!
//! The catalog is an immutable, process-wide data table loaded once at
//! startup and injected into whatever needs it. Weapon names are resolved
//! to a [`WeaponId`] exactly once; everything past that point works with
//! validated identifiers, so a bad name surfaces as an explicit
//! [`GameError::UnknownWeapon`] instead of a lookup failure mid-battle.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Validated index into the weapon catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeaponId(u16);

impl WeaponId {
    /// Returns the raw index value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// A single catalog entry. Immutable, shared, read-only.
#[derive(Debug, Clone, Serialize)]
pub struct WeaponSpec {
    /// Display name, unique within the catalog
    pub name: &'static str,
    /// Damage per hit
    pub damage: i32,
    /// Shop price in coins
    pub cost: i64,
    /// Attack rate stat; higher means a shorter cooldown
    pub attack_speed: i32,
    /// Melee weapons swing a hit-box, ranged ones spawn a projectile
    pub melee: bool,
    /// Explosive projectiles fly on a gravity arc
    pub explosive: bool,
    /// Effective reach, melee weapons only
    pub melee_range: Option<f64>,
}

/// The standard weapon table, ordered by cost. `Fist` is first and free.
const WEAPON_TABLE: &[WeaponSpec] = &[
    WeaponSpec { name: "Fist", damage: 8, cost: 0, attack_speed: 12, melee: true, explosive: false, melee_range: Some(40.0) },
    WeaponSpec { name: "Water Gun", damage: 10, cost: 30, attack_speed: 15, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Splat Bomb", damage: 12, cost: 40, attack_speed: 7, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Cork Gun", damage: 13, cost: 50, attack_speed: 16, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Confetti Bomb", damage: 14, cost: 60, attack_speed: 7, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Squirt Gun", damage: 15, cost: 70, attack_speed: 17, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Pie Bomb", damage: 16, cost: 80, attack_speed: 8, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Nerf Blaster", damage: 17, cost: 90, attack_speed: 18, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Whoopee Cushion", damage: 18, cost: 100, attack_speed: 9, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Bubble Gun", damage: 19, cost: 110, attack_speed: 14, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Cartoon Grenade", damage: 20, cost: 120, attack_speed: 8, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Banana Gun", damage: 21, cost: 130, attack_speed: 15, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Glitter Grenade", damage: 22, cost: 140, attack_speed: 8, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Paint Gun", damage: 23, cost: 150, attack_speed: 16, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Smoke Bomb", damage: 24, cost: 160, attack_speed: 7, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Potato Gun", damage: 25, cost: 170, attack_speed: 13, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Bubble Mine", damage: 26, cost: 180, attack_speed: 6, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Ray Gun", damage: 27, cost: 190, attack_speed: 20, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Rubber Rocket", damage: 28, cost: 200, attack_speed: 10, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Laser Pistol", damage: 29, cost: 210, attack_speed: 22, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "TNT Stick", damage: 30, cost: 220, attack_speed: 8, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Zap Gun", damage: 31, cost: 230, attack_speed: 21, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Foam Missile", damage: 32, cost: 240, attack_speed: 11, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Plasma Rifle", damage: 33, cost: 250, attack_speed: 19, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Sticky Bomb", damage: 34, cost: 260, attack_speed: 7, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Blaster Cannon", damage: 35, cost: 270, attack_speed: 17, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Super Grenade", damage: 36, cost: 280, attack_speed: 9, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Ion Blaster", damage: 38, cost: 300, attack_speed: 23, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Mega Rocket", damage: 40, cost: 320, attack_speed: 12, melee: false, explosive: true, melee_range: None },
    WeaponSpec { name: "Photon Cannon", damage: 42, cost: 350, attack_speed: 24, melee: false, explosive: false, melee_range: None },
    WeaponSpec { name: "Nuke Launcher", damage: 45, cost: 400, attack_speed: 10, melee: false, explosive: true, melee_range: None },
];

/// The weapon data table, keyed by validated [`WeaponId`].
#[derive(Debug, Clone)]
pub struct WeaponCatalog {
    specs: &'static [WeaponSpec],
}

impl Default for WeaponCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl WeaponCatalog {
    /// The standard catalog.
    pub fn standard() -> Self {
        Self { specs: WEAPON_TABLE }
    }

    /// Resolve a weapon name to its identifier.
    pub fn resolve(&self, name: &str) -> GameResult<WeaponId> {
        self.specs
            .iter()
            .position(|s| s.name == name)
            .map(|i| WeaponId(i as u16))
            .ok_or_else(|| GameError::UnknownWeapon(name.to_string()))
    }

    /// Look up the spec for a validated identifier.
    pub fn spec(&self, id: WeaponId) -> &WeaponSpec {
        &self.specs[id.0 as usize]
    }

    /// The free starting weapon.
    pub fn fist(&self) -> WeaponId {
        WeaponId(0)
    }

    /// Iterate all entries with their identifiers (catalog order).
    pub fn iter(&self) -> impl Iterator<Item = (WeaponId, &WeaponSpec)> {
        self.specs
            .iter()
            .enumerate()
            .map(|(i, s)| (WeaponId(i as u16), s))
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the catalog is empty (it never is for the standard table).
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
