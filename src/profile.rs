//! Player profile: identity, currency, and the owned weapon set.
//!
//! Weapons are stored by display name so the save format stays readable;
//! names are resolved against the catalog at the point of use. Shop
//! operations validate first and leave the profile untouched on rejection.

use serde::{Deserialize, Serialize};

use crate::catalog::WeaponCatalog;
use crate::error::{GameError, GameResult};

/// Persistent player state, round-tripped through the save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub username: String,
    pub coins: i64,
    /// Owned weapon names, insertion order preserved
    pub inventory: Vec<String>,
    /// Name of the currently equipped weapon
    pub current_weapon: String,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            username: "Player".to_string(),
            coins: 0,
            inventory: vec!["Fist".to_string()],
            current_weapon: "Fist".to_string(),
        }
    }
}

impl PlayerProfile {
    /// Whether the named weapon is owned.
    pub fn owns(&self, name: &str) -> bool {
        self.inventory.iter().any(|w| w == name)
    }

    /// Buy a weapon from the shop. Owned weapons cannot be bought again;
    /// the caller equips those instead.
    pub fn buy(&mut self, catalog: &WeaponCatalog, name: &str) -> GameResult<()> {
        let id = catalog.resolve(name)?;
        if self.owns(name) {
            return Err(GameError::AlreadyOwned(name.to_string()));
        }
        let cost = catalog.spec(id).cost;
        if self.coins < cost {
            return Err(GameError::InsufficientFunds { cost, coins: self.coins });
        }
        self.coins -= cost;
        self.inventory.push(name.to_string());
        log::info!("bought {name} for {cost} coins ({} left)", self.coins);
        Ok(())
    }

    /// Equip an owned weapon.
    pub fn equip(&mut self, catalog: &WeaponCatalog, name: &str) -> GameResult<()> {
        catalog.resolve(name)?;
        if !self.owns(name) {
            return Err(GameError::InvalidEquip(name.to_string()));
        }
        self.current_weapon = name.to_string();
        Ok(())
    }

    /// Apply the coin delta from a finished battle. Coins never go
    /// negative.
    pub fn apply_battle_result(&mut self, coin_delta: i64) {
        self.coins = (self.coins + coin_delta).max(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_owns_fist() {
        let profile = PlayerProfile::default();
        assert_eq!(profile.username, "Player");
        assert_eq!(profile.coins, 0);
        assert!(profile.owns("Fist"));
        assert_eq!(profile.current_weapon, "Fist");
    }

    #[test]
    fn test_buy_deducts_and_adds() {
        let catalog = WeaponCatalog::standard();
        let mut profile = PlayerProfile { coins: 50, ..Default::default() };
        profile.buy(&catalog, "Water Gun").unwrap();
        assert_eq!(profile.coins, 20);
        assert!(profile.owns("Water Gun"));
    }

    #[test]
    fn test_buy_rejections_leave_profile_unchanged() {
        let catalog = WeaponCatalog::standard();
        let mut profile = PlayerProfile { coins: 10, ..Default::default() };
        let before = profile.clone();

        let err = profile.buy(&catalog, "Water Gun").unwrap_err();
        assert_eq!(err, GameError::InsufficientFunds { cost: 30, coins: 10 });
        assert_eq!(profile, before);

        let err = profile.buy(&catalog, "Death Ray").unwrap_err();
        assert_eq!(err, GameError::UnknownWeapon("Death Ray".to_string()));
        assert_eq!(profile, before);
    }

    #[test]
    fn test_buy_owned_is_rejected() {
        let catalog = WeaponCatalog::standard();
        let mut profile = PlayerProfile { coins: 100, ..Default::default() };
        let before = profile.clone();
        let err = profile.buy(&catalog, "Fist").unwrap_err();
        assert_eq!(err, GameError::AlreadyOwned("Fist".to_string()));
        assert_eq!(profile, before);
    }

    #[test]
    fn test_equip_requires_ownership() {
        let catalog = WeaponCatalog::standard();
        let mut profile = PlayerProfile { coins: 50, ..Default::default() };

        let err = profile.equip(&catalog, "Water Gun").unwrap_err();
        assert_eq!(err, GameError::InvalidEquip("Water Gun".to_string()));
        assert_eq!(profile.current_weapon, "Fist");

        profile.buy(&catalog, "Water Gun").unwrap();
        profile.equip(&catalog, "Water Gun").unwrap();
        assert_eq!(profile.current_weapon, "Water Gun");
    }

    #[test]
    fn test_battle_result_floors_at_zero() {
        let mut profile = PlayerProfile { coins: 10, ..Default::default() };
        profile.apply_battle_result(-20);
        assert_eq!(profile.coins, 0);
        profile.apply_battle_result(50);
        assert_eq!(profile.coins, 50);
    }
}
