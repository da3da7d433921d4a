//! Error types for catalog and shop operations.
//!
//! Simulation steps are total functions and never fail; errors only arise
//! at the edges (weapon lookup, purchase, equip). A rejected operation
//! leaves no state change behind.

use thiserror::Error;

/// Game operation error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Weapon name not present in the catalog
    #[error("unknown weapon: {0:?}")]
    UnknownWeapon(String),
    /// Purchase of a weapon already in the inventory
    #[error("already owned: {0:?}")]
    AlreadyOwned(String),
    /// Purchase attempted without enough currency
    #[error("insufficient funds: need {cost} coins, have {coins}")]
    InsufficientFunds {
        /// Price of the weapon
        cost: i64,
        /// Coins available
        coins: i64,
    },
    /// Equipping a weapon that is not owned
    #[error("cannot equip unowned weapon: {0:?}")]
    InvalidEquip(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
