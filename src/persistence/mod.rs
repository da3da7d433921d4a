//! Profile persistence.
//!
//! The profile is stored as one small JSON file. Loading is forgiving: a
//! missing or unreadable file yields `None` and the caller falls back to
//! defaults. Saving writes to a temp file first and renames it into place
//! so a crash mid-write never leaves a truncated save behind.

use std::fs;
use std::path::Path;

use crate::profile::PlayerProfile;

/// Default save file name, next to the executable's working directory.
pub const SAVE_FILE: &str = "battle_street_save.json";

/// Load the profile from `path`. Returns `None` (never an error) when the
/// file is missing or corrupt.
pub fn load_profile(path: &Path) -> Option<PlayerProfile> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("no save at {}: {e}", path.display());
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("corrupt save at {}: {e}", path.display());
            None
        }
    }
}

/// Save the profile to `path`. Failures are logged and swallowed; losing
/// one save is preferable to aborting the session.
pub fn save_profile(path: &Path, profile: &PlayerProfile) {
    let json = match serde_json::to_string_pretty(profile) {
        Ok(json) => json,
        Err(e) => {
            log::error!("serialize profile: {e}");
            return;
        }
    };
    let tmp = path.with_extension("json.tmp");
    if let Err(e) = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, path)) {
        log::error!("write save to {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("battle_street_test_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_round_trip() {
        let path = temp_path("round_trip.json");
        let mut profile = PlayerProfile {
            username: "Rook".to_string(),
            coins: 120,
            ..Default::default()
        };
        profile.inventory.push("Water Gun".to_string());
        profile.current_weapon = "Water Gun".to_string();

        save_profile(&path, &profile);
        let loaded = load_profile(&path).unwrap();
        assert_eq!(loaded, profile);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_yields_none() {
        let path = temp_path("definitely_missing.json");
        assert!(load_profile(&path).is_none());
    }

    #[test]
    fn test_corrupt_file_yields_none() {
        let path = temp_path("corrupt.json");
        std::fs::write(&path, "{not json at all").unwrap();
        assert!(load_profile(&path).is_none());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let path = temp_path("no_tmp.json");
        save_profile(&path, &PlayerProfile::default());
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let _ = std::fs::remove_file(&path);
    }
}
