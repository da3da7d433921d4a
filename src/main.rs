//! Headless battle runner.
//!
//! Loads the player profile, runs one battle against two CPUs at a fixed
//! 60 ticks per second with the player on autopilot, then applies the coin
//! result and saves the profile. Useful for exercising the simulation
//! end to end without a presentation layer.

use std::collections::BTreeSet;
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use battle_street::sim::{self, BattlePhase, BattleState, TickInput};
use battle_street::{consts, maps, persistence, SimConfig, WeaponCatalog};

const NUM_CPUS: usize = 2;
const MAX_TICKS: u64 = 60 * 60 * consts::TICK_RATE;

fn main() {
    env_logger::init();

    let catalog = WeaponCatalog::standard();
    let save_path = Path::new(persistence::SAVE_FILE);
    let mut profile = persistence::load_profile(save_path).unwrap_or_default();
    log::info!(
        "profile {}: {} coins, {} weapons",
        profile.username,
        profile.coins,
        profile.inventory.len()
    );

    let weapon = match catalog.resolve(&profile.current_weapon) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("{e}; falling back to Fist");
            catalog.fist()
        }
    };
    let inventory: BTreeSet<_> = profile
        .inventory
        .iter()
        .filter_map(|name| catalog.resolve(name).ok())
        .collect();

    let config = SimConfig::default();
    let platforms = maps::standard_platforms(&config);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut state = BattleState::versus_cpus(
        config,
        catalog,
        platforms,
        seed,
        profile.username.clone(),
        weapon,
        inventory,
        NUM_CPUS,
    );
    log::info!("battle start: seed {seed}, {NUM_CPUS} opponents, map {}", maps::MAP_NAMES[0]);

    let tick_duration = Duration::from_micros(1_000_000 / consts::TICK_RATE);
    while state.phase == BattlePhase::Active && state.tick < MAX_TICKS {
        let started = Instant::now();
        let input = autopilot(&state);
        sim::tick(&mut state, &input);
        if let Some(remaining) = tick_duration.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    match state.phase {
        BattlePhase::Won => log::info!("victory after {} ticks", state.tick),
        BattlePhase::Lost => log::info!("defeat after {} ticks", state.tick),
        BattlePhase::Active => log::warn!("battle timed out after {} ticks", state.tick),
    }

    profile.apply_battle_result(state.coin_delta);
    log::info!("coin delta {:+}, now {} coins", state.coin_delta, profile.coins);
    persistence::save_profile(save_path, &profile);
}

/// Drive the player with the same reactive controller the CPUs use,
/// aimed at the nearest opponent.
fn autopilot(state: &BattleState) -> TickInput {
    let Some(player) = state.player() else {
        return TickInput::default();
    };
    let target = state
        .entities
        .iter()
        .filter(|e| e.is_cpu && !e.is_dead())
        .min_by(|a, b| {
            let da = (a.center_x() - player.center_x()).abs();
            let db = (b.center_x() - player.center_x()).abs();
            da.total_cmp(&db)
        });
    let Some(target) = target else {
        return TickInput::default();
    };

    let spec = state.catalog.spec(player.weapon);
    let range = if spec.melee {
        spec.melee_range.unwrap_or(state.config.cpu_melee_fallback_range)
    } else {
        state.config.cpu_ranged_range
    };
    let dist = (target.center_x() - player.center_x()).abs();
    let toward_right = player.center_x() < target.center_x();
    TickInput {
        move_right: dist > range && toward_right,
        move_left: dist > range && !toward_right,
        jump: target.bounds().bottom() < player.pos.y && player.on_ground,
        attack: dist < range + 50.0,
    }
}
