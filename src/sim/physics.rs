//! Physics step: gravity, platform landing, world clamps.
//!
//! One call advances a single entity by one tick against the immutable
//! platform set. The step is a total function: it mutates only the
//! entity's position, velocity, and ground flag, and cannot fail.

use crate::config::SimConfig;
use crate::consts;

use super::state::{Entity, Platform};

/// Landing test: does a falling entity come to rest on this platform?
///
/// Triggers only while falling, with horizontal overlap, and with the
/// entity's bottom edge inside the band `[top, top + height + fall + slack]`.
/// The band grows with fall speed so fast entities cannot tunnel through
/// thin platforms in a single tick.
fn lands_on(entity: &Entity, platform: &Platform, fall_speed: f64) -> bool {
    if fall_speed <= 0.0 {
        return false;
    }
    let body = entity.bounds();
    if !body.overlaps_horizontally(&platform.rect) {
        return false;
    }
    let bottom = body.bottom();
    let top = platform.rect.top();
    bottom >= top && bottom <= top + platform.rect.height + fall_speed.abs() + consts::LANDING_SLACK
}

/// Advance one entity by one tick.
pub fn step(entity: &mut Entity, platforms: &[Platform], config: &SimConfig) {
    // Vertical: gravity, integrate, then resolve landings
    entity.vel.y += config.gravity;
    entity.pos.y += entity.vel.y;
    entity.on_ground = false;

    // Fall speed is sampled once so every platform sees the same band;
    // with several hits in one tick the last platform in list order wins.
    let fall_speed = entity.vel.y;
    for platform in platforms {
        if lands_on(entity, platform, fall_speed) {
            entity.pos.y = platform.rect.top() - consts::ENTITY_HEIGHT;
            entity.vel.y = 0.0;
            entity.on_ground = true;
        }
    }

    // World floor clamp
    if entity.bounds().bottom() > config.world_height {
        entity.pos.y = config.world_height - consts::ENTITY_HEIGHT;
        entity.vel.y = 0.0;
        entity.on_ground = true;
    }

    // Horizontal: integrate, clamp fully inside the world
    entity.pos.x += entity.vel.x;
    entity.pos.x = entity.pos.x.clamp(0.0, config.world_width - consts::ENTITY_WIDTH);
}
