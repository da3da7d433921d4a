//! Static arena layouts.
//!
//! Every arena shares the same collision geometry: a full-width floor and
//! three staggered ledges. The names select presentation themes only.

use crate::config::SimConfig;
use crate::sim::Platform;

/// Available arena themes.
pub const MAP_NAMES: &[&str] = &["Street", "Desert", "Grassland", "Arena"];

/// The standard platform set for the given world size.
pub fn standard_platforms(config: &SimConfig) -> Vec<Platform> {
    let w = config.world_width;
    let h = config.world_height;
    vec![
        // Floor
        Platform::new(0.0, h - 50.0, w, 50.0),
        // Ledges, low to high
        Platform::new(200.0, h - 150.0, 200.0, 20.0),
        Platform::new(600.0, h - 250.0, 200.0, 20.0),
        Platform::new(400.0, h - 400.0, 200.0, 20.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_spans_world() {
        let config = SimConfig::default();
        let platforms = standard_platforms(&config);
        let floor = &platforms[0].rect;
        assert_eq!(floor.left(), 0.0);
        assert_eq!(floor.right(), config.world_width);
        assert_eq!(floor.top(), 650.0);
    }

    #[test]
    fn test_ledges_sit_above_floor() {
        let config = SimConfig::default();
        let platforms = standard_platforms(&config);
        assert_eq!(platforms.len(), 4);
        for ledge in &platforms[1..] {
            assert!(ledge.rect.top() < 650.0);
            assert_eq!(ledge.rect.width, 200.0);
            assert_eq!(ledge.rect.height, 20.0);
        }
    }

    #[test]
    fn test_map_names() {
        assert_eq!(MAP_NAMES.len(), 4);
        assert!(MAP_NAMES.contains(&"Street"));
    }
}
