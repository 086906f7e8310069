//! Mart/Center siting: a 2x2 footprint against a carved path, placed with
//! probability decaying by distance from the world origin.

use glam::IVec2;
use rand::Rng;
use util::GameRng;

use crate::region::{MAP_X, MAP_Y, Region};
use crate::terrain::TerrainKind;

/// Bounded search so a region with no viable footprint (can happen on tiny
/// or path-starved maps) doesn't spin forever.
const MAX_ATTEMPTS: u32 = 10_000;

pub fn place_buildings(region: &mut Region, region_offset: IVec2, rng: &mut GameRng) {
    let d = region_offset.x.abs() + region_offset.y.abs();
    let chance = if d == 0 {
        100
    } else if d <= 200 {
        50 - 45 * d / 200
    } else {
        5
    };

    if rng.random_range(0..100) < chance {
        try_place(region, rng, TerrainKind::Mart);
    }
    if rng.random_range(0..100) < chance {
        try_place(region, rng, TerrainKind::Center);
    }
}

fn try_place(region: &mut Region, rng: &mut GameRng, kind: TerrainKind) {
    for _ in 0..MAX_ATTEMPTS {
        let x = rng.random_range(1..=MAP_X as i32 - 4);
        let y = rng.random_range(1..=MAP_Y as i32 - 4);
        if is_valid_footprint(region, x, y) {
            for p in footprint(x, y) {
                region.set_terrain(p, kind);
            }
            return;
        }
    }
}

fn footprint(x: i32, y: i32) -> [IVec2; 4] {
    [
        IVec2::new(x, y),
        IVec2::new(x + 1, y),
        IVec2::new(x, y + 1),
        IVec2::new(x + 1, y + 1),
    ]
}

fn is_valid_footprint(region: &Region, x: i32, y: i32) -> bool {
    if footprint(x, y)
        .iter()
        .any(|&p| matches!(region.terrain(p), TerrainKind::Mart | TerrainKind::Center | TerrainKind::Path))
    {
        return false;
    }

    let both_path = |a: IVec2, b: IVec2| {
        Region::in_bounds(a)
            && Region::in_bounds(b)
            && region.terrain(a) == TerrainKind::Path
            && region.terrain(b) == TerrainKind::Path
    };

    both_path(IVec2::new(x, y - 1), IVec2::new(x + 1, y - 1))
        || both_path(IVec2::new(x, y + 2), IVec2::new(x + 1, y + 2))
        || both_path(IVec2::new(x - 1, y), IVec2::new(x - 1, y + 1))
        || both_path(IVec2::new(x + 2, y), IVec2::new(x + 2, y + 1))
}
