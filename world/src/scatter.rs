//! Post-diffusion boulder and tree scatter.

use glam::IVec2;
use rand::Rng;
use util::GameRng;

use crate::region::{MAP_X, MAP_Y, Region};
use crate::terrain::TerrainKind;

const MIN_BOULDERS: u32 = 10;
const BOULDER_PROB: u32 = 95;
const MIN_TREES: u32 = 10;
const TREE_PROB: u32 = 95;

pub fn scatter(region: &mut Region, rng: &mut GameRng) {
    scatter_kind(
        region,
        rng,
        MIN_BOULDERS,
        BOULDER_PROB,
        TerrainKind::Boulder,
        &[TerrainKind::Forest, TerrainKind::Path, TerrainKind::Gate],
    );
    scatter_kind(
        region,
        rng,
        MIN_TREES,
        TREE_PROB,
        TerrainKind::Tree,
        &[TerrainKind::Mountain, TerrainKind::Path, TerrainKind::Water, TerrainKind::Gate],
    );
}

fn scatter_kind(
    region: &mut Region,
    rng: &mut GameRng,
    min: u32,
    prob: u32,
    kind: TerrainKind,
    forbidden: &[TerrainKind],
) {
    let mut i = 0;
    while i < min || rng.random_range(0..100) < prob {
        let p = IVec2::new(
            rng.random_range(1..MAP_X as i32 - 1),
            rng.random_range(1..MAP_Y as i32 - 1),
        );
        if !forbidden.contains(&region.terrain(p)) {
            region.set_terrain(p, kind);
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use util::srng;

    use super::*;
    use crate::region::Gates;

    #[test]
    fn never_overwrites_forbidden_terrain() {
        let mut region = Region::blank(Gates { n: 10, s: 10, e: 5, w: 5 });
        for p in Region::interior_cells() {
            region.set_terrain(p, TerrainKind::Path);
        }
        let mut rng = srng(&"scatter-forbidden");
        scatter(&mut region, &mut rng);
        for p in Region::interior_cells() {
            assert_eq!(region.terrain(p), TerrainKind::Path);
        }
    }

    #[test]
    fn places_at_least_the_minimum() {
        let mut region = Region::blank(Gates { n: 10, s: 10, e: 5, w: 5 });
        for p in Region::interior_cells() {
            region.set_terrain(p, TerrainKind::Clearing);
        }
        let mut rng = srng(&"scatter-minimum");
        scatter(&mut region, &mut rng);
        let boulders = Region::interior_cells()
            .filter(|&p| region.terrain(p) == TerrainKind::Boulder)
            .count();
        let trees = Region::interior_cells()
            .filter(|&p| region.terrain(p) == TerrainKind::Tree)
            .count();
        assert!(boulders >= 1);
        assert!(trees >= 1);
    }
}
