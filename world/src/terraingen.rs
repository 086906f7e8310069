//! Biome seeding and diffusion, border materialization, gate installation.

use std::collections::VecDeque;

use glam::IVec2;
use rand::Rng;
use util::GameRng;

use crate::region::{Region, Side};
use crate::terrain::TerrainKind;

/// West and east neighbors are adopted far more readily than north/south,
/// producing horizontally elongated biomes.
const DIFFUSION_PROB: [(IVec2, f64); 4] = [
    (IVec2::new(-1, 0), 0.80),
    (IVec2::new(1, 0), 0.80),
    (IVec2::new(0, -1), 0.20),
    (IVec2::new(0, 1), 0.20),
];

pub fn generate(region: &mut Region, rng: &mut GameRng) {
    diffuse_biomes(region, rng);
    fill_remaining_blanks(region);
    materialize_border(region, rng);
    install_gates(region);
}

fn random_blank_interior_cell(region: &Region, rng: &mut GameRng) -> IVec2 {
    loop {
        let x = rng.random_range(1..crate::region::MAP_X as i32 - 1);
        let y = rng.random_range(1..crate::region::MAP_Y as i32 - 1);
        let p = IVec2::new(x, y);
        if region.terrain(p) == TerrainKind::Uninitialized {
            return p;
        }
    }
}

fn diffuse_biomes(region: &mut Region, rng: &mut GameRng) {
    let counts = [
        (rng.random_range(2..=5), TerrainKind::Grass),
        (rng.random_range(2..=5), TerrainKind::Clearing),
        (rng.random_range(1..=2), TerrainKind::Mountain),
        (rng.random_range(1..=2), TerrainKind::Forest),
        (rng.random_range(1..=2), TerrainKind::Water),
    ];

    let mut queue: VecDeque<(IVec2, TerrainKind)> = VecDeque::new();
    for (count, kind) in counts {
        for _ in 0..count {
            let p = random_blank_interior_cell(region, rng);
            region.set_terrain(p, kind);
            queue.push_back((p, kind));
        }
    }

    while let Some((p, kind)) = queue.pop_front() {
        let mut added_current = false;
        for (d, prob) in DIFFUSION_PROB {
            let n = p + d;
            if !Region::in_interior(n) || region.terrain(n) != TerrainKind::Uninitialized {
                continue;
            }
            if rng.random_bool(prob) {
                region.set_terrain(n, kind);
                queue.push_back((n, kind));
            } else if !added_current {
                queue.push_back((p, kind));
                added_current = true;
            }
        }
    }
}

/// Cells the diffusion never reached default to short grass. The source's
/// single diffusion pass isn't guaranteed to fully tile the interior; this
/// keeps invariant 3 (no uninitialized cell survives generation) without
/// reseeding another diffusion round.
fn fill_remaining_blanks(region: &mut Region) {
    for p in Region::interior_cells() {
        if region.terrain(p) == TerrainKind::Uninitialized {
            region.set_terrain(p, TerrainKind::Clearing);
        }
    }
}

fn materialize_border(region: &mut Region, rng: &mut GameRng) {
    for p in Region::border_cells() {
        let mut mountain = 0u32;
        let mut forest = 0u32;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = p + IVec2::new(dx, dy);
                if !Region::in_bounds(n) {
                    continue;
                }
                match region.terrain(n) {
                    TerrainKind::Mountain | TerrainKind::Boulder => mountain += 1,
                    TerrainKind::Forest | TerrainKind::Tree => forest += 1,
                    _ => {}
                }
            }
        }

        let mountain_selected = if mountain == forest {
            rng.random_bool(0.5)
        } else {
            let majority_is_mountain = mountain > forest;
            if rng.random_bool(0.9) { majority_is_mountain } else { !majority_is_mountain }
        };
        region.set_terrain(p, if mountain_selected { TerrainKind::Boulder } else { TerrainKind::Tree });
    }
}

fn install_gates(region: &mut Region) {
    for side in Side::ALL {
        if let Some(span) = region.gate_span(side) {
            for p in span {
                region.set_terrain(p, TerrainKind::Gate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use util::srng;

    use super::*;
    use crate::region::Gates;

    #[test]
    fn no_interior_cell_left_uninitialized() {
        let mut region = Region::blank(Gates { n: 10, s: 10, e: 5, w: 5 });
        let mut rng = srng(&"terraingen-test");
        generate(&mut region, &mut rng);
        for p in Region::interior_cells() {
            assert_ne!(region.terrain(p), TerrainKind::Uninitialized);
        }
    }

    #[test]
    fn border_is_tree_boulder_or_gate() {
        let mut region = Region::blank(Gates { n: 10, s: 10, e: 5, w: 5 });
        let mut rng = srng(&"terraingen-border");
        generate(&mut region, &mut rng);
        for p in Region::border_cells() {
            assert!(matches!(
                region.terrain(p),
                TerrainKind::Tree | TerrainKind::Boulder | TerrainKind::Gate
            ));
        }
    }

    #[test]
    fn gates_are_installed() {
        let mut region = Region::blank(Gates { n: 10, s: 10, e: 5, w: 5 });
        let mut rng = srng(&"terraingen-gates");
        generate(&mut region, &mut rng);
        assert_eq!(region.terrain(IVec2::new(10, 0)), TerrainKind::Gate);
        assert_eq!(region.terrain(IVec2::new(10, 1)), TerrainKind::Gate);
    }
}
