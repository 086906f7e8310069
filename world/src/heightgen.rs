//! Height field generation: seeded flood fill plus Gaussian smoothing.

use std::collections::VecDeque;

use glam::IVec2;
use util::{GameRng, s8};

use crate::region::{MAP_X, MAP_Y, Region};
use rand::Rng;

/// The 13 discrete height values seeded before diffusion.
const SEEDS: [u8; 13] = [1, 21, 41, 61, 81, 101, 121, 141, 161, 181, 201, 221, 241];

/// 1D Gaussian taps, applied separably (horizontal pass then vertical),
/// twice over.
const WEIGHTS: [i64; 5] = [1, 4, 7, 4, 1];

pub fn generate(region: &mut Region, rng: &mut GameRng) {
    seed_and_diffuse(region, rng);
    smooth(region);
    smooth(region);
}

fn seed_and_diffuse(region: &mut Region, rng: &mut GameRng) {
    let mut assigned = [[false; MAP_X]; MAP_Y];
    let mut queue: VecDeque<IVec2> = VecDeque::new();

    for &value in &SEEDS {
        let p = loop {
            let x = rng.random_range(0..MAP_X as i32);
            let y = rng.random_range(0..MAP_Y as i32);
            if !assigned[y as usize][x as usize] {
                break IVec2::new(x, y);
            }
        };
        assigned[p.y as usize][p.x as usize] = true;
        region.set_height(p, value);
        queue.push_back(p);
    }

    while let Some(p) = queue.pop_front() {
        let value = region.height(p);
        for d in s8::DIR {
            let n = p + d;
            if Region::in_bounds(n) && !assigned[n.y as usize][n.x as usize] {
                assigned[n.y as usize][n.x as usize] = true;
                region.set_height(n, value);
                queue.push_back(n);
            }
        }
    }
}

fn smooth(region: &mut Region) {
    let mut tmp = [[0u32; MAP_X]; MAP_Y];

    for y in 0..MAP_Y {
        for x in 0..MAP_X {
            let mut sum = 0i64;
            let mut wsum = 0i64;
            for k in -2i32..=2 {
                let xx = x as i32 + k;
                if xx >= 0 && (xx as usize) < MAP_X {
                    let w = WEIGHTS[(k + 2) as usize];
                    sum += w * region.height(IVec2::new(xx, y as i32)) as i64;
                    wsum += w;
                }
            }
            tmp[y][x] = (sum / wsum) as u32;
        }
    }
    for y in 0..MAP_Y {
        for x in 0..MAP_X {
            region.set_height(IVec2::new(x as i32, y as i32), tmp[y][x] as u8);
        }
    }

    for x in 0..MAP_X {
        for y in 0..MAP_Y {
            let mut sum = 0i64;
            let mut wsum = 0i64;
            for k in -2i32..=2 {
                let yy = y as i32 + k;
                if yy >= 0 && (yy as usize) < MAP_Y {
                    let w = WEIGHTS[(k + 2) as usize];
                    sum += w * region.height(IVec2::new(x as i32, yy)) as i64;
                    wsum += w;
                }
            }
            tmp[y][x] = (sum / wsum) as u32;
        }
    }
    for y in 0..MAP_Y {
        for x in 0..MAP_X {
            region.set_height(IVec2::new(x as i32, y as i32), tmp[y][x] as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use util::srng;

    use super::*;
    use crate::region::Gates;

    #[test]
    fn every_cell_gets_a_height() {
        let mut rng = srng(&"heightgen-test");
        let mut region = Region::blank(Gates::default());
        generate(&mut region, &mut rng);
        // All seed values are >= 1, and smoothing only averages existing
        // values, so nothing should remain at the pre-generation default.
        let nonzero = Region::cells().filter(|&p| region.height(p) > 0).count();
        assert_eq!(nonzero, MAP_X * MAP_Y);
    }

    #[test]
    fn deterministic_given_same_seed() {
        let mut a = Region::blank(Gates::default());
        generate(&mut a, &mut srng(&"same"));
        let mut b = Region::blank(Gates::default());
        generate(&mut b, &mut srng(&"same"));
        for p in Region::cells() {
            assert_eq!(a.height(p), b.height(p));
        }
    }
}
