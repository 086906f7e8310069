//! Per-turn multi-source cost fields, one per pursuer class.

use glam::IVec2;
use heap::Heap;
use util::s8;
use world::{CharacterClass, IMPASSABLE, Region};

/// Unreachable/impassable sentinel in a distance field.
pub const UNREACHABLE: i32 = i32::MAX;

/// A region-sized grid of distances from the player, under one class's
/// cost table.
pub struct DistanceField {
    dist: Vec<i32>,
}

impl DistanceField {
    fn idx(p: IVec2) -> usize {
        p.y as usize * world::MAP_X + p.x as usize
    }

    pub fn get(&self, p: IVec2) -> i32 {
        self.dist[Self::idx(p)]
    }

    /// Run Dijkstra from `player` over `region`'s interior, under `class`'s
    /// cost table, with 8-connectivity.
    pub fn compute(region: &Region, player: IVec2, class: CharacterClass) -> DistanceField {
        let size = world::MAP_X * world::MAP_Y;
        let mut dist = vec![UNREACHABLE; size];
        let mut handles: Vec<Option<heap::Handle>> = vec![None; size];
        let mut heap: Heap<(i32, usize), _> =
            Heap::new(|a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0));

        dist[Self::idx(player)] = 0;
        handles[Self::idx(player)] = Some(heap.insert((0, Self::idx(player))));

        for p in Region::interior_cells() {
            if p == player {
                continue;
            }
            if class.can_enter(region.terrain(p)) {
                let idx = Self::idx(p);
                handles[idx] = Some(heap.insert((UNREACHABLE, idx)));
            }
        }

        while let Some((d, u_idx)) = heap.extract_min() {
            handles[u_idx] = None;
            if d > dist[u_idx] {
                continue;
            }
            let u = IVec2::new((u_idx % world::MAP_X) as i32, (u_idx / world::MAP_X) as i32);

            // Cost charged for stepping away from `u` is `u`'s own terrain
            // cost, not the destination's — the source's `ter_cost(c->pos,
            // ...)` pathfind() applies to every neighbor it relaxes. The
            // player's cell is the one exception: it's always expandable
            // and the step away from it is free ("PC's terrain cost is not
            // charged, PC is the source"), so a player standing on terrain
            // this class couldn't otherwise enter (e.g. a Gate, for Hiker)
            // still seeds a useful field instead of leaving it stranded.
            let leave_cost = if u == player { 0 } else { class.cost(region.terrain(u)) };
            if leave_cost == IMPASSABLE {
                continue;
            }

            for dir in s8::DIR {
                let v = u + dir;
                if !Region::in_interior(v) {
                    continue;
                }
                let v_idx = Self::idx(v);
                // Only cells still holding a live handle are both passable
                // (they were inserted in the first place) and unfinalized.
                let Some(h) = handles[v_idx] else { continue };
                let new_dist = d.saturating_add(leave_cost as i32);
                if new_dist < dist[v_idx] {
                    dist[v_idx] = new_dist;
                    heap.get_mut(h).unwrap().0 = new_dist;
                    heap.decrease_key(h);
                }
            }
        }

        DistanceField { dist }
    }
}

/// Both pursuer distance fields for the current turn.
pub struct CostFields {
    pub hiker: DistanceField,
    pub rival: DistanceField,
}

impl CostFields {
    pub fn compute(region: &Region, player: IVec2) -> CostFields {
        CostFields {
            hiker: DistanceField::compute(region, player, CharacterClass::Hiker),
            rival: DistanceField::compute(region, player, CharacterClass::Rival),
        }
    }
}

#[cfg(test)]
mod tests {
    use world::Gates;

    use super::*;

    fn open_region() -> Region {
        let mut region = Region::blank(Gates { n: 40, s: 40, e: 10, w: 10 });
        for p in Region::interior_cells() {
            region.set_terrain(p, world::TerrainKind::Clearing);
        }
        region
    }

    #[test]
    fn player_cell_is_zero() {
        let region = open_region();
        let player = IVec2::new(5, 5);
        let field = DistanceField::compute(&region, player, CharacterClass::Hiker);
        assert_eq!(field.get(player), 0);
    }

    #[test]
    fn distance_grows_with_cost_along_a_clear_field() {
        let region = open_region();
        let player = IVec2::new(5, 5);
        let field = DistanceField::compute(&region, player, CharacterClass::Hiker);
        // The player's immediate 8-neighborhood is reachable at distance 0
        // (stepping away from the player's own cell is free); cost only
        // accrues from the second ring outward.
        assert_eq!(field.get(IVec2::new(6, 5)), 0);
        let near = field.get(IVec2::new(7, 5));
        let far = field.get(IVec2::new(10, 5));
        assert!(near > 0);
        assert!(far > near);
    }

    #[test]
    fn cell_behind_a_boulder_wall_is_unreachable() {
        let mut region = open_region();
        for y in 1..world::MAP_Y as i32 - 1 {
            region.set_terrain(IVec2::new(10, y), world::TerrainKind::Boulder);
        }
        let player = IVec2::new(5, 5);
        let field = DistanceField::compute(&region, player, CharacterClass::Hiker);
        assert_eq!(field.get(IVec2::new(15, 5)), UNREACHABLE);
    }

    /// Every finite-distance cell must be explained by at least one neighbor
    /// one relaxation step closer to the source (spec §8, property 7).
    #[test]
    fn every_finite_cell_is_explained_by_a_neighbor() {
        let mut region = open_region();
        region.set_terrain(IVec2::new(20, 10), world::TerrainKind::Mountain);
        region.set_terrain(IVec2::new(21, 11), world::TerrainKind::Forest);
        let player = IVec2::new(5, 5);
        let field = DistanceField::compute(&region, player, CharacterClass::Hiker);

        for p in Region::interior_cells() {
            if p == player {
                continue;
            }
            let d = field.get(p);
            if d == UNREACHABLE {
                continue;
            }
            let explained = s8::DIR.iter().any(|&dir| {
                let n = p - dir;
                if !Region::in_interior(n) {
                    return false;
                }
                if field.get(n) == UNREACHABLE {
                    return false;
                }
                // Stepping away from `n` costs `n`'s own terrain, except the
                // player's cell, which is always free to leave.
                let cost = if n == player { 0 } else { CharacterClass::Hiker.cost(region.terrain(n)) };
                cost != world::IMPASSABLE && d == field.get(n).saturating_add(cost as i32)
            });
            assert!(explained, "no relaxing neighbor found for {p:?} at distance {d}");
        }
    }

    /// Cross-checks the heap-driven Dijkstra against a naive fixed-point
    /// relaxation (repeated full scans until nothing changes) on a small
    /// hand-built region (spec §8, property 8).
    #[test]
    fn matches_a_naive_all_pairs_reference() {
        let mut region = open_region();
        // A few obstacles and a cheap terrain patch to exercise relaxation
        // order rather than a uniform field.
        for p in [IVec2::new(8, 10), IVec2::new(9, 9), IVec2::new(9, 11)] {
            region.set_terrain(p, world::TerrainKind::Mountain);
        }
        for p in [IVec2::new(12, 3), IVec2::new(13, 3), IVec2::new(12, 4)] {
            region.set_terrain(p, world::TerrainKind::Path);
        }
        let player = IVec2::new(5, 5);

        let field = DistanceField::compute(&region, player, CharacterClass::Hiker);
        let naive = naive_dijkstra(&region, player, CharacterClass::Hiker);

        for p in Region::interior_cells() {
            assert_eq!(field.get(p), naive[&p], "mismatch at {p:?}");
        }
    }

    #[test]
    fn recomputing_twice_without_moving_is_idempotent() {
        let region = open_region();
        let player = IVec2::new(12, 8);
        let a = DistanceField::compute(&region, player, CharacterClass::Rival);
        let b = DistanceField::compute(&region, player, CharacterClass::Rival);
        for p in Region::interior_cells() {
            assert_eq!(a.get(p), b.get(p));
        }
    }

    /// Brute-force reference: relax every interior edge repeatedly until a
    /// full pass makes no further change. Intentionally not heap-based, so
    /// it independently corroborates [`DistanceField::compute`]'s result.
    fn naive_dijkstra(
        region: &Region,
        player: IVec2,
        class: CharacterClass,
    ) -> util::HashMap<IVec2, i32> {
        let mut dist: util::HashMap<IVec2, i32> =
            Region::interior_cells().map(|p| (p, UNREACHABLE)).collect();
        dist.insert(player, 0);

        loop {
            let mut changed = false;
            for u in Region::interior_cells() {
                let du = dist[&u];
                if du == UNREACHABLE {
                    continue;
                }
                let leave_cost = if u == player { 0 } else { class.cost(region.terrain(u)) };
                if leave_cost == world::IMPASSABLE {
                    continue;
                }
                for dir in s8::DIR {
                    let v = u + dir;
                    if !Region::in_interior(v) || (v != player && !class.can_enter(region.terrain(v))) {
                        continue;
                    }
                    let nd = du.saturating_add(leave_cost as i32);
                    if nd < dist[&v] {
                        dist.insert(v, nd);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        dist
    }
}
