//! Dijkstra-based road routing between a region's gates.

use std::cmp::Ordering;

use glam::IVec2;
use heap::Heap;
use util::s4;

use crate::region::{MAP_X, MAP_Y, Region, Side};
use crate::terrain::TerrainKind;

fn idx(p: IVec2) -> usize {
    p.y as usize * MAP_X + p.x as usize
}

fn edge_penalty(p: IVec2) -> i64 {
    let inner_ring = p.x == 1 || p.y == 1 || p.x == MAP_X as i32 - 2 || p.y == MAP_Y as i32 - 2;
    if inner_ring { 2 } else { 1 }
}

/// Route every gate pair the region needs connected, carving Path terrain
/// and zeroing height along the way.
pub fn carve_roads(region: &mut Region) {
    for (src, dst) in routes(region) {
        carve(region, src, dst);
    }
}

fn routes(region: &Region) -> Vec<(IVec2, IVec2)> {
    let gate = |side: Side| region.gate_inner(side);
    let (n, s, e, w) = (gate(Side::North), gate(Side::South), gate(Side::East), gate(Side::West));

    let mut out: Vec<(IVec2, IVec2)> = Vec::new();
    let mut push = |a: Option<IVec2>, b: Option<IVec2>| {
        if let (Some(a), Some(b)) = (a, b) {
            if a != b && !out.iter().any(|&(x, y)| (x == a && y == b) || (x == b && y == a)) {
                out.push((a, b));
            }
        }
    };

    if w.is_some() && e.is_some() {
        push(w, e);
    }
    if n.is_some() && s.is_some() {
        push(n, s);
    }
    if e.is_none() && w.is_some() {
        push(w, if n.is_some() { n } else { s });
    }
    if w.is_none() && e.is_some() {
        push(e, if n.is_some() { n } else { s });
    }
    if n.is_none() && s.is_some() {
        push(if e.is_some() { e } else { w }, s);
    }
    if s.is_none() && n.is_some() {
        push(if e.is_some() { e } else { w }, n);
    }
    out
}

fn carve(region: &mut Region, src: IVec2, dst: IVec2) {
    let size = MAP_X * MAP_Y;
    let mut dist = vec![i64::MAX; size];
    let mut prev = vec![None; size];
    let mut handles: Vec<Option<heap::Handle>> = vec![None; size];
    let mut heap: Heap<(i64, usize), _> = Heap::new(|a: &(i64, usize), b: &(i64, usize)| a.0.cmp(&b.0));

    dist[idx(src)] = 0;
    handles[idx(src)] = Some(heap.insert((0, idx(src))));

    while let Some((d, u_idx)) = heap.extract_min() {
        handles[u_idx] = None;
        if d > dist[u_idx] {
            continue;
        }
        let u = IVec2::new((u_idx % MAP_X) as i32, (u_idx / MAP_X) as i32);
        if u == dst {
            break;
        }

        for dir in s4::DIR {
            let v = u + dir;
            if !Region::in_interior(v) {
                continue;
            }
            let v_idx = idx(v);
            let new_cost = (d + region.height(u) as i64) * edge_penalty(v);
            if new_cost < dist[v_idx] {
                dist[v_idx] = new_cost;
                prev[v_idx] = Some(u);
                match handles[v_idx] {
                    Some(h) => {
                        heap.get_mut(h).unwrap().0 = new_cost;
                        heap.decrease_key(h);
                    }
                    None => handles[v_idx] = Some(heap.insert((new_cost, v_idx))),
                }
            }
        }
    }

    let mut cur = dst;
    while let Some(p) = prev[idx(cur)] {
        if region.terrain(cur) != TerrainKind::Gate {
            region.set_terrain(cur, TerrainKind::Path);
            region.set_height(cur, 0);
        }
        cur = p;
    }
}

#[cfg(test)]
mod tests {
    use util::srng;

    use super::*;
    use crate::region::Gates;
    use crate::{heightgen, terraingen};

    #[test]
    fn both_axes_are_connected_when_all_gates_present() {
        let mut region = Region::blank(Gates { n: 40, s: 40, e: 10, w: 10 });
        let mut rng = srng(&"roads-test");
        heightgen::generate(&mut region, &mut rng);
        terraingen::generate(&mut region, &mut rng);
        carve_roads(&mut region);

        let w = region.gate_inner(Side::West).unwrap();
        let e = region.gate_inner(Side::East).unwrap();
        let n = region.gate_inner(Side::North).unwrap();
        let s = region.gate_inner(Side::South).unwrap();
        assert!(connected_via_path(&region, w, e));
        assert!(connected_via_path(&region, n, s));
    }

    #[test]
    fn no_path_cell_has_nonzero_height() {
        let mut region = Region::blank(Gates { n: 40, s: 40, e: 10, w: 10 });
        let mut rng = srng(&"roads-height");
        heightgen::generate(&mut region, &mut rng);
        terraingen::generate(&mut region, &mut rng);
        carve_roads(&mut region);

        for p in Region::interior_cells() {
            if region.terrain(p) == TerrainKind::Path {
                assert_eq!(region.height(p), 0, "nonzero height on a path cell at {p:?}");
            }
        }
    }

    fn connected_via_path(region: &Region, from: IVec2, to: IVec2) -> bool {
        use std::collections::{HashSet, VecDeque};
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(from);
        seen.insert(from);
        while let Some(p) = queue.pop_front() {
            if p == to {
                return true;
            }
            for d in s4::DIR {
                let n = p + d;
                if !Region::in_bounds(n) || seen.contains(&n) {
                    continue;
                }
                let t = region.terrain(n);
                if t == TerrainKind::Path || t == TerrainKind::Gate || n == to {
                    seen.insert(n);
                    queue.push_back(n);
                }
            }
        }
        false
    }
}
