use glam::IVec2;
use rand::seq::IndexedRandom;

use crate::terrain::TerrainKind;

/// Columns in a region.
pub const MAP_X: usize = 80;
/// Rows in a region.
pub const MAP_Y: usize = 21;

/// Sentinel gate offset meaning "no gate on this side".
pub const NO_GATE: i32 = -1;

/// The four border gate offsets of a region.
///
/// `n`/`s` are x-offsets (which column the gate sits on); `e`/`w` are
/// y-offsets (which row). `NO_GATE` means the corresponding side faces the
/// edge of the world and has no opening.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Gates {
    pub n: i32,
    pub s: i32,
    pub e: i32,
    pub w: i32,
}

/// One procedurally generated tile map.
pub struct Region {
    terrain: Box<[[TerrainKind; MAP_X]; MAP_Y]>,
    height: Box<[[u8; MAP_X]; MAP_Y]>,
    pub gates: Gates,
}

impl Region {
    pub fn blank(gates: Gates) -> Self {
        Region {
            terrain: Box::new([[TerrainKind::Uninitialized; MAP_X]; MAP_Y]),
            height: Box::new([[0; MAP_X]; MAP_Y]),
            gates,
        }
    }

    pub fn in_bounds(p: IVec2) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < MAP_X && (p.y as usize) < MAP_Y
    }

    /// Cells strictly inside the border ring.
    pub fn in_interior(p: IVec2) -> bool {
        p.x >= 1
            && p.y >= 1
            && (p.x as usize) < MAP_X - 1
            && (p.y as usize) < MAP_Y - 1
    }

    pub fn is_border(p: IVec2) -> bool {
        Self::in_bounds(p) && !Self::in_interior(p)
    }

    pub fn terrain(&self, p: IVec2) -> TerrainKind {
        self.terrain[p.y as usize][p.x as usize]
    }

    pub fn set_terrain(&mut self, p: IVec2, kind: TerrainKind) {
        self.terrain[p.y as usize][p.x as usize] = kind;
    }

    pub fn height(&self, p: IVec2) -> u8 {
        self.height[p.y as usize][p.x as usize]
    }

    pub fn set_height(&mut self, p: IVec2, value: u8) {
        self.height[p.y as usize][p.x as usize] = value;
    }

    pub fn cells() -> impl Iterator<Item = IVec2> {
        (0..MAP_Y as i32)
            .flat_map(|y| (0..MAP_X as i32).map(move |x| IVec2::new(x, y)))
    }

    pub fn interior_cells() -> impl Iterator<Item = IVec2> {
        Self::cells().filter(|&p| Self::in_interior(p))
    }

    pub fn border_cells() -> impl Iterator<Item = IVec2> {
        Self::cells().filter(|&p| Self::is_border(p))
    }

    /// The two cells spanning a gate, outermost first, or `None` if that
    /// side has no gate.
    pub fn gate_span(&self, side: Side) -> Option<[IVec2; 2]> {
        let offset = match side {
            Side::North => self.gates.n,
            Side::South => self.gates.s,
            Side::East => self.gates.e,
            Side::West => self.gates.w,
        };
        if offset == NO_GATE {
            return None;
        }
        Some(match side {
            Side::North => [IVec2::new(offset, 0), IVec2::new(offset, 1)],
            Side::South => [
                IVec2::new(offset, MAP_Y as i32 - 1),
                IVec2::new(offset, MAP_Y as i32 - 2),
            ],
            Side::East => [
                IVec2::new(MAP_X as i32 - 1, offset),
                IVec2::new(MAP_X as i32 - 2, offset),
            ],
            Side::West => [IVec2::new(0, offset), IVec2::new(1, offset)],
        })
    }

    /// The interior cell of a gate (the one a road route should target),
    /// `None` if that side has no gate.
    pub fn gate_inner(&self, side: Side) -> Option<IVec2> {
        self.gate_span(side).map(|span| span[1])
    }

    /// A uniformly random interior Path cell. Every generated region carves
    /// at least one (roads always connect at least one gate pair), so this
    /// is the spawn rule both the NPC roster and the player use (mirrors
    /// the source's `init_pc`/`init_npcs`, which reroll until they land on
    /// `ter_path`).
    pub fn random_path_cell(&self, rng: &mut impl rand::Rng) -> IVec2 {
        let paths: Vec<IVec2> =
            Self::interior_cells().filter(|&p| self.terrain(p) == TerrainKind::Path).collect();
        *paths.choose(rng).expect("a generated region always carves at least one path")
    }
}

/// A region border side.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }

    /// Upper bound (inclusive) of the valid gate offset range on this side.
    pub fn max_offset(self) -> i32 {
        match self {
            Side::North | Side::South => MAP_X as i32 - 2,
            Side::East | Side::West => MAP_Y as i32 - 2,
        }
    }

    /// World-grid step a region cursor takes when crossing this side.
    pub fn offset(self) -> IVec2 {
        match self {
            Side::North => IVec2::new(0, -1),
            Side::South => IVec2::new(0, 1),
            Side::East => IVec2::new(1, 0),
            Side::West => IVec2::new(-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_excludes_border() {
        assert!(!Region::in_interior(IVec2::new(0, 0)));
        assert!(!Region::in_interior(IVec2::new(MAP_X as i32 - 1, 5)));
        assert!(Region::in_interior(IVec2::new(1, 1)));
        assert!(Region::in_interior(IVec2::new(
            MAP_X as i32 - 2,
            MAP_Y as i32 - 2
        )));
    }

    #[test]
    fn gate_span_is_none_without_gate() {
        let r = Region::blank(Gates { n: NO_GATE, s: 5, e: 5, w: 5 });
        assert!(r.gate_span(Side::North).is_none());
        assert!(r.gate_span(Side::South).is_some());
    }

    #[test]
    fn north_gate_spans_border_and_interior_row() {
        let r = Region::blank(Gates { n: 10, s: NO_GATE, e: NO_GATE, w: NO_GATE });
        let span = r.gate_span(Side::North).unwrap();
        assert_eq!(span[0], IVec2::new(10, 0));
        assert_eq!(span[1], IVec2::new(10, 1));
    }
}
