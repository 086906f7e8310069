use anyhow::{Result, bail};
use glam::IVec2;
use log::info;
use rand::Rng;
use util::srng;

use crate::region::{Gates, NO_GATE, Region, Side};
use crate::{buildings, heightgen, roads, scatter, terraingen};

/// Regions per side of the sparse world grid.
pub const WORLD_SIZE: i32 = 401;
/// Region index of the world's center, where play starts.
pub const ORIGIN: i32 = WORLD_SIZE / 2;

/// Sparse 401x401 grid of lazily generated regions, plus a cursor marking
/// which region is "current".
pub struct World {
    regions: Vec<Option<Box<Region>>>,
    cursor: IVec2,
    seed: u64,
}

impl World {
    pub fn new(seed: u64) -> Self {
        let mut world = World {
            regions: (0..(WORLD_SIZE * WORLD_SIZE) as usize).map(|_| None).collect(),
            cursor: IVec2::new(ORIGIN, ORIGIN),
            seed,
        };
        world.ensure_generated(world.cursor);
        world
    }

    pub fn in_world_bounds(p: IVec2) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < WORLD_SIZE && p.y < WORLD_SIZE
    }

    fn slot(p: IVec2) -> usize {
        p.y as usize * WORLD_SIZE as usize + p.x as usize
    }

    /// Absolute cursor index into the world grid.
    pub fn cursor(&self) -> IVec2 {
        self.cursor
    }

    /// Cursor position relative to the world origin, the coordinate frame
    /// status lines and `f x y` teleports are expressed in.
    pub fn relative_cursor(&self) -> IVec2 {
        self.cursor - IVec2::new(ORIGIN, ORIGIN)
    }

    pub fn current(&self) -> &Region {
        self.regions[Self::slot(self.cursor)].as_ref().expect("current region not generated")
    }

    pub fn current_mut(&mut self) -> &mut Region {
        self.regions[Self::slot(self.cursor)].as_mut().expect("current region not generated")
    }

    pub fn region_at(&self, p: IVec2) -> Option<&Region> {
        if !Self::in_world_bounds(p) {
            return None;
        }
        self.regions[Self::slot(p)].as_deref()
    }

    /// Move the cursor one step and lazily generate the destination region.
    pub fn step(&mut self, dir: IVec2) -> Result<()> {
        let target = self.cursor + dir;
        if !Self::in_world_bounds(target) {
            bail!("cannot leave the world");
        }
        self.cursor = target;
        self.ensure_generated(target);
        Ok(())
    }

    /// Jump directly to a world-relative coordinate.
    pub fn teleport(&mut self, rel: IVec2) -> Result<()> {
        let half = WORLD_SIZE / 2;
        if rel.x.abs() > half || rel.y.abs() > half {
            bail!("coordinate out of range");
        }
        self.cursor = IVec2::new(ORIGIN, ORIGIN) + rel;
        self.ensure_generated(self.cursor);
        Ok(())
    }

    fn ensure_generated(&mut self, p: IVec2) {
        if self.regions[Self::slot(p)].is_some() {
            return;
        }
        info!("Generating region {p:?}...");

        let gates = self.reconcile_gates(p);
        let mut region = Region::blank(gates);
        let mut rng = srng(&(self.seed, p.x, p.y));

        heightgen::generate(&mut region, &mut rng);
        terraingen::generate(&mut region, &mut rng);
        scatter::scatter(&mut region, &mut rng);
        roads::carve_roads(&mut region);
        buildings::place_buildings(&mut region, p - IVec2::new(ORIGIN, ORIGIN), &mut rng);

        self.regions[Self::slot(p)] = Some(Box::new(region));
    }

    /// Resolve the four gate offsets for a not-yet-generated region: copy
    /// from an already-generated neighbor's matching side where possible,
    /// otherwise roll a fresh offset; a side facing the world edge never
    /// gets a gate.
    fn reconcile_gates(&self, p: IVec2) -> Gates {
        let mut rng = srng(&(self.seed, p.x, p.y, "gates"));
        let mut gate = |side: Side, towards: IVec2| -> i32 {
            let neighbor_pos = p + towards;
            if !Self::in_world_bounds(neighbor_pos) {
                return NO_GATE;
            }
            if let Some(neighbor) = self.region_at(neighbor_pos) {
                let opposite = side.opposite();
                return match opposite {
                    Side::North => neighbor.gates.n,
                    Side::South => neighbor.gates.s,
                    Side::East => neighbor.gates.e,
                    Side::West => neighbor.gates.w,
                };
            }
            1 + rng.random_range(0..side.max_offset())
        };

        Gates {
            n: gate(Side::North, IVec2::new(0, -1)),
            s: gate(Side::South, IVec2::new(0, 1)),
            e: gate(Side::East, IVec2::new(1, 0)),
            w: gate(Side::West, IVec2::new(-1, 0)),
        }
    }
}
