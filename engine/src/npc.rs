//! NPC roster and per-class movement policy.

use glam::IVec2;
use rand::seq::IndexedRandom;
use strum::EnumIter;
use util::{GameRng, s8};
use world::{CharacterClass, Region, TerrainKind};

use crate::pathfinder::CostFields;

/// Fixed roster size (spec's `TOTAL_NUM_TRAINERS`, not to be confused with
/// the CLI's heap pre-seed override; see [`crate::Roster::new`]).
pub const ROSTER_SIZE: usize = 10;

/// The eight non-zero steps plus standing still, used for Wanderer rerolls.
const REROLL_WITH_ZERO: [IVec2; 9] = [
    IVec2::new(0, 0),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
    IVec2::new(0, 1),
    IVec2::new(-1, 1),
    IVec2::new(-1, 0),
    IVec2::new(-1, -1),
];

#[derive(Copy, Clone, Eq, PartialEq, Debug, EnumIter)]
pub enum NpcClass {
    Hiker,
    Rival,
    Pacer,
    Wanderer,
    Sentry,
    Explorer,
}

impl NpcClass {
    pub fn glyph(self) -> char {
        match self {
            NpcClass::Hiker => 'h',
            NpcClass::Rival => 'r',
            NpcClass::Pacer => 'p',
            NpcClass::Wanderer => 'w',
            NpcClass::Sentry => 's',
            NpcClass::Explorer => 'e',
        }
    }
}

pub struct Npc {
    pub pos: IVec2,
    pub class: NpcClass,
    pub direction: IVec2,
    pub initial_terrain: TerrainKind,
}

/// Movement blocks all non-swimmer classes on Boulder, Mountain and Water;
/// no roster member is ever a Swimmer, so this is the one passability rule
/// every NPC's final step commit is checked against.
fn locally_passable(terrain: TerrainKind) -> bool {
    !matches!(
        terrain,
        TerrainKind::Boulder | TerrainKind::Mountain | TerrainKind::Water | TerrainKind::Uninitialized
    )
}

pub struct Roster {
    pub npcs: Vec<Npc>,
}

impl Roster {
    /// Seed the fixed roster: slot 0 is always a Hiker, slot 1 always a
    /// Rival, the rest drawn uniformly from all six classes. Every NPC
    /// spawns on a random interior Path cell.
    pub fn new(region: &Region, rng: &mut GameRng) -> Roster {
        let all_classes = [
            NpcClass::Hiker,
            NpcClass::Rival,
            NpcClass::Pacer,
            NpcClass::Wanderer,
            NpcClass::Sentry,
            NpcClass::Explorer,
        ];

        let mut npcs = Vec::with_capacity(ROSTER_SIZE);
        for slot in 0..ROSTER_SIZE {
            let class = match slot {
                0 => NpcClass::Hiker,
                1 => NpcClass::Rival,
                _ => *all_classes.choose(rng).unwrap(),
            };
            let pos = region.random_path_cell(rng);
            // Pacer's axis direction must be nonzero or its impassable-flip
            // rule can never trigger; the source leaves every NPC's initial
            // direction at zero, which made Pacer indistinguishable from a
            // Sentry. We start it moving east instead.
            let direction = if class == NpcClass::Pacer { IVec2::new(1, 0) } else { IVec2::ZERO };
            npcs.push(Npc { pos, class, direction, initial_terrain: region.terrain(pos) });
        }

        Roster { npcs }
    }

    /// Advance every NPC one step, in roster order, so an earlier NPC's new
    /// position is already visible to a later NPC's occupancy check.
    pub fn advance(&mut self, region: &Region, fields: &CostFields, rng: &mut GameRng) {
        for i in 0..self.npcs.len() {
            let intent = self.intent(i, region, fields, rng);
            self.try_commit(i, region, intent);
        }
    }

    fn intent(&mut self, i: usize, region: &Region, fields: &CostFields, rng: &mut GameRng) -> IVec2 {
        let npc = &self.npcs[i];
        match npc.class {
            NpcClass::Hiker => gradient_step(npc.pos, region, &fields.hiker, CharacterClass::Hiker),
            NpcClass::Rival => gradient_step(npc.pos, region, &fields.rival, CharacterClass::Rival),
            NpcClass::Sentry => npc.pos,

            NpcClass::Pacer => {
                let target = npc.pos + npc.direction;
                if Region::in_bounds(target) && locally_passable(region.terrain(target)) {
                    target
                } else {
                    self.npcs[i].direction = -npc.direction;
                    npc.pos
                }
            }

            NpcClass::Wanderer => {
                let target = npc.pos + npc.direction;
                if Region::in_bounds(target) && region.terrain(target) != npc.initial_terrain {
                    self.npcs[i].direction = *REROLL_WITH_ZERO.choose(rng).unwrap();
                    npc.pos
                } else {
                    target
                }
            }

            NpcClass::Explorer => {
                let target = npc.pos + npc.direction;
                if !Region::in_bounds(target) || !locally_passable(region.terrain(target)) {
                    self.npcs[i].direction = *s8::DIR.choose(rng).unwrap();
                    npc.pos
                } else {
                    target
                }
            }
        }
    }

    fn try_commit(&mut self, i: usize, region: &Region, target: IVec2) {
        let npc = &self.npcs[i];
        if target == npc.pos {
            return;
        }
        if !Region::in_bounds(target) || !locally_passable(region.terrain(target)) {
            return;
        }
        if self.npcs.iter().enumerate().any(|(j, other)| j != i && other.pos == target) {
            return;
        }
        self.npcs[i].pos = target;
    }
}

/// Among the 8 neighbors plus self, the step with the smallest distance
/// that's passable under `class`'s cost table, scanned in row-major order
/// (dy then dx, self at (0,0) falling in its natural scan position) so
/// ties resolve deterministically and don't privilege staying put.
fn gradient_step(
    pos: IVec2,
    region: &Region,
    field: &crate::pathfinder::DistanceField,
    class: CharacterClass,
) -> IVec2 {
    let mut best = pos;
    let mut best_dist = crate::pathfinder::UNREACHABLE;

    for dy in -1..=1 {
        for dx in -1..=1 {
            let p = pos + IVec2::new(dx, dy);
            if !Region::in_bounds(p) {
                continue;
            }
            if !class.can_enter(region.terrain(p)) {
                continue;
            }
            let d = field.get(p);
            if d < best_dist {
                best_dist = d;
                best = p;
            }
        }
    }

    best
}
