//! Terrain kinds and the per-class movement cost table.

use strum::EnumIter;

/// A single region cell's terrain.
///
/// `Uninitialized` only ever appears mid-generation; invariant is that no
/// interior cell carries it once a region is handed back to callers.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, EnumIter)]
pub enum TerrainKind {
    #[default]
    Uninitialized,
    Boulder,
    Tree,
    Path,
    Mart,
    Center,
    Grass,
    Clearing,
    Mountain,
    Forest,
    Water,
    Gate,
}

use TerrainKind::*;

impl TerrainKind {
    /// Display glyph. `Uninitialized` maps to the render fallback glyph;
    /// it should never reach the screen in a fully generated region.
    pub fn glyph(self) -> char {
        match self {
            Boulder => '0',
            Tree => '4',
            Path => '#',
            Mart => 'M',
            Center => 'C',
            Grass => ':',
            Clearing => '.',
            Mountain => '%',
            Forest => '^',
            Water => '~',
            Gate => '#',
            Uninitialized => '&',
        }
    }

    pub fn is_border_material(self) -> bool {
        matches!(self, Tree | Boulder | Gate)
    }
}

/// A mover class, each with its own cost vector over [`TerrainKind`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, EnumIter)]
pub enum CharacterClass {
    Pc,
    Hiker,
    Rival,
    Swimmer,
    Other,
}

/// Sentinel cost for a terrain kind a class cannot enter.
pub const IMPASSABLE: u32 = u32::MAX;

impl CharacterClass {
    /// Movement cost for a single step onto `terrain`, `IMPASSABLE` if the
    /// class cannot enter it. Table from the canonical move-cost data.
    pub fn cost(self, terrain: TerrainKind) -> u32 {
        use CharacterClass::*;

        match (self, terrain) {
            (_, Boulder | Tree | Uninitialized) => IMPASSABLE,

            (Pc, Path) => 10,
            (Pc, Mart) => 10,
            (Pc, Center) => 10,
            (Pc, Grass) => 20,
            (Pc, Clearing) => 10,
            (Pc, Gate) => 10,
            (Pc, Mountain | Forest | Water) => IMPASSABLE,

            (Hiker, Path) => 10,
            (Hiker, Mart) => 50,
            (Hiker, Center) => 50,
            (Hiker, Grass) => 15,
            (Hiker, Clearing) => 10,
            (Hiker, Mountain) => 15,
            (Hiker, Forest) => 15,
            (Hiker, Water | Gate) => IMPASSABLE,

            (Rival, Path) => 10,
            (Rival, Mart) => 50,
            (Rival, Center) => 50,
            (Rival, Grass) => 20,
            (Rival, Clearing) => 10,
            (Rival, Mountain | Forest | Water | Gate) => IMPASSABLE,

            (Swimmer, Water) => 7,
            (Swimmer, _) => IMPASSABLE,

            // No roster member is ever spawned as Other; it is kept as a
            // distinct variant only so an exhaustive match over the class
            // enum has a slot for "moves like the player locally" (see
            // engine::npc), per the source's otherwise-unused ter_cost row.
            (Other, Path | Mart | Center | Clearing | Gate) => 10,
            (Other, Grass) => 20,
            (Other, Mountain | Forest | Water) => IMPASSABLE,
        }
    }

    pub fn can_enter(self, terrain: TerrainKind) -> bool {
        self.cost(terrain) != IMPASSABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pc_cannot_cross_mountain_or_water() {
        assert!(!CharacterClass::Pc.can_enter(TerrainKind::Mountain));
        assert!(!CharacterClass::Pc.can_enter(TerrainKind::Water));
        assert!(CharacterClass::Pc.can_enter(TerrainKind::Gate));
    }

    #[test]
    fn only_swimmer_crosses_water() {
        for class in [
            CharacterClass::Pc,
            CharacterClass::Hiker,
            CharacterClass::Rival,
            CharacterClass::Other,
        ] {
            assert!(!class.can_enter(TerrainKind::Water));
        }
        assert!(CharacterClass::Swimmer.can_enter(TerrainKind::Water));
    }

    #[test]
    fn nobody_enters_boulder_or_tree() {
        for class in [
            CharacterClass::Pc,
            CharacterClass::Hiker,
            CharacterClass::Rival,
            CharacterClass::Swimmer,
            CharacterClass::Other,
        ] {
            assert!(!class.can_enter(TerrainKind::Boulder));
            assert!(!class.can_enter(TerrainKind::Tree));
        }
    }
}
