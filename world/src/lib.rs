//! Region and world data model, procedural generation.

mod buildings;
mod heightgen;
mod region;
mod roads;
mod scatter;
mod terrain;
mod terraingen;
mod world;

pub use region::{Gates, MAP_X, MAP_Y, NO_GATE, Region, Side};
pub use terrain::{CharacterClass, IMPASSABLE, TerrainKind};
pub use world::{ORIGIN, WORLD_SIZE, World};
