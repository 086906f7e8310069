//! Per-turn cost-field pathfinding and NPC movement policy, built on the
//! region and world data model in `world`.

mod npc;
pub use npc::{Npc, NpcClass, ROSTER_SIZE, Roster};

mod pathfinder;
pub use pathfinder::{CostFields, DistanceField, UNREACHABLE};

mod runtime;
pub use runtime::Runtime;
