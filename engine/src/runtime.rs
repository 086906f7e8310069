//! Turn-level orchestration: owns the world, the player's position, the
//! NPC roster and the current turn's cost fields, and keeps them
//! consistent with each other as the player crosses regions or teleports.

use anyhow::Result;
use glam::IVec2;
use util::{GameRng, srng};
use world::{Region, Side, World};

use crate::npc::Roster;
use crate::pathfinder::CostFields;

/// A running simulation: a world, a player position on its current region,
/// that region's NPC roster, and this turn's cost fields.
pub struct Runtime {
    world: World,
    rng: GameRng,
    player: IVec2,
    roster: Roster,
    fields: CostFields,
}

impl Runtime {
    /// Generate the origin region and populate it with a player and a
    /// fresh NPC roster.
    pub fn new(seed: u64) -> Result<Runtime> {
        let world = World::new(seed);
        let mut rng = srng(&(seed, "driver"));
        let player = world.current().random_path_cell(&mut rng);
        let roster = Roster::new(world.current(), &mut rng);
        let fields = CostFields::compute(world.current(), player);

        Ok(Runtime { world, rng, player, roster, fields })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> IVec2 {
        self.player
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Advance every NPC one step under this turn's cost fields.
    pub fn advance_npcs(&mut self) {
        self.roster.advance(self.world.current(), &self.fields, &mut self.rng);
    }

    /// Cross into the region adjacent to `side`, lazily generating it.
    /// Does nothing and returns `false` if that would leave the world.
    /// The player re-spawns at the entered region's gate facing back the
    /// way they came, and a fresh roster replaces the old one (see
    /// DESIGN.md's Open Question on roster/player lifetime across region
    /// crossings).
    pub fn cross(&mut self, side: Side) -> bool {
        if self.world.step(side.offset()).is_err() {
            log::debug!("cross {side:?}: off the edge of the world");
            return false;
        }
        self.enter_current_region(|region, rng| {
            region.gate_inner(side.opposite()).unwrap_or_else(|| region.random_path_cell(rng))
        });
        true
    }

    /// Jump directly to a world-relative region coordinate.
    pub fn teleport(&mut self, rel: IVec2) -> Result<()> {
        self.world.teleport(rel)?;
        log::info!("teleported to {rel:?}");
        self.enter_current_region(|region, rng| region.random_path_cell(rng));
        Ok(())
    }

    fn enter_current_region(&mut self, spawn: impl FnOnce(&Region, &mut GameRng) -> IVec2) {
        self.player = spawn(self.world.current(), &mut self.rng);
        self.roster = Roster::new(self.world.current(), &mut self.rng);
        self.fields = CostFields::compute(self.world.current(), self.player);
    }
}
