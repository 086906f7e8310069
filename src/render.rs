//! ANSI terminal rendering: map glyphs and the status line (spec §6).

use std::sync::Once;

use engine::Roster;
use glam::IVec2;
use world::{MAP_X, MAP_Y, Region, TerrainKind, World};

static UNKNOWN_TERRAIN_WARNED: Once = Once::new();

/// Glyph for one cell: player takes priority over NPCs, NPCs over terrain,
/// matching the source's draw order.
fn glyph_at(region: &Region, roster: &Roster, player: IVec2, p: IVec2) -> char {
    if p == player {
        return '@';
    }
    if let Some(npc) = roster.npcs.iter().find(|n| n.pos == p) {
        return npc.class.glyph();
    }
    let terrain = region.terrain(p);
    if terrain == TerrainKind::Uninitialized {
        UNKNOWN_TERRAIN_WARNED.call_once(|| {
            log::warn!("render: encountered uninitialized terrain at {p:?}");
        });
    }
    terrain.glyph()
}

/// Clear the screen (CSI H, CSI J) and draw the current region.
pub fn draw(world: &World, player: IVec2, roster: &Roster) {
    print!("\u{1b}[H\u{1b}[J");
    let region = world.current();
    let mut out = String::with_capacity((MAP_X + 1) * MAP_Y);
    for y in 0..MAP_Y as i32 {
        for x in 0..MAP_X as i32 {
            out.push(glyph_at(region, roster, player, IVec2::new(x, y)));
        }
        out.push('\n');
    }
    print!("{out}");
}

/// The status line printed after the map, per spec §6's exact format.
pub fn status_line(world: &World) -> String {
    let rel = world.relative_cursor();
    let ew = if rel.x >= 0 { 'E' } else { 'W' };
    let ns = if rel.y <= 0 { 'N' } else { 'S' };
    format!(
        "Current position is {}{ew}x{}{ns} ({},{}).  Enter command: ",
        rel.x.abs(),
        rel.y.abs(),
        rel.x,
        rel.y
    )
}
