//! Turn loop: advance NPCs, render, read a command, possibly cross a region
//! or teleport, recompute cost fields. See spec §2 "Control flow per turn".

mod cli;
mod render;

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use glam::IVec2;
use heap::Heap;
use strum::IntoEnumIterator;

use cli::Command;
use engine::{NpcClass, Runtime};

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now().duration_since(UNIX_EPOCH).expect("system clock before epoch").as_nanos() as u64
    });
    log::info!("seed: {seed}");

    if let Some(n) = args.total_num_trainers {
        preseed_character_heap(n);
    }

    let mut runtime = Runtime::new(seed)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        runtime.advance_npcs();
        render::draw(runtime.world(), runtime.player(), runtime.roster());

        print!("{}", render::status_line(runtime.world()));
        io::stdout().flush().ok();

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        match cli::parse_command(&line) {
            Command::Move(side) => {
                runtime.cross(side);
            }
            Command::Teleport(x, y) => {
                if let Err(e) = runtime.teleport(IVec2::new(x, y)) {
                    eprintln!("f {x} {y}: {e}");
                }
            }
            Command::Help => println!("{}", cli::HELP_TEXT),
            Command::Quit => break,
            Command::Invalid(raw) => eprintln!("{raw}: Invalid input.  Enter '?' for help."),
        }
    }

    Ok(())
}

/// Mirrors the source's startup `character_heap`: inserts `n` of each NPC
/// class into a throwaway heap ordered by class, then discards it. This
/// only affects that pre-seed count; the roster itself is always
/// [`engine::ROSTER_SIZE`] (see DESIGN.md).
fn preseed_character_heap(n: usize) {
    let mut heap: Heap<NpcClass, _> =
        Heap::new(|a: &NpcClass, b: &NpcClass| (*a as u8).cmp(&(*b as u8)));
    for _ in 0..n {
        for class in NpcClass::iter() {
            heap.insert(class);
        }
    }
    log::debug!("pre-seeded character heap with {} entries", heap.len());
}
