//! Command-line argument parsing and interactive turn-command reading.
//!
//! Neither of these is part of the simulation core; they're the "external
//! collaborator" layer the core is usable without (spec's §1 scope note).

use clap::Parser;
use world::Side;

/// Overworld exploration simulation: a terminal front end over `world` and
/// `engine`.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// World RNG seed. Defaults to a value derived from wall-clock time.
    pub seed: Option<u64>,

    /// Pre-seed the startup character heap with this many of each NPC
    /// class before world initialization. Vestigial: only affects heap
    /// pre-seeding, the roster itself always has 10 members (see
    /// DESIGN.md).
    #[arg(long = "TOTAL_NUM_TRAINERS", value_name = "N")]
    pub total_num_trainers: Option<usize>,
}

/// One line of interactive input.
pub enum Command {
    Move(Side),
    Teleport(i32, i32),
    Quit,
    Help,
    /// The raw line that didn't parse as anything recognized.
    Invalid(String),
}

/// Parse one line of stdin per spec §6: single-character commands, `f x y`
/// taking two trailing integers.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let mut words = line.split_whitespace();

    match words.next() {
        Some("n") => Command::Move(Side::North),
        Some("s") => Command::Move(Side::South),
        Some("e") => Command::Move(Side::East),
        Some("w") => Command::Move(Side::West),
        Some("q") => Command::Quit,
        Some("h") | Some("?") => Command::Help,
        Some("f") => match (words.next().and_then(|s| s.parse().ok()), words.next().and_then(|s| s.parse().ok()))
        {
            (Some(x), Some(y)) => Command::Teleport(x, y),
            _ => Command::Invalid("f".to_owned()),
        },
        Some(other) => Command::Invalid(other.to_owned()),
        None => Command::Invalid(String::new()),
    }
}

pub const HELP_TEXT: &str =
    "Move with 'e'ast, 'w'est, 'n'orth, 's'outh or 'f'ly x y.\nQuit with 'q'.  '?' and 'h' print this help message.";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_directions() {
        assert!(matches!(parse_command("n"), Command::Move(Side::North)));
        assert!(matches!(parse_command("s"), Command::Move(Side::South)));
        assert!(matches!(parse_command("e"), Command::Move(Side::East)));
        assert!(matches!(parse_command("w"), Command::Move(Side::West)));
    }

    #[test]
    fn parses_teleport() {
        match parse_command("f -12 34") {
            Command::Teleport(x, y) => assert_eq!((x, y), (-12, 34)),
            _ => panic!("expected a teleport command"),
        }
    }

    #[test]
    fn malformed_teleport_is_invalid() {
        assert!(matches!(parse_command("f abc"), Command::Invalid(_)));
        assert!(matches!(parse_command("f 1"), Command::Invalid(_)));
    }

    #[test]
    fn unknown_letter_is_invalid() {
        assert!(matches!(parse_command("z"), Command::Invalid(_)));
    }

    #[test]
    fn help_aliases() {
        assert!(matches!(parse_command("h"), Command::Help));
        assert!(matches!(parse_command("?"), Command::Help));
    }
}
