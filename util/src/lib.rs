//! Small standalone helpers shared by `world`, `engine` and the binary.

mod geom;
pub use geom::{s4, s8};

mod rng;
pub use rng::srng;

/// Map with an efficient hash function.
pub use rustc_hash::FxHashMap as HashMap;

/// Set with an efficient hash function.
pub use rustc_hash::FxHashSet as HashSet;

/// Good default concrete rng. Small and fast, not cryptographic.
pub type GameRng = rand_xorshift::XorShiftRng;
