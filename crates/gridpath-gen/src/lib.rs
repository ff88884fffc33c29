//! Map sources and text output for gridpath.
//!
//! These are collaborators of the search engine rather than part of it:
//!
//! - [`RandomBlocks`] — independent per-cell blocking, a test stand-in for
//!   real map data.
//! - [`CaveGen`] — cellular-automata caves.
//! - [`render`] — ASCII drawing of a map with a path overlay.

mod cave;
mod random;
mod render;

pub use cave::{CaveGen, CellularAutomataRule};
pub use random::RandomBlocks;
pub use render::render;
