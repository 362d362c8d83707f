//! Tube state table
//!
//! One [`Tube`] record per display position. The records are mutated only
//! through the transitions in [`machine`], and only inside the critical
//! section provided by [`SharedTubes`].

pub mod machine;
pub mod state;
pub mod table;

pub use state::{Effect, Glyph, Tube};
pub use table::{SharedTubes, TubeTable};
