//! File-backed persistence for the game: the high-score document and JSON
//! game configs.

mod config;
mod scores;

pub use config::*;
pub use scores::*;
