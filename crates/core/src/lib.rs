//! Rules engine for the triplet-matching card game. Keep this crate free of IO
//! and platform concerns; persistence plugs in through [`HighScoreStore`].

pub mod board;
pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod state;
pub mod store;

pub use board::*;
pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use rng::*;
pub use rules::*;
pub use scoring::*;
pub use session::*;
pub use state::*;
pub use store::*;
