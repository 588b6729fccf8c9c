//! A coin-bidding party game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full match flow of
//! the "Milhada" bidding game: hidden coin bets, distinct pot guesses, the
//! reveal, and elimination by correct guesses. One human player drives the
//! match; the engine generates bets and guesses for the AI players and
//! emits an immutable [`MatchState`] snapshot after every transition.
//!
//! # Example
//!
//! ```no_run
//! use milhada::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game.snapshot();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod game;
pub mod options;
pub mod player;
mod sync;

// Re-export main types
pub use error::GuessError;
pub use game::{Game, MatchState, Phase, elimination_threshold};
pub use options::GameOptions;
pub use player::Player;
