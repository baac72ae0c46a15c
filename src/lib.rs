//! Word games on a shared lexicon: two-player Ghost and the single-player
//! hand game. Engines take moves and return typed results; the `console`
//! module drives them from line input.

pub mod config;
pub mod console;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;
