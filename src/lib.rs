//! Dungeon map library crate.
//!
//! Reads a directional room graph, lays it out on a grid, renders it as ASCII
//! and lets a single player walk it from the console.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod map;
