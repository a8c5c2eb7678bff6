//! This module defines the dungeon map and provides functions for interacting with it.

pub mod builder;
pub mod direction;
pub mod graph;
pub mod layout;
pub mod parser;
pub mod render;

pub use builder::Dungeon;
