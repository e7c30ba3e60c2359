//! Procedural terrain generation

pub mod generator;
pub mod tree;

pub use generator::{hash_2d, TerrainGenerator};
pub use tree::place_tree;
