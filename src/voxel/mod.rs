//! Voxel data structures and operations

pub mod block;
pub mod chunk;
pub mod config;
pub mod edit;
pub mod overview;
pub mod player;
pub mod raycast;
pub mod world;

pub use block::BlockType;
pub use chunk::{Chunk, ChunkCoord, CHUNK_SIZE, WORLD_HEIGHT};
pub use config::WorldConfig;
pub use edit::{break_block, hotbar_block, place_block};
pub use overview::{sample_overview, Overview, OverviewCell, OverviewMode};
pub use player::{step_player, PlayerState};
pub use raycast::BlockHit;
pub use world::World;
