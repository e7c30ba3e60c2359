//! Blockworld - a chunked voxel block world
//!
//! Owns block data keyed by chunk column, generates terrain procedurally,
//! answers point and ray queries, and turns chunks into greedy-meshed
//! render geometry.

pub mod core;
pub mod math;
pub mod voxel;
pub mod terrain;
pub mod meshing;

pub use voxel::{step_player, BlockHit, BlockType, ChunkCoord, PlayerState, World, WorldConfig, CHUNK_SIZE, WORLD_HEIGHT};
pub use meshing::{block_color, build_chunk_mesh, ChunkMesh, ChunkMeshCache, VoxelVertex};
