//! Chunk surface meshing

pub mod cache;
pub mod greedy;
pub mod mesh;

pub use cache::ChunkMeshCache;
pub use greedy::build_chunk_mesh;
pub use mesh::{block_color, ChunkMesh, VoxelVertex};
