//! Mesh data structures for chunk rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::math::Aabb;
use crate::voxel::block::BLOCK_TYPE_COUNT;
use crate::voxel::{BlockType, ChunkCoord};

/// Packed `0xAARRGGBB` color per block type, indexed by discriminant
const BLOCK_COLORS: [u32; BLOCK_TYPE_COUNT] = [
    0x0000_0000, // Air
    0xff4c_aa57, // Grass
    0xff70_5338, // Dirt
    0xff90_939a, // Stone
    0xffd7_ca89, // Sand
    0xff7f_5a30, // Wood
    0xff5a_9648, // Leaves
];

/// Flat shading color of a block. Air is fully transparent.
#[inline]
pub fn block_color(block: BlockType) -> u32 {
    BLOCK_COLORS[block as usize]
}

/// World-space vertex with a packed `0xAARRGGBB` color (16 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct VoxelVertex {
    pub position: [f32; 3],
    pub color: u32,
}

impl VoxelVertex {
    pub fn new(position: Vec3, color: u32) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Triangle list geometry for one chunk column
#[derive(Clone, Debug)]
pub struct ChunkMesh {
    pub chunk: ChunkCoord,
    pub vertices: Vec<VoxelVertex>,
    /// Six indices per quad, counter-clockwise seen from outside
    pub indices: Vec<u32>,
    /// World-space bounds of the vertices, or the chunk column when empty
    pub bounds: Aabb,
}

impl ChunkMesh {
    pub fn new(chunk: ChunkCoord) -> Self {
        Self {
            chunk,
            vertices: Vec::new(),
            indices: Vec::new(),
            bounds: chunk.world_bounds(),
        }
    }

    /// Append a quad from four corners in winding order
    pub(crate) fn push_quad(&mut self, corners: [Vec3; 4], color: u32, flip: bool) {
        let base = self.vertices.len() as u32;
        self.vertices
            .extend(corners.iter().map(|&corner| VoxelVertex::new(corner, color)));

        let order: [u32; 6] = if flip {
            [0, 2, 1, 0, 3, 2]
        } else {
            [0, 1, 2, 0, 2, 3]
        };
        self.indices.extend(order.iter().map(|i| base + i));
    }

    /// Shrink bounds to the vertices, keeping the column bounds if there are none
    pub(crate) fn compute_bounds(&mut self) {
        if let Some(bounds) = Aabb::from_points(self.vertices.iter().map(VoxelVertex::position)) {
            self.bounds = bounds;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex data as bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
