//! Chunk columns of block data

use crate::math::Aabb;
use super::block::BlockType;
use glam::{IVec3, Vec3};

/// Width and depth of a chunk column in blocks
pub const CHUNK_SIZE: i32 = 16;

/// Fixed height of the world in blocks
pub const WORLD_HEIGHT: i32 = 64;

/// Number of blocks stored in one chunk
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE * WORLD_HEIGHT * CHUNK_SIZE) as usize;

/// Integer coordinate identifying a chunk column in the world grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Create a new chunk coordinate
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk column containing the block column (x, z).
    /// Uses floor division so negative blocks land in negative chunks.
    pub fn from_block(x: i32, z: i32) -> Self {
        Self {
            x: x.div_euclid(CHUNK_SIZE),
            z: z.div_euclid(CHUNK_SIZE),
        }
    }

    /// World-space block coordinate of this chunk's minimum corner.
    /// Defined for every coordinate returned by [`ChunkCoord::from_block`].
    pub fn world_origin(&self) -> IVec3 {
        IVec3::new(self.x * CHUNK_SIZE, 0, self.z * CHUNK_SIZE)
    }

    /// World-space box covering the full column at world height
    pub fn world_bounds(&self) -> Aabb {
        let size = CHUNK_SIZE as f32;
        let origin = Vec3::new(self.x as f32 * size, 0.0, self.z as f32 * size);
        Aabb::new(
            origin,
            origin + Vec3::new(CHUNK_SIZE as f32, WORLD_HEIGHT as f32, CHUNK_SIZE as f32),
        )
    }
}

/// Position of a block column inside its chunk, always in `[0, CHUNK_SIZE)`
#[inline]
pub fn local_coord(value: i32) -> i32 {
    value.rem_euclid(CHUNK_SIZE)
}

/// Whether `y` lies inside the fixed world height
#[inline]
pub fn in_height_range(y: i32) -> bool {
    (0..WORLD_HEIGHT).contains(&y)
}

/// Dense block storage for one chunk column
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    blocks: Vec<u8>,
}

impl Chunk {
    /// Create a chunk filled with air
    pub fn new() -> Self {
        Self {
            blocks: vec![BlockType::Air as u8; CHUNK_VOLUME],
        }
    }

    /// Flat index of a local position (y-major, then z, then x)
    #[inline]
    pub fn index(local_x: i32, y: i32, local_z: i32) -> usize {
        debug_assert!((0..CHUNK_SIZE).contains(&local_x));
        debug_assert!(in_height_range(y));
        debug_assert!((0..CHUNK_SIZE).contains(&local_z));
        (y * CHUNK_SIZE * CHUNK_SIZE + local_z * CHUNK_SIZE + local_x) as usize
    }

    /// Block at a local position
    #[inline]
    pub fn get(&self, local_x: i32, y: i32, local_z: i32) -> BlockType {
        BlockType::from_u8(self.blocks[Self::index(local_x, y, local_z)])
    }

    /// Store a block at a local position. Returns whether the stored value changed.
    #[inline]
    pub fn set(&mut self, local_x: i32, y: i32, local_z: i32, block: BlockType) -> bool {
        let slot = &mut self.blocks[Self::index(local_x, y, local_z)];
        let value = block as u8;
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Overwrite a whole vertical column, asking `block_at` for every y
    pub fn fill_column(&mut self, local_x: i32, local_z: i32, mut block_at: impl FnMut(i32) -> BlockType) {
        for y in 0..WORLD_HEIGHT {
            self.blocks[Self::index(local_x, y, local_z)] = block_at(y) as u8;
        }
    }

    /// Number of non-air blocks
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|&&b| b != BlockType::Air as u8).count()
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}
