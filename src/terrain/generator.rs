//! Hash-based procedural terrain generation
//!
//! Heights are a deterministic function of the block column and the seed:
//! three smooth periodic terms plus a small hashed jitter. The same seed
//! always produces the same world.

use crate::voxel::block::BlockType;
use crate::voxel::chunk::WORLD_HEIGHT;

/// Base surface height before the periodic terms are added
const BASE_HEIGHT: f32 = 18.0;

/// Lowest and highest allowed surface heights
const MIN_SURFACE: f32 = 2.0;
const MAX_SURFACE: f32 = (WORLD_HEIGHT - 2) as f32;

/// Surfaces below this become beaches
const SAND_LEVEL: i32 = 8;

/// Layers of dirt between the surface block and stone
const DIRT_DEPTH: i32 = 2;

/// Trees only grow on surfaces strictly above this height
const TREE_MIN_SURFACE: i32 = 10;

/// Salt added to the seed for the tree placement hash
const TREE_SEED_SALT: i32 = 91;

/// One in this many eligible columns grows a tree
const TREE_RARITY: u32 = 97;

/// Multiply/xor/shift mixing hash of a block column.
/// Not cryptographic; only reproducibility matters.
pub fn hash_2d(x: i32, z: i32, seed: i32) -> u32 {
    let mut h = seed as u32;
    h ^= (x as u32).wrapping_mul(0x45d9f3b);
    h ^= (z as u32).wrapping_mul(0x119de1f3);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846ca68b);
    h ^= h >> 16;
    h
}

/// Column terrain generator for a single seed
#[derive(Clone, Copy, Debug)]
pub struct TerrainGenerator {
    seed: i32,
}

impl TerrainGenerator {
    pub fn new(seed: i32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Surface height of the block column (x, z), in `[2, WORLD_HEIGHT - 2]`
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        let fx = x as f32;
        let fz = z as f32;

        let hills = (fx * 0.11).sin() * 4.0;
        let ridges = (fz * 0.09).cos() * 5.0;
        let rolling = ((fx + fz) * 0.045).sin() * 3.0;
        let jitter = (hash_2d(x, z, self.seed) & 0xFF) as f32 / 255.0;

        let height = BASE_HEIGHT + hills + ridges + rolling + (jitter - 0.5) * 4.0;
        height.clamp(MIN_SURFACE, MAX_SURFACE) as i32
    }

    /// Block at height `y` of a column whose surface is at `surface`
    pub fn column_block(surface: i32, y: i32) -> BlockType {
        if y > surface {
            BlockType::Air
        } else if y == surface {
            if surface < SAND_LEVEL {
                BlockType::Sand
            } else {
                BlockType::Grass
            }
        } else if y >= surface - DIRT_DEPTH {
            BlockType::Dirt
        } else {
            BlockType::Stone
        }
    }

    /// Whether the column (x, z) with the given surface grows a tree
    pub fn has_tree(&self, x: i32, z: i32, surface: i32) -> bool {
        surface > TREE_MIN_SURFACE
            && hash_2d(x, z, self.seed.wrapping_add(TREE_SEED_SALT)) % TREE_RARITY == 0
    }
}
