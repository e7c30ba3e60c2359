//! Block type enumeration
//!
//! Stored as one byte per voxel inside a chunk.

use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockType {
    #[default]
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
    Sand = 4,
    Wood = 5,
    Leaves = 6,
}

pub const BLOCK_TYPE_COUNT: usize = 7;

const BLOCK_NAMES: [&str; BLOCK_TYPE_COUNT] = [
    "Air",
    "Grass",
    "Dirt",
    "Stone",
    "Sand",
    "Wood",
    "Leaves",
];

impl BlockType {
    pub const ALL: [BlockType; BLOCK_TYPE_COUNT] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Sand,
        BlockType::Wood,
        BlockType::Leaves,
    ];

    /// Every block except Air is solid
    #[inline]
    pub const fn is_solid(self) -> bool {
        !self.is_air()
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        matches!(self, BlockType::Air)
    }

    /// Human readable name
    #[inline]
    pub const fn name(self) -> &'static str {
        BLOCK_NAMES[self as usize]
    }

    /// Convert from the stored byte.
    /// Returns Air for values that do not name a block.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => BlockType::Grass,
            2 => BlockType::Dirt,
            3 => BlockType::Stone,
            4 => BlockType::Sand,
            5 => BlockType::Wood,
            6 => BlockType::Leaves,
            _ => BlockType::Air,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
