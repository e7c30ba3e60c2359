//! Tree placement on top of generated columns

use crate::voxel::block::BlockType;
use crate::voxel::chunk::in_height_range;
use crate::voxel::world::World;

/// Trunk height in blocks above the surface
pub const TRUNK_HEIGHT: i32 = 4;

/// Horizontal canopy reach from the trunk
const CANOPY_RADIUS: i32 = 2;

/// Canopy layers relative to the surface
const CANOPY_MIN_OFFSET: i32 = 3;
const CANOPY_MAX_OFFSET: i32 = 5;
const CANOPY_CENTER_OFFSET: i32 = 4;

/// Manhattan distance from the canopy center that still holds leaves
const CANOPY_EXTENT: i32 = 4;

/// Grow a tree on the column (x, z) whose top solid block is at `surface`.
///
/// Writes through [`World::set_block`], so the canopy may materialize
/// neighboring chunks. Leaves only fill cells that are currently air.
pub fn place_tree(world: &mut World, x: i32, surface: i32, z: i32) {
    for trunk in 1..=TRUNK_HEIGHT {
        world.set_block(x, surface + trunk, z, BlockType::Wood);
    }

    for oz in -CANOPY_RADIUS..=CANOPY_RADIUS {
        for ox in -CANOPY_RADIUS..=CANOPY_RADIUS {
            for oy in CANOPY_MIN_OFFSET..=CANOPY_MAX_OFFSET {
                if ox.abs() + oz.abs() + (oy - CANOPY_CENTER_OFFSET).abs() > CANOPY_EXTENT {
                    continue;
                }

                let ly = surface + oy;
                if !in_height_range(ly) {
                    continue;
                }

                if world.get_block(x + ox, ly, z + oz).is_air() {
                    world.set_block(x + ox, ly, z + oz, BlockType::Leaves);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::chunk::{ChunkCoord, WORLD_HEIGHT};

    #[test]
    fn test_trunk_and_canopy() {
        let mut world = World::new();
        place_tree(&mut world, 8, 20, 8);

        for y in 21..=24 {
            assert_eq!(world.get_block(8, y, 8), BlockType::Wood);
        }
        assert_eq!(world.get_block(8, 25, 8), BlockType::Leaves);
        assert_eq!(world.get_block(8, 26, 8), BlockType::Air);

        assert_eq!(world.get_block(10, 24, 8), BlockType::Leaves);
        assert_eq!(world.get_block(9, 23, 9), BlockType::Leaves);
        // The 5x5 corners only hold leaves on the center layer
        assert_eq!(world.get_block(10, 24, 10), BlockType::Leaves);
        assert_eq!(world.get_block(10, 23, 10), BlockType::Air);
        assert_eq!(world.get_block(10, 25, 10), BlockType::Air);
    }

    #[test]
    fn test_leaves_do_not_replace_solid() {
        let mut world = World::new();
        world.set_block(9, 24, 8, BlockType::Stone);
        place_tree(&mut world, 8, 20, 8);
        assert_eq!(world.get_block(9, 24, 8), BlockType::Stone);
    }

    #[test]
    fn test_canopy_spills_into_neighbor_chunk() {
        let mut world = World::new();
        place_tree(&mut world, 0, 20, 0);

        assert!(world.contains_chunk(ChunkCoord::new(-1, 0)));
        assert!(world.contains_chunk(ChunkCoord::new(0, -1)));
        assert_eq!(world.get_block(-2, 24, 0), BlockType::Leaves);
        assert_eq!(world.get_block(0, 24, -2), BlockType::Leaves);
    }

    #[test]
    fn test_tree_near_ceiling_is_clipped() {
        let mut world = World::new();
        let surface = WORLD_HEIGHT - 3;
        place_tree(&mut world, 4, surface, 4);

        assert_eq!(world.get_block(4, surface + 1, 4), BlockType::Wood);
        assert_eq!(world.get_block(4, surface + 2, 4), BlockType::Wood);
        assert_eq!(world.get_block(4, WORLD_HEIGHT, 4), BlockType::Air);
    }

    #[test]
    fn test_every_write_bumps_revision() {
        let mut world = World::new();
        place_tree(&mut world, 8, 20, 8);
        // 4 trunk blocks plus every canopy cell inside the Manhattan extent
        // that is not already occupied by the trunk
        let canopy_cells = (-2..=2i32)
            .flat_map(|oz| (-2..=2i32).map(move |ox| (ox, oz)))
            .flat_map(|(ox, oz)| (3..=5i32).map(move |oy| (ox, oy, oz)))
            .filter(|&(ox, oy, oz)| ox.abs() + oz.abs() + (oy - 4).abs() <= 4)
            .filter(|&(ox, oy, oz)| !(ox == 0 && oz == 0 && oy <= 4))
            .count() as u64;
        assert_eq!(world.revision(), 4 + canopy_cells);
    }
}
