//! World container managing chunk columns of block data

use std::collections::HashMap;

use super::block::BlockType;
use super::chunk::{in_height_range, local_coord, Chunk, ChunkCoord, CHUNK_SIZE, WORLD_HEIGHT};
use crate::terrain::{place_tree, TerrainGenerator};

/// Seed used before the first call to [`World::generate`]
pub const DEFAULT_SEED: i32 = 1337;

/// Block world made of fixed-height chunk columns.
///
/// Every effective mutation bumps [`World::revision`], which consumers compare
/// against a cached value to decide when render geometry is stale.
pub struct World {
    /// Map from chunk coordinates to materialized chunks
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Radius passed to the last generate call (after clamping)
    radius_in_chunks: i32,
    /// Seed passed to the last generate call
    seed: i32,
    /// Monotonic change counter
    revision: u64,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            chunks: HashMap::new(),
            radius_in_chunks: 0,
            seed: DEFAULT_SEED,
            revision: 0,
        }
    }

    /// Replace the whole world with freshly generated terrain.
    ///
    /// Generates the `(2r+1)²` chunks around the origin, where `r` is
    /// `radius_in_chunks` clamped to at least 1.
    pub fn generate(&mut self, radius_in_chunks: i32, seed: i32) {
        self.radius_in_chunks = radius_in_chunks.max(1);
        self.seed = seed;
        self.chunks.clear();

        let terrain = TerrainGenerator::new(seed);
        let radius = self.radius_in_chunks;
        for chunk_z in -radius..=radius {
            for chunk_x in -radius..=radius {
                self.generate_chunk(&terrain, ChunkCoord::new(chunk_x, chunk_z));
            }
        }

        self.revision += 1;
        log::debug!(
            "Generated {} chunks (radius {}, seed {}), revision {}",
            self.chunks.len(),
            self.radius_in_chunks,
            self.seed,
            self.revision
        );
    }

    /// Fill every column of one chunk, growing trees as each column is finished
    fn generate_chunk(&mut self, terrain: &TerrainGenerator, coord: ChunkCoord) {
        let origin = coord.world_origin();
        self.ensure_chunk(coord);

        for local_z in 0..CHUNK_SIZE {
            for local_x in 0..CHUNK_SIZE {
                let x = origin.x + local_x;
                let z = origin.z + local_z;
                let surface = terrain.surface_height(x, z);

                self.ensure_chunk(coord).fill_column(local_x, local_z, |y| {
                    TerrainGenerator::column_block(surface, y)
                });

                if terrain.has_tree(x, z, surface) {
                    place_tree(self, x, surface, z);
                }
            }
        }
    }

    /// Get the chunk at `coord`, creating an all-air chunk if it is missing
    fn ensure_chunk(&mut self, coord: ChunkCoord) -> &mut Chunk {
        self.chunks.entry(coord).or_default()
    }

    /// Block at world position. Air outside the world height or in unmaterialized chunks.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        if !in_height_range(y) {
            return BlockType::Air;
        }

        match self.chunks.get(&ChunkCoord::from_block(x, z)) {
            Some(chunk) => chunk.get(local_coord(x), y, local_coord(z)),
            None => BlockType::Air,
        }
    }

    /// Store a block at world position, materializing its chunk if needed.
    ///
    /// Returns true only if the stored value changed; only then is the
    /// revision bumped. Writes outside the world height are ignored.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) -> bool {
        if !in_height_range(y) {
            return false;
        }

        let chunk = self.ensure_chunk(ChunkCoord::from_block(x, z));
        if !chunk.set(local_coord(x), y, local_coord(z), block) {
            return false;
        }

        self.revision += 1;
        true
    }

    /// Height of the highest solid block in the column, or 0 if it is all air
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        (0..WORLD_HEIGHT)
            .rev()
            .find(|&y| self.get_block(x, y, z).is_solid())
            .unwrap_or(0)
    }

    /// Get the number of materialized chunks
    pub fn loaded_chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Coordinates of every materialized chunk, in no particular order
    pub fn chunk_coordinates(&self) -> Vec<ChunkCoord> {
        self.chunks.keys().copied().collect()
    }

    /// Total non-air blocks across all materialized chunks
    pub fn solid_block_count(&self) -> usize {
        self.chunks.values().map(Chunk::solid_count).sum()
    }

    /// Whether the chunk at `coord` has been materialized
    pub fn contains_chunk(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn radius_in_chunks(&self) -> i32 {
        self.radius_in_chunks
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn min_world_x(&self) -> i32 {
        -self.radius_in_chunks * CHUNK_SIZE
    }

    pub fn max_world_x(&self) -> i32 {
        (self.radius_in_chunks + 1) * CHUNK_SIZE - 1
    }

    pub fn min_world_z(&self) -> i32 {
        -self.radius_in_chunks * CHUNK_SIZE
    }

    pub fn max_world_z(&self) -> i32 {
        (self.radius_in_chunks + 1) * CHUNK_SIZE - 1
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world() {
        let world = World::new();
        assert_eq!(world.loaded_chunk_count(), 0);
        assert_eq!(world.revision(), 0);
        assert_eq!(world.radius_in_chunks(), 0);
        assert_eq!(world.seed(), DEFAULT_SEED);
        assert_eq!(world.get_block(0, 10, 0), BlockType::Air);
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut world = World::new();
        for (i, block) in BlockType::ALL[1..].iter().enumerate() {
            let (x, y, z) = (i as i32 * 7 - 20, i as i32 * 9, 30 - i as i32 * 11);
            assert!(world.set_block(x, y, z, *block));
            assert_eq!(world.get_block(x, y, z), *block);
        }
        assert_eq!(world.solid_block_count(), BlockType::ALL.len() - 1);
    }

    #[test]
    fn test_set_same_value_is_noop() {
        let mut world = World::new();
        assert!(world.set_block(3, 3, 3, BlockType::Dirt));
        let revision = world.revision();

        assert!(!world.set_block(3, 3, 3, BlockType::Dirt));
        assert_eq!(world.revision(), revision);

        assert!(world.set_block(3, 3, 3, BlockType::Stone));
        assert_eq!(world.revision(), revision + 1);
    }

    #[test]
    fn test_setting_air_in_empty_space_is_noop() {
        let mut world = World::new();
        assert!(!world.set_block(100, 5, 100, BlockType::Air));
        assert_eq!(world.revision(), 0);
        // The write still materializes the chunk
        assert!(world.contains_chunk(ChunkCoord::new(6, 6)));
    }

    #[test]
    fn test_height_bounds() {
        let mut world = World::new();
        world.generate(1, 7);
        let revision = world.revision();
        let chunks = world.loaded_chunk_count();

        assert_eq!(world.get_block(0, -1, 0), BlockType::Air);
        assert_eq!(world.get_block(0, WORLD_HEIGHT, 0), BlockType::Air);
        assert!(!world.set_block(0, -1, 0, BlockType::Stone));
        assert!(!world.set_block(0, WORLD_HEIGHT, 0, BlockType::Stone));
        assert!(!world.set_block(500, -1, 500, BlockType::Stone));

        assert_eq!(world.revision(), revision);
        assert_eq!(world.loaded_chunk_count(), chunks);
        assert!(!world.contains_chunk(ChunkCoord::new(31, 31)));
    }

    #[test]
    fn test_negative_coordinates_do_not_alias() {
        let mut world = World::new();
        assert!(world.set_block(-1, 10, 0, BlockType::Stone));
        assert!(world.set_block(15, 10, 0, BlockType::Sand));

        assert_eq!(world.get_block(-1, 10, 0), BlockType::Stone);
        assert_eq!(world.get_block(15, 10, 0), BlockType::Sand);
        assert!(world.contains_chunk(ChunkCoord::new(-1, 0)));
        assert!(world.contains_chunk(ChunkCoord::new(0, 0)));
        assert_eq!(world.loaded_chunk_count(), 2);

        assert!(world.set_block(-16, 0, -17, BlockType::Wood));
        assert!(world.contains_chunk(ChunkCoord::new(-1, -2)));
        assert_eq!(world.get_block(-16, 0, -17), BlockType::Wood);
        assert_eq!(world.get_block(0, 0, -1), BlockType::Air);
    }

    #[test]
    fn test_generate_materializes_square() {
        let mut world = World::new();
        world.generate(2, 1337);

        assert_eq!(world.radius_in_chunks(), 2);
        assert_eq!(world.seed(), 1337);
        // Trees at the rim may spill into a ring of extra chunks
        assert!(world.loaded_chunk_count() >= 25);
        for z in -2..=2 {
            for x in -2..=2 {
                assert!(world.contains_chunk(ChunkCoord::new(x, z)));
            }
        }
    }

    #[test]
    fn test_generate_clamps_radius() {
        let mut world = World::new();
        world.generate(0, 5);
        assert_eq!(world.radius_in_chunks(), 1);
        world.generate(-4, 5);
        assert_eq!(world.radius_in_chunks(), 1);
        for z in -1..=1 {
            for x in -1..=1 {
                assert!(world.contains_chunk(ChunkCoord::new(x, z)));
            }
        }
    }

    #[test]
    fn test_world_bounds() {
        let mut world = World::new();
        world.generate(3, 1);
        assert_eq!(world.min_world_x(), -48);
        assert_eq!(world.max_world_x(), 63);
        assert_eq!(world.min_world_z(), -48);
        assert_eq!(world.max_world_z(), 63);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let mut a = World::new();
        let mut b = World::new();
        a.generate(2, 99);
        b.generate(2, 99);

        for z in (a.min_world_z()..=a.max_world_z()).step_by(3) {
            for x in (a.min_world_x()..=a.max_world_x()).step_by(3) {
                for y in 0..WORLD_HEIGHT {
                    assert_eq!(a.get_block(x, y, z), b.get_block(x, y, z));
                }
            }
        }
        assert_eq!(a.loaded_chunk_count(), b.loaded_chunk_count());
    }

    #[test]
    fn test_generate_replaces_previous_state() {
        let mut world = World::new();
        world.generate(1, 3);
        world.set_block(200, 30, 200, BlockType::Stone);
        assert!(world.contains_chunk(ChunkCoord::new(12, 12)));

        world.generate(1, 3);
        assert!(!world.contains_chunk(ChunkCoord::new(12, 12)));
        assert_eq!(world.get_block(200, 30, 200), BlockType::Air);
    }

    #[test]
    fn test_revision_monotonic() {
        let mut world = World::new();
        let mut last = world.revision();

        world.generate(1, 11);
        assert!(world.revision() > last);
        last = world.revision();

        let _ = world.get_block(0, 0, 0);
        let _ = world.surface_height(4, 4);
        assert_eq!(world.revision(), last);

        assert!(world.set_block(4, 0, 4, BlockType::Air));
        assert_eq!(world.revision(), last + 1);
        last = world.revision();

        world.generate(1, 11);
        assert!(world.revision() > last);
    }

    #[test]
    fn test_generated_column_layers() {
        let mut world = World::new();
        world.generate(1, 1337);
        let terrain = TerrainGenerator::new(1337);

        for z in -16..16 {
            for x in -16..16 {
                let surface = terrain.surface_height(x, z);
                assert!(world.get_block(x, 0, z).is_solid());
                assert!(world.surface_height(x, z) >= surface);
                let top = world.get_block(x, surface, z);
                // A neighbor's canopy can never replace terrain, and trunks start above it
                let expected = TerrainGenerator::column_block(surface, surface);
                assert_eq!(top, expected, "surface block at ({x}, {z})");
            }
        }
    }

    #[test]
    fn test_canopy_spill_into_later_chunk_is_overwritten() {
        let radius = 2;
        let mut found = 0;

        for seed in 0..30 {
            let mut world = World::new();
            world.generate(radius, seed);
            let terrain = TerrainGenerator::new(seed);
            let tree_at = |x: i32, z: i32| terrain.has_tree(x, z, terrain.surface_height(x, z));

            let min = -radius * CHUNK_SIZE;
            let max = (radius + 1) * CHUNK_SIZE - 1;
            for z in min..=max {
                for x in min..=max - CHUNK_SIZE {
                    if local_coord(x) != CHUNK_SIZE - 1 || !tree_at(x, z) {
                        continue;
                    }
                    let isolated = (-5..=5)
                        .flat_map(|dz| (-5..=5).map(move |dx| (dx, dz)))
                        .all(|(dx, dz)| (dx, dz) == (0, 0) || !tree_at(x + dx, z + dz));
                    if !isolated {
                        continue;
                    }

                    // Leaves grown east into the next chunk are replaced when it is filled
                    let y = terrain.surface_height(x, z) + 4;
                    let east = TerrainGenerator::column_block(terrain.surface_height(x + 1, z), y);
                    assert_eq!(world.get_block(x + 1, y, z), east, "seed {seed} at ({x}, {z})");

                    // Leaves grown west into an already filled column survive
                    if terrain.surface_height(x - 1, z) < y {
                        assert_eq!(world.get_block(x - 1, y, z), BlockType::Leaves);
                    }
                    found += 1;
                }
            }
        }

        assert!(found > 0, "no isolated chunk-edge tree in any seed");
    }

    #[test]
    fn test_surface_height() {
        let mut world = World::new();
        assert_eq!(world.surface_height(0, 0), 0);

        world.set_block(0, 0, 0, BlockType::Stone);
        assert_eq!(world.surface_height(0, 0), 0);

        world.set_block(0, 40, 0, BlockType::Leaves);
        assert_eq!(world.surface_height(0, 0), 40);

        world.set_block(0, WORLD_HEIGHT - 1, 0, BlockType::Wood);
        assert_eq!(world.surface_height(0, 0), WORLD_HEIGHT - 1);
    }

    #[test]
    fn test_chunk_coordinates() {
        let mut world = World::new();
        world.set_block(0, 0, 0, BlockType::Stone);
        world.set_block(-1, 0, 0, BlockType::Stone);
        world.set_block(0, 0, 16, BlockType::Stone);

        let mut coords = world.chunk_coordinates();
        coords.sort();
        assert_eq!(
            coords,
            vec![ChunkCoord::new(-1, 0), ChunkCoord::new(0, 0), ChunkCoord::new(0, 1)]
        );
    }
}
