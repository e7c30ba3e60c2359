//! Revision-driven cache of chunk meshes

use std::collections::HashMap;

use rayon::prelude::*;

use super::greedy::build_chunk_mesh;
use super::mesh::ChunkMesh;
use crate::math::Aabb;
use crate::voxel::{ChunkCoord, World};

/// Holds one mesh per loaded chunk that has geometry, rebuilt whenever the
/// world revision moves.
#[derive(Default)]
pub struct ChunkMeshCache {
    meshes: HashMap<ChunkCoord, ChunkMesh>,
    /// World revision the meshes were built from, None before the first build
    revision: Option<u64>,
}

impl ChunkMeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild every mesh if the world changed since the last refresh.
    ///
    /// Chunks are meshed in parallel. Returns true if a rebuild happened.
    pub fn refresh(&mut self, world: &World) -> bool {
        if self.revision == Some(world.revision()) {
            return false;
        }

        let start = std::time::Instant::now();
        let coords = world.chunk_coordinates();
        self.meshes = coords
            .par_iter()
            .filter_map(|&coord| {
                let mesh = build_chunk_mesh(world, coord);
                if mesh.is_empty() {
                    None
                } else {
                    Some((coord, mesh))
                }
            })
            .collect();
        self.revision = Some(world.revision());

        log::info!(
            "Rebuilt voxel meshes: chunks={}, triangles={} ({:.1}ms)",
            self.meshes.len(),
            self.triangle_count(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        true
    }

    /// World revision of the current meshes
    pub fn revision(&self) -> Option<u64> {
        self.revision
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&ChunkMesh> {
        self.meshes.get(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChunkCoord, &ChunkMesh)> {
        self.meshes.iter()
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Total triangles across all cached meshes
    pub fn triangle_count(&self) -> usize {
        self.meshes.values().map(ChunkMesh::triangle_count).sum()
    }

    /// Bounds enclosing every cached mesh, None when there are none
    pub fn bounds(&self) -> Option<Aabb> {
        self.meshes
            .values()
            .map(|mesh| mesh.bounds)
            .reduce(|a, b| a.merged(&b))
    }

    /// Drop all meshes and forget the revision so the next refresh rebuilds
    pub fn clear(&mut self) {
        self.meshes.clear();
        self.revision = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::BlockType;

    #[test]
    fn test_refresh_tracks_revision() {
        let mut world = World::new();
        world.generate(1, 1337);
        let mut cache = ChunkMeshCache::new();
        assert_eq!(cache.revision(), None);

        assert!(cache.refresh(&world));
        assert_eq!(cache.revision(), Some(world.revision()));
        assert!(!cache.refresh(&world));

        world.set_block(0, 40, 0, BlockType::Stone);
        assert!(cache.refresh(&world));
        assert_eq!(cache.revision(), Some(world.revision()));
    }

    #[test]
    fn test_meshes_match_direct_build() {
        let mut world = World::new();
        world.generate(1, 7);
        let mut cache = ChunkMeshCache::new();
        cache.refresh(&world);

        assert!(cache.len() >= 9);
        for (coord, mesh) in cache.iter() {
            let direct = build_chunk_mesh(&world, *coord);
            assert_eq!(mesh.vertices, direct.vertices);
            assert_eq!(mesh.indices, direct.indices);
        }
        let total: usize = cache.iter().map(|(_, mesh)| mesh.triangle_count()).sum();
        assert_eq!(cache.triangle_count(), total);
    }

    #[test]
    fn test_skips_empty_chunks() {
        let mut world = World::new();
        world.set_block(0, 5, 0, BlockType::Dirt);
        // Materialized but all air
        world.set_block(40, 5, 40, BlockType::Air);
        world.set_block(40, 6, 40, BlockType::Stone);
        world.set_block(40, 6, 40, BlockType::Air);
        assert_eq!(world.loaded_chunk_count(), 2);

        let mut cache = ChunkMeshCache::new();
        assert!(cache.refresh(&world));
        assert_eq!(cache.len(), 1);
        assert!(cache.get(ChunkCoord::new(0, 0)).is_some());
        assert!(cache.get(ChunkCoord::new(2, 2)).is_none());
        assert_eq!(cache.triangle_count(), 12);

        let bounds = cache.bounds().unwrap();
        assert_eq!(bounds.min, glam::Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(bounds.size(), glam::Vec3::ONE);
    }

    #[test]
    fn test_empty_world_refreshes_once() {
        let world = World::new();
        let mut cache = ChunkMeshCache::new();
        assert!(cache.refresh(&world));
        assert!(cache.is_empty());
        assert!(cache.bounds().is_none());
        assert!(!cache.refresh(&world));

        cache.clear();
        assert_eq!(cache.revision(), None);
        assert!(cache.refresh(&world));
    }
}
