//! World generator binary: generates a block world, meshes every chunk and
//! reports what was built.
//!
//! Usage: cargo run --release --bin generate_world -- [OPTIONS]
//!
//! Options:
//!   --radius <N>      Radius in chunks around the origin (default: 8)
//!   --seed <SEED>     Terrain seed (default: 1337)
//!   --config <PATH>   Load a world config JSON; flags above override it
//!   --summary <PATH>  Write a JSON summary of the generated world

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use serde_json::json;

use blockworld::core::Result;
use blockworld::meshing::{build_chunk_mesh, ChunkMesh};
use blockworld::voxel::block::BLOCK_TYPE_COUNT;
use blockworld::voxel::{BlockType, World, WorldConfig, CHUNK_SIZE, WORLD_HEIGHT};

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => WorldConfig::load(&path)?,
        None => WorldConfig::default(),
    };
    if let Some(radius) = parse_i32_arg(&args, "--radius") {
        config.radius_in_chunks = radius;
    }
    if let Some(seed) = parse_i32_arg(&args, "--seed") {
        config.seed = seed;
    }
    config.validate()?;
    let summary_path = parse_str_arg(&args, "--summary").map(PathBuf::from);

    let side = config.radius_in_chunks * 2 + 1;
    println!("=== Blockworld Generator ===");
    println!("Radius: {} chunks ({} x {} grid)", config.radius_in_chunks, side, side);
    println!("Seed:   {}", config.seed);
    println!("Size:   {} x {} x {} blocks", side * CHUNK_SIZE, WORLD_HEIGHT, side * CHUNK_SIZE);
    println!();

    // Phase 1: Terrain
    let start = Instant::now();
    let world = World::from_config(&config);
    let generate_time = start.elapsed();
    log::info!(
        "Generated {} chunks in {:.1}ms (revision {})",
        world.loaded_chunk_count(),
        generate_time.as_secs_f64() * 1000.0,
        world.revision()
    );

    // Phase 2: Meshing
    let mut coords = world.chunk_coordinates();
    coords.sort();
    let total = coords.len();
    let meshed = AtomicUsize::new(0);

    let start = Instant::now();
    let meshes: Vec<ChunkMesh> = coords
        .par_iter()
        .map(|&coord| {
            let mesh = build_chunk_mesh(&world, coord);
            let done = meshed.fetch_add(1, Ordering::Relaxed) + 1;
            if done % 100 == 0 || done == total {
                log::debug!("  [{}/{}] meshed", done, total);
            }
            mesh
        })
        .collect();
    let mesh_time = start.elapsed();

    let non_empty = meshes.iter().filter(|mesh| !mesh.is_empty()).count();
    let vertices: usize = meshes.iter().map(|mesh| mesh.vertices.len()).sum();
    let triangles: usize = meshes.iter().map(ChunkMesh::triangle_count).sum();
    let quads: usize = meshes.iter().map(ChunkMesh::quad_count).sum();
    let bounds = meshes
        .iter()
        .filter(|mesh| !mesh.is_empty())
        .map(|mesh| mesh.bounds)
        .reduce(|a, b| a.merged(&b));

    // Phase 3: Block census
    let mut block_counts = [0usize; BLOCK_TYPE_COUNT];
    for z in world.min_world_z()..=world.max_world_z() {
        for x in world.min_world_x()..=world.max_world_x() {
            for y in 0..WORLD_HEIGHT {
                block_counts[world.get_block(x, y, z) as usize] += 1;
            }
        }
    }

    println!("Chunks:    {} loaded, {} with geometry", total, non_empty);
    println!("Blocks:    {} solid", world.solid_block_count());
    println!("Mesh:      {} quads, {} vertices, {} triangles", quads, vertices, triangles);
    if let Some(bounds) = bounds {
        let size = bounds.size();
        let center = bounds.center();
        println!(
            "Bounds:    {:.0} x {:.0} x {:.0} centered at ({:.1}, {:.1}, {:.1})",
            size.x, size.y, size.z, center.x, center.y, center.z
        );
    }
    println!(
        "Time:      {:.1}ms generate, {:.1}ms mesh",
        generate_time.as_secs_f64() * 1000.0,
        mesh_time.as_secs_f64() * 1000.0
    );
    for block in BlockType::ALL.iter().filter(|block| block.is_solid()) {
        println!("  {:<8} {}", block.name(), block_counts[*block as usize]);
    }

    if let Some(path) = summary_path {
        let summary = json!({
            "radius_in_chunks": config.radius_in_chunks,
            "seed": config.seed,
            "revision": world.revision(),
            "solid_blocks": world.solid_block_count(),
            "chunk_size": CHUNK_SIZE,
            "world_height": WORLD_HEIGHT,
            "bounds": {
                "min_x": world.min_world_x(),
                "max_x": world.max_world_x(),
                "min_z": world.min_world_z(),
                "max_z": world.max_world_z(),
            },
            "chunks": {
                "loaded": total,
                "with_geometry": non_empty,
            },
            "mesh": {
                "bounds": bounds.map(|b| json!({
                    "min": b.min.to_array(),
                    "max": b.max.to_array(),
                })),
                "quads": quads,
                "vertices": vertices,
                "triangles": triangles,
            },
            "blocks": BlockType::ALL.iter().map(|block| {
                json!({"name": block.name(), "count": block_counts[*block as usize]})
            }).collect::<Vec<_>>(),
            "timing_ms": {
                "generate": generate_time.as_secs_f64() * 1000.0,
                "mesh": mesh_time.as_secs_f64() * 1000.0,
            },
        });

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&path, serde_json::to_string_pretty(&summary)?)?;
        println!();
        println!("Summary: {}", path.display());
    }

    Ok(())
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
