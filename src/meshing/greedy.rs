//! Greedy meshing of chunk columns
//!
//! Each axis is swept one plane at a time. For every plane a 2D mask records
//! which cells hold a visible face (block type plus facing), then equal cells
//! are merged into rectangles row by row. Neighboring chunks are read through
//! the world, so faces between two loaded chunks are culled while faces
//! against unloaded space are kept.

use glam::{I64Vec3, IVec3};

use super::mesh::{block_color, ChunkMesh};
use crate::voxel::{BlockType, ChunkCoord, World, CHUNK_SIZE, WORLD_HEIGHT};

/// Extent of a chunk column along x, y and z
const DIMS: [i32; 3] = [CHUNK_SIZE, WORLD_HEIGHT, CHUNK_SIZE];

/// One cell of a plane mask. `normal` is +1 when the face points along the
/// sweep axis, -1 when it points back, 0 when there is no face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct MaskCell {
    block: BlockType,
    normal: i8,
}

impl MaskCell {
    const EMPTY: MaskCell = MaskCell {
        block: BlockType::Air,
        normal: 0,
    };

    #[inline]
    fn is_empty(&self) -> bool {
        self.normal == 0
    }
}

/// Rectangle of equal mask cells, in mask coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MaskRect {
    i: i32,
    j: i32,
    width: i32,
    height: i32,
    cell: MaskCell,
}

/// World position of the chunk's minimum corner, widened so that neighbor
/// samples and far vertices of edge chunks cannot overflow
#[inline]
fn chunk_origin(coord: ChunkCoord) -> I64Vec3 {
    I64Vec3::new(
        coord.x as i64 * CHUNK_SIZE as i64,
        0,
        coord.z as i64 * CHUNK_SIZE as i64,
    )
}

#[inline]
fn is_inside(p: IVec3) -> bool {
    (0..3).all(|axis| p[axis] >= 0 && p[axis] < DIMS[axis])
}

/// Merge equal non-empty cells of a `width`×`height` mask into rectangles.
///
/// Scans row-major: a rectangle grows along the row while cells match, then
/// down while the whole next row segment matches. Consumed cells are cleared,
/// so the mask is empty afterwards.
fn merge_mask(mask: &mut [MaskCell], width: i32, height: i32, rects: &mut Vec<MaskRect>) {
    let w_stride = width as usize;

    for j in 0..height {
        let mut i = 0;
        while i < width {
            let n = j as usize * w_stride + i as usize;
            let cell = mask[n];
            if cell.is_empty() {
                i += 1;
                continue;
            }

            let mut w = 1;
            while i + w < width && mask[n + w as usize] == cell {
                w += 1;
            }

            let mut h = 1;
            'grow: while j + h < height {
                let row = n + h as usize * w_stride;
                for k in 0..w as usize {
                    if mask[row + k] != cell {
                        break 'grow;
                    }
                }
                h += 1;
            }

            for l in 0..h as usize {
                let row = n + l * w_stride;
                mask[row..row + w as usize].fill(MaskCell::EMPTY);
            }

            rects.push(MaskRect {
                i,
                j,
                width: w,
                height: h,
                cell,
            });
            i += w;
        }
    }
}

/// Build the surface mesh of one chunk column.
///
/// Reads the world only. A face is emitted wherever a solid block of this
/// chunk touches air, including air in unloaded neighbors and outside the
/// world height.
pub fn build_chunk_mesh(world: &World, coord: ChunkCoord) -> ChunkMesh {
    let mut mesh = ChunkMesh::new(coord);
    let origin = chunk_origin(coord);
    let sample = |local: IVec3| {
        let p = origin + local.as_i64vec3();
        match (i32::try_from(p.x), i32::try_from(p.z)) {
            (Ok(x), Ok(z)) => world.get_block(x, local.y, z),
            // Past the edge of the i32 grid nothing can be stored
            _ => BlockType::Air,
        }
    };

    let mut mask: Vec<MaskCell> = Vec::new();
    let mut rects: Vec<MaskRect> = Vec::with_capacity(64);

    for d in 0..3 {
        let u = (d + 1) % 3;
        let v = (d + 2) % 3;
        let (width, height) = (DIMS[u], DIMS[v]);

        let mut step = IVec3::ZERO;
        step[d] = 1;

        mask.clear();
        mask.resize((width * height) as usize, MaskCell::EMPTY);

        for slice in -1..DIMS[d] {
            let mut n = 0;
            for j in 0..height {
                for i in 0..width {
                    let mut a = IVec3::ZERO;
                    a[d] = slice;
                    a[u] = i;
                    a[v] = j;
                    let b = a + step;

                    let block_a = sample(a);
                    let block_b = sample(b);
                    mask[n] = if block_a.is_solid() && !block_b.is_solid() && is_inside(a) {
                        MaskCell {
                            block: block_a,
                            normal: 1,
                        }
                    } else if !block_a.is_solid() && block_b.is_solid() && is_inside(b) {
                        MaskCell {
                            block: block_b,
                            normal: -1,
                        }
                    } else {
                        MaskCell::EMPTY
                    };
                    n += 1;
                }
            }

            rects.clear();
            merge_mask(&mut mask, width, height, &mut rects);

            for rect in &rects {
                let mut p0 = IVec3::ZERO;
                p0[d] = slice + 1;
                p0[u] = rect.i;
                p0[v] = rect.j;

                let mut du = IVec3::ZERO;
                du[u] = rect.width;
                let mut dv = IVec3::ZERO;
                dv[v] = rect.height;

                let base = origin + p0.as_i64vec3();
                let (du, dv) = (du.as_i64vec3(), dv.as_i64vec3());
                let corners = [base, base + du, base + du + dv, base + dv].map(|p| p.as_vec3());
                mesh.push_quad(corners, block_color(rect.cell.block), rect.cell.normal < 0);
            }
        }
    }

    mesh.compute_bounds();
    mesh
}
