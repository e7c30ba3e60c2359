//! Top-down block maps for inspecting a region of the world

use super::block::BlockType;
use super::world::World;

/// Which layer a top-down map shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverviewMode {
    /// Topmost solid block of each column
    Surface,
    /// Fixed horizontal layer
    Slice(i32),
}

/// One sampled column of an [`Overview`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverviewCell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub block: BlockType,
}

/// Square grid of samples centered on a world column, rows ordered by z
#[derive(Clone, Debug)]
pub struct Overview {
    pub center_x: i32,
    pub center_z: i32,
    pub radius: i32,
    pub mode: OverviewMode,
    cells: Vec<OverviewCell>,
}

impl Overview {
    /// Number of cells along each side
    pub fn diameter(&self) -> i32 {
        self.radius * 2 + 1
    }

    /// Cell at an offset from the center, or None outside the grid
    pub fn cell(&self, dx: i32, dz: i32) -> Option<&OverviewCell> {
        let radius = self.radius.unsigned_abs();
        if dx.unsigned_abs() > radius || dz.unsigned_abs() > radius {
            return None;
        }
        let row = (dz + self.radius) as usize;
        let col = (dx + self.radius) as usize;
        self.cells.get(row * self.diameter() as usize + col)
    }

    /// All cells, z-major
    pub fn cells(&self) -> &[OverviewCell] {
        &self.cells
    }

    /// Count cells holding the given block
    pub fn count(&self, block: BlockType) -> usize {
        self.cells.iter().filter(|cell| cell.block == block).count()
    }
}

/// Sample a `(2 * radius + 1)²` grid of columns around `(center_x, center_z)`.
///
/// Negative radii sample only the center column. Columns past the edge of
/// the `i32` grid read as air at the clamped edge coordinate.
pub fn sample_overview(
    world: &World,
    center_x: i32,
    center_z: i32,
    radius: i32,
    mode: OverviewMode,
) -> Overview {
    let radius = radius.max(0);
    let diameter = (radius * 2 + 1) as usize;
    let mut cells = Vec::with_capacity(diameter * diameter);

    for dz in -radius..=radius {
        for dx in -radius..=radius {
            let (Some(x), Some(z)) = (center_x.checked_add(dx), center_z.checked_add(dz)) else {
                cells.push(OverviewCell {
                    x: center_x.saturating_add(dx),
                    y: match mode {
                        OverviewMode::Surface => 0,
                        OverviewMode::Slice(y) => y,
                    },
                    z: center_z.saturating_add(dz),
                    block: BlockType::Air,
                });
                continue;
            };
            let y = match mode {
                OverviewMode::Surface => world.surface_height(x, z),
                OverviewMode::Slice(y) => y,
            };
            cells.push(OverviewCell {
                x,
                y,
                z,
                block: world.get_block(x, y, z),
            });
        }
    }

    Overview {
        center_x,
        center_z,
        radius,
        mode,
        cells,
    }
}
