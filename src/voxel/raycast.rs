//! Fixed-step ray marching against the block grid
//!
//! The ray is sampled every [`RAY_STEP`] units rather than traversed cell by
//! cell, so a ray grazing a thin feature can step over it. Gameplay depends on
//! these exact hit results.

use glam::{I64Vec3, IVec3, Vec3};

use super::block::BlockType;
use super::world::World;
use crate::math::Ray;

/// Distance between consecutive samples along the ray
pub const RAY_STEP: f32 = 0.1;

/// First solid block found along a ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockHit {
    /// Block coordinate of the hit cell
    pub position: IVec3,
    /// Face the ray entered through, one unit step per axis
    pub normal: IVec3,
    /// Ray parameter of the sample that hit
    pub distance: f32,
    pub block: BlockType,
}

impl BlockHit {
    /// Cell in front of the hit face, where a placed block would go.
    /// None when that cell lies outside the `i32` grid.
    pub fn adjacent(&self) -> Option<IVec3> {
        Some(IVec3::new(
            self.position.x.checked_add(self.normal.x)?,
            self.position.y.checked_add(self.normal.y)?,
            self.position.z.checked_add(self.normal.z)?,
        ))
    }
}

impl World {
    /// March along a ray and return the first solid block within `max_distance`.
    ///
    /// Returns None for a (nearly) zero direction, a non-positive distance,
    /// or when every sample is air. Takes at most one sample per [`RAY_STEP`]
    /// of distance, and stops early once the step no longer advances `t`.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<BlockHit> {
        if !(max_distance > 0.0) {
            return None;
        }
        let ray = Ray::new(origin, direction)?;

        // Saturates for infinite distances; the stall check below ends those
        let max_steps = ((max_distance / RAY_STEP).ceil() as u64).saturating_add(1);

        let mut previous = origin.floor().as_ivec3();
        let mut t = 0.0f32;
        let mut steps = 0u64;
        while t <= max_distance && steps <= max_steps {
            let cell = ray.cell_at(t);
            let block = self.get_block(cell.x, cell.y, cell.z);
            if block.is_solid() {
                let delta = previous.as_i64vec3() - cell.as_i64vec3();
                let normal = if delta == I64Vec3::ZERO {
                    IVec3::Y
                } else {
                    delta.clamp(I64Vec3::splat(-1), I64Vec3::ONE).as_ivec3()
                };

                return Some(BlockHit {
                    position: cell,
                    normal,
                    distance: t,
                    block,
                });
            }

            previous = cell;
            let next = t + RAY_STEP;
            if next == t {
                break;
            }
            t = next;
            steps += 1;
        }

        None
    }
}
