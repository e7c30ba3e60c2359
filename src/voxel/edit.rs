//! Block editing driven by raycast hits

use glam::IVec3;

use super::block::BlockType;
use super::raycast::BlockHit;
use super::world::World;

/// Blocks selectable from the hotbar, in slot order
pub const HOTBAR: [BlockType; 5] = [
    BlockType::Grass,
    BlockType::Dirt,
    BlockType::Stone,
    BlockType::Sand,
    BlockType::Wood,
];

/// Block held in a hotbar slot. Slots wrap around.
pub fn hotbar_block(slot: u8) -> BlockType {
    HOTBAR[slot as usize % HOTBAR.len()]
}

/// Remove the block that was hit.
///
/// The bottom layer is indestructible. Returns true if the world changed.
pub fn break_block(world: &mut World, hit: &BlockHit) -> bool {
    if hit.position.y == 0 {
        return false;
    }
    world.set_block(hit.position.x, hit.position.y, hit.position.z, BlockType::Air)
}

/// Place `block` against the face that was hit.
///
/// `occupied` is the cell the player stands in; placing into it is refused.
/// Returns true if the world changed.
pub fn place_block(world: &mut World, hit: &BlockHit, block: BlockType, occupied: IVec3) -> bool {
    let Some(target) = hit.adjacent() else {
        return false;
    };
    if target == occupied {
        return false;
    }
    world.set_block(target.x, target.y, target.z, block)
}
