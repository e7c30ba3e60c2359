//! Walking player: ground following, jumping and block targeting

use glam::{IVec3, Vec2, Vec3};

use super::block::BlockType;
use super::chunk::WORLD_HEIGHT;
use super::edit::{hotbar_block, HOTBAR};
use super::raycast::BlockHit;
use super::world::World;

/// Downward acceleration in blocks per second squared
pub const GRAVITY: f32 = -20.0;

/// Eye offset above the feet
pub const EYE_HEIGHT: f32 = 1.5;

/// Fixed look direction used for block targeting
pub const LOOK_DIRECTION: Vec3 = Vec3::new(0.0, -0.3, 1.0);

/// Where new players appear
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 30.0, 0.0);

/// Position and movement state of the player
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    /// Feet position in world space
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub grounded: bool,
    /// Horizontal speed in blocks per second
    pub walk_speed: f32,
    /// Upward velocity given by a jump
    pub jump_speed: f32,
    /// Maximum targeting distance
    pub reach_distance: f32,
    /// Hotbar slot of the block to place
    pub selected_slot: u8,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: SPAWN_POSITION,
            vertical_velocity: 0.0,
            grounded: false,
            walk_speed: 6.0,
            jump_speed: 7.5,
            reach_distance: 6.0,
            selected_slot: 0,
        }
    }
}

impl PlayerState {
    /// Eye position, the origin of targeting rays
    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::new(0.0, EYE_HEIGHT, 0.0)
    }

    /// Block cell containing the player's feet
    pub fn occupied_cell(&self) -> IVec3 {
        self.position.floor().as_ivec3()
    }

    /// Block the player is looking at, within reach
    pub fn target(&self, world: &World) -> Option<BlockHit> {
        world.raycast(self.eye(), LOOK_DIRECTION, self.reach_distance)
    }

    /// Advance to the next hotbar slot, wrapping after the last
    pub fn cycle_selection(&mut self) {
        self.selected_slot = ((self.selected_slot as usize + 1) % HOTBAR.len()) as u8;
    }

    pub fn selected_block(&self) -> BlockType {
        hotbar_block(self.selected_slot)
    }
}

/// Advance the player by `dt` seconds.
///
/// `input` is the horizontal move intent with x along world X and y along
/// world Z; it is normalized when non-zero. The player is kept one block
/// inside the generated area and stands on top of the column below it.
/// `jump` only takes effect while grounded.
pub fn step_player(world: &World, player: &mut PlayerState, input: Vec2, jump: bool, dt: f32) {
    let length = input.length();
    let direction = if length > 0.001 { input / length } else { input };

    let horizontal = direction * player.walk_speed * dt;
    player.position.x += horizontal.x;
    player.position.z += horizontal.y;

    player.position.x = player
        .position
        .x
        .max((world.min_world_x() + 1) as f32)
        .min((world.max_world_x() - 1) as f32);
    player.position.z = player
        .position
        .z
        .max((world.min_world_z() + 1) as f32)
        .min((world.max_world_z() - 1) as f32);

    let sample_x = player.position.x.floor() as i32;
    let sample_z = player.position.z.floor() as i32;
    let ground = (world.surface_height(sample_x, sample_z) + 1) as f32;

    if player.position.y <= ground {
        player.position.y = ground;
        player.grounded = true;
        player.vertical_velocity = 0.0;
    } else {
        player.grounded = false;
    }

    if player.grounded && jump {
        player.vertical_velocity = player.jump_speed;
        player.grounded = false;
    }

    if !player.grounded {
        player.vertical_velocity += GRAVITY * dt;
        player.position.y += player.vertical_velocity * dt;
    }

    player.position.y = player.position.y.max(1.0).min((WORLD_HEIGHT - 1) as f32);
}
