//! Character components: authoritative pose, moving collider, locomotion state.
//!
//! The pose is the single source of truth. The client mirrors it onto the
//! loaded character model once per frame (one-way: pose → visual transform),
//! and the moving AABB is rebuilt from it for every collision test, so the
//! collider position always equals the pose of the last committed move.

use bevy::prelude::*;

use crate::movement::SPAWN_POSITION;

/// Authoritative character pose: position + yaw.
///
/// Mutated only by the movement step. Yaw is a plain angle (radians around +Y)
/// rather than a quaternion — the character never pitches or rolls.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CharacterPose {
    pub position: Vec3,
    pub yaw: f32,
}

impl Default for CharacterPose {
    fn default() -> Self {
        Self {
            position: SPAWN_POSITION,
            yaw: 0.0,
        }
    }
}

/// Half extents of the character's moving box (a 1×2×1 box by default,
/// centered on the pose position).
#[derive(Component, Debug, Clone, Copy)]
pub struct CharacterCollider {
    pub half_extents: Vec3,
}

impl Default for CharacterCollider {
    fn default() -> Self {
        Self {
            half_extents: Vec3::new(0.5, 1.0, 0.5),
        }
    }
}

/// Locomotion state machine: Moving while any movement key is held.
///
/// The client starts the walk clip on entering `Moving` and stops it on
/// entering `Idle`. Transitions land exactly on the frame the key predicate
/// changes (see `locomotion::update_locomotion`).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionState {
    #[default]
    Idle,
    Moving,
}

/// Spawn helper: one simulation character at the spawn point.
pub fn spawn_character(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            CharacterPose::default(),
            CharacterCollider::default(),
            LocomotionState::default(),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_is_at_spawn() {
        let pose = CharacterPose::default();
        assert_eq!(pose.position, SPAWN_POSITION);
        assert_eq!(pose.yaw, 0.0);
    }

    #[test]
    fn default_collider_matches_character_box() {
        let collider = CharacterCollider::default();
        // 1m wide, 2m tall, 1m deep
        assert_eq!(collider.half_extents, Vec3::new(0.5, 1.0, 0.5));
    }
}
