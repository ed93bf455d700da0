//! Movement/collision step.
//!
//! Per frame: clamp dt, apply reset, apply turning (never blocked), then
//! propose `position + forward * speed * dt` and commit it only if the moving
//! box misses every static box. Rejection is a normal branch, not an error.
//!
//! The step is a pure function so it can be tested without an `App`; the
//! system is a thin wrapper that feeds it `Time` and logs rejections.

use bevy::math::bounding::Aabb3d;
use bevy::prelude::*;
use log::debug;
use serde::Deserialize;

use crate::character::{CharacterCollider, CharacterPose};
use crate::collision::StaticColliders;
use crate::input::ActionState;

/// Fixed respawn point (box center: 1m up so the 2m box rests on the ground).
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.0, -5.0);

/// Elapsed-time ceiling per frame. Bounds the largest single-frame move after
/// a stall (window dragged, app backgrounded).
pub const MAX_FRAME_DT: f32 = 0.1;

/// Movement tuning. Overridable from `settings.toml` on the client.
#[derive(Resource, Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Forward speed (units/s).
    pub linear_speed: f32,
    /// Turn rate (radians/s).
    pub turn_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            linear_speed: 1.2,
            turn_speed: 2.5,
        }
    }
}

/// What a single step did with the forward proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No forward input this frame.
    Stationary,
    /// Candidate position committed.
    Moved,
    /// Candidate intersected scenery; position kept, yaw change kept.
    Blocked,
}

/// Advances one character pose by one frame.
pub fn step_character(
    pose: &mut CharacterPose,
    collider: &CharacterCollider,
    actions: &ActionState,
    statics: &StaticColliders,
    config: &MovementConfig,
    dt: f32,
) -> StepOutcome {
    let dt = dt.min(MAX_FRAME_DT);

    if actions.reset {
        // Observed behavior: reset teleports but keeps the heading.
        pose.position = SPAWN_POSITION;
    }

    // Turning always applies, collision or not
    if actions.turn_left {
        pose.yaw += config.turn_speed * dt;
    }
    if actions.turn_right {
        pose.yaw -= config.turn_speed * dt;
    }

    if !actions.forward {
        return StepOutcome::Stationary;
    }

    // The model is authored facing +Z, so forward is local +Z rotated by yaw
    let forward = Quat::from_rotation_y(pose.yaw) * Vec3::Z;
    let candidate = pose.position + forward * config.linear_speed * dt;

    let moved_box = Aabb3d::new(candidate, collider.half_extents);
    if statics.intersects(&moved_box) {
        StepOutcome::Blocked
    } else {
        pose.position = candidate;
        StepOutcome::Moved
    }
}

/// Per-frame system: one step per character.
pub fn drive_character(
    time: Res<Time>,
    actions: Res<ActionState>,
    statics: Res<StaticColliders>,
    config: Res<MovementConfig>,
    mut characters: Query<(&mut CharacterPose, &CharacterCollider)>,
) {
    let dt = time.delta_secs();

    for (mut pose, collider) in &mut characters {
        let outcome = step_character(&mut pose, collider, &actions, &statics, &config, dt);
        if outcome == StepOutcome::Blocked {
            debug!("forward move blocked by scenery at {}", pose.position);
        }
    }
}
