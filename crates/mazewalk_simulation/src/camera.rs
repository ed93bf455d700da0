//! Chase camera: fixed local offset behind the character, per-frame smoothing.
//!
//! The smoothing factor is a plain 10% step per rendered frame, deliberately
//! not scaled by dt — the observed camera feel is frame-rate dependent and is
//! reproduced as-is. The camera itself is never collision tested.

use bevy::prelude::*;
use serde::Deserialize;

use crate::character::CharacterPose;

/// Marker for the camera entity the follow system drives.
#[derive(Component, Debug, Default)]
pub struct FollowCamera;

/// Camera tuning. Scalars overridable from `settings.toml` on the client;
/// the local offset is part of the scene's identity and stays fixed.
#[derive(Resource, Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Lerp factor applied once per frame (not dt-scaled).
    pub smoothing: f32,
    /// Look-at height above the character position.
    pub look_height: f32,
    /// Desired camera position relative to the character, in character-local
    /// space (behind and above).
    #[serde(skip)]
    pub follow_offset: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            look_height: 1.2,
            follow_offset: Vec3::new(0.0, 1.5, -3.0),
        }
    }
}

/// Where the camera wants to be for a given pose.
pub fn desired_position(pose: &CharacterPose, config: &CameraConfig) -> Vec3 {
    pose.position + Quat::from_rotation_y(pose.yaw) * config.follow_offset
}

/// One smoothing step: `current + smoothing * (desired - current)`.
pub fn follow_step(current: Vec3, desired: Vec3, smoothing: f32) -> Vec3 {
    current.lerp(desired, smoothing)
}

/// Per-frame system: ease every follow camera toward its desired spot and aim
/// it at the character's chest height.
pub fn follow_camera(
    characters: Query<&CharacterPose>,
    mut cameras: Query<&mut Transform, With<FollowCamera>>,
    config: Res<CameraConfig>,
) {
    let Ok(pose) = characters.single() else {
        return; // nothing to follow yet
    };

    for mut transform in &mut cameras {
        let desired = desired_position(pose, &config);
        transform.translation = follow_step(transform.translation, desired, config.smoothing);

        let look_target = pose.position + Vec3::Y * config.look_height;
        transform.look_at(look_target, Vec3::Y);
    }
}
