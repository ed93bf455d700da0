//! Rendering sync: simulation pose → character model, locomotion state → walk
//! clip.
//!
//! The sync is one-way. The simulation owns the pose; the loaded scene root is
//! just a view of it, refreshed after every step. Animation control is a
//! per-frame idempotent mirror of `LocomotionState`, so a clip that finishes
//! loading mid-walk starts playing on the next frame without any extra
//! bookkeeping.

use bevy::prelude::*;
use mazewalk_simulation::{CharacterPose, LocomotionState, SimulationSet};

use crate::scene::{CharacterAnimation, CharacterVisual};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sync_character_visual,
                wire_animation_player,
                drive_walk_animation,
            )
                .chain()
                .after(SimulationSet::Step),
        );
    }
}

/// Copy the authoritative pose onto the character model's root transform.
/// Spawn-time scale is preserved (only translation and yaw are views of the
/// pose).
fn sync_character_visual(
    characters: Query<&CharacterPose>,
    mut visuals: Query<&mut Transform, With<CharacterVisual>>,
) {
    let Ok(pose) = characters.single() else {
        return;
    };

    for mut transform in &mut visuals {
        transform.translation = pose.position;
        transform.rotation = Quat::from_rotation_y(pose.yaw);
    }
}

/// Attach the walk graph to the scene's `AnimationPlayer` once it exists.
/// The character file is the only animated asset, so the first player wins.
fn wire_animation_player(
    mut commands: Commands,
    mut animation: ResMut<CharacterAnimation>,
    players: Query<Entity, Added<AnimationPlayer>>,
) {
    if animation.player.is_some() {
        return;
    }

    if let Some(entity) = players.iter().next() {
        commands
            .entity(entity)
            .insert(AnimationGraphHandle(animation.graph.clone()));
        animation.player = Some(entity);
        info!("walk animation wired to {entity}");
    }
}

/// Play the walk clip while Moving, stop it while Idle.
fn drive_walk_animation(
    animation: Res<CharacterAnimation>,
    states: Query<&LocomotionState>,
    mut players: Query<&mut AnimationPlayer>,
) {
    let Some(player_entity) = animation.player else {
        return; // character scene still loading
    };
    let Ok(state) = states.single() else {
        return;
    };
    let Ok(mut player) = players.get_mut(player_entity) else {
        return;
    };

    match state {
        LocomotionState::Moving => {
            if !player.is_playing_animation(animation.node) {
                player.play(animation.node).repeat();
            }
        }
        LocomotionState::Idle => {
            if player.is_playing_animation(animation.node) {
                player.stop(animation.node);
            }
        }
    }
}
