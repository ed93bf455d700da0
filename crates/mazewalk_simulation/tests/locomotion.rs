//! Locomotion state-machine tests: transitions land on the exact frame the
//! movement-key predicate changes.

use std::time::Duration;

use bevy::prelude::*;
use mazewalk_simulation::{
    create_headless_app, ActionState, CharacterCollider, CharacterPose, LocomotionState,
};

fn tick(app: &mut App, dt: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
    app.update();
}

fn spawn_test_character(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            CharacterPose::default(),
            CharacterCollider::default(),
            LocomotionState::default(),
        ))
        .id()
}

fn state(app: &App, entity: Entity) -> LocomotionState {
    *app.world().get::<LocomotionState>(entity).unwrap()
}

#[test]
fn idle_to_moving_on_the_exact_frame() {
    let mut app = create_headless_app();
    let character = spawn_test_character(&mut app);

    // No keys: stays Idle
    tick(&mut app, 0.016);
    assert_eq!(state(&app, character), LocomotionState::Idle);

    // Key goes down: Moving on this very frame
    app.world_mut().resource_mut::<ActionState>().forward = true;
    tick(&mut app, 0.016);
    assert_eq!(state(&app, character), LocomotionState::Moving);

    // Held: no churn
    tick(&mut app, 0.016);
    assert_eq!(state(&app, character), LocomotionState::Moving);

    // Key goes up: Idle on this very frame
    app.world_mut().resource_mut::<ActionState>().forward = false;
    tick(&mut app, 0.016);
    assert_eq!(state(&app, character), LocomotionState::Idle);
}

#[test]
fn turning_alone_counts_as_moving() {
    let mut app = create_headless_app();
    let character = spawn_test_character(&mut app);

    app.world_mut().resource_mut::<ActionState>().turn_right = true;
    tick(&mut app, 0.016);
    assert_eq!(
        state(&app, character),
        LocomotionState::Moving,
        "turn keys drive the walk animation too"
    );
}

#[test]
fn reset_does_not_wake_the_animation() {
    let mut app = create_headless_app();
    let character = spawn_test_character(&mut app);

    app.world_mut().resource_mut::<ActionState>().reset = true;
    tick(&mut app, 0.016);
    assert_eq!(state(&app, character), LocomotionState::Idle);
}

#[test]
fn blocked_movement_still_reads_as_moving() {
    use bevy::math::bounding::Aabb3d;
    use mazewalk_simulation::StaticColliders;

    let mut app = create_headless_app();
    let character = spawn_test_character(&mut app);

    // Wall flush against the character's front face
    app.world_mut()
        .resource_mut::<StaticColliders>()
        .replace(vec![Aabb3d::new(
            Vec3::new(0.0, 1.0, -4.0),
            Vec3::new(5.0, 1.0, 0.5),
        )]);

    app.world_mut().resource_mut::<ActionState>().forward = true;
    tick(&mut app, 0.016);

    // The key is held, so the character "walks in place" against the wall
    assert_eq!(state(&app, character), LocomotionState::Moving);
}
