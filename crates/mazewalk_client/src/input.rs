//! Keyboard → semantic actions.
//!
//! W/↑ forward, A/← turn left, D/→ turn right, R reset. The snapshot is
//! rewritten every frame before the simulation step, so "latest wins" and a
//! released key is simply absent.

use bevy::prelude::*;
use mazewalk_simulation::{ActionState, SimulationSet};

pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_actions.in_set(SimulationSet::Input));
    }
}

fn keyboard_actions(keys: Res<ButtonInput<KeyCode>>, mut actions: ResMut<ActionState>) {
    actions.forward = keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp);
    actions.turn_left = keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft);
    actions.turn_right = keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight);
    // Edge-triggered: one teleport per press
    actions.reset = keys.just_pressed(KeyCode::KeyR);
}
