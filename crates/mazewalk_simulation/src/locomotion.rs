//! Idle/Moving state machine.
//!
//! Two states, one predicate: Moving while any movement key is held. The
//! transition is applied with `set_if_neq`, so `Changed<LocomotionState>`
//! fires exactly on the frame the predicate flips — the client keys its
//! walk-clip start/stop off that.

use bevy::prelude::*;

use crate::character::LocomotionState;
use crate::input::ActionState;

/// Per-frame system: recompute the state from this frame's action snapshot.
pub fn update_locomotion(actions: Res<ActionState>, mut states: Query<&mut LocomotionState>) {
    let target = if actions.any_movement() {
        LocomotionState::Moving
    } else {
        LocomotionState::Idle
    };

    for mut state in &mut states {
        state.set_if_neq(target);
    }
}
