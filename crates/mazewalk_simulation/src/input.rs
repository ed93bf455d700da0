//! Per-frame snapshot of semantic input actions.
//!
//! The client maps raw key state (W/↑, A/←, D/→, R) into this resource once
//! per frame, before the simulation step reads it. For headless tests — write
//! the fields directly.

use bevy::prelude::*;

/// Pressed-state of the recognized actions for the current frame.
///
/// Latest write wins; the movement step reads it exactly once per frame.
/// `reset` is edge-triggered by the client (one frame per key press), so the
/// teleport is effectively idempotent.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ActionState {
    /// Move in the character's facing direction.
    pub forward: bool,
    /// Increase yaw (counter-clockwise seen from above).
    pub turn_left: bool,
    /// Decrease yaw.
    pub turn_right: bool,
    /// Teleport back to the spawn point (heading untouched).
    pub reset: bool,
}

impl ActionState {
    /// True when any movement key is held — the Idle/Moving predicate.
    pub fn any_movement(&self) -> bool {
        self.forward || self.turn_left || self.turn_right
    }
}
