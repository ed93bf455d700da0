//! Mazewalk simulation core
//!
//! Engine-agnostic game logic as Bevy ECS systems:
//! - keyboard-driven character with AABB collision against static scenery
//! - fixed-offset chase camera with per-frame smoothing
//! - Idle/Moving locomotion state machine (drives the client's walk clip)
//!
//! The crate is headless: no rendering, window, or asset types. The client
//! fills [`ActionState`] from real input and mirrors [`CharacterPose`] onto
//! the loaded character model; tests fill [`ActionState`] directly and
//! advance [`Time`] by hand.

use bevy::prelude::*;

pub mod camera;
pub mod character;
pub mod collision;
pub mod input;
pub mod locomotion;
pub mod movement;

pub use camera::{CameraConfig, FollowCamera};
pub use character::{spawn_character, CharacterCollider, CharacterPose, LocomotionState};
pub use collision::{world_aabb, StaticColliders};
pub use input::ActionState;
pub use movement::{step_character, MovementConfig, StepOutcome, MAX_FRAME_DT, SPAWN_POSITION};

/// Frame ordering for the simulation and its neighbors.
///
/// - `Input`: the client's keyboard mapping writes [`ActionState`]
/// - `Step`: locomotion → movement → camera follow (chained)
///
/// Client-side sync systems (visual transform, animation drive) run after
/// `Step` in the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Step,
}

/// Main simulation plugin (resources + the per-frame step)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // init_resource keeps configs already inserted by the client
            .init_resource::<ActionState>()
            .init_resource::<StaticColliders>()
            .init_resource::<MovementConfig>()
            .init_resource::<CameraConfig>()
            .configure_sets(Update, (SimulationSet::Input, SimulationSet::Step).chain())
            .add_systems(
                Update,
                (
                    locomotion::update_locomotion,
                    movement::drive_character,
                    camera::follow_camera,
                )
                    .chain()
                    .in_set(SimulationSet::Step),
            );
    }
}

/// Creates a minimal Bevy App for headless simulation.
///
/// `Time` is a plain resource here (no `TimePlugin`), so tests control frame
/// deltas exactly via [`Time::advance_by`].
pub fn create_headless_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.add_plugins(SimulationPlugin);
    app
}
