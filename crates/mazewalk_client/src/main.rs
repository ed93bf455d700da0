use bevy::prelude::*;
use mazewalk_simulation::SimulationPlugin;

mod colliders;
mod input;
mod rendering;
mod scene;
mod settings;

use colliders::ColliderExtractionPlugin;
use input::KeyboardInputPlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    // Read tuning overrides before the app (and its logger) exists
    let settings = settings::load_settings();

    App::new()
        // Sky color
        .insert_resource(ClearColor(Color::srgb_u8(0x87, 0xce, 0xeb)))
        // Config resources go in first; SimulationPlugin keeps them as-is
        .insert_resource(settings.movement)
        .insert_resource(settings.camera)
        // Bevy defaults (rendering, input, gltf, animation, log, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Mazewalk".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin)
        // Keyboard → action snapshot
        .add_plugins(KeyboardInputPlugin)
        // Scenery AABB extraction (one-shot, after the maze scene spawns)
        .add_plugins(ColliderExtractionPlugin)
        // Rendering sync (simulation → visuals + walk animation)
        .add_plugins(RenderingSyncPlugin)
        // Setup scene
        .add_systems(Startup, scene::setup_scene)
        .run();
}
