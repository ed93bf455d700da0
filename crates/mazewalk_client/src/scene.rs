//! Scene setup: ground, lights, fog, chase camera, asset roots, and the one
//! simulation character.
//!
//! Both glTF scenes load asynchronously. Everything downstream treats "not
//! loaded yet" as a valid state: colliders stay empty (all moves commit) and
//! the walk clip simply isn't driven until its player appears.

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use mazewalk_simulation::{spawn_character, FollowCamera, SPAWN_POSITION};

pub const MAZE_SCENE: &str = "models/maze.gltf";
pub const CHARACTER_SCENE: &str = "models/character.gltf";

/// Marker: scenery root whose meshes still need collider extraction.
/// Removed once the boxes are in `StaticColliders`.
#[derive(Component)]
pub struct ColliderSource;

/// Marker: the character model's scene root (the visual half of the pose).
#[derive(Component)]
pub struct CharacterVisual;

/// The character's walk clip: graph handle plus the player entity once the
/// spawned scene exposes one.
#[derive(Resource)]
pub struct CharacterAnimation {
    pub graph: Handle<AnimationGraph>,
    pub node: AnimationNodeIndex,
    pub player: Option<Entity>,
}

pub fn setup_scene(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
) {
    // Ground plane (50x50m)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(25.0)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x2c, 0x3e, 0x50),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 7.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ambient fill (ambient + hemisphere folded into one)
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    // Chase camera with distance fog
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 5.0, 10.0),
        FollowCamera,
        DistanceFog {
            color: Color::srgb_u8(0xa0, 0xa0, 0xa0),
            falloff: FogFalloff::Linear {
                start: 10.0,
                end: 50.0,
            },
            ..default()
        },
    ));

    // Maze scenery; collision boxes are pulled out of it once it spawns
    commands.spawn((
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(MAZE_SCENE))),
        Transform::from_scale(Vec3::splat(2.0)),
        ColliderSource,
    ));

    // Character model (visual only — the pose lives on the simulation entity)
    commands.spawn((
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(CHARACTER_SCENE))),
        Transform::from_translation(SPAWN_POSITION).with_scale(Vec3::splat(0.8)),
        CharacterVisual,
    ));

    // Walk clip (first animation in the character file)
    let clip = asset_server.load(GltfAssetLabel::Animation(0).from_asset(CHARACTER_SCENE));
    let (graph, node) = AnimationGraph::from_clip(clip);
    commands.insert_resource(CharacterAnimation {
        graph: graphs.add(graph),
        node,
        player: None,
    });

    // Simulation character (authoritative pose + moving collider)
    let _character = spawn_character(&mut commands);
}
