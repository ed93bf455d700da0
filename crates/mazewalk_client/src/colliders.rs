//! One-shot collider extraction from the spawned maze scene.
//!
//! Walks the scenery hierarchy, computes each mesh's local AABB, and stores
//! the world-space boxes in `StaticColliders`. Runs in `PostUpdate` after
//! transform propagation so the `GlobalTransform`s are final for the frame;
//! until the scene has actually spawned the walk finds nothing and the system
//! just tries again next frame.

use bevy::prelude::*;
use bevy::render::mesh::MeshAabb;
use bevy::transform::TransformSystem;
use mazewalk_simulation::{world_aabb, StaticColliders};

use crate::scene::ColliderSource;

pub struct ColliderExtractionPlugin;

impl Plugin for ColliderExtractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            extract_scenery_colliders.after(TransformSystem::TransformPropagate),
        );
    }
}

fn extract_scenery_colliders(
    mut commands: Commands,
    mut colliders: ResMut<StaticColliders>,
    sources: Query<Entity, With<ColliderSource>>,
    children_query: Query<&Children>,
    mesh_query: Query<(&Mesh3d, &GlobalTransform)>,
    meshes: Res<Assets<Mesh>>,
) {
    for root in &sources {
        let mut boxes = Vec::new();

        // Depth-first walk over the scene instance
        let mut stack = vec![root];
        while let Some(entity) = stack.pop() {
            if let Ok(children) = children_query.get(entity) {
                for child in children.iter() {
                    stack.push(child);
                }
            }

            let Ok((mesh3d, transform)) = mesh_query.get(entity) else {
                continue;
            };
            let Some(aabb) = meshes.get(&mesh3d.0).and_then(Mesh::compute_aabb) else {
                continue;
            };
            boxes.push(world_aabb(
                aabb.center.into(),
                aabb.half_extents.into(),
                transform,
            ));
        }

        if boxes.is_empty() {
            // Scene instance not spawned yet
            continue;
        }

        info!("extracted {} collision boxes from scenery", boxes.len());
        colliders.replace(boxes);
        commands.entity(root).remove::<ColliderSource>();
    }
}
