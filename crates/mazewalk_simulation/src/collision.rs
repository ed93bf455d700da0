//! Static collision volumes.
//!
//! One world-space box set, filled once by the client after the maze scene
//! spawns, immutable afterwards. Intersection semantics come from
//! `bevy::math::bounding` (inclusive on the boundary).

use bevy::math::bounding::{Aabb3d, IntersectsVolume};
use bevy::prelude::*;

/// World-space AABBs of the loaded scenery.
///
/// Empty until the maze scene has spawned; an empty set never intersects, so
/// every forward move commits until then.
#[derive(Resource, Debug, Default)]
pub struct StaticColliders {
    boxes: Vec<Aabb3d>,
}

impl StaticColliders {
    /// Replaces the whole set (extraction runs once per scenery load).
    pub fn replace(&mut self, boxes: Vec<Aabb3d>) {
        self.boxes = boxes;
    }

    /// True if `probe` overlaps any static box.
    pub fn intersects(&self, probe: &Aabb3d) -> bool {
        self.boxes.iter().any(|fixed| fixed.intersects(probe))
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Transforms a local-space AABB (center + half extents) into a world-space
/// AABB by transforming its 8 corners and taking the component-wise bounds.
///
/// Handles the scenery root's scale/rotation/translation; the result is
/// axis-aligned in world space (it grows under rotation, which is what the
/// box-proxy collision model wants).
pub fn world_aabb(center: Vec3, half_extents: Vec3, transform: &GlobalTransform) -> Aabb3d {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);

    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                let corner = center + half_extents * Vec3::new(sx, sy, sz);
                let world = transform.transform_point(corner);
                min = min.min(world);
                max = max.max(world);
            }
        }
    }

    Aabb3d {
        min: min.into(),
        max: max.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn aabb(center: Vec3, half: Vec3) -> Aabb3d {
        Aabb3d::new(center, half)
    }

    #[test]
    fn empty_set_never_intersects() {
        let colliders = StaticColliders::default();
        let probe = aabb(Vec3::ZERO, Vec3::ONE);
        assert!(!colliders.intersects(&probe));
    }

    #[test]
    fn overlap_and_separation() {
        let mut colliders = StaticColliders::default();
        colliders.replace(vec![aabb(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE)]);

        // Clear overlap
        assert!(colliders.intersects(&aabb(Vec3::new(1.5, 0.0, 0.0), Vec3::ONE)));
        // Fully contained probe
        assert!(colliders.intersects(&aabb(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(0.1))));
        // Clearly apart
        assert!(!colliders.intersects(&aabb(Vec3::new(-2.0, 0.0, 0.0), Vec3::ONE)));
        // Overlapping on X only is not an intersection
        assert!(!colliders.intersects(&aabb(Vec3::new(2.0, 5.0, 0.0), Vec3::ONE)));
    }

    #[test]
    fn world_aabb_applies_scale_and_translation() {
        let transform = GlobalTransform::from(
            Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)).with_scale(Vec3::splat(2.0)),
        );
        let world = world_aabb(Vec3::ZERO, Vec3::ONE, &transform);

        assert_eq!(Vec3::from(world.min), Vec3::new(-1.0, -2.0, -2.0));
        assert_eq!(Vec3::from(world.max), Vec3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn world_aabb_stays_axis_aligned_under_rotation() {
        // Quarter turn around Y swaps the X and Z extents
        let transform =
            GlobalTransform::from(Transform::from_rotation(Quat::from_rotation_y(FRAC_PI_2)));
        let world = world_aabb(Vec3::ZERO, Vec3::new(2.0, 1.0, 0.5), &transform);

        let min = Vec3::from(world.min);
        let max = Vec3::from(world.max);
        assert!((min - Vec3::new(-0.5, -1.0, -2.0)).length() < 1e-5, "min = {min}");
        assert!((max - Vec3::new(0.5, 1.0, 2.0)).length() < 1e-5, "max = {max}");
    }

    #[test]
    fn world_aabb_offset_center() {
        let transform = GlobalTransform::from(Transform::from_scale(Vec3::splat(2.0)));
        let world = world_aabb(Vec3::new(0.0, 3.0, 0.0), Vec3::ONE, &transform);

        assert_eq!(Vec3::from(world.min), Vec3::new(-2.0, 4.0, -2.0));
        assert_eq!(Vec3::from(world.max), Vec3::new(2.0, 8.0, 2.0));
    }
}
