//! Collision surfaces and predicates
//!
//! Two targets: the horizon (a ground plane at fixed height) and the portal
//! (a disk lying on that plane). Predicates are pure.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cube::Cube;
use crate::config::PortalConfig;
use crate::sample_range;

/// Horizontal ground plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizon {
    pub y: f32,
}

impl Horizon {
    pub fn new(y: f32) -> Self {
        Self { y }
    }

    /// True once a point has reached or passed below the plane
    #[inline]
    pub fn reached(&self, position: Vec3) -> bool {
        position.y <= self.y
    }
}

/// Disk on the horizon whose contact resets the whole scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    /// Centre on the horizontal plane
    pub x: f32,
    pub z: f32,
    /// Contact radius measured in the x/z plane
    pub threshold: f32,
    /// Oval half-extents for drawing
    pub width: f32,
    pub height: f32,
    pub reposition_extent: f32,
}

impl Portal {
    pub fn from_config(config: &PortalConfig) -> Self {
        Self {
            x: config.x,
            z: config.z,
            threshold: config.threshold,
            width: config.width,
            height: config.height,
            reposition_extent: config.reposition_extent,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// Horizontal distance from a point to the portal centre
    #[inline]
    pub fn horizontal_distance(&self, position: Vec3) -> f32 {
        Vec2::new(position.x, position.z).distance(self.center())
    }

    /// Move to a random point within `±reposition_extent` on both axes
    pub fn reposition<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let e = self.reposition_extent.abs();
        self.x = sample_range(rng, (-e, e));
        self.z = sample_range(rng, (-e, e));
        log::info!("Portal moved to ({:.2}, {:.2})", self.x, self.z);
    }
}

/// A cube touches the horizon once its y reaches the plane
#[inline]
pub fn hits_horizon(cube: &Cube, horizon: &Horizon) -> bool {
    horizon.reached(cube.position())
}

/// A cube touches the portal when it is within the threshold horizontally
/// and has also reached the ground plane
#[inline]
pub fn hits_portal(cube: &Cube, portal: &Portal, horizon: &Horizon) -> bool {
    portal.horizontal_distance(cube.position()) <= portal.threshold
        && horizon.reached(cube.position())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn cube_at(position: Vec3) -> Cube {
        let mut cube = Cube::new(IVec3::ZERO, 1.0, &mut Pcg32::seed_from_u64(0));
        cube.translate(position);
        cube
    }

    fn portal() -> Portal {
        Portal::from_config(&PortalConfig::default())
    }

    #[test]
    fn test_horizon_is_inclusive() {
        let horizon = Horizon::new(-5.0);
        assert!(hits_horizon(&cube_at(Vec3::new(0.0, -5.0, 0.0)), &horizon));
        assert!(hits_horizon(&cube_at(Vec3::new(0.0, -6.0, 0.0)), &horizon));
        assert!(!hits_horizon(&cube_at(Vec3::new(0.0, -4.9, 0.0)), &horizon));
    }

    #[test]
    fn test_portal_needs_ground_contact() {
        let horizon = Horizon::new(-5.0);
        let portal = portal();
        // right above the portal but still in the air
        assert!(!hits_portal(&cube_at(Vec3::new(0.0, -4.0, 0.0)), &portal, &horizon));
        assert!(hits_portal(&cube_at(Vec3::new(0.0, -5.0, 0.0)), &portal, &horizon));
    }

    #[test]
    fn test_portal_threshold() {
        let horizon = Horizon::new(-5.0);
        let portal = portal();
        assert!(hits_portal(&cube_at(Vec3::new(1.0, -6.0, 1.0)), &portal, &horizon));
        assert!(hits_portal(&cube_at(Vec3::new(1.5, -6.0, 0.0)), &portal, &horizon));
        assert!(!hits_portal(&cube_at(Vec3::new(1.2, -6.0, 1.2)), &portal, &horizon));
        assert!(!hits_portal(&cube_at(Vec3::new(0.0, -6.0, 3.0)), &portal, &horizon));
    }

    #[test]
    fn test_reposition_stays_in_extent() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut portal = portal();
        for _ in 0..100 {
            portal.reposition(&mut rng);
            assert!(portal.x.abs() <= portal.reposition_extent);
            assert!(portal.z.abs() <= portal.reposition_extent);
        }
    }
}
