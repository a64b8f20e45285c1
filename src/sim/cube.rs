//! A single cube of the grid and its destroy/respawn lifecycle

use glam::{IVec3, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sample_range;

/// Uniformly random RGB colour
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> [f32; 3] {
    [rng.random(), rng.random(), rng.random()]
}

/// One cell of the grid.
///
/// A live cube has zero velocity and never moves except under a uniform
/// translation of the whole grid. All state changes go through `destroy`,
/// `reset` and `integrate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cube {
    pub(crate) grid: IVec3,
    pub(crate) position: Vec3,
    pub(crate) color: [f32; 3],
    pub(crate) destroyed: bool,
    pub(crate) velocity: Vec3,
    /// Degrees per second
    pub(crate) angular_velocity: f32,
    /// Accumulated rotation (degrees)
    pub(crate) rotation: f32,
    pub(crate) time_since_destroyed: f32,
}

impl Cube {
    /// Live cube at its lattice position with a random colour
    pub fn new<R: Rng + ?Sized>(grid: IVec3, spacing: f32, rng: &mut R) -> Self {
        Self {
            grid,
            position: lattice_position(grid, spacing),
            color: random_color(rng),
            destroyed: false,
            velocity: Vec3::ZERO,
            angular_velocity: 0.0,
            rotation: 0.0,
            time_since_destroyed: 0.0,
        }
    }

    pub fn grid(&self) -> IVec3 {
        self.grid
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn time_since_destroyed(&self) -> f32 {
        self.time_since_destroyed
    }

    /// Knock the cube out of the grid with a random fly-off velocity and spin
    pub fn destroy<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        log::debug!(
            "Destroying cube {} at ({:.2}, {:.2}, {:.2})",
            self.grid,
            self.position.x,
            self.position.y,
            self.position.z
        );
        self.color = DESTROYED_FLASH_COLOR;
        self.velocity = Vec3::new(
            sample_range(rng, FLY_OFF_X),
            sample_range(rng, FLY_OFF_Y),
            sample_range(rng, FLY_OFF_Z),
        );
        self.angular_velocity = sample_range(rng, ANGULAR_VELOCITY_RANGE);
        self.destroyed = true;
        self.time_since_destroyed = 0.0;
    }

    /// Back to a live cube at its lattice position with a fresh colour
    pub fn reset<R: Rng + ?Sized>(&mut self, spacing: f32, rng: &mut R) {
        self.position = lattice_position(self.grid, spacing);
        self.color = random_color(rng);
        self.destroyed = false;
        self.velocity = Vec3::ZERO;
        self.angular_velocity = 0.0;
        self.rotation = 0.0;
        self.time_since_destroyed = 0.0;
    }

    /// Advance a destroyed cube. It holds still for `flash_duration`, then
    /// moves along its velocity and spins.
    pub fn integrate(&mut self, dt: f32, flash_duration: f32) {
        if !self.destroyed {
            return;
        }
        self.time_since_destroyed += dt;
        if self.time_since_destroyed > flash_duration {
            self.position += self.velocity * dt;
            self.rotation += self.angular_velocity * dt;
        }
    }

    /// Uniform offset, applied regardless of state
    pub(crate) fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }
}

/// Fixed location of a grid cell in world space
#[inline]
pub fn lattice_position(grid: IVec3, spacing: f32) -> Vec3 {
    grid.as_vec3() * spacing
}
