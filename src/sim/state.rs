//! Simulation state for the cube grid
//!
//! Everything `advance` mutates lives on [`GridAnimationState`]: the grid,
//! the collision surfaces, effect timers, the destruction cooldown and the
//! RNG. There are no globals.

use glam::{IVec3, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Horizon, Portal};
use super::cube::Cube;
use super::effects::{EffectEvent, EffectTimers};
use super::grid::Grid;
use crate::config::SimConfig;
use crate::error::ConfigError;

/// Owner of the cube grid and everything that drives it
#[derive(Debug, Clone)]
pub struct GridAnimationState<R = Pcg32> {
    pub(crate) config: SimConfig,
    pub(crate) grid: Grid,
    pub(crate) horizon: Horizon,
    pub(crate) portal: Portal,
    pub(crate) timers: EffectTimers,
    /// Seconds until the next destruction pass may run
    pub(crate) destruction_cooldown: f32,
    /// Scene sway angle (degrees)
    pub(crate) scene_rotation: f32,
    /// Frames advanced since construction
    pub(crate) frame: u64,
    pub(crate) rng: R,
}

impl GridAnimationState<Pcg32> {
    /// Build a seeded simulation
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GridAnimationState<R> {
    /// Build a simulation drawing randomness from `rng`
    pub fn with_rng(config: SimConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.cube_count_per_axis, config.spacing, &mut rng);
        log::info!(
            "Built {n}x{n}x{n} cube grid (spacing {}, horizon {})",
            config.spacing,
            config.horizon_y,
            n = config.cube_count_per_axis
        );

        Ok(Self {
            horizon: Horizon::new(config.horizon_y),
            portal: Portal::from_config(&config.portal),
            timers: EffectTimers::from_config(&config),
            destruction_cooldown: 0.0,
            scene_rotation: 0.0,
            frame: 0,
            grid,
            rng,
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cubes(&self) -> &[Cube] {
        self.grid.cubes()
    }

    pub fn cube_at(&self, coord: IVec3) -> &Cube {
        self.grid.get(coord)
    }

    pub fn horizon(&self) -> &Horizon {
        &self.horizon
    }

    pub fn portal(&self) -> &Portal {
        &self.portal
    }

    pub fn timers(&self) -> &EffectTimers {
        &self.timers
    }

    pub fn scene_rotation(&self) -> f32 {
        self.scene_rotation
    }

    pub fn destruction_cooldown(&self) -> f32 {
        self.destruction_cooldown
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn destroyed_count(&self) -> usize {
        self.grid.destroyed_count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.grid.all_destroyed()
    }

    /// Mutable access to the RNG, e.g. for screen shake jitter
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Pan the whole grid in the screen plane
    pub fn apply_translation(&mut self, delta_x: f32, delta_y: f32) {
        self.translate(Vec3::new(delta_x, delta_y, 0.0));
    }

    /// Pan the whole grid towards or away from the viewer
    pub fn apply_translation_z(&mut self, delta_z: f32) {
        self.translate(Vec3::new(0.0, 0.0, delta_z));
    }

    /// Move every cube by `offset`; destroyed cubes move too
    pub fn translate(&mut self, offset: Vec3) {
        for cube in self.grid.cubes_mut() {
            cube.translate(offset);
        }
    }

    /// Respawn every cube at its lattice position
    pub fn reset_cubes(&mut self) {
        log::info!("Resetting all cubes to initial state");
        self.grid.reset_all(&mut self.rng);
    }

    /// Respawn the grid, move the portal and zero the scene sway
    pub fn reset_scene(&mut self) {
        self.reset_cubes();
        self.scene_rotation = 0.0;
        self.portal.reposition(&mut self.rng);
        log::info!("Scene has been reset");
    }

    /// Arm the timers for an event and record it
    pub(crate) fn emit(&mut self, events: &mut Vec<EffectEvent>, event: EffectEvent) {
        self.timers.trigger(event);
        events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_live_grid() {
        let state = GridAnimationState::new(SimConfig::with_grid(3, 2.0), 42).expect("valid");
        assert_eq!(state.cubes().len(), 27);
        assert_eq!(state.destroyed_count(), 0);
        for cube in state.cubes() {
            assert_eq!(cube.position(), cube.grid().as_vec3() * 2.0);
            assert_eq!(cube.velocity(), Vec3::ZERO);
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = GridAnimationState::new(SimConfig::with_grid(2, 0.0), 1);
        assert!(matches!(result, Err(ConfigError::NonPositiveSpacing(_))));
        let result = GridAnimationState::new(SimConfig::with_grid(0, 1.0), 1);
        assert!(matches!(result, Err(ConfigError::InvalidGridSize(0))));
    }

    #[test]
    fn test_same_seed_same_colors() {
        let a = GridAnimationState::new(SimConfig::default(), 5).expect("valid");
        let b = GridAnimationState::new(SimConfig::default(), 5).expect("valid");
        let colors_a: Vec<_> = a.cubes().iter().map(|c| c.color()).collect();
        let colors_b: Vec<_> = b.cubes().iter().map(|c| c.color()).collect();
        assert_eq!(colors_a, colors_b);
    }

    #[test]
    fn test_translation_moves_every_cube() {
        let mut state = GridAnimationState::new(SimConfig::with_grid(2, 1.0), 3).expect("valid");
        let victim = IVec3::new(0, 0, 0);
        let rng = &mut state.rng;
        state.grid.get_mut(victim).destroy(rng);

        let before: Vec<_> = state.cubes().iter().map(|c| c.position()).collect();
        state.apply_translation(0.5, -1.0);
        for (cube, old) in state.cubes().iter().zip(before) {
            assert_eq!(cube.position(), old + Vec3::new(0.5, -1.0, 0.0));
        }
    }

    #[test]
    fn test_depth_translation_moves_every_cube() {
        let mut state = GridAnimationState::new(SimConfig::with_grid(3, 1.0), 4).expect("valid");
        let rng = &mut state.rng;
        state.grid.get_mut(IVec3::new(1, 1, 1)).destroy(rng);

        let before: Vec<_> = state.cubes().iter().map(|c| c.position()).collect();
        state.apply_translation_z(-2.5);
        for (cube, old) in state.cubes().iter().zip(&before) {
            assert_eq!(cube.position(), *old + Vec3::new(0.0, 0.0, -2.5));
        }

        state.translate(Vec3::new(1.0, 0.0, 2.5));
        for (cube, old) in state.cubes().iter().zip(&before) {
            assert_eq!(cube.position(), *old + Vec3::X);
        }
    }

    #[test]
    fn test_reset_scene_moves_portal_and_sway() {
        let mut state = GridAnimationState::new(SimConfig::default(), 8).expect("valid");
        state.scene_rotation = 45.0;
        state.apply_translation(3.0, 3.0);
        state.reset_scene();

        assert_eq!(state.scene_rotation(), 0.0);
        let extent = state.config().portal.reposition_extent;
        assert!(state.portal().x.abs() <= extent);
        assert!(state.portal().z.abs() <= extent);
        for cube in state.cubes() {
            assert_eq!(cube.position(), cube.grid().as_vec3());
        }
    }
}
