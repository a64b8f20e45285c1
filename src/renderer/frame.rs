//! Per-frame view of the simulation for the renderer
//!
//! Built after `advance` and before drawing. Holds nothing the renderer
//! could write back into the simulation.

use glam::{Vec2, Vec3};
use rand::Rng;

use super::vertex::{CubeInstance, colors};
use crate::consts::{DESTROYED_ALPHA, SHAKE_INTENSITY};
use crate::lerp_color;
use crate::sample_range;
use crate::sim::{Cube, EffectTimers, Grid, GridAnimationState};

/// How live cubes are coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Each cube's own random colour
    #[default]
    Random,
    /// Red-to-blue by height through the grid
    Gradient,
}

/// Portal placement for drawing the oval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalView {
    pub center: [f32; 3],
    pub width: f32,
    pub height: f32,
    pub color: [f32; 4],
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct FrameView {
    pub instances: Vec<CubeInstance>,
    /// Scene sway (degrees, about x, y and z)
    pub scene_rotation: f32,
    pub horizon_y: f32,
    pub portal: PortalView,
    /// Red hit overlay alpha
    pub flash_alpha: f32,
    /// White reset overlay alpha
    pub fade_alpha: f32,
    pub shaking: bool,
}

impl FrameView {
    pub fn build<R: Rng>(state: &GridAnimationState<R>, mode: ColorMode) -> Self {
        let grid = state.grid();
        let instances = grid
            .iter()
            .map(|cube| {
                CubeInstance::new(cube.position(), cube.rotation(), cube_color(cube, grid, mode))
            })
            .collect();

        let timers = state.timers();
        let portal = state.portal();
        Self {
            instances,
            scene_rotation: state.scene_rotation(),
            horizon_y: state.horizon().y,
            portal: PortalView {
                center: [portal.x, state.horizon().y, portal.z],
                width: portal.width,
                height: portal.height,
                color: colors::PORTAL,
            },
            flash_alpha: flash_alpha(timers),
            fade_alpha: fade_alpha(timers),
            shaking: timers.shaking(),
        }
    }

    /// Overlay colour for the hit flash, alpha included
    pub fn flash_color(&self) -> [f32; 4] {
        let [r, g, b] = colors::HIT_FLASH;
        [r, g, b, self.flash_alpha]
    }

    /// Background, washed towards white by the reset fade
    pub fn clear_color(&self) -> [f32; 4] {
        let [r, g, b, a] = colors::BACKGROUND;
        let [r, g, b] = lerp_color([r, g, b], [1.0, 1.0, 1.0], self.fade_alpha);
        [r, g, b, a]
    }

    pub fn horizon_color(&self) -> [f32; 4] {
        colors::HORIZON
    }
}

/// RGBA for one cube. Destroyed cubes are translucent white.
pub fn cube_color(cube: &Cube, grid: &Grid, mode: ColorMode) -> [f32; 4] {
    if cube.is_destroyed() {
        let [r, g, b] = colors::DESTROYED;
        return [r, g, b, DESTROYED_ALPHA];
    }
    let [r, g, b] = match mode {
        ColorMode::Random => cube.color(),
        ColorMode::Gradient => gradient_color(cube.position().y, grid),
    };
    [r, g, b, 1.0]
}

/// Height gradient across the grid, following the cube's current y
pub fn gradient_color(y: f32, grid: &Grid) -> [f32; 3] {
    let n = grid.size() as f32;
    let factor = (y / grid.spacing() + n / 2.0) / n;
    lerp_color(colors::GRADIENT_LOW, colors::GRADIENT_HIGH, factor)
}

/// Hit overlay strength, 1 at the hit fading to 0
pub fn flash_alpha(timers: &EffectTimers) -> f32 {
    let duration = timers.flash_duration();
    if duration <= 0.0 {
        return 0.0;
    }
    (timers.flash / duration).clamp(0.0, 1.0)
}

/// Reset fade: ramps to white over the first half, back to clear over the second
pub fn fade_alpha(timers: &EffectTimers) -> f32 {
    let duration = timers.fade_duration();
    if duration <= 0.0 || timers.fade <= 0.0 {
        return 0.0;
    }
    let progress = 1.0 - (timers.fade / duration).clamp(0.0, 1.0);
    1.0 - (2.0 * progress - 1.0).abs()
}

/// Random camera jitter while the shake timer runs
pub fn shake_offset<R: Rng + ?Sized>(timers: &EffectTimers, rng: &mut R) -> Vec2 {
    if !timers.shaking() {
        return Vec2::ZERO;
    }
    let range = (-SHAKE_INTENSITY, SHAKE_INTENSITY);
    Vec2::new(sample_range(rng, range), sample_range(rng, range))
}

/// Shake offset as a 3-D translation (z untouched)
pub fn shake_translation<R: Rng + ?Sized>(timers: &EffectTimers, rng: &mut R) -> Vec3 {
    shake_offset(timers, rng).extend(0.0)
}
