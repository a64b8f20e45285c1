//! Cube Libre - a cube grid that falls apart on the horizon
//!
//! Core modules:
//! - `sim`: Simulation state (grid, collisions, destruction, respawn)
//! - `renderer`: Plain-data views of the simulation for an external renderer
//! - `config`: Tunable parameters with JSON loading and validation

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{PortalConfig, SimConfig};
pub use error::ConfigError;
pub use sim::{Cube, EffectEvent, GridAnimationState};

use rand::distr::Uniform;

/// Fixed simulation constants
pub mod consts {
    /// Fixed frame timestep used by the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Largest grid accepted per axis
    pub const MAX_CUBES_PER_AXIS: u32 = 256;

    /// Colour a cube is painted the instant it is destroyed
    pub const DESTROYED_FLASH_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

    /// Fly-off velocity ranges assigned on destruction
    pub const FLY_OFF_X: (f32, f32) = (-0.5, 0.5);
    pub const FLY_OFF_Y: (f32, f32) = (0.5, 1.0);
    pub const FLY_OFF_Z: (f32, f32) = (-0.5, 0.5);
    /// Angular velocity range on destruction (degrees/s)
    pub const ANGULAR_VELOCITY_RANGE: (f32, f32) = (-3.0, 3.0);

    /// Max screen shake offset per axis while the shake timer runs
    pub const SHAKE_INTENSITY: f32 = 0.5;

    /// Alpha used for destroyed cubes
    pub const DESTROYED_ALPHA: f32 = 0.5;

    /// Largest accepted portal reposition extent (world units)
    pub const MAX_REPOSITION_EXTENT: f32 = 1.0e6;

    /// Background starfield
    pub const STAR_COUNT: usize = 1000;
    pub const STAR_EXTENT: f32 = 50.0;
}

/// Linear interpolation between two RGB colours
#[inline]
pub fn lerp_color(from: [f32; 3], to: [f32; 3], t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        from[0] * (1.0 - t) + to[0] * t,
        from[1] * (1.0 - t) + to[1] * t,
        from[2] * (1.0 - t) + to[2] * t,
    ]
}

/// Uniform sample from a `(min, max)` range. Degenerate, inverted or
/// non-finite ranges yield `min` instead of panicking.
#[inline]
pub fn sample_range<R: rand::Rng + ?Sized>(rng: &mut R, range: (f32, f32)) -> f32 {
    let (lo, hi) = range;
    if hi <= lo {
        return lo;
    }
    match Uniform::new_inclusive(lo, hi) {
        Ok(dist) => rng.sample(dist),
        Err(err) => {
            log::warn!("Cannot sample {lo}..={hi} ({err}), using {lo}");
            lo
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_lerp_color_endpoints() {
        let red = [1.0, 0.0, 0.0];
        let blue = [0.0, 0.0, 1.0];
        assert_eq!(lerp_color(red, blue, 0.0), red);
        assert_eq!(lerp_color(red, blue, 1.0), blue);
        let mid = lerp_color(red, blue, 0.5);
        assert!((mid[0] - 0.5).abs() < 1e-6);
        assert!((mid[2] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_color_clamps() {
        let a = [0.2, 0.4, 0.6];
        let b = [1.0, 1.0, 1.0];
        assert_eq!(lerp_color(a, b, -3.0), a);
        assert_eq!(lerp_color(a, b, 7.0), b);
    }

    #[test]
    fn test_sample_range_stays_inside() {
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..100 {
            let v = sample_range(&mut rng, (-2.0, 3.0));
            assert!((-2.0..=3.0).contains(&v));
        }
        assert_eq!(sample_range(&mut rng, (1.5, 1.5)), 1.5);
        assert_eq!(sample_range(&mut rng, (4.0, -4.0)), 4.0);
    }

    #[test]
    fn test_sample_range_overflowing_span_does_not_panic() {
        let mut rng = Pcg32::seed_from_u64(9);
        assert_eq!(sample_range(&mut rng, (-3.0e38, 3.0e38)), -3.0e38);
        assert_eq!(
            sample_range(&mut rng, (f32::NEG_INFINITY, f32::INFINITY)),
            f32::NEG_INFINITY
        );
    }
}
