//! Cube Libre headless driver
//!
//! Runs the simulation at a fixed 60 Hz with a steady downward pan (as if the
//! down key were held) and logs every effect event. The starfield pans with
//! the grid. Drawing is left to an embedding renderer.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec3;

use cube_libre::consts::{FRAME_DT, STAR_COUNT, STAR_EXTENT};
use cube_libre::renderer::{ColorMode, FrameView, Starfield, shake_offset};
use cube_libre::{EffectEvent, GridAnimationState, SimConfig};

/// Frames to simulate (30 seconds)
const FRAMES: u32 = 60 * 30;
/// Per-frame pan while "down" is held, matching the keyboard move speed
const MOVE_SPEED: f32 = 0.1;

fn main() {
    env_logger::init();
    log::info!("Cube Libre (headless) starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = match GridAnimationState::new(SimConfig::default(), seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let mut stars = Starfield::new(STAR_COUNT, STAR_EXTENT, seed);
    log::info!(
        "Running {FRAMES} frames with seed {seed} ({} stars)",
        stars.stars().len()
    );
    let pan = Vec3::new(0.0, -MOVE_SPEED, 0.0);

    let mut hits = 0u32;
    let mut grid_resets = 0u32;
    let mut portal_resets = 0u32;

    for _ in 0..FRAMES {
        state.translate(pan);
        stars.offset(pan);

        for event in state.advance(FRAME_DT) {
            match event {
                EffectEvent::Hit { layer } => {
                    hits += 1;
                    log::debug!("Hit in layer {layer}");
                }
                EffectEvent::AllDestroyed => grid_resets += 1,
                EffectEvent::PortalReached => portal_resets += 1,
            }
        }

        let frame = FrameView::build(&state, ColorMode::Gradient);
        let timers = state.timers().clone();
        let shake = shake_offset(&timers, state.rng_mut());
        let points = stars.points();
        log::trace!(
            "frame {}: {} instances, {} stars, flash {:.2}, fade {:.2}, shake ({:.2}, {:.2})",
            state.frame(),
            frame.instances.len(),
            points.len(),
            frame.flash_alpha,
            frame.fade_alpha,
            shake.x,
            shake.y
        );
    }

    log::info!(
        "Done: {hits} hits, {grid_resets} grid resets, {portal_resets} portal resets, {} cubes down",
        state.destroyed_count()
    );
}
