//! Per-frame simulation step
//!
//! `advance` runs, in order: effect timer decay, the cooldown-gated
//! destruction pass, kinematics, the all-destroyed check, the portal check
//! and finally the scene sway. A reset ends the frame early.

use rand::Rng;

use super::collision::{hits_horizon, hits_portal};
use super::effects::EffectEvent;
use super::state::GridAnimationState;

impl<R: Rng> GridAnimationState<R> {
    /// Advance the simulation by `delta_time` seconds and return the effect
    /// events raised along the way
    pub fn advance(&mut self, delta_time: f32) -> Vec<EffectEvent> {
        let mut events = Vec::new();
        self.frame += 1;

        self.timers.decay(delta_time);

        // Throttle destructions independently of frame rate
        self.destruction_cooldown -= delta_time;
        if self.destruction_cooldown <= 0.0 {
            events.extend(self.destruction_pass());
            self.destruction_cooldown = self.config.destruction_interval();
        }

        self.integrate_cubes(delta_time);

        if self.grid.all_destroyed() {
            log::info!("All cubes destroyed after {} frames", self.frame);
            self.reset_cubes();
            self.emit(&mut events, EffectEvent::AllDestroyed);
            return events;
        }

        if self.portal_contact() {
            log::info!("Portal reached, resetting scene");
            self.reset_scene();
            self.emit(&mut events, EffectEvent::PortalReached);
            return events;
        }

        self.scene_rotation += self.config.rotation_speed * delta_time;

        events
    }

    /// Destroy at most one cube per horizontal layer.
    ///
    /// Within a layer, every x-row holding a live cube on the horizon earns
    /// one attempt at a random `(x, z)` in the same layer. The target is not
    /// necessarily the colliding cube, and an attempt that lands on an
    /// already destroyed cube does nothing.
    pub fn destruction_pass(&mut self) -> Vec<EffectEvent> {
        let mut events = Vec::new();
        let range = self.grid.axis_range();

        for y in range.clone() {
            let mut layer_affected = false;

            for x in range.clone() {
                if layer_affected {
                    break;
                }
                let row_collides = range.clone().any(|z| {
                    let cube = self.grid.get(glam::IVec3::new(x, y, z));
                    !cube.is_destroyed() && hits_horizon(cube, &self.horizon)
                });
                if !row_collides {
                    continue;
                }
                log::trace!("Horizon contact in layer {y}, row {x}");

                let target_x = self.rng.random_range(range.clone());
                let target_z = self.rng.random_range(range.clone());
                let target = self.grid.get_mut(glam::IVec3::new(target_x, y, target_z));
                if !target.is_destroyed() {
                    target.destroy(&mut self.rng);
                    layer_affected = true;
                }
            }

            if layer_affected {
                self.emit(&mut events, EffectEvent::Hit { layer: y });
            }
        }

        events
    }

    /// True if any live cube sits on the portal
    pub fn portal_contact(&self) -> bool {
        self.grid
            .iter()
            .filter(|c| !c.is_destroyed())
            .any(|c| hits_portal(c, &self.portal, &self.horizon))
    }

    fn integrate_cubes(&mut self, delta_time: f32) {
        let flash_duration = self.config.cube_flash_duration;
        for cube in self.grid.cubes_mut() {
            cube.integrate(delta_time, flash_duration);
        }
    }
}
