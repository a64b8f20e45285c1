//! One-shot effect events and the timers they drive

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

/// Raised by `advance` for the renderer to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectEvent {
    /// A cube in grid layer `layer` was knocked out
    Hit { layer: i32 },
    /// Every cube was destroyed and the grid respawned
    AllDestroyed,
    /// A live cube touched the portal and the scene was reset
    PortalReached,
}

/// Countdown timers for screen shake, red flash and full-screen fade
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectTimers {
    pub shake: f32,
    pub flash: f32,
    pub fade: f32,
    shake_duration: f32,
    flash_duration: f32,
    fade_duration: f32,
}

impl EffectTimers {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            shake: 0.0,
            flash: 0.0,
            fade: 0.0,
            shake_duration: config.shake_duration,
            flash_duration: config.flash_duration,
            fade_duration: config.fade_duration,
        }
    }

    pub fn flash_duration(&self) -> f32 {
        self.flash_duration
    }

    pub fn fade_duration(&self) -> f32 {
        self.fade_duration
    }

    /// Count every timer down, stopping at zero
    pub fn decay(&mut self, dt: f32) {
        self.shake = (self.shake - dt).max(0.0);
        self.flash = (self.flash - dt).max(0.0);
        self.fade = (self.fade - dt).max(0.0);
    }

    /// Arm the timers an event drives
    pub fn trigger(&mut self, event: EffectEvent) {
        match event {
            EffectEvent::Hit { .. } => {
                self.shake = self.shake_duration;
                self.flash = self.flash_duration;
            }
            EffectEvent::AllDestroyed | EffectEvent::PortalReached => {
                self.fade = self.fade_duration;
            }
        }
    }

    pub fn shaking(&self) -> bool {
        self.shake > 0.0
    }

    pub fn flashing(&self) -> bool {
        self.flash > 0.0
    }

    pub fn fading(&self) -> bool {
        self.fade > 0.0
    }

    pub fn clear(&mut self) {
        self.shake = 0.0;
        self.flash = 0.0;
        self.fade = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_arms_shake_and_flash() {
        let mut timers = EffectTimers::from_config(&SimConfig::default());
        timers.trigger(EffectEvent::Hit { layer: 0 });
        assert_eq!(timers.shake, 0.5);
        assert_eq!(timers.flash, 0.3);
        assert_eq!(timers.fade, 0.0);
    }

    #[test]
    fn test_resets_arm_fade() {
        let mut timers = EffectTimers::from_config(&SimConfig::default());
        timers.trigger(EffectEvent::PortalReached);
        assert!(timers.fading());
        assert!(!timers.shaking());
    }

    #[test]
    fn test_decay_clamps_at_zero() {
        let mut timers = EffectTimers::from_config(&SimConfig::default());
        timers.trigger(EffectEvent::Hit { layer: 1 });
        timers.decay(0.4);
        assert!(timers.shaking());
        assert_eq!(timers.flash, 0.0);
        timers.decay(10.0);
        assert_eq!(timers.shake, 0.0);
        assert_eq!(timers.fade, 0.0);
    }
}
