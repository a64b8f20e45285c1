//! Cube grid simulation
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Randomness only through the RNG owned by the state
//! - Stable iteration order (grid storage order)
//! - One writer per frame (`advance`), readers only between frames

pub mod collision;
pub mod cube;
pub mod effects;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{Horizon, Portal, hits_horizon, hits_portal};
pub use cube::{Cube, lattice_position, random_color};
pub use effects::{EffectEvent, EffectTimers};
pub use grid::Grid;
pub use state::GridAnimationState;
