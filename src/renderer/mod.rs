//! Renderer-facing data
//!
//! Plain, uploadable views of the simulation. Drawing, camera and window
//! lifecycle belong to whatever embeds this crate.

pub mod frame;
pub mod starfield;
pub mod vertex;

pub use frame::{ColorMode, FrameView, PortalView, shake_offset};
pub use starfield::Starfield;
pub use vertex::{CUBE_QUADS, CubeInstance};
