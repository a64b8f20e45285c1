//! GPU-uploadable types for cube drawing

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Per-cube instance data: world position, spin and colour
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CubeInstance {
    pub position: [f32; 3],
    /// Degrees, applied about all three axes
    pub rotation: f32,
    pub color: [f32; 4],
}

impl CubeInstance {
    pub fn new(position: Vec3, rotation: f32, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            rotation,
            color,
        }
    }
}

/// Unit cube as six quads (24 vertices), centred on the origin
#[rustfmt::skip]
pub const CUBE_QUADS: [[f32; 3]; 24] = [
    // Front
    [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5],
    // Back
    [ 0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5],
    // Top
    [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5],
    // Bottom
    [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [-0.5, -0.5, -0.5],
    // Left
    [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5], [-0.5, -0.5, -0.5],
    // Right
    [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [ 0.5, -0.5, -0.5],
];

/// Colors for scene elements
pub mod colors {
    /// Height gradient, from the bottom of the grid to the top
    pub const GRADIENT_LOW: [f32; 3] = [1.0, 0.0, 0.0];
    pub const GRADIENT_HIGH: [f32; 3] = [0.0, 0.0, 1.0];
    pub const DESTROYED: [f32; 3] = [1.0, 1.0, 1.0];
    pub const HORIZON: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PORTAL: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    /// Hit overlay; alpha comes from the flash timer
    pub const HIT_FLASH: [f32; 3] = [1.0, 0.0, 0.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<CubeInstance>(), 32);
        let instances = [CubeInstance::new(Vec3::new(1.0, 2.0, 3.0), 4.0, [0.5; 4])];
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 32);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(&floats[..4], &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_cube_quads_are_unit_sized() {
        for v in CUBE_QUADS {
            assert!(v.iter().all(|c| c.abs() == 0.5));
        }
    }
}
