//! Background starfield

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::vertex::colors;
use crate::sample_range;

/// Static point stars scattered through a cube of side `2 * extent`
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Vec3>,
}

impl Starfield {
    pub fn new(count: usize, extent: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::with_rng(count, extent, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(count: usize, extent: f32, rng: &mut R) -> Self {
        let e = extent.abs();
        let stars = (0..count)
            .map(|_| {
                Vec3::new(
                    sample_range(rng, (-e, e)),
                    sample_range(rng, (-e, e)),
                    sample_range(rng, (-e, e)),
                )
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Vec3] {
        &self.stars
    }

    /// Shift every star by the same amount
    pub fn offset(&mut self, delta: Vec3) {
        for star in &mut self.stars {
            *star += delta;
        }
    }

    /// Flat `[x, y, z]` points for a point-list draw
    pub fn points(&self) -> Vec<[f32; 3]> {
        self.stars.iter().map(|s| s.to_array()).collect()
    }

    pub fn color(&self) -> [f32; 4] {
        colors::STAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{STAR_COUNT, STAR_EXTENT};

    #[test]
    fn test_stars_within_extent() {
        let field = Starfield::new(STAR_COUNT, STAR_EXTENT, 1);
        assert_eq!(field.stars().len(), STAR_COUNT);
        assert!(field.stars().iter().all(|s| s.abs().max_element() <= STAR_EXTENT));
    }

    #[test]
    fn test_offset_is_uniform() {
        let mut field = Starfield::new(10, 5.0, 2);
        let before = field.stars().to_vec();
        let delta = Vec3::new(1.0, -2.0, 0.5);
        field.offset(delta);
        for (a, b) in field.stars().iter().zip(before) {
            assert!((*a - b - delta).length() < 1e-4);
        }
    }

    #[test]
    fn test_points_match_stars() {
        let field = Starfield::new(4, 1.0, 3);
        let points = field.points();
        assert_eq!(points.len(), 4);
        for (p, s) in points.iter().zip(field.stars()) {
            assert_eq!(*p, s.to_array());
        }
        assert_eq!(field.color(), colors::STAR);
    }
}
