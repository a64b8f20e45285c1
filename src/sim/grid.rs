//! Fixed-size 3-D grid of cubes in flat storage
//!
//! Cells are addressed by signed coordinates in `[min, min + n)` on every
//! axis, where `min = -((n + 1) / 2)`. For even `n` that is `[-n/2, n/2)`;
//! odd grids lean one cell towards negative.

use glam::IVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cube::Cube;
use crate::consts::MAX_CUBES_PER_AXIS;

/// Owns every cube; never resizes after construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
    min: i32,
    spacing: f32,
    /// x-major, then y, then z
    cubes: Vec<Cube>,
}

impl Grid {
    /// Build an `n`³ grid of live cubes. Panics if `n` is zero or above
    /// [`MAX_CUBES_PER_AXIS`]; callers validate through
    /// [`SimConfig`](crate::SimConfig) first.
    pub fn new<R: Rng + ?Sized>(cube_count_per_axis: u32, spacing: f32, rng: &mut R) -> Self {
        assert!(
            (1..=MAX_CUBES_PER_AXIS).contains(&cube_count_per_axis),
            "grid size {cube_count_per_axis} outside 1..={MAX_CUBES_PER_AXIS}"
        );
        let size = cube_count_per_axis as i32;
        let min = -((size + 1) / 2);

        let mut cubes = Vec::with_capacity((size * size * size) as usize);
        for x in min..min + size {
            for y in min..min + size {
                for z in min..min + size {
                    cubes.push(Cube::new(IVec3::new(x, y, z), spacing, rng));
                }
            }
        }

        Self {
            size,
            min,
            spacing,
            cubes,
        }
    }

    /// Cubes per axis
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Coordinate range shared by all three axes
    pub fn axis_range(&self) -> std::ops::Range<i32> {
        self.min..self.min + self.size
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn contains(&self, coord: IVec3) -> bool {
        let range = self.axis_range();
        range.contains(&coord.x) && range.contains(&coord.y) && range.contains(&coord.z)
    }

    /// Linear index of a cell. Out-of-range coordinates are a bug in the caller.
    pub fn index_of(&self, coord: IVec3) -> usize {
        assert!(
            self.contains(coord),
            "grid coordinate {coord} outside {:?}",
            self.axis_range()
        );
        let local = coord - IVec3::splat(self.min);
        let n = self.size as usize;
        (local.x as usize * n + local.y as usize) * n + local.z as usize
    }

    /// Inverse of [`index_of`](Self::index_of)
    pub fn coord_of(&self, index: usize) -> IVec3 {
        assert!(index < self.cubes.len(), "grid index {index} out of bounds");
        let n = self.size as usize;
        let z = index % n;
        let y = (index / n) % n;
        let x = index / (n * n);
        IVec3::new(x as i32, y as i32, z as i32) + IVec3::splat(self.min)
    }

    pub fn get(&self, coord: IVec3) -> &Cube {
        &self.cubes[self.index_of(coord)]
    }

    pub fn get_mut(&mut self, coord: IVec3) -> &mut Cube {
        let index = self.index_of(coord);
        &mut self.cubes[index]
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub(crate) fn cubes_mut(&mut self) -> &mut [Cube] {
        &mut self.cubes
    }

    /// Live or destroyed, every cube in storage order
    pub fn iter(&self) -> impl Iterator<Item = &Cube> {
        self.cubes.iter()
    }

    /// Cubes whose grid y equals `layer`, in x-then-z order
    pub fn layer(&self, layer: i32) -> impl Iterator<Item = &Cube> {
        self.cubes.iter().filter(move |c| c.grid.y == layer)
    }

    pub fn destroyed_count(&self) -> usize {
        self.cubes.iter().filter(|c| c.destroyed).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.cubes.iter().all(|c| c.destroyed)
    }

    /// Respawn every cube on the lattice with fresh colours
    pub fn reset_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let spacing = self.spacing;
        for cube in &mut self.cubes {
            cube.reset(spacing, rng);
        }
    }
}
