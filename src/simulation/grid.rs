//! Rectangular sampling grids and grid-valued results
//!
//! A [`Grid`] is the 2D analogue of `meshgrid(linspace(x), linspace(y))`:
//! node `(row, col)` sits at `(xs[col], ys[row])`, so every output matrix has
//! shape `(ny, nx)`.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::simulation::params::{DEFAULT_BOUNDS, DEFAULT_SAMPLES};
use crate::simulation::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub x_min: f64,
    pub x_max: f64,
    pub nx: usize, // samples along x (columns)
    pub y_min: f64,
    pub y_max: f64,
    pub ny: usize, // samples along y (rows)
}

impl Default for Grid {
    fn default() -> Self {
        let (lo, hi) = DEFAULT_BOUNDS;
        Self::square(lo, hi, DEFAULT_SAMPLES)
    }
}

impl Grid {
    pub fn new(x: (f64, f64), nx: usize, y: (f64, f64), ny: usize) -> Self {
        Self {
            x_min: x.0,
            x_max: x.1,
            nx,
            y_min: y.0,
            y_max: y.1,
            ny,
        }
    }

    /// Same bounds and sample count on both axes
    pub fn square(lo: f64, hi: f64, n: usize) -> Self {
        Self::new((lo, hi), n, (lo, hi), n)
    }

    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// x coordinate of column `col`
    pub fn x_at(&self, col: usize) -> f64 {
        linspace_at(self.x_min, self.x_max, self.nx, col)
    }

    /// y coordinate of row `row`
    pub fn y_at(&self, row: usize) -> f64 {
        linspace_at(self.y_min, self.y_max, self.ny, row)
    }

    /// Node at (`row`, `col`)
    pub fn point(&self, row: usize, col: usize) -> NVec2 {
        NVec2::new(self.x_at(col), self.y_at(row))
    }

    /// Evaluate `f` at every node, row-major, optionally in parallel
    ///
    /// Each node is independent so both paths return identical values
    pub fn sample<T, F>(&self, parallel: bool, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(NVec2) -> T + Sync,
    {
        let nx = self.nx;
        let node = |k: usize| f(self.point(k / nx, k % nx));

        if parallel {
            (0..self.len()).into_par_iter().map(node).collect()
        } else {
            (0..self.len()).map(node).collect()
        }
    }
}

/// k-th of `n` evenly spaced values from `lo` to `hi` inclusive
fn linspace_at(lo: f64, hi: f64, n: usize, k: usize) -> f64 {
    if n <= 1 {
        return lo;
    }
    let step = (hi - lo) / (n - 1) as f64;
    lo + step * k as f64
}

/// Scalar quantity sampled on a grid (e.g. the potential)
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    pub grid: Grid,
    pub values: DMatrix<f64>, // (ny, nx)
}

impl ScalarGrid {
    pub fn from_samples(grid: Grid, samples: Vec<f64>) -> Self {
        Self {
            grid,
            values: DMatrix::from_row_slice(grid.ny, grid.nx, &samples),
        }
    }

    /// Value at node (`row`, `col`)
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.values[(row, col)]
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Vector quantity sampled on a grid (e.g. the electric field)
#[derive(Debug, Clone, PartialEq)]
pub struct VectorGrid {
    pub grid: Grid,
    pub ex: DMatrix<f64>, // (ny, nx)
    pub ey: DMatrix<f64>, // (ny, nx)
}

impl VectorGrid {
    pub fn from_samples(grid: Grid, samples: Vec<NVec2>) -> Self {
        let ex: Vec<f64> = samples.iter().map(|e| e.x).collect();
        let ey: Vec<f64> = samples.iter().map(|e| e.y).collect();
        Self {
            grid,
            ex: DMatrix::from_row_slice(grid.ny, grid.nx, &ex),
            ey: DMatrix::from_row_slice(grid.ny, grid.nx, &ey),
        }
    }

    /// Vector at node (`row`, `col`)
    pub fn at(&self, row: usize, col: usize) -> NVec2 {
        NVec2::new(self.ex[(row, col)], self.ey[(row, col)])
    }

    /// |E| at every node
    pub fn magnitude(&self) -> DMatrix<f64> {
        self.ex.zip_map(&self.ey, |x, y| x.hypot(y))
    }

    pub fn max_magnitude(&self) -> f64 {
        self.magnitude().iter().copied().fold(0.0, f64::max)
    }
}
