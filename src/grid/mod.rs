//! Square grid addressing and the bilinear corner interpolator.
//!
//! A square grid of `grid_size × grid_size` cells is laid over the
//! parallelogram spanned by three known corners. Cells are addressed
//! 1-based by `(row, col)`; the interpolator returns the 3D position of the
//! center of the requested cell.

use serde::Serialize;
use tracing::trace;

use crate::numerics::{Point3, Vector3};

/// Offset from a cell's 1-based index to its center along one axis.
pub const CELL_CENTER_OFFSET: f64 = 0.5;

/// Errors raised while building grid descriptions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid size must be positive")]
    EmptyGrid,
}

/// A 1-based `(row, col)` cell address.
///
/// Indices are not clamped: values outside `1..=grid_size` are accepted and
/// extrapolate past the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub row: i128,
    pub col: i128,
}

impl Cell {
    pub const fn new(row: i128, col: i128) -> Self {
        Self { row, col }
    }

    /// Whether both indices fall in `1..=grid_size`.
    pub fn is_within(&self, grid_size: u64) -> bool {
        let range = 1..=i128::from(grid_size);
        range.contains(&self.row) && range.contains(&self.col)
    }
}

/// Grid dimension plus the cell being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    grid_size: u64,
    target: Cell,
}

impl GridSpec {
    /// Build a grid description. Fails only when `grid_size` is zero.
    pub fn new(grid_size: u64, target: Cell) -> Result<Self, GridError> {
        if grid_size == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self { grid_size, target })
    }

    pub fn grid_size(&self) -> u64 {
        self.grid_size
    }

    pub fn target(&self) -> Cell {
        self.target
    }

    /// Fractional `(xp, yp)` position of the target cell's center.
    pub fn fractional_position(&self) -> (f64, f64) {
        fractional_position(self.grid_size, self.target.row, self.target.col)
    }
}

/// Three corners of the interpolated region.
///
/// The bottom-right corner is never stored; it follows from the other three
/// as a parallelogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerFrame {
    pub top_left: Point3,
    pub bottom_left: Point3,
    pub top_right: Point3,
}

impl CornerFrame {
    pub const fn new(top_left: Point3, bottom_left: Point3, top_right: Point3) -> Self {
        Self {
            top_left,
            bottom_left,
            top_right,
        }
    }

    /// Edge from top-left towards bottom-left. Scaled by the column fraction.
    pub fn x_axis(&self) -> Vector3 {
        self.bottom_left.subtract(self.top_left)
    }

    /// Edge from top-left towards top-right. Scaled by the row fraction.
    pub fn y_axis(&self) -> Vector3 {
        self.top_right.subtract(self.top_left)
    }

    /// Fourth corner of the parallelogram.
    pub fn implied_bottom_right(&self) -> Point3 {
        self.top_left.add(self.x_axis()).add(self.y_axis())
    }

    /// True when the two edges are parallel (or one of them is zero), so
    /// every cell collapses onto a line or a point.
    pub fn is_degenerate(&self) -> bool {
        self.x_axis().cross(&self.y_axis()).length_squared() == 0.0
    }

    /// Center of the target cell of `grid`.
    pub fn locate(&self, grid: &GridSpec) -> Point3 {
        interpolate(
            grid.grid_size,
            grid.target.row,
            grid.target.col,
            self.top_left,
            self.bottom_left,
            self.top_right,
        )
    }
}

/// A complete query: which cell, on which frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    grid: GridSpec,
    frame: CornerFrame,
}

impl Problem {
    pub fn new(grid: GridSpec, frame: CornerFrame) -> Self {
        Self { grid, frame }
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn frame(&self) -> &CornerFrame {
        &self.frame
    }

    pub fn solve(&self) -> Point3 {
        self.frame.locate(&self.grid)
    }
}

/// Fractional position of a cell center: `xp` from the column, `yp` from the
/// row, both `(index - 0.5) / grid_size`.
///
/// `grid_size` must be non-zero; zero produces infinities. Indices beyond
/// 2^53 round to the nearest representable `f64`.
pub fn fractional_position(grid_size: u64, target_row: i128, target_col: i128) -> (f64, f64) {
    let size = grid_size as f64;
    let xp = (target_col as f64 - CELL_CENTER_OFFSET) / size;
    let yp = (target_row as f64 - CELL_CENTER_OFFSET) / size;
    (xp, yp)
}

/// Position of the center of cell `(target_row, target_col)` on a
/// `grid_size × grid_size` grid laid over the frame anchored at `top_left`.
///
/// ```text
/// x_axis   = bottom_left - top_left
/// y_axis   = top_right - top_left
/// position = x_axis * xp + y_axis * yp + top_left
/// ```
///
/// Evaluation order is fixed so results are reproducible bit for bit.
pub fn interpolate(
    grid_size: u64,
    target_row: i128,
    target_col: i128,
    top_left: Point3,
    bottom_left: Point3,
    top_right: Point3,
) -> Point3 {
    let x_axis = bottom_left.subtract(top_left);
    let y_axis = top_right.subtract(top_left);
    let (xp, yp) = fractional_position(grid_size, target_row, target_col);

    let position = x_axis.scale(xp).add(y_axis.scale(yp)).add(top_left);
    trace!(grid_size, target_row, target_col, xp, yp, %position, "interpolated cell center");
    position
}
