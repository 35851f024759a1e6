//! # interburbulator
//!
//! Locates the center of a cell on a square grid laid over a parallelogram
//! that is known only through three of its corners.
//!
//! ```rust
//! use interburbulator::grid::interpolate;
//! use interburbulator::numerics::Point3;
//!
//! let p = interpolate(
//!     3, 2, 2,
//!     Point3::new(1.0, 0.0, 0.0), // top left
//!     Point3::new(1.0, 0.0, 1.0), // bottom left
//!     Point3::new(1.0, 1.0, 0.0), // top right
//! );
//! assert_eq!(p.to_string(), "1.00000000\t0.50000000\t0.50000000");
//! ```

pub mod config;
pub mod grid;
pub mod io;
pub mod numerics;
pub mod tools;

use std::io::{BufRead, Write};

pub use config::{AppConfig, Mode};
pub use grid::{interpolate, Cell, CornerFrame, GridSpec, Problem};
pub use numerics::{Point3, Vector3};

/// Run one mode against the given streams.
pub fn run<R: BufRead, W: Write>(mode: Mode, input: &mut R, output: &mut W) -> std::io::Result<()> {
    tracing::debug!(?mode, "starting");
    match mode {
        Mode::Interactive => io::interactive::run(input, output).map(|_| ()),
        Mode::Batch => io::batch::run(&io::batch::CHALLENGES, output),
        Mode::Placeholder => writeln!(output, "{}", config::PLACEHOLDER),
    }
}
