//! Front ends around the interpolator: answer parsing, the interactive
//! session and the demo table.

pub mod batch;
pub mod input;
pub mod interactive;

pub use input::{Field, InputError};
pub use interactive::{Outcome, WRONG_INPUT};
