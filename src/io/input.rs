//! Parsing of the five free-form answer lines into a [`Problem`].
//!
//! Each line is a comma-separated list of numbers. Spaces are removed before
//! splitting, so `1, 0 ,0` and `1,0,0` are equivalent. A single `_` between
//! two digits is a digit separator (`1_000`). Numbers are parsed as reals
//! first; grid size and target cell are then truncated toward zero.

use std::fmt;

use crate::grid::{Cell, CornerFrame, GridError, GridSpec, Problem};
use crate::numerics::Point3;

/// The five answers requested from the user, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    GridSize,
    TargetCell,
    TopLeft,
    BottomLeft,
    TopRight,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::GridSize,
        Field::TargetCell,
        Field::TopLeft,
        Field::BottomLeft,
        Field::TopRight,
    ];

    /// Text shown before reading the answer. No trailing newline.
    pub fn prompt(self) -> &'static str {
        match self {
            Field::GridSize => "Grid size: ",
            Field::TargetCell => "Target cell: ",
            Field::TopLeft => "Top left (x,y,z): ",
            Field::BottomLeft => "Bottom left (x,y,z): ",
            Field::TopRight => "Top right (x,y,z): ",
        }
    }

    /// How many numbers the answer must contain.
    pub fn arity(self) -> usize {
        match self {
            Field::GridSize => 1,
            Field::TargetCell => 2,
            Field::TopLeft | Field::BottomLeft | Field::TopRight => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::GridSize => "grid size",
            Field::TargetCell => "target cell",
            Field::TopLeft => "top left",
            Field::BottomLeft => "bottom left",
            Field::TopRight => "top right",
        };
        f.write_str(name)
    }
}

/// Every way an answer can be rejected. All of them surface to the user as
/// the same generic message; the variant is only logged.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{field}: `{token}` is not a number")]
    Number { field: Field, token: String },

    #[error("{field}: expected {expected} value(s), found {found}")]
    FieldCount {
        field: Field,
        expected: usize,
        found: usize,
    },

    #[error("{field}: {value} is not finite")]
    NotFinite { field: Field, value: f64 },

    #[error("{field}: {value} is out of range")]
    OutOfRange { field: Field, value: f64 },

    #[error("grid size must be positive, got {0}")]
    NonPositiveGridSize(i128),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("input ended before the {0} was given")]
    EndOfInput(Field),

    #[error("failed to read the {field}: {source}")]
    Io {
        field: Field,
        #[source]
        source: std::io::Error,
    },
}

/// Split one answer line into numbers.
///
/// Surrounding whitespace is stripped and inner spaces removed before
/// splitting on `,`. An empty line yields a single empty token and fails.
pub fn parse_numbers(field: Field, line: &str) -> Result<Vec<f64>, InputError> {
    let compact: String = line.trim().chars().filter(|c| *c != ' ').collect();
    compact
        .split(',')
        .map(|token| {
            without_digit_separators(token.trim())
                .and_then(|digits| digits.parse::<f64>().ok())
                .ok_or_else(|| InputError::Number {
                    field,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Drop `_` separators. Each one must sit between two ASCII digits.
fn without_digit_separators(token: &str) -> Option<String> {
    let bytes = token.as_bytes();
    let mut digits = String::with_capacity(token.len());
    for (i, c) in token.char_indices() {
        if c != '_' {
            digits.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(digits)
}

fn expect_arity(field: Field, values: &[f64]) -> Result<(), InputError> {
    if values.len() != field.arity() {
        return Err(InputError::FieldCount {
            field,
            expected: field.arity(),
            found: values.len(),
        });
    }
    Ok(())
}

fn require_finite(field: Field, values: &[f64]) -> Result<(), InputError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(InputError::NotFinite { field, value }),
        None => Ok(()),
    }
}

/// Truncate toward zero, rejecting values that do not fit an `i128`.
fn truncate(field: Field, value: f64) -> Result<i128, InputError> {
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0; // 2^127
    let truncated = value.trunc();
    if truncated >= LIMIT || truncated < -LIMIT {
        return Err(InputError::OutOfRange { field, value });
    }
    Ok(truncated as i128)
}

/// Grid size: one number, truncated, strictly positive.
pub fn grid_size_from(values: &[f64]) -> Result<u64, InputError> {
    let field = Field::GridSize;
    expect_arity(field, values)?;
    require_finite(field, values)?;

    let size = truncate(field, values[0])?;
    if size <= 0 {
        return Err(InputError::NonPositiveGridSize(size));
    }
    u64::try_from(size).map_err(|_| InputError::OutOfRange {
        field,
        value: values[0],
    })
}

/// Target cell: row then column, each truncated toward zero.
pub fn cell_from(values: &[f64]) -> Result<Cell, InputError> {
    let field = Field::TargetCell;
    expect_arity(field, values)?;
    require_finite(field, values)?;
    Ok(Cell::new(truncate(field, values[0])?, truncate(field, values[1])?))
}

/// Corner: exactly three finite components.
pub fn point_from(field: Field, values: &[f64]) -> Result<Point3, InputError> {
    expect_arity(field, values)?;
    require_finite(field, values)?;
    Ok(Point3::from([values[0], values[1], values[2]]))
}

/// Raw numeric answers, one list per [`Field`], in prompt order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    pub grid_size: Vec<f64>,
    pub target: Vec<f64>,
    pub top_left: Vec<f64>,
    pub bottom_left: Vec<f64>,
    pub top_right: Vec<f64>,
}

impl Answers {
    pub fn slot_mut(&mut self, field: Field) -> &mut Vec<f64> {
        match field {
            Field::GridSize => &mut self.grid_size,
            Field::TargetCell => &mut self.target,
            Field::TopLeft => &mut self.top_left,
            Field::BottomLeft => &mut self.bottom_left,
            Field::TopRight => &mut self.top_right,
        }
    }

    /// Validate the shapes of all answers and assemble the problem.
    pub fn into_problem(self) -> Result<Problem, InputError> {
        let grid_size = grid_size_from(&self.grid_size)?;
        let target = cell_from(&self.target)?;
        let frame = CornerFrame::new(
            point_from(Field::TopLeft, &self.top_left)?,
            point_from(Field::BottomLeft, &self.bottom_left)?,
            point_from(Field::TopRight, &self.top_right)?,
        );
        Ok(Problem::new(GridSpec::new(grid_size, target)?, frame))
    }
}
