//! Prompt-driven session: five questions, one answer.
//!
//! All five lines are read before the shapes are checked, so a bad grid size
//! is only reported after the corners have been entered. A line that does
//! not parse as numbers ends the session immediately.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::grid::Problem;
use crate::io::input::{parse_numbers, Answers, Field, InputError};
use crate::numerics::Point3;

/// Message printed for every kind of rejected input.
pub const WRONG_INPUT: &str = "Wrong input";

/// Result of one interactive session.
#[derive(Debug)]
pub enum Outcome {
    Solved(Point3),
    Rejected(InputError),
}

/// Reads the answers and writes either the solution or [`WRONG_INPUT`].
///
/// Only failures to write to `output` are returned as errors; everything
/// that goes wrong on the input side becomes [`Outcome::Rejected`].
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Outcome> {
    match read_problem(input, output)? {
        Ok(problem) => {
            if problem.frame().is_degenerate() {
                warn!(frame = ?problem.frame(), "corners are collinear; every cell maps onto a line");
            }
            let position = problem.solve();
            writeln!(output, "{}", position)?;
            Ok(Outcome::Solved(position))
        }
        Err(err) => {
            debug!(error = %err, "rejecting input");
            writeln!(output, "{}", WRONG_INPUT)?;
            Ok(Outcome::Rejected(err))
        }
    }
}

/// Prompt for each field in turn. The outer `Result` carries write errors,
/// the inner one input errors.
fn read_problem<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Result<Problem, InputError>> {
    let mut answers = Answers::default();
    for field in Field::ALL {
        write!(output, "{}", field.prompt())?;
        output.flush()?;

        let line = match read_answer(input, field) {
            Ok(line) => line,
            Err(err) => return Ok(Err(err)),
        };
        match parse_numbers(field, &line) {
            Ok(values) => *answers.slot_mut(field) = values,
            Err(err) => return Ok(Err(err)),
        }
    }
    Ok(answers.into_problem())
}

fn read_answer<R: BufRead>(input: &mut R, field: Field) -> Result<String, InputError> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|source| InputError::Io { field, source })?;
    if read == 0 {
        return Err(InputError::EndOfInput(field));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(text: &str) -> (Outcome, String) {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run(&mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    const PROMPTS: &str =
        "Grid size: Target cell: Top left (x,y,z): Bottom left (x,y,z): Top right (x,y,z): ";

    #[test]
    fn test_solves_first_demo_entry() {
        let (outcome, out) = session("3\n2,2\n1,0,0\n1,0,1\n1,1,0\n");
        assert!(matches!(outcome, Outcome::Solved(p) if p == Point3::new(1.0, 0.5, 0.5)));
        assert_eq!(out, format!("{}1.00000000\t0.50000000\t0.50000000\n", PROMPTS));
    }

    #[test]
    fn test_zero_grid_size_asks_everything_then_rejects() {
        let (outcome, out) = session("0\n2,2\n1,0,0\n1,0,1\n1,1,0\n");
        assert!(matches!(outcome, Outcome::Rejected(InputError::NonPositiveGridSize(0))));
        assert_eq!(out, format!("{}Wrong input\n", PROMPTS));
    }

    #[test]
    fn test_unparseable_line_stops_prompting() {
        let (outcome, out) = session("3\nabc\n1,0,0\n1,0,1\n1,1,0\n");
        assert!(matches!(outcome, Outcome::Rejected(InputError::Number { field: Field::TargetCell, .. })));
        assert_eq!(out, "Grid size: Target cell: Wrong input\n");
    }

    #[test]
    fn test_end_of_input_is_wrong_input() {
        let (outcome, out) = session("3\n2,2\n");
        assert!(matches!(outcome, Outcome::Rejected(InputError::EndOfInput(Field::TopLeft))));
        assert_eq!(out, "Grid size: Target cell: Top left (x,y,z): Wrong input\n");
    }

    #[test]
    fn test_fractional_target_is_truncated() {
        let (outcome, out) = session("4\n2.9, 3.7\n1,0,0\n0,0,1\n0,1,0\n");
        assert!(matches!(outcome, Outcome::Solved(_)));
        assert!(out.ends_with("0.00000000\t0.37500000\t0.62500000\n"));
    }

    #[test]
    fn test_missing_trailing_newline_is_accepted() {
        let (outcome, _) = session("3\n2,2\n1,0,0\n1,0,1\n1,1,0");
        assert!(matches!(outcome, Outcome::Solved(_)));
    }
}
