//! Fixed demo table, replayed by the `lazy` command.

use std::io::{self, Write};

use serde::Serialize;
use tracing::info;

use crate::grid::{interpolate, Cell, CornerFrame};
use crate::numerics::Point3;

/// One worked example.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Challenge {
    pub grid_size: u64,
    pub target: Cell,
    pub frame: CornerFrame,
}

impl Challenge {
    const fn new(
        grid_size: u64,
        target: (i128, i128),
        top_left: (f64, f64, f64),
        top_right: (f64, f64, f64),
        bottom_left: (f64, f64, f64),
    ) -> Self {
        Self {
            grid_size,
            target: Cell::new(target.0, target.1),
            frame: CornerFrame::new(
                Point3::new(top_left.0, top_left.1, top_left.2),
                Point3::new(bottom_left.0, bottom_left.1, bottom_left.2),
                Point3::new(top_right.0, top_right.1, top_right.2),
            ),
        }
    }

    pub fn solve(&self) -> Point3 {
        interpolate(
            self.grid_size,
            self.target.row,
            self.target.col,
            self.frame.top_left,
            self.frame.bottom_left,
            self.frame.top_right,
        )
    }
}

// Rows read: grid size, (row, col), top left, top right, bottom left.
pub static CHALLENGES: [Challenge; 10] = [
    Challenge::new(3, (2, 2), (1.0, 0.0, 0.0), (1.0, 1.0, 0.0), (1.0, 0.0, 1.0)),
    Challenge::new(4, (2, 3), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.0, 1.0)),
    Challenge::new(5, (3, 1), (1.0, 1.0, 1.0), (0.0, 1.0, 0.0), (0.0, 0.0, 1.0)),
    Challenge::new(6, (4, 4), (-1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.0, 1.0)),
    Challenge::new(7, (2, 4), (1.0, 0.0, 0.0), (0.0, 2.0, 0.0), (0.0, 0.0, 7.0)),
    Challenge::new(8, (7, 7), (1.0, 6.0, 1.0), (8.0, 0.0, 3.0), (3.0, 9.0, 8.0)),
    Challenge::new(10, (3, 6), (0.1, 0.6, 0.1), (0.8, -0.1, 0.3), (0.3, 0.9, 0.8)),
    Challenge::new(15, (13, 15), (0.87, 0.49, 0.89), (0.48, 0.48, 0.2), (0.45, 0.86, 0.83)),
    Challenge::new(20, (17, 2), (-436.0, 563.0, -811.0), (772.0, 30.0, 917.0), (980.0, 576.0, 286.0)),
    Challenge::new(
        50,
        (33, 44),
        (1.618033, 0.9887498, 0.48204586),
        (2.414213, 0.5623730, 0.9504880),
        (3.302775, 0.6377319, 0.9464655),
    ),
];

/// Solve every entry of `challenges`, writing `{ordinal:>2}\t{x}\t{y}\t{z}`.
pub fn run<W: Write>(challenges: &[Challenge], output: &mut W) -> io::Result<()> {
    info!(count = challenges.len(), "replaying demo table");
    for (index, challenge) in challenges.iter().enumerate() {
        writeln!(output, "{:2}\t{}", index + 1, challenge.solve())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_ten_valid_entries() {
        assert_eq!(CHALLENGES.len(), 10);
        for challenge in CHALLENGES.iter() {
            assert!(challenge.grid_size > 0);
            assert!(challenge.target.is_within(challenge.grid_size));
        }
    }

    #[test]
    fn test_first_entry_solution() {
        assert_eq!(CHALLENGES[0].solve(), Point3::new(1.0, 0.5, 0.5));
    }

    #[test]
    fn test_ordinals_are_right_aligned() {
        let mut out = Vec::new();
        run(&CHALLENGES, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with(" 1\t"));
        assert!(lines[9].starts_with("10\t"));
        assert!(lines.iter().all(|line| line.split('\t').count() == 4));
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let mut out = Vec::new();
        run(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_challenge_serializes_to_json() {
        let json = serde_json::to_value(CHALLENGES[0]).unwrap();
        assert_eq!(json["grid_size"], 3);
        assert_eq!(json["target"]["row"], 2);
        assert_eq!(json["frame"]["top_left"], serde_json::json!([1.0, 0.0, 0.0]));
    }
}
