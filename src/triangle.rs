//! Telling possible triangles from impossible ones, reading side lengths by rows or down columns.

use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;

/// Length of one side of a triangle.
pub type Side = u32;

/// Reasons a list of side lengths cannot be read.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TriangleError {
    /// A line does not hold exactly three numbers.
    #[error("line {line} does not hold exactly three side lengths: `{text}`")]
    BadRow {
        /// One-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },
    /// The number of rows is not a multiple of three.
    #[error("{0} rows cannot be read down the columns three at a time")]
    IncompleteColumns(usize),
}

/// Three side lengths which may or may not make a triangle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Triangle(pub Side, pub Side, pub Side);

impl Triangle {
    /// Whether any two sides are together longer than the third.
    pub fn is_valid(&self) -> bool {
        let Self(a, b, c) = *self;
        // widen so huge sides cannot overflow
        let (a, b, c) = (u64::from(a), u64::from(b), u64::from(c));

        a + b > c && b + c > a && a + c > b
    }
}

/// Read one row of three side lengths per non-blank line.
fn parse_rows(input: &str) -> Result<Array2<Side>, TriangleError> {
    let rows = input.lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| {
            text.split_whitespace()
                .map(|side| side.parse::<Side>().ok())
                .collect::<Option<Vec<_>>>()
                .and_then(|sides| sides.into_iter().collect_tuple::<(Side, Side, Side)>())
                .map(|(a, b, c)| [a, b, c])
                .ok_or_else(|| TriangleError::BadRow { line: index + 1, text: text.to_owned() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Array2::from_shape_fn((rows.len(), 3), |(row, col)| rows[row][col]))
}

/// Count the possible triangles when each line holds one triangle.
pub fn count_valid_rows(input: &str) -> Result<usize, TriangleError> {
    let sides = parse_rows(input)?;

    Ok(sides.rows()
        .into_iter()
        .filter(|row| Triangle(row[0], row[1], row[2]).is_valid())
        .count())
}

/// Count the possible triangles when each column holds one triangle per three lines.
pub fn count_valid_columns(input: &str) -> Result<usize, TriangleError> {
    let sides = parse_rows(input)?;
    if sides.nrows() % 3 != 0 {
        return Err(TriangleError::IncompleteColumns(sides.nrows()));
    }

    Ok(sides.exact_chunks((3, 1))
        .into_iter()
        .filter(|chunk| Triangle(chunk[[0, 0]], chunk[[1, 0]], chunk[[2, 0]]).is_valid())
        .count())
}

#[cfg(test)]
mod tests {
    use super::{count_valid_columns, count_valid_rows, Triangle, TriangleError};

    const SPECIFICATION: &str = "101 301 501
102 302 502
103 303 503
201 401 601
202 402 602
203 403 603
";

    #[test]
    fn validity() {
        assert!(!Triangle(5, 10, 25).is_valid());
        assert!(Triangle(3, 4, 5).is_valid());
        assert!(!Triangle(1, 2, 3).is_valid());
        assert!(!Triangle(25, 10, 5).is_valid());
        assert!(Triangle(u32::MAX, u32::MAX, u32::MAX).is_valid());
    }

    #[test]
    fn by_rows() {
        assert_eq!(count_valid_rows("  5  10  25\n"), Ok(0));
        assert_eq!(count_valid_rows(SPECIFICATION), Ok(3));
    }

    #[test]
    fn by_columns() {
        assert_eq!(count_valid_columns(SPECIFICATION), Ok(6));
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(count_valid_rows("\n3 4 5\n\n  \n4 5 6"), Ok(2));
    }

    #[test]
    fn bad_rows() {
        assert_eq!(count_valid_rows("3 4 5\n3 4\n"), Err(TriangleError::BadRow { line: 2, text: "3 4".to_owned() }));
        assert_eq!(count_valid_rows("3 4 5 6"), Err(TriangleError::BadRow { line: 1, text: "3 4 5 6".to_owned() }));
        assert_eq!(count_valid_rows("3 four 5"), Err(TriangleError::BadRow { line: 1, text: "3 four 5".to_owned() }));
    }

    #[test]
    fn columns_need_whole_groups() {
        assert_eq!(count_valid_columns("3 4 5\n3 4 5\n"), Err(TriangleError::IncompleteColumns(2)));
    }

    #[test]
    fn empty_input() {
        assert_eq!(count_valid_rows(""), Ok(0));
        assert_eq!(count_valid_columns(""), Ok(0));
    }
}
