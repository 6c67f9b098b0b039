use thiserror::Error;

/// Errors returned by [`Matrix`](crate::matrix::dense::Matrix) operations.
///
/// Every check runs before any result is allocated, so an error never leaves
/// a partially computed matrix behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column.
    #[error("Invalid dimensions: {rows} rows and {columns} columns (both must be positive)")]
    InvalidDimension { rows: usize, columns: usize },

    /// `rows * columns` does not fit in a `usize`.
    #[error("Matrix with {rows} rows and {columns} columns is too large")]
    TooLarge { rows: usize, columns: usize },

    /// A `(row, column)` pair outside `[0, rows) x [0, columns)`.
    #[error(
        "Index ({row}, {column}) out of range for a matrix with {rows} rows and {columns} columns"
    )]
    IndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// The operand shapes are incompatible for `operation`.
    #[error("Dimensions not compatible for {operation}: {}", shapes(.left, .right))]
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A row passed to `from_list` whose length differs from the first row.
    #[error("Row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

fn shapes(left: &(usize, usize), right: &(usize, usize)) -> String {
    format!(
        "matrix A has {} rows and {} columns, matrix B has {} rows and {} columns",
        left.0, left.1, right.0, right.1
    )
}

/// Binary operations that check operand shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
