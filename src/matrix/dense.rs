use num_traits::One;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::matrix::element::Element;
use crate::matrix::error::{MatrixError, Operation};

/// A dense `rows x columns` matrix stored in row-major order.
///
/// The shape is fixed at construction. Arithmetic never touches its operands:
/// every operation allocates a fresh matrix, and [`Matrix::set`] (or
/// `IndexMut`) is the only way to change an element in place.
///
/// ```
/// use ring_matrix::Matrix;
///
/// let a = Matrix::from_list(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_list(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// assert_eq!(a.multiply(&b).unwrap().to_list(), vec![vec![19, 22], vec![43, 50]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Creates a `rows x columns` matrix filled with zeros.
    pub fn new(rows: usize, columns: usize) -> Result<Matrix<T>, MatrixError> {
        let len = check_dimensions(rows, columns)?;

        Ok(Matrix {
            rows,
            cols: columns,
            cells: (0..len).map(|_| T::zero()).collect(),
        })
    }

    /// Builds a matrix from a list of rows.
    ///
    /// All rows must have the same, non-zero, length.
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Matrix<T>, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.len());
        check_dimensions(rows, cols)?;

        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            log::debug!(
                "rejecting ragged input: row {} has {} elements, expected {}",
                row,
                line.len(),
                cols
            );
            return Err(MatrixError::RaggedRows {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Ok(Matrix {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    /// Returns the rows as nested lists.
    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.cells.chunks(self.cols).map(|line| line.into()).collect()
    }

    /// Creates a `rows x columns` matrix of values drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        rng: &mut R,
    ) -> Result<Matrix<T>, MatrixError>
    where
        Standard: Distribution<T>,
    {
        let len = check_dimensions(rows, columns)?;

        Ok(Matrix {
            rows,
            cols: columns,
            cells: (0..len)
                .map(|_| Standard.sample(&mut *rng))
                .collect(),
        })
    }

    pub fn rows_count(&self) -> usize {
        self.rows
    }

    pub fn columns_count(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the element at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<T, MatrixError> {
        let idx = self.index_of(row, column)?;
        Ok(self.cells[idx].clone())
    }

    /// Replaces the element at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), MatrixError> {
        let idx = self.index_of(row, column)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> Result<&[T], MatrixError> {
        if row >= self.rows {
            return Err(self.out_of_range(row, 0));
        }
        Ok(&self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Returns the `columns x rows` matrix with `result[c, r] == self[r, c]`.
    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    /// Elementwise sum of two matrices of the same shape.
    pub fn add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.zip_with(rhs, Operation::Add, |a, b| a + b)
    }

    /// Elementwise difference `self - rhs` of two matrices of the same shape.
    pub fn subtract(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.zip_with(rhs, Operation::Subtract, |a, b| a - b)
    }

    /// Matrix product `self * rhs`.
    ///
    /// Requires `self.columns_count() == rhs.rows_count()`; the result has
    /// shape `self.rows_count() x rhs.columns_count()`.
    pub fn multiply(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols != rhs.rows {
            return Err(mismatch(Operation::Multiply, self, rhs));
        }
        log::trace!(
            "multiplying {}x{} by {}x{}",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols).map(move |j| {
                        (0..self.cols)
                            .map(|k| self.at(i, k) * rhs.at(k, j))
                            .fold(T::zero(), |acc, x| acc + x)
                    })
                })
                .collect(),
        })
    }

    /// Multiplies every element by `scalar`.
    pub fn multiply_scalar(&self, scalar: T) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .map(|x| x.clone() * scalar.clone())
                .collect(),
        }
    }

    fn zip_with(
        &self,
        rhs: &Matrix<T>,
        operation: Operation,
        f: impl Fn(T, T) -> T,
    ) -> Result<Matrix<T>, MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(mismatch(operation, self, rhs));
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| f(a.clone(), b.clone()))
                .collect(),
        })
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }
}

impl<T: Element + One> Matrix<T> {
    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Matrix<T>, MatrixError> {
        check_dimensions(n, n)?;

        Ok(Matrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        })
    }
}

// Shape-only helpers, usable without any bound on `T`.
impl<T> Matrix<T> {
    pub(crate) fn index_of(&self, row: usize, column: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || column >= self.cols {
            return Err(self.out_of_range(row, column));
        }
        Ok(row * self.cols + column)
    }

    fn out_of_range(&self, row: usize, column: usize) -> MatrixError {
        log::debug!(
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            column,
            self.rows,
            self.cols
        );
        MatrixError::IndexOutOfRange {
            row,
            column,
            rows: self.rows,
            columns: self.cols,
        }
    }

    pub(crate) fn cells(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

/// Returns the number of cells of a `rows x columns` matrix.
fn check_dimensions(rows: usize, columns: usize) -> Result<usize, MatrixError> {
    if rows == 0 || columns == 0 {
        log::debug!("rejecting {}x{} matrix", rows, columns);
        return Err(MatrixError::InvalidDimension { rows, columns });
    }
    rows.checked_mul(columns).ok_or_else(|| {
        log::debug!("rejecting {}x{} matrix: cell count overflows", rows, columns);
        MatrixError::TooLarge { rows, columns }
    })
}

fn mismatch<T>(operation: Operation, lhs: &Matrix<T>, rhs: &Matrix<T>) -> MatrixError {
    log::debug!(
        "rejecting {}: {}x{} and {}x{}",
        operation,
        lhs.rows,
        lhs.cols,
        rhs.rows,
        rhs.cols
    );
    MatrixError::DimensionMismatch {
        operation,
        left: (lhs.rows, lhs.cols),
        right: (rhs.rows, rhs.cols),
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
