use itertools::Itertools;
use std::fmt;
use std::ops;

use crate::matrix::dense::Matrix;
use crate::matrix::element::Element;
use crate::matrix::error::MatrixError;

// Binary operators borrow both operands and report shape errors instead of
// panicking, so `(&a + &b)?` composes like the named methods.

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        Matrix::add(self, rhs)
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.subtract(rhs)
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.multiply(rhs)
    }
}

/// Panics with the [`MatrixError::IndexOutOfRange`] message on a bad index;
/// use [`Matrix::get`] for a checked read.
impl<T> ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.index_of(row, column) {
            Ok(idx) => &self.cells()[idx],
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> ops::IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        match self.index_of(row, column) {
            Ok(idx) => &mut self.cells_mut()[idx],
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Element + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ret = self
            .cells()
            .chunks(self.columns_count())
            .map(|line| line.iter().join(" "))
            .join("\n");
        write!(f, "{}", ret)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
