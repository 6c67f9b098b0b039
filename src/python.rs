use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::matrix::dense::Matrix;
use crate::matrix::error::MatrixError;

// --------------------------------------------------
//                      PYTHON
// --------------------------------------------------

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::IndexOutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

// Python passes signed integers; negative sizes get the same error as zero.
fn dimensions(rows: i64, columns: i64) -> PyResult<(usize, usize)> {
    match (usize::try_from(rows), usize::try_from(columns)) {
        (Ok(rows), Ok(columns)) => Ok((rows, columns)),
        _ => Err(PyValueError::new_err(format!(
            "Invalid dimensions: {} rows and {} columns (both must be positive)",
            rows, columns
        ))),
    }
}

/// `Matrix` class of the Python module, over `float` elements.
#[pyclass(name = "Matrix")]
#[derive(Debug, Clone)]
pub struct PyMatrix {
    inner: Matrix<f64>,
}

#[derive(FromPyObject)]
pub enum MatrixOrScalar<'a> {
    Matrix(Bound<'a, PyMatrix>),
    Scalar(f64),
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(rows: i64, columns: i64) -> PyResult<Self> {
        let (rows, columns) = dimensions(rows, columns)?;
        Ok(PyMatrix {
            inner: Matrix::new(rows, columns)?,
        })
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: Matrix::from_list(lines)?,
        })
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    pub fn get(&self, row: usize, column: usize) -> PyResult<f64> {
        Ok(self.inner.get(row, column)?)
    }

    pub fn set(&mut self, row: usize, column: usize, value: f64) -> PyResult<()> {
        Ok(self.inner.set(row, column, value)?)
    }

    pub fn rows_count(&self) -> usize {
        self.inner.rows_count()
    }

    pub fn columns_count(&self) -> usize {
        self.inner.columns_count()
    }

    pub fn transpose(&self) -> PyMatrix {
        PyMatrix {
            inner: self.inner.transpose(),
        }
    }

    #[allow(non_snake_case)]
    #[getter]
    pub fn T(&self) -> PyMatrix {
        self.transpose()
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: self.inner.add(&rhs.inner)?,
        })
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: self.inner.subtract(&rhs.inner)?,
        })
    }

    pub fn __mul__(&self, rhs: MatrixOrScalar) -> PyResult<PyMatrix> {
        let inner = match rhs {
            MatrixOrScalar::Matrix(other) => self.inner.multiply(&other.borrow().inner)?,
            MatrixOrScalar::Scalar(k) => self.inner.multiply_scalar(k),
        };
        Ok(PyMatrix { inner })
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix({:?})", self.inner.to_list())
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
