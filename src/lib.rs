//! Dense matrices over any commutative ring element type.
//!
//! [`Matrix<T>`] stores `rows x columns` elements and derives new matrices
//! through transpose, addition, subtraction, matrix product and scalar
//! product. Shape and index violations are reported as [`MatrixError`]
//! values. [`Fraction`] provides exact rational elements.

pub mod matrix {
    pub mod dense;
    pub mod element;
    pub mod error;
    pub mod ops;
}
pub mod rings {
    pub mod fraction;
}

#[cfg(feature = "python")]
pub mod python;

pub use matrix::dense::Matrix;
pub use matrix::element::Element;
pub use matrix::error::{MatrixError, Operation};
pub use rings::fraction::{Fraction, ParseFractionError};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn ring_matrix(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
