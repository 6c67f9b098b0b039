use num_traits::Zero;
use std::ops::{Mul, Sub};

/// Scalar types a [`Matrix`](crate::matrix::dense::Matrix) can hold.
///
/// `Zero` already brings `Add<Output = Self>`, so together with `Sub` and
/// `Mul` this is the commutative ring interface the matrix operations rely on.
/// Every type with these capabilities is an `Element`: primitive integers and
/// floats, `num_bigint::BigInt`, [`Fraction`](crate::rings::fraction::Fraction).
pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + Sub<Output = Self>
    + Mul<Output = Self>
{
}

impl<T> Element for T where T: Clone + Zero + Sub<Output = T> + Mul<Output = T> {}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
