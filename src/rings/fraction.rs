use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::str::FromStr;
use thiserror::Error;

/// Exact rational number over arbitrary-precision integers.
///
/// Always kept normalized: `den > 0` and `gcd(num, den) == 1`, so the derived
/// structural equality and hashing agree with numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFractionError {
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("Zero denominator")]
    ZeroDenominator,
}

impl Fraction {
    /// Builds `num / den` in lowest terms.
    ///
    /// # Panics
    ///
    /// If `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }
        Self::reduce(num, den)
    }

    fn reduce(num: BigInt, den: BigInt) -> Self {
        let g = num.gcd(&den);
        let (num, den) = (num / &g, den / &g);
        if den.is_negative() {
            Self {
                num: -num,
                den: -den,
            }
        } else {
            Self { num, den }
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    /// Parses `"n"` or `"n/d"`, with optional whitespace around the slash.
    fn from_str(s: &str) -> Result<Self, ParseFractionError> {
        let parse = |part: &str| {
            let part = part.trim();
            BigInt::parse_bytes(part.as_bytes(), 10)
                .ok_or_else(|| ParseFractionError::InvalidNumber(part.to_owned()))
        };

        let (num, den) = match s.split_once('/') {
            Some((num, den)) => (parse(num)?, parse(den)?),
            None => (parse(s)?, BigInt::one()),
        };
        if den.is_zero() {
            return Err(ParseFractionError::ZeroDenominator);
        }
        Ok(Fraction::reduce(num, den))
    }
}

impl From<BigInt> for Fraction {
    fn from(num: BigInt) -> Fraction {
        Fraction {
            num,
            den: BigInt::one(),
        }
    }
}

impl From<i64> for Fraction {
    fn from(num: i64) -> Fraction {
        Fraction::from(BigInt::from(num))
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::reduce(self.num + rhs.num, self.den);
        }

        Fraction::reduce(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + -rhs
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::reduce(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(BigInt::one())
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.den.is_one() && self.num == BigInt::from(*rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Fraction {
    // Denominators are positive, so cross-multiplying keeps the order.
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
