use crate::error::Error;
use rug::Integer;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Exact fraction of arbitrary-precision integers, always stored in lowest
/// terms with a positive denominator (the sign lives on the numerator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational {
    num: Integer,
    den: Integer,
}

impl Rational {
    pub fn new(num: Integer, den: Integer) -> Result<Rational, Error> {
        if den == 0 {
            return Err(Error::InvalidRational);
        }
        Ok(Self::reduced(num, den))
    }

    pub fn from_integer(n: Integer) -> Rational {
        Rational { num: n, den: Integer::from(1) }
    }

    pub fn zero() -> Rational {
        Rational::from_integer(Integer::new())
    }

    pub fn one() -> Rational {
        Rational::from_integer(Integer::from(1))
    }

    // den must be nonzero.
    fn reduced(mut num: Integer, mut den: Integer) -> Rational {
        if den.cmp0() == Ordering::Less {
            num = -num;
            den = -den;
        }
        let g = Integer::from(num.gcd_ref(&den));
        if g != 1 {
            num /= &g;
            den /= &g;
        }
        Rational { num, den }
    }

    pub fn numerator(&self) -> &Integer {
        &self.num
    }

    pub fn denominator(&self) -> &Integer {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    pub fn div(&self, rhs: &Rational) -> Result<Rational, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let num = Integer::from(&self.num * &rhs.den);
        let den = Integer::from(&self.den * &rhs.num);
        Ok(Self::reduced(num, den))
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        let num = Integer::from(&self.num * &rhs.den) + Integer::from(&rhs.num * &self.den);
        let den = Integer::from(&self.den * &rhs.den);
        Rational::reduced(num, den)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        let num = Integer::from(&self.num * &rhs.den) - Integer::from(&rhs.num * &self.den);
        let den = Integer::from(&self.den * &rhs.den);
        Rational::reduced(num, den)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        let num = Integer::from(&self.num * &rhs.num);
        let den = Integer::from(&self.den * &rhs.den);
        Rational::reduced(num, den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
