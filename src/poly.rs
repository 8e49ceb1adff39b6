use crate::rational::Rational;
use std::ops::{Add, Mul};

/// Dense univariate polynomial over exact rationals, one coefficient per
/// power of x in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    pub coeffs: Vec<Rational>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<Rational>) -> Polynomial {
        Polynomial { coeffs }
    }

    pub fn zero() -> Polynomial {
        Polynomial::new(vec![Rational::zero()])
    }

    pub fn one() -> Polynomial {
        Polynomial::new(vec![Rational::one()])
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn scale(&self, s: &Rational) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(|c| c * s).collect())
    }

    /// Evaluates with a running power of x, one multiply per term.
    pub fn evaluate(&self, x: &Rational) -> Rational {
        let mut acc = Rational::zero();
        let mut pow = Rational::one();
        for c in &self.coeffs {
            acc = &acc + &(c * &pow);
            pow = &pow * x;
        }
        acc
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        let mut coeffs = vec![Rational::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = &coeffs[i + j] + &(a * b);
            }
        }
        Polynomial::new(coeffs)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        let (longer, shorter) = if self.coeffs.len() < rhs.coeffs.len() {
            (rhs, self)
        } else {
            (self, rhs)
        };
        let mut coeffs = longer.coeffs.clone();
        for (c, s) in coeffs.iter_mut().zip(shorter.coeffs.iter()) {
            *c = &*c + s;
        }
        Polynomial::new(coeffs)
    }
}
