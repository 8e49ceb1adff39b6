use crate::error::Error;
use crate::poly::Polynomial;
use crate::rational::Rational;
use rug::Integer;

/// One decoded share: a point the reconstructed polynomial must pass through.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: Integer,
    pub y: Integer,
}

/// Builds the unique degree-(k-1) polynomial through the k given points by
/// summing scaled Lagrange basis polynomials. Fails with `DuplicateAbscissa`
/// when two points share an x, since the basis denominator would be zero.
pub fn interpolate(points: &[Point]) -> Result<Polynomial, Error> {
    let mut result = Polynomial::zero();
    for (i, pi) in points.iter().enumerate() {
        let mut numer = Polynomial::one();
        let mut denom = Rational::one();
        for (j, pj) in points.iter().enumerate() {
            if j == i {
                continue;
            }
            let diff = Integer::from(&pi.x - &pj.x);
            if diff == 0 {
                return Err(Error::DuplicateAbscissa(pi.x.clone()));
            }
            // linear factor (x - x_j)
            let factor = Polynomial::new(vec![
                Rational::from_integer(Integer::from(-&pj.x)),
                Rational::one(),
            ]);
            numer = &numer * &factor;
            denom = &denom * &Rational::from_integer(diff);
        }
        let scale = Rational::from_integer(pi.y.clone()).div(&denom)?;
        result = &result + &numer.scale(&scale);
    }
    Ok(result)
}
