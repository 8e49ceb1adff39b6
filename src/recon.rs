use crate::error::Error;
use crate::input::Input;
use crate::interpolate::interpolate;
use crate::rational::Rational;
use std::fmt::Write;

/// Result of one reconstruction run: the recovered coefficients in
/// ascending powers and whether they fit every supplied share.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    pub degree: usize,
    pub fits_all: bool,
    pub coeffs: Vec<Rational>,
}

/// Decodes all shares, interpolates through the first k (sorted by x), then
/// checks the polynomial against every decoded share.
pub fn reconstruct(input: &Input) -> Result<Reconstruction, Error> {
    let k = input.keys.k;
    if k < 1 || k > input.keys.n {
        return Err(Error::InsufficientPoints {
            have: input.keys.n,
            need: k,
        });
    }
    let mut points = input.decode_points()?;
    if points.len() < k {
        return Err(Error::InsufficientPoints {
            have: points.len(),
            need: k,
        });
    }
    points.sort_by(|a, b| a.x.cmp(&b.x));

    let poly = interpolate(&points[..k])?;

    let fits_all = points.iter().all(|p| {
        poly.evaluate(&Rational::from_integer(p.x.clone()))
            == Rational::from_integer(p.y.clone())
    });

    Ok(Reconstruction {
        degree: k - 1,
        fits_all,
        coeffs: poly.coeffs,
    })
}

impl Reconstruction {
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "degree m = {}", self.degree).unwrap();
        writeln!(out, "fits all n points = {}", self.fits_all).unwrap();
        writeln!(out, "coefficients a_0..a_m (ascending powers):").unwrap();
        let coeffs: Vec<String> = self.coeffs.iter().map(|c| c.to_string()).collect();
        writeln!(out, "{}", coeffs.join(" ")).unwrap();
        out
    }
}
