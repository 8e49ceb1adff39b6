use rug::Integer;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid rational: denominator is zero")]
    InvalidRational,
    #[error("division by zero rational")]
    DivisionByZero,
    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("invalid base field: {0:?}")]
    InvalidBase(String),
    #[error("insufficient points: have {have}, need {need}")]
    InsufficientPoints { have: usize, need: usize },
    #[error("duplicate abscissa x = {0} among interpolation points")]
    DuplicateAbscissa(Integer),
}
