use crate::error::Error;
use rug::Integer;

/// Decodes a digit string in the given radix to a non-negative integer.
/// Digits are `0-9` then `a-z` (case-insensitive) for values 0-35,
/// most-significant first. Any character whose value is not below the base
/// is rejected, which also covers bases outside 2-36.
pub fn decode(digits: &str, base: u32) -> Result<Integer, Error> {
    let mut acc = Integer::new();
    for c in digits.chars() {
        let v = match c.to_digit(36) {
            Some(v) if v < base => v,
            _ => return Err(Error::InvalidDigit { digit: c, base }),
        };
        acc *= base;
        acc += v;
    }
    Ok(acc)
}
