use crate::baseconv::decode;
use crate::error::Error;
use crate::interpolate::Point;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The whole stdin blob, decoded into an explicit shape before the core
/// runs: a `keys` header plus one entry per share, keyed by the decimal
/// x-coordinate.
#[derive(Debug, Clone, Deserialize)]
pub struct Input {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, Share>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Share {
    pub base: Base,
    pub value: String,
}

/// The source data carries `base` sometimes as a JSON number, sometimes as
/// a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Base {
    Number(u32),
    Text(String),
}

impl Share {
    pub fn radix(&self) -> Result<u32, Error> {
        match &self.base {
            Base::Number(b) => Ok(*b),
            Base::Text(s) => s
                .parse::<u32>()
                .map_err(|_| Error::InvalidBase(s.clone())),
        }
    }
}

impl Input {
    /// Decodes every share entry into a point: the map key is the decimal
    /// x-coordinate, the value string is y in the entry's declared radix.
    pub fn decode_points(&self) -> Result<Vec<Point>, Error> {
        let mut points = Vec::with_capacity(self.shares.len());
        for (key, share) in &self.shares {
            let x = decode(key, 10)?;
            let y = decode(&share.value, share.radix()?)?;
            points.push(Point { x, y });
        }
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rug::Integer;

    #[test]
    fn parses_mixed_base_representations() {
        let input: Input = serde_json::from_str(
            r#"{
                "keys": { "n": 2, "k": 2 },
                "1": { "base": "2", "value": "111" },
                "2": { "base": 4, "value": "213" }
            }"#,
        )
        .unwrap();
        assert_eq!(input.keys.n, 2);
        assert_eq!(input.keys.k, 2);
        let points = input.decode_points().unwrap();
        assert_eq!(points[0].x, 1);
        assert_eq!(points[0].y, 7);
        assert_eq!(points[1].x, 2);
        assert_eq!(points[1].y, 39);
    }

    #[test]
    fn rejects_missing_keys_header() {
        let res: Result<Input, _> = serde_json::from_str(
            r#"{ "1": { "base": "2", "value": "111" } }"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn rejects_non_numeric_threshold() {
        let res: Result<Input, _> = serde_json::from_str(
            r#"{ "keys": { "n": 2, "k": "two" } }"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn rejects_junk_base_string() {
        let input: Input = serde_json::from_str(
            r#"{
                "keys": { "n": 1, "k": 1 },
                "1": { "base": "ten", "value": "5" }
            }"#,
        )
        .unwrap();
        assert_eq!(
            input.decode_points(),
            Err(Error::InvalidBase("ten".to_string()))
        );
    }

    #[test]
    fn rejects_value_invalid_for_declared_base() {
        let input: Input = serde_json::from_str(
            r#"{
                "keys": { "n": 1, "k": 1 },
                "3": { "base": "8", "value": "129" }
            }"#,
        )
        .unwrap();
        assert_eq!(
            input.decode_points(),
            Err(Error::InvalidDigit { digit: '9', base: 8 })
        );
    }

    #[test]
    fn decodes_large_share_values_exactly() {
        let input: Input = serde_json::from_str(
            r#"{
                "keys": { "n": 1, "k": 1 },
                "1": { "base": "16", "value": "ffffffffffffffffffffffffffffffff" }
            }"#,
        )
        .unwrap();
        let points = input.decode_points().unwrap();
        let expected = (Integer::from(1) << 128) - 1u32;
        assert_eq!(points[0].y, expected);
    }
}
