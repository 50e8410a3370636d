//! Deserialization of BigFixedNumber.

use crate::defs::Digit;
use crate::{BigFixedNumber, Sign};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for BigFixedNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (s, ip, digits) = <(i8, usize, Vec<Digit>)>::deserialize(deserializer)?;
        let sign = match s {
            1 => Sign::Pos,
            -1 => Sign::Neg,
            _ => return Err(DeError::custom("sign must be 1 or -1")),
        };
        BigFixedNumber::from_raw_parts(sign, &digits, ip)
            .map_err(|e| DeError::custom(format!("{:?}", e)))
    }
}
