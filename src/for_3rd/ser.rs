//! Serialization of BigFixedNumber.
//!
//! The serialized form is the raw parts of a number: sign, integer-part
//! length, and digit sequence. A number does not carry its radix, so a
//! string form would be ambiguous.

use crate::BigFixedNumber;
use serde::{Serialize, Serializer};

impl Serialize for BigFixedNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (s, digits, ip) = self.to_raw_parts();
        (s as i8, ip, digits).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {

    use crate::BigFixedNumber;
    use serde_json::to_string;

    #[test]
    fn to_json() {
        assert_eq!(
            to_string(&BigFixedNumber::zero().unwrap()).unwrap(),
            "[1,1,[0]]"
        );
        assert_eq!(
            to_string(&BigFixedNumber::parse("-12.25", 10).unwrap()).unwrap(),
            "[-1,2,[1,2,2,5]]"
        );
    }
}
