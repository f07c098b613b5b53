//! Serialization of Magnitude.
//! A number is serialized as a string with 9 fractional digits of the mantissa.

use crate::num::Magnitude;
use serde::{Serialize, Serializer};

impl Serialize for Magnitude {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&Magnitude::serialize(self))
    }
}
