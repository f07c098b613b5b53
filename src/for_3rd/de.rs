//! Deserialization of Magnitude.

use core::fmt::Formatter;

use crate::num::Magnitude;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct MagnitudeVisitor {}

impl<'de> Deserialize<'de> for Magnitude {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MagnitudeVisitor {})
    }
}

impl<'de> Visitor<'de> for MagnitudeVisitor {
    type Value = Magnitude;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "except `String`, `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Magnitude::from_i64(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Magnitude::from_u64(v))
    }

    fn visit_f32<E: Error>(self, v: f32) -> Result<Self::Value, E> {
        Ok(Magnitude::from_f32(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Magnitude::from_f64(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        match Magnitude::parse(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e}: {v:?}"))),
        }
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

#[cfg(test)]
mod tests {

    use serde_json::{from_str, to_string};

    use crate::num::{Magnitude, MAX, MIN};

    #[test]
    fn from_json() {
        assert!(from_str::<Magnitude>("-0").unwrap().is_zero());
        assert!(from_str::<Magnitude>("0.3").unwrap().is_zero());
        assert!(from_str::<Magnitude>("110").unwrap() == 110);
        assert!(from_str::<Magnitude>("-5").unwrap() == -5);
        assert!(from_str::<Magnitude>("2.5e3").unwrap() == 2500);
        assert!(from_str::<Magnitude>("18446744073709551615").unwrap().exponent() == 19);

        let x = Magnitude::new(1.5, 300);
        assert!(x == from_str::<Magnitude>("\"1.5e300\"").unwrap());
        let y = from_str::<Magnitude>("1.5e300").unwrap();
        assert_eq!(y.exponent(), 300);
        assert!((y.mantissa() - 1.5).abs() < 1e-12);
        assert!(from_str::<Magnitude>("\"inf\"").unwrap().is_inf());
        assert!(from_str::<Magnitude>("\"nan\"").unwrap().is_nan());

        assert!(from_str::<Magnitude>("\"abc\"").is_err());
        assert!(from_str::<Magnitude>("true").is_err());
        assert!(from_str::<Magnitude>("[1]").is_err());

        // round trip
        let v = vec![Magnitude::from(42), Magnitude::new(1.25, 1000), MAX, MIN];
        let s = to_string(&v).unwrap();
        let d: Vec<Magnitude> = from_str(&s).unwrap();
        assert!(d[0] == 42);
        assert!(d[1] == v[1]);
        assert_eq!(d[2].exponent(), MAX.exponent());
        assert!(d[3].is_negative());
    }
}
