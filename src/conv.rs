//! Conversion from and to native types.

use crate::common::consts::pow10;
use crate::common::util::fit_digits;
use crate::common::util::mantissa_digits;
use crate::defs::NUMBER_MAX_DIGITS;
use crate::num::Magnitude;

impl Magnitude {
    /// Constructs a number from `f`.
    /// Any `f` with magnitude below 1 gives zero.
    pub fn from_f64(f: f64) -> Self {
        Self::normalized(f, 0)
    }

    /// Constructs a number from `f`.
    pub fn from_f32(f: f32) -> Self {
        Self::from_f64(f as f64)
    }

    /// Converts `self` to f64. Values beyond the range of f64 become infinite.
    ///
    /// The result is the double nearest to the shortest decimal representation of the mantissa
    /// scaled by the exponent, so integers constructed from the integer types convert back exactly.
    pub fn to_f64(&self) -> f64 {
        if !self.is_finite() {
            return self.mantissa();
        }

        match i32::try_from(self.exponent()).ok().and_then(pow10) {
            Some(p) => format!("{}e{}", self.mantissa(), self.exponent())
                .parse()
                .unwrap_or(self.mantissa() * p),
            None => self.mantissa() * f64::INFINITY,
        }
    }

    /// Converts `self` to an integer. The fractional part is truncated.
    /// Returns None if `self` is infinite, NaN, or has more than 18 integer digits.
    ///
    /// The digits are taken from the shortest decimal representation of the mantissa,
    /// so integers constructed from the integer types convert back exactly.
    pub fn to_number(&self) -> Option<i64> {
        if !self.is_finite() || self.exponent() >= NUMBER_MAX_DIGITS {
            return None;
        }

        let digits = fit_digits(&mantissa_digits(self.mantissa()), self.exponent() as usize + 1);
        let v: i64 = digits.parse().ok()?;

        Some(if self.is_negative() { -v } else { v })
    }
}

macro_rules! impl_int_conv {
    ($s:ty, $from_s:ident) => {
        impl Magnitude {
            /// Constructs a number from an integer value.
            pub fn $from_s(i: $s) -> Self {
                Self::normalized(i as f64, 0)
            }
        }

        impl From<$s> for Magnitude {
            fn from(i: $s) -> Self {
                Magnitude::$from_s(i)
            }
        }
    };
}

impl_int_conv!(i8, from_i8);
impl_int_conv!(i16, from_i16);
impl_int_conv!(i32, from_i32);
impl_int_conv!(i64, from_i64);
impl_int_conv!(i128, from_i128);

impl_int_conv!(u8, from_u8);
impl_int_conv!(u16, from_u16);
impl_int_conv!(u32, from_u32);
impl_int_conv!(u64, from_u64);
impl_int_conv!(u128, from_u128);

impl From<f64> for Magnitude {
    fn from(f: f64) -> Self {
        Magnitude::from_f64(f)
    }
}

impl From<f32> for Magnitude {
    fn from(f: f32) -> Self {
        Magnitude::from_f32(f)
    }
}
