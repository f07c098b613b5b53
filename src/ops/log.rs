//! Logarithm.

use crate::defs::EXPONENT_MAX;
use crate::num::Magnitude;
use crate::num::MAX;
use crate::num::NAN;
use crate::num::ZERO;

impl Magnitude {
    /// Returns the logarithm base 10 of `|self|`.
    /// The function returns None if `self` is zero, infinite, or NaN, or if the result is not a finite double.
    pub fn log10(&self) -> Option<f64> {
        if self.is_zero() || !self.is_finite() {
            return None;
        }

        let ret = self.exponent() as f64 + self.mantissa().abs().log10();

        if ret.is_finite() {
            Some(ret)
        } else {
            None
        }
    }

    /// Returns 10^`l`. The integer part of `l` becomes the exponent,
    /// and the fractional part gives the mantissa.
    pub(crate) fn from_log10(l: f64) -> Self {
        if l.is_nan() {
            NAN
        } else if l < 0.0 {
            ZERO
        } else if l >= EXPONENT_MAX as f64 {
            MAX
        } else {
            let e = l.floor();
            Self::normalized(10f64.powf(l - e), e as i128)
        }
    }
}
