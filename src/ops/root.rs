//! Roots.

use crate::common::consts::POW10_OFFSET;
use crate::defs::Error;
use crate::num::Magnitude;
use crate::num::NAN;
use crate::num::ZERO;

impl Magnitude {
    /// Returns the root of degree `n` of `self`.
    /// A negative `n` gives the reciprocal of the root, which is zero for any `|self| > 1`.
    ///
    /// ## Errors
    ///
    ///  - ZeroRoot: `n` is zero.
    ///  - EvenRootOfNegative: `n` is even and `self` is negative.
    pub fn root(&self, n: i64) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::ZeroRoot);
        }

        if self.is_nan() {
            return Ok(NAN);
        }

        if self.is_zero() {
            return Ok(ZERO);
        }

        if self.is_negative() && n % 2 == 0 {
            return Err(Error::EvenRootOfNegative);
        }

        if self.is_inf() {
            return Ok(if n > 0 { *self } else { ZERO });
        }

        let ret = self.abs().root_abs(n);

        Ok(if self.is_negative() { ret.neg() } else { ret })
    }

    /// Returns the square root of `self`.
    ///
    /// ## Errors
    ///
    ///  - EvenRootOfNegative: `self` is negative.
    pub fn sqrt(&self) -> Result<Self, Error> {
        self.root(2)
    }

    /// Returns the cube root of `self`.
    pub fn cbrt(&self) -> Self {
        match self.root(3) {
            Ok(v) => v,
            Err(_) => NAN,
        }
    }

    // Root of a positive finite number.
    fn root_abs(&self, n: i64) -> Self {
        if self.exponent() <= POW10_OFFSET as u64 {
            let v = self.to_f64();
            if v.is_finite() {
                let r = match n {
                    2 => v.sqrt(),
                    3 => v.cbrt(),
                    _ => v.powf(1.0 / n as f64),
                };
                return Self::normalized(r, 0);
            }
        }

        match self.log10() {
            Some(l) => Self::from_log10(l / n as f64),
            None => ZERO,
        }
    }
}
