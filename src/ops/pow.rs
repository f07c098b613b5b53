//! Exponentiation.

use crate::common::consts::POW10_OFFSET;
use crate::defs::Error;
use crate::num::Magnitude;
use crate::num::E;
use crate::num::ONE;
use crate::num::ZERO;

impl Magnitude {
    /// Returns `self` to the power of `power`.
    ///
    /// ## Errors
    ///
    ///  - NegativePowerOfZero: `self` is zero and `power` is negative.
    pub fn pow(&self, power: i64) -> Result<Self, Error> {
        if power == 0 {
            return Ok(ONE);
        }

        if self.is_zero() {
            return if power < 0 {
                Err(Error::NegativePowerOfZero)
            } else {
                Ok(ZERO)
            };
        }

        Ok(self.powi(power))
    }

    /// Returns `e` to the power of `n`.
    pub fn exp(n: i64) -> Self {
        if n == 0 {
            ONE
        } else {
            E.powi(n)
        }
    }

    // Power of a non-zero number, `power` is not zero.
    fn powi(&self, power: i64) -> Self {
        if !self.is_finite() {
            return Self::normalized(self.mantissa().powf(power as f64), 0);
        }

        if self.is_negative() {
            let ret = self.abs().powi(power);
            return if power % 2 == 0 { ret } else { ret.neg() };
        }

        if self.exponent() <= POW10_OFFSET as u64 {
            if let Ok(p) = i32::try_from(power) {
                let r = self.to_f64().powi(p);
                if r.is_finite() {
                    return Self::normalized(r, 0);
                }
            }
        }

        match self.log10() {
            Some(l) => Self::from_log10(l * power as f64),
            None => ZERO,
        }
    }
}
