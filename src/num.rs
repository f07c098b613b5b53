//! Magnitude definition, normalization, sentinel values, and comparison.

use crate::common::consts::unscale;
use crate::defs::Exponent;
use crate::defs::Mantissa;
use crate::defs::Sign;
use crate::defs::EXPONENT_MAX;
use crate::defs::MANTISSA_MAX;

#[cfg(feature = "random")]
use crate::defs::Error;

/// Zero.
pub const ZERO: Magnitude = Magnitude { m: 0.0, e: 0 };

/// One.
pub const ONE: Magnitude = Magnitude { m: 1.0, e: 0 };

/// Euler's number.
pub const E: Magnitude = Magnitude {
    m: core::f64::consts::E,
    e: 0,
};

/// Positive infinity.
pub const INF: Magnitude = Magnitude {
    m: f64::INFINITY,
    e: 0,
};

/// Not a number.
pub const NAN: Magnitude = Magnitude { m: f64::NAN, e: 0 };

/// Largest finite value. Any value that would be larger saturates to it.
pub const MAX: Magnitude = Magnitude {
    m: MANTISSA_MAX,
    e: EXPONENT_MAX,
};

/// Smallest finite value. Any value that would be smaller saturates to it.
pub const MIN: Magnitude = Magnitude {
    m: -MANTISSA_MAX,
    e: EXPONENT_MAX,
};

/// A number represented as `m * 10^e`.
///
/// In normal form either the number is zero with `m = 0` and `e = 0`,
/// or `1 <= |m| < 10`. Infinity and NaN have `e = 0`.
/// Numbers with magnitude between 0 and 1 can not be represented and become zero.
#[derive(Copy, Clone, Debug)]
pub struct Magnitude {
    m: Mantissa,
    e: Exponent,
}

impl Magnitude {
    /// Returns a new number with the value `m * 10^e`.
    pub fn new(m: Mantissa, e: Exponent) -> Self {
        Self::normalized(m, e as i128)
    }

    /// Returns `m * 10^e` in normal form.
    /// `e` is wide enough to hold sums and differences of two exponents.
    pub(crate) fn normalized(mut m: Mantissa, e: i128) -> Self {
        if m.is_nan() || m.is_infinite() {
            return Magnitude { m, e: 0 };
        }

        if e == EXPONENT_MAX as i128 && m.abs() == MANTISSA_MAX {
            return Magnitude { m, e: EXPONENT_MAX };
        }

        if m == 0.0 || (e == 0 && m.abs() < 1.0) {
            return ZERO;
        }

        let mut shift = m.abs().log10().floor() as i32;
        m = unscale(m, shift);

        // log10 can be off by one near powers of ten.
        if m.abs() >= 10.0 {
            m /= 10.0;
            shift += 1;
        } else if m.abs() < 1.0 {
            m *= 10.0;
            shift -= 1;
        }

        let e = e + shift as i128;

        if e < 0 {
            ZERO
        } else if e > EXPONENT_MAX as i128 {
            Self::saturated(if m > 0.0 { Sign::Pos } else { Sign::Neg })
        } else {
            Magnitude { m, e: e as Exponent }
        }
    }

    /// Returns MAX for the positive sign, and MIN for the negative sign.
    pub(crate) fn saturated(s: Sign) -> Self {
        match s {
            Sign::Pos => MAX,
            Sign::Neg => MIN,
        }
    }

    /// Restores the normal form of `self`.
    pub fn normalize(&mut self) {
        *self = Self::normalized(self.m, self.e as i128);
    }

    /// Returns the mantissa.
    pub fn mantissa(&self) -> Mantissa {
        self.m
    }

    /// Returns the exponent.
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns the sign of `self`. Zero is positive.
    pub fn sign(&self) -> Sign {
        if self.is_negative() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.m == 0.0
    }

    /// Returns true if `self` is positive or zero.
    /// The function returns false if `self` is NaN.
    pub fn is_positive(&self) -> bool {
        self.m >= 0.0
    }

    /// Returns true if `self` is negative.
    /// The function returns false if `self` is NaN.
    pub fn is_negative(&self) -> bool {
        self.m < 0.0
    }

    /// Returns true if `self` is infinite.
    pub fn is_inf(&self) -> bool {
        self.m.is_infinite()
    }

    /// Returns true if `self` is not a number.
    pub fn is_nan(&self) -> bool {
        self.m.is_nan()
    }

    /// Returns true if `self` is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.m.is_finite()
    }

    /// Compares `self` to `d2`.
    /// Returns 1 if `self` > `d2`, -1 if `self` < `d2`, 0 if `self` == `d2`, None if `self` or `d2` is NaN.
    pub fn cmp(&self, d2: &Self) -> Option<i8> {
        if self.is_nan() || d2.is_nan() {
            return None;
        }

        if self.m == d2.m && self.e == d2.e {
            return Some(0);
        }

        if self.is_inf() || d2.is_inf() {
            // finite mantissas are bounded by 10
            return Some(if self.m > d2.m { 1 } else { -1 });
        }

        let s = self.sign();
        if s != d2.sign() {
            return Some(s.to_int());
        }

        if self.e != d2.e {
            let ord = if self.e > d2.e { 1 } else { -1 };
            return Some(ord * s.to_int());
        }

        let ord = if self.m.abs() > d2.m.abs() { 1 } else { -1 };
        Some(ord * s.to_int())
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        Self::normalized(self.m.abs(), self.e as i128)
    }

    /// Returns `self` with the opposite sign.
    pub fn neg(&self) -> Self {
        Self::normalized(-self.m, self.e as i128)
    }

    /// Returns the greater of `self` and `d2`. If either argument is NaN, the function returns NaN.
    pub fn max(&self, d2: &Self) -> Self {
        match self.cmp(d2) {
            None => NAN,
            Some(v) if v < 0 => *d2,
            Some(_) => *self,
        }
    }

    /// Returns the lesser of `self` and `d2`. If either argument is NaN, the function returns NaN.
    pub fn min(&self, d2: &Self) -> Self {
        match self.cmp(d2) {
            None => NAN,
            Some(v) if v > 0 => *d2,
            Some(_) => *self,
        }
    }

    /// Returns a random normalized number with the exponent in the range
    /// from `exp_from` to `exp_to` inclusive. The sign can be positive or negative. Zero is excluded.
    /// Function does not follow any specific distribution law.
    /// The intended use of this function is for testing.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `exp_from` is greater than `exp_to`.
    #[cfg(feature = "random")]
    pub fn random_normal(exp_from: Exponent, exp_to: Exponent) -> Result<Self, Error> {
        use rand::Rng;

        if exp_from > exp_to {
            return Err(Error::InvalidArgument);
        }

        let mut rng = rand::thread_rng();

        let mut m = 1.0 + 9.0 * rng.gen::<f64>();
        if m >= 10.0 {
            m = MANTISSA_MAX;
        }
        if rng.gen::<bool>() {
            m = -m;
        }

        let e = rng.gen_range(exp_from..=exp_to);

        Ok(Magnitude { m, e })
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        ZERO
    }
}
