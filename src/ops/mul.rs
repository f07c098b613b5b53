//! Multiplication and division.

use crate::num::Magnitude;
use crate::num::NAN;
use crate::num::ZERO;

impl Magnitude {
    /// Multiplies `self` by `d2` and returns the result of the multiplication.
    pub fn mul(&self, d2: &Self) -> Self {
        Self::normalized(
            self.mantissa() * d2.mantissa(),
            self.exponent() as i128 + d2.exponent() as i128,
        )
    }

    /// Divides `self` by `d2` and returns the result of the division.
    ///
    /// Division by zero returns NaN.
    /// A quotient with magnitude below 1 is zero.
    pub fn div(&self, d2: &Self) -> Self {
        if d2.is_zero() {
            return NAN;
        }

        if !self.is_finite() || !d2.is_finite() {
            return Self::normalized(self.mantissa() / d2.mantissa(), 0);
        }

        if d2.exponent() > self.exponent() {
            return ZERO;
        }

        let m = self.mantissa() / d2.mantissa();

        if d2.exponent() == self.exponent() && m.abs() < 1.0 {
            return ZERO;
        }

        Self::normalized(m, self.exponent() as i128 - d2.exponent() as i128)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::EXPONENT_MAX;
    use crate::num::{INF, MAX, MIN, ONE};

    #[test]
    fn test_mul() {
        let d1 = Magnitude::new(1.0, 2);
        let d2 = Magnitude::new(1.0, 1);
        let d3 = d1.mul(&d2);
        assert_eq!(d3.mantissa(), 1.0);
        assert_eq!(d3.exponent(), 3);

        let d1 = Magnitude::new(5.0, 10);
        let d2 = Magnitude::new(-4.0, 20);
        let d3 = d1.mul(&d2);
        assert_eq!(d3.mantissa(), -2.0);
        assert_eq!(d3.exponent(), 31);

        assert!(d1.mul(&ZERO).is_zero());
        assert!(ZERO.mul(&d1).is_zero());
        assert_eq!(d1.mul(&ONE).cmp(&d1), Some(0));
        assert_eq!(d1.mul(&ONE.neg()).cmp(&d1.neg()), Some(0));

        // exponent overflow saturates
        let d1 = Magnitude::new(2.0, EXPONENT_MAX / 2 + 1);
        assert_eq!(d1.mul(&d1).cmp(&MAX), Some(0));
        assert_eq!(d1.mul(&d1.neg()).cmp(&MIN), Some(0));
        assert_eq!(MAX.mul(&MAX).cmp(&MAX), Some(0));
        assert_eq!(MAX.mul(&MIN).cmp(&MIN), Some(0));
        assert_eq!(MAX.mul(&ONE).cmp(&MAX), Some(0));

        assert_eq!(INF.mul(&d2).cmp(&INF.neg()), Some(0));
        assert!(INF.mul(&ZERO).is_nan());
        assert!(NAN.mul(&ONE).is_nan());
        assert_eq!(NAN.mul(&ONE).exponent(), 0);
    }

    #[test]
    fn test_div() {
        let d1 = Magnitude::new(1.0, 2);
        let d2 = Magnitude::new(1.0, 1);
        let d3 = d1.div(&d2);
        assert_eq!(d3.mantissa(), 1.0);
        assert_eq!(d3.exponent(), 1);

        let d1 = Magnitude::new(1.0, 5);
        let d2 = Magnitude::new(2.0, 4);
        let d3 = d1.div(&d2);
        assert_eq!(d3.mantissa(), 5.0);
        assert_eq!(d3.exponent(), 0);

        let d1 = Magnitude::new(-9.0, 40);
        let d2 = Magnitude::new(3.0, 20);
        let d3 = d1.div(&d2);
        assert_eq!(d3.mantissa(), -3.0);
        assert_eq!(d3.exponent(), 20);

        // division by zero
        assert!(d1.div(&ZERO).is_nan());
        assert!(ZERO.div(&ZERO).is_nan());
        assert!(MAX.div(&ZERO).is_nan());
        assert!(INF.div(&ZERO).is_nan());
        assert!(NAN.div(&ZERO).is_nan());

        // quotients below 1
        assert!(d2.div(&d1).is_zero());
        assert!(ONE.div(&Magnitude::new(2.0, 0)).is_zero());
        assert!(Magnitude::new(1.0, 7).div(&Magnitude::new(2.0, 7)).is_zero());
        assert!(ZERO.div(&d1).is_zero());

        assert_eq!(MAX.div(&MAX).cmp(&ONE), Some(0));
        assert_eq!(MAX.div(&ONE).cmp(&MAX), Some(0));

        assert_eq!(INF.div(&d2).cmp(&INF), Some(0));
        assert!(d2.div(&INF).is_zero());
        assert!(INF.div(&INF).is_nan());
        assert!(NAN.div(&ONE).is_nan());
        assert!(ONE.div(&NAN).is_nan());
    }
}
