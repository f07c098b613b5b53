//! Addition and subtraction.

use crate::common::consts::pow10_exact;
use crate::defs::ADD_EXPONENT_GAP;
use crate::num::Magnitude;
use crate::num::ONE;

impl Magnitude {
    /// Adds `d2` to `self` and returns the result of the addition.
    ///
    /// If the exponents of the operands differ by more than 14,
    /// the operand with the smaller exponent is too small to change the result
    /// and the other operand is returned.
    pub fn add(&self, d2: &Self) -> Self {
        if !self.is_finite() || !d2.is_finite() {
            return Self::normalized(self.mantissa() + d2.mantissa(), 0);
        }

        let (big, small) = if self.exponent() > d2.exponent() { (self, d2) } else { (d2, self) };

        let delta = big.exponent() - small.exponent();
        if delta > ADD_EXPONENT_GAP {
            return *big;
        }

        // align at the smaller exponent
        let m = big.mantissa() * pow10_exact(delta as i32) + small.mantissa();

        Self::normalized(m, small.exponent() as i128)
    }

    /// Subtracts `d2` from `self` and returns the result of the subtraction.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add(&d2.neg())
    }

    /// Increments `self` by one.
    pub fn inc(&mut self) {
        *self = self.add(&ONE);
    }

    /// Decrements `self` by one.
    pub fn dec(&mut self) {
        *self = self.sub(&ONE);
    }
}
