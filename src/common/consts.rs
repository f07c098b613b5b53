//! Static constants.

use lazy_static::lazy_static;

/// Largest decimal exponent of a finite double.
pub(crate) const POW10_OFFSET: i32 = f64::MAX_10_EXP;

/// Number of entries in the power of ten table.
pub(crate) const POW10_SIZE: usize = 2 * POW10_OFFSET as usize + 1;

lazy_static! {

    /// Powers of ten from 10^-308 to 10^308. Entry `i` holds 10^(i - POW10_OFFSET).
    /// Every entry is the correctly rounded double of its power.
    pub(crate) static ref POW10: [f64; POW10_SIZE] = {
        let mut table = [1.0; POW10_SIZE];
        for (i, v) in table.iter_mut().enumerate() {
            let e = i as i32 - POW10_OFFSET;
            *v = format!("1e{}", e).parse().expect("Power of ten table initialization.");
        }
        table
    };
}

/// Returns 10^`e`, or None if `e` is outside of the range of finite normal doubles.
pub fn pow10(e: i32) -> Option<f64> {
    if (-POW10_OFFSET..=POW10_OFFSET).contains(&e) {
        Some(POW10[(e + POW10_OFFSET) as usize])
    } else {
        None
    }
}

/// Returns 10^`e` for `e` known to be in range.
#[inline]
pub(crate) fn pow10_exact(e: i32) -> f64 {
    debug_assert!((-POW10_OFFSET..=POW10_OFFSET).contains(&e));
    POW10[(e + POW10_OFFSET) as usize]
}

/// Returns `m` / 10^`shift`. Shifts beyond the table are applied in two steps,
/// which only happens for subnormal `m`.
pub(crate) fn unscale(m: f64, shift: i32) -> f64 {
    if shift >= 0 {
        m / pow10_exact(shift.min(POW10_OFFSET))
    } else if shift >= -POW10_OFFSET {
        m * pow10_exact(-shift)
    } else {
        m * pow10_exact(POW10_OFFSET) * pow10_exact(-shift - POW10_OFFSET)
    }
}
