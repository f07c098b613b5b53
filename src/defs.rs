//! Definitions.

use core::fmt::Display;

/// Mantissa of a number.
pub type Mantissa = f64;

/// An exponent. Exponent is the power of ten applied to the mantissa.
pub type Exponent = u64;

/// Maximum exponent value.
pub const EXPONENT_MAX: Exponent = Exponent::MAX;

/// Largest mantissa value: the double immediately below 10.
pub const MANTISSA_MAX: Mantissa = 9.999_999_999_999_998;

/// When operands of an addition differ in exponent by more than this value,
/// the smaller operand does not contribute to the result.
pub const ADD_EXPONENT_GAP: Exponent = 14;

/// Maximum number of integer digits rendered without scientific notation.
pub const DEFAULT_MAX_DIGITS: usize = 10;

/// Number of fractional digits of the mantissa in scientific notation.
pub const DEFAULT_PRECISION: usize = 2;

/// Number of fractional digits used by serialization.
pub const SERIALIZE_PRECISION: usize = 9;

/// Default thousands separator of pretty printing.
pub const DEFAULT_SEPARATOR: char = ',';

/// Maximum number of decimal digits of an integer returned by `to_number`.
pub const NUMBER_MAX_DIGITS: u64 = 18;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The mantissa part of a string is not a number.
    InvalidNumber,

    /// Zero raised to a negative power.
    NegativePowerOfZero,

    /// Even root of a negative number.
    EvenRootOfNegative,

    /// Root of degree zero.
    ZeroRoot,

    /// Invalid argument.
    InvalidArgument,
}

impl Error {
    /// Returns true if the error is caused by a mathematically undefined operation.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Error::NegativePowerOfZero | Error::EvenRootOfNegative | Error::ZeroRoot
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::InvalidNumber => "failed to parse number",
            Error::NegativePowerOfZero => "cannot raise zero to a negative power",
            Error::EvenRootOfNegative => "even root of a negative number is not defined",
            Error::ZeroRoot => "cannot take the zeroth root",
            Error::InvalidArgument => "invalid argument",
        };
        f.write_str(repr)
    }
}
