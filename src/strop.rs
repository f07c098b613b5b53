//! String operations: formatting and parsing.

use crate::common::util::fit_digits;
use crate::common::util::floor_mantissa;
use crate::common::util::group_digits;
use crate::common::util::mantissa_digits;
use crate::ctx::with_precision;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::SERIALIZE_PRECISION;
use crate::num::Magnitude;
use crate::parser::parse;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Write;
use core::str::FromStr;

impl Magnitude {
    /// Parses a number from a string.
    /// Accepted forms are plain decimal numbers (`"-1.5"`), numbers with an exponent (`"1.23e100"`),
    /// and `inf`, `nan` with an optional sign.
    /// The exponent part is lenient: if it is not a number, it is treated as 0.
    ///
    /// ## Errors
    ///
    ///  - InvalidNumber: the mantissa part of the string is not a number.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = parse(s);

        if !ps.is_valid() {
            return Err(Error::InvalidNumber);
        }

        let (m, e) = ps.mantissa_exponent().ok_or(Error::InvalidNumber)?;

        Ok(Self::normalized(m, e))
    }

    /// Formats the number according to the context `ctx`.
    ///
    /// Numbers with fewer integer digits than the context's maximum number of digits are rendered
    /// as integers, e.g. `"110"`. Other numbers are rendered in scientific notation
    /// with the mantissa rounded toward negative infinity, e.g. `"1.23e100"`.
    pub fn format(&self, ctx: &Context) -> String {
        if let Some(s) = self.format_special() {
            return s.to_owned();
        }

        if let Some(digits) = self.compact_digits(ctx) {
            return self.signed(digits);
        }

        let mut ret = floor_mantissa(self.mantissa(), ctx.get_precision());
        if self.exponent() != 0 {
            let _ = write!(ret, "e{}", self.exponent());
        }

        ret
    }

    /// Formats the number with `precision` fractional digits of the mantissa in scientific notation.
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        self.format(&with_precision(precision))
    }

    /// Formats the number for storage. The result parses back to the same number for integers
    /// rendered without scientific notation, and keeps 9 fractional digits otherwise.
    pub fn serialize(&self) -> String {
        self.to_string_with_precision(SERIALIZE_PRECISION)
    }

    /// Formats the number like `format`, separating groups of three integer digits
    /// with the context's separator, e.g. `"123,456,789"`.
    /// Scientific notation is not affected.
    pub fn to_pretty_string(&self, ctx: &Context) -> String {
        match self.compact_digits(ctx) {
            Some(digits) if self.is_finite() => {
                self.signed(group_digits(&digits, ctx.get_separator()))
            }
            _ => self.format(ctx),
        }
    }

    fn format_special(&self) -> Option<&'static str> {
        if self.is_nan() {
            Some("nan")
        } else if self.is_inf() {
            Some(if self.is_negative() { "-inf" } else { "inf" })
        } else {
            None
        }
    }

    /// Integer digits of `|self|` if they fit in the digit budget of `ctx`.
    fn compact_digits(&self, ctx: &Context) -> Option<String> {
        let e = self.exponent();
        if e < ctx.digit_budget() as u64 - 1 {
            Some(fit_digits(&mantissa_digits(self.mantissa()), e as usize + 1))
        } else {
            None
        }
    }

    fn signed(&self, digits: String) -> String {
        if self.is_negative() {
            let mut ret = String::with_capacity(digits.len() + 1);
            ret.push('-');
            ret.push_str(&digits);
            ret
        } else {
            digits
        }
    }
}

impl Display for Magnitude {
    /// Formats the number with the default context.
    /// Precision of the formatter, e.g. `{:.4}`, overrides the context precision.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut ctx = Context::default();
        if let Some(p) = f.precision() {
            ctx.precision(p);
        }
        f.write_str(&self.format(&ctx))
    }
}

impl FromStr for Magnitude {
    type Err = Error;

    /// Returns parsed number or an error if the string is not a number.
    fn from_str(src: &str) -> Result<Magnitude, Self::Err> {
        Magnitude::parse(src)
    }
}
