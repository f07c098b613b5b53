//! Formatting context.

use crate::defs::DEFAULT_MAX_DIGITS;
use crate::defs::DEFAULT_PRECISION;
use crate::defs::DEFAULT_SEPARATOR;

/// Context contains parameters for rendering numbers as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    max_digits: usize,
    precision: usize,
    separator: char,
}

impl Context {
    /// Create a new context with default parameters.
    pub fn new() -> Self {
        Context {
            max_digits: DEFAULT_MAX_DIGITS,
            precision: DEFAULT_PRECISION,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Sets the maximum number of integer digits rendered without scientific notation.
    pub fn max_digits(&mut self, max_digits: usize) -> &mut Self {
        self.max_digits = max_digits;
        self
    }

    /// Sets the number of fractional digits of the mantissa in scientific notation.
    pub fn precision(&mut self, precision: usize) -> &mut Self {
        self.precision = precision;
        self
    }

    /// Sets the thousands separator used by pretty printing.
    pub fn separator(&mut self, separator: char) -> &mut Self {
        self.separator = separator;
        self
    }

    /// Returns the maximum number of integer digits rendered without scientific notation.
    pub fn get_max_digits(&self) -> usize {
        self.max_digits
    }

    /// Returns the number of fractional digits of the mantissa in scientific notation.
    pub fn get_precision(&self) -> usize {
        self.precision
    }

    /// Returns the thousands separator.
    pub fn get_separator(&self) -> char {
        self.separator
    }

    /// Returns the number of integer digits up to which the compact rendering is used.
    /// The budget is never smaller than the number of digits of the scientific rendering.
    pub(crate) fn digit_budget(&self) -> usize {
        self.max_digits.max(self.precision.saturating_add(1))
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

/// Returns a default context with the precision `p`.
pub fn with_precision(p: usize) -> Context {
    let mut ctx = Context::new();
    ctx.precision(p);
    ctx
}

/// Returns a default context with the maximum number of digits `max_digits`.
pub fn with_max_digits(max_digits: usize) -> Context {
    let mut ctx = Context::new();
    ctx.max_digits(max_digits);
    ctx
}
