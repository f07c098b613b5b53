//! Auxiliary functions operating on decimal digit strings.

use itertools::Itertools;

/// Returns the significant decimal digits of `|m|` without the decimal point.
/// The digits are the shortest representation which parses back to `m`.
pub fn mantissa_digits(m: f64) -> String {
    let mut digits = format!("{}", m.abs());
    digits.retain(|c| c != '.');
    digits
}

/// Returns the first `len` digits of `digits`, padded with zeroes when `digits` is shorter.
pub fn fit_digits(digits: &str, len: usize) -> String {
    digits
        .chars()
        .chain(core::iter::repeat('0'))
        .take(len)
        .collect()
}

/// Formats `m` with `precision` fractional digits rounded toward negative infinity.
/// `m` must satisfy |m| < 10.
/// If rounding reaches 10 or -10, the largest string with one integer digit is returned instead,
/// e.g. "9.99" for precision 2.
pub fn floor_mantissa(m: f64, precision: usize) -> String {
    let repr = format!("{}", m.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(core::iter::repeat(b'0')).take(precision))
        .collect();

    let truncated = frac_part.bytes().skip(precision).any(|b| b != b'0');

    if m < 0.0 && truncated {
        // flooring a negative value increases its magnitude
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - precision;

    let mut ret = String::with_capacity(digits.len() + 2);
    if m < 0.0 {
        ret.push('-');
    }

    if int_len > 1 {
        ret.push('9');
        if precision > 0 {
            ret.push('.');
            ret.extend(core::iter::repeat('9').take(precision));
        }
    } else {
        ret.extend(digits[..int_len].iter().map(|&d| d as char));
        if precision > 0 {
            ret.push('.');
            ret.extend(digits[int_len..].iter().map(|&d| d as char));
        }
    }

    ret
}

/// Inserts `separator` between groups of three digits counting from the right.
pub fn group_digits(digits: &str, separator: char) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|group| group.iter().map(|&d| d as char).collect::<String>())
        .join(&separator.to_string())
}
