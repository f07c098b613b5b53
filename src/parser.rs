//! Parser parses numbers represented in plain decimal or scientific format.

use crate::defs::Sign;
use crate::defs::EXPONENT_MAX;
use core::str::Chars;

/// Exponent text stops accumulating past this value. Anything larger saturates during normalization.
const EXPONENT_TEXT_LIMIT: i128 = EXPONENT_MAX as i128 * 10;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: String,
    e: i128,
    inf: bool,
    nan: bool,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: String::new(),
            e: 0,
            inf: false,
            nan: false,
            valid: false,
        }
    }

    /// Returns next character of a string in lower case,
    /// or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[cfg(test)]
    pub fn is_inf(&self) -> bool {
        self.inf
    }

    #[cfg(test)]
    pub fn is_nan(&self) -> bool {
        self.nan
    }

    #[cfg(test)]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns significant digits, sign, and the exponent of the first significant digit.
    /// Empty digits mean zero.
    #[cfg(test)]
    pub fn raw_parts(&self) -> (&str, Sign, i128) {
        (&self.digits, self.sign, self.e)
    }

    /// Returns the mantissa in the range [1, 10) with the sign applied, and the exponent.
    /// The value is zero if there are no significant digits.
    pub fn mantissa_exponent(&self) -> Option<(f64, i128)> {
        if self.nan {
            return Some((f64::NAN, 0));
        }

        let s = self.sign.to_int() as f64;

        if self.inf {
            return Some((s * f64::INFINITY, 0));
        }

        if self.digits.is_empty() {
            return Some((0.0, 0));
        }

        let (first, rest) = self.digits.split_at(1);
        let m: f64 = format!("{}.{}", first, rest).parse().ok()?;

        Some((s * m, self.e))
    }
}

/// Parse a number.
pub fn parse(s: &str) -> ParserState {
    let mut parser_state = ParserState::new(s.trim());
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.sign = Sign::Neg;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    if let Some(c) = ch {
        match c {
            'i' => parse_inf(&mut parser_state),
            'n' => parse_nan(&mut parser_state),
            '.' | '0'..='9' => parse_num(&mut parser_state),
            _ => {}
        };
    }

    // trailing characters after the mantissa
    if parser_state.cur_char().is_some() {
        parser_state.valid = false;
    }

    parser_state
}

fn parse_word(parser_state: &mut ParserState, word: &str) -> bool {
    word.chars().all(|c| parser_state.next_char() == Some(c))
}

fn parse_inf(parser_state: &mut ParserState) {
    if parse_word(parser_state, "nf") {
        parser_state.next_char();
        if Some('i') == parser_state.cur_char() {
            if !parse_word(parser_state, "nity") {
                return;
            }
            parser_state.next_char();
        }
        parser_state.inf = true;
        parser_state.valid = true;
    }
}

fn parse_nan(parser_state: &mut ParserState) {
    if parse_word(parser_state, "an") {
        parser_state.next_char();
        parser_state.nan = true;
        parser_state.valid = true;
    }
}

fn parse_num(parser_state: &mut ParserState) {
    let (int_len, skip_cnt1) = parse_digits(parser_state, true);

    let mut frac_skip = 0;
    let mut frac_len = 0;
    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        // leading zeroes of the fractional part are significant only after a nonzero integer part
        let (len, skip) = parse_digits(parser_state, int_len == 0);
        frac_len = len;
        frac_skip = skip;
    }

    if int_len == 0 && frac_len == 0 && skip_cnt1 == 0 && frac_skip == 0 {
        return;
    }

    parser_state.valid = true;

    if Some('e') == parser_state.cur_char() {
        parser_state.next_char();
        parse_exp(parser_state);
    }

    if parser_state.digits.is_empty() {
        // just zeroes
        parser_state.e = 0;
    } else if int_len > 0 {
        parser_state.e += int_len as i128 - 1;
    } else {
        parser_state.e -= frac_skip as i128 + 1;
    }
}

/// Collects digits. Returns the number of significant digits collected and the number of skipped leading zeroes.
fn parse_digits(parser_state: &mut ParserState, skip_zeroes: bool) -> (usize, usize) {
    let mut ch = parser_state.cur_char();
    let mut len = 0;
    let mut skip_cnt = 0;

    if skip_zeroes {
        while Some('0') == ch {
            skip_cnt += 1;
            ch = parser_state.next_char();
        }
    }

    while let Some(c) = ch {
        if c.is_ascii_digit() {
            parser_state.digits.push(c);
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    (len, skip_cnt)
}

/// Parses the exponent text. Text that is not a number gives 0.
/// Characters following the leading digits are ignored.
fn parse_exp(parser_state: &mut ParserState) {
    let mut neg = false;
    let mut ch = parser_state.cur_char();
    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }

    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            if parser_state.e < EXPONENT_TEXT_LIMIT {
                parser_state.e = parser_state.e * 10 + d as i128;
            }
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    if neg {
        parser_state.e = -parser_state.e;
    }

    // skip the rest of the exponent text
    while parser_state.next_char().is_some() {}
}
