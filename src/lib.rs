//! Astro-magnitude is a library of fixed-size approximate big numbers
//! intended for incremental games and other applications where values grow far beyond the range of `f64`
//! but only a few significant digits matter.
//!
//! A number is stored as a `f64` mantissa and an unsigned decimal exponent: `m * 10^e`.
//! Characteristics:
//!
//! | Name                          | Value                    |
//! |:------------------------------|-------------------------:|
//! | Significant decimal digits    |                  15 - 17 |
//! | Exponent minimum value        |                        0 |
//! | Exponent maximum value        |     18446744073709551615 |
//! | Size                          |                 16 bytes |
//!
//! Numbers with magnitude between 0 and 1 can not be represented and become zero.
//! Numbers exceeding the largest finite value saturate to `MAX` or `MIN`.
//! Infinity and NaN follow the IEEE 754 rules in arithmetic.
//!
//! ## Examples
//!
//! ``` rust
//! use astro_magnitude::{Magnitude, Context};
//!
//! let gold = Magnitude::from(100) + Magnitude::from(10);
//! assert_eq!(gold.to_string(), "110");
//!
//! let mut income: Magnitude = "1.23456789e123456789".parse().unwrap();
//! assert_eq!(income.to_string(), "1.23e123456789");
//! assert_eq!(income.serialize(), "1.234567890e123456789");
//!
//! income *= 10;
//! assert_eq!(income.exponent(), 123456790);
//!
//! let pretty = Magnitude::from(123456789).to_pretty_string(&Context::default());
//! assert_eq!(pretty, "123,456,789");
//!
//! let root = Magnitude::from(27).root(3).unwrap();
//! assert_eq!(root, 3);
//!
//! assert!((Magnitude::from(10) / 0).is_nan());
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::comparison_chain)]

mod common;
mod conv;
mod defs;
mod ext;
mod num;
mod ops;
mod parser;
mod strop;

/// Formatting context.
pub mod ctx;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::Context;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Mantissa;
pub use crate::defs::Sign;
pub use crate::defs::ADD_EXPONENT_GAP;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::MANTISSA_MAX;
pub use crate::num::Magnitude;
pub use crate::num::E;
pub use crate::num::INF;
pub use crate::num::MAX;
pub use crate::num::MIN;
pub use crate::num::NAN;
pub use crate::num::ONE;
pub use crate::num::ZERO;
