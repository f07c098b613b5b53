//! Arithmetic and other operations on the numbers.

mod add;
mod log;
mod mul;
mod pow;
mod root;
