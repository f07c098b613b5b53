//! Standard library traits: arithmetic operators, ordering, sum and product.

use crate::num::Magnitude;
use crate::num::ONE;
use crate::num::ZERO;
use core::cmp::Ordering;
use core::iter::Product;
use core::iter::Sum;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Div;
use core::ops::DivAssign;
use core::ops::Mul;
use core::ops::MulAssign;
use core::ops::Neg;
use core::ops::Sub;
use core::ops::SubAssign;

//
// ops traits
//

macro_rules! impl_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident) => {
        impl $op_trait for Magnitude {
            type Output = Self;
            fn $op_fn(self, rhs: Self) -> Self::Output {
                Magnitude::$op_fn(&self, &rhs)
            }
        }

        impl $op_trait<&Magnitude> for Magnitude {
            type Output = Self;
            fn $op_fn(self, rhs: &Magnitude) -> Self::Output {
                Magnitude::$op_fn(&self, rhs)
            }
        }

        impl $op_trait<Magnitude> for &Magnitude {
            type Output = Magnitude;
            fn $op_fn(self, rhs: Magnitude) -> Self::Output {
                Magnitude::$op_fn(self, &rhs)
            }
        }

        impl $op_trait<&Magnitude> for &Magnitude {
            type Output = Magnitude;
            fn $op_fn(self, rhs: &Magnitude) -> Self::Output {
                Magnitude::$op_fn(self, rhs)
            }
        }

        impl $op_trait<i64> for Magnitude {
            type Output = Self;
            fn $op_fn(self, rhs: i64) -> Self::Output {
                Magnitude::$op_fn(&self, &Magnitude::from_i64(rhs))
            }
        }

        impl $op_trait<Magnitude> for i64 {
            type Output = Magnitude;
            fn $op_fn(self, rhs: Magnitude) -> Self::Output {
                Magnitude::$op_fn(&Magnitude::from_i64(self), &rhs)
            }
        }

        impl $assign_trait for Magnitude {
            fn $assign_fn(&mut self, rhs: Self) {
                *self = Magnitude::$op_fn(self, &rhs)
            }
        }

        impl $assign_trait<&Magnitude> for Magnitude {
            fn $assign_fn(&mut self, rhs: &Magnitude) {
                *self = Magnitude::$op_fn(self, rhs)
            }
        }

        impl $assign_trait<i64> for Magnitude {
            fn $assign_fn(&mut self, rhs: i64) {
                *self = Magnitude::$op_fn(self, &Magnitude::from_i64(rhs))
            }
        }
    };
}

impl_op!(Add, add, AddAssign, add_assign);
impl_op!(Sub, sub, SubAssign, sub_assign);
impl_op!(Mul, mul, MulAssign, mul_assign);
impl_op!(Div, div, DivAssign, div_assign);

impl Neg for Magnitude {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Magnitude::neg(&self)
    }
}

impl Neg for &Magnitude {
    type Output = Magnitude;
    fn neg(self) -> Self::Output {
        Magnitude::neg(self)
    }
}

//
// ordering traits
//

fn to_ordering(cmp_result: Option<i8>) -> Option<Ordering> {
    cmp_result.map(|v| v.cmp(&0))
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        matches!(Magnitude::cmp(self, other), Some(0))
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        to_ordering(Magnitude::cmp(self, other))
    }
}

impl PartialEq<i64> for Magnitude {
    fn eq(&self, other: &i64) -> bool {
        matches!(Magnitude::cmp(self, &Magnitude::from_i64(*other)), Some(0))
    }
}

impl PartialOrd<i64> for Magnitude {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        to_ordering(Magnitude::cmp(self, &Magnitude::from_i64(*other)))
    }
}

//
// iterators
//

impl Product for Magnitude {
    fn product<I: Iterator<Item = Magnitude>>(iter: I) -> Self {
        let mut acc = ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl Sum for Magnitude {
    fn sum<I: Iterator<Item = Magnitude>>(iter: I) -> Self {
        let mut acc = ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Product<&'a Magnitude> for Magnitude {
    fn product<I: Iterator<Item = &'a Magnitude>>(iter: I) -> Self {
        let mut acc = ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Sum<&'a Magnitude> for Magnitude {
    fn sum<I: Iterator<Item = &'a Magnitude>>(iter: I) -> Self {
        let mut acc = ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}
