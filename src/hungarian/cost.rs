//!
//! CostLike trait for generics of matrix entries
//!
//! signed integers and f64 implements CostLike
//!

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

///
/// generic Cost
///
/// Zeros of the reduced matrix are detected by exact comparison,
/// so the entries should be integers or pre-scaled fixed-point values.
///
pub trait CostLike:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Sum
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// cast to f64
    fn to_f64(self) -> f64;
    /// false for NaN and infinities
    fn is_finite(self) -> bool {
        true
    }
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
    /// `self + rhs`, or None on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;
    /// `self - rhs`, or None on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    /// `-self`, or None on overflow
    fn checked_neg(self) -> Option<Self>;
}

macro_rules! impl_cost_like_for_int {
    ($($t:ty),*) => {
        $(
            impl CostLike for $t {
                fn zero() -> Self {
                    0
                }
                fn to_f64(self) -> f64 {
                    self as f64
                }
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }
                fn checked_neg(self) -> Option<Self> {
                    <$t>::checked_neg(self)
                }
            }
        )*
    };
}

impl_cost_like_for_int!(i32, i64, i128, isize);

impl CostLike for f64 {
    fn zero() -> Self {
        0.0
    }
    fn to_f64(self) -> f64 {
        self
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    // f64 overflows into infinity instead of wrapping
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs).filter(|x| x.is_finite())
    }
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs).filter(|x| x.is_finite())
    }
    fn checked_neg(self) -> Option<Self> {
        Some(-self)
    }
}

///
/// Minimum of the values, or None if empty.
///
/// The first of equal minimums is kept.
///
pub fn min_of<C: CostLike, I: IntoIterator<Item = C>>(values: I) -> Option<C> {
    values.into_iter().fold(None, |min, x| match min {
        Some(m) if m <= x => Some(m),
        _ => Some(x),
    })
}
