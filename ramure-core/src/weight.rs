//! Scalar weight abstraction shared by edge weights and node altitudes.
//!
//! Hierarchy construction never does arithmetic on weights beyond the
//! accumulator reductions; what it needs everywhere is a deterministic total
//! order. [`Weight`] provides that order (`Ord` for integers, `total_cmp` for
//! floats) together with NaN detection so invalid inputs are rejected at the
//! API boundary instead of corrupting a sort.

use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{Bounded, Zero};

/// A totally ordered scalar usable as an edge weight or node altitude.
///
/// Implemented for the primitive integer and floating-point types. The
/// `Zero`/`Bounded` bounds supply the neutral elements of the accumulator
/// reductions (`sum`, `min`, `max`).
pub trait Weight: Copy + PartialOrd + Debug + Zero + Bounded + Send + Sync + 'static {
    /// Total order used by every sort and tie-break in the crate.
    ///
    /// For floats this is IEEE 754 `totalOrder`; inputs containing NaN are
    /// rejected before any sort runs, so the float-specific corners of that
    /// order are never observable through the public API.
    fn total_order(&self, other: &Self) -> Ordering;

    /// Returns `true` when the value is a floating-point NaN.
    fn is_nan(&self) -> bool {
        false
    }

    /// Smaller of two weights under [`Self::total_order`].
    fn min_weight(self, other: Self) -> Self {
        if other.total_order(&self) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// Larger of two weights under [`Self::total_order`].
    fn max_weight(self, other: Self) -> Self {
        if other.total_order(&self) == Ordering::Greater {
            other
        } else {
            self
        }
    }
}

macro_rules! impl_integer_weight {
    ($($ty:ty),* $(,)?) => {$(
        impl Weight for $ty {
            fn total_order(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
    )*};
}

macro_rules! impl_float_weight {
    ($($ty:ty),* $(,)?) => {$(
        impl Weight for $ty {
            fn total_order(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }

            fn is_nan(&self) -> bool {
                <$ty>::is_nan(*self)
            }
        }
    )*};
}

impl_integer_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_float_weight!(f32, f64);
