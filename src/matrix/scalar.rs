use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul};

/// Element type a [`Matrix`](super::Matrix) can hold.
///
/// `ZERO` is the additive identity: fresh matrices are filled with it and an
/// empty contraction sums to it. `ONE` is only needed for identity matrices.
pub trait Scalar:
    Copy
    + Send
    + Sync
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Whether `hi - lo` is representable. Always true for integers, whose
    /// sampling works on the full range.
    fn span_is_finite(lo: Self, hi: Self) -> bool;
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn span_is_finite(lo: Self, hi: Self) -> bool {
                    (hi - lo).is_finite()
                }
            }
        )*
    };
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn span_is_finite(_lo: Self, _hi: Self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i32, i64, u32, u64);
