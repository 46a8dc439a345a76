//! Numeric element traits.

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is the element bound of the cofactor algorithms ([`determinant`] and [`adjoint`]), which
/// need to negate and multiply elements but never divide them.
///
/// [`determinant`]: crate::algo::determinant
/// [`adjoint`]: crate::algo::adjoint
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that can compute their absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Floating-point element types.
///
/// Algorithms that divide by pivots or determinants ([`inverse`], [`solve_gauss_jordan`]) need
/// to decide when a value is "zero enough" to be treated as singular; the thresholds live here.
///
/// [`inverse`]: crate::algo::inverse
/// [`solve_gauss_jordan`]: crate::algo::solve_gauss_jordan
pub trait Real: Number + Abs + PartialOrd {
    /// Machine epsilon. Pivots at or below this magnitude are treated as zero.
    const EPSILON: Self;
    /// Determinants at or below this magnitude make a matrix non-invertible.
    const DEFAULT_ACCURACY: Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0 => f32, f64);

macro_rules! abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )+
    };
}
abs!(i8, i16, i32, i64, i128, isize, f32, f64);

impl Real for f32 {
    const EPSILON: Self = f32::EPSILON;
    const DEFAULT_ACCURACY: Self = crate::DEFAULT_ACCURACY as f32;
}
impl Real for f64 {
    const EPSILON: Self = f64::EPSILON;
    const DEFAULT_ACCURACY: Self = crate::DEFAULT_ACCURACY;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude<T: Abs>(value: T) -> T {
        value.abs()
    }

    #[test]
    fn abs_dispatches_to_inherent() {
        assert_eq!(magnitude(-3i32), 3);
        assert_eq!(magnitude(-2.5f64), 2.5);
        assert_eq!(magnitude(0.0f32), 0.0);
    }

    #[test]
    fn accuracy() {
        assert_eq!(<f64 as Real>::DEFAULT_ACCURACY, 1e-6);
        assert!(<f32 as Real>::EPSILON < <f32 as Real>::DEFAULT_ACCURACY);
    }
}
