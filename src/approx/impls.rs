use super::ApproxEq;
use crate::{ColView, FixedMatrix, Matrix, MatrixRef, MatrixView, MinorView, RowView};

macro_rules! float_impls {
    ($($float:ty => $bits:ty),+) => {
        $(
            impl ApproxEq for $float {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
                        return self == other;
                    }

                    (self - other).abs() <= tolerance
                }

                fn rel_diff_eq(&self, other: &Self, tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }

                    let largest = self.abs().max(other.abs());
                    (self - other).abs() <= largest * tolerance
                }

                fn ulps_diff_eq(&self, other: &Self, max_ulps: u32) -> bool {
                    if self.is_sign_negative() != other.is_sign_negative() {
                        return self == other; // `-0.0` == `+0.0`
                    }

                    if self.is_nan() || other.is_nan() {
                        return false;
                    }

                    let diff: $bits = self.to_bits().abs_diff(other.to_bits());
                    diff <= <$bits>::from(max_ulps)
                }
            }
        )+
    };
}
float_impls!(f32 => u32, f64 => u64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, tolerance)
    }

    fn rel_diff_eq(&self, other: &U, tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, tolerance)
    }

    fn ulps_diff_eq(&self, other: &U, max_ulps: u32) -> bool {
        T::ulps_diff_eq(self, other, max_ulps)
    }
}

/// Compares two matrix-like values element by element with `eq`. Differently shaped values are
/// never equal.
pub(crate) fn all_elements<L, R, F>(lhs: &L, rhs: &R, mut eq: F) -> bool
where
    L: MatrixRef,
    R: MatrixRef,
    F: FnMut(&L::Elem, &R::Elem) -> bool,
{
    if lhs.shape() != rhs.shape() {
        return false;
    }
    itertools::iproduct!(0..lhs.rows(), 0..lhs.cols())
        .all(|(row, col)| eq(lhs.entry(row, col), rhs.entry(row, col)))
}

/// Implements [`ApproxEq`] against any [`MatrixRef`] with comparable elements.
macro_rules! matrix_impls {
    ($( impl[$($generics:tt)*] for $ty:ty; )+) => {
        $(
            impl<$($generics)*, Rhs> ApproxEq<Rhs> for $ty
            where
                Rhs: MatrixRef,
                Self: MatrixRef,
                <Self as MatrixRef>::Elem: ApproxEq<Rhs::Elem>,
            {
                type Tolerance = <<Self as MatrixRef>::Elem as ApproxEq<Rhs::Elem>>::Tolerance;

                fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool {
                    all_elements(self, other, |a, b| {
                        <<Self as MatrixRef>::Elem as ApproxEq<Rhs::Elem>>::abs_diff_eq(a, b, tolerance)
                    })
                }

                fn rel_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool {
                    all_elements(self, other, |a, b| {
                        <<Self as MatrixRef>::Elem as ApproxEq<Rhs::Elem>>::rel_diff_eq(a, b, tolerance)
                    })
                }

                fn ulps_diff_eq(&self, other: &Rhs, max_ulps: u32) -> bool {
                    all_elements(self, other, |a, b| {
                        <<Self as MatrixRef>::Elem as ApproxEq<Rhs::Elem>>::ulps_diff_eq(a, b, max_ulps)
                    })
                }
            }
        )+
    };
}

matrix_impls! {
    impl[T] for Matrix<T>;
    impl[T, const R: usize, const C: usize] for FixedMatrix<T, R, C>;
    impl['a, M] for MatrixView<'a, M>;
    impl['a, M] for RowView<'a, M>;
    impl['a, M] for ColView<'a, M>;
    impl['a, M] for MinorView<'a, M>;
}
