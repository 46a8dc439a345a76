//! Operator overloads.
//!
//! All operators are thin wrappers around the functions in [`algo`]. The fallible ones panic with
//! the [`MatrixError`][crate::MatrixError] message when the operand shapes don't fit; use the
//! functions in [`algo`] directly to handle that case.
//!
//! `*` between two matrices is the matrix product ([`algo::dot`]). `*` between a matrix and a
//! scalar scales every element. Scalars must have the same type as the matrix elements.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::{
    algo,
    error::expect_ok,
    family::{Combine, DifferenceResult, DotResult, MapResult, NegResult, Product, SumResult},
    ColView, FixedMatrix, Matrix, MatrixRef, MatrixView, MinorView, RowView, Zero,
};

/// Implements `+`, `-` and `*` (matrix product) for a list of operand type pairs.
macro_rules! binary_ops {
    ($( impl[$($generics:tt)*] $lhs:ty, $rhs:ty; )+) => {
        $(
            impl<$($generics)*> Add<$rhs> for $lhs
            where
                $lhs: MatrixRef,
                $rhs: MatrixRef,
                <$lhs as MatrixRef>::Family: Combine<<$rhs as MatrixRef>::Family>,
                <$lhs as MatrixRef>::Elem: Add<<$rhs as MatrixRef>::Elem> + Clone,
                <$rhs as MatrixRef>::Elem: Clone,
            {
                type Output = SumResult<$lhs, $rhs>;

                #[track_caller]
                fn add(self, rhs: $rhs) -> Self::Output {
                    expect_ok(algo::add(&self, &rhs))
                }
            }

            impl<$($generics)*> Sub<$rhs> for $lhs
            where
                $lhs: MatrixRef,
                $rhs: MatrixRef,
                <$lhs as MatrixRef>::Family: Combine<<$rhs as MatrixRef>::Family>,
                <$lhs as MatrixRef>::Elem: Sub<<$rhs as MatrixRef>::Elem> + Clone,
                <$rhs as MatrixRef>::Elem: Clone,
            {
                type Output = DifferenceResult<$lhs, $rhs>;

                #[track_caller]
                fn sub(self, rhs: $rhs) -> Self::Output {
                    expect_ok(algo::sub(&self, &rhs))
                }
            }

            impl<$($generics)*> Mul<$rhs> for $lhs
            where
                $lhs: MatrixRef,
                $rhs: MatrixRef,
                <$lhs as MatrixRef>::Family: Product<<$rhs as MatrixRef>::Family>,
                <$lhs as MatrixRef>::Elem: Mul<<$rhs as MatrixRef>::Elem> + Clone,
                <$rhs as MatrixRef>::Elem: Clone,
                <<$lhs as MatrixRef>::Elem as Mul<<$rhs as MatrixRef>::Elem>>::Output: Zero
                    + Add<Output = <<$lhs as MatrixRef>::Elem as Mul<<$rhs as MatrixRef>::Elem>>::Output>,
            {
                type Output = DotResult<$lhs, $rhs>;

                #[track_caller]
                fn mul(self, rhs: $rhs) -> Self::Output {
                    expect_ok(algo::dot(&self, &rhs))
                }
            }
        )+
    };
}

binary_ops! {
    impl['l, 'r, T, Rhs] &'l Matrix<T>, &'r Rhs;
    impl['l, T, U] &'l Matrix<T>, Matrix<U>;
    impl['l, T, U, const R: usize, const C: usize] &'l Matrix<T>, FixedMatrix<U, R, C>;
    impl['r, T, Rhs] Matrix<T>, &'r Rhs;
    impl[T, U] Matrix<T>, Matrix<U>;
    impl[T, U, const R: usize, const C: usize] Matrix<T>, FixedMatrix<U, R, C>;

    impl['l, 'r, T, const R: usize, const C: usize, Rhs] &'l FixedMatrix<T, R, C>, &'r Rhs;
    impl['l, T, U, const R: usize, const C: usize] &'l FixedMatrix<T, R, C>, Matrix<U>;
    impl['l, T, U, const R: usize, const C: usize, const R2: usize, const C2: usize]
        &'l FixedMatrix<T, R, C>, FixedMatrix<U, R2, C2>;
    impl['r, T, const R: usize, const C: usize, Rhs] FixedMatrix<T, R, C>, &'r Rhs;
    impl[T, U, const R: usize, const C: usize] FixedMatrix<T, R, C>, Matrix<U>;
    impl[T, U, const R: usize, const C: usize, const R2: usize, const C2: usize]
        FixedMatrix<T, R, C>, FixedMatrix<U, R2, C2>;

    impl['l, 'r, 'a, M, Rhs] &'l MatrixView<'a, M>, &'r Rhs;
    impl['r, 'a, M, Rhs] MatrixView<'a, M>, &'r Rhs;
    impl['l, 'r, 'a, M, Rhs] &'l RowView<'a, M>, &'r Rhs;
    impl['r, 'a, M, Rhs] RowView<'a, M>, &'r Rhs;
    impl['l, 'r, 'a, M, Rhs] &'l ColView<'a, M>, &'r Rhs;
    impl['r, 'a, M, Rhs] ColView<'a, M>, &'r Rhs;
    impl['l, 'r, 'a, M, Rhs] &'l MinorView<'a, M>, &'r Rhs;
    impl['r, 'a, M, Rhs] MinorView<'a, M>, &'r Rhs;
}

macro_rules! neg_ops {
    ($( impl[$($generics:tt)*] $ty:ty; )+) => {
        $(
            impl<$($generics)*> Neg for $ty
            where
                $ty: MatrixRef,
                <$ty as MatrixRef>::Elem: Neg + Clone,
            {
                type Output = NegResult<$ty>;

                fn neg(self) -> Self::Output {
                    algo::neg(&self)
                }
            }
        )+
    };
}

neg_ops! {
    impl['l, T] &'l Matrix<T>;
    impl[T] Matrix<T>;
    impl['l, T, const R: usize, const C: usize] &'l FixedMatrix<T, R, C>;
    impl[T, const R: usize, const C: usize] FixedMatrix<T, R, C>;
    impl['l, 'a, M] &'l MatrixView<'a, M>;
    impl['a, M] MatrixView<'a, M>;
    impl['l, 'a, M] &'l RowView<'a, M>;
    impl['a, M] RowView<'a, M>;
    impl['l, 'a, M] &'l ColView<'a, M>;
    impl['a, M] ColView<'a, M>;
    impl['l, 'a, M] &'l MinorView<'a, M>;
    impl['a, M] MinorView<'a, M>;
}

/// Implements `+=` and `-=` for owned matrices.
macro_rules! assign_ops {
    ($( impl[$($generics:tt)*] $lhs:ty, $rhs:ty; )+) => {
        $(
            impl<$($generics)*> AddAssign<$rhs> for $lhs
            where
                $rhs: MatrixRef,
                <$lhs as MatrixRef>::Elem: AddAssign<<$rhs as MatrixRef>::Elem>,
                <$rhs as MatrixRef>::Elem: Clone,
            {
                #[track_caller]
                fn add_assign(&mut self, rhs: $rhs) {
                    expect_ok(algo::add_assign(self, &rhs));
                }
            }

            impl<$($generics)*> SubAssign<$rhs> for $lhs
            where
                $rhs: MatrixRef,
                <$lhs as MatrixRef>::Elem: SubAssign<<$rhs as MatrixRef>::Elem>,
                <$rhs as MatrixRef>::Elem: Clone,
            {
                #[track_caller]
                fn sub_assign(&mut self, rhs: $rhs) {
                    expect_ok(algo::sub_assign(self, &rhs));
                }
            }
        )+
    };
}

assign_ops! {
    impl['r, T, Rhs] Matrix<T>, &'r Rhs;
    impl[T, U] Matrix<T>, Matrix<U>;
    impl[T, U, const R: usize, const C: usize] Matrix<T>, FixedMatrix<U, R, C>;
    impl['r, T, const R: usize, const C: usize, Rhs] FixedMatrix<T, R, C>, &'r Rhs;
    impl[T, U, const R: usize, const C: usize] FixedMatrix<T, R, C>, Matrix<U>;
    impl[T, U, const R: usize, const C: usize, const R2: usize, const C2: usize]
        FixedMatrix<T, R, C>, FixedMatrix<U, R2, C2>;
}

// A generic `Mul<T>` would overlap with the matrix-matrix impls above, so scalar operators are
// implemented per element type.
macro_rules! scalar_ops {
    (@impl $scalar:ty; $( impl[$($generics:tt)*] $ty:ty; )+) => {
        $(
            scalar_ops!(@op $scalar; [$($generics)*] $ty; Add add add_scalar);
            scalar_ops!(@op $scalar; [$($generics)*] $ty; Sub sub sub_scalar);
            scalar_ops!(@op $scalar; [$($generics)*] $ty; Mul mul mul_scalar);
            scalar_ops!(@op $scalar; [$($generics)*] $ty; Div div div_scalar);
        )+
    };
    (@op $scalar:ty; [$($generics:tt)*] $ty:ty; $tr:ident $method:ident $algo:ident) => {
        impl<$($generics)*> $tr<$scalar> for $ty
        where
            $ty: MatrixRef<Elem = $scalar>,
        {
            type Output = MapResult<$ty, $scalar>;

            fn $method(self, rhs: $scalar) -> Self::Output {
                algo::$algo(&self, rhs)
            }
        }
    };
    ($($scalar:ty),+) => {
        $(
            scalar_ops! {
                @impl $scalar;
                impl['l] &'l Matrix<$scalar>;
                impl[] Matrix<$scalar>;
                impl['l, const R: usize, const C: usize] &'l FixedMatrix<$scalar, R, C>;
                impl[const R: usize, const C: usize] FixedMatrix<$scalar, R, C>;
                impl['l, 'a, M] &'l MatrixView<'a, M>;
                impl['a, M] MatrixView<'a, M>;
                impl['l, 'a, M] &'l RowView<'a, M>;
                impl['a, M] RowView<'a, M>;
                impl['l, 'a, M] &'l ColView<'a, M>;
                impl['a, M] ColView<'a, M>;
                impl['l, 'a, M] &'l MinorView<'a, M>;
                impl['a, M] MinorView<'a, M>;
            }
        )+
    };
}

scalar_ops!(f32, f64, i32, i64);
