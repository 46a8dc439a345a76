//! Result container deduction.
//!
//! Every matrix-like type names a [`Family`]: the kind of owned container that results computed
//! from it are stored in. [`Matrix`] and all views belong to [`Dynamic`], [`FixedMatrix`] belongs to
//! [`Fixed`]. Binary operations pick their output family with [`Combine`] (element-wise operations)
//! or [`Product`] (matrix multiplication):
//!
//! - If either operand is [`Dynamic`], the result is a [`Matrix`].
//! - If both operands are [`Fixed`], the result is a [`FixedMatrix`] of the statically known shape.
//!   Fixed operands with incompatible shapes are rejected at compile time.
//!
//! The element type of a result is always the `Output` of the operator applied to the element
//! types, so adding a `Matrix<i32>` to a `FixedMatrix<i32, 2, 2>` produces a `Matrix<i32>`.

use std::ops::{Add, Mul, Neg, Sub};

use crate::{FixedMatrix, Matrix, MatrixMut, MatrixRef};

/// An owned container kind, parameterized over the element type.
pub trait Family: Sized {
    type Container<T>: MatrixMut<Elem = T, Family = Self>;

    /// The family of the transpose of a container of this family.
    type Transposed: Family;

    /// Builds a container by calling `f` with the row and column of every element, in row-major
    /// order.
    ///
    /// For fixed-size families, `rows` and `cols` must match the static shape.
    fn from_fn<T, F>(rows: usize, cols: usize, f: F) -> Self::Container<T>
    where
        F: FnMut(usize, usize) -> T;
}

/// The family of heap-allocated [`Matrix`] values with a runtime shape.
#[derive(Debug)]
pub enum Dynamic {}

/// The family of [`FixedMatrix`] values with `R` rows and `C` columns.
#[derive(Debug)]
pub enum Fixed<const R: usize, const C: usize> {}

impl Family for Dynamic {
    type Container<T> = Matrix<T>;
    type Transposed = Dynamic;

    #[inline]
    fn from_fn<T, F>(rows: usize, cols: usize, f: F) -> Matrix<T>
    where
        F: FnMut(usize, usize) -> T,
    {
        Matrix::from_fn(rows, cols, f)
    }
}

impl<const R: usize, const C: usize> Family for Fixed<R, C> {
    type Container<T> = FixedMatrix<T, R, C>;
    type Transposed = Fixed<C, R>;

    #[inline]
    fn from_fn<T, F>(rows: usize, cols: usize, f: F) -> FixedMatrix<T, R, C>
    where
        F: FnMut(usize, usize) -> T,
    {
        debug_assert_eq!((rows, cols), (R, C));
        FixedMatrix::from_fn(f)
    }
}

/// Output family of an element-wise operation between `Self` and `Rhs`.
pub trait Combine<Rhs: Family>: Family {
    type Output: Family;
}

impl<F: Family> Combine<F> for Dynamic {
    type Output = Dynamic;
}

impl<const R: usize, const C: usize> Combine<Dynamic> for Fixed<R, C> {
    type Output = Dynamic;
}

impl<const R: usize, const C: usize> Combine<Fixed<R, C>> for Fixed<R, C> {
    type Output = Fixed<R, C>;
}

/// Output family of the matrix product `Self · Rhs`.
pub trait Product<Rhs: Family>: Family {
    type Output: Family;
}

impl<F: Family> Product<F> for Dynamic {
    type Output = Dynamic;
}

impl<const M: usize, const N: usize> Product<Dynamic> for Fixed<M, N> {
    type Output = Dynamic;
}

impl<const M: usize, const N: usize, const P: usize> Product<Fixed<N, P>> for Fixed<M, N> {
    type Output = Fixed<M, P>;
}

/// The owned container of family `F` holding elements of type `T`.
pub type Owned<F, T> = <F as Family>::Container<T>;

/// Result of mapping the elements of `M` to type `T`.
pub type MapResult<M, T> = Owned<<M as MatrixRef>::Family, T>;

/// Result of transposing `M`.
pub type TransposeResult<M> = Owned<
    <<M as MatrixRef>::Family as Family>::Transposed,
    <M as MatrixRef>::Elem,
>;

/// Family of an element-wise combination of `L` and `R`.
pub type CombinedFamily<L, R> =
    <<L as MatrixRef>::Family as Combine<<R as MatrixRef>::Family>>::Output;

/// Result of `L + R`.
pub type SumResult<L, R> = Owned<
    CombinedFamily<L, R>,
    <<L as MatrixRef>::Elem as Add<<R as MatrixRef>::Elem>>::Output,
>;

/// Result of `L - R`.
pub type DifferenceResult<L, R> = Owned<
    CombinedFamily<L, R>,
    <<L as MatrixRef>::Elem as Sub<<R as MatrixRef>::Elem>>::Output,
>;

/// Result of multiplying `L` and `R` element by element.
pub type ElementwiseResult<L, R> = Owned<
    CombinedFamily<L, R>,
    <<L as MatrixRef>::Elem as Mul<<R as MatrixRef>::Elem>>::Output,
>;

/// Result of the matrix product `L · R`.
pub type DotResult<L, R> = Owned<
    <<L as MatrixRef>::Family as Product<<R as MatrixRef>::Family>>::Output,
    <<L as MatrixRef>::Elem as Mul<<R as MatrixRef>::Elem>>::Output,
>;

/// Result of negating `M`.
pub type NegResult<M> = MapResult<M, <<M as MatrixRef>::Elem as Neg>::Output>;

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn deduction() {
        assert!(same::<SumResult<Matrix<i32>, FixedMatrix<i32, 2, 2>>, Matrix<i32>>());
        assert!(same::<SumResult<FixedMatrix<i32, 2, 2>, Matrix<i32>>, Matrix<i32>>());
        assert!(same::<
            SumResult<FixedMatrix<f32, 2, 3>, FixedMatrix<f32, 2, 3>>,
            FixedMatrix<f32, 2, 3>,
        >());
        assert!(same::<
            DotResult<FixedMatrix<f64, 2, 3>, FixedMatrix<f64, 3, 4>>,
            FixedMatrix<f64, 2, 4>,
        >());
        assert!(same::<DotResult<FixedMatrix<f64, 6, 2>, Matrix<f64>>, Matrix<f64>>());
        assert!(same::<TransposeResult<FixedMatrix<u8, 1, 3>>, FixedMatrix<u8, 3, 1>>());
        assert!(same::<MapResult<Matrix<i32>, f64>, Matrix<f64>>());
    }
}
