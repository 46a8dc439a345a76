use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use itertools::iproduct;

use crate::{
    approx::{all_elements, ApproxEq, DefaultTolerances},
    check,
    family::{
        Combine, CombinedFamily, DifferenceResult, DotResult, ElementwiseResult, Family, MapResult,
        NegResult, Owned, Product, SumResult, TransposeResult,
    },
    MatrixMut, MatrixRef, Result, Zero,
};

/// Returns the transpose of `m`: element (`i`, `j`) of the result is element (`j`, `i`) of `m`.
///
/// ```
/// # use linmat::*;
/// let m = matrix![[1, 2, 3]];
/// assert_eq!(algo::transpose(&m), matrix![[1], [2], [3]]);
///
/// let fixed: FixedMatrix<i32, 3, 1> = algo::transpose(&FixedMatrix::from_rows([[1, 2, 3]]));
/// assert_eq!(fixed[(2, 0)], 3);
/// ```
pub fn transpose<M>(m: &M) -> TransposeResult<M>
where
    M: MatrixRef,
    M::Elem: Clone,
{
    <<M::Family as Family>::Transposed as Family>::from_fn(m.cols(), m.rows(), |row, col| {
        m.entry(col, row).clone()
    })
}

/// Applies `f` to every element of `m` (in row-major order) and collects the results into a new
/// matrix of the same shape.
pub fn map<M, U, F>(m: &M, mut f: F) -> MapResult<M, U>
where
    M: MatrixRef,
    F: FnMut(&M::Elem) -> U,
{
    <M::Family as Family>::from_fn(m.rows(), m.cols(), |row, col| f(m.entry(row, col)))
}

/// Replaces every element of `m` with the result of calling `f` on it, in row-major order.
///
/// Returns `m` to allow chaining.
pub fn map_in_place<M, F>(m: &mut M, mut f: F) -> &mut M
where
    M: MatrixMut,
    F: FnMut(&M::Elem) -> M::Elem,
{
    for (row, col) in iproduct!(0..m.rows(), 0..m.cols()) {
        let elem = m.entry_mut(row, col);
        *elem = f(elem);
    }
    m
}

/// Sets every element of `m` to `value`.
pub fn fill<M>(m: &mut M, value: M::Elem) -> &mut M
where
    M: MatrixMut,
    M::Elem: Clone,
{
    map_in_place(m, |_| value.clone())
}

/// Computes the matrix product `lhs · rhs`.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`][crate::MatrixError::DimensionMismatch] unless the
/// number of columns of `lhs` equals the number of rows of `rhs`.
///
/// ```
/// # use linmat::*;
/// let a = matrix![[1, 2], [3, 4], [5, 6]];
/// let b = matrix![[1, 0, 2], [0, 1, 3]];
/// assert_eq!(algo::dot(&a, &b)?, matrix![[1, 2, 8], [3, 4, 18], [5, 6, 28]]);
/// assert!(algo::dot(&a, &a).is_err());
/// # Ok::<_, MatrixError>(())
/// ```
pub fn dot<L, R>(lhs: &L, rhs: &R) -> Result<DotResult<L, R>>
where
    L: MatrixRef,
    R: MatrixRef,
    L::Family: Product<R::Family>,
    L::Elem: Mul<R::Elem> + Clone,
    R::Elem: Clone,
    <L::Elem as Mul<R::Elem>>::Output: Zero + Add<Output = <L::Elem as Mul<R::Elem>>::Output>,
{
    check::product(lhs, rhs)?;
    let inner = lhs.cols();
    log::trace!("dot product {} · {}", lhs.shape(), rhs.shape());
    Ok(
        <<L::Family as Product<R::Family>>::Output as Family>::from_fn(
            lhs.rows(),
            rhs.cols(),
            |row, col| {
                (0..inner).fold(
                    <<L::Elem as Mul<R::Elem>>::Output as Zero>::ZERO,
                    |acc, k| acc + lhs.entry(row, k).clone() * rhs.entry(k, col).clone(),
                )
            },
        ),
    )
}

/// Combines the corresponding elements of two equally shaped matrices with `f`.
fn zip_with<L, R, U, F>(lhs: &L, rhs: &R, mut f: F) -> Owned<CombinedFamily<L, R>, U>
where
    L: MatrixRef,
    R: MatrixRef,
    L::Family: Combine<R::Family>,
    L::Elem: Clone,
    R::Elem: Clone,
    F: FnMut(L::Elem, R::Elem) -> U,
{
    debug_assert_eq!(lhs.shape(), rhs.shape());
    <CombinedFamily<L, R> as Family>::from_fn(lhs.rows(), lhs.cols(), |row, col| {
        f(lhs.entry(row, col).clone(), rhs.entry(row, col).clone())
    })
}

/// Computes the element-wise sum of two matrices of the same shape.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`][crate::MatrixError::DimensionMismatch] if the shapes
/// differ.
pub fn add<L, R>(lhs: &L, rhs: &R) -> Result<SumResult<L, R>>
where
    L: MatrixRef,
    R: MatrixRef,
    L::Family: Combine<R::Family>,
    L::Elem: Add<R::Elem> + Clone,
    R::Elem: Clone,
{
    check::same_shape("addition", lhs, rhs)?;
    Ok(zip_with(lhs, rhs, |a, b| a + b))
}

/// Computes the element-wise difference of two matrices of the same shape.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`][crate::MatrixError::DimensionMismatch] if the shapes
/// differ.
pub fn sub<L, R>(lhs: &L, rhs: &R) -> Result<DifferenceResult<L, R>>
where
    L: MatrixRef,
    R: MatrixRef,
    L::Family: Combine<R::Family>,
    L::Elem: Sub<R::Elem> + Clone,
    R::Elem: Clone,
{
    check::same_shape("subtraction", lhs, rhs)?;
    Ok(zip_with(lhs, rhs, |a, b| a - b))
}

/// Multiplies the corresponding elements of two matrices of the same shape (Hadamard product).
///
/// This is *not* the matrix product, see [`dot`] for that.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`][crate::MatrixError::DimensionMismatch] if the shapes
/// differ.
pub fn mul_elementwise<L, R>(lhs: &L, rhs: &R) -> Result<ElementwiseResult<L, R>>
where
    L: MatrixRef,
    R: MatrixRef,
    L::Family: Combine<R::Family>,
    L::Elem: Mul<R::Elem> + Clone,
    R::Elem: Clone,
{
    check::same_shape("element-wise multiplication", lhs, rhs)?;
    Ok(zip_with(lhs, rhs, |a, b| a * b))
}

/// Adds `rhs` to `lhs` in place.
///
/// Returns `lhs` to allow chaining. On error, `lhs` is left untouched.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`][crate::MatrixError::DimensionMismatch] if the shapes
/// differ.
pub fn add_assign<'m, L, R>(lhs: &'m mut L, rhs: &R) -> Result<&'m mut L>
where
    L: MatrixMut,
    R: MatrixRef,
    L::Elem: AddAssign<R::Elem>,
    R::Elem: Clone,
{
    check::same_shape("addition", &*lhs, rhs)?;
    for (row, col) in iproduct!(0..rhs.rows(), 0..rhs.cols()) {
        *lhs.entry_mut(row, col) += rhs.entry(row, col).clone();
    }
    Ok(lhs)
}

/// Subtracts `rhs` from `lhs` in place.
///
/// Returns `lhs` to allow chaining. On error, `lhs` is left untouched.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`][crate::MatrixError::DimensionMismatch] if the shapes
/// differ.
pub fn sub_assign<'m, L, R>(lhs: &'m mut L, rhs: &R) -> Result<&'m mut L>
where
    L: MatrixMut,
    R: MatrixRef,
    L::Elem: SubAssign<R::Elem>,
    R::Elem: Clone,
{
    check::same_shape("subtraction", &*lhs, rhs)?;
    for (row, col) in iproduct!(0..rhs.rows(), 0..rhs.cols()) {
        *lhs.entry_mut(row, col) -= rhs.entry(row, col).clone();
    }
    Ok(lhs)
}

/// Adds `scalar` to every element, returning a new matrix.
pub fn add_scalar<M, S>(m: &M, scalar: S) -> MapResult<M, <M::Elem as Add<S>>::Output>
where
    M: MatrixRef,
    M::Elem: Add<S> + Clone,
    S: Clone,
{
    map(m, |elem| elem.clone() + scalar.clone())
}

/// Subtracts `scalar` from every element, returning a new matrix.
pub fn sub_scalar<M, S>(m: &M, scalar: S) -> MapResult<M, <M::Elem as Sub<S>>::Output>
where
    M: MatrixRef,
    M::Elem: Sub<S> + Clone,
    S: Clone,
{
    map(m, |elem| elem.clone() - scalar.clone())
}

/// Multiplies every element by `scalar`, returning a new matrix.
pub fn mul_scalar<M, S>(m: &M, scalar: S) -> MapResult<M, <M::Elem as Mul<S>>::Output>
where
    M: MatrixRef,
    M::Elem: Mul<S> + Clone,
    S: Clone,
{
    map(m, |elem| elem.clone() * scalar.clone())
}

/// Divides every element by `scalar`, returning a new matrix.
pub fn div_scalar<M, S>(m: &M, scalar: S) -> MapResult<M, <M::Elem as Div<S>>::Output>
where
    M: MatrixRef,
    M::Elem: Div<S> + Clone,
    S: Clone,
{
    map(m, |elem| elem.clone() / scalar.clone())
}

/// Negates every element, returning a new matrix.
pub fn neg<M>(m: &M) -> NegResult<M>
where
    M: MatrixRef,
    M::Elem: Neg + Clone,
{
    map(m, |elem| -elem.clone())
}

/// Returns whether `lhs` and `rhs` have the same shape and all corresponding elements differ by at
/// most [`DEFAULT_ACCURACY`][crate::DEFAULT_ACCURACY].
///
/// ```
/// # use linmat::*;
/// let a = matrix![[0.1 + 0.2, 1.0]];
/// assert!(algo::approx_eq(&a, &matrix![[0.3, 1.0]]));
/// assert!(!algo::approx_eq(&a, &matrix![[0.3], [1.0]]));
/// ```
pub fn approx_eq<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: MatrixRef,
    R: MatrixRef,
    L::Elem: ApproxEq<R::Elem>,
{
    approx_eq_within(
        lhs,
        rhs,
        <<L::Elem as ApproxEq<R::Elem>>::Tolerance as DefaultTolerances>::DEFAULT_ABS_TOLERANCE,
    )
}

/// Like [`approx_eq`], but with a caller-chosen absolute tolerance.
pub fn approx_eq_within<L, R>(
    lhs: &L,
    rhs: &R,
    tolerance: <L::Elem as ApproxEq<R::Elem>>::Tolerance,
) -> bool
where
    L: MatrixRef,
    R: MatrixRef,
    L::Elem: ApproxEq<R::Elem>,
{
    all_elements(lhs, rhs, |a, b| {
        <L::Elem as ApproxEq<R::Elem>>::abs_diff_eq(a, b, tolerance)
    })
}
