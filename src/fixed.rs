use std::{
    array, fmt,
    ops::{Index, IndexMut},
};

use crate::{
    family::Fixed, ContiguousMatrix, MatrixError, MatrixMut, MatrixRef, One, Result, Shape, Zero,
};

/// A 2x2 matrix.
pub type Mat2<T> = FixedMatrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = FixedMatrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = FixedMatrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A row-major matrix with `R` rows and `C` columns stored inline, without any heap allocation.
///
/// [`FixedMatrix`] implements the same capability traits as [`Matrix`][crate::Matrix] and works with
/// every algorithm in this crate. When both operands of an operation are [`FixedMatrix`] values,
/// the shape of the result is checked at compile time and the result is a [`FixedMatrix`] too:
///
/// ```
/// # use linmat::*;
/// let a = FixedMatrix::from_rows([[1, 2, 3]]);
/// let b = FixedMatrix::from_rows([[1], [1], [1]]);
/// let c: FixedMatrix<i32, 1, 1> = &a * &b;
/// assert_eq!(c[(0, 0)], 6);
/// ```
///
/// Mixing it with a dynamically sized operand yields a [`Matrix`][crate::Matrix] instead.
///
/// # Layout
///
/// The elements are stored as `[[T; C]; R]`, so the type has the same size and alignment as that
/// array. [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation
/// when the element type permits it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FixedMatrix<T, const R: usize, const C: usize>([[T; C]; R]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for FixedMatrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod
    for FixedMatrix<T, R, C>
{
}

impl<T, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    /// Creates a matrix from an array of rows.
    #[inline]
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    /// Creates a matrix by invoking `f` with the row and column of every element, in row-major
    /// order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| f(row, col))))
    }

    /// Copies the elements of any matrix-like value of the same shape, converting them with
    /// [`Into`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `m` is not an `R`x`C` matrix.
    pub fn from_matrix<M>(m: &M) -> Result<Self>
    where
        M: MatrixRef,
        M::Elem: Clone + Into<T>,
    {
        if m.shape() != Shape::new(R, C) {
            return Err(MatrixError::DimensionMismatch {
                op: "conversion",
                left: Shape::new(R, C),
                right: m.shape(),
            });
        }
        Ok(Self::from_fn(|row, col| m.entry(row, col).clone().into()))
    }

    /// Returns the array of rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }

    #[inline]
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Returns a row of this matrix, or [`None`] if `row` is out of range.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[T; C]> {
        self.0.get(row)
    }

    /// Swaps two rows in place.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of range.
    #[track_caller]
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

impl<T: Clone, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    /// Copies a row-major buffer holding `R * C` elements.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::BufferLength`] if `data` has the wrong length.
    pub fn from_slice(data: &[T]) -> Result<Self> {
        if data.len() != R * C {
            return Err(MatrixError::BufferLength {
                expected: R * C,
                found: data.len(),
            });
        }
        Ok(Self::from_fn(|row, col| data[row * C + col].clone()))
    }
}

impl<T: Zero, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    /// Returns a matrix with every element set to 0.
    pub fn zero() -> Self {
        Self::from_fn(|_, _| T::ZERO)
    }
}

impl<T: Zero + One, const N: usize> FixedMatrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Zero, const R: usize, const C: usize> Default for FixedMatrix<T, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const R: usize, const C: usize> MatrixRef for FixedMatrix<T, R, C> {
    type Elem = T;
    type Family = Fixed<R, C>;

    #[inline]
    fn rows(&self) -> usize {
        R
    }

    #[inline]
    fn cols(&self) -> usize {
        C
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row)?.get(col)
    }
}

impl<T, const R: usize, const C: usize> MatrixMut for FixedMatrix<T, R, C> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row)?.get_mut(col)
    }
}

impl<T, const R: usize, const C: usize> ContiguousMatrix for FixedMatrix<T, R, C> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for FixedMatrix<T, R, C> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.entry(row, col)
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for FixedMatrix<T, R, C> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.entry_mut(row, col)
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for FixedMatrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::debug(self, f)
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::display(self, f)
    }
}
