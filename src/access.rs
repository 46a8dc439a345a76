//! Capability traits shared by owned matrices and views.
//!
//! Algorithms are written against the weakest trait they need:
//!
//! - [`MatrixRef`] allows reading elements and querying the shape.
//! - [`MatrixMut`] additionally allows writing elements in place.
//! - [`ContiguousMatrix`] exposes the underlying row-major storage as a slice.

use crate::{
    check, family::Family, ColView, Matrix, MatrixError, MatrixView, MinorView, Result, RowView,
    Shape,
};

/// A readable, rectangular grid of elements.
///
/// Implemented by [`Matrix`], [`FixedMatrix`][crate::FixedMatrix], and all view types. Indices are
/// 0-based, rows first.
pub trait MatrixRef {
    /// The element type.
    type Elem;

    /// The owned container [`Family`] that results computed from this value are stored in.
    type Family: Family;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Returns a reference to the element at (`row`, `col`), or [`None`] if it is out of range.
    fn get(&self, row: usize, col: usize) -> Option<&Self::Elem>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols())
    }

    #[inline]
    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Returns whether this value has no elements (zero rows or zero columns).
    #[inline]
    fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if (`row`, `col`) lies outside of the matrix.
    fn at(&self, row: usize, col: usize) -> Result<&Self::Elem> {
        let shape = self.shape();
        self.get(row, col)
            .ok_or(MatrixError::OutOfRange { row, col, shape })
    }

    /// Element access that panics when out of range, just like slice indexing does.
    #[track_caller]
    fn entry(&self, row: usize, col: usize) -> &Self::Elem {
        match self.get(row, col) {
            Some(elem) => elem,
            None => panic!(
                "{}",
                MatrixError::OutOfRange {
                    row,
                    col,
                    shape: self.shape()
                }
            ),
        }
    }

    /// Creates a view of the `rows`x`cols` block whose top left element is (`row`, `col`).
    fn view(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<MatrixView<'_, Self>>
    where
        Self: Sized,
    {
        MatrixView::new(self, row, col, rows, cols)
    }

    fn row_view(&self, row: usize) -> Result<RowView<'_, Self>>
    where
        Self: Sized,
    {
        RowView::new(self, row)
    }

    fn col_view(&self, col: usize) -> Result<ColView<'_, Self>>
    where
        Self: Sized,
    {
        ColView::new(self, col)
    }

    /// Creates a view that hides row `row` and column `col`.
    fn minor(&self, row: usize, col: usize) -> Result<MinorView<'_, Self>>
    where
        Self: Sized,
    {
        MinorView::new(self, row, col)
    }

    /// Copies the elements into a new, dynamically sized [`Matrix`].
    fn to_matrix(&self) -> Matrix<Self::Elem>
    where
        Self::Elem: Clone,
    {
        Matrix::from_fn(self.rows(), self.cols(), |row, col| {
            self.entry(row, col).clone()
        })
    }
}

/// A [`MatrixRef`] whose elements can be modified in place.
pub trait MatrixMut: MatrixRef {
    fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Self::Elem>;

    /// Checked mutable element access.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if (`row`, `col`) lies outside of the matrix.
    fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Self::Elem> {
        let shape = self.shape();
        self.get_mut(row, col)
            .ok_or(MatrixError::OutOfRange { row, col, shape })
    }

    #[track_caller]
    fn entry_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem {
        let shape = self.shape();
        match self.get_mut(row, col) {
            Some(elem) => elem,
            None => panic!("{}", MatrixError::OutOfRange { row, col, shape }),
        }
    }

    /// Overwrites the element at (`row`, `col`).
    fn set(&mut self, row: usize, col: usize, value: Self::Elem) -> Result<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }
}

/// A [`MatrixMut`] backed by one contiguous, row-major buffer without padding.
pub trait ContiguousMatrix: MatrixMut {
    fn as_slice(&self) -> &[Self::Elem];

    fn as_mut_slice(&mut self) -> &mut [Self::Elem];

    /// Returns the number of elements (`rows * cols`).
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn as_ptr(&self) -> *const Self::Elem {
        self.as_slice().as_ptr()
    }

    /// Returns the raw bytes of the element buffer.
    fn as_bytes(&self) -> &[u8]
    where
        Self::Elem: bytemuck::Pod,
    {
        bytemuck::cast_slice(self.as_slice())
    }
}

/// Computes the index of (`row`, `col`) in a row-major buffer, or [`None`] if out of range.
#[inline]
pub(crate) fn linear_index(shape: Shape, row: usize, col: usize) -> Option<usize> {
    check::element(shape, row, col).ok()?;
    Some(row * shape.cols + col)
}

impl<'a, M: MatrixRef + ?Sized> MatrixRef for &'a M {
    type Elem = M::Elem;
    type Family = M::Family;

    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Option<&Self::Elem> {
        (**self).get(row, col)
    }
}

impl<'a, M: MatrixRef + ?Sized> MatrixRef for &'a mut M {
    type Elem = M::Elem;
    type Family = M::Family;

    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Option<&Self::Elem> {
        (**self).get(row, col)
    }
}

impl<'a, M: MatrixMut + ?Sized> MatrixMut for &'a mut M {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Self::Elem> {
        (**self).get_mut(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;

    fn sum<M: MatrixRef<Elem = i32>>(m: M) -> i32 {
        let mut total = 0;
        for row in 0..m.rows() {
            for col in 0..m.cols() {
                total += m.entry(row, col);
            }
        }
        total
    }

    #[test]
    fn references_are_matrices() {
        let mut m = matrix![[1, 2], [3, 4]];
        assert_eq!(sum(&m), 10);
        assert_eq!(sum(&mut m), 10);
        assert_eq!(sum(&&m), 10);
    }

    #[test]
    fn checked_access() {
        let mut m = matrix![[1, 2, 3]];
        assert_eq!(m.at(0, 2), Ok(&3));
        assert_eq!(
            m.at(1, 0),
            Err(MatrixError::OutOfRange {
                row: 1,
                col: 0,
                shape: Shape::new(1, 3)
            })
        );
        m.set(0, 1, 7).unwrap();
        assert_eq!(m.as_slice(), &[1, 7, 3]);
        assert!(m.set(0, 3, 7).is_err());
        assert_eq!(m.as_slice(), &[1, 7, 3]);
    }

    #[test]
    #[should_panic(expected = "element (2, 0) is out of range for a 2x2 matrix")]
    fn entry_out_of_range() {
        let m = matrix![[1, 2], [3, 4]];
        m.entry(2, 0);
    }

    #[test]
    fn bytes() {
        let m = matrix![[1u16, 2]];
        assert_eq!(m.len(), 2);
        assert_eq!(m.as_bytes().len(), 4);
        assert_eq!(m.as_ptr(), m.as_slice().as_ptr());
    }
}
