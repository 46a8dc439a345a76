//! Borrowed, read-only views into matrix-like values.
//!
//! A view derives its shape and element access from the value it borrows, so creating one never
//! copies elements. Views implement [`MatrixRef`] themselves, which means they can be passed to
//! every algorithm and can be nested (a view of a view chains the index transformations). The
//! borrow checker guarantees that the viewed value outlives all of its views.
//!
//! All views validate their parameters when they are created, so element access on a view can
//! only fail when the requested element is outside of the view itself.

use std::{fmt, ops::Index};

use crate::{check, family::Dynamic, Axis, MatrixRef, Result, Shape};

mod minor;

pub use minor::MinorView;

/// A view of a rectangular block of another matrix.
///
/// ```
/// # use linmat::*;
/// let m = matrix![[1, 3, 4], [-1, 3, 4], [3, 6, 7]];
/// let view = m.view(0, 0, 2, 2)?;
/// assert_eq!(view.to_matrix(), matrix![[1, 3], [-1, 3]]);
/// assert!(m.view(2, 2, 2, 2).is_err());
/// # Ok::<_, MatrixError>(())
/// ```
pub struct MatrixView<'a, M> {
    source: &'a M,
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
}

impl<'a, M: MatrixRef> MatrixView<'a, M> {
    /// Creates a view of the `rows`x`cols` block of `source` whose top left element is
    /// (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::BlockOutOfRange`][crate::MatrixError::BlockOutOfRange] if the block
    /// does not lie entirely within `source`.
    pub fn new(source: &'a M, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self> {
        check::block(source.shape(), row, col, Shape::new(rows, cols))?;
        Ok(Self {
            source,
            row,
            col,
            rows,
            cols,
        })
    }

    /// Returns the viewed value.
    pub fn source(&self) -> &'a M {
        self.source
    }

    /// Returns the position of this view's top left element in the viewed value.
    pub fn offset(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl<'a, M: MatrixRef> MatrixRef for MatrixView<'a, M> {
    type Elem = M::Elem;
    type Family = Dynamic;

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Option<&M::Elem> {
        check::element(self.shape(), row, col).ok()?;
        self.source.get(self.row + row, self.col + col)
    }
}

/// A view of a single row of another matrix, shaped as a 1xN matrix.
///
/// Besides the 2D [`MatrixRef`] interface, row views can be indexed with a single column index and
/// iterated over.
///
/// ```
/// # use linmat::*;
/// let m = matrix![[1, 2, 3], [4, 5, 6]];
/// let row = m.row_view(1)?;
/// assert_eq!(row[2], 6);
/// assert_eq!(row.iter().copied().collect::<Vec<_>>(), [4, 5, 6]);
/// # Ok::<_, MatrixError>(())
/// ```
pub struct RowView<'a, M> {
    source: &'a M,
    row: usize,
}

impl<'a, M: MatrixRef> RowView<'a, M> {
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`][crate::MatrixError::IndexOutOfRange] if `row` is
    /// not a row of `source`.
    pub fn new(source: &'a M, row: usize) -> Result<Self> {
        check::index(Axis::Row, row, source.shape())?;
        Ok(Self { source, row })
    }

    /// Returns the index of the viewed row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the number of elements in the row.
    pub fn len(&self) -> usize {
        self.source.cols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a M::Elem> + 'a {
        let (source, row) = (self.source, self.row);
        (0..source.cols()).map(move |col| source.entry(row, col))
    }
}

impl<'a, M: MatrixRef> MatrixRef for RowView<'a, M> {
    type Elem = M::Elem;
    type Family = Dynamic;

    #[inline]
    fn rows(&self) -> usize {
        1
    }

    #[inline]
    fn cols(&self) -> usize {
        self.source.cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Option<&M::Elem> {
        if row != 0 {
            return None;
        }
        self.source.get(self.row, col)
    }
}

impl<'a, M: MatrixRef> Index<usize> for RowView<'a, M> {
    type Output = M::Elem;

    #[track_caller]
    fn index(&self, col: usize) -> &M::Elem {
        self.entry(0, col)
    }
}

/// A view of a single column of another matrix, shaped as an Nx1 matrix.
///
/// Like [`RowView`], column views can be indexed with a single (row) index and iterated over.
pub struct ColView<'a, M> {
    source: &'a M,
    col: usize,
}

impl<'a, M: MatrixRef> ColView<'a, M> {
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`][crate::MatrixError::IndexOutOfRange] if `col` is
    /// not a column of `source`.
    pub fn new(source: &'a M, col: usize) -> Result<Self> {
        check::index(Axis::Col, col, source.shape())?;
        Ok(Self { source, col })
    }

    /// Returns the index of the viewed column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the number of elements in the column.
    pub fn len(&self) -> usize {
        self.source.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a M::Elem> + 'a {
        let (source, col) = (self.source, self.col);
        (0..source.rows()).map(move |row| source.entry(row, col))
    }
}

impl<'a, M: MatrixRef> MatrixRef for ColView<'a, M> {
    type Elem = M::Elem;
    type Family = Dynamic;

    #[inline]
    fn rows(&self) -> usize {
        self.source.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Option<&M::Elem> {
        if col != 0 {
            return None;
        }
        self.source.get(row, self.col)
    }
}

impl<'a, M: MatrixRef> Index<usize> for ColView<'a, M> {
    type Output = M::Elem;

    #[track_caller]
    fn index(&self, row: usize) -> &M::Elem {
        self.entry(row, 0)
    }
}

/// Implements the traits every view shares. Views only hold a reference, so they are `Copy`
/// regardless of whether the viewed type is.
macro_rules! view_impls {
    ($($view:ident),+) => {
        $(
            impl<'a, M> Clone for $view<'a, M> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<'a, M> Copy for $view<'a, M> {}

            impl<'a, M: MatrixRef> Index<(usize, usize)> for $view<'a, M> {
                type Output = M::Elem;

                #[track_caller]
                fn index(&self, (row, col): (usize, usize)) -> &M::Elem {
                    self.entry(row, col)
                }
            }

            impl<'a, M> fmt::Debug for $view<'a, M>
            where
                M: MatrixRef,
                M::Elem: fmt::Debug,
            {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    crate::format::debug(self, f)
                }
            }

            impl<'a, M> fmt::Display for $view<'a, M>
            where
                M: MatrixRef,
                M::Elem: fmt::Display,
            {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    crate::format::display(self, f)
                }
            }
        )+
    };
}
view_impls!(MatrixView, RowView, ColView, MinorView);
