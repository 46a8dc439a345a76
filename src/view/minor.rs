use crate::{check, family::Dynamic, Axis, MatrixRef, Result};

/// A view that hides one row and one column of another matrix.
///
/// Viewing an `R`x`C` matrix produces an `(R-1)`x`(C-1)` view. Minors are the building block of
/// the cofactor expansion used by [`determinant`][crate::algo::determinant] and
/// [`adjoint`][crate::algo::adjoint], and can be nested to exclude several rows and columns.
///
/// ```
/// # use linmat::*;
/// let m = matrix![[1, 3, 4, 2], [-1, 3, 4, 3], [3, 6, 7, 4]];
/// let minor = m.minor(1, 2)?;
/// assert_eq!(minor.to_matrix(), matrix![[1, 3, 2], [3, 6, 4]]);
/// assert_eq!(minor.minor(0, 0)?.to_matrix(), matrix![[6, 4]]);
/// # Ok::<_, MatrixError>(())
/// ```
pub struct MinorView<'a, M> {
    source: &'a M,
    row: usize,
    col: usize,
}

impl<'a, M: MatrixRef> MinorView<'a, M> {
    /// Creates a view of `source` without row `row` and column `col`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`][crate::MatrixError::IndexOutOfRange] if `row` or
    /// `col` lies outside of `source`.
    pub fn new(source: &'a M, row: usize, col: usize) -> Result<Self> {
        let shape = source.shape();
        check::index(Axis::Row, row, shape)?;
        check::index(Axis::Col, col, shape)?;
        Ok(Self { source, row, col })
    }

    /// Returns the excluded row and column.
    pub fn excluded(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl<'a, M: MatrixRef> MatrixRef for MinorView<'a, M> {
    type Elem = M::Elem;
    type Family = Dynamic;

    #[inline]
    fn rows(&self) -> usize {
        self.source.rows() - 1
    }

    #[inline]
    fn cols(&self) -> usize {
        self.source.cols() - 1
    }

    fn get(&self, row: usize, col: usize) -> Option<&M::Elem> {
        check::element(self.shape(), row, col).ok()?;
        let row = if row < self.row { row } else { row + 1 };
        let col = if col < self.col { col } else { col + 1 };
        self.source.get(row, col)
    }
}

#[cfg(test)]
mod tests {
    use crate::{matrix, Matrix, MatrixError, Shape};

    use super::*;

    fn viewed() -> Matrix<f64> {
        matrix![[1.0, 3.0, 4.0, 2.0], [-1.0, 3.0, 4.0, 3.0], [3.0, 6.0, 7.0, 4.0]]
    }

    #[test]
    fn excludes_row_and_column() {
        let m = viewed();
        let minor = MinorView::new(&m, 0, 0).unwrap();
        assert_eq!(minor.shape(), Shape::new(2, 3));
        assert_eq!(minor.to_matrix(), matrix![[3.0, 4.0, 3.0], [6.0, 7.0, 4.0]]);

        let minor = MinorView::new(&m, 1, 2).unwrap();
        assert_eq!(minor.to_matrix(), matrix![[1.0, 3.0, 2.0], [3.0, 6.0, 4.0]]);
        assert_eq!(minor.excluded(), (1, 2));
        assert_eq!(minor.get(2, 0), None);
        assert_eq!(minor.get(0, 3), None);
    }

    #[test]
    fn out_of_range() {
        let m = viewed();
        assert_eq!(
            MinorView::new(&m, 4, 5).unwrap_err(),
            MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: 4,
                shape: Shape::new(3, 4),
            }
        );
        assert_eq!(
            MinorView::new(&m, 0, 5).unwrap_err(),
            MatrixError::IndexOutOfRange {
                axis: Axis::Col,
                index: 5,
                shape: Shape::new(3, 4),
            }
        );
        assert!(MinorView::new(&m, 6, 0).is_err());
        assert!(MinorView::new(&Matrix::<f64>::default(), 0, 0).is_err());
    }

    #[test]
    fn nested() {
        let m = viewed();
        let first = MinorView::new(&m, 0, 0).unwrap();
        let second = MinorView::new(&first, 0, 0).unwrap();
        assert_eq!(second.to_matrix(), matrix![[7.0, 4.0]]);
        assert!(MinorView::new(&first, 5, 2).is_err());

        #[rustfmt::skip]
        let wide = matrix![
            [1, 3, 4, 2, 6, 42],
            [-1, 3, 4, 3, 8, 42],
            [3, 6, 7, 4, 4, 42],
            [-1, 3, 4, 3, 8, 42],
            [1, 3, 4, 2, 6, 42],
        ];
        let a = wide.minor(0, 0).unwrap();
        let b = a.minor(1, 1).unwrap();
        let c = b.minor(2, 2).unwrap();
        let d = c.minor(0, 0).unwrap();
        assert_eq!(d.to_matrix(), matrix![[3, 42]]);
    }

    #[test]
    fn single_element() {
        let m = matrix![[5]];
        let minor = m.minor(0, 0).unwrap();
        assert!(minor.is_empty());
        assert_eq!(minor.shape(), Shape::new(0, 0));
    }
}
