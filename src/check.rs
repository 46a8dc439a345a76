//! Shape validation shared by constructors, views and algorithms.

use crate::{Axis, MatrixError, MatrixRef, Result, Shape};

pub(crate) fn element(shape: Shape, row: usize, col: usize) -> Result<()> {
    if row < shape.rows && col < shape.cols {
        Ok(())
    } else {
        Err(MatrixError::OutOfRange { row, col, shape })
    }
}

pub(crate) fn index(axis: Axis, index: usize, shape: Shape) -> Result<()> {
    let limit = match axis {
        Axis::Row => shape.rows,
        Axis::Col => shape.cols,
    };
    if index < limit {
        Ok(())
    } else {
        Err(MatrixError::IndexOutOfRange { axis, index, shape })
    }
}

/// Checks that a `size` window anchored at (`row`, `col`) lies within `shape`.
pub(crate) fn block(shape: Shape, row: usize, col: usize, size: Shape) -> Result<()> {
    let fits = |start: usize, extent: usize, limit: usize| {
        start
            .checked_add(extent)
            .map_or(false, |end| end <= limit)
    };
    if fits(row, size.rows, shape.rows) && fits(col, size.cols, shape.cols) {
        Ok(())
    } else {
        Err(MatrixError::BlockOutOfRange {
            row,
            col,
            size,
            shape,
        })
    }
}

pub(crate) fn same_shape<L, R>(op: &'static str, lhs: &L, rhs: &R) -> Result<()>
where
    L: MatrixRef,
    R: MatrixRef,
{
    if lhs.shape() == rhs.shape() {
        Ok(())
    } else {
        Err(MatrixError::DimensionMismatch {
            op,
            left: lhs.shape(),
            right: rhs.shape(),
        })
    }
}

/// Checks that `lhs · rhs` is defined (the inner dimensions agree).
pub(crate) fn product<L, R>(lhs: &L, rhs: &R) -> Result<()>
where
    L: MatrixRef,
    R: MatrixRef,
{
    if lhs.cols() == rhs.rows() {
        Ok(())
    } else {
        Err(MatrixError::DimensionMismatch {
            op: "dot product",
            left: lhs.shape(),
            right: rhs.shape(),
        })
    }
}

/// Checks that `m` is square and returns its dimension.
pub(crate) fn square<M: MatrixRef>(m: &M) -> Result<usize> {
    let shape = m.shape();
    if shape.is_square() {
        Ok(shape.rows)
    } else {
        Err(MatrixError::NotSquare { shape })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks() {
        let shape = Shape::new(3, 3);
        assert!(block(shape, 0, 0, Shape::new(2, 2)).is_ok());
        assert!(block(shape, 1, 1, Shape::new(2, 2)).is_ok());
        assert!(block(shape, 3, 3, Shape::new(0, 0)).is_ok());
        assert!(block(shape, 2, 2, Shape::new(2, 2)).is_err());
        assert!(block(shape, 0, 0, Shape::new(5, 2)).is_err());
        assert!(block(shape, usize::MAX, 0, Shape::new(1, 1)).is_err());
    }

    #[test]
    fn indices() {
        let shape = Shape::new(2, 5);
        assert!(index(Axis::Row, 1, shape).is_ok());
        assert!(index(Axis::Col, 4, shape).is_ok());
        assert_eq!(
            index(Axis::Row, 2, shape),
            Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: 2,
                shape
            })
        );
        assert!(element(shape, 1, 5).is_err());
    }
}
