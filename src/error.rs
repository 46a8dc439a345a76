use std::fmt;

/// The number of rows and columns of a matrix-like value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the number of elements a matrix of this shape holds.
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the shape with rows and columns swapped.
    pub const fn transposed(&self) -> Self {
        Self::new(self.cols, self.rows)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

/// Selects either the rows or the columns of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Row => "row",
            Axis::Col => "column",
        })
    }
}

/// Errors returned by fallible matrix operations.
///
/// Every operation validates its inputs before touching any caller-owned data, so receiving an
/// error guarantees that nothing was modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MatrixError {
    #[error("element ({row}, {col}) is out of range for a {shape} matrix")]
    OutOfRange { row: usize, col: usize, shape: Shape },

    #[error("{axis} {index} is out of range for a {shape} matrix")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        shape: Shape,
    },

    #[error("{size} block at ({row}, {col}) does not fit into a {shape} matrix")]
    BlockOutOfRange {
        row: usize,
        col: usize,
        size: Shape,
        shape: Shape,
    },

    #[error("incompatible dimensions for {op}: {left} and {right}")]
    DimensionMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("{shape} matrix is not square")]
    NotSquare { shape: Shape },

    #[error("matrix is singular")]
    Singular,

    #[error("row {row} has {found} elements, expected {expected}")]
    InconsistentRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("buffer holds {found} elements, expected {expected}")]
    BufferLength { expected: usize, found: usize },
}

pub type Result<T, E = MatrixError> = std::result::Result<T, E>;

/// Unwraps the result of an infallible-looking operation, panicking with the error message.
///
/// Operator overloads can't return a [`Result`], so, like slice indexing, they panic instead.
#[track_caller]
pub(crate) fn expect_ok<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            MatrixError::OutOfRange {
                row: 3,
                col: 0,
                shape: Shape::new(2, 2)
            }
            .to_string(),
            "element (3, 0) is out of range for a 2x2 matrix"
        );
        assert_eq!(
            MatrixError::IndexOutOfRange {
                axis: Axis::Col,
                index: 5,
                shape: Shape::new(3, 4)
            }
            .to_string(),
            "column 5 is out of range for a 3x4 matrix"
        );
        assert_eq!(
            MatrixError::DimensionMismatch {
                op: "dot product",
                left: Shape::new(2, 3),
                right: Shape::new(2, 3),
            }
            .to_string(),
            "incompatible dimensions for dot product: 2x3 and 2x3"
        );
        assert_eq!(MatrixError::Singular.to_string(), "matrix is singular");
    }

    #[test]
    #[should_panic(expected = "3x1 matrix is not square")]
    fn expect_ok_panics_with_message() {
        expect_ok::<()>(Err(MatrixError::NotSquare {
            shape: Shape::new(3, 1),
        }));
    }
}
