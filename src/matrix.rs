use std::{
    fmt,
    ops::{Index, IndexMut},
    slice,
};

use crate::{
    access::linear_index, check, family::Dynamic, ContiguousMatrix, FixedMatrix, MatrixError,
    MatrixMut, MatrixRef, One, Result, Shape, Zero,
};

/// A heap-allocated, row-major matrix whose shape is chosen at runtime.
///
/// # Construction
///
/// - [`Matrix::new`] and [`Matrix::square`] create zero-filled matrices.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::from_rows`] validates and copies a list of rows, [`Matrix::from_slice`] and
///   [`Matrix::from_vec`] reinterpret a flat row-major buffer.
/// - [`Matrix::from_matrix`] copies (and converts) the elements of any other [`MatrixRef`].
/// - The [`matrix!`][crate::matrix] macro and the `From<[[T; C]; R]>` impl create a matrix from
///   nested array literals.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples. Indexing out of bounds
/// panics, just like it does for slices. [`MatrixRef::get`] and [`MatrixRef::at`] offer checked
/// access instead.
///
/// ```
/// # use linmat::*;
/// let mut mat = matrix![[0, 1]];
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat.get(1, 0), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates a matrix by invoking `f` with the row and column of every element.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let len = rows * cols;
        let mut data = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { rows, cols, data }
    }

    /// Takes ownership of a row-major buffer holding `rows * cols` elements.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::BufferLength`] if `data` has the wrong length.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(MatrixError::BufferLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// The number of columns is taken from the first row; an empty list yields a 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InconsistentRow`] if the rows don't all have the same length.
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Matrix::from_rows([vec![1, 2], vec![3, 4]])?;
    /// assert_eq!(mat.shape(), Shape::new(2, 2));
    /// assert!(Matrix::from_rows([vec![1, 2], vec![3]]).is_err());
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut data = Vec::new();
        let mut cols = None;
        let mut count = 0;
        for (index, row) in rows.into_iter().enumerate() {
            let start = data.len();
            data.extend(row);
            let found = data.len() - start;
            let expected = *cols.get_or_insert(found);
            if found != expected {
                return Err(MatrixError::InconsistentRow {
                    row: index,
                    expected,
                    found,
                });
            }
            count += 1;
        }
        Ok(Self {
            rows: count,
            cols: cols.unwrap_or(0),
            data,
        })
    }

    /// Copies the elements of any matrix-like value, converting them with [`Into`].
    ///
    /// ```
    /// # use linmat::*;
    /// let ints = matrix![[1, 2], [3, 4]];
    /// let floats: Matrix<f64> = Matrix::from_matrix(&ints.view(0, 1, 2, 1)?);
    /// assert_eq!(floats, matrix![[2.0], [4.0]]);
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn from_matrix<M>(m: &M) -> Self
    where
        M: MatrixRef,
        M::Elem: Clone + Into<T>,
    {
        Self::from_fn(m.rows(), m.cols(), |row, col| {
            m.entry(row, col).clone().into()
        })
    }

    /// Returns the elements of row `row` as a slice, or [`None`] if it is out of range.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..][..self.cols])
        } else {
            None
        }
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row < self.rows {
            Some(&mut self.data[row * self.cols..][..self.cols])
        } else {
            None
        }
    }

    /// Swaps two rows in place.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of range.
    #[track_caller]
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        for index in [a, b] {
            if let Err(e) = check::index(crate::Axis::Row, index, self.shape()) {
                panic!("{e}");
            }
        }
        if a == b {
            return;
        }
        let (low, high) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(high * self.cols);
        head[low * self.cols..][..self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    /// Returns an iterator over all elements in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns an iterator over the rows of this matrix.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| &self.data[row * self.cols..][..self.cols])
    }

    /// Consumes the matrix and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Zero + Clone> Matrix<T> {
    /// Creates a `rows`x`cols` matrix with every element set to 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::ZERO)
    }

    /// Creates an `n`x`n` matrix with every element set to 0.
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a `rows`x`cols` matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Copies a row-major buffer holding `rows * cols` elements.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::BufferLength`] if `data` has the wrong length.
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(MatrixError::BufferLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: data.to_vec(),
        })
    }
}

impl<T: Zero + One> Matrix<T> {
    /// Creates the `n`x`n` identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T> MatrixRef for Matrix<T> {
    type Elem = T;
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
    fn get(&self, row: usize, col: usize) -> Option<&T> {
        linear_index(self.shape(), row, col).map(|i| &self.data[i])
    }
}

impl<T> MatrixMut for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        linear_index(self.shape(), row, col).map(|i| &mut self.data[i])
    }
}

impl<T> ContiguousMatrix for Matrix<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.entry(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.entry_mut(row, col)
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: rows.into_iter().flatten().collect(),
        }
    }
}

impl<T, const R: usize, const C: usize> From<FixedMatrix<T, R, C>> for Matrix<T> {
    fn from(m: FixedMatrix<T, R, C>) -> Self {
        Self::from(m.into_rows())
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::debug(self, f)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::display(self, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix;

    use super::*;

    #[test]
    fn zero_filled() {
        let m = Matrix::<f64>::new(2, 3);
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m.len(), 6);
        assert!(m.iter().all(|&x| x == 0.0));

        let sq = Matrix::<i32>::square(4);
        assert!(sq.is_square());
        assert_eq!(sq.len(), 16);
    }

    #[test]
    fn empty_matrices_own_no_storage() {
        let m = Matrix::<f32>::new(0, 5);
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert_eq!(m.into_vec().capacity(), 0);

        let d = Matrix::<f32>::default();
        assert_eq!(d.shape(), Shape::new(0, 0));
    }

    #[test]
    fn from_rows() {
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            vec![1, 2, 3],
            vec![4, 5, 6],
        ])
        .unwrap();
        assert_eq!(m, matrix![[1, 2, 3], [4, 5, 6]]);

        assert_eq!(
            Matrix::from_rows([vec![1, 2], vec![3, 4], vec![5]]),
            Err(MatrixError::InconsistentRow {
                row: 2,
                expected: 2,
                found: 1
            })
        );

        let empty = Matrix::<i32>::from_rows(Vec::<Vec<i32>>::new()).unwrap();
        assert_eq!(empty.shape(), Shape::new(0, 0));
        let blank = Matrix::<i32>::from_rows([vec![], vec![]]).unwrap();
        assert_eq!(blank.shape(), Shape::new(2, 0));
        assert!(blank.is_empty());
    }

    #[test]
    fn from_buffers() {
        let m = Matrix::from_slice(2, 2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(
            Matrix::from_slice(2, 2, &[1, 2, 3]),
            Err(MatrixError::BufferLength {
                expected: 4,
                found: 3
            })
        );
        let v = Matrix::from_vec(1, 3, vec![7, 8, 9]).unwrap();
        assert_eq!(v.row(0), Some(&[7, 8, 9][..]));
        assert!(Matrix::from_vec(3, 3, vec![0; 8]).is_err());
    }

    #[test]
    fn conversions() {
        let fixed = FixedMatrix::from_rows([[1, 2], [3, 4]]);
        let m = Matrix::from(fixed);
        assert_eq!(m, matrix![[1, 2], [3, 4]]);

        let wide: Matrix<i64> = Matrix::from_matrix(&m);
        assert_eq!(wide[(1, 1)], 4i64);
    }

    #[test]
    fn identity() {
        assert_eq!(Matrix::<i32>::identity(2), matrix![[1, 0], [0, 1]]);
        assert!(Matrix::<f32>::identity(0).is_empty());
    }

    #[test]
    fn rows() {
        let mut m = matrix![[1, 2], [3, 4], [5, 6]];
        m.swap_rows(0, 2);
        assert_eq!(m, matrix![[5, 6], [3, 4], [1, 2]]);
        m.swap_rows(1, 1);
        assert_eq!(m.row(1), Some(&[3, 4][..]));
        assert_eq!(m.row(3), None);

        m.row_mut(1).unwrap()[0] = 0;
        let rows: Vec<_> = m.rows_iter().collect();
        assert_eq!(rows, [&[5, 6][..], &[0, 4], &[1, 2]]);
    }

    #[test]
    #[should_panic(expected = "row 3 is out of range for a 3x2 matrix")]
    fn swap_rows_out_of_range() {
        let mut m = matrix![[1, 2], [3, 4], [5, 6]];
        m.swap_rows(3, 0);
    }

    #[test]
    fn index() {
        let mut m = Matrix::<i32>::new(2, 2);
        m[(0, 1)] = 5;
        *m.get_mut(1, 0).unwrap() = 6;
        assert_eq!(m.as_slice(), &[0, 5, 6, 0]);
        assert_eq!(m.iter().sum::<i32>(), 11);
        assert_eq!(m.into_iter().collect::<Vec<_>>(), [0, 5, 6, 0]);
    }
}
