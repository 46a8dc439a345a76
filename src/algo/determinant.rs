use itertools::iproduct;

use crate::{
    algo::map_in_place,
    check,
    family::{Family, MapResult},
    Abs, MatrixError, MatrixRef, MinorView, Number, One, Real, Result, Zero,
};

/// One pending term of the Laplace expansion: the determinant of the minor made up of the last
/// `cols.len()` rows of the source and the columns in `cols`, multiplied by `coefficient`.
struct Term<T> {
    coefficient: T,
    cols: Vec<usize>,
}

/// Computes the determinant of a square matrix by cofactor (Laplace) expansion.
///
/// The expansion always develops the first remaining row. Instead of recursing, pending minors are
/// kept on an explicit work stack, and each minor is described by the set of source columns it
/// keeps, so no elements are ever copied. Terms whose coefficient is zero are skipped.
///
/// The cost grows factorially with the dimension, which keeps this practical for matrices up to
/// about 8x8. The determinant of the empty (0x0) matrix is 1.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if `m` is not square.
///
/// ```
/// # use linmat::*;
/// let m = matrix![[-2, -1, 2], [2, 1, 4], [-3, 3, -1]];
/// assert_eq!(algo::determinant(&m)?, 54);
/// assert_eq!(algo::determinant(&algo::transpose(&m))?, 54);
/// # Ok::<_, MatrixError>(())
/// ```
pub fn determinant<M>(m: &M) -> Result<M::Elem>
where
    M: MatrixRef,
    M::Elem: Number,
{
    let n = check::square(m)?;
    match n {
        0 => return Ok(<M::Elem as One>::ONE),
        1 => return Ok(*m.entry(0, 0)),
        _ => {}
    }

    let mut det = <M::Elem as Zero>::ZERO;
    let mut stack = vec![Term {
        coefficient: <M::Elem as One>::ONE,
        cols: (0..n).collect(),
    }];
    let mut expanded = 0usize;
    while let Some(Term { coefficient, cols }) = stack.pop() {
        let row = n - cols.len();
        if let [a, b] = cols[..] {
            let minor = *m.entry(row, a) * *m.entry(row + 1, b)
                - *m.entry(row, b) * *m.entry(row + 1, a);
            det = det + coefficient * minor;
            continue;
        }

        expanded += 1;
        for (i, &col) in cols.iter().enumerate() {
            let elem = *m.entry(row, col);
            if elem == <M::Elem as Zero>::ZERO {
                continue;
            }
            let signed = if i % 2 == 0 { elem } else { -elem };
            let mut kept = cols.clone();
            kept.remove(i);
            stack.push(Term {
                coefficient: coefficient * signed,
                cols: kept,
            });
        }
    }

    log::trace!("{n}x{n} determinant expanded {expanded} minors");
    Ok(det)
}

/// Computes the adjoint (adjugate) of a square matrix: the transpose of its cofactor matrix.
///
/// Each cofactor is the determinant of a [`MinorView`] of `m`, with sign `(-1)^(row + col)`.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if `m` is not square.
///
/// ```
/// # use linmat::*;
/// let m = matrix![[7, 8, 9], [6, 5, 4], [3, 2, 1]];
/// assert_eq!(
///     algo::adjoint(&m)?,
///     matrix![[-3, 10, -13], [6, -20, 26], [-3, 10, -13]],
/// );
/// # Ok::<_, MatrixError>(())
/// ```
pub fn adjoint<M>(m: &M) -> Result<MapResult<M, M::Elem>>
where
    M: MatrixRef,
    M::Elem: Number,
{
    let n = check::square(m)?;
    let mut cofactors = Vec::with_capacity(n * n);
    for (row, col) in iproduct!(0..n, 0..n) {
        let det = determinant(&MinorView::new(m, row, col)?)?;
        cofactors.push(if (row + col) % 2 == 0 { det } else { -det });
    }
    log::debug!("computed {} cofactors of {n}x{n} matrix", cofactors.len());

    // Transposing while collecting: element (row, col) of the adjoint is cofactor (col, row).
    Ok(<M::Family as Family>::from_fn(n, n, |row, col| {
        cofactors[col * n + row]
    }))
}

/// Computes the inverse of a square matrix as `adjoint(m) / determinant(m)`.
///
/// # Errors
///
/// - [`MatrixError::NotSquare`] if `m` is not square.
/// - [`MatrixError::Singular`] if the magnitude of the determinant is at most
///   [`Real::DEFAULT_ACCURACY`].
///
/// ```
/// # use linmat::*;
/// let m = matrix![[7.0, 8.0, 9.0], [6.0, 5.0, 4.0], [3.0, 2.0, 2.0]];
/// let inv = algo::inverse(&m)?;
/// assert_approx_eq!(&m * &inv, Matrix::<f64>::identity(3));
///
/// let singular = matrix![[1.0, 2.0], [2.0, 4.0]];
/// assert_eq!(algo::inverse(&singular), Err(MatrixError::Singular));
/// # Ok::<_, MatrixError>(())
/// ```
pub fn inverse<M>(m: &M) -> Result<MapResult<M, M::Elem>>
where
    M: MatrixRef,
    M::Elem: Real,
{
    let det = determinant(m)?;
    if det.abs() <= <M::Elem as Real>::DEFAULT_ACCURACY {
        return Err(MatrixError::Singular);
    }

    let mut adjoint = adjoint(m)?;
    map_in_place(&mut adjoint, |elem| *elem / det);
    Ok(adjoint)
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, matrix, Mat2d, Mat3, Matrix, Shape};

    use super::*;

    #[test]
    fn small() {
        assert_eq!(determinant(&Matrix::<i32>::default()), Ok(1));
        assert_eq!(determinant(&matrix![[1.0]]), Ok(1.0));
        assert_eq!(determinant(&matrix![[3, 8], [4, 6]]), Ok(-14));
        assert_eq!(determinant(&Mat3::<i32>::identity()), Ok(1));
        assert_eq!(determinant(&Mat3::<i32>::zero()), Ok(0));
    }

    #[test]
    fn singular_3x3() {
        let m = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert_approx_eq!(determinant(&m).unwrap(), 0.0);
    }

    #[test]
    fn non_integral() {
        let m = matrix![[8.0, 2.8, 3.0], [4.0, 6.0, 6.9], [8.1, 9.0, 10.0]];
        assert_approx_eq!(determinant(&m).unwrap(), -10.108).abs(1e-9);
    }

    #[test]
    fn sign_propagates_through_nested_minors() {
        // Only holds if outer expansion coefficients are carried into the inner minors.
        #[rustfmt::skip]
        let m = matrix![
            [2, 0, 1, 3],
            [1, 4, 0, 2],
            [0, 5, 3, 1],
            [3, 1, 2, 0],
        ];
        let mut swapped = m.clone();
        swapped.swap_rows(0, 1);
        assert_eq!(determinant(&m).unwrap(), -136);
        assert_eq!(determinant(&swapped).unwrap(), 136);
    }

    #[test]
    fn large_singular() {
        let m = Matrix::from_fn(7, 7, |row, col| (row * 7 + col + 1) as f64);
        assert_approx_eq!(determinant(&m).unwrap(), 0.0);
    }

    #[test]
    fn not_square() {
        let m = Matrix::<f64>::new(6, 3);
        assert_eq!(
            determinant(&m),
            Err(MatrixError::NotSquare {
                shape: Shape::new(6, 3)
            })
        );
        assert!(adjoint(&m).is_err());
        assert!(inverse(&m).is_err());
    }

    #[test]
    fn adjoint_of_views() {
        let m = matrix![[0, 0, 0, 0], [0, 7, 8, 9], [0, 6, 5, 4], [0, 3, 2, 1]];
        let view = m.view(1, 1, 3, 3).unwrap();
        assert_eq!(
            adjoint(&view).unwrap(),
            matrix![[-3, 10, -13], [6, -20, 26], [-3, 10, -13]]
        );
        assert_eq!(adjoint(&matrix![[5]]).unwrap(), matrix![[1]]);
    }

    #[test]
    fn inverse_3x3() {
        let m = matrix![[7.0, 8.0, 9.0], [6.0, 5.0, 4.0], [3.0, 2.0, 2.0]];
        let expected = matrix![
            [-2.0 / 13.0, -2.0 / 13.0, 1.0],
            [0.0, 1.0, -2.0],
            [3.0 / 13.0, -10.0 / 13.0, 1.0],
        ];
        assert_approx_eq!(inverse(&m).unwrap(), expected);
    }

    #[test]
    fn inverse_keeps_family() {
        let m = Mat2d::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv: Mat2d = inverse(&m).unwrap();
        assert_approx_eq!(inv, Mat2d::from_rows([[0.6, -0.7], [-0.2, 0.4]]));
        assert_eq!(
            inverse(&Mat2d::from_rows([[1.0, 2.0], [0.5, 1.0]])),
            Err(MatrixError::Singular)
        );
    }
}
