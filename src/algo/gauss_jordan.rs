use crate::{Abs, Matrix, MatrixError, MatrixRef, Real, Result, Shape, Zero};

/// Solves a system of linear equations given as an augmented matrix.
///
/// `m` must have `N` rows and `N + 1` columns: the left `N` columns hold the coefficients and the
/// last column holds the right-hand side. On success the solution is returned as a `1xN` matrix
/// whose column `i` is the value of the `i`-th unknown.
///
/// The elimination works on a private copy, so `m` is never modified. In every column the row with
/// the largest remaining absolute value is chosen as pivot (partial pivoting).
///
/// # Errors
///
/// - [`MatrixError::DimensionMismatch`] if `m` does not have exactly one more column than rows.
/// - [`MatrixError::Singular`] if some pivot magnitude is at most [`Real::EPSILON`], meaning the
///   system has no unique solution.
///
/// ```
/// # use linmat::*;
/// // x + y = 3, x - y = 1
/// let system = matrix![[1.0, 1.0, 3.0], [1.0, -1.0, 1.0]];
/// assert_approx_eq!(algo::solve_gauss_jordan(&system)?, matrix![[2.0, 1.0]]);
/// # Ok::<_, MatrixError>(())
/// ```
pub fn solve_gauss_jordan<M>(m: &M) -> Result<Matrix<M::Elem>>
where
    M: MatrixRef,
    M::Elem: Real,
{
    let n = m.rows();
    if m.cols() != n + 1 {
        return Err(MatrixError::DimensionMismatch {
            op: "gauss-jordan",
            left: m.shape(),
            right: Shape::new(n, n + 1),
        });
    }

    let mut work: Matrix<M::Elem> = Matrix::from_matrix(m);

    // Forward elimination to upper triangular form.
    for k in 0..n {
        let pivot = (k..n)
            .max_by(|&a, &b| {
                let (a, b) = (work[(a, k)].abs(), work[(b, k)].abs());
                a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(k);
        if work[(pivot, k)].abs() <= <M::Elem as Real>::EPSILON {
            log::debug!("no usable pivot in column {k} of {}", m.shape());
            return Err(MatrixError::Singular);
        }
        if pivot != k {
            work.swap_rows(pivot, k);
        }

        for row in k + 1..n {
            let factor = work[(row, k)] / work[(k, k)];
            if factor == <M::Elem as Zero>::ZERO {
                continue;
            }
            for col in k..=n {
                let delta = factor * work[(k, col)];
                work[(row, col)] = work[(row, col)] - delta;
            }
        }
    }

    // Back substitution. Only the right-hand side column above each pivot needs updating, since
    // the coefficients there are never read again.
    let mut solution: Matrix<M::Elem> = Matrix::new(1, n);
    for k in (0..n).rev() {
        let x = work[(k, n)] / work[(k, k)];
        solution[(0, k)] = x;
        for row in 0..k {
            let delta = work[(row, k)] * x;
            work[(row, n)] = work[(row, n)] - delta;
        }
    }

    log::trace!("solved {n} equations");
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, matrix, FixedMatrix};

    use super::*;

    #[test]
    fn three_unknowns() {
        // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
        let system = matrix![
            [2.0, 1.0, -1.0, 8.0],
            [-3.0, -1.0, 2.0, -11.0],
            [-2.0, 1.0, 2.0, -3.0],
        ];
        let before = system.clone();
        let solution = solve_gauss_jordan(&system).unwrap();
        assert_approx_eq!(solution, matrix![[2.0, 3.0, -1.0]]);
        assert_eq!(system, before);
    }

    #[test]
    fn needs_pivoting() {
        // The first coefficient is zero, so the rows have to be exchanged.
        let system = FixedMatrix::from_rows([[0.0f32, 1.0, 2.0], [1.0, 0.0, 3.0]]);
        let solution = solve_gauss_jordan(&system).unwrap();
        assert_approx_eq!(solution, matrix![[3.0f32, 2.0]]);
    }

    #[test]
    fn on_view() {
        let m = matrix![[9.0, 9.0, 9.0, 9.0], [9.0, 4.0, 0.0, 8.0], [9.0, 0.0, 5.0, 10.0]];
        let system = m.view(1, 1, 2, 3).unwrap();
        assert_approx_eq!(solve_gauss_jordan(&system).unwrap(), matrix![[2.0, 2.0]]);
    }

    #[test]
    fn singular() {
        let system = matrix![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0]];
        assert_eq!(solve_gauss_jordan(&system), Err(MatrixError::Singular));
    }

    #[test]
    fn wrong_shape() {
        let m = Matrix::<f64>::new(3, 3);
        assert_eq!(
            solve_gauss_jordan(&m),
            Err(MatrixError::DimensionMismatch {
                op: "gauss-jordan",
                left: Shape::new(3, 3),
                right: Shape::new(3, 4),
            })
        );
    }

    #[test]
    fn empty_system() {
        let m = Matrix::<f64>::new(0, 1);
        assert_eq!(solve_gauss_jordan(&m).unwrap().shape(), Shape::new(1, 0));
    }
}
