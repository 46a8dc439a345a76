//! Cross-checks the cofactor algorithms and the Gauss-Jordan solver against `nalgebra` on
//! reproducible random inputs.

use linmat::{algo, assert_approx_eq, Matrix, MatrixError, MatrixRef, Shape};
use nalgebra::{DMatrix, DVector};

fn init_logger() {
    env_logger::builder()
        .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
        .filter_module("linmat", log::LevelFilter::Trace)
        .parse_default_env()
        .try_init()
        .ok();
}

fn random_matrix(rng: &mut fastrand::Rng, rows: usize, cols: usize) -> Matrix<f64> {
    let mut m = Matrix::new(rows, cols);
    algo::randomize_with(rng, &mut m, -10.0..=10.0);
    m
}

fn to_nalgebra<M: MatrixRef<Elem = f64>>(m: &M) -> DMatrix<f64> {
    DMatrix::from_fn(m.rows(), m.cols(), |row, col| *m.entry(row, col))
}

#[test]
fn determinant_matches() -> anyhow::Result<()> {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(0x1234_5678);

    for n in 1..=6 {
        for _ in 0..10 {
            let m = random_matrix(&mut rng, n, n);
            let expected = to_nalgebra(&m).determinant();
            let det = algo::determinant(&m)?;
            assert_approx_eq!(det, expected).rel(1e-8).abs(1e-6);
        }
    }
    Ok(())
}

#[test]
fn inverse_matches() -> anyhow::Result<()> {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(0xfeed);

    for n in 1..=5 {
        for _ in 0..10 {
            let m = random_matrix(&mut rng, n, n);
            let Some(expected) = to_nalgebra(&m).try_inverse() else {
                continue;
            };
            let inv = match algo::inverse(&m) {
                Ok(inv) => inv,
                // Random matrices are almost never this close to singular.
                Err(MatrixError::Singular) => continue,
                Err(e) => return Err(e.into()),
            };
            assert_approx_eq!(inv, Matrix::from_fn(n, n, |r, c| expected[(r, c)])).abs(1e-6);
            assert_approx_eq!(&m * &inv, Matrix::<f64>::identity(n)).abs(1e-6);
        }
    }
    Ok(())
}

#[test]
fn solve_matches() -> anyhow::Result<()> {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(42);

    for n in 1..=6 {
        let system = random_matrix(&mut rng, n, n + 1);
        let coefficients = to_nalgebra(&system.view(0, 0, n, n)?);
        let rhs = DVector::from_fn(n, |row, _| system[(row, n)]);
        let Some(expected) = coefficients.lu().solve(&rhs) else {
            continue;
        };

        let solution = algo::solve_gauss_jordan(&system)?;
        assert_eq!(solution.shape(), Shape::new(1, n));
        for k in 0..n {
            assert_approx_eq!(solution[(0, k)], expected[k]).abs(1e-6);
        }
    }
    Ok(())
}

#[test]
fn transpose_and_product_match() -> anyhow::Result<()> {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(7);

    let a = random_matrix(&mut rng, 3, 5);
    let b = random_matrix(&mut rng, 5, 2);
    let expected = to_nalgebra(&a) * to_nalgebra(&b);
    let product = algo::dot(&a, &b)?;
    assert_approx_eq!(product, Matrix::from_fn(3, 2, |r, c| expected[(r, c)]));

    let transposed = algo::transpose(&a);
    assert_eq!(to_nalgebra(&transposed), to_nalgebra(&a).transpose());
    Ok(())
}
