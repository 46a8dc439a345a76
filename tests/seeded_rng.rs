//! The shared generator reads its seed once, so this lives in its own test binary.

use linmat::{algo, Mat3d, Matrix};

#[test]
fn seed_from_env() {
    std::env::set_var(algo::SEED_VAR, "1337");

    let mut shared = Matrix::<f64>::new(4, 4);
    algo::randomize(&mut shared, -1.0..=1.0);

    let mut expected = Matrix::<f64>::new(4, 4);
    algo::randomize_with(&mut fastrand::Rng::with_seed(1337), &mut expected, -1.0..=1.0);
    assert_eq!(shared, expected);

    // The sequence continues instead of restarting.
    let mut next = Mat3d::zero();
    algo::randomize(&mut next, -1.0..=1.0);
    assert_ne!(next.as_rows()[0][..], expected.row(0).unwrap()[..3]);
}
