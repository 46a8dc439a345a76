use std::{
    env::{self, VarError},
    ops::RangeInclusive,
    sync::{Mutex, PoisonError},
};

use itertools::iproduct;
use once_cell::sync::Lazy;

use crate::MatrixMut;

/// Environment variable that seeds the shared generator used by [`randomize`].
pub const SEED_VAR: &str = "LINMAT_RNG_SEED";

static SHARED_RNG: Lazy<Mutex<fastrand::Rng>> = Lazy::new(|| {
    let rng = match env::var(SEED_VAR) {
        Ok(v) => match v.trim().parse::<u64>() {
            Ok(seed) => {
                log::debug!("seeding shared generator with {seed}");
                fastrand::Rng::with_seed(seed)
            }
            Err(e) => {
                log::warn!("invalid value set for `{SEED_VAR}` variable: '{v}' ({e}); ignoring");
                fastrand::Rng::new()
            }
        },
        Err(VarError::NotPresent) => fastrand::Rng::new(),
        Err(VarError::NotUnicode(s)) => {
            log::warn!(
                "invalid value set for `{SEED_VAR}` variable: {}; ignoring",
                s.to_string_lossy()
            );
            fastrand::Rng::new()
        }
    };
    Mutex::new(rng)
});

/// Element types that can be drawn uniformly from a closed interval.
pub trait UniformSample: Sized {
    /// Returns a value in `low..=high`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    fn sample(rng: &mut fastrand::Rng, low: Self, high: Self) -> Self;
}

macro_rules! float_sample {
    ($($float:ident),+) => {
        $(
            impl UniformSample for $float {
                #[track_caller]
                fn sample(rng: &mut fastrand::Rng, low: Self, high: Self) -> Self {
                    assert!(low <= high, "empty range {low}..={high}");
                    // Clamped since `low + (high - low) * t` may round past `high`.
                    (low + (high - low) * rng.$float()).min(high)
                }
            }
        )+
    };
}
float_sample!(f32, f64);

macro_rules! int_sample {
    ($($int:ident),+) => {
        $(
            impl UniformSample for $int {
                fn sample(rng: &mut fastrand::Rng, low: Self, high: Self) -> Self {
                    rng.$int(low..=high)
                }
            }
        )+
    };
}
int_sample!(i32, i64, u32, u64);

/// Overwrites every element of `m` with a value drawn uniformly from `range`.
///
/// Values come from a generator shared by the whole process. Set the `LINMAT_RNG_SEED`
/// environment variable to a `u64` to make its sequence reproducible, or use [`randomize_with`] to
/// supply a generator explicitly.
///
/// # Panics
///
/// Panics if `range` is empty.
///
/// ```
/// # use linmat::*;
/// let mut m = Matrix::<f64>::square(5);
/// algo::randomize(&mut m, -10.0..=10.0);
/// assert!(m.iter().all(|x| (-10.0..=10.0).contains(x)));
/// ```
#[track_caller]
pub fn randomize<M>(m: &mut M, range: RangeInclusive<M::Elem>) -> &mut M
where
    M: MatrixMut,
    M::Elem: UniformSample + Copy,
{
    let mut rng = SHARED_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    randomize_with(&mut rng, m, range)
}

/// Like [`randomize`], but draws the values from `rng`.
///
/// ```
/// # use linmat::*;
/// let mut a = Mat3d::zero();
/// let mut b = Mat3d::zero();
/// algo::randomize_with(&mut fastrand::Rng::with_seed(7), &mut a, 0.0..=1.0);
/// algo::randomize_with(&mut fastrand::Rng::with_seed(7), &mut b, 0.0..=1.0);
/// assert_eq!(a, b);
/// ```
#[track_caller]
pub fn randomize_with<'m, M>(
    rng: &mut fastrand::Rng,
    m: &'m mut M,
    range: RangeInclusive<M::Elem>,
) -> &'m mut M
where
    M: MatrixMut,
    M::Elem: UniformSample + Copy,
{
    let (low, high) = (*range.start(), *range.end());
    for (row, col) in iproduct!(0..m.rows(), 0..m.cols()) {
        *m.entry_mut(row, col) = <M::Elem as UniformSample>::sample(rng, low, high);
    }
    m
}

#[cfg(test)]
mod tests {
    use crate::{Mat4, Matrix, MatrixRef};

    use super::*;

    #[test]
    fn within_range() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for (low, high) in [(0.0, 10.0), (-10.0, 10.0), (10.0, 11.0)] {
            let mut m = Matrix::<f64>::square(5);
            randomize_with(&mut rng, &mut m, low..=high);
            assert!(m.iter().all(|x| (low..=high).contains(x)), "{m:?}");
        }
    }

    #[test]
    fn degenerate_range() {
        let mut m = Matrix::<f32>::new(2, 3);
        randomize(&mut m, 2.5..=2.5);
        assert!(m.iter().all(|&x| x == 2.5));
    }

    #[test]
    fn integers() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut m = Mat4::<i32>::zero();
        randomize_with(&mut rng, &mut m, -3..=3);
        assert!(m.as_rows().iter().flatten().all(|x| (-3..=3).contains(x)));
    }

    #[test]
    fn through_mutable_reference() {
        let mut m = Matrix::<f64>::new(3, 3);
        let mut rng = fastrand::Rng::with_seed(2);
        let mut borrowed = &mut m;
        randomize_with(&mut rng, &mut borrowed, 1.0..=2.0);
        assert_eq!(borrowed.rows(), 3);
        assert!(m.iter().all(|x| (1.0..=2.0).contains(x)));
    }

    #[test]
    #[should_panic]
    fn empty_range() {
        let mut m = Matrix::<f64>::new(1, 1);
        randomize(&mut m, 1.0..=0.0);
    }
}
