//! Approximate equality of floating-point scalars and matrices.
//!
//! Matrices computed by different sequences of operations (eg. `M · inverse(M)` and the identity)
//! rarely compare bit-for-bit equal. [`ApproxEq`] compares them element by element within a
//! tolerance, and the [`assert_approx_eq!`][crate::assert_approx_eq] and
//! [`assert_approx_ne!`][crate::assert_approx_ne] macros turn such comparisons into test
//! assertions.
//!
//! Matrices of different shapes are never approximately equal, regardless of tolerance.

mod impls;

pub(crate) use impls::all_elements;

use std::{fmt, panic::Location};

/// Equality up to a tolerance.
///
/// Scalars compare directly. Matrix-like types compare equal when their shapes match and each pair
/// of corresponding elements passes the same check.
///
/// Background on the three comparison modes:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Scalar type of the tolerance: [`f32`] or [`f64`], matching the compared elements.
    type Tolerance: DefaultTolerances + Copy;

    /// Returns `true` if `|self - other| <= tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if `|self - other| <= tolerance * max(|self|, |other|)`.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if `self` and `other` are at most `max_ulps` [units in the last place]
    /// apart.
    ///
    /// `NaN` never matches. Zeros of either sign match each other; any other pair of values with
    /// opposite signs does not.
    ///
    /// [units in the last place]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, max_ulps: u32) -> bool;
}

/// Default tolerances used by the assertion macros when none are configured.
pub trait DefaultTolerances {
    /// Default tolerance for [`ApproxEq::abs_diff_eq`].
    ///
    /// This is [`DEFAULT_ACCURACY`][crate::DEFAULT_ACCURACY], the same threshold
    /// [`inverse`][crate::algo::inverse] uses to reject singular matrices.
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
    /// Default tolerance for [`ApproxEq::ulps_diff_eq`].
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = crate::DEFAULT_ACCURACY as f32;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = crate::DEFAULT_ACCURACY;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Pending approximate comparison created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// Nothing is checked until the value is dropped at the end of the statement, which leaves room to
/// chain tolerances onto the macro invocation:
///
/// - [`Asserter::abs`] adds an [`ApproxEq::abs_diff_eq`] check.
/// - [`Asserter::rel`] adds an [`ApproxEq::rel_diff_eq`] check.
/// - [`Asserter::ulps`] adds an [`ApproxEq::ulps_diff_eq`] check.
///
/// The operands count as equal as soon as one of the added checks passes. Without any, the
/// operands are compared with [`DEFAULT_ABS_TOLERANCE`] and [`DEFAULT_REL_TOLERANCE`].
///
/// `L` and `R` can differ, which is how a view gets compared against an owned matrix.
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, L, R>
where
    L: ApproxEq<R> + fmt::Debug,
    R: fmt::Debug,
{
    left: &'a L,
    right: &'a R,
    expect_equal: bool,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    checks: Vec<Check<L::Tolerance>>,
}

#[derive(Clone, Copy)]
enum Check<T> {
    Abs(T),
    Rel(T),
    Ulps(u32),
}

impl<'a, L, R> Asserter<'a, L, R>
where
    L: ApproxEq<R> + fmt::Debug,
    R: fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a L,
        right: &'a R,
        expect_equal: bool,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_equal,
            location: Location::caller(),
            msg,
            checks: Vec::new(),
        }
    }

    /// Accepts the operands if their absolute difference is at most `abs`.
    ///
    /// Suited to values near zero and to matrices whose elements differ widely in magnitude.
    pub fn abs(&mut self, abs: L::Tolerance) -> &mut Self {
        self.checks.push(Check::Abs(abs));
        self
    }

    /// Accepts the operands if their absolute difference is at most `rel` times the larger
    /// magnitude.
    ///
    /// A non-zero value is only relatively equal to 0.0 for `rel >= 1.0`.
    pub fn rel(&mut self, rel: L::Tolerance) -> &mut Self {
        self.checks.push(Check::Rel(rel));
        self
    }

    /// Accepts the operands if at most `ulps` representable values lie between them.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.checks.push(Check::Ulps(ulps));
        self
    }

    fn passes(&self, check: Check<L::Tolerance>) -> bool {
        match check {
            Check::Abs(tol) => self.left.abs_diff_eq(self.right, tol),
            Check::Rel(tol) => self.left.rel_diff_eq(self.right, tol),
            Check::Ulps(ulps) => self.left.ulps_diff_eq(self.right, ulps),
        }
    }
}

impl<'a, L, R> Drop for Asserter<'a, L, R>
where
    L: ApproxEq<R> + fmt::Debug,
    R: fmt::Debug,
{
    fn drop(&mut self) {
        if self.checks.is_empty() {
            self.checks.extend([
                Check::Abs(L::Tolerance::DEFAULT_ABS_TOLERANCE),
                Check::Rel(L::Tolerance::DEFAULT_REL_TOLERANCE),
            ]);
        }

        let equal = self.checks.iter().any(|&check| self.passes(check));
        if equal != self.expect_equal {
            assertion_failed(
                self.left,
                self.right,
                self.expect_equal,
                self.location,
                self.msg,
            );
        }
    }
}

// Destructors ignore `#[track_caller]`, so the caller's location is printed as part of the message.
#[cold]
fn assertion_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expect_equal: bool,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = if expect_equal { "==" } else { "!=" };
    let detail = msg.map(|msg| format!(": {msg}")).unwrap_or_default();
    panic!(
        "assertion `left {op} right` failed at {location}{detail}\n  left: {left:?}\n right: {right:?}"
    );
}

#[doc(hidden)]
#[macro_export]
macro_rules! __approx_assertion {
    ($equal:literal, $lhs:expr, $rhs:expr) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $equal, ::core::option::Option::None)
    };
    ($equal:literal, $lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $equal,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are approximately equal according to [`ApproxEq`].
///
/// Accepts the same arguments as [`assert_eq!`]. The returned [`Asserter`] selects the kind of
/// comparison and its tolerance.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// let m = matrix![[4.0, 7.0], [2.0, 6.0]];
/// let inv = algo::inverse(&m)?;
/// assert_approx_eq!(&m * &inv, Matrix::identity(2));
///
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0).ulps(1);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// # Ok::<_, MatrixError>(())
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__approx_assertion!(true, $lhs, $rhs)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::__approx_assertion!(true, $lhs, $rhs, $($arg)+)
    };
}

/// Asserts that two expressions differ by more than the configured tolerance.
///
/// ```
/// # use linmat::*;
/// assert_approx_ne!(matrix![[1.0, 2.0]], matrix![[1.0, 2.1]]);
/// assert_approx_ne!(matrix![[1.0, 2.0]], matrix![[1.0], [2.0]]);
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__approx_assertion!(false, $lhs, $rhs)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::__approx_assertion!(false, $lhs, $rhs, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{matrix, Matrix};

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn mismatched_matrices() {
        assert_approx_eq!(matrix![[1.0, 2.0]], matrix![[1.0, 2.5]]);
    }

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn matching_matrices() {
        assert_approx_ne!(matrix![[0.1 + 0.2]], matrix![[0.3]]);
    }

    #[test]
    #[should_panic(expected = "row 3")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "row {}", 3);
    }

    #[test]
    #[should_panic(expected = "inverse")]
    fn ne_assertion_message() {
        assert_approx_ne!(1.0, 1.0, "inverse");
    }

    #[test]
    fn default_accuracy() {
        assert_approx_eq!(1.0, 1.0 + 5e-7);
        assert_approx_ne!(1.0, 1.0 + 5e-6);
        assert_approx_eq!(0.0f32, -1e-7);
        assert_approx_eq!(Matrix::<f64>::identity(2), matrix![[1.0, 1e-9], [0.0, 1.0 - 1e-9]]);
    }

    #[test]
    fn any_check_accepts() {
        assert_approx_eq!(1000.0, 1001.0).abs(0.1).rel(0.01);
        assert_approx_eq!(0.0, 1e-3).rel(0.1).abs(1e-2);
        assert_approx_ne!(1000.0, 1001.0).abs(0.1).ulps(4);
    }

    #[test]
    fn relative() {
        assert_approx_eq!(250.0, 250.5).rel(0.01);
        assert_approx_ne!(250.0, 260.0).rel(0.01);
        assert_approx_eq!(2.0, -2.0).rel(2.0);
    }

    #[test]
    fn ulps() {
        assert_approx_eq!(1.0f32, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0f32, 1.0 + f32::EPSILON).ulps(0);
        assert_approx_eq!(-0.0f64, 0.0).ulps(0);
    }

    #[test]
    fn nan_and_inf() {
        assert_approx_ne!(f64::NAN, f64::NAN).abs(f64::MAX);
        assert_approx_ne!(f32::NAN, 0.0).rel(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN).ulps(u32::MAX);

        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).abs(f64::MAX);
        assert_approx_ne!(f64::MAX, f64::INFINITY).rel(0.5);
        assert_approx_eq!(f64::MAX, f64::INFINITY).ulps(1);
    }
}
