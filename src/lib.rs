//! Generic dense matrices, borrowed views into them, and the linear algebra algorithms that work
//! on both.
//!
//! # Overview
//!
//! Everything in this crate is built around a small set of capability traits:
//!
//! - [`MatrixRef`] gives read access to the elements of something with a shape.
//! - [`MatrixMut`] adds write access.
//! - [`ContiguousMatrix`] exposes the elements as a single row-major slice.
//!
//! Two owned types implement all three: [`Matrix`] stores its elements on the heap and has a
//! runtime shape, [`FixedMatrix`] stores them inline and has a compile-time shape. The views
//! ([`MatrixView`], [`RowView`], [`ColView`] and [`MinorView`]) borrow a source matrix (or
//! another view) and only implement [`MatrixRef`], so they can never outlive or modify what they
//! look at.
//!
//! The algorithms in [`algo`] are free functions generic over these traits. The container type of
//! their results is deduced from the operands as described in [`family`]: two [`FixedMatrix`]
//! operands give a [`FixedMatrix`], anything else gives a [`Matrix`]. The element type of the
//! result follows the element operator, so adding a matrix of `A` to a matrix of `B` yields
//! elements of type `<A as Add<B>>::Output`.
//!
//! # Goals & Non-Goals
//!
//! - Algorithms never copy their inputs into an intermediate form unless the algorithm mutates its
//!   working state (like [`algo::solve_gauss_jordan`] does).
//! - Cofactor-based algorithms ([`algo::determinant`], [`algo::adjoint`], [`algo::inverse`]) are
//!   exact for integer elements, but their cost grows factorially with the dimension. They are
//!   meant for small matrices; there is no LU decomposition or other factorization here.
//! - No SIMD, no sparse storage and no complex numbers.
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`] with a [`MatrixError`] describing the offending
//! shape or index. The operator overloads cannot return errors and panic with the same message
//! instead.

mod access;
pub mod algo;
pub mod approx;
mod check;
mod error;
pub mod family;
mod fixed;
mod format;
mod matrix;
mod ops;
mod traits;
mod view;

pub use access::{ContiguousMatrix, MatrixMut, MatrixRef};
pub use error::{Axis, MatrixError, Result, Shape};
pub use fixed::*;
pub use matrix::Matrix;
pub use traits::*;
pub use view::{ColView, MatrixView, MinorView, RowView};

/// Default absolute tolerance used by approximate comparisons and by the singularity check of
/// [`algo::inverse`].
pub const DEFAULT_ACCURACY: f64 = 1e-6;

/// Creates a [`Matrix`] from a list of rows.
///
/// All rows must have the same length; this is checked at compile time.
///
/// ```
/// # use linmat::*;
/// let m = matrix![
///     [1, 2, 3],
///     [4, 5, 6],
/// ];
/// assert_eq!(m.shape(), Shape::new(2, 3));
/// assert_eq!(m[(1, 0)], 4);
///
/// let empty: Matrix<f32> = matrix![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! matrix {
    () => {
        $crate::Matrix::default()
    };
    ($([$($elem:expr),* $(,)?]),+ $(,)?) => {
        $crate::Matrix::from([$([$($elem),*]),+])
    };
}
