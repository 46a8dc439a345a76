//! Algorithms over matrix-like values.
//!
//! Every algorithm is a free function that is generic over the capability traits in
//! [`access`][crate::access], so owned matrices and views can be mixed freely. Functions that
//! produce a new matrix pick its container type with the rules described in
//! [`family`][crate::family]. Fallible functions validate all shapes before reading or writing any
//! element.

mod determinant;
mod elementwise;
mod gauss_jordan;
mod random;

pub use determinant::*;
pub use elementwise::*;
pub use gauss_jordan::*;
pub use random::*;
