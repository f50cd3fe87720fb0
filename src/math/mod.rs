//! The dense `Matrix` type and its operations.
//!
//! `matrix` holds the type, its constructors and accessors; `fill` the
//! closed set of fill rules used by dimension construction; `ops` the
//! arithmetic, transpose and transform operations.
pub mod fill;
pub mod matrix;
pub mod ops;

pub use fill::Fill;
pub use matrix::Matrix;
