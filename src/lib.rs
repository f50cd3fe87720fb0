//! dense-matrix: a small dense matrix value type.
//!
//! This crate provides a row-major `Matrix<T>` with validated construction,
//! elementwise addition and subtraction, matrix, scalar and Hadamard
//! multiplication, transpose and an elementwise transform. Every operation
//! returns a freshly allocated matrix and never mutates its operands.
//!
//! The design favors a single small type with explicit error kinds over a
//! full linear-algebra suite.
pub mod config;
pub mod error;
pub mod math;

pub use config::{MatrixConfig, MatrixInput};
pub use error::{MatrixError, Operation};
pub use math::{Fill, Matrix};
