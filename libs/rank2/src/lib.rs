//! Statically sized rank-2 tensors for stress, strain, rotation and inertia work in
//! euclidean space.
//!
//! The side length `N` is a const generic (default [`DEFAULT_DIM`]) and the cell type `T`
//! any [`Scalar`] (default [`Coord`]). Every operation is written as a fold or map over
//! row-major and column-major [`Traversal`]s, and returns a freshly owned value.
//!
//! ```
//! use rank2::{Tensor, Vector};
//!
//! let t: Tensor = Tensor::from_rows([[5.0; 3]; 3]);
//! let mut t2: Tensor = Tensor::zeros();
//! t2[1][1] = 0.312;
//! t2[0][2] = 2.00004;
//!
//! let sum = t + t2;
//! let product = t * sum;
//! let w = product * Vector::from([7.0; 3]);
//! approx::assert_relative_eq!(w, Vector::from([1655.9214; 3]), epsilon = 1e-9);
//! assert_eq!(product.transpose().transpose(), product);
//! ```
//!
//! Mixing dimensions is rejected at build time, for tensors and vectors alike:
//!
//! ```compile_fail
//! use rank2::Tensor;
//! let a: Tensor<f64, 3> = Tensor::zeros();
//! let b: Tensor<f64, 2> = Tensor::zeros();
//! let _ = a * b;
//! ```
//!
//! ```compile_fail
//! use rank2::{Tensor, Vector};
//! let a: Tensor<f64, 3> = Tensor::zeros();
//! let _ = a * Vector::from([1.0, 2.0]);
//! ```
//!
//! ```compile_fail
//! use rank2::Tensor;
//! let a: Tensor<f64, 3> = Tensor::zeros();
//! let b: Tensor<f64, 4> = Tensor::zeros();
//! let _ = a.double_dot(&b);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod algebra;
mod cursor;
mod error;
mod scalar;
mod storage;
mod tensor;
mod vector;

#[cfg(test)]
mod tests;

pub use cursor::*;
pub use error::*;
pub use scalar::{Coord, DEFAULT_DIM, Scalar};
pub use tensor::*;
pub use vector::*;
