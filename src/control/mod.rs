//! Control structures shared by the type classes and the evaluator.
//!
//! - [`Either`]: a value that can be one of two types; the branch of a
//!   computation and the loop signal of `tail_rec_m`
//!
//! # Examples
//!
//! ```rust
//! use bailout::control::Either;
//!
//! let branch: Either<&str, i32> = Either::Right(1);
//! assert_eq!(branch.map_right(|n| n + 1), Either::Right(2));
//! ```

mod either;

pub use either::Either;
