//! Short-circuiting computations over a pluggable effect.
//!
//! A [`Computation<F, A, R>`] is a lazily built tree of steps. At any point it
//! is either *in progress*, carrying a value of type `A`, or *finished*,
//! carrying an outcome of the closed type `R`. Once finished, every later
//! in-progress step is skipped and the outcome travels unchanged to the end.
//!
//! - [`algebra`](Computation): the node vocabulary and the primitive lifts
//! - the evaluator: [`Computation::evaluate`] and [`Computation::resolve`]
//!   drive the tree iteratively, in constant native stack
//! - combinators: `map`, `flat_map`, `ensure`, `attempt`, `observe`, ...
//! - [`adapters`]: lifting `Option`, `Either` and `Result` producing effects
//! - [`flow!`](crate::flow): sequencing sugar
//!
//! # Outcomes vs effect failures
//!
//! An outcome is a value of `R` and is the intended way to report "this
//! request was rejected". A failure of the effect itself (`None` for
//! [`OptionEffect`](crate::typeclass::OptionEffect), `Err` for
//! [`ResultEffect`](crate::typeclass::ResultEffect), a panic inside
//! [`IO`](crate::effect::IO)) is not an outcome; it aborts the evaluation the
//! way the effect's own bind does.
//!
//! # Evaluating more than once
//!
//! A built computation is an immutable value that is `Clone`, `Send` and
//! `Sync`. Evaluation borrows it, and each evaluation re-enters every effect
//! it reaches. Values and effect values captured at construction are cloned
//! per evaluation, and closures passed to combinators are `Fn`.
//!
//! # Examples
//!
//! ```rust
//! use bailout::computation::Computation;
//! use bailout::typeclass::IdentityEffect;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Verdict {
//!     Accepted(i32),
//!     Negative,
//!     TooLarge,
//! }
//!
//! impl From<i32> for Verdict {
//!     fn from(value: i32) -> Self {
//!         Verdict::Accepted(value)
//!     }
//! }
//!
//! let check = |input: i32| {
//!     Computation::<IdentityEffect, i32, Verdict>::intermediate(input)
//!         .ensure(|v| *v > 0, Verdict::Negative)
//!         .map(|v| v * 2)
//!         .ensure(|v| *v < 100, Verdict::TooLarge)
//!         .evaluate()
//!         .into_inner()
//! };
//!
//! assert_eq!(check(1), Verdict::Accepted(2));
//! assert_eq!(check(-1), Verdict::Negative);
//! assert_eq!(check(70), Verdict::TooLarge);
//! ```

pub mod adapters;
mod algebra;
mod combinators;
mod macros;
mod trampoline;

pub use algebra::Computation;
