//! # bailout
//!
//! Short-circuiting computations over pluggable effects.
//!
//! A [`Computation<F, A, R>`](computation::Computation) is a chain of steps
//! that either keeps transforming an in-progress value of type `A` or stops
//! for good with an outcome of a closed type `R` that the caller defines.
//! Nothing runs while the chain is built. A single terminal call drives it
//! inside the effect `F`, in constant native stack however long the chain is.
//!
//! ## Overview
//!
//! - **Type Classes** ([`typeclass`]): `Kind`, `Functor`, `Applicative` and
//!   `Monad` over zero-sized effect brands
//! - **Control** ([`control`]): [`Either`](control::Either), the branch of a
//!   computation
//! - **Computation** ([`computation`]): the algebra, the evaluator, the
//!   combinators, adapters and the [`flow!`] macro
//! - **Effects** ([`effect`]): `IO`, and asynchronous futures behind the
//!   `async` feature
//!
//! ## Feature Flags
//!
//! - `async` (default): `AsyncEffect` over `futures`
//! - `tracing`: `trace!` events from the evaluator
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use bailout::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Checkout {
//!     Charged(u32),
//!     EmptyCart,
//!     OverLimit,
//! }
//!
//! impl From<u32> for Checkout {
//!     fn from(total: u32) -> Self {
//!         Checkout::Charged(total)
//!     }
//! }
//!
//! let checkout = |cart: Vec<u32>| {
//!     Computation::<IdentityEffect, Vec<u32>, Checkout>::intermediate(cart)
//!         .ensure(|cart| !cart.is_empty(), Checkout::EmptyCart)
//!         .map(|cart| cart.iter().sum::<u32>())
//!         .ensure(|total| *total <= 500, Checkout::OverLimit)
//!         .evaluate()
//!         .into_inner()
//! };
//!
//! assert_eq!(checkout(vec![120, 80]), Checkout::Charged(200));
//! assert_eq!(checkout(vec![]), Checkout::EmptyCart);
//! assert_eq!(checkout(vec![400, 400]), Checkout::OverLimit);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use bailout::prelude::*;
/// ```
pub mod prelude {
    pub use crate::computation::Computation;
    pub use crate::control::Either;
    #[cfg(feature = "async")]
    pub use crate::effect::AsyncEffect;
    pub use crate::effect::{EffectError, IO, IoEffect};
    pub use crate::flow;
    pub use crate::typeclass::{
        Applicative, Functor, Identity, IdentityEffect, Kind, Monad, OptionEffect, ResultEffect,
    };
}

pub mod computation;
pub mod control;
pub mod effect;
pub mod typeclass;
