//! Effect instances that actually suspend work.
//!
//! The brands in [`crate::typeclass`] cover plain and fallible values. This
//! module adds effects whose values describe work that has not happened yet:
//!
//! - [`IO`] / [`IoEffect`]: deferred synchronous side effects, run with
//!   [`IO::run_unsafe`]
//! - [`AsyncEffect`] (feature `async`): `futures::future::BoxFuture`
//! - [`EffectError`]: failures of an effect, as opposed to outcomes of a
//!   computation
//!
//! # Examples
//!
//! ```rust
//! use bailout::computation::Computation;
//! use bailout::control::Either;
//! use bailout::effect::{EffectError, IO, IoEffect};
//!
//! // A panicking effect turned into a domain outcome.
//! let program = Computation::<IoEffect, (), String>::intermediate(())
//!     .attempt_with_effect(|()| {
//!         IO::<u32>::new(|| panic!("disk on fire"))
//!             .catch_unwind()
//!             .fmap(|result| match result {
//!                 Ok(value) => Either::Right(value),
//!                 Err(EffectError::Panicked { message }) => Either::Left(message),
//!             })
//!     })
//!     .map(|value| value.to_string())
//!     .evaluate();
//!
//! assert_eq!(program.run_unsafe(), "disk on fire");
//! ```

mod error;
mod io;
#[cfg(feature = "async")]
mod task;

pub use error::EffectError;
pub use io::{IO, IoEffect};
#[cfg(feature = "async")]
pub use task::AsyncEffect;
