//! Type class traits describing what an effect must be able to do.
//!
//! A [`Computation`](crate::computation::Computation) never performs work
//! itself; every suspension point is delegated to a caller-chosen effect.
//! This module defines the capability interface that effect must expose:
//!
//! - [`Functor`]: mapping over the payload of an effect value
//! - [`Applicative`]: wrapping a pure value
//! - [`Monad`]: sequential bind and a stack-safe loop (`tail_rec_m`)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) on zero-sized *brands*:
//! [`Kind::Of<A>`] is the effect applied to a payload `A`.
//!
//! ## Built-in Effects
//!
//! - [`IdentityEffect`]: [`Identity<A>`], synchronous and infallible
//! - [`OptionEffect`]: `Option<A>`, where `None` aborts evaluation
//! - [`ResultEffect<E>`]: `Result<A, E>`, where `Err(e)` aborts evaluation
//!
//! Further effects live in [`crate::effect`].
//!
//! # Examples
//!
//! ```rust
//! use bailout::typeclass::{Applicative, Functor, Monad, OptionEffect};
//!
//! let value = OptionEffect::pure(20);
//! let value = OptionEffect::map(value, |n: i32| n + 1);
//! let value = OptionEffect::flat_map(value, |n: i32| Some(n * 2));
//! assert_eq!(value, Some(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::{Kind, OptionEffect, ResultEffect};
pub use identity::{Identity, IdentityEffect};
pub use monad::Monad;
