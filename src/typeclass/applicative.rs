//! Applicative type class - lifting pure values into an effect.
//!
//! [`Applicative::pure`] is the only capability the terminal
//! [`evaluate`](crate::computation::Computation::evaluate) call needs beyond
//! sequencing: an already-resolved computation still has to be returned as
//! an effect value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map(F::pure(a), |x| x) == F::pure(a)
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! F::map(F::pure(a), f) == F::pure(f(a))
//! ```

use super::functor::Functor;
use super::higher::{OptionEffect, ResultEffect};
use super::identity::{Identity, IdentityEffect};

/// A type class for effect brands that can wrap a pure value.
///
/// # Examples
///
/// ```rust
/// use bailout::typeclass::{Applicative, OptionEffect, ResultEffect};
///
/// assert_eq!(OptionEffect::pure(42), Some(42));
/// assert_eq!(ResultEffect::<String>::pure("ok"), Ok("ok"));
/// ```
pub trait Applicative: Functor {
    /// Wraps `value` in the effect without performing anything.
    fn pure<A: Send + 'static>(value: A) -> Self::Of<A>;
}

// =============================================================================
// Option Implementation
// =============================================================================

impl Applicative for OptionEffect {
    #[inline]
    fn pure<A: Send + 'static>(value: A) -> Option<A> {
        Some(value)
    }
}

// =============================================================================
// Result Implementation
// =============================================================================

impl<E: Send + 'static> Applicative for ResultEffect<E> {
    #[inline]
    fn pure<A: Send + 'static>(value: A) -> Result<A, E> {
        Ok(value)
    }
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Applicative for IdentityEffect {
    #[inline]
    fn pure<A: Send + 'static>(value: A) -> Identity<A> {
        Identity::new(value)
    }
}
