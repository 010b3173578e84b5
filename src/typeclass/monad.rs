//! Monad type class - sequencing effects with stack-safe loops.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the two sequencing capabilities the computation evaluator relies on:
//!
//! - [`Monad::flat_map`]: the sequential bind
//! - [`Monad::tail_rec_m`]: a loop whose body is an effect, run without
//!   growing the native stack
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! F::flat_map(F::pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! F::flat_map(m, F::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! F::flat_map(F::flat_map(m, f), g) == F::flat_map(m, |x| F::flat_map(f(x), g))
//! ```
//!
//! ## Tail Recursion Law
//!
//! `tail_rec_m` must agree with the equivalent (but stack-hungry) recursive
//! definition:
//!
//! ```text
//! F::tail_rec_m(s, step) == F::flat_map(step(s), |next| match next {
//!     Either::Left(s2) => F::tail_rec_m(s2, step),
//!     Either::Right(b) => F::pure(b),
//! })
//! ```
//!
//! and use constant native stack in the number of iterations.
//!
//! # Examples
//!
//! ```rust
//! use bailout::control::Either;
//! use bailout::typeclass::{Monad, OptionEffect};
//!
//! let halved = OptionEffect::flat_map(Some(10), |n: i32| (n % 2 == 0).then_some(n / 2));
//! assert_eq!(halved, Some(5));
//!
//! // Sum 1..=100_000 without recursion.
//! let total = OptionEffect::tail_rec_m((0u64, 1u64), |(sum, next)| {
//!     Some(if next > 100_000 {
//!         Either::Right(sum)
//!     } else {
//!         Either::Left((sum + next, next + 1))
//!     })
//! });
//! assert_eq!(total, Some(5_000_050_000));
//! ```

use super::applicative::Applicative;
use super::higher::{OptionEffect, ResultEffect};
use super::identity::{Identity, IdentityEffect};
use crate::control::Either;

/// A type class for effect brands that support sequencing.
///
/// # Laws
///
/// See the [module documentation](self) for the monad laws and the
/// tail-recursion law every implementation must satisfy.
pub trait Monad: Applicative {
    /// Runs `effect`, feeds its payload to `function`, and runs the effect it
    /// returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::typeclass::{Monad, ResultEffect};
    ///
    /// let parsed = ResultEffect::<String>::flat_map(Ok("42"), |text: &str| {
    ///     text.parse::<i32>().map_err(|error| error.to_string())
    /// });
    /// assert_eq!(parsed, Ok(42));
    /// ```
    fn flat_map<A, B, F>(effect: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Self::Of<B> + Send + 'static;

    /// Repeats `step` until it yields `Either::Right`, threading the
    /// `Either::Left` state from one iteration to the next.
    ///
    /// Implementations must not recurse per iteration; this is the primitive
    /// that keeps computation evaluation stack-safe inside the effect.
    fn tail_rec_m<S, B, F>(initial: S, step: F) -> Self::Of<B>
    where
        S: Send + 'static,
        B: Send + 'static,
        F: FnMut(S) -> Self::Of<Either<S, B>> + Send + 'static;

    /// Sequences two effects, discarding the payload of the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::typeclass::{Monad, OptionEffect};
    ///
    /// assert_eq!(OptionEffect::then(Some(1), Some("next")), Some("next"));
    /// assert_eq!(OptionEffect::then(None::<i32>, Some("next")), None);
    /// ```
    #[inline]
    fn then<A, B>(first: Self::Of<A>, next: Self::Of<B>) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        Self::flat_map(first, move |_| next)
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

impl Monad for OptionEffect {
    #[inline]
    fn flat_map<A, B, F>(effect: Option<A>, function: F) -> Option<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Option<B> + Send + 'static,
    {
        effect.and_then(function)
    }

    fn tail_rec_m<S, B, F>(initial: S, mut step: F) -> Option<B>
    where
        S: Send + 'static,
        B: Send + 'static,
        F: FnMut(S) -> Option<Either<S, B>> + Send + 'static,
    {
        let mut state = initial;
        loop {
            match step(state)? {
                Either::Left(next) => state = next,
                Either::Right(done) => return Some(done),
            }
        }
    }
}

// =============================================================================
// Result Implementation
// =============================================================================

impl<E: Send + 'static> Monad for ResultEffect<E> {
    #[inline]
    fn flat_map<A, B, F>(effect: Result<A, E>, function: F) -> Result<B, E>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Result<B, E> + Send + 'static,
    {
        effect.and_then(function)
    }

    fn tail_rec_m<S, B, F>(initial: S, mut step: F) -> Result<B, E>
    where
        S: Send + 'static,
        B: Send + 'static,
        F: FnMut(S) -> Result<Either<S, B>, E> + Send + 'static,
    {
        let mut state = initial;
        loop {
            match step(state)? {
                Either::Left(next) => state = next,
                Either::Right(done) => return Ok(done),
            }
        }
    }
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Monad for IdentityEffect {
    #[inline]
    fn flat_map<A, B, F>(effect: Identity<A>, function: F) -> Identity<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Identity<B> + Send + 'static,
    {
        function(effect.into_inner())
    }

    fn tail_rec_m<S, B, F>(initial: S, mut step: F) -> Identity<B>
    where
        S: Send + 'static,
        B: Send + 'static,
        F: FnMut(S) -> Identity<Either<S, B>> + Send + 'static,
    {
        let mut state = initial;
        loop {
            match step(state).into_inner() {
                Either::Left(next) => state = next,
                Either::Right(done) => return Identity::new(done),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn count_down() -> impl FnMut(u64) -> Option<Either<u64, &'static str>> + Send + 'static {
        |remaining| {
            Some(if remaining == 0 {
                Either::Right("done")
            } else {
                Either::Left(remaining - 1)
            })
        }
    }

    #[rstest]
    fn option_left_identity() {
        let function = |n: i32| Some(n + 1);
        assert_eq!(
            OptionEffect::flat_map(OptionEffect::pure(1), function),
            function(1)
        );
    }

    #[rstest]
    #[case(Some(9))]
    #[case(None)]
    fn option_right_identity(#[case] value: Option<i32>) {
        assert_eq!(OptionEffect::flat_map(value, OptionEffect::pure), value);
    }

    #[rstest]
    fn option_tail_rec_m_runs_a_million_iterations() {
        assert_eq!(
            OptionEffect::tail_rec_m(1_000_000, count_down()),
            Some("done")
        );
    }

    #[rstest]
    fn option_tail_rec_m_stops_at_first_none() {
        let mut visited = 0;
        let result: Option<()> = OptionEffect::tail_rec_m(0, move |state: u32| {
            visited += 1;
            assert!(visited <= 4);
            if state == 3 { None } else { Some(Either::Left(state + 1)) }
        });
        assert_eq!(result, None);
    }

    #[rstest]
    fn result_tail_rec_m_propagates_error() {
        let result: Result<u32, String> = ResultEffect::<String>::tail_rec_m(0u32, |state| {
            if state == 10 {
                Err(format!("stopped at {state}"))
            } else {
                Ok(Either::Left(state + 1))
            }
        });
        assert_eq!(result, Err("stopped at 10".to_string()));
    }

    #[rstest]
    fn identity_flat_map_applies_immediately() {
        let result = IdentityEffect::flat_map(Identity::new(20), |n: i32| Identity::new(n + 22));
        assert_eq!(result, Identity::new(42));
    }

    #[rstest]
    fn identity_tail_rec_m_counts_to_target() {
        let result = IdentityEffect::tail_rec_m(0u64, |count| {
            Identity::new(if count == 250_000 {
                Either::Right(count)
            } else {
                Either::Left(count + 1)
            })
        });
        assert_eq!(result.into_inner(), 250_000);
    }

    #[rstest]
    fn result_then_discards_first_payload() {
        assert_eq!(ResultEffect::<()>::then(Ok(1), Ok(2)), Ok(2));
    }
}
