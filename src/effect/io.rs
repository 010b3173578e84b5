//! IO - deferred synchronous side effects.
//!
//! An `IO<A>` *describes* an action producing `A`; nothing happens until
//! [`IO::run_unsafe`] is called. Running consumes the action, so an `IO` is
//! not `Clone`. A computation over the [`IoEffect`] brand therefore lifts IO
//! actions with a factory
//! ([`intermediate_effect_with`](crate::computation::Computation::intermediate_effect_with))
//! or from a continuation such as
//! [`semiflat_map`](crate::computation::Computation::semiflat_map), and every
//! call to `evaluate` returns a fresh `IO` that re-enters each effect.
//!
//! # Examples
//!
//! ```rust
//! use bailout::computation::Computation;
//! use bailout::effect::{IO, IoEffect};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let executed = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&executed);
//!
//! let computation = Computation::<IoEffect, i32, i32>::intermediate_effect_with(move || {
//!     let counter = Arc::clone(&counter);
//!     IO::new(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!         20
//!     })
//! })
//! .map(|n| n + 22);
//!
//! let program = computation.evaluate();
//! // Not executed yet
//! assert_eq!(executed.load(Ordering::SeqCst), 0);
//!
//! assert_eq!(program.run_unsafe(), 42);
//! assert_eq!(computation.evaluate().run_unsafe(), 42);
//! assert_eq!(executed.load(Ordering::SeqCst), 2);
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::EffectError;
use crate::control::Either;
use crate::typeclass::{Applicative, Functor, Kind, Monad};

/// A deferred side effect producing a value of type `A`.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws up to the side effects it performs:
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    run_io: Box<dyn FnOnce() -> A + Send>,
}

impl<A: Send + 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run_unsafe` is called.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// Wraps a pure value in an IO action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Executes the IO action and returns the result.
    ///
    /// Named `run_unsafe` because it performs the described side effects;
    /// it is memory-safe.
    pub fn run_unsafe(self) -> A {
        (self.run_io)()
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::effect::IO;
    ///
    /// let io = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + Send + 'static,
        B: Send + 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Runs the action and captures a panic as [`EffectError::Panicked`]
    /// instead of unwinding.
    ///
    /// This is how a panicking effect becomes something a computation can
    /// branch on, for example with
    /// [`attempt_with_effect`](crate::computation::Computation::attempt_with_effect).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::effect::{EffectError, IO};
    ///
    /// let panicking = IO::<i32>::new(|| panic!("oops"));
    /// assert_eq!(
    ///     panicking.catch_unwind().run_unsafe(),
    ///     Err(EffectError::Panicked { message: "oops".to_string() })
    /// );
    ///
    /// assert_eq!(IO::pure(42).catch_unwind().run_unsafe(), Ok(42));
    /// ```
    pub fn catch_unwind(self) -> IO<Result<A, EffectError>> {
        IO::new(move || {
            catch_unwind(AssertUnwindSafe(|| self.run_unsafe()))
                .map_err(|payload| EffectError::from_panic(payload.as_ref()))
        })
    }
}

/// Brand for [`IO`].
///
/// `tail_rec_m` returns one action that loops when run, so a computation
/// over `IoEffect` evaluates in constant native stack however many effects
/// it enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IoEffect;

impl Kind for IoEffect {
    type Of<A: Send + 'static> = IO<A>;
}

impl Functor for IoEffect {
    fn map<A, B, F>(effect: IO<A>, function: F) -> IO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        effect.fmap(function)
    }
}

impl Applicative for IoEffect {
    fn pure<A: Send + 'static>(value: A) -> IO<A> {
        IO::pure(value)
    }
}

impl Monad for IoEffect {
    fn flat_map<A, B, F>(effect: IO<A>, function: F) -> IO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> IO<B> + Send + 'static,
    {
        effect.flat_map(function)
    }

    fn tail_rec_m<S, B, F>(initial: S, mut step: F) -> IO<B>
    where
        S: Send + 'static,
        B: Send + 'static,
        F: FnMut(S) -> IO<Either<S, B>> + Send + 'static,
    {
        IO::new(move || {
            let mut state = initial;
            loop {
                match step(state).run_unsafe() {
                    Either::Left(next) => state = next,
                    Either::Right(done) => return done,
                }
            }
        })
    }
}
