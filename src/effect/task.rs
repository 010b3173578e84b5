//! Asynchronous effect over boxed futures.
//!
//! With [`AsyncEffect`], every effect of a computation is a
//! [`BoxFuture`] and `evaluate` returns one future for the whole tree.
//! Futures cannot be cloned, so they are lifted with
//! [`intermediate_effect_with`](crate::computation::Computation::intermediate_effect_with)
//! or produced by continuations. The evaluator loop runs inside the returned
//! future, so awaiting it walks arbitrarily long chains without growing the
//! native stack.
//!
//! # Examples
//!
//! ```rust
//! use bailout::computation::Computation;
//! use bailout::effect::AsyncEffect;
//! use futures::FutureExt;
//!
//! let computation =
//!     Computation::<AsyncEffect, u32, u32>::intermediate_effect_with(|| async { 20 }.boxed())
//!         .semiflat_map(|n| async move { n + 1 }.boxed())
//!         .map(|n| n * 2);
//!
//! assert_eq!(futures::executor::block_on(computation.evaluate()), 42);
//! // Each evaluation is a new future.
//! assert_eq!(futures::executor::block_on(computation.evaluate()), 42);
//! ```

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::control::Either;
use crate::typeclass::{Applicative, Functor, Kind, Monad};

/// Brand for `BoxFuture<'static, A>`.
///
/// The core never spawns or schedules; driving the returned future is the
/// caller's executor's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AsyncEffect;

impl Kind for AsyncEffect {
    type Of<A: Send + 'static> = BoxFuture<'static, A>;
}

impl Functor for AsyncEffect {
    fn map<A, B, F>(effect: BoxFuture<'static, A>, function: F) -> BoxFuture<'static, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        effect.map(function).boxed()
    }
}

impl Applicative for AsyncEffect {
    fn pure<A: Send + 'static>(value: A) -> BoxFuture<'static, A> {
        futures::future::ready(value).boxed()
    }
}

impl Monad for AsyncEffect {
    fn flat_map<A, B, F>(effect: BoxFuture<'static, A>, function: F) -> BoxFuture<'static, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> BoxFuture<'static, B> + Send + 'static,
    {
        effect.then(function).boxed()
    }

    fn tail_rec_m<S, B, F>(initial: S, mut step: F) -> BoxFuture<'static, B>
    where
        S: Send + 'static,
        B: Send + 'static,
        F: FnMut(S) -> BoxFuture<'static, Either<S, B>> + Send + 'static,
    {
        async move {
            let mut state = initial;
            loop {
                match step(state).await {
                    Either::Left(next) => state = next,
                    Either::Right(done) => return done,
                }
            }
        }
        .boxed()
    }
}
