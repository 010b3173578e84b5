//! Lifting common effect shapes into a [`Computation`].
//!
//! These functions only convert shapes; each one delegates to a constructor
//! or combinator on [`Computation`]. Like the constructors they delegate to,
//! they keep the effect value and enter a clone of it on every evaluation,
//! so the effect value must be `Clone + Sync`. Effects that cannot be cloned
//! are lifted with [`Computation::intermediate_effect_with`] and then shaped
//! with [`attempt`](Computation::attempt).
//!
//! # Examples
//!
//! ```rust
//! use bailout::computation::adapters;
//! use bailout::control::Either;
//! use bailout::typeclass::OptionEffect;
//!
//! let parsed = adapters::from_result::<OptionEffect, i32, String>(Some(Err("bad".to_string())));
//! assert_eq!(parsed.resolve(), Some(Either::Left("bad".to_string())));
//!
//! let failed = adapters::from_result::<OptionEffect, i32, String>(None);
//! assert_eq!(failed.resolve(), None);
//! ```

use super::algebra::Computation;
use crate::control::Either;
use crate::typeclass::{Functor, Monad};

/// Continues with the value the effect finds, or finishes with `otherwise`.
///
/// See [`Computation::value_or`].
pub fn from_option<F, A, R>(effect: F::Of<Option<A>>, otherwise: R) -> Computation<F, A, R>
where
    F: Monad,
    F::Of<Option<A>>: Clone + Sync,
    A: Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    Computation::value_or(effect, otherwise)
}

/// Like [`from_option`], with the outcome for an absent value produced by an
/// effect.
pub fn from_option_with_effect<F, A, R>(
    effect: F::Of<Option<A>>,
    otherwise: F::Of<R>,
) -> Computation<F, A, R>
where
    F: Monad,
    F::Of<Option<A>>: Clone + Sync,
    F::Of<R>: Clone + Sync,
    A: Send + 'static,
    R: Send + 'static,
{
    Computation::value_or_with_effect(effect, otherwise)
}

/// Branches on the `Either` the effect produces: `Left` finishes, `Right`
/// continues.
///
/// # Examples
///
/// ```rust
/// use bailout::computation::adapters;
/// use bailout::control::Either;
/// use bailout::typeclass::{Identity, IdentityEffect};
///
/// let computation =
///     adapters::from_either::<IdentityEffect, i32, &str>(Identity(Either::Left("early")));
/// assert_eq!(computation.resolve().into_inner(), Either::Left("early"));
/// ```
pub fn from_either<F, A, R>(effect: F::Of<Either<R, A>>) -> Computation<F, A, R>
where
    F: Monad,
    F::Of<Either<R, A>>: Clone + Sync,
    A: Send + 'static,
    R: Send + 'static,
{
    Computation::<F, Either<R, A>, R>::intermediate_effect(effect).attempt(|branch| branch)
}

/// Branches on the `Result` the effect produces: `Err` finishes, `Ok`
/// continues.
///
/// The `Err` arm is a domain outcome here, not an effect-level failure; use
/// [`ResultEffect`](crate::typeclass::ResultEffect) for the latter.
pub fn from_result<F, A, R>(effect: F::Of<Result<A, R>>) -> Computation<F, A, R>
where
    F: Monad,
    F::Of<Result<A, R>>: Clone + Sync,
    A: Send + 'static,
    R: Send + 'static,
{
    Computation::<F, Result<A, R>, R>::intermediate_effect(effect).attempt(Either::from)
}

/// Wraps an effect producing an in-progress value.
pub fn from_effect<F, A, R>(effect: F::Of<A>) -> Computation<F, A, R>
where
    F: Functor,
    F::Of<A>: Clone + Sync,
    A: Send + 'static,
    R: Send + 'static,
{
    Computation::intermediate_effect(effect)
}

/// Wraps an effect producing an outcome.
pub fn from_outcome_effect<F, A, R>(effect: F::Of<R>) -> Computation<F, A, R>
where
    F: Functor,
    F::Of<R>: Clone + Sync,
    A: Send + 'static,
    R: Send + 'static,
{
    Computation::outcome_effect(effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, IdentityEffect, OptionEffect};
    use rstest::rstest;

    #[rstest]
    #[case(Identity(Some(3)), Either::Right(3))]
    #[case(Identity(None), Either::Left("missing"))]
    fn from_option_branches_on_presence(
        #[case] effect: Identity<Option<i32>>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        let computation = from_option::<IdentityEffect, _, _>(effect, "missing");
        assert_eq!(computation.resolve().into_inner(), expected);
    }

    #[rstest]
    fn from_option_with_effect_propagates_effect_failure() {
        let computation = from_option_with_effect::<OptionEffect, i32, String>(Some(None), None);
        assert_eq!(computation.resolve(), None);
    }

    #[rstest]
    #[case(Some(Ok(1)), Some(Either::Right(1)))]
    #[case(Some(Err("no")), Some(Either::Left("no")))]
    #[case(None, None)]
    fn from_result_treats_err_as_outcome(
        #[case] effect: Option<Result<i32, &'static str>>,
        #[case] expected: Option<Either<&'static str, i32>>,
    ) {
        assert_eq!(from_result::<OptionEffect, _, _>(effect).resolve(), expected);
    }

    #[rstest]
    fn from_either_keeps_right_in_progress() {
        let computation =
            from_either::<OptionEffect, i32, String>(Some(Either::Right(4))).map(|n| n * 2);
        assert_eq!(computation.resolve(), Some(Either::Right(8)));
    }

    #[rstest]
    fn direct_wrappers_keep_their_branch() {
        let running = from_effect::<OptionEffect, i32, String>(Some(1));
        assert_eq!(running.resolve(), Some(Either::Right(1)));

        let finished = from_outcome_effect::<OptionEffect, i32, String>(Some("done".to_string()));
        assert_eq!(finished.resolve(), Some(Either::Left("done".to_string())));
    }
}
