//! The public combinator surface.
//!
//! Every combinator here is a thin specialization of the crate-private
//! `compose` primitive (or of [`fold_m`](Computation::fold_m), which is
//! `compose` with the branch split in two). None of them runs anything: each
//! call adds a constant number of nodes to the tree.
//!
//! | Combinator            | On in-progress `a`                | On outcome `r` |
//! |-----------------------|-----------------------------------|----------------|
//! | `map(f)`              | in-progress `f(a)`                | unchanged      |
//! | `flat_map(f)`         | continue with `f(a)`              | unchanged      |
//! | `semiflat_map(f)`     | in-progress result of effect `f(a)` | unchanged    |
//! | `attempt(f)`          | branch on `f(a)`                  | unchanged      |
//! | `ensure(p, r2)`       | `a` if `p(&a)`, else outcome `r2` | unchanged      |
//! | `force_finish(f)`     | outcome `f(a)`                    | unchanged      |
//! | `observe(f)`          | `f(Right(&a))`, then `a`          | `f(Left(&r))`, then `r` |
//! | `fold_m(g, f)`        | `f(a)`                            | `g(r)`         |

use super::algebra::{Computation, Next};
use crate::control::Either;
use crate::typeclass::Monad;

impl<F: Monad, A: Send + 'static, R: Send + 'static> Computation<F, A, R> {
    /// Continues with one of two computations depending on the branch this
    /// one resolves to.
    ///
    /// This is the most general branching combinator; the rest of this
    /// module could be written in terms of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// let retried = Computation::<IdentityEffect, i32, &str>::outcome("timeout").fold_m(
    ///     |_reason| Computation::<IdentityEffect, i32, String>::intermediate(0),
    ///     |n| Computation::intermediate(n + 1),
    /// );
    /// assert_eq!(retried.resolve().into_inner().right(), Some(0));
    /// ```
    pub fn fold_m<B, S, OnOutcome, OnIntermediate>(
        self,
        on_outcome: OnOutcome,
        on_intermediate: OnIntermediate,
    ) -> Computation<F, B, S>
    where
        B: Send + 'static,
        S: Send + 'static,
        OnOutcome: Fn(R) -> Computation<F, B, S> + Send + Sync + 'static,
        OnIntermediate: Fn(A) -> Computation<F, B, S> + Send + Sync + 'static,
    {
        self.compose(move |branch| Next::Continue(branch.fold(&on_outcome, &on_intermediate)))
    }

    /// Transforms the in-progress value. Outcomes pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// let doubled = Computation::<IdentityEffect, i32, String>::intermediate(21).map(|n| n * 2);
    /// assert_eq!(doubled.resolve().into_inner().right(), Some(42));
    /// ```
    pub fn map<B, Transform>(self, transform: Transform) -> Computation<F, B, R>
    where
        B: Send + 'static,
        Transform: Fn(A) -> B + Send + Sync + 'static,
    {
        self.compose(move |branch| Next::Resolved(branch.map_right(&transform)))
    }

    /// Monadic bind: continues with the computation built from the
    /// in-progress value. Outcomes pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// fn halve(n: i32) -> Computation<IdentityEffect, i32, String> {
    ///     if n % 2 == 0 {
    ///         Computation::intermediate(n / 2)
    ///     } else {
    ///         Computation::outcome(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// let result = halve(12).flat_map(halve).flat_map(halve);
    /// assert_eq!(result.resolve().into_inner().left(), Some("3 is odd".to_string()));
    /// ```
    pub fn flat_map<B, Continue>(self, next: Continue) -> Computation<F, B, R>
    where
        B: Send + 'static,
        Continue: Fn(A) -> Computation<F, B, R> + Send + Sync + 'static,
    {
        self.compose(move |branch| match branch {
            Either::Left(outcome) => Next::Resolved(Either::Left(outcome)),
            Either::Right(value) => Next::Continue(next(value)),
        })
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<B, Continue>(self, next: Continue) -> Computation<F, B, R>
    where
        B: Send + 'static,
        Continue: Fn(A) -> Computation<F, B, R> + Send + Sync + 'static,
    {
        self.flat_map(next)
    }

    /// Like [`flat_map`](Self::flat_map) for a function that returns a bare
    /// effect; its value becomes the new in-progress value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::typeclass::OptionEffect;
    ///
    /// let lookup = |id: u32| if id == 7 { Some("seven") } else { None };
    ///
    /// let found = Computation::<OptionEffect, u32, String>::intermediate(7).semiflat_map(lookup);
    /// assert_eq!(found.resolve().map(|branch| branch.right()), Some(Some("seven")));
    ///
    /// let missing =
    ///     Computation::<OptionEffect, u32, String>::intermediate(8).semiflat_map(lookup);
    /// assert_eq!(missing.resolve(), None);
    /// ```
    pub fn semiflat_map<B, Enter>(self, enter: Enter) -> Computation<F, B, R>
    where
        B: Send + 'static,
        Enter: Fn(A) -> F::Of<B> + Send + Sync + 'static,
    {
        self.compose(move |branch| match branch {
            Either::Left(outcome) => Next::Resolved(Either::Left(outcome)),
            Either::Right(value) => Next::Enter(F::map(enter(value), Either::<R, B>::Right)),
        })
    }

    /// Sequences `next` after this computation, discarding the in-progress
    /// value. `next` is skipped if this computation short-circuits.
    pub fn then<B: Send + 'static>(self, next: Computation<F, B, R>) -> Computation<F, B, R> {
        self.flat_map(move |_| next.clone())
    }

    /// Applies `decide` and branches on its answer: `Left(r)` finishes with
    /// `r`, `Right(b)` continues with `b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::control::Either;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// let parse = |text: &'static str| {
    ///     Computation::<IdentityEffect, &str, String>::intermediate(text).attempt(|text| {
    ///         Either::<String, i32>::from(
    ///             text.parse::<i32>().map_err(|_| format!("not a number: {text}")),
    ///         )
    ///     })
    /// };
    ///
    /// assert_eq!(parse("12").resolve().into_inner(), Either::Right(12));
    /// assert_eq!(
    ///     parse("x").resolve().into_inner(),
    ///     Either::Left("not a number: x".to_string())
    /// );
    /// ```
    pub fn attempt<B, Decide>(self, decide: Decide) -> Computation<F, B, R>
    where
        B: Send + 'static,
        Decide: Fn(A) -> Either<R, B> + Send + Sync + 'static,
    {
        self.compose(move |branch| match branch {
            Either::Left(outcome) => Next::Resolved(Either::Left(outcome)),
            Either::Right(value) => Next::Resolved(decide(value)),
        })
    }

    /// Effectful [`attempt`](Self::attempt): the decision is produced by an
    /// effect, which is entered only when the computation is still in
    /// progress.
    pub fn attempt_with_effect<B, Decide>(self, decide: Decide) -> Computation<F, B, R>
    where
        B: Send + 'static,
        Decide: Fn(A) -> F::Of<Either<R, B>> + Send + Sync + 'static,
    {
        self.compose(move |branch| match branch {
            Either::Left(outcome) => Next::Resolved(Either::Left(outcome)),
            Either::Right(value) => Next::Enter(decide(value)),
        })
    }

    /// Keeps the in-progress value if `predicate` accepts it, otherwise
    /// finishes with `otherwise`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// let check = |n: i32| {
    ///     Computation::<IdentityEffect, i32, String>::intermediate(n)
    ///         .ensure(|n| *n > 0, "negative".to_string())
    ///         .map(|n| n.to_string())
    ///         .evaluate()
    ///         .into_inner()
    /// };
    ///
    /// assert_eq!(check(5), "5");
    /// assert_eq!(check(-5), "negative");
    /// ```
    pub fn ensure<Predicate>(self, predicate: Predicate, otherwise: R) -> Self
    where
        R: Clone + Sync,
        Predicate: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.attempt(move |value| {
            if predicate(&value) {
                Either::Right(value)
            } else {
                Either::Left(otherwise.clone())
            }
        })
    }

    /// Like [`ensure`](Self::ensure), but the outcome is built from the
    /// rejected value.
    pub fn ensure_or<Predicate, Otherwise>(self, predicate: Predicate, otherwise: Otherwise) -> Self
    where
        Predicate: Fn(&A) -> bool + Send + Sync + 'static,
        Otherwise: Fn(A) -> R + Send + Sync + 'static,
    {
        self.attempt(move |value| {
            if predicate(&value) {
                Either::Right(value)
            } else {
                Either::Left(otherwise(value))
            }
        })
    }

    /// Like [`ensure`](Self::ensure), but the outcome comes from an effect
    /// that is entered only on rejection.
    pub fn ensure_with_effect<Predicate>(self, predicate: Predicate, otherwise: F::Of<R>) -> Self
    where
        F::Of<R>: Clone + Sync,
        Predicate: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.ensure_or_with_effect(predicate, move |_| otherwise.clone())
    }

    /// Like [`ensure_or`](Self::ensure_or), but the outcome comes from an
    /// effect built from the rejected value.
    pub fn ensure_or_with_effect<Predicate, Otherwise>(
        self,
        predicate: Predicate,
        otherwise: Otherwise,
    ) -> Self
    where
        Predicate: Fn(&A) -> bool + Send + Sync + 'static,
        Otherwise: Fn(A) -> F::Of<R> + Send + Sync + 'static,
    {
        self.compose(move |branch| match branch {
            Either::Right(value) if predicate(&value) => Next::Resolved(Either::Right(value)),
            Either::Right(value) => Next::Enter(F::map(otherwise(value), Either::<R, A>::Left)),
            Either::Left(outcome) => Next::Resolved(Either::Left(outcome)),
        })
    }

    /// Moves the branch into the in-progress value, so generic code can
    /// inspect it. [`collapse_branch`](Computation::collapse_branch) undoes
    /// this.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::control::Either;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// let reified = Computation::<IdentityEffect, i32, &str>::outcome("stop").reify_branch();
    /// assert_eq!(reified.resolve().into_inner(), Either::Right(Either::Left("stop")));
    /// ```
    pub fn reify_branch(self) -> Computation<F, Either<R, A>, R> {
        self.compose(|branch| Next::Resolved(Either::Right(branch)))
    }

    /// Runs `inspect` on the current branch, then continues with the branch
    /// unchanged.
    ///
    /// `inspect` runs exactly once per evaluation and never before it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use bailout::computation::Computation;
    /// use bailout::control::Either;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// let log = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&log);
    ///
    /// let computation = Computation::<IdentityEffect, i32, String>::intermediate(3).observe(
    ///     move |branch| {
    ///         let line = match branch {
    ///             Either::Left(outcome) => format!("finished: {outcome}"),
    ///             Either::Right(value) => format!("working on {value}"),
    ///         };
    ///         sink.lock().unwrap().push(line);
    ///     },
    /// );
    ///
    /// assert!(log.lock().unwrap().is_empty());
    /// assert_eq!(computation.resolve().into_inner(), Either::Right(3));
    /// assert_eq!(*log.lock().unwrap(), vec!["working on 3".to_string()]);
    /// ```
    pub fn observe<Inspect>(self, inspect: Inspect) -> Self
    where
        Inspect: Fn(Either<&R, &A>) + Send + Sync + 'static,
    {
        self.compose(move |branch| {
            inspect(branch.as_ref());
            Next::Resolved(branch)
        })
    }

    /// Like [`observe`](Self::observe), but the side effect is an effect
    /// value that is sequenced before the branch is restored. A failure of
    /// that effect fails the evaluation.
    pub fn observe_with_effect<Inspect>(self, inspect: Inspect) -> Self
    where
        Inspect: Fn(Either<&R, &A>) -> F::Of<()> + Send + Sync + 'static,
    {
        self.compose(move |branch| {
            let side_effect = inspect(branch.as_ref());
            Next::Enter(F::map(side_effect, move |()| branch))
        })
    }

    /// Finishes unconditionally, turning an in-progress value into an
    /// outcome with `finish`.
    pub fn force_finish<Finish>(self, finish: Finish) -> Self
    where
        Finish: Fn(A) -> R + Send + Sync + 'static,
    {
        self.compose(move |branch| {
            Next::Resolved(Either::Left(branch.fold(|outcome| outcome, &finish)))
        })
    }

    /// Effectful [`force_finish`](Self::force_finish).
    pub fn force_finish_with_effect<Finish>(self, finish: Finish) -> Self
    where
        Finish: Fn(A) -> F::Of<R> + Send + Sync + 'static,
    {
        self.compose(move |branch| match branch {
            Either::Left(outcome) => Next::Resolved(Either::Left(outcome)),
            Either::Right(value) => Next::Enter(F::map(finish(value), Either::<R, A>::Left)),
        })
    }

    /// Converts the outcome type into a wider one, so that computations with
    /// different outcome types can be joined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct NotFound;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Response {
    ///     Missing(NotFound),
    ///     Name(String),
    /// }
    ///
    /// impl From<NotFound> for Response {
    ///     fn from(reason: NotFound) -> Self {
    ///         Response::Missing(reason)
    ///     }
    /// }
    ///
    /// impl From<String> for Response {
    ///     fn from(name: String) -> Self {
    ///         Response::Name(name)
    ///     }
    /// }
    ///
    /// let lookup = Computation::<IdentityEffect, String, NotFound>::outcome(NotFound);
    /// let response = lookup.widen::<Response>().evaluate().into_inner();
    /// assert_eq!(response, Response::Missing(NotFound));
    /// ```
    pub fn widen<S>(self) -> Computation<F, A, S>
    where
        S: Send + 'static,
        R: Into<S>,
    {
        self.compose(|branch| Next::Resolved(branch.map_left(Into::into)))
    }

    /// Runs `effect` and continues with its value if present, or finishes
    /// with `otherwise` if it is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::typeclass::{Identity, IdentityEffect};
    ///
    /// let greeting = Computation::<IdentityEffect, String, String>::value_or(
    ///     Identity(None),
    ///     "nobody home".to_string(),
    /// )
    /// .map(|name| format!("hello, {name}"));
    ///
    /// assert_eq!(greeting.evaluate().into_inner(), "nobody home");
    /// ```
    pub fn value_or(effect: F::Of<Option<A>>, otherwise: R) -> Self
    where
        F::Of<Option<A>>: Clone + Sync,
        R: Clone + Sync,
    {
        Computation::<F, Option<A>, R>::intermediate_effect(effect).attempt(move |found| {
            found.map_or_else(|| Either::Left(otherwise.clone()), Either::Right)
        })
    }

    /// Like [`value_or`](Self::value_or), but the outcome for an absent value
    /// comes from an effect that is entered only in that case.
    pub fn value_or_with_effect(effect: F::Of<Option<A>>, otherwise: F::Of<R>) -> Self
    where
        F::Of<Option<A>>: Clone + Sync,
        F::Of<R>: Clone + Sync,
    {
        Computation::<F, Option<A>, R>::intermediate_effect(effect).compose(move |found| {
            match found {
                Either::Right(Some(value)) => Next::Resolved(Either::Right(value)),
                Either::Right(None) => {
                    Next::Enter(F::map(otherwise.clone(), Either::<R, A>::Left))
                }
                Either::Left(outcome) => Next::Resolved(Either::Left(outcome)),
            }
        })
    }
}

impl<F: Monad, A: Send + 'static, R: Send + 'static> Computation<F, Either<R, A>, R> {
    /// Turns an in-progress `Either<R, A>` back into a branch: `Left(r)`
    /// finishes with `r`, `Right(a)` continues with `a`.
    ///
    /// Inverse of [`reify_branch`](Computation::reify_branch).
    pub fn collapse_branch(self) -> Computation<F, A, R> {
        self.attempt(|branch| branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, IdentityEffect, OptionEffect, ResultEffect};
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Subject = Computation<IdentityEffect, i32, String>;

    fn branch_of<A>(computation: &Computation<IdentityEffect, A, String>) -> Either<String, A>
    where
        A: Send + 'static,
    {
        computation.resolve().into_inner()
    }

    fn call_counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        (count, counter)
    }

    #[rstest]
    #[case(Subject::intermediate(2), Either::Right(20))]
    #[case(Subject::outcome("stop".to_string()), Either::Left("stop".to_string()))]
    fn fold_m_dispatches_on_branch(
        #[case] subject: Subject,
        #[case] expected: Either<String, i32>,
    ) {
        let folded =
            subject.fold_m(Computation::outcome, |value| Computation::intermediate(value * 10));
        assert_eq!(branch_of(&folded), expected);
    }

    #[rstest]
    fn fold_m_can_recover_from_outcome() {
        let recovered = Subject::outcome("stop".to_string())
            .fold_m(|_| Subject::intermediate(-1), Subject::intermediate);
        assert_eq!(branch_of(&recovered), Either::Right(-1));
    }

    #[rstest]
    fn map_skips_transform_after_outcome() {
        let (calls, counter) = call_counter();
        let mapped = Subject::outcome("done".to_string()).map(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            n + 1
        });

        assert_eq!(branch_of(&mapped), Either::Left("done".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn map_runs_once_per_evaluation() {
        let (calls, counter) = call_counter();
        let mapped = Subject::intermediate(1).map(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            n + 1
        });

        assert_eq!(branch_of(&mapped), Either::Right(2));
        assert_eq!(branch_of(&mapped), Either::Right(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn and_then_matches_flat_map() {
        let double = |n: i32| Subject::intermediate(n * 2);
        assert_eq!(
            branch_of(&Subject::intermediate(4).and_then(double)),
            branch_of(&Subject::intermediate(4).flat_map(double))
        );
    }

    #[rstest]
    fn then_discards_in_progress_value() {
        let sequenced = Subject::intermediate(1).then(Computation::intermediate("next"));
        assert_eq!(branch_of(&sequenced), Either::Right("next"));
    }

    #[rstest]
    fn then_is_skipped_after_outcome() {
        let sequenced =
            Subject::outcome("early".to_string()).then(Computation::intermediate("next"));
        assert_eq!(branch_of(&sequenced), Either::Left("early".to_string()));
    }

    #[rstest]
    fn semiflat_map_enters_effect() {
        let computation = Computation::<ResultEffect<&str>, i32, String>::intermediate(2)
            .semiflat_map(|n| Ok(n + 1))
            .semiflat_map(|n| if n > 10 { Ok(n) } else { Err("too small") });
        assert_eq!(computation.resolve(), Err("too small"));
    }

    #[rstest]
    #[case(4, Either::Right(4))]
    #[case(-4, Either::Left("negative: -4".to_string()))]
    fn ensure_or_builds_outcome_from_value(
        #[case] input: i32,
        #[case] expected: Either<String, i32>,
    ) {
        let checked =
            Subject::intermediate(input).ensure_or(|n| *n >= 0, |n| format!("negative: {n}"));
        assert_eq!(branch_of(&checked), expected);
    }

    #[rstest]
    fn ensure_with_effect_enters_effect_only_on_rejection() {
        let accepted = Computation::<OptionEffect, i32, String>::intermediate(1)
            .ensure_with_effect(|n| *n > 0, None);
        assert_eq!(accepted.resolve(), Some(Either::Right(1)));

        let rejected = Computation::<OptionEffect, i32, String>::intermediate(-1)
            .ensure_with_effect(|n| *n > 0, Some("negative".to_string()));
        assert_eq!(rejected.resolve(), Some(Either::Left("negative".to_string())));
    }

    #[rstest]
    fn ensure_or_with_effect_uses_rejected_value() {
        let rejected = Computation::<OptionEffect, i32, String>::intermediate(-3)
            .ensure_or_with_effect(|n| *n > 0, |n| Some(format!("rejected {n}")));
        assert_eq!(rejected.resolve(), Some(Either::Left("rejected -3".to_string())));
    }

    #[rstest]
    #[case(Some(Either::Right(5)), Some(Either::Right(5)))]
    #[case(Some(Either::Left("no".to_string())), Some(Either::Left("no".to_string())))]
    #[case(None, None)]
    fn attempt_with_effect_branches_on_effect_value(
        #[case] decision: Option<Either<String, i32>>,
        #[case] expected: Option<Either<String, i32>>,
    ) {
        let computation = Computation::<OptionEffect, (), String>::intermediate(())
            .attempt_with_effect(move |()| decision.clone());
        assert_eq!(computation.resolve(), expected);
    }

    #[rstest]
    fn reify_then_collapse_restores_branch() {
        let round_trip = Subject::intermediate(9).reify_branch().collapse_branch();
        assert_eq!(branch_of(&round_trip), Either::Right(9));

        let round_trip = Subject::outcome("r".to_string()).reify_branch().collapse_branch();
        assert_eq!(branch_of(&round_trip), Either::Left("r".to_string()));
    }

    #[rstest]
    fn observe_sees_outcome_branch_once() {
        let (calls, counter) = call_counter();
        let observed = Subject::outcome("seen".to_string()).observe(move |branch| {
            assert_eq!(branch, Either::Left(&"seen".to_string()));
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(branch_of(&observed), Either::Left("seen".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn observe_with_effect_failure_fails_evaluation() {
        let observed = Computation::<OptionEffect, i32, String>::intermediate(1)
            .observe_with_effect(|_| None);
        assert_eq!(observed.resolve(), None);

        let observed = Computation::<OptionEffect, i32, String>::intermediate(1)
            .observe_with_effect(|_| Some(()));
        assert_eq!(observed.resolve(), Some(Either::Right(1)));
    }

    #[rstest]
    fn force_finish_keeps_existing_outcome() {
        let finished = Subject::outcome("first".to_string()).force_finish(|n| format!("late {n}"));
        assert_eq!(branch_of(&finished), Either::Left("first".to_string()));

        let finished = Subject::intermediate(3).force_finish(|n| format!("late {n}"));
        assert_eq!(branch_of(&finished), Either::Left("late 3".to_string()));
    }

    #[rstest]
    fn force_finish_with_effect_uses_effect_value() {
        let finished = Computation::<OptionEffect, i32, String>::intermediate(3)
            .force_finish_with_effect(|n| Some(n.to_string()));
        assert_eq!(finished.resolve(), Some(Either::Left("3".to_string())));
    }

    #[rstest]
    fn widen_converts_outcome_only() {
        let widened = Computation::<IdentityEffect, i32, &str>::outcome("narrow").widen::<String>();
        assert_eq!(branch_of(&widened), Either::Left("narrow".to_string()));
    }

    #[rstest]
    fn value_or_with_effect_is_skipped_when_present() {
        let found =
            Computation::<OptionEffect, i32, String>::value_or_with_effect(Some(Some(1)), None);
        assert_eq!(found.resolve(), Some(Either::Right(1)));

        let missing = Computation::<OptionEffect, i32, String>::value_or_with_effect(
            Some(None),
            Some("absent".to_string()),
        );
        assert_eq!(missing.resolve(), Some(Either::Left("absent".to_string())));
    }

    #[rstest]
    fn value_or_present_value_continues() {
        let found = Subject::value_or(Identity(Some(8)), "missing".to_string()).map(|n| n + 1);
        assert_eq!(branch_of(&found), Either::Right(9));
    }

    #[rstest]
    fn ensure_rebuilds_outcome_on_every_evaluation() {
        let rejected = Subject::intermediate(-1).ensure(|n| *n > 0, "negative".to_string());
        assert_eq!(branch_of(&rejected), Either::Left("negative".to_string()));
        assert_eq!(branch_of(&rejected), Either::Left("negative".to_string()));
    }
}
