//! Stack-safe evaluation of computation trees.
//!
//! The evaluator is a small abstract machine. Its state is a cursor (a shared
//! node still to walk, a branch already known, or a fresh effect to enter)
//! plus a stack of pending continuations:
//!
//! ```text
//! cursor                pending (top last)    action
//! ------------------    ------------------    ------------------------------
//! Compose(src, k)       ks                    cursor = src, push k
//! Deferred(thunk)       ks                    cursor = thunk()
//! Pure*(v)              ks                    cursor = branch v
//! Effect*(fv)           ks                    cursor = fresh effect fv
//! branch b              ks ++ [k]             cursor = k(b)
//! branch b              []                    resolved: F::pure(b)
//! fresh effect e        ks                    suspend: F::map(e, resume)
//! ```
//!
//! The pending stack is the re-associated right spine of the tree: for
//! `Compose(Compose(inner, k0), k)` the machine pushes `k`, then `k0`, and
//! continues with `inner`, which is the rewrite
//! `Compose(inner, x -> Compose(k0(x), k))` with the composed continuation
//! kept as a list instead of a nest of closures. Every iteration therefore
//! peels exactly one layer and the native stack never grows with the depth of
//! the tree.
//!
//! The tree itself is only read. Nodes are shared behind `Arc` and pushed
//! continuations are `Arc` clones, so walking a tree leaves it intact for the
//! next evaluation.
//!
//! Effects are the only suspension points. When the machine meets one it
//! hands its remaining state to the effect via `Functor::map`, and
//! `Monad::tail_rec_m` feeds the resumed state back into the loop. Each
//! effect implements `tail_rec_m` iteratively, so the whole evaluation runs
//! in constant native stack for every built-in effect.

use std::sync::Arc;

use smallvec::SmallVec;

use super::algebra::{Computation, Continuation, Cursor, Node, Resolution, reveal};
use crate::control::Either;
use crate::typeclass::{Kind, Monad};

const CONTINUATION_INLINE_CAPACITY: usize = 8;

/// Loop state threaded through `tail_rec_m`: what to examine next and the
/// machine holding the pending continuations.
type Step<F> = (Cursor<F>, Machine<F>);

struct Machine<F: Kind> {
    pending: SmallVec<[Continuation<F>; CONTINUATION_INLINE_CAPACITY]>,
    #[cfg(feature = "tracing")]
    steps: usize,
    #[cfg(feature = "tracing")]
    suspensions: usize,
}

impl<F: Monad> Machine<F> {
    fn new() -> Self {
        Self {
            pending: SmallVec::new(),
            #[cfg(feature = "tracing")]
            steps: 0,
            #[cfg(feature = "tracing")]
            suspensions: 0,
        }
    }

    /// Runs pure steps from `cursor` until the tree resolves or an effect
    /// must be entered.
    fn run(mut self, mut cursor: Cursor<F>) -> F::Of<Either<Step<F>, Resolution>> {
        loop {
            #[cfg(feature = "tracing")]
            {
                self.steps += 1;
            }
            let branch = match cursor {
                Cursor::Resolved(branch) => branch,
                Cursor::Suspended(effect) => return self.suspend(effect),
                Cursor::Tree(node) => match &*node {
                    Node::PureIntermediate(produce) => Either::Right(produce()),
                    Node::PureOutcome(produce) => Either::Left(produce()),
                    Node::EffectIntermediate(enter) | Node::EffectOutcome(enter) => {
                        return self.suspend(enter());
                    }
                    Node::Deferred(thunk) => {
                        cursor = Cursor::Tree(thunk());
                        continue;
                    }
                    Node::Compose(source, continuation) => {
                        let source = source
                            .as_ref()
                            .expect("compose source is only detached while the node is dropped");
                        self.pending.push(Arc::clone(continuation));
                        cursor = Cursor::Tree(Arc::clone(source));
                        continue;
                    }
                },
            };

            match self.pending.pop() {
                Some(continuation) => cursor = continuation(branch),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        steps = self.steps,
                        suspensions = self.suspensions,
                        branch = if branch.is_left() { "outcome" } else { "intermediate" },
                        "computation resolved"
                    );
                    return F::pure(Either::Right(branch));
                }
            }
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_mut))]
    fn suspend(mut self, effect: F::Of<Resolution>) -> F::Of<Either<Step<F>, Resolution>> {
        #[cfg(feature = "tracing")]
        {
            self.suspensions += 1;
            tracing::trace!(
                pending = self.pending.len(),
                suspensions = self.suspensions,
                "entering effect"
            );
        }
        F::map(effect, move |branch| Either::Left((Cursor::Resolved(branch), self)))
    }
}

/// Drives `root` to a single effect value holding the erased branch it
/// resolved to.
pub(crate) fn resolve<F: Monad>(root: Arc<Node<F>>) -> F::Of<Resolution> {
    F::tail_rec_m((Cursor::Tree(root), Machine::new()), |(cursor, machine): Step<F>| {
        machine.run(cursor)
    })
}

impl<F: Monad, A: Send + 'static, R: Send + 'static> Computation<F, A, R> {
    /// Evaluates the computation, returning the branch it ended in.
    ///
    /// `Left(r)` means the computation short-circuited with outcome `r`;
    /// `Right(a)` means every step ran and `a` is the last in-progress value.
    /// Use this instead of [`evaluate`](Self::evaluate) when `A` is not an
    /// outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::control::Either;
    /// use bailout::typeclass::OptionEffect;
    ///
    /// let computation = Computation::<OptionEffect, i32, String>::intermediate_effect(Some(20))
    ///     .map(|n| n + 1)
    ///     .semiflat_map(|n| Some(n * 2));
    /// assert_eq!(computation.resolve(), Some(Either::Right(42)));
    ///
    /// let failing = Computation::<OptionEffect, i32, String>::intermediate_effect(None);
    /// assert_eq!(failing.resolve(), None);
    /// ```
    pub fn resolve(&self) -> F::Of<Either<R, A>> {
        F::map(resolve(Arc::clone(&self.node)), |branch: Resolution| {
            branch.map_left(reveal::<R>).map_right(reveal::<A>)
        })
    }

    /// Evaluates the computation to its outcome.
    ///
    /// The in-progress type must convert into the outcome type: when every
    /// step succeeds, the last in-progress value *is* the outcome.
    ///
    /// The computation is not consumed. Evaluating it again walks the same
    /// tree from the start and re-enters every effect on the way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// enum Reply {
    ///     Total(u32),
    ///     Empty,
    /// }
    ///
    /// impl From<u32> for Reply {
    ///     fn from(total: u32) -> Self {
    ///         Reply::Total(total)
    ///     }
    /// }
    ///
    /// let reply = Computation::<IdentityEffect, Vec<u32>, Reply>::intermediate(vec![1, 2, 3])
    ///     .ensure(|items| !items.is_empty(), Reply::Empty)
    ///     .map(|items| items.iter().sum::<u32>());
    /// assert_eq!(reply.evaluate().into_inner(), Reply::Total(6));
    /// assert_eq!(reply.evaluate().into_inner(), Reply::Total(6));
    /// ```
    pub fn evaluate(&self) -> F::Of<R>
    where
        A: Into<R>,
    {
        F::map(self.resolve(), |branch| branch.fold(|outcome| outcome, Into::into))
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use crate::computation::Computation;
    use crate::typeclass::OptionEffect;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn resolution_is_traced() {
        let computation = Computation::<OptionEffect, i32, i32>::intermediate_effect(Some(1))
            .map(|n| n + 1);
        assert_eq!(computation.evaluate(), Some(2));

        assert!(logs_contain("entering effect"));
        assert!(logs_contain("computation resolved"));
    }
}
