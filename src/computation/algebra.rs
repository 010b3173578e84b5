//! The node vocabulary of a computation.
//!
//! A computation tree is built from six node shapes:
//!
//! ```text
//! Node = PureIntermediate(a)      -- in progress, no effect needed
//!      | PureOutcome(r)           -- already short-circuited
//!      | EffectIntermediate(F<a>) -- in progress once the effect runs
//!      | EffectOutcome(F<r>)      -- short-circuited once the effect runs
//!      | Deferred(() -> Node)     -- sub-tree built on demand
//!      | Compose(Node, k)         -- bind `k` over the branch of a source
//! ```
//!
//! Nodes are immutable and shared behind `Arc`. A node never hands out the
//! value it was built with; it stores a producer that yields a fresh copy (or
//! a fresh effect value) every time the evaluator reaches it, so one tree can
//! be evaluated any number of times, from any number of threads.
//!
//! Payloads are stored type-erased so that a single `Compose` node can join a
//! source and a continuation with unrelated payload types. The typed
//! [`Computation`] wrapper is the only way to build nodes and it restores the
//! declared types at every boundary, which is why [`reveal`] cannot fail for
//! a tree built through the public API.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::control::Either;
use crate::typeclass::{Functor, IdentityEffect, Kind, OptionEffect};

/// A payload whose concrete type is known only to the typed layer.
pub(crate) type Erased = Box<dyn Any + Send>;

/// A resolved branch with both arms still erased (`Left` = outcome,
/// `Right` = in progress).
pub(crate) type Resolution = Either<Erased, Erased>;

/// Yields a fresh copy of a stored pure payload.
pub(crate) type Produce = Box<dyn Fn() -> Erased + Send + Sync>;

/// Builds a fresh, not yet entered effect value for an effect node.
pub(crate) type Enter<F> = Box<dyn Fn() -> <F as Kind>::Of<Resolution> + Send + Sync>;

/// Continuation of a `Compose` node, applied to the branch its source
/// resolved to.
pub(crate) type Continuation<F> = Arc<dyn Fn(Resolution) -> Cursor<F> + Send + Sync>;

/// What the evaluator looks at next.
pub(crate) enum Cursor<F: Kind> {
    /// A shared sub-tree still to be walked.
    Tree(Arc<Node<F>>),
    /// A branch that is already known.
    Resolved(Resolution),
    /// A fresh effect that must be entered to learn the branch.
    Suspended(F::Of<Resolution>),
}

pub(crate) enum Node<F: Kind> {
    PureIntermediate(Produce),
    PureOutcome(Produce),
    EffectIntermediate(Enter<F>),
    EffectOutcome(Enter<F>),
    Deferred(Box<dyn Fn() -> Arc<Node<F>> + Send + Sync>),
    /// The source is `None` only while the node is being dropped.
    Compose(Option<Arc<Node<F>>>, Continuation<F>),
}

impl<F: Kind> Node<F> {
    pub(crate) const fn shape(&self) -> &'static str {
        match self {
            Self::PureIntermediate(_) => "PureIntermediate",
            Self::PureOutcome(_) => "PureOutcome",
            Self::EffectIntermediate(_) => "EffectIntermediate",
            Self::EffectOutcome(_) => "EffectOutcome",
            Self::Deferred(_) => "Deferred",
            Self::Compose(..) => "Compose",
        }
    }
}

/// Left-nested `Compose` chains are as deep as the number of combinators
/// applied, so they are unlinked iteratively instead of by the recursive
/// drop glue.
impl<F: Kind> Drop for Node<F> {
    fn drop(&mut self) {
        let Self::Compose(source, _) = self else {
            return;
        };
        let mut worklist: Vec<Arc<Self>> = source.take().into_iter().collect();

        while let Some(node) = worklist.pop() {
            // Shared sources stay alive for their other owners.
            if let Ok(mut node) = Arc::try_unwrap(node)
                && let Self::Compose(source, _) = &mut node
            {
                worklist.extend(source.take());
            }
        }
    }
}

#[inline]
pub(crate) fn erase<T: Send + 'static>(value: T) -> Erased {
    Box::new(value)
}

#[inline]
pub(crate) fn erase_branch<L, T>(branch: Either<L, T>) -> Resolution
where
    L: Send + 'static,
    T: Send + 'static,
{
    branch.map_left(erase).map_right(erase)
}

/// Restores an erased payload to the type recorded by the typed layer.
#[inline]
pub(crate) fn reveal<T: 'static>(value: Erased) -> T {
    *value
        .downcast::<T>()
        .expect("computation payload does not match the type it was built with")
}

/// What a `Compose` continuation hands back to the evaluator.
pub(crate) enum Next<F: Kind, B: Send + 'static, S: Send + 'static> {
    /// The branch is known without entering anything.
    Resolved(Either<S, B>),
    /// The branch is the value of a fresh effect.
    Enter(F::Of<Either<S, B>>),
    /// Continue by walking another computation.
    Continue(Computation<F, B, S>),
}

/// A lazily evaluated computation that is either still working on an
/// in-progress value of type `A` or has short-circuited to an outcome of type
/// `R`, running its effects in `F`.
///
/// Building a `Computation` never runs anything: each combinator adds a
/// constant number of nodes to a tree that is only interpreted by the
/// terminal [`evaluate`](Computation::evaluate) or
/// [`resolve`](Computation::resolve) call.
///
/// A built computation is an immutable value. Cloning it is cheap, it can be
/// shared across threads, and every evaluation re-enters every effect it
/// reaches; nothing is cached between evaluations.
///
/// # Type Parameters
///
/// * `F` - The effect brand (see [`crate::typeclass`])
/// * `A` - The in-progress payload
/// * `R` - The closed outcome type
///
/// # Short-circuit
///
/// Once a node resolves to an outcome, no in-progress transform downstream
/// of it is ever invoked; the outcome reaches the end of the tree unchanged.
///
/// # Examples
///
/// ```rust
/// use bailout::computation::Computation;
/// use bailout::typeclass::IdentityEffect;
///
/// let rejected = Computation::<IdentityEffect, i32, String>::outcome("rejected".to_string())
///     .map(|n| n + 1)
///     .flat_map(|n| Computation::intermediate(n * 2));
///
/// assert_eq!(rejected.resolve().into_inner().left(), Some("rejected".to_string()));
/// // Evaluating again yields the same branch.
/// assert_eq!(rejected.resolve().into_inner().left(), Some("rejected".to_string()));
/// ```
pub struct Computation<F: Kind, A, R> {
    pub(crate) node: Arc<Node<F>>,
    _payloads: PhantomData<fn() -> (A, R)>,
}

impl<F: Kind, A, R> Computation<F, A, R> {
    #[inline]
    pub(crate) fn from_node(node: Node<F>) -> Self {
        Self {
            node: Arc::new(node),
            _payloads: PhantomData,
        }
    }

    #[inline]
    const fn from_shared(node: Arc<Node<F>>) -> Self {
        Self {
            node,
            _payloads: PhantomData,
        }
    }
}

impl<F: Kind, A, R> Clone for Computation<F, A, R> {
    fn clone(&self) -> Self {
        Self::from_shared(Arc::clone(&self.node))
    }
}

impl<F: Kind, A: Send + 'static, R: Send + 'static> Computation<F, A, R> {
    /// Lifts a plain value as in-progress.
    ///
    /// Every evaluation starts from its own clone of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::control::Either;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// let computation = Computation::<IdentityEffect, i32, String>::intermediate(1);
    /// assert_eq!(computation.resolve().into_inner(), Either::Right(1));
    /// ```
    #[inline]
    pub fn intermediate(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::from_node(Node::PureIntermediate(Box::new(move || erase(value.clone()))))
    }

    /// Lifts a plain value as a final outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::control::Either;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// let computation = Computation::<IdentityEffect, i32, &str>::outcome("stop");
    /// assert_eq!(computation.resolve().into_inner(), Either::Left("stop"));
    /// ```
    #[inline]
    pub fn outcome(value: R) -> Self
    where
        R: Clone + Sync,
    {
        Self::from_node(Node::PureOutcome(Box::new(move || erase(value.clone()))))
    }

    /// Lifts an already-known branch: `Left` as outcome, `Right` as
    /// in-progress.
    #[inline]
    pub fn from_either(branch: Either<R, A>) -> Self
    where
        A: Clone + Sync,
        R: Clone + Sync,
    {
        match branch {
            Either::Left(outcome) => Self::outcome(outcome),
            Either::Right(value) => Self::intermediate(value),
        }
    }

    /// Postpones building a sub-tree until the evaluator reaches it.
    ///
    /// `thunk` runs once per evaluation that reaches this node. Useful for
    /// recursive definitions, which would otherwise be built eagerly to
    /// unbounded depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::typeclass::IdentityEffect;
    ///
    /// fn countdown(n: u32) -> Computation<IdentityEffect, u32, u32> {
    ///     if n == 0 {
    ///         Computation::outcome(0)
    ///     } else {
    ///         Computation::defer(move || countdown(n - 1))
    ///     }
    /// }
    ///
    /// assert_eq!(countdown(100_000).evaluate().into_inner(), 0);
    /// ```
    pub fn defer<T>(thunk: T) -> Self
    where
        T: Fn() -> Self + Send + Sync + 'static,
    {
        Self::from_node(Node::Deferred(Box::new(move || thunk().node)))
    }
}

impl<F: Functor, A: Send + 'static, R: Send + 'static> Computation<F, A, R> {
    /// Lifts an effect producing an in-progress value.
    ///
    /// The effect is not entered until evaluation reaches this node; each
    /// evaluation enters its own clone of `effect`. For effects that cannot
    /// be cloned, such as futures, use
    /// [`intermediate_effect_with`](Self::intermediate_effect_with).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::control::Either;
    /// use bailout::typeclass::OptionEffect;
    ///
    /// let computation = Computation::<OptionEffect, i32, String>::intermediate_effect(Some(5));
    /// assert_eq!(computation.resolve(), Some(Either::Right(5)));
    /// ```
    pub fn intermediate_effect(effect: F::Of<A>) -> Self
    where
        F::Of<A>: Clone + Sync,
    {
        Self::intermediate_effect_with(move || effect.clone())
    }

    /// Lifts an effect producing an in-progress value, building the effect
    /// value with `enter` each time evaluation reaches this node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::computation::Computation;
    /// use bailout::effect::{IO, IoEffect};
    ///
    /// let computation =
    ///     Computation::<IoEffect, u32, u32>::intermediate_effect_with(|| IO::pure(7));
    /// assert_eq!(computation.evaluate().run_unsafe(), 7);
    /// assert_eq!(computation.evaluate().run_unsafe(), 7);
    /// ```
    pub fn intermediate_effect_with<E>(enter: E) -> Self
    where
        E: Fn() -> F::Of<A> + Send + Sync + 'static,
    {
        Self::from_node(Node::EffectIntermediate(Box::new(move || {
            F::map(enter(), |value| Resolution::Right(erase(value)))
        })))
    }

    /// Lifts an effect producing a final outcome.
    ///
    /// The effect is not entered until evaluation reaches this node.
    pub fn outcome_effect(effect: F::Of<R>) -> Self
    where
        F::Of<R>: Clone + Sync,
    {
        Self::outcome_effect_with(move || effect.clone())
    }

    /// Like [`outcome_effect`](Self::outcome_effect), with the effect value
    /// built by `enter` on each evaluation.
    pub fn outcome_effect_with<E>(enter: E) -> Self
    where
        E: Fn() -> F::Of<R> + Send + Sync + 'static,
    {
        Self::from_node(Node::EffectOutcome(Box::new(move || {
            F::map(enter(), |outcome| Resolution::Left(erase(outcome)))
        })))
    }

    /// The single composition primitive: binds `continuation` over whichever
    /// branch this computation resolves to.
    pub(crate) fn compose<B, S, K>(self, continuation: K) -> Computation<F, B, S>
    where
        B: Send + 'static,
        S: Send + 'static,
        K: Fn(Either<R, A>) -> Next<F, B, S> + Send + Sync + 'static,
    {
        let continuation: Continuation<F> = Arc::new(move |branch: Resolution| {
            match continuation(branch.map_left(reveal::<R>).map_right(reveal::<A>)) {
                Next::Resolved(branch) => Cursor::Resolved(erase_branch(branch)),
                Next::Enter(effect) => Cursor::Suspended(F::map(effect, erase_branch::<S, B>)),
                Next::Continue(next) => Cursor::Tree(next.node),
            }
        });
        Computation::from_node(Node::Compose(Some(self.node), continuation))
    }
}

impl<F: Kind, A, R> fmt::Debug for Computation<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Computation")
            .field("node", &self.node.shape())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Computation<IdentityEffect, String, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Computation<OptionEffect, Vec<u8>, i32>: Send, Sync, Clone);
