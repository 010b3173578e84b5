//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! A [`Computation`](crate::computation::Computation) is generic over the
//! effect it runs in, and the evaluator needs that effect applied to several
//! payload types (`F<A>`, `F<R>`, `F<Either<R, A>>`, ...). Rust has no
//! higher-kinded type parameters, so an effect is named by a *brand*: a
//! zero-sized marker type whose [`Kind::Of`] associated type maps a payload
//! to the concrete effect value.
//!
//! # Example
//!
//! ```rust
//! use bailout::typeclass::{Kind, OptionEffect};
//!
//! fn lift<F: Kind>(value: F::Of<i32>) -> F::Of<i32> {
//!     value
//! }
//!
//! let value: Option<i32> = lift::<OptionEffect>(Some(42));
//! assert_eq!(value, Some(42));
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A type-level function from a payload type to an effect value.
///
/// Implementors are brands, never instantiated at runtime. For a brand `F`,
/// `F::Of<A>` is "`F` applied to `A`".
///
/// Payloads are required to be `Send + 'static` because computations store
/// them behind boxed continuations that may cross thread boundaries inside an
/// asynchronous effect. Brands themselves are `'static` for the same reason.
///
/// # Laws
///
/// 1. **Consistency**: `F::Of<A>` is the same type constructor for every `A`;
///    an implementation must not special-case individual payload types.
pub trait Kind: 'static {
    /// The effect value produced when this brand is applied to `A`.
    type Of<A: Send + 'static>: Send + 'static;
}

/// Brand for [`Option`], where `None` is an effect-level failure.
///
/// # Examples
///
/// ```rust
/// use bailout::typeclass::{Kind, OptionEffect};
///
/// let value: <OptionEffect as Kind>::Of<u8> = Some(1);
/// assert_eq!(value, Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionEffect;

impl Kind for OptionEffect {
    type Of<A: Send + 'static> = Option<A>;
}

/// Brand for [`Result`] with a fixed error type `E`.
///
/// `Err(e)` is an effect-level failure: it is not an outcome of the
/// computation and bypasses every continuation.
pub struct ResultEffect<E>(PhantomData<fn() -> E>);

impl<E: Send + 'static> Kind for ResultEffect<E> {
    type Of<A: Send + 'static> = Result<A, E>;
}

impl<E> fmt::Debug for ResultEffect<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ResultEffect")
    }
}

impl<E> Clone for ResultEffect<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ResultEffect<E> {}

impl<E> Default for ResultEffect<E> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_brand_applies_to_option() {
        fn assert_applied<F: Kind<Of<i32> = Option<i32>>>() {}
        assert_applied::<OptionEffect>();
    }

    #[test]
    fn result_brand_preserves_error_type() {
        fn assert_applied<F: Kind<Of<bool> = Result<bool, String>>>() {}
        assert_applied::<ResultEffect<String>>();
    }

    #[test]
    fn chained_applications_stay_in_the_same_constructor() {
        type Nested = <OptionEffect as Kind>::Of<<OptionEffect as Kind>::Of<u8>>;

        let nested: Nested = Some(Some(1));
        assert_eq!(nested.flatten(), Some(1));
    }

    #[test]
    fn result_brand_debug_is_stable() {
        let brand = ResultEffect::<String>::default();
        assert_eq!(format!("{brand:?}"), "ResultEffect");
    }
}
