//! Functor type class - mapping over effect values.
//!
//! This module provides the `Functor` trait for effect brands: the ability to
//! transform the payload of an effect value without running anything extra.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bailout::typeclass::{Functor, OptionEffect};
//!
//! let transformed = OptionEffect::map(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let missing = OptionEffect::map(None, |n: i32| n.to_string());
//! assert_eq!(missing, None);
//! ```

use super::higher::{Kind, OptionEffect, ResultEffect};
use super::identity::{Identity, IdentityEffect};

/// A type class for effect brands whose values can have a function mapped
/// over their payload.
///
/// Unlike a value-level functor, the methods are associated functions on the
/// brand; the effect value is passed explicitly.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// F::map(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
/// ```
pub trait Functor: Kind {
    /// Applies `function` to the payload of `effect`.
    ///
    /// For deferred effects the function runs only when the effect itself
    /// runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::typeclass::{Functor, ResultEffect};
    ///
    /// let doubled = ResultEffect::<String>::map(Ok(21), |n: i32| n * 2);
    /// assert_eq!(doubled, Ok(42));
    /// ```
    fn map<A, B, F>(effect: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static;
}

// =============================================================================
// Option Implementation
// =============================================================================

impl Functor for OptionEffect {
    #[inline]
    fn map<A, B, F>(effect: Option<A>, function: F) -> Option<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        effect.map(function)
    }
}

// =============================================================================
// Result Implementation
// =============================================================================

impl<E: Send + 'static> Functor for ResultEffect<E> {
    #[inline]
    fn map<A, B, F>(effect: Result<A, E>, function: F) -> Result<B, E>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        effect.map(function)
    }
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Functor for IdentityEffect {
    #[inline]
    fn map<A, B, F>(effect: Identity<A>, function: F) -> Identity<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Identity::new(function(effect.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_map_doubles_present_values(
        #[case] input: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(OptionEffect::map(input, |n| n * 2), expected);
    }

    #[rstest]
    fn result_map_leaves_errors_untouched() {
        let failed: Result<i32, String> = Err("boom".to_string());
        assert_eq!(
            ResultEffect::<String>::map(failed, |n| n + 1),
            Err("boom".to_string())
        );
    }

    #[rstest]
    fn option_map_identity_law() {
        let value = Some("text".to_string());
        assert_eq!(OptionEffect::map(value.clone(), |x| x), value);
    }

    #[rstest]
    fn result_map_composition_law() {
        let first = |n: i32| n + 1;
        let second = |n: i32| n * 10;

        let sequential = ResultEffect::<()>::map(ResultEffect::<()>::map(Ok(4), first), second);
        let composed = ResultEffect::<()>::map(Ok(4), move |n| second(first(n)));
        assert_eq!(sequential, composed);
    }
}
