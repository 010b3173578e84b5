//! Identity wrapper type - the effect that adds no behavior.
//!
//! `Identity` is the synchronous, strict effect: "running" an
//! `Identity<A>` is just reading the value out. It serves as:
//!
//! - The effect for computations that need no suspension at all
//! - The simplest model for checking the computation laws
//!
//! [`IdentityEffect`] is the brand through which `Identity` is plugged into a
//! [`Computation`](crate::computation::Computation).

use super::higher::Kind;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use bailout::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Brand for [`Identity`]: synchronous evaluation with no failure channel.
///
/// # Examples
///
/// ```rust
/// use bailout::computation::Computation;
/// use bailout::typeclass::IdentityEffect;
///
/// let doubled = Computation::<IdentityEffect, i32, i32>::intermediate(21)
///     .map(|n| n * 2)
///     .evaluate();
/// assert_eq!(doubled.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityEffect;

impl Kind for IdentityEffect {
    type Of<A: Send + 'static> = Identity<A>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_new_creates_wrapper() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.0, 42);
    }

    #[rstest]
    fn identity_as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i64::MAX)]
    fn identity_from_round_trips(#[case] value: i64) {
        let wrapped: Identity<i64> = value.into();
        assert_eq!(wrapped.into_inner(), value);
    }

    #[rstest]
    fn identity_brand_applies_to_identity() {
        fn assert_applied<F: Kind<Of<char> = Identity<char>>>() {}
        assert_applied::<IdentityEffect>();
    }
}
