//! Either type - a value that can be one of two types.
//!
//! Throughout this crate `Either<R, A>` is the *branch* of a computation:
//!
//! - `Left(r)`: the computation short-circuited with the outcome `r`
//! - `Right(a)`: the computation is still in progress with the value `a`
//!
//! The same type is also the loop signal of
//! [`Monad::tail_rec_m`](crate::typeclass::Monad::tail_rec_m), where `Left`
//! means "iterate again" and `Right` means "done".
//!
//! # Examples
//!
//! ```rust
//! use bailout::control::Either;
//!
//! let rejected: Either<&str, i32> = Either::Left("negative");
//! let accepted: Either<&str, i32> = Either::Right(7);
//!
//! let describe = |branch: Either<&str, i32>| {
//!     branch.fold(|reason| format!("rejected: {reason}"), |n| format!("value {n}"))
//! };
//! assert_eq!(describe(rejected), "rejected: negative");
//! assert_eq!(describe(accepted), "value 7");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Type Parameters
///
/// * `L` - The type of the left value (an outcome, or "continue" in loops)
/// * `R` - The type of the right value (an in-progress value, or "done")
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("still going");
    /// assert_eq!(right.right(), Some("still going"));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both arms, producing `Either<&L, &R>`.
    ///
    /// Used by observers that must look at a branch without taking it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::control::Either;
    ///
    /// let branch: Either<String, i32> = Either::Right(3);
    /// assert_eq!(branch.as_ref(), Either::Right(&3));
    /// assert_eq!(branch, Either::Right(3));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the left value, leaving a right value untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, leaving a left value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(21);
    /// assert_eq!(right.map_right(|n| n * 2), Either::Right(42));
    ///
    /// let left: Either<&str, i32> = Either::Left("stop");
    /// assert_eq!(left.map_right(|n| n * 2), Either::Left("stop"));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both arms into a single value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the arms.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Extracts the value when both arms carry the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::control::Either;
    ///
    /// assert_eq!(Either::<i32, i32>::Left(1).into_inner(), 1);
    /// assert_eq!(Either::<i32, i32>::Right(2).into_inner(), 2);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_is_an_outcome_branch() {
        let branch: Either<&str, i32> = Either::Left("done");
        assert!(branch.is_left());
        assert!(!branch.is_right());
        assert_eq!(branch.left(), Some("done"));
    }

    #[rstest]
    #[case(Either::Left(3), Either::Right(3))]
    #[case(Either::Right(4), Either::Left(4))]
    fn swap_exchanges_arms(#[case] input: Either<i32, i32>, #[case] expected: Either<i32, i32>) {
        assert_eq!(input.swap(), expected);
    }

    #[rstest]
    fn map_left_ignores_right() {
        let branch: Either<i32, &str> = Either::Right("kept");
        assert_eq!(branch.map_left(|n| n + 1), Either::Right("kept"));
    }

    #[rstest]
    fn result_conversion_round_trips() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(either, Either::Left("error".to_string()));
    }

    #[rstest]
    fn debug_names_the_arm() {
        let branch: Either<i32, &str> = Either::Left(1);
        assert_eq!(format!("{branch:?}"), "Left(1)");
    }
}
