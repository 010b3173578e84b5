//! `flow!`: sequencing sugar for computations.
//!
//! # Syntax
//!
//! - `pattern <= computation;` - Bind: continue with the in-progress value
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final expression, lifted with
//!   [`Computation::intermediate`](crate::computation::Computation::intermediate)
//! - `computation` - Final expression (already a computation)
//!
//! Each bind expands to one [`flat_map`](crate::computation::Computation::flat_map)
//! call, so a `flow!` block short-circuits exactly like the chain it stands
//! for. The closures it generates may run once per evaluation, so values they
//! capture are borrowed or cloned rather than moved out:
//!
//! ```rust,ignore
//! flow! { x <= c; rest }  ==>  c.flat_map(move |x| flow! { rest })
//! ```

/// Writes a chain of `flat_map` calls in sequential style.
///
/// # Examples
///
/// ```rust
/// use bailout::computation::Computation;
/// use bailout::flow;
/// use bailout::typeclass::IdentityEffect;
///
/// type Step<A> = Computation<IdentityEffect, A, String>;
///
/// fn positive(n: i32) -> Step<i32> {
///     Step::intermediate(n).ensure(|n| *n > 0, format!("{n} is not positive"))
/// }
///
/// let total: Step<i32> = flow! {
///     a <= positive(2);
///     b <= positive(3);
///     let sum = a + b;
///     yield sum * 10
/// };
/// assert_eq!(total.resolve().into_inner().right(), Some(50));
///
/// let rejected: Step<i32> = flow! {
///     a <= positive(2);
///     b <= positive(-3);
///     yield a + b
/// };
/// assert_eq!(rejected.resolve().into_inner().left(), Some("-3 is not positive".to_string()));
/// ```
#[macro_export]
macro_rules! flow {
    (yield $value:expr) => {
        $crate::computation::Computation::intermediate($value)
    };

    ($result:expr) => {
        $result
    };

    ($pattern:ident <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |$pattern| {
            $crate::flow!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |($($pattern)*)| {
            $crate::flow!($($rest)+)
        })
    };

    (_ <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |_| {
            $crate::flow!($($rest)+)
        })
    };

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::flow!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::flow!($($rest)+)
        }
    };
}
