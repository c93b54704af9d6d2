//! Small function combinators.

/// Returns its argument unchanged; the neutral element of [`compose!`](crate::compose).
///
/// ```
/// use effectual::compose::identity;
///
/// let words = vec!["a", "b"];
/// assert_eq!(identity(words.clone()), words);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A function that ignores its input and returns a clone of `value`.
///
/// ```
/// use effectual::compose::constant;
///
/// let zeros: Vec<i32> = ["x", "y"].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0]);
/// ```
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// ```
/// use effectual::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
