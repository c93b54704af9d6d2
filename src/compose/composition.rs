//! Right-to-left composition and left-to-right pipelines.

/// Composes functions right to left: `compose!(f, g, h)(x)` is `f(g(h(x)))`.
///
/// Each argument is evaluated once, when the composition is built. The
/// result is a `move` closure and is `Fn` whenever every part is.
///
/// ```
/// use effectual::compose;
///
/// let trim = |text: &str| text.trim().to_string();
/// let shout = |text: String| text.to_uppercase();
/// let exclaim = |text: String| text + "!";
///
/// let announce = compose!(exclaim, shout, trim);
/// assert_eq!(announce("  hello "), "HELLO!");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($last:expr, $($earlier:expr),+ $(,)?) => {{
        let last = $last;
        let earlier = $crate::compose!($($earlier),+);
        move |argument| last(earlier(argument))
    }};
}

/// Threads a value through functions left to right:
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`.
///
/// ```
/// use effectual::pipe;
/// use effectual::persistent::PersistentList;
///
/// let total = pipe!(
///     PersistentList::from_slice(&[3, 1, 2]),
///     |list: PersistentList<i32>| list.map(|n| n * 10),
///     |list: PersistentList<i32>| list.reduce(0, |sum, n| sum + n),
/// );
/// assert_eq!(total, 60);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $first:expr $(, $rest:expr)* $(,)?) => {{
        let stage = $first;
        $crate::pipe!(stage($value) $(, $rest)*)
    }};
}


#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_compose_is_associative(value in any::<i16>()) {
            let first = |x: i16| i32::from(x) * 3;
            let second = |x: i32| x - 7;
            let third = |x: i32| x.to_string();

            let nested_right = compose!(third, compose!(second, first));
            let nested_left = compose!(compose!(third, second), first);
            prop_assert_eq!(nested_right(value), nested_left(value));
        }
    }
}
