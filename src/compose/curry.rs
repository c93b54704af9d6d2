//! Currying macros.
//!
//! `curryN!(f)` turns a function of `N` arguments into `N` nested
//! one-argument closures. Intermediate closures are `Fn`, so a partially
//! applied function can be called any number of times; every argument but
//! the last is cloned on each call and must be `Clone`.

/// Curries a two-argument function.
///
/// ```
/// use effectual::curry2;
///
/// let scale = curry2!(|factor: u32, value: u32| factor * value);
/// let triple = scale(3);
/// assert_eq!(triple(5), 15);
/// assert_eq!(triple(7), 21);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function.
///
/// ```
/// use effectual::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let percent = curry3!(clamp)(0)(100);
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a four-argument function.
///
/// ```
/// use effectual::curry4;
///
/// let join = curry4!(|a: &str, b: &str, c: &str, d: &str| [a, b, c, d].join("-"));
/// assert_eq!(join("a")("b")("c")("d"), "a-b-c-d");
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
