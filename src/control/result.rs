//! Single-error results.
//!
//! `Result<T, E>` carries one opaque error payload. `map`/`bind` come from the
//! type classes and leave an `Err` untouched; [`ResultExt::map_error`] is the
//! only transformation that reaches the error.

/// Wraps a success value.
#[inline]
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Wraps an error payload.
#[inline]
pub const fn error<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// Error-side operations for `Result`.
pub trait ResultExt<T, E>: Sized {
    /// Transforms the error payload; an `Ok` passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::{error, ok, ResultExt};
    ///
    /// let failed = error::<i32, _>(404).map_error(|code| format!("status {code}"));
    /// assert_eq!(failed, Err("status 404".to_string()));
    ///
    /// let fine = ok::<_, i32>(1).map_error(|code| code * 2);
    /// assert_eq!(fine, Ok(1));
    /// ```
    fn map_error<F, G>(self, function: G) -> Result<T, F>
    where
        G: FnOnce(E) -> F;

    /// Returns `true` for an `Err`.
    fn is_error(&self) -> bool;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn map_error<F, G>(self, function: G) -> Result<T, F>
    where
        G: FnOnce(E) -> F,
    {
        self.map_err(function)
    }

    #[inline]
    fn is_error(&self) -> bool {
        self.is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Fold, Functor, Monad};
    use rstest::rstest;
    use std::cell::Cell;

    fn divide(dividend: i32, divisor: i32) -> Result<i32, String> {
        if divisor == 0 {
            error("Division by zero".to_string())
        } else {
            ok(dividend / divisor)
        }
    }

    #[rstest]
    fn pipeline_short_circuits_after_division_by_zero() {
        let invoked = Cell::new(false);

        let outcome = ok::<i32, String>(100)
            .bind(|x| ok(x / 5))
            .bind(|x| if x == 0 { error("boom".to_string()) } else { ok(x) });
        assert_eq!(outcome, Ok(20));

        let failed = outcome.bind(|x| divide(x, 0)).bind(|x| {
            invoked.set(true);
            ok(x)
        });

        assert_eq!(failed, Err("Division by zero".to_string()));
        assert!(!invoked.get());
    }

    #[rstest]
    fn fmap_leaves_error_payload_alone() {
        let failed = error::<i32, _>("kept").fmap(|n| n * 100);
        assert_eq!(failed, Err("kept"));
        assert!(failed.is_error());
    }

    #[rstest]
    #[case(ok(3), "value 3")]
    #[case(error("nope"), "error nope")]
    fn fold_reaches_both_branches(#[case] input: Result<i32, &str>, #[case] expected: &str) {
        let rendered = input.fold(|e| format!("error {e}"), |v| format!("value {v}"));
        assert_eq!(rendered, expected);
    }
}
