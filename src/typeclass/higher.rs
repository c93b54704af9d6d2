//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Option<_>` or `Result<_, E>` as type
//! constructors directly. [`TypeConstructor`] names the applied parameter
//! (`Inner`) and lets a trait rebuild the same constructor around a different
//! one (`WithType<B>`), which is all `Functor`, `Applicative` and `Monad` need.
//!
//! # Example
//!
//! ```rust
//! use effectual::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Option<String> = reset(Some(42));
//! assert_eq!(emptied, None);
//! ```

/// A type constructor applied to a single type parameter.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is the same type as `F`.
pub trait TypeConstructor {
    /// The type parameter the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_the_payload() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn result_with_type_keeps_the_error_type() {
        fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let rewrapped: Option<String> = rewrap(Some(1));
        assert_eq!(rewrapped, None);

        fn assert_result<T: TypeConstructor<WithType<u8> = Result<u8, &'static str>>>() {}
        assert_result::<Result<i32, &'static str>>();
    }
}
