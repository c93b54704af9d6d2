//! Property-based tests for the Functor, Applicative and Monad laws.
//!
//! Every data container is checked through the trait methods only, so the
//! same law reads the same way for each of them:
//!
//! - **Functor identity**: `fa.fmap(|x| x) == fa`
//! - **Functor composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//! - **Monad left identity**: `pure(a).flat_map(f) == f(a)`
//! - **Monad right identity**: `m.flat_map(pure) == m`
//! - **Monad associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use effectual::control::{Cause, Try, Validation};
use effectual::effect::{ListWriter, Writer};
use effectual::typeclass::{Applicative, Functor, Identity, Monad};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn validation_strategy() -> impl Strategy<Value = Validation<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Validation::valid),
        "[a-z]{1,6}".prop_map(Validation::invalid),
    ]
}

fn try_strategy() -> impl Strategy<Value = Try<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Try::success),
        "[a-z]{1,6}".prop_map(|message| Try::failure(Cause::new("test", message))),
    ]
}

fn writer_strategy() -> impl Strategy<Value = ListWriter<u8, i32>> {
    (any::<i32>(), prop::collection::vec(any::<u8>(), 0..4)).prop_map(|(value, log)| Writer::new(value, log))
}

fn halve_option(value: i32) -> Option<i32> {
    (value % 2 == 0).then_some(value / 2)
}

fn checked_increment(value: i32) -> Result<i32, String> {
    value.checked_add(1).ok_or_else(|| "overflow".to_string())
}

fn non_negative(value: i32) -> Validation<i32, String> {
    if value >= 0 {
        Validation::valid(value)
    } else {
        Validation::invalid(format!("{value} is negative"))
    }
}

fn logged_double(value: i32) -> ListWriter<u8, i32> {
    Writer::new(value.wrapping_mul(2), vec![2])
}

fn logged_negate(value: i32) -> ListWriter<u8, i32> {
    Writer::new(value.wrapping_neg(), vec![9])
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_functor_laws(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(value.fmap(|x| x), value);
        prop_assert_eq!(
            value.fmap(|x| x.wrapping_add(3)).fmap(|x| x.wrapping_mul(5)),
            value.fmap(|x| x.wrapping_add(3).wrapping_mul(5))
        );
    }

    #[test]
    fn prop_validation_functor_laws(value in validation_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value.clone());
        prop_assert_eq!(
            value.clone().fmap(i64::from).fmap(|x| x * 2),
            value.fmap(|x| i64::from(x) * 2)
        );
    }

    #[test]
    fn prop_try_functor_laws(value in try_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value.clone());
        prop_assert_eq!(
            value.clone().fmap(|x| x.wrapping_sub(1)).fmap(|x| x.to_string()),
            value.fmap(|x| x.wrapping_sub(1).to_string())
        );
    }

    #[test]
    fn prop_writer_functor_laws(value in writer_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value.clone());
        prop_assert_eq!(
            value.clone().fmap(|x| x / 3).fmap(|x| x.wrapping_add(1)),
            value.fmap(|x| (x / 3).wrapping_add(1))
        );
    }

    #[test]
    fn prop_identity_functor_laws(value in any::<i32>()) {
        let wrapped = Identity::new(value);
        prop_assert_eq!(wrapped.clone().fmap(|x| x), wrapped.clone());
        prop_assert_eq!(
            wrapped.clone().fmap(|x| x ^ 7).fmap(|x| x >> 1),
            wrapped.fmap(|x| (x ^ 7) >> 1)
        );
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_monad_laws(value in any::<i32>(), container in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(<Option<i32>>::pure(value).flat_map(halve_option), halve_option(value));
        prop_assert_eq!(container.flat_map(Option::<i32>::pure), container);
        prop_assert_eq!(
            container.flat_map(halve_option).flat_map(halve_option),
            container.flat_map(|x| halve_option(x).flat_map(halve_option))
        );
    }

    #[test]
    fn prop_result_monad_laws(value in any::<i32>()) {
        let container: Result<i32, String> = Ok(value);
        prop_assert_eq!(<Result<i32, String>>::pure(value).flat_map(checked_increment), checked_increment(value));
        prop_assert_eq!(container.clone().flat_map(Ok), container.clone());
        prop_assert_eq!(
            container.clone().flat_map(checked_increment).flat_map(checked_increment),
            container.flat_map(|x| checked_increment(x).flat_map(checked_increment))
        );
    }

    #[test]
    fn prop_validation_monad_laws(value in any::<i32>(), container in validation_strategy()) {
        prop_assert_eq!(
            <Validation<i32, String>>::pure(value).flat_map(non_negative),
            non_negative(value)
        );
        prop_assert_eq!(container.clone().flat_map(Validation::valid), container.clone());
        let decrement = |x: i32| non_negative(x.wrapping_sub(10));
        prop_assert_eq!(
            container.clone().flat_map(non_negative).flat_map(decrement),
            container.flat_map(move |x| non_negative(x).flat_map(decrement))
        );
    }

    #[test]
    fn prop_try_monad_laws(value in any::<i32>(), container in try_strategy()) {
        let reciprocal = |x: i32| Try::of(move || 1_000 / x);
        prop_assert_eq!(<Try<i32>>::pure(value).flat_map(reciprocal), reciprocal(value));
        prop_assert_eq!(container.clone().flat_map(Try::success), container.clone());
        let shifted = |x: i32| Try::success(x.wrapping_add(1));
        prop_assert_eq!(
            container.clone().flat_map(reciprocal).flat_map(shifted),
            container.flat_map(move |x| reciprocal(x).flat_map(shifted))
        );
    }

    #[test]
    fn prop_writer_monad_laws(value in any::<i32>(), container in writer_strategy()) {
        prop_assert_eq!(<ListWriter<u8, i32>>::pure(value).flat_map(logged_double), logged_double(value));
        prop_assert_eq!(container.clone().flat_map(Writer::pure), container.clone());
        prop_assert_eq!(
            container.clone().flat_map(logged_double).flat_map(logged_negate),
            container.flat_map(|x| logged_double(x).flat_map(logged_negate))
        );
    }
}

// =============================================================================
// Applicative
// =============================================================================

proptest! {
    #[test]
    fn prop_validation_map2_keeps_errors_of_both_sides(first in validation_strategy(), second in validation_strategy()) {
        let expected_errors = first.clone().fold(|errors| errors.len(), |_| 0)
            + second.clone().fold(|errors| errors.len(), |_| 0);
        let combined = first.map2(second, |a, b| i64::from(a) + i64::from(b));
        prop_assert_eq!(combined.fold(|errors| errors.len(), |_| 0), expected_errors);
    }

    #[test]
    fn prop_writer_map2_concatenates_logs(first in writer_strategy(), second in writer_strategy()) {
        let mut expected = first.log().clone();
        expected.extend(second.log().iter().copied());
        let combined = first.map2(second, |a, b| (a, b));
        prop_assert_eq!(combined.log(), &expected);
    }
}
