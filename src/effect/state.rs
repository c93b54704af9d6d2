//! State - computations that thread a state value.
//!
//! A `State<S, A>` is a deferred transition `S -> (A, S)`. Nothing happens
//! until [`State::run`] is called with an initial state; the whole chain then
//! runs once, left to right.
//!
//! Every combinator calls the transition it wraps exactly once per run and
//! reuses the resulting `(value, state)` pair, so effects hidden in a
//! transition (counters, logging) are never duplicated by `fmap` or
//! `flat_map`.
//!
//! The combinators are inherent methods rather than `Functor`/`Monad`
//! implementations: the transition is stored as `Rc<dyn Fn>` and therefore
//! needs `'static` closures, which the type class signatures do not require.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::State;
//!
//! fn next_id() -> State<u32, u32> {
//!     State::get().flat_map(|id| State::put(id + 1).then(State::pure(id)))
//! }
//!
//! let ids = next_id().map2(next_id(), |first, second| vec![first, second]);
//! assert_eq!(ids.run(7), (vec![7, 8], 9));
//! ```

use std::fmt;
use std::rc::Rc;

/// A deferred state transition producing a value.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a transition function.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Runs the chain from `initial_state`, returning the value and the final
    /// state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Runs the chain and keeps only the value.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the chain and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// A transition that leaves the state alone and yields `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Yields a value computed from the current state without changing it.
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let length: State<String, usize> = State::gets(String::len);
    /// assert_eq!(length.run("abc".to_string()), (3, "abc".to_string()));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }

    /// Transforms the value; the wrapped transition still runs once.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next_state) = transition(state);
            (function(value), next_state)
        })
    }

    /// Feeds the value into `function` and runs the transition it returns
    /// from the intermediate state.
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next_state) = transition(state);
            function(value).run(next_state)
        })
    }

    /// Alias for [`State::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs `self` for its effect on the state, then `next`.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (_, next_state) = transition(state);
            next.run(next_state)
        })
    }

    /// Runs both transitions in order and combines their values.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.transition;
        let second = other.transition;
        State::new(move |state| {
            let (left, middle_state) = first(state);
            let (right, final_state) = second(middle_state);
            (function(left, right), final_state)
        })
    }

    /// Runs both transitions in order and pairs their values.
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |left, right| (left, right))
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Yields the current state as the value.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the state with `new_state`.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Replaces the state with `modifier(state)`.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

impl<S, A> fmt::Debug for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("State").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn counting_transition(calls: Rc<Cell<u32>>) -> State<i32, i32> {
        State::new(move |state: i32| {
            calls.set(calls.get() + 1);
            (state * 10, state + 1)
        })
    }

    #[rstest]
    fn fmap_runs_transition_once() {
        let calls = Rc::new(Cell::new(0));
        let mapped = counting_transition(Rc::clone(&calls)).fmap(|value| value + 1);

        assert_eq!(mapped.run(4), (41, 5));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn flat_map_runs_transition_once() {
        let calls = Rc::new(Cell::new(0));
        let chained = counting_transition(Rc::clone(&calls))
            .flat_map(|value| State::new(move |state: i32| (value + state, state)));

        assert_eq!(chained.run(1), (12, 2));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn each_run_replays_the_chain() {
        let calls = Rc::new(Cell::new(0));
        let state = counting_transition(Rc::clone(&calls)).fmap(|value| value * 2);

        state.run(0);
        state.run(0);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    #[case(0, (0, 1))]
    #[case(5, (5, 6))]
    fn get_then_modify(#[case] initial: i32, #[case] expected: (i32, i32)) {
        let state = State::get().flat_map(|current| State::modify(|s: i32| s + 1).fmap(move |()| current));
        assert_eq!(state.run(initial), expected);
    }

    #[rstest]
    fn put_then_get_reads_new_state() {
        let state = State::put(9).then(State::get());
        assert_eq!(state.run(0), (9, 9));
    }

    #[rstest]
    fn eval_and_exec_split_the_result() {
        let state: State<Vec<i32>, usize> = State::new(|mut stack: Vec<i32>| {
            stack.push(1);
            (stack.len(), stack)
        });
        assert_eq!(state.eval(vec![0]), 2);
        assert_eq!(state.exec(vec![]), vec![1]);
    }

    #[rstest]
    fn product_threads_state_left_to_right() {
        let tick: State<i32, i32> = State::new(|s| (s, s + 1));
        assert_eq!(tick.clone().product(tick).run(3), ((3, 4), 5));
    }

    #[rstest]
    fn display_hides_transition() {
        assert_eq!(State::<i32, i32>::get().to_string(), "<State>");
    }
}
