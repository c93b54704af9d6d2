//! Overhead of building and running the deferred computations.

use criterion::{Criterion, criterion_group, criterion_main};
use effectual::effect::{IO, State, Task, memoize};
use std::hint::black_box;
use std::num::NonZeroUsize;

fn benchmark_io_chain(criterion: &mut Criterion) {
    let io = (0..100).fold(IO::pure(0_u64), |io, step| io.flat_map(move |n| IO::pure(n + step)));

    criterion.bench_function("io_flat_map_chain_100", |bencher| {
        bencher.iter(|| black_box(io.unsafe_run()));
    });
}

fn benchmark_state_counter(criterion: &mut Criterion) {
    let counter = (0..100).fold(State::<u64, ()>::pure(()), |state, _| state.then(State::modify(|n| n + 1)));

    criterion.bench_function("state_modify_chain_100", |bencher| {
        bencher.iter(|| black_box(counter.exec(black_box(0))));
    });
}

fn benchmark_task_memo(criterion: &mut Criterion) {
    let task = Task::new(|| (1..=1_000_u64).sum::<u64>());
    task.run();

    criterion.bench_function("task_run_memoized", |bencher| {
        bencher.iter(|| black_box(*task.run()));
    });
}

fn benchmark_memoized_hits(criterion: &mut Criterion) {
    let Some(capacity) = NonZeroUsize::new(64) else {
        return;
    };
    let cache = memoize(capacity, |n: &u64| (1..=*n).product::<u64>());

    criterion.bench_function("memoized_call_hot", |bencher| {
        bencher.iter(|| black_box(cache.call(black_box(15))));
    });
}

criterion_group!(
    benches,
    benchmark_io_chain,
    benchmark_state_counter,
    benchmark_task_memo,
    benchmark_memoized_hits
);

criterion_main!(benches);
