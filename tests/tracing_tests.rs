#![cfg(feature = "tracing")]

//! Diagnostics emitted by the effect types.

use std::num::NonZeroUsize;

use effectual::effect::{IO, Task, memoize};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn task_reports_memo_fill_once() {
    let task = Task::new(|| 7);
    task.run();
    task.run();

    assert!(logs_contain("memo cell filled"));
    logs_assert(|lines: &[&str]| {
        match lines.iter().filter(|line| line.contains("memo cell filled")).count() {
            1 => Ok(()),
            count => Err(format!("expected one fill event, found {count}")),
        }
    });
}

#[traced_test]
#[test]
fn poisoned_task_logs_a_warning_with_the_cause() {
    let task: Task<i32> = Task::new(|| panic!("bad checksum"));
    assert!(task.try_run().is_err());

    assert!(logs_contain("task poisoned"));
    assert!(logs_contain("bad checksum"));
}

#[traced_test]
#[test]
fn instrumented_io_runs_inside_its_span() {
    let io = IO::new(|| {
        tracing::info!("reading settings");
        3
    })
    .instrument(tracing::info_span!("load_config"));

    assert_eq!(io.unsafe_run(), 3);
    assert!(logs_contain("load_config"));
    assert!(logs_contain("reading settings"));
}

#[traced_test]
#[test]
fn instrumented_task_runs_inside_its_span() {
    let task = Task::new(|| {
        tracing::info!("computing index");
        10
    })
    .instrument(tracing::info_span!("build_index"));

    assert_eq!(*task.run(), 10);
    assert!(logs_contain("build_index"));
}

#[traced_test]
#[test]
fn memoized_cache_traces_hits_misses_and_evictions() {
    let cache = memoize(NonZeroUsize::new(1).unwrap(), |n: &u32| n + 1);
    cache.call(1);
    cache.call(1);
    cache.call(2);

    assert!(logs_contain("cache miss"));
    assert!(logs_contain("cache hit"));
    assert!(logs_contain("evicting least recently used entry"));
}
