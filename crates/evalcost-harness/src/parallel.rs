//! Bounded parallel map over independent work items.
//!
//! The data-generation commands distribute one full training/evaluation
//! sweep per accuracy value across a fixed-size worker pool. The items are
//! fully independent (each worker writes its own output file), so a plain
//! pool pulling indices from a shared counter is all the scheduling needed.

use std::{
    num::NonZeroUsize,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

/// Worker count matching the available processor count, falling back to one
/// when the platform cannot report it.
#[must_use]
pub fn available_workers() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Applies `f` to every item using at most `workers` threads.
///
/// Results are returned in input order regardless of completion order. Work
/// items are claimed through a shared atomic index, so an uneven per-item
/// cost (training at accuracy 1.0 takes far longer than at 0.1) still keeps
/// every worker busy until the queue drains.
///
/// # Panics
///
/// Panics if a worker thread panics while running `f`.
///
/// # Examples
///
/// ```
/// use evalcost_harness::parallel::parallel_map;
/// use std::num::NonZeroUsize;
///
/// let squares = parallel_map(&[1, 2, 3], NonZeroUsize::new(2).unwrap(), |x| x * x);
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
#[must_use]
pub fn parallel_map<T, U, F>(items: &[T], workers: NonZeroUsize, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync,
{
    let next_item = AtomicUsize::new(0);
    let results: Mutex<Vec<Option<U>>> = Mutex::new((0..items.len()).map(|_| None).collect());

    thread::scope(|s| {
        for _ in 0..workers.get().min(items.len()) {
            s.spawn(|| {
                loop {
                    let index = next_item.fetch_add(1, Ordering::Relaxed);
                    let Some(item) = items.get(index) else {
                        break;
                    };
                    let output = f(item);
                    results.lock().unwrap()[index] = Some(output);
                }
            });
        }
    });

    results
        .into_inner()
        .unwrap()
        .into_iter()
        .map(|slot| slot.expect("every work item is claimed exactly once"))
        .collect()
}
