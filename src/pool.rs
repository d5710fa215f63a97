//! Fixed worker-thread pool.
//!
//! Wraps a `rayon::ThreadPool` sized once at sort-call time and reused across
//! every digit pass. Each pass needs exactly two synchronization points —
//! "every worker's histogram is done" and "every worker's scatter is done" —
//! which `rayon::Scope::spawn` plus scope-exit gives for free: the pool
//! blocks on `dispatch` returning until every spawned closure has finished,
//! the same barrier-per-phase shape the original thread-context struct used
//! mutex/condvar pairs for.

use rayon::ThreadPool as RayonPool;

/// A pool of `num_threads` OS worker threads, reused for every histogram and
/// scatter dispatch across all digit passes of one sort call.
pub(crate) struct WorkerPool {
    pool: RayonPool,
    num_threads: usize,
}

impl WorkerPool {
    /// Builds a pool with `num_threads` workers. `0` is normalized to `1`
    /// (a single worker doing the whole range), matching the original's
    /// treatment of a degenerate thread count as "run inline."
    pub(crate) fn new(num_threads: usize) -> Self {
        let n = num_threads.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .expect("failed to build radix sort worker pool");
        WorkerPool { pool, num_threads: n }
    }

    pub(crate) fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Runs `task(t)` once per worker index `0..num_threads`, blocking until
    /// every invocation has returned. This is the single barrier primitive
    /// the pass orchestrator uses twice per digit: once for the histogram
    /// stage, once for the scatter stage.
    pub(crate) fn dispatch<F>(&self, task: F)
    where
        F: Fn(usize) + Sync,
    {
        let n = self.num_threads;
        self.pool.scope(|scope| {
            for t in 0..n {
                let task = &task;
                scope.spawn(move |_| task(t));
            }
        });
    }
}
