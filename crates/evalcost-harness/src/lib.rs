//! Experiment plumbing shared by the evaluation-cost studies.
//!
//! The data-generation commands all follow the same shape: sweep a grid of
//! accuracy values, run many seeded trials per value, time the work with a
//! pausable stopwatch, record progress through an explicit observer, and
//! dump tabular results to disk. This crate holds that shared machinery:
//!
//! - [`stopwatch`]: Wall-clock timer that can be paused around bookkeeping
//! - [`observer`]: Checkpoint observer seam for long-running trainers
//! - [`grid`]: Validated accuracy grids
//! - [`parallel`]: Bounded order-preserving parallel map
//! - [`table`]: CSV tables and the bracketed-list cell codec
//!
//! # Examples
//!
//! ```
//! use evalcost_harness::grid::AccuracyGrid;
//! use evalcost_harness::parallel::parallel_map;
//! use std::num::NonZeroUsize;
//!
//! let grid = AccuracyGrid::descending_tenths();
//! let workers = NonZeroUsize::new(4).unwrap();
//! let doubled = parallel_map(grid.values(), workers, |a| a * 2.0);
//! assert_eq!(doubled.len(), 10);
//! assert_eq!(doubled[0], 2.0);
//! ```

pub mod grid;
pub mod observer;
pub mod parallel;
pub mod stopwatch;
pub mod table;
