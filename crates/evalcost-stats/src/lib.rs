//! Statistical utilities shared by the evaluation-cost experiments.
//!
//! This crate provides the numeric routines the experiment and figure
//! commands rely on:
//!
//! - **Bootstrap estimation**: mean plus an empirical 90% interval obtained
//!   by resampling with replacement
//! - **Rank similarity**: normalized pairwise-order agreement between two
//!   rankings of the same items
//! - **Quantiles**: linear interpolation between order statistics
//! - **Descriptive summaries**: min/max/mean/standard deviation
//!
//! # Modules
//!
//! - [`bootstrap`]: Bootstrap mean-and-interval estimation
//! - [`ranking`]: Rank similarity and argsort/ranking helpers
//! - [`quantile`]: Quantile computation over sorted data
//! - [`descriptive`]: Descriptive summary statistics
//!
//! # Examples
//!
//! ## Bootstrap interval for a sample mean
//!
//! ```
//! use evalcost_stats::bootstrap::bootstrap_mean_interval;
//! use rand::SeedableRng;
//!
//! let times = [2.1, 2.4, 2.2, 2.8, 2.3];
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let interval = bootstrap_mean_interval(&times, 1000, &mut rng).unwrap();
//! assert!(interval.lower <= interval.upper);
//! ```
//!
//! ## Similarity between two rankings
//!
//! ```
//! use evalcost_stats::ranking::rank_similarity;
//!
//! let similarity = rank_similarity(&[0, 1, 2], &[0, 2, 1]).unwrap();
//! assert!((similarity - 2.0 / 3.0).abs() < 1e-12);
//! ```

pub mod bootstrap;
pub mod descriptive;
pub mod quantile;
pub mod ranking;
