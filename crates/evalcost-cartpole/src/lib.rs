//! Cart-pole control task with an accuracy-scaled simulation time step.
//!
//! The accuracy study trains a policy on environments whose physics run at
//! reduced resolution: accuracy `a` stretches the integration time step to
//! `0.02 / a` seconds and shortens the episode cap to `⌊500·a⌋` steps, so a
//! half-accuracy environment is roughly half as expensive to train on.
//! Evaluation always happens on an independent full-accuracy environment so
//! policies trained at different accuracy levels stay comparable.
//!
//! # Modules
//!
//! - [`env`]: Cart-pole dynamics and episode bookkeeping
//! - [`policy`]: Deterministic linear threshold policy
//! - [`trainer`]: Seeded policy search under a step budget
//! - [`evaluate`]: Mean-reward evaluation on a fixed episode set

pub mod env;
pub mod evaluate;
pub mod policy;
pub mod trainer;
