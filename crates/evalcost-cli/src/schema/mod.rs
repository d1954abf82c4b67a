//! Row and manifest types for the tables the experiments exchange.

pub mod cartpole;
pub mod figures;
pub mod symreg;
pub mod turbines;
