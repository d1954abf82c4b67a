use clap::{Parser, Subcommand};

use self::{
    cartpole_data::CartpoleDataArg, symreg_data::SymregDataArg, symreg_figures::SymregFiguresArg,
    turbines_data::TurbinesDataArg, turbines_figures::TurbinesFiguresArg,
};

mod cartpole_data;
mod symreg_data;
mod symreg_figures;
mod turbines_data;
mod turbines_figures;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which experiment to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Train cart-pole policies across the accuracy grid and record progress
    CartpoleData(#[clap(flatten)] CartpoleDataArg),
    /// Score the surface population across the accuracy grid
    SymregData(#[clap(flatten)] SymregDataArg),
    /// Score the turbine catalog across the section-count grid
    TurbinesData(#[clap(flatten)] TurbinesDataArg),
    /// Render figures from the symbolic-regression tables
    SymregFigures(#[clap(flatten)] SymregFiguresArg),
    /// Render figures from the turbine tables
    TurbinesFigures(#[clap(flatten)] TurbinesFiguresArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::CartpoleData(arg) => cartpole_data::run(&arg)?,
        Mode::SymregData(arg) => symreg_data::run(&arg)?,
        Mode::TurbinesData(arg) => turbines_data::run(&arg)?,
        Mode::SymregFigures(arg) => symreg_figures::run(&arg)?,
        Mode::TurbinesFigures(arg) => turbines_figures::run(&arg)?,
    }
    Ok(())
}
