mod analysis;
mod command;
mod figures;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
