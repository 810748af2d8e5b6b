mod generate;
mod inspect;
mod options;

use anyhow::Result;
use clap::Parser;
use options::{Cli, Command};

fn main() -> Result<()> {
    env_logger::init();
    let Cli { cmd } = Cli::parse();
    match cmd {
        Command::Generate(generate) => generate.run(),
        Command::Inspect(inspect) => inspect.run(),
    }
}
