use anyhow::Result;
use clap::Parser;

use prseed::cli::Cli;
use prseed::color::ColorMode;
use prseed::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let color_mode = ColorMode::resolve(cli.color);

    commands::generate::cmd_generate(&cli.generate_options(), color_mode)
}
