use clap::Parser;

use crate::commands::generate::GenerateOptions;

/// Open a random set of pull requests to seed git wrapper test fixtures
///
/// Without flags, asks whether to include stacked pull requests and whether
/// to create all of them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Include stacked pull requests without asking
    #[arg(long)]
    pub stacked: bool,

    /// Create every candidate pull request without asking
    #[arg(long)]
    pub all: bool,

    /// Mainline branch that non-stacked pull requests target
    #[arg(long, value_name = "BRANCH")]
    pub base: Option<String>,

    /// Remote to push source branches to
    #[arg(long, value_name = "NAME")]
    pub remote: Option<String>,

    /// When to use colored output
    #[arg(long, value_name = "WHEN", ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,
}

impl Cli {
    #[must_use]
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            stacked: self.stacked,
            all: self.all,
            base: self.base.clone(),
            remote: self.remote.clone(),
        }
    }
}
