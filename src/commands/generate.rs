//! Generate command - build, shuffle, select and submit pull requests

use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

use crate::color;
use crate::config::Config;
use crate::domain::catalogue::build_catalogue;
use crate::domain::pull_request::STACKED_LABEL;
use crate::domain::selection::{select_count, shuffle};
use crate::integrations::gh::{GhClient, RealGhClient};
use crate::integrations::git::{self, GitClient, RealGitClient};
use crate::prompt;
use crate::service::{SubmissionReport, SubmissionService};

const STACKED_QUESTION: &str =
    "Do you want to include stacked PRs (targeting other feature branches)?";
const ALL_QUESTION: &str = "Do you want to create ALL possible pull requests?";

/// Answers and overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Include stacked pull requests without asking
    pub stacked: bool,
    /// Create every pull request without asking
    pub all: bool,
    pub base: Option<String>,
    pub remote: Option<String>,
}

/// Generate pull requests in the current repository
///
/// # Errors
/// Returns an error if:
/// - gh is not installed or not authenticated
/// - The configuration cannot be loaded
/// - The mainline branch collides with a catalogue branch
pub fn cmd_generate(options: &GenerateOptions, color_mode: color::ColorMode) -> Result<()> {
    let service = SubmissionService::new(RealGitClient, RealGhClient, color_mode);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr();
    let mut rng = rand::rng();

    run(
        &service,
        || load_config(options),
        options,
        &mut input,
        &mut output,
        &mut rng,
        color_mode,
    )?;

    Ok(())
}

/// Load config from the repository top level (or the current directory) and apply flags
fn load_config(options: &GenerateOptions) -> Result<Config> {
    let root = match git::repo_toplevel() {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    Ok(Config::load_from_repo_root(&root)?
        .with_overrides(options.base.as_deref(), options.remote.as_deref()))
}

/// Run the whole pipeline against the given clients and terminal
///
/// # Errors
/// Returns an error on fatal setup problems; per-pull-request failures are
/// recorded in the returned report instead.
pub fn run<G, H, C, R, W, N>(
    service: &SubmissionService<G, H>,
    load_config: C,
    options: &GenerateOptions,
    input: &mut R,
    output: &mut W,
    rng: &mut N,
    color_mode: color::ColorMode,
) -> Result<SubmissionReport>
where
    G: GitClient,
    H: GhClient,
    C: FnOnce() -> Result<Config>,
    R: BufRead,
    W: Write,
    N: Rng,
{
    service.check_prerequisites()?;
    eprintln!("{}", color::success(color_mode, "GitHub CLI is authenticated"));

    let config = load_config()?;

    let include_stacked = options.stacked || prompt::confirm(input, output, STACKED_QUESTION)?;
    let catalogue = build_catalogue(&config.repository.base, include_stacked)?;
    if include_stacked {
        service.ensure_label(STACKED_LABEL, &config.label);
    }

    let create_all = options.all || prompt::confirm(input, output, ALL_QUESTION)?;
    let shuffled = shuffle(&catalogue, rng);
    let count = select_count(shuffled.len(), create_all, rng)?;

    eprintln!(
        "{}",
        color::info(
            color_mode,
            format!("Attempting {count} of {} pull requests", catalogue.len())
        )
    );

    let report = service.submit_all(&shuffled[..count], &config.repository.remote);

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!(
                "Created {} of {} pull requests",
                report.created(),
                report.attempted()
            )
        )
    );

    Ok(report)
}
