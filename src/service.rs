#![allow(clippy::missing_errors_doc)]
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::color;
use crate::config::LabelConfig;
use crate::domain::pull_request::PrDescriptor;
use crate::integrations::gh::{self, GhClient};
use crate::integrations::git::GitClient;

/// Terminal state of one descriptor after submission was attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Source branch has no local ref
    SkippedMissingBranch,
    /// Source branch is already contained in the target
    SkippedAlreadyMerged,
    /// Pull request opened at the given URL
    Submitted(String),
    /// `gh pr create` failed; the reason is kept for the transcript
    SubmitFailed(String),
}

/// Outcomes of one run, in submission order
#[derive(Debug, Default)]
pub struct SubmissionReport {
    pub outcomes: Vec<(PrDescriptor, Outcome)>,
}

impl SubmissionReport {
    /// Number of descriptors that were processed
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of pull requests actually opened
    #[must_use]
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Outcome::Submitted(_)))
            .count()
    }
}

/// Submission service that validates descriptors with git and opens them with gh
pub struct SubmissionService<G, H>
where
    G: GitClient,
    H: GhClient,
{
    git_client: G,
    gh_client: H,
    color_mode: color::ColorMode,
}

impl<G, H> SubmissionService<G, H>
where
    G: GitClient,
    H: GhClient,
{
    pub const fn new(git_client: G, gh_client: H, color_mode: color::ColorMode) -> Self {
        Self {
            git_client,
            gh_client,
            color_mode,
        }
    }

    pub const fn git_client(&self) -> &G {
        &self.git_client
    }

    pub const fn gh_client(&self) -> &H {
        &self.gh_client
    }

    /// Fail unless gh is installed and logged in
    pub fn check_prerequisites(&self) -> Result<()> {
        if !self.gh_client.is_available() {
            anyhow::bail!(
                "GitHub CLI (gh) is not installed. Install it from https://cli.github.com/"
            );
        }

        self.gh_client
            .auth_status()
            .context("GitHub CLI is not authenticated. Run `gh auth login` first")
    }

    /// Create the label `name` unless the repository already has it
    ///
    /// Failures are reported as warnings; the label is cosmetic.
    pub fn ensure_label(&self, name: &str, label: &LabelConfig) {
        let mode = self.color_mode;
        let display = mode.colorize_label(name);

        match self.gh_client.label_list() {
            Ok(labels) if gh::has_label(&labels, name) => {
                eprintln!(
                    "{}",
                    color::info(mode, format!("Label {display} already exists"))
                );
                return;
            }
            Ok(_) => {}
            Err(err) => eprintln!(
                "{}",
                color::warn(
                    mode,
                    format!("Could not list labels: {}", color::dim(mode, err))
                )
            ),
        }

        match self
            .gh_client
            .label_create(name, &label.color, &label.description)
        {
            Ok(()) => eprintln!("{}", color::success(mode, format!("Created label {display}"))),
            Err(err) => eprintln!(
                "{}",
                color::warn(
                    mode,
                    format!(
                        "Could not create label {display} (it may already exist): {}",
                        color::dim(mode, err)
                    )
                )
            ),
        }
    }

    /// Validate and submit each descriptor in order, pushing to `remote`
    pub fn submit_all(&self, descriptors: &[PrDescriptor], remote: &str) -> SubmissionReport {
        let outcomes = descriptors
            .iter()
            .map(|descriptor| (descriptor.clone(), self.submit(descriptor, remote)))
            .collect();

        SubmissionReport { outcomes }
    }

    /// Validate one descriptor and open its pull request
    pub fn submit(&self, descriptor: &PrDescriptor, remote: &str) -> Outcome {
        let mode = self.color_mode;
        let source = descriptor.source_branch();
        let target = descriptor.target_branch();

        if !self.git_client.branch_exists(source) {
            eprintln!(
                "{}",
                color::warn(
                    mode,
                    format!(
                        "Skipping {}: branch does not exist locally",
                        mode.colorize_branch(source)
                    )
                )
            );
            return Outcome::SkippedMissingBranch;
        }

        // An ancestry query that fails (e.g. unknown target) counts as not merged
        if self.git_client.is_ancestor(source, target).unwrap_or(false) {
            eprintln!(
                "{}",
                color::warn(
                    mode,
                    format!(
                        "Skipping {}: already merged into {}",
                        mode.colorize_branch(source),
                        mode.colorize_branch(target)
                    )
                )
            );
            return Outcome::SkippedAlreadyMerged;
        }

        eprintln!(
            "{}",
            color::info(
                mode,
                format!(
                    "Creating PR: {} → {}",
                    mode.colorize_branch(source),
                    mode.colorize_branch(target)
                )
            )
        );

        if let Err(err) = self.git_client.push(source, remote) {
            eprintln!(
                "{}",
                color::tree_item(
                    mode,
                    color::warn(
                        mode,
                        format!(
                            "Push to {} failed (branch may already exist): {}",
                            remote,
                            color::dim(mode, err)
                        )
                    ),
                    false
                )
            );
        }

        let spinner = self.spinner(descriptor);
        let result = self.gh_client.pr_create(descriptor);
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        match result {
            Ok(url) => {
                eprintln!(
                    "{}",
                    color::tree_item(
                        mode,
                        color::success(mode, format!("Opened {}", color::dim(mode, &url))),
                        true
                    )
                );
                Outcome::Submitted(url)
            }
            Err(err) => {
                let reason = err.to_string();
                eprintln!(
                    "{}",
                    color::tree_item(
                        mode,
                        color::warn(
                            mode,
                            format!(
                                "Failed to create PR (it may already exist): {}",
                                color::dim(mode, &reason)
                            )
                        ),
                        true
                    )
                );
                Outcome::SubmitFailed(reason)
            }
        }
    }

    fn spinner(&self, descriptor: &PrDescriptor) -> Option<ProgressBar> {
        if !self.color_mode.should_colorize() {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Opening pull request for {}", descriptor.source_branch()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}
