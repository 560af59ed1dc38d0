#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use serde::Deserialize;
use std::process::Command;

use crate::domain::pull_request::PrDescriptor;

/// A repository label as reported by `gh label list --json name`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Label {
    pub name: String,
}

/// Trait for interacting with GitHub CLI
pub trait GhClient {
    /// Check if gh CLI is available
    fn is_available(&self) -> bool;

    /// Check that gh is logged in to a host
    fn auth_status(&self) -> Result<()>;

    /// List the labels defined in the current repository
    fn label_list(&self) -> Result<Vec<Label>>;

    /// Create a repository label
    fn label_create(&self, name: &str, color: &str, description: &str) -> Result<()>;

    /// Open a pull request and return its URL
    fn pr_create(&self, descriptor: &PrDescriptor) -> Result<String>;
}

/// Real implementation of `GhClient` using `gh` CLI
#[derive(Debug, Default)]
pub struct RealGhClient;

impl RealGhClient {
    fn run(args: &[&str], what: &str) -> Result<String> {
        let output = Command::new("gh")
            .args(args)
            .output()
            .context("Failed to execute gh command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("gh {what} failed: {}", stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GhClient for RealGhClient {
    fn is_available(&self) -> bool {
        Command::new("gh")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn auth_status(&self) -> Result<()> {
        Self::run(&["auth", "status"], "auth status").map(|_| ())
    }

    fn label_list(&self) -> Result<Vec<Label>> {
        let json = Self::run(
            &["label", "list", "--json", "name", "--limit", "1000"],
            "label list",
        )?;
        serde_json::from_str(&json).with_context(|| format!("Failed to parse label list JSON: {json}"))
    }

    fn label_create(&self, name: &str, color: &str, description: &str) -> Result<()> {
        Self::run(
            &[
                "label",
                "create",
                name,
                "--color",
                color,
                "--description",
                description,
            ],
            "label create",
        )
        .map(|_| ())
    }

    fn pr_create(&self, descriptor: &PrDescriptor) -> Result<String> {
        let mut args = vec![
            "pr",
            "create",
            "--head",
            descriptor.source_branch(),
            "--base",
            descriptor.target_branch(),
            "--title",
            descriptor.title(),
            "--body",
            descriptor.body(),
        ];
        for label in descriptor.labels() {
            args.extend(["--label", label.as_str()]);
        }

        Self::run(&args, "pr create")
    }
}
