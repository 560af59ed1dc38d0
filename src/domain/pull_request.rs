#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::Result;
use std::fmt;

/// Label attached to pull requests that target another feature branch
pub const STACKED_LABEL: &str = "stacked";

/// A pull request to submit: source and target branch plus its presentation
///
/// Immutable once built; `new` guarantees both branches are non-empty and distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrDescriptor {
    source_branch: String,
    target_branch: String,
    title: String,
    body: String,
    labels: Vec<String>,
}

impl PrDescriptor {
    pub fn new(
        source_branch: impl Into<String>,
        target_branch: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        labels: Vec<String>,
    ) -> Result<Self> {
        let source_branch = source_branch.into();
        let target_branch = target_branch.into();

        if source_branch.trim().is_empty() || target_branch.trim().is_empty() {
            anyhow::bail!("Pull request branches must not be empty");
        }
        if source_branch == target_branch {
            anyhow::bail!("Pull request cannot merge '{source_branch}' into itself");
        }

        Ok(Self {
            source_branch,
            target_branch,
            title: title.into(),
            body: body.into(),
            labels,
        })
    }

    pub fn source_branch(&self) -> &str {
        &self.source_branch
    }

    pub fn target_branch(&self) -> &str {
        &self.target_branch
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether this pull request is part of a stack
    pub fn is_stacked(&self) -> bool {
        self.labels.iter().any(|label| label == STACKED_LABEL)
    }
}

impl fmt::Display for PrDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source_branch, self.target_branch)
    }
}
