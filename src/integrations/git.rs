#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;

/// Git client interface for the branch queries a submission needs
pub trait GitClient {
    /// Whether `branch` exists as a local branch
    fn branch_exists(&self, branch: &str) -> bool;

    /// Whether every commit of `branch` is already contained in `target`
    ///
    /// Returns an error when git cannot answer, e.g. when `target` does not exist.
    fn is_ancestor(&self, branch: &str, target: &str) -> Result<bool>;

    /// Push `branch` to `remote` and set its upstream
    fn push(&self, branch: &str, remote: &str) -> Result<()>;
}

/// Real git implementation
#[derive(Debug, Default)]
pub struct RealGitClient;

impl GitClient for RealGitClient {
    fn branch_exists(&self, branch: &str) -> bool {
        Command::new("git")
            .args([
                "show-ref",
                "--verify",
                "--quiet",
                &format!("refs/heads/{branch}"),
            ])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn is_ancestor(&self, branch: &str, target: &str) -> Result<bool> {
        let output = Command::new("git")
            .args(["merge-base", "--is-ancestor", branch, target])
            .output()
            .context("Failed to execute git merge-base")?;

        // 0 means ancestor, 1 means not an ancestor, anything else is a failure
        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                anyhow::bail!("git merge-base --is-ancestor failed: {}", stderr.trim())
            }
        }
    }

    fn push(&self, branch: &str, remote: &str) -> Result<()> {
        let output = Command::new("git")
            .args(["push", "-u", remote, branch])
            .output()
            .context("Failed to execute git push")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git push failed: {}", stderr.trim());
        }

        Ok(())
    }
}

/// Top level of the current repository, if any
pub fn repo_toplevel() -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!path.is_empty()).then(|| PathBuf::from(path))
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Mock git client backed by in-memory branch and ancestry sets
    #[derive(Default)]
    pub struct MockGitClient {
        branches: HashSet<String>,
        merged: HashSet<(String, String)>,
        broken_ancestry: HashSet<String>,
        failing_pushes: HashSet<String>,
        pushed: RefCell<Vec<(String, String)>>,
    }

    impl MockGitClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_branch(mut self, branch: &str) -> Self {
            self.branches.insert(branch.to_string());
            self
        }

        pub fn with_merged(mut self, branch: &str, target: &str) -> Self {
            self.merged.insert((branch.to_string(), target.to_string()));
            self
        }

        pub fn with_ancestry_error(mut self, branch: &str) -> Self {
            self.broken_ancestry.insert(branch.to_string());
            self
        }

        pub fn with_push_failure(mut self, branch: &str) -> Self {
            self.failing_pushes.insert(branch.to_string());
            self
        }

        pub fn pushed(&self) -> Vec<(String, String)> {
            self.pushed.borrow().clone()
        }
    }

    impl GitClient for MockGitClient {
        fn branch_exists(&self, branch: &str) -> bool {
            self.branches.contains(branch)
        }

        fn is_ancestor(&self, branch: &str, target: &str) -> Result<bool> {
            if self.broken_ancestry.contains(branch) {
                anyhow::bail!("Mock merge-base failure");
            }
            Ok(self
                .merged
                .contains(&(branch.to_string(), target.to_string())))
        }

        fn push(&self, branch: &str, remote: &str) -> Result<()> {
            self.pushed
                .borrow_mut()
                .push((branch.to_string(), remote.to_string()));
            if self.failing_pushes.contains(branch) {
                anyhow::bail!("Mock push failure");
            }
            Ok(())
        }
    }

    #[test]
    fn test_mock_branch_exists() {
        let client = MockGitClient::new().with_branch("feature/a");
        assert!(client.branch_exists("feature/a"));
        assert!(!client.branch_exists("feature/b"));
    }

    #[test]
    fn test_mock_is_ancestor() {
        let client = MockGitClient::new().with_merged("feature/a", "main");
        assert!(client.is_ancestor("feature/a", "main").unwrap());
        assert!(!client.is_ancestor("feature/a", "develop").unwrap());
    }

    #[test]
    fn test_mock_push_records_calls() {
        let client = MockGitClient::new().with_push_failure("feature/b");
        assert!(client.push("feature/a", "origin").is_ok());
        assert!(client.push("feature/b", "origin").is_err());
        assert_eq!(
            client.pushed(),
            vec![
                ("feature/a".to_string(), "origin".to_string()),
                ("feature/b".to_string(), "origin".to_string()),
            ]
        );
    }

    #[test]
    fn test_real_branch_exists_rejects_unknown_branch() {
        let client = RealGitClient;
        assert!(!client.branch_exists("prseed/definitely-not-a-branch-0f3a"));
    }
}
