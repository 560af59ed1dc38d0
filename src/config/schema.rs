//! Configuration schema and type definitions

use serde::{Deserialize, Serialize};

/// Configuration for prseed
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub label: LabelConfig,
}

/// Branch and remote settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Mainline branch that non-stacked pull requests target
    #[serde(default = "default_base")]
    pub base: String,
    /// Remote that source branches are pushed to
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            remote: default_remote(),
        }
    }
}

fn default_base() -> String {
    "main".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Appearance of the `stacked` label when it has to be created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelConfig {
    /// Hex color without the leading `#`
    #[serde(default = "default_label_color")]
    pub color: String,
    #[serde(default = "default_label_description")]
    pub description: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            color: default_label_color(),
            description: default_label_description(),
        }
    }
}

fn default_label_color() -> String {
    "5319e7".to_string()
}

fn default_label_description() -> String {
    "Pull request stacked on top of another feature branch".to_string()
}
