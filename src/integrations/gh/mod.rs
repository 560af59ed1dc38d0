#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
mod client;

pub use client::{GhClient, Label, RealGhClient};

#[cfg(test)]
pub use client::tests::MockGhClient;

/// Whether `name` is among `labels`, ignoring case as GitHub does
pub fn has_label(labels: &[Label], name: &str) -> bool {
    labels
        .iter()
        .any(|label| label.name.eq_ignore_ascii_case(name))
}
