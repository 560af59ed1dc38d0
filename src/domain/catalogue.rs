#![allow(clippy::missing_errors_doc)]
//! Fixed catalogue of candidate pull requests
//!
//! The base set always targets the mainline branch. The stacked set targets
//! feature branches from the base set, forming short dependency chains.

use anyhow::Result;

use super::pull_request::{PrDescriptor, STACKED_LABEL};

/// Number of pull requests that target the mainline branch
pub const BASE_COUNT: usize = BASE_TEMPLATES.len();

/// Number of additional pull requests stacked on feature branches
pub const STACKED_COUNT: usize = STACKED_TEMPLATES.len();

struct Template {
    source: &'static str,
    title: &'static str,
    summary: &'static str,
    changes: &'static [&'static str],
}

struct StackedTemplate {
    source: &'static str,
    parent: &'static str,
    title: &'static str,
    summary: &'static str,
    changes: &'static [&'static str],
}

const BASE_TEMPLATES: [Template; 7] = [
    Template {
        source: "feature/user-auth",
        title: "Add user authentication",
        summary: "Introduces session-based login and logout for registered users.",
        changes: &[
            "Add login and logout handlers",
            "Store sessions in a signed cookie",
            "Protect account routes behind authentication",
        ],
    },
    Template {
        source: "feature/api-pagination",
        title: "Paginate list endpoints",
        summary: "List endpoints now return results in pages instead of all at once.",
        changes: &[
            "Accept `page` and `per_page` query parameters",
            "Return a `Link` header with next and previous pages",
        ],
    },
    Template {
        source: "fix/config-parse-error",
        title: "Fix crash on malformed config file",
        summary: "A config file with an unterminated table header no longer panics on startup.",
        changes: &[
            "Report parse errors with the offending file path",
            "Fall back to defaults when the file is empty",
        ],
    },
    Template {
        source: "docs/contributing-guide",
        title: "Add contributing guide",
        summary: "Documents how to set up a development environment and submit changes.",
        changes: &["Add CONTRIBUTING.md", "Link the guide from the README"],
    },
    Template {
        source: "refactor/storage-layer",
        title: "Move persistence behind a storage trait",
        summary: "Separates database access from request handling so it can be swapped in tests.",
        changes: &[
            "Introduce a `Storage` trait",
            "Implement it for the SQLite backend",
            "Use an in-memory implementation in unit tests",
        ],
    },
    Template {
        source: "feature/dark-mode",
        title: "Add dark mode theme",
        summary: "Adds a dark color scheme that follows the operating system preference.",
        changes: &[
            "Define dark theme color tokens",
            "Switch themes with `prefers-color-scheme`",
        ],
    },
    Template {
        source: "chore/update-dependencies",
        title: "Update dependencies",
        summary: "Routine bump of direct dependencies to their latest compatible releases.",
        changes: &["Refresh the lockfile", "Drop a workaround fixed upstream"],
    },
];

const STACKED_TEMPLATES: [StackedTemplate; 3] = [
    StackedTemplate {
        source: "feature/user-auth-oauth",
        parent: "feature/user-auth",
        title: "Support OAuth sign-in",
        summary: "Lets users sign in with an external OAuth provider.",
        changes: &[
            "Add the OAuth callback handler",
            "Link OAuth identities to existing accounts",
        ],
    },
    StackedTemplate {
        source: "feature/user-auth-2fa",
        parent: "feature/user-auth-oauth",
        title: "Add two-factor authentication",
        summary: "Adds optional TOTP codes as a second login factor.",
        changes: &[
            "Generate and verify TOTP secrets",
            "Prompt for a code after password or OAuth login",
        ],
    },
    StackedTemplate {
        source: "feature/api-pagination-cursor",
        parent: "feature/api-pagination",
        title: "Use cursor-based pagination",
        summary: "Replaces page numbers with opaque cursors so results stay stable under writes.",
        changes: &[
            "Encode cursors from the last returned id",
            "Keep `page` as a deprecated alias",
        ],
    },
];

fn render_body(summary: &str, changes: &[&str], parent: Option<&str>) -> String {
    let mut body = format!("## Summary\n\n{summary}\n\n## Changes\n\n");
    for change in changes {
        body.push_str("- ");
        body.push_str(change);
        body.push('\n');
    }
    if let Some(parent) = parent {
        body.push_str(&format!(
            "\n## Stack\n\nBuilds on `{parent}`. Merge that pull request first.\n"
        ));
    }
    body.push_str("\n## Testing\n\n- [ ] CI passes\n- [ ] Reviewed by a maintainer\n");
    body
}

/// Build the ordered catalogue of candidate pull requests
///
/// Base entries target `base`; with `include_stacked` the stacked entries are
/// appended, each labelled `stacked` and targeting its parent feature branch.
///
/// Fails when `base` collides with one of the catalogue's source branches.
pub fn build_catalogue(base: &str, include_stacked: bool) -> Result<Vec<PrDescriptor>> {
    let mut catalogue = Vec::with_capacity(BASE_COUNT + STACKED_COUNT);

    for template in &BASE_TEMPLATES {
        catalogue.push(PrDescriptor::new(
            template.source,
            base,
            template.title,
            render_body(template.summary, template.changes, None),
            Vec::new(),
        )?);
    }

    if include_stacked {
        for template in &STACKED_TEMPLATES {
            catalogue.push(PrDescriptor::new(
                template.source,
                template.parent,
                template.title,
                render_body(template.summary, template.changes, Some(template.parent)),
                vec![STACKED_LABEL.to_string()],
            )?);
        }
    }

    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_catalogue_size() {
        let catalogue = build_catalogue("main", false).unwrap();
        assert_eq!(catalogue.len(), 7);
        assert_eq!(BASE_COUNT, 7);
    }

    #[test]
    fn test_stacked_catalogue_size() {
        let catalogue = build_catalogue("main", true).unwrap();
        assert_eq!(catalogue.len(), 10);
        assert_eq!(STACKED_COUNT, 3);
    }

    #[test]
    fn test_base_entries_target_mainline() {
        let catalogue = build_catalogue("develop", false).unwrap();
        assert!(catalogue.iter().all(|pr| pr.target_branch() == "develop"));
        assert!(catalogue.iter().all(|pr| pr.labels().is_empty()));
    }

    #[test]
    fn test_stacked_entries_target_feature_branches() {
        let catalogue = build_catalogue("main", true).unwrap();
        let stacked: Vec<_> = catalogue.iter().filter(|pr| pr.is_stacked()).collect();
        assert_eq!(stacked.len(), 3);

        let sources: HashSet<_> = catalogue.iter().map(PrDescriptor::source_branch).collect();
        for pr in stacked {
            assert_ne!(pr.target_branch(), "main");
            assert!(
                sources.contains(pr.target_branch()),
                "{pr} should target a catalogue branch"
            );
            assert!(pr.body().contains("## Stack"));
        }
    }

    #[test]
    fn test_source_branches_are_unique() {
        let catalogue = build_catalogue("main", true).unwrap();
        let sources: HashSet<_> = catalogue.iter().map(PrDescriptor::source_branch).collect();
        assert_eq!(sources.len(), catalogue.len());
    }

    #[test]
    fn test_bodies_have_markdown_sections() {
        let catalogue = build_catalogue("main", false).unwrap();
        for pr in &catalogue {
            assert!(pr.body().starts_with("## Summary"));
            assert!(pr.body().contains("## Changes\n\n- "));
            assert!(pr.body().contains("## Testing"));
            assert!(!pr.body().contains("## Stack"));
        }
    }

    #[test]
    fn test_base_colliding_with_source_is_rejected() {
        let result = build_catalogue("feature/dark-mode", false);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalogue_is_deterministic() {
        assert_eq!(
            build_catalogue("main", true).unwrap(),
            build_catalogue("main", true).unwrap()
        );
    }
}
