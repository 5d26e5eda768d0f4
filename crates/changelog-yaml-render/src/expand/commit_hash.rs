//! Commit references: `$abc123`

use std::sync::LazyLock;

use changelog_yaml_core::Result;
use regex::{Captures, Regex};

use super::{ExpandContext, Expander};

/// A `$` and any lowercase hex digits after it, possibly none
static COMMIT_HASH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(?P<hash>[a-f0-9]*)").expect("Invalid regex"));

/// Links `$<hash>` to `<host>/<repo>/commit/<hash>`
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitHashExpander;

impl Expander for CommitHashExpander {
    fn name(&self) -> &'static str {
        "commit-hash"
    }

    fn pattern(&self) -> &Regex {
        &COMMIT_HASH_REGEX
    }

    fn replace(&self, caps: &Captures<'_>, ctx: &ExpandContext<'_>) -> Result<String> {
        let hash = caps.name("hash").map_or("", |m| m.as_str());
        Ok(ctx
            .formatter
            .link(hash, &ctx.repo_url(&format!("commit/{}", hash))))
    }
}
