//! Pull request references: `#123`

use std::sync::LazyLock;

use changelog_yaml_core::{RenderError, Result};
use regex::{Captures, Regex};

use super::{ExpandContext, Expander};

/// A `#` and any ASCII digits after it. A bare `#` matches too and is rejected
/// when parsed.
static PULL_REQUEST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(?P<number>[0-9]*)").expect("Invalid regex"));

/// Links `#<id>` to `<host>/<repo>/pull/<id>`
#[derive(Debug, Clone, Copy, Default)]
pub struct PullRequestExpander;

impl Expander for PullRequestExpander {
    fn name(&self) -> &'static str {
        "pull-request"
    }

    fn pattern(&self) -> &Regex {
        &PULL_REQUEST_REGEX
    }

    fn replace(&self, caps: &Captures<'_>, ctx: &ExpandContext<'_>) -> Result<String> {
        let digits = caps.name("number").map_or("", |m| m.as_str());
        let id = digits
            .parse::<u64>()
            .map_err(|source| RenderError::MalformedPullRequest {
                reference: format!("#{}", digits),
                source,
            })?;

        Ok(ctx
            .formatter
            .link(&format!("#{}", id), &ctx.repo_url(&format!("pull/{}", id))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{AsciiDocFormatter, MarkdownFormatter};
    use changelog_yaml_core::ChangelogYamlError;

    fn ctx() -> ExpandContext<'static> {
        ExpandContext::new("https://github.com", "org/core", &MarkdownFormatter)
    }

    #[test]
    fn test_expand_pull_request() {
        let out = PullRequestExpander.expand("Fixed in #42.", &ctx()).unwrap();
        assert_eq!(out, "Fixed in [#42](https://github.com/org/core/pull/42).");
    }

    #[test]
    fn test_label_and_target_for_many_numbers() {
        for n in [0u64, 1, 7, 99, 1234, 987_654_321] {
            let out = PullRequestExpander
                .expand(&format!("see #{}", n), &ctx())
                .unwrap();
            assert!(out.contains(&format!("[#{}]", n)), "{out}");
            assert!(out.ends_with(&format!("pull/{})", n)), "{out}");
        }
    }

    #[test]
    fn test_leading_zeros_normalized() {
        let out = PullRequestExpander.expand("#007", &ctx()).unwrap();
        assert_eq!(out, "[#7](https://github.com/org/core/pull/7)");
    }

    #[test]
    fn test_multiple_references() {
        let out = PullRequestExpander.expand("#1 and #2", &ctx()).unwrap();
        assert_eq!(
            out,
            "[#1](https://github.com/org/core/pull/1) and [#2](https://github.com/org/core/pull/2)"
        );
    }

    #[test]
    fn test_asciidoc_link() {
        let ctx = ExpandContext::new("https://github.com", "org/core", &AsciiDocFormatter);
        let out = PullRequestExpander.expand("#5", &ctx).unwrap();
        assert_eq!(out, "https://github.com/org/core/pull/5[#5]");
    }

    #[test]
    fn test_bare_hash_is_error() {
        let err = PullRequestExpander.expand("C# bindings", &ctx()).unwrap_err();
        match err {
            ChangelogYamlError::Render(RenderError::MalformedPullRequest { reference, .. }) => {
                assert_eq!(reference, "#");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_number() {
        let out = PullRequestExpander.expand("#12\u{0663}", &ctx()).unwrap();
        assert_eq!(out, "[#12](https://github.com/org/core/pull/12)\u{0663}");

        let err = PullRequestExpander.expand("#\u{0663}", &ctx()).unwrap_err();
        assert!(matches!(
            err,
            ChangelogYamlError::Render(RenderError::MalformedPullRequest { ref reference, .. })
                if reference == "#"
        ));
    }

    #[test]
    fn test_overflow_is_error() {
        assert!(PullRequestExpander
            .expand("#99999999999999999999999", &ctx())
            .is_err());
    }
}
