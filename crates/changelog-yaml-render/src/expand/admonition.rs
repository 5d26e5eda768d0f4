//! Admonitions: `NOTE: text`, `WARNING: text`, ...

use std::sync::LazyLock;

use changelog_yaml_core::Result;
use regex::{Captures, Regex};

use super::{ExpandContext, Expander, ProfileExpander};
use crate::formatter::AdmonitionKind;

/// Keyword, colon, one whitespace character and the rest of the line
static ADMONITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<keyword>WARNING|TIP|NOTE|IMPORTANT|CAUTION):\s(?P<body>.*)")
        .expect("Invalid regex")
});

/// Turns `KEYWORD: text` into a formatter callout.
///
/// Mentions inside the callout body are expanded before the body is handed
/// to the formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdmonitionExpander;

impl Expander for AdmonitionExpander {
    fn name(&self) -> &'static str {
        "admonition"
    }

    fn pattern(&self) -> &Regex {
        &ADMONITION_REGEX
    }

    fn replace(&self, caps: &Captures<'_>, ctx: &ExpandContext<'_>) -> Result<String> {
        let keyword = caps.name("keyword").map_or("", |m| m.as_str());
        let kind: AdmonitionKind = keyword.parse()?;
        let body = caps.name("body").map_or("", |m| m.as_str());
        let body = ProfileExpander.expand(body, ctx)?;

        Ok(ctx.formatter.admonition(kind, &body))
    }
}
