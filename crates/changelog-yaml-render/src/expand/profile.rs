//! Profile mentions: `@name`

use std::sync::LazyLock;

use changelog_yaml_core::Result;
use regex::{Captures, Regex};

use super::{ExpandContext, Expander};

/// An `@` and any lowercase ASCII letters, digits or hyphens after it
static PROFILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(?P<name>[a-z0-9-]*)").expect("Invalid regex"));

/// Links `@<name>` to `<host>/<name>`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileExpander;

impl Expander for ProfileExpander {
    fn name(&self) -> &'static str {
        "profile"
    }

    fn pattern(&self) -> &Regex {
        &PROFILE_REGEX
    }

    fn replace(&self, caps: &Captures<'_>, ctx: &ExpandContext<'_>) -> Result<String> {
        let name = caps.name("name").map_or("", |m| m.as_str());
        Ok(ctx
            .formatter
            .link(&format!("@{}", name), &ctx.profile_url(name)))
    }
}
