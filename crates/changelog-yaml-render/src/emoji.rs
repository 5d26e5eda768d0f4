//! Emoji table
//!
//! Every icon the renderer can emit. Markdown writes the shortcode name and
//! leaves rasterizing to the platform; AsciiDoc needs the code point.

use std::fmt;
use std::str::FromStr;

use changelog_yaml_core::DocumentError;

/// An icon from the emoji table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Bookmark,
    TriangularFlagOnPost,
    Star2,
    HammerAndWrench,
    LadyBeetle,
    SeeNoEvil,
    Zap,
    VerticalTrafficLight,
    Fire,
    Art,
    SpiderWeb,
    Recycle,
    Alembic,
    Book,
    Beetle,
    Construction,
    Lipstick,
}

impl Icon {
    /// All icons in the table
    pub const ALL: [Icon; 17] = [
        Icon::Bookmark,
        Icon::TriangularFlagOnPost,
        Icon::Star2,
        Icon::HammerAndWrench,
        Icon::LadyBeetle,
        Icon::SeeNoEvil,
        Icon::Zap,
        Icon::VerticalTrafficLight,
        Icon::Fire,
        Icon::Art,
        Icon::SpiderWeb,
        Icon::Recycle,
        Icon::Alembic,
        Icon::Book,
        Icon::Beetle,
        Icon::Construction,
        Icon::Lipstick,
    ];

    /// Shortcode name, without the surrounding colons
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bookmark => "bookmark",
            Self::TriangularFlagOnPost => "triangular_flag_on_post",
            Self::Star2 => "star2",
            Self::HammerAndWrench => "hammer_and_wrench",
            Self::LadyBeetle => "lady_beetle",
            Self::SeeNoEvil => "see_no_evil",
            Self::Zap => "zap",
            Self::VerticalTrafficLight => "vertical_traffic_light",
            Self::Fire => "fire",
            Self::Art => "art",
            Self::SpiderWeb => "spider_web",
            Self::Recycle => "recycle",
            Self::Alembic => "alembic",
            Self::Book => "book",
            Self::Beetle => "beetle",
            Self::Construction => "construction",
            Self::Lipstick => "lipstick",
        }
    }

    /// Unicode code point of the glyph
    pub fn code_point(&self) -> u32 {
        match self {
            Self::Bookmark => 0x1F516,
            Self::TriangularFlagOnPost => 0x1F6A9,
            Self::Star2 => 0x1F31F,
            Self::HammerAndWrench => 0x1F6E0,
            Self::LadyBeetle => 0x1F41E,
            Self::SeeNoEvil => 0x1F648,
            Self::Zap => 0x26A1,
            Self::VerticalTrafficLight => 0x1F6A6,
            Self::Fire => 0x1F525,
            Self::Art => 0x1F3A8,
            Self::SpiderWeb => 0x1F578,
            Self::Recycle => 0x267B,
            Self::Alembic => 0x2697,
            Self::Book => 0x1F4D6,
            Self::Beetle => 0x1FAB2,
            Self::Construction => 0x1F6A7,
            Self::Lipstick => 0x1F484,
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| DocumentError::UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_from_name() {
        assert_eq!("star2".parse::<Icon>().unwrap(), Icon::Star2);
        assert_eq!(
            "triangular_flag_on_post".parse::<Icon>().unwrap(),
            Icon::TriangularFlagOnPost
        );
    }

    #[test]
    fn test_unknown_icon_is_error() {
        let err = "unicorn".parse::<Icon>().unwrap_err();
        assert!(matches!(err, DocumentError::UnknownIcon(ref name) if name == "unicorn"));
    }

    #[test]
    fn test_every_icon_resolves_to_a_char() {
        for icon in Icon::ALL {
            assert!(char::from_u32(icon.code_point()).is_some(), "{icon}");
            assert_eq!(icon.name().parse::<Icon>().unwrap(), icon);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Icon::ALL.iter().map(Icon::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Icon::ALL.len());
    }
}
