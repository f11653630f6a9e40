//! Tag vocabulary shared by quiz options, profiles and the role table.
//!
//! Tags are a closed set. Declaration order doubles as the priority order used
//! to break ties that survive every scoring criterion, so reordering variants
//! changes match results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    // Sectors
    DigitalTech,
    BusinessFinance,
    CreativeMedia,
    HealthCare,
    Engineering,
    Construction,
    Hospitality,
    Education,
    GreenEnergy,
    Logistics,
    // Traits
    Analytical,
    Creative,
    Caring,
    Practical,
    Leadership,
    Organised,
    /// Fallback profile key. Never produced by a quiz option.
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Sector,
    Trait,
    Default,
}

impl Tag {
    pub const ALL: [Tag; 17] = [
        Tag::DigitalTech,
        Tag::BusinessFinance,
        Tag::CreativeMedia,
        Tag::HealthCare,
        Tag::Engineering,
        Tag::Construction,
        Tag::Hospitality,
        Tag::Education,
        Tag::GreenEnergy,
        Tag::Logistics,
        Tag::Analytical,
        Tag::Creative,
        Tag::Caring,
        Tag::Practical,
        Tag::Leadership,
        Tag::Organised,
        Tag::General,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Tag::DigitalTech => "digital-tech",
            Tag::BusinessFinance => "business-finance",
            Tag::CreativeMedia => "creative-media",
            Tag::HealthCare => "health-care",
            Tag::Engineering => "engineering",
            Tag::Construction => "construction",
            Tag::Hospitality => "hospitality",
            Tag::Education => "education",
            Tag::GreenEnergy => "green-energy",
            Tag::Logistics => "logistics",
            Tag::Analytical => "analytical",
            Tag::Creative => "creative",
            Tag::Caring => "caring",
            Tag::Practical => "practical",
            Tag::Leadership => "leadership",
            Tag::Organised => "organised",
            Tag::General => "general",
        }
    }

    pub fn kind(self) -> TagKind {
        match self {
            Tag::DigitalTech
            | Tag::BusinessFinance
            | Tag::CreativeMedia
            | Tag::HealthCare
            | Tag::Engineering
            | Tag::Construction
            | Tag::Hospitality
            | Tag::Education
            | Tag::GreenEnergy
            | Tag::Logistics => TagKind::Sector,
            Tag::Analytical
            | Tag::Creative
            | Tag::Caring
            | Tag::Practical
            | Tag::Leadership
            | Tag::Organised => TagKind::Trait,
            Tag::General => TagKind::Default,
        }
    }

    /// Lenient lookup used at the API edge: unknown slugs map to `None`
    /// so callers can drop them instead of rejecting the whole request.
    pub fn from_slug(slug: &str) -> Option<Tag> {
        let wanted = slug.trim();
        Tag::ALL
            .iter()
            .copied()
            .find(|t| t.slug().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown tag '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::from_slug(s).ok_or_else(|| UnknownTag(s.to_string()))
    }
}
