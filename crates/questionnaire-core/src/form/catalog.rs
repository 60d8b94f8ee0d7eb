//! Fixed vocabularies for the questionnaire fields.
//!
//! Every enum serializes to the exact string the submission endpoint stores,
//! and `FromStr`/`Display` use the same wire string so binding layers can
//! round-trip user input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Favorite-subject checkboxes, in display order.
pub const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Science",
    "Physics",
    "Chemistry",
    "Biology",
    "English",
    "Filipino",
    "Social Studies",
    "Accounting",
    "Economics",
    "Computer Programming",
    "Arts",
    "Physical Education",
    "Home Economics",
];

/// Interest-area checkboxes, in display order.
pub const INTERESTS: &[&str] = &[
    "Technology",
    "Engineering",
    "Business",
    "Management",
    "Education",
    "Hospitality",
    "Healthcare",
    "Arts and Design",
    "Science and Research",
    "Public Service",
];

/// Lowest selectable skill rating.
pub const MIN_RATING: u8 = 1;
/// Highest selectable skill rating.
pub const MAX_RATING: u8 = 5;

/// Error returned when a string does not name a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// Position of `value` in `catalog`, used to restore display order.
pub fn catalog_position(catalog: &[&str], value: &str) -> Option<usize> {
    catalog.iter().position(|entry| *entry == value)
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// All options, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string sent to the server.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| UnknownOption {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

wire_enum! {
    /// Senior high school grade level.
    GradeLevel, "grade level" {
        Eleven => "11",
        Twelve => "12",
    }
}

wire_enum! {
    /// Senior high school academic or technical-vocational strand.
    Strand, "strand" {
        Stem => "STEM",
        Abm => "ABM",
        Humss => "HUMSS",
        Gas => "GAS",
        TvlIct => "TVL-ICT",
        TvlHe => "TVL-HE",
        TvlIa => "TVL-IA",
    }
}

wire_enum! {
    /// Preferred way of learning.
    LearningStyle, "learning style" {
        Visual => "Visual/Creative learning",
        HandsOn => "Hands-on/Practical learning",
        Collaborative => "Collaborative/Group work",
        Reading => "Reading/Research-based learning",
        Independent => "Independent/Self-paced learning",
    }
}

wire_enum! {
    /// The eight self-rated skills. Wire names double as the payload keys.
    Skill, "skill" {
        Analytical => "analytical",
        Technical => "technical",
        Communication => "communication",
        Creativity => "creativity",
        Numerical => "numerical",
        Leadership => "leadership",
        AttentionToDetail => "attention_to_detail",
        Research => "research",
    }
}

impl Skill {
    /// Human-readable label used in validation messages.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}
