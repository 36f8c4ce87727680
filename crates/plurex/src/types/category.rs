use std::fmt;

use plurex_semantics::TokenType;
use serde::{Deserialize, Serialize};

/// CLDR plural category a number falls into for a given language.
///
/// English only distinguishes `One` and `Other`; Russian adds `Few` and
/// `Many`; Arabic uses all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// Look up a category by its literal name (`ZERO` ... `OTHER`).
    pub fn by_name(name: &str) -> Option<PluralCategory> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The category named by a literal token type, if it is one.
    pub fn from_token_type(token_type: TokenType) -> Option<PluralCategory> {
        match token_type {
            TokenType::Zero => Some(PluralCategory::Zero),
            TokenType::One => Some(PluralCategory::One),
            TokenType::Two => Some(PluralCategory::Two),
            TokenType::Few => Some(PluralCategory::Few),
            TokenType::Many => Some(PluralCategory::Many),
            TokenType::Other => Some(PluralCategory::Other),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PluralCategory::Zero => "ZERO",
            PluralCategory::One => "ONE",
            PluralCategory::Two => "TWO",
            PluralCategory::Few => "FEW",
            PluralCategory::Many => "MANY",
            PluralCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<icu_plurals::PluralCategory> for PluralCategory {
    fn from(category: icu_plurals::PluralCategory) -> Self {
        match category {
            icu_plurals::PluralCategory::Zero => PluralCategory::Zero,
            icu_plurals::PluralCategory::One => PluralCategory::One,
            icu_plurals::PluralCategory::Two => PluralCategory::Two,
            icu_plurals::PluralCategory::Few => PluralCategory::Few,
            icu_plurals::PluralCategory::Many => PluralCategory::Many,
            icu_plurals::PluralCategory::Other => PluralCategory::Other,
        }
    }
}
