use std::fmt;

use plurex_semantics::TokenType;
use serde::{Deserialize, Serialize};

/// Grammatical gender used to pick agreeing translation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    /// Look up a gender by its literal name (`MASCULINE`, `FEMININE`, `NEUTER`).
    ///
    /// Matching is case-sensitive, like the expression tokenizer.
    pub fn by_name(name: &str) -> Option<Gender> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }

    /// The gender named by a literal token type, if it is one.
    pub fn from_token_type(token_type: TokenType) -> Option<Gender> {
        match token_type {
            TokenType::Masculine => Some(Gender::Masculine),
            TokenType::Feminine => Some(Gender::Feminine),
            TokenType::Neuter => Some(Gender::Neuter),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gender::Masculine => "MASCULINE",
            Gender::Feminine => "FEMININE",
            Gender::Neuter => "NEUTER",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
