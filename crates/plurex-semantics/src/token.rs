//! Lexical units of the condition language.

use std::fmt;

/// The closed set of lexical categories.
///
/// `Variable` and `Number` carry the text they were read from; every other
/// type has exactly one canonical symbol, used both for lexing and for error
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Variable,
    Number,
    GroupStart,
    GroupEnd,
    And,
    Or,
    LessThan,
    GreaterThan,
    EqualTo,
    NotEqualTo,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
    Masculine,
    Feminine,
    Neuter,
}

/// Plural-category literal types, in CLDR order.
pub const PLURAL_LITERALS: &[TokenType] = &[
    TokenType::Zero,
    TokenType::One,
    TokenType::Two,
    TokenType::Few,
    TokenType::Many,
    TokenType::Other,
];

/// Gender literal types.
pub const GENDER_LITERALS: &[TokenType] = &[
    TokenType::Masculine,
    TokenType::Feminine,
    TokenType::Neuter,
];

/// Every literal type that an identifier may resolve to.
pub const LITERALS: &[TokenType] = &[
    TokenType::Zero,
    TokenType::One,
    TokenType::Two,
    TokenType::Few,
    TokenType::Many,
    TokenType::Other,
    TokenType::Masculine,
    TokenType::Feminine,
    TokenType::Neuter,
];

impl TokenType {
    /// The canonical symbol, or `None` for types that carry dynamic text.
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            TokenType::Variable | TokenType::Number => None,
            TokenType::GroupStart => Some("("),
            TokenType::GroupEnd => Some(")"),
            TokenType::And => Some("&&"),
            TokenType::Or => Some("||"),
            TokenType::LessThan => Some("<"),
            TokenType::GreaterThan => Some(">"),
            TokenType::EqualTo => Some("=="),
            TokenType::NotEqualTo => Some("!="),
            TokenType::LessThanOrEqualTo => Some("<="),
            TokenType::GreaterThanOrEqualTo => Some(">="),
            TokenType::Zero => Some("ZERO"),
            TokenType::One => Some("ONE"),
            TokenType::Two => Some("TWO"),
            TokenType::Few => Some("FEW"),
            TokenType::Many => Some("MANY"),
            TokenType::Other => Some("OTHER"),
            TokenType::Masculine => Some("MASCULINE"),
            TokenType::Feminine => Some("FEMININE"),
            TokenType::Neuter => Some("NEUTER"),
        }
    }

    /// Look up a literal type by its exact (case-sensitive) name.
    pub fn from_literal_name(name: &str) -> Option<TokenType> {
        LITERALS
            .iter()
            .copied()
            .find(|literal| literal.symbol() == Some(name))
    }

    pub const fn is_plural_literal(self) -> bool {
        matches!(
            self,
            TokenType::Zero
                | TokenType::One
                | TokenType::Two
                | TokenType::Few
                | TokenType::Many
                | TokenType::Other
        )
    }

    pub const fn is_gender_literal(self) -> bool {
        matches!(
            self,
            TokenType::Masculine | TokenType::Feminine | TokenType::Neuter
        )
    }

    /// Values to be compared: variables, numbers and literals.
    pub const fn is_operand(self) -> bool {
        matches!(self, TokenType::Variable | TokenType::Number)
            || self.is_plural_literal()
            || self.is_gender_literal()
    }

    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenType::LessThan
                | TokenType::GreaterThan
                | TokenType::EqualTo
                | TokenType::NotEqualTo
                | TokenType::LessThanOrEqualTo
                | TokenType::GreaterThanOrEqualTo
        )
    }

    pub const fn is_boolean(self) -> bool {
        matches!(self, TokenType::And | TokenType::Or)
    }

    pub const fn is_operator(self) -> bool {
        self.is_comparison() || self.is_boolean()
    }

    /// Binding strength of an operator: comparisons bind tighter than `&&`/`||`.
    pub const fn precedence(self) -> Option<u8> {
        if self.is_comparison() {
            Some(1)
        } else if self.is_boolean() {
            Some(0)
        } else {
            None
        }
    }

    /// Upper-case name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::Variable => "VARIABLE",
            TokenType::Number => "NUMBER",
            TokenType::GroupStart => "GROUP_START",
            TokenType::GroupEnd => "GROUP_END",
            TokenType::And => "AND",
            TokenType::Or => "OR",
            TokenType::LessThan => "LESS_THAN",
            TokenType::GreaterThan => "GREATER_THAN",
            TokenType::EqualTo => "EQUAL_TO",
            TokenType::NotEqualTo => "NOT_EQUAL_TO",
            TokenType::LessThanOrEqualTo => "LESS_THAN_OR_EQUAL_TO",
            TokenType::GreaterThanOrEqualTo => "GREATER_THAN_OR_EQUAL_TO",
            TokenType::Zero => "ZERO",
            TokenType::One => "ONE",
            TokenType::Two => "TWO",
            TokenType::Few => "FEW",
            TokenType::Many => "MANY",
            TokenType::Other => "OTHER",
            TokenType::Masculine => "MASCULINE",
            TokenType::Feminine => "FEMININE",
            TokenType::Neuter => "NEUTER",
        }
    }

    /// The Rust variant name, for code that names the variant in a path.
    pub const fn variant_name(self) -> &'static str {
        match self {
            TokenType::Variable => "Variable",
            TokenType::Number => "Number",
            TokenType::GroupStart => "GroupStart",
            TokenType::GroupEnd => "GroupEnd",
            TokenType::And => "And",
            TokenType::Or => "Or",
            TokenType::LessThan => "LessThan",
            TokenType::GreaterThan => "GreaterThan",
            TokenType::EqualTo => "EqualTo",
            TokenType::NotEqualTo => "NotEqualTo",
            TokenType::LessThanOrEqualTo => "LessThanOrEqualTo",
            TokenType::GreaterThanOrEqualTo => "GreaterThanOrEqualTo",
            TokenType::Zero => "Zero",
            TokenType::One => "One",
            TokenType::Two => "Two",
            TokenType::Few => "Few",
            TokenType::Many => "Many",
            TokenType::Other => "Other",
            TokenType::Masculine => "Masculine",
            TokenType::Feminine => "Feminine",
            TokenType::Neuter => "Neuter",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable `(type, symbol)` pair produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    token_type: TokenType,
    symbol: String,
}

impl Token {
    /// Create a token carrying arbitrary text.
    pub fn new(token_type: TokenType, symbol: impl Into<String>) -> Self {
        Self {
            token_type,
            symbol: symbol.into(),
        }
    }

    /// Create a token whose symbol is the type's canonical one.
    ///
    /// Types without a canonical symbol get their upper-case name.
    pub fn fixed(token_type: TokenType) -> Self {
        Self::new(
            token_type,
            token_type.symbol().unwrap_or(token_type.name()),
        )
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(TokenType::Variable, name)
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenType::Number, text)
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_names_round_trip_through_registry() {
        for literal in LITERALS {
            let name = literal.symbol().unwrap();
            assert_eq!(TokenType::from_literal_name(name), Some(*literal));
        }
        assert_eq!(TokenType::from_literal_name("one"), None);
        assert_eq!(TokenType::from_literal_name("&&"), None);
    }

    #[test]
    fn variant_names_match_debug_output() {
        for ty in [
            TokenType::Variable,
            TokenType::GroupStart,
            TokenType::GreaterThanOrEqualTo,
            TokenType::Other,
            TokenType::Neuter,
        ] {
            assert_eq!(ty.variant_name(), format!("{ty:?}"));
        }
    }

    #[test]
    fn precedence_orders_comparisons_above_booleans() {
        assert!(TokenType::LessThan.precedence() > TokenType::And.precedence());
        assert_eq!(TokenType::And.precedence(), TokenType::Or.precedence());
        assert_eq!(TokenType::GroupStart.precedence(), None);
        assert_eq!(TokenType::Variable.precedence(), None);
    }

    #[test]
    fn classification_is_disjoint() {
        for ty in [
            TokenType::Variable,
            TokenType::Number,
            TokenType::GroupStart,
            TokenType::GroupEnd,
            TokenType::And,
            TokenType::EqualTo,
            TokenType::Few,
            TokenType::Neuter,
        ] {
            let kinds = [ty.is_operand(), ty.is_operator()]
                .iter()
                .filter(|k| **k)
                .count();
            assert!(kinds <= 1, "{ty} classified twice");
        }
        assert!(!TokenType::GroupStart.is_operand());
        assert!(!TokenType::GroupStart.is_operator());
    }
}
