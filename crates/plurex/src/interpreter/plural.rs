//! CLDR plural category resolution.
//!
//! Comparisons such as `n == FEW` need the plural category of `n` in the
//! current language. The evaluator asks a [`PluralResolver`] for it, so the
//! rule tables stay outside the evaluator and tests can inject fakes.
//!
//! [`CldrPluralResolver`] is the standard implementation, backed by
//! `icu_plurals`. Plural rules are cached per thread per language and rule
//! type to avoid re-creating `PluralRules` instances on every call.

use std::cell::RefCell;

use fixed_decimal::Decimal;
use icu_locale_core::Locale;
use icu_plurals::{PluralRuleType, PluralRules};

use crate::interpreter::EvalError;
use crate::interpreter::operand::OperandType;
use crate::types::{Number, PluralCategory};

/// Maps a number and a language to a plural category.
pub trait PluralResolver {
    /// Resolve the plural category of `number` in `lang`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnsupportedLocale`] when no rules exist for `lang`.
    fn plural_category(&self, number: Number, lang: &str) -> Result<PluralCategory, EvalError>;
}

impl<F> PluralResolver for F
where
    F: Fn(Number, &str) -> Result<PluralCategory, EvalError>,
{
    fn plural_category(&self, number: Number, lang: &str) -> Result<PluralCategory, EvalError> {
        self(number, lang)
    }
}

/// Supported language codes for plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code and rule type.
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRuleType, PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

/// Plural resolver using the CLDR data compiled into `icu_plurals`.
///
/// # Examples
///
/// ```
/// use plurex::{CldrPluralResolver, Number, PluralCategory, PluralResolver};
///
/// let cardinal = CldrPluralResolver::cardinal();
/// assert_eq!(
///     cardinal.plural_category(Number::Integer(5), "ru").unwrap(),
///     PluralCategory::Many
/// );
///
/// let ordinal = CldrPluralResolver::ordinal();
/// assert_eq!(
///     ordinal.plural_category(Number::Integer(2), "en-US").unwrap(),
///     PluralCategory::Two
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CldrPluralResolver {
    rule_type: PluralRuleType,
}

impl CldrPluralResolver {
    /// Counting rules: "1 card", "2 cards".
    pub const fn cardinal() -> Self {
        Self {
            rule_type: PluralRuleType::Cardinal,
        }
    }

    /// Ranking rules: "1st", "2nd", "3rd".
    pub const fn ordinal() -> Self {
        Self {
            rule_type: PluralRuleType::Ordinal,
        }
    }

    pub fn rule_type(&self) -> PluralRuleType {
        self.rule_type
    }
}

impl Default for CldrPluralResolver {
    fn default() -> Self {
        Self::cardinal()
    }
}

impl PluralResolver for CldrPluralResolver {
    fn plural_category(&self, number: Number, lang: &str) -> Result<PluralCategory, EvalError> {
        let code = language_code(lang).ok_or_else(|| EvalError::UnsupportedLocale {
            locale: lang.to_string(),
        })?;
        PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
            if let Some((_, _, rules)) = cache
                .iter()
                .find(|(c, ty, _)| *c == code && *ty == self.rule_type)
            {
                return category_for(rules, number);
            }
            let rules = build_rules(code, self.rule_type, lang)?;
            let category = category_for(&rules, number);
            cache.push((code, self.rule_type, rules));
            category
        })
    }
}

/// Extract the language subtag of a locale tag and map it to a supported
/// static code: `"en-US"` becomes `"en"`.
fn language_code(lang: &str) -> Option<&'static str> {
    let locale = Locale::try_from_str(lang).ok()?;
    let language = locale.id.language.as_str();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == language)
        .copied()
}

/// Build `PluralRules` for a supported language code.
fn build_rules(
    code: &'static str,
    rule_type: PluralRuleType,
    requested: &str,
) -> Result<PluralRules, EvalError> {
    let unsupported = || EvalError::UnsupportedLocale {
        locale: requested.to_string(),
    };
    let locale = Locale::try_from_str(code).map_err(|_| unsupported())?;
    PluralRules::try_new(locale.into(), rule_type.into()).map_err(|_| unsupported())
}

fn category_for(rules: &PluralRules, number: Number) -> Result<PluralCategory, EvalError> {
    match number {
        Number::Integer(n) => Ok(rules.category_for(n).into()),
        Number::Decimal { .. } => {
            let text = number.to_string();
            let decimal = Decimal::try_from_str(&text).map_err(|_| {
                EvalError::TypeExtraction {
                    symbol: text.clone(),
                    expected: OperandType::Plural,
                }
            })?;
            Ok(rules.category_for(&decimal).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_subtags_are_ignored() {
        assert_eq!(language_code("en-US"), Some("en"));
        assert_eq!(language_code("pt-BR"), Some("pt"));
        assert_eq!(language_code("ru"), Some("ru"));
    }

    #[test]
    fn unknown_languages_are_unsupported() {
        assert_eq!(language_code("xx"), None);
        assert_eq!(language_code("not a locale"), None);
        let err = CldrPluralResolver::cardinal()
            .plural_category(Number::Integer(1), "xx")
            .unwrap_err();
        assert_eq!(
            err,
            EvalError::UnsupportedLocale {
                locale: "xx".to_string()
            }
        );
    }

    #[test]
    fn cache_separates_rule_types() {
        let cardinal = CldrPluralResolver::cardinal();
        let ordinal = CldrPluralResolver::ordinal();
        assert_eq!(
            cardinal.plural_category(Number::Integer(2), "en").unwrap(),
            PluralCategory::Other
        );
        assert_eq!(
            ordinal.plural_category(Number::Integer(2), "en").unwrap(),
            PluralCategory::Two
        );
        assert_eq!(
            cardinal.plural_category(Number::Integer(2), "en").unwrap(),
            PluralCategory::Other
        );
    }

    #[test]
    fn decimals_use_visible_fraction_digits() {
        let cardinal = CldrPluralResolver::cardinal();
        assert_eq!(
            cardinal.plural_category(Number::decimal(1.5), "en").unwrap(),
            PluralCategory::Other
        );
        assert_eq!(
            cardinal.plural_category(Number::decimal(1.5), "fr").unwrap(),
            PluralCategory::One
        );
        let written = Number::parse("1.0").unwrap();
        assert_eq!(
            cardinal.plural_category(written, "en").unwrap(),
            PluralCategory::Other
        );
        assert_eq!(
            cardinal.plural_category(Number::Integer(1), "en").unwrap(),
            PluralCategory::One
        );
    }
}
