//! Integration tests for the reusable Evaluator and alternative selection.

use plurex::{
    CldrPluralResolver, ErrorPolicy, EvalContext, EvalError, EvalWarning, Evaluator, Expression,
    Number, PluralCategory, context,
};

// =========================================================================
// Builder and Basic API
// =========================================================================

#[test]
fn evaluator_default_is_english() {
    let evaluator = Evaluator::new();
    assert_eq!(evaluator.language(), "en");
    assert_eq!(evaluator.on_error(), ErrorPolicy::Propagate);
}

#[test]
fn evaluator_builder_sets_language() {
    let evaluator = Evaluator::builder().language("ru").build();
    assert_eq!(evaluator.language(), "ru");
    assert!(evaluator.evaluate("n == FEW", &context! { "n" => 3 }).unwrap());
}

#[test]
fn evaluator_with_language_shorthand() {
    let evaluator = Evaluator::with_language("de");
    assert_eq!(evaluator.language(), "de");
}

#[test]
fn evaluator_set_language_changes_plural_rules() {
    let mut evaluator = Evaluator::new();
    let ctx = context! { "n" => 5 };
    assert!(evaluator.evaluate("n == OTHER", &ctx).unwrap());

    evaluator.set_language("ru");
    assert!(evaluator.evaluate("n == MANY", &ctx).unwrap());
}

#[test]
fn evaluator_with_ordinal_resolver() {
    let evaluator = Evaluator::builder()
        .resolver(Box::new(CldrPluralResolver::ordinal()))
        .build();
    assert!(evaluator.evaluate("n == TWO", &context! { "n" => 22 }).unwrap());
    assert!(evaluator.evaluate("n == FEW", &context! { "n" => 3 }).unwrap());
    assert!(evaluator.evaluate("n == OTHER", &context! { "n" => 11 }).unwrap());
}

#[test]
fn evaluator_with_closure_resolver() {
    let always_few = |_: Number, _: &str| -> Result<PluralCategory, EvalError> {
        Ok(PluralCategory::Few)
    };
    let evaluator = Evaluator::builder()
        .language("anything")
        .resolver(Box::new(always_few))
        .build();
    assert!(evaluator.evaluate("n == FEW", &context! { "n" => 100 }).unwrap());
}

// =========================================================================
// Expression cache
// =========================================================================

#[test]
fn compile_caches_by_source() {
    let evaluator = Evaluator::new();
    let first = evaluator.compile("n == ONE").unwrap();
    let second = evaluator.compile("n == ONE").unwrap();
    assert_eq!(first, second);
    assert_eq!(evaluator.cached_expressions(), 1);

    evaluator.evaluate("n == OTHER", &context! { "n" => 2 }).unwrap();
    assert_eq!(evaluator.cached_expressions(), 2);
}

#[test]
fn failed_parses_are_not_cached() {
    let evaluator = Evaluator::new();
    assert!(evaluator.compile("(n == ONE").is_err());
    assert_eq!(evaluator.cached_expressions(), 0);
}

#[test]
fn clear_cache_drops_parsed_expressions() {
    let evaluator = Evaluator::new();
    for n in 0..10 {
        evaluator
            .evaluate(&format!("n == {n}"), &context! { "n" => 1 })
            .unwrap();
    }
    assert_eq!(evaluator.cached_expressions(), 10);

    evaluator.clear_cache();
    assert_eq!(evaluator.cached_expressions(), 0);
    assert!(evaluator.evaluate("n == 1", &context! { "n" => 1 }).unwrap());
    assert_eq!(evaluator.cached_expressions(), 1);
}

// =========================================================================
// Warnings
// =========================================================================

#[test]
fn evaluate_with_warnings_reports_typos() {
    let evaluator = Evaluator::new();
    let ctx = context! { "count" => 1 };
    let (result, warnings) = evaluator
        .evaluate_with_warnings("cuont == ONE", &ctx)
        .unwrap();
    assert!(!result);
    assert_eq!(
        warnings,
        vec![EvalWarning::UnresolvedVariable {
            name: "cuont".to_string(),
            suggestions: vec!["count".to_string()],
        }]
    );
}

#[test]
fn resolved_expressions_have_no_warnings() {
    let evaluator = Evaluator::new();
    let (result, warnings) = evaluator
        .evaluate_with_warnings("count == ONE", &context! { "count" => 1 })
        .unwrap();
    assert!(result);
    assert!(warnings.is_empty());
}

#[test]
fn shared_context_accumulates_warnings_across_expressions() {
    let params = context! { "title" => "Dr." };
    let mut ctx = EvalContext::new(&params);
    let resolver = CldrPluralResolver::cardinal();

    let first = Expression::parse("title == MASCULINE").unwrap();
    let second = Expression::parse("n == ONE").unwrap();
    assert!(!first.evaluate_in(&mut ctx, "en", &resolver).unwrap());
    assert!(!second.evaluate_in(&mut ctx, "en", &resolver).unwrap());

    assert_eq!(ctx.warnings().len(), 2);
    assert!(matches!(
        ctx.warnings()[0],
        EvalWarning::UncomparableValue { .. }
    ));
}

// =========================================================================
// Alternative selection
// =========================================================================

#[test]
fn select_returns_first_true_alternative() {
    let evaluator = Evaluator::new();
    let alternatives = [
        ("n == ZERO", "no items"),
        ("n == ONE", "one item"),
        ("n == OTHER", "{n} items"),
        ("n > 0", "unreachable"),
    ];
    assert_eq!(
        evaluator.select(alternatives, &context! { "n" => 1 }),
        Ok(Some("one item"))
    );
    assert_eq!(
        evaluator.select(alternatives, &context! { "n" => 7 }),
        Ok(Some("{n} items"))
    );
}

#[test]
fn select_with_no_match() {
    let evaluator = Evaluator::new();
    let alternatives = vec![("n == ONE".to_string(), 1), ("n < 0".to_string(), 2)];
    assert_eq!(evaluator.select(alternatives, &context! { "n" => 4 }), Ok(None));
}

#[test]
fn select_propagates_errors_by_default() {
    let evaluator = Evaluator::new();
    let alternatives = [("(n == ONE", "broken"), ("n == ONE", "one")];
    assert!(matches!(
        evaluator.select(alternatives, &context! { "n" => 1 }),
        Err(EvalError::Syntax(_))
    ));
}

#[test]
fn select_skip_policy_moves_on() {
    let evaluator = Evaluator::builder().on_error(ErrorPolicy::Skip).build();
    let alternatives = [
        ("(n == ONE", "broken"),
        ("g < MASCULINE", "bad operator"),
        ("n == ONE", "one"),
    ];
    let ctx = context! { "n" => 1, "g" => plurex::Gender::Feminine };
    assert_eq!(evaluator.select(alternatives, &ctx), Ok(Some("one")));
}

#[test]
fn select_stops_before_later_errors() {
    let evaluator = Evaluator::new();
    let alternatives = [("n == ONE", "one"), ("(", "never parsed")];
    assert_eq!(
        evaluator.select(alternatives, &context! { "n" => 1 }),
        Ok(Some("one"))
    );
}
