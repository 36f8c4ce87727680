//! The expr! macro must produce exactly what runtime parsing produces.

use plurex::{Expression, Gender, context, expr};

#[test]
fn macro_matches_runtime_parse() {
    let cases = [
        (expr!("n == ONE"), "n == ONE"),
        (expr!("(a > 1 && b < 5) || c == MASCULINE"), "(a > 1 && b < 5) || c == MASCULINE"),
        (expr!("x >= 10.25 || x != 0"), "x >= 10.25 || x != 0"),
        (expr!("((g == FEMININE))"), "((g == FEMININE))"),
    ];
    for (compiled, source) in cases {
        assert_eq!(compiled, Expression::parse(source).unwrap(), "{source}");
    }
}

#[test]
fn macro_expressions_evaluate() {
    let greeting = expr!("g == FEMININE && n != ONE");
    let ctx = context! { "g" => Gender::Feminine, "n" => 3 };
    assert!(greeting.evaluate(&ctx, "en").unwrap());
    assert_eq!(greeting.source(), "g == FEMININE && n != ONE");
    assert_eq!(greeting.to_string(), "g == FEMININE && n != ONE");
}
