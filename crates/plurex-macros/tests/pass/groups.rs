// Grouped conditions mixing numbers and genders
use plurex::{Gender, context, expr};

fn main() {
    let expression = expr!("(a > 1 && b < 5) || c == MASCULINE");
    let ctx = context! { "a" => 0, "b" => 9, "c" => Gender::Masculine };
    assert!(expression.evaluate(&ctx, "en").unwrap());

    let parsed: plurex::Expression = "(a > 1 && b < 5) || c == MASCULINE".parse().unwrap();
    assert_eq!(expression, parsed);
}
