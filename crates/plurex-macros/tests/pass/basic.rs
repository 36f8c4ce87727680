// Plural literal comparison evaluated against English cardinal rules
use plurex::{context, expr};

fn main() {
    let one = expr!("n == ONE");
    assert!(one.evaluate(&context! { "n" => 1 }, "en").unwrap());
    assert!(!one.evaluate(&context! { "n" => 2 }, "en").unwrap());
    assert_eq!(one.source(), "n == ONE");
    assert_eq!(one.postfix().len(), 3);
}
