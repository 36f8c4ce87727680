// Upper-case variables far from any literal name are accepted
use plurex::{context, expr};

fn main() {
    let expression = expr!("COUNT >= 10 && COUNT != 12");
    assert!(expression.evaluate(&context! { "COUNT" => 11 }, "en").unwrap());
}
