use plurex::expr;

fn main() {
    let _ = expr!("n && m");
}
