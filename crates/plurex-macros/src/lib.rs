use proc_macro::TokenStream;
use syn::LitStr;

mod codegen;
mod validate;

/// The expr! macro for compile-time checked condition expressions.
///
/// Tokenizes the literal, converts it to postfix order and checks that it
/// reduces to a single condition, all at compile time. Mistakes become
/// compile errors pointing at the literal.
///
/// # Generated Code
///
/// Expands to `::plurex::Expression::from_postfix(source, tokens)`, so no
/// parsing happens at runtime.
///
/// # Example
///
/// ```ignore
/// let expr = expr!("n == ONE || n == ZERO");
/// assert!(expr.evaluate(&context! { "n" => 1 }, "en")?);
///
/// expr!("n == OHTER"); // error: unknown literal 'OHTER', did you mean 'OTHER'?
/// expr!("(n == ONE"); // error: unbalanced group: unmatched '('
/// ```
///
/// Upper-case variables that are a keyboard slip away from a literal
/// (`OHTER`, `FEMINNE`, `ONNE`) are rejected here even though
/// `Expression::parse` accepts them as variables.
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let literal = syn::parse_macro_input!(input as LitStr);
    let source = literal.value();

    match validate::validate(&source) {
        Ok(postfix) => codegen::codegen(&source, &postfix).into(),
        Err(message) => syn::Error::new(literal.span(), message)
            .to_compile_error()
            .into(),
    }
}
