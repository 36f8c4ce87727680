//! Code generation for the expr! macro.
//!
//! Emits the already converted postfix tokens as a literal vector so the
//! runtime only evaluates.

use plurex_semantics::Token;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Produce an `Expression` constructor for a validated postfix sequence.
pub fn codegen(source: &str, postfix: &[Token]) -> TokenStream {
    let tokens: Vec<TokenStream> = postfix.iter().map(generate_token).collect();

    quote! {
        ::plurex::Expression::from_postfix(#source, ::std::vec![#(#tokens),*])
    }
}

fn generate_token(token: &Token) -> TokenStream {
    let variant = format_ident!("{}", token.token_type().variant_name());
    let symbol = token.symbol();
    quote! {
        ::plurex::Token::new(::plurex::TokenType::#variant, #symbol)
    }
}
