use plurex_semantics::{
    GENDER_LITERALS, LITERALS, PLURAL_LITERALS, SyntaxError, Token, TokenType, check_structure,
    parse_postfix, to_postfix, tokenize,
};

fn symbols(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::symbol).collect()
}

#[test]
fn every_fixed_symbol_lexes_to_its_type() {
    let fixed = [
        TokenType::GroupStart,
        TokenType::GroupEnd,
        TokenType::And,
        TokenType::Or,
        TokenType::LessThan,
        TokenType::GreaterThan,
        TokenType::EqualTo,
        TokenType::NotEqualTo,
        TokenType::LessThanOrEqualTo,
        TokenType::GreaterThanOrEqualTo,
    ];
    for ty in fixed.iter().chain(LITERALS) {
        let symbol = ty.symbol().unwrap();
        let tokens = tokenize(symbol).unwrap();
        assert_eq!(tokens, vec![Token::fixed(*ty)], "symbol {symbol}");
    }
}

#[test]
fn literal_tables_partition_literals() {
    assert_eq!(PLURAL_LITERALS.len() + GENDER_LITERALS.len(), LITERALS.len());
    assert!(PLURAL_LITERALS.iter().all(|t| t.is_plural_literal()));
    assert!(GENDER_LITERALS.iter().all(|t| t.is_gender_literal()));
}

#[test]
fn tokens_follow_source_order() {
    let tokens = tokenize("(count >= 2 && g != FEMININE) || count == ZERO").unwrap();
    assert_eq!(
        symbols(&tokens),
        vec![
            "(", "count", ">=", "2", "&&", "g", "!=", "FEMININE", ")", "||", "count", "==",
            "ZERO"
        ]
    );
}

#[test]
fn unrecognized_input_reports_offset() {
    let err = tokenize("n == 1 & m == 2").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::Tokenization {
            position: 7,
            found: "&".to_string()
        }
    );
    assert_eq!(err.to_string(), "unrecognized input '&' at offset 7");
}

#[test]
fn negative_numbers_are_not_part_of_the_language() {
    assert!(matches!(
        tokenize("n > -1"),
        Err(SyntaxError::Tokenization { position: 4, .. })
    ));
}

#[test]
fn parse_postfix_chains_both_stages() {
    let tokens = tokenize("a < 1 || b > 2").unwrap();
    assert_eq!(parse_postfix("a < 1 || b > 2"), to_postfix(&tokens));
    assert_eq!(
        symbols(&parse_postfix("a < 1 || b > 2").unwrap()),
        vec!["a", "1", "<", "b", "2", ">", "||"]
    );
}

#[test]
fn balanced_grammar_expressions_convert_and_check() {
    let expressions = [
        "1==1",
        "n == ONE",
        "(n == ONE)",
        "((a > 1) && (b <= 5)) || (c == MASCULINE && d != NEUTER)",
        "a > 1 && b < 5 && c >= 6 || d <= 7",
        "x == OTHER || (y == FEW && (z == MANY || w == TWO))",
    ];
    for expression in expressions {
        let postfix = parse_postfix(expression)
            .unwrap_or_else(|e| panic!("{expression}: {e}"));
        assert!(
            !postfix
                .iter()
                .any(|t| matches!(t.token_type(), TokenType::GroupStart | TokenType::GroupEnd)),
            "{expression}: groups leaked into postfix"
        );
        check_structure(&postfix).unwrap_or_else(|e| panic!("{expression}: {e}"));
    }
}

#[test]
fn malformed_messages_name_the_operator() {
    let err = check_structure(&parse_postfix("a || b").unwrap()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed expression: '||' combines conditions, not values"
    );
}
