use calc_interp::interpreter::lexer::{TOKEN_TEXT_MAX, Token, TokenKind, Tokenizer};

/// Collects every token up to, but not including, the end of input.
fn tokens(src: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(src);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token();
        if token.kind == TokenKind::EndOfInput {
            return tokens;
        }
        tokens.push(token);
    }
}

fn kinds(src: &str) -> Vec<TokenKind> {
    tokens(src).into_iter().map(|t| t.kind).collect()
}

#[test]
fn operators_and_punctuation() {
    use TokenKind::{Add, Assign, Div, LParen, Mul, RParen, Sub};

    assert_eq!(kinds("+ * - / ( ) :="), [Add, Mul, Sub, Div, LParen, RParen, Assign]);
    assert_eq!(kinds("(-)"), [LParen, Sub, RParen]);
}

#[test]
fn keywords_match_whole_words_in_any_case() {
    use TokenKind::{Identifier, ReadKeyword, WriteKeyword};

    assert_eq!(kinds("READ read ReAd WRITE write"),
               [ReadKeyword, ReadKeyword, ReadKeyword, WriteKeyword, WriteKeyword]);
    assert_eq!(kinds("reader writes WRITEx re"), [Identifier, Identifier, Identifier, Identifier]);
}

#[test]
fn identifiers_keep_their_case() {
    let tokens = tokens("Sum x_1 aB9");
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(texts, ["Sum", "x_1", "aB9"]);
}

#[test]
fn numbers_with_optional_fraction() {
    let tokens = tokens("42 3.25 0.5");

    assert!(tokens.iter().all(|t| t.kind == TokenKind::NumberLiteral));
    assert_eq!(tokens[1].text, "3.25");
}

#[test]
fn number_does_not_swallow_following_token() {
    use TokenKind::{Identifier, Mul, NumberLiteral};

    assert_eq!(kinds("2x"), [NumberLiteral, Identifier]);
    assert_eq!(kinds("2*x"), [NumberLiteral, Mul, Identifier]);
}

#[test]
fn second_decimal_point_is_error() {
    let tokens = tokens("1.2.3");

    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].text, "1.2.");
    assert_eq!(tokens[1].kind, TokenKind::NumberLiteral);
    assert_eq!(tokens[1].text, "3");
}

#[test]
fn unknown_character_is_error() {
    let tokens = tokens("x $ y");

    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].text, "$");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn block_comments_are_skipped_and_lines_counted() {
    let tokens = tokens("/* one\ntwo */ x\n/* three */ y\n\n/**/z");
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();

    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(lines, [2, 3, 5]);
}

#[test]
fn slash_without_star_is_division() {
    assert_eq!(kinds("6/2"), [TokenKind::NumberLiteral, TokenKind::Div, TokenKind::NumberLiteral]);
}

#[test]
fn comment_separates_tokens() {
    let tokens = tokens("1/**/2");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "1");
    assert_eq!(tokens[1].text, "2");
}

#[test]
fn unterminated_comment_runs_to_end_of_input() {
    let mut tokenizer = Tokenizer::new("x /* never\nclosed y := 2");

    assert_eq!(tokenizer.next_token().kind, TokenKind::Identifier);
    assert_eq!(tokenizer.next_token().kind, TokenKind::EndOfInput);
    assert_eq!(tokenizer.next_token().kind, TokenKind::EndOfInput);
    assert_eq!(tokenizer.line(), 2);
}

#[test]
fn end_of_input_repeats_and_reports_last_line() {
    let mut tokenizer = Tokenizer::new("write 1\n\n");

    tokenizer.next_token();
    tokenizer.next_token();
    let end = tokenizer.next_token();

    assert_eq!(end.kind, TokenKind::EndOfInput);
    assert_eq!(end.line, 3);
    assert_eq!(tokenizer.next_token().kind, TokenKind::EndOfInput);
}

#[test]
fn long_text_is_truncated() {
    let name = "a".repeat(150);
    let tokens = tokens(&name);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text.len(), TOKEN_TEXT_MAX);
}

#[test]
fn crlf_line_endings() {
    let tokens = tokens("x\r\ny");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn point_without_digits_is_not_part_of_number() {
    let tokens = tokens("1.x");

    assert_eq!(tokens.len(), 3);
    assert_eq!((tokens[0].kind, tokens[0].text.as_str()), (TokenKind::NumberLiteral, "1"));
    assert_eq!((tokens[1].kind, tokens[1].text.as_str()), (TokenKind::Error, "."));
    assert_eq!(tokens[2].kind, TokenKind::Identifier);

    use TokenKind::{Add, Error, NumberLiteral};
    assert_eq!(kinds("1.+2"), [NumberLiteral, Error, Add, NumberLiteral]);
}

#[test]
fn number_value_uses_whole_literal() {
    let literal = format!("1{}", "0".repeat(120));
    let tokens = tokens(&literal);

    assert_eq!(tokens[0].text.len(), TOKEN_TEXT_MAX);
    assert_eq!(tokens[0].value, Some(1e120));
    assert_eq!(self::tokens("2.5")[0].value, Some(2.5));
    assert_eq!(self::tokens("x")[0].value, None);
}
