use aurora::{interpreter::lexer::Token, scan};

fn kinds(source: &str) -> Vec<Token> {
    scan(source).into_iter().map(|(token, _)| token).collect()
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(scan(""), [(Token::Eof, 1)]);
    assert_eq!(scan("   \t "), [(Token::Eof, 1)]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("say let if else end repeat times while define return class import"),
               [Token::Say,
                Token::Let,
                Token::If,
                Token::Else,
                Token::End,
                Token::Repeat,
                Token::Times,
                Token::While,
                Token::Define,
                Token::Return,
                Token::Class,
                Token::Import,
                Token::Eof]);

    assert_eq!(kinds("sayer _tmp x1 End"),
               [Token::Identifier("sayer".to_string()),
                Token::Identifier("_tmp".to_string()),
                Token::Identifier("x1".to_string()),
                Token::Identifier("End".to_string()),
                Token::Eof]);
}

#[test]
fn numbers() {
    assert_eq!(kinds("42 3.25"), [Token::Number(42.0), Token::Number(3.25), Token::Eof]);
    assert_eq!(kinds("7."), [Token::Number(7.0), Token::Dot, Token::Eof]);
}

#[test]
fn operators_and_punctuation() {
    assert_eq!(kinds("a == b = c"),
               [Token::Identifier("a".to_string()),
                Token::EqualEqual,
                Token::Identifier("b".to_string()),
                Token::Equals,
                Token::Identifier("c".to_string()),
                Token::Eof]);

    assert_eq!(kinds("+-*/<>()[],.:"),
               [Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::Less,
                Token::Greater,
                Token::LParen,
                Token::RParen,
                Token::LBracket,
                Token::RBracket,
                Token::Comma,
                Token::Dot,
                Token::Colon,
                Token::Eof]);
}

#[test]
fn newlines_carry_their_own_line() {
    assert_eq!(scan("say 1\n\nsay 2"),
               [(Token::Say, 1),
                (Token::Number(1.0), 1),
                (Token::NewLine, 1),
                (Token::NewLine, 2),
                (Token::Say, 3),
                (Token::Number(2.0), 3),
                (Token::Eof, 3)]);
}

#[test]
fn comments_run_to_the_end_of_the_line() {
    assert_eq!(scan("say 1 # say 2\nsay 3"),
               [(Token::Say, 1),
                (Token::Number(1.0), 1),
                (Token::NewLine, 1),
                (Token::Say, 2),
                (Token::Number(3.0), 2),
                (Token::Eof, 2)]);
}

#[test]
fn unknown_characters_are_dropped() {
    assert_eq!(kinds("1 @ $ ! 2"), [Token::Number(1.0), Token::Number(2.0), Token::Eof]);
}

#[test]
fn strings() {
    assert_eq!(kinds("\"hi there\" \"\""),
               [Token::Str("hi there".to_string()), Token::Str(String::new()), Token::Eof]);
    assert_eq!(kinds("\"# kept\""), [Token::Str("# kept".to_string()), Token::Eof]);
    assert_eq!(kinds("say \"open"),
               [Token::Say, Token::Str("open".to_string()), Token::Eof]);
}

#[test]
fn multiline_strings_advance_the_line() {
    assert_eq!(scan("\"a\nb\" x"),
               [(Token::Str("a\nb".to_string()), 1),
                (Token::Identifier("x".to_string()), 2),
                (Token::Eof, 2)]);
}
