use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Keywords get one variant each so the parser can match on them directly.
/// [`Token::Eof`] is never produced by the logos lexer itself; [`scan`] appends
/// it once the input is exhausted.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens. The quotes are stripped and no escapes are
    /// processed.
    #[token("\"", lex_string)]
    Str(String),
    /// `say`
    #[token("say")]
    Say,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `end`
    #[token("end")]
    End,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// `times`
    #[token("times")]
    Times,
    /// `while`
    #[token("while")]
    While,
    /// `define`
    #[token("define")]
    Define,
    /// `return`
    #[token("return")]
    Return,
    /// `class`
    #[token("class")]
    Class,
    /// `import`
    #[token("import")]
    Import,
    /// Identifier tokens; variable, function or class names such as `x` or
    /// `Counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[token("#", skip_comment)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `:`
    #[token(":")]
    Colon,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// Line breaks. Statements are newline separated.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End of input, always the last token produced by [`scan`].
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics. Incremented for every
/// newline, including the ones inside string literals.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Scans source text into a sequence of `(token, line)` pairs.
///
/// Scanning never fails: characters that do not start any token are dropped.
/// The returned sequence always ends with exactly one [`Token::Eof`].
///
/// # Example
/// ```
/// use aurora::interpreter::lexer::{Token, scan};
///
/// let tokens = scan("say 1 == 2 # done");
/// let kinds: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            [&Token::Say,
///             &Token::Number(1.0),
///             &Token::EqualEqual,
///             &Token::Number(2.0),
///             &Token::Eof]);
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    loop {
        let line = lexer.extras.line;
        match lexer.next() {
            Some(Ok(token)) => tokens.push((token, line)),
            Some(Err(())) => {
                log::trace!("dropping unrecognised input {:?} on line {line}", lexer.slice());
            },
            None => break,
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    log::debug!("scanned {} tokens over {} lines", tokens.len(), lexer.extras.line);
    tokens
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Number(n) => return write!(f, "{n}"),
            Self::Str(s) => return write!(f, "\"{s}\""),
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::Say => "say",
            Self::Let => "let",
            Self::If => "if",
            Self::Else => "else",
            Self::End => "end",
            Self::Repeat => "repeat",
            Self::Times => "times",
            Self::While => "while",
            Self::Define => "define",
            Self::Return => "return",
            Self::Class => "class",
            Self::Import => "import",
            Self::Comment => "COMMENT",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Colon => ":",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Greater => ">",
            Self::Less => "<",
            Self::EqualEqual => "==",
            Self::Equals => "=",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
            Self::Eof => "EOF",
        };
        write!(f, "{text}")
    }
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Consumes a string literal after its opening quote.
///
/// The literal runs up to the next `"`; when there is none, it runs to the end
/// of input. Newlines inside the literal still advance the line counter.
fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let rest = lex.remainder();
    let (contents, consumed) = match rest.find('"') {
        Some(end) => (&rest[..end], end + 1),
        None => (rest, rest.len()),
    };

    let contents = contents.to_string();
    lex.extras.line += contents.chars().filter(|&c| c == '\n').count();
    lex.bump(consumed);
    contents
}

/// Skips a comment up to, but not including, the next newline.
fn skip_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));
    logos::Skip
}
