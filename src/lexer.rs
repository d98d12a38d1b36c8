use logos::{Logos, Span};
use miette::{Diagnostic, SourceSpan};
use std::fmt;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    #[token("def")]
    Def,
    #[token("eq")]
    Eq,
    #[token("z", priority = 3)]
    Zero,
    #[token("s", priority = 3)]
    Succ,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,

    #[token("(")]
    ParenL,
    #[token(")")]
    ParenR,
    #[token("=")]
    Assign,
    #[token(",")]
    Comma,

    #[regex("[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Ident(String),

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Def => write!(f, "'def'"),
            TokenKind::Eq => write!(f, "'eq'"),
            TokenKind::Zero => write!(f, "'z'"),
            TokenKind::Succ => write!(f, "'s'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Then => write!(f, "'then'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::ParenL => write!(f, "'('"),
            TokenKind::ParenR => write!(f, "')'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Ident(name) => write!(f, "identifier '{name}'"),
            TokenKind::Eof => write!(f, "end of program"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(thiserror::Error, Diagnostic, Debug, PartialEq)]
pub enum Error {
    #[error("unrecognized character {found:?} at offset {offset}")]
    UnrecognizedCharacter {
        offset: usize,
        found: char,
        #[label("not part of any token")]
        span: SourceSpan,
    },
}

/// Scans one token starting at `offset`.
///
/// Leading whitespace is skipped. Returns the token together with the offset
/// just past it, which is where the following call should resume. Once the end
/// of `source` is reached the token is [`TokenKind::Eof`] and the returned
/// offset is `source.len()`, so asking again yields `Eof` again.
///
/// Keywords only match as whole words: `defx` and `ifVal` are identifiers.
///
/// `offset` must be `0` or an offset previously returned by this function.
pub fn next_token(source: &str, offset: usize) -> Result<(Token, usize), Error> {
    let rest = source.get(offset..).unwrap_or_default();
    let mut lexer = TokenKind::lexer(rest);

    let Some(result) = lexer.next() else {
        let end = source.len();
        let token = Token {
            kind: TokenKind::Eof,
            span: end..end,
        };
        return Ok((token, end));
    };

    let span = offset + lexer.span().start..offset + lexer.span().end;
    match result {
        Ok(kind) => {
            let next = span.end;
            Ok((Token { kind, span }, next))
        }
        Err(()) => Err(Error::UnrecognizedCharacter {
            offset: span.start,
            found: lexer
                .slice()
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            span: span.into(),
        }),
    }
}

/// Iterator over the tokens of a source string, ending with [`TokenKind::Eof`].
///
/// Stops after the first error.
pub struct Tokens<'a> {
    source: &'a str,
    offset: usize,
    done: bool,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            done: false,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match next_token(self.source, self.offset) {
            Ok((token, next)) => {
                self.done = token.kind == TokenKind::Eof;
                self.offset = next;
                Some(Ok(token))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Tokens::new(source).collect()
}
