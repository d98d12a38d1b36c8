use crate::ast::{Ast, Definition, EqCond, Expr};
use crate::lexer::{self, Token, TokenKind};
use logos::Span;
use miette::SourceSpan;

pub use _hide_warnings::*;
mod _hide_warnings {
    #![allow(unused_assignments)]

    use crate::lexer::{self, TokenKind};
    use miette::{Diagnostic, SourceSpan};
    use thiserror::Error;

    #[derive(Debug, PartialEq, Error, Diagnostic)]
    pub enum Error {
        #[error(transparent)]
        #[diagnostic(transparent)]
        Lex(#[from] lexer::Error),
        #[error("unexpected token (expected {expected}, found {found})")]
        UnexpectedToken {
            expected: TokenKind,
            found: TokenKind,
            #[label]
            span: SourceSpan,
        },
        #[error("expected identifier, found {found}")]
        ExpectedIdentifier {
            found: TokenKind,
            #[label]
            span: SourceSpan,
        },
        #[error("expected expression, found {found}")]
        ExpectedExpression {
            found: TokenKind,
            #[label]
            span: SourceSpan,
        },
        #[error("expected definition or expression, found {found}")]
        ExpectedDefinition {
            found: TokenKind,
            #[label]
            span: SourceSpan,
        },
        #[error("program must end after the result expression, found {found}")]
        ExpectedEof {
            found: TokenKind,
            #[label("trailing input")]
            span: SourceSpan,
        },
    }
}

/// Recursive-descent parser with one token of lookahead.
///
/// Tokens are scanned on demand: the parser only remembers the current token
/// and the offset to resume scanning from.
pub struct Parser<'a> {
    source: &'a str,
    current: Token,
    offset: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Result<Self, Error> {
        let (current, offset) = lexer::next_token(source, 0)?;
        Ok(Self {
            source,
            current,
            offset,
        })
    }

    /// Moves to the next token and returns the one that was current.
    #[inline]
    fn advance(&mut self) -> Result<Token, Error> {
        let (next, offset) = lexer::next_token(self.source, self.offset)?;
        self.offset = offset;
        Ok(std::mem::replace(&mut self.current, next))
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        &self.current.kind == kind
    }

    fn check_consume(&mut self, kind: &TokenKind) -> Result<Option<Token>, Error> {
        if self.check(kind) {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }

    #[inline]
    fn found(&self) -> TokenKind {
        self.current.kind.clone()
    }

    #[inline]
    fn span(&self) -> SourceSpan {
        self.current.span.clone().into()
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.check(&kind) {
            self.advance()
        } else {
            Err(Error::UnexpectedToken {
                expected: kind,
                found: self.found(),
                span: self.span(),
            })
        }
    }

    fn expect_eof(&self) -> Result<(), Error> {
        if self.check(&TokenKind::Eof) {
            Ok(())
        } else {
            Err(Error::ExpectedEof {
                found: self.found(),
                span: self.span(),
            })
        }
    }

    fn ident(&mut self) -> Result<(String, Span), Error> {
        let TokenKind::Ident(name) = &self.current.kind else {
            return Err(Error::ExpectedIdentifier {
                found: self.found(),
                span: self.span(),
            });
        };

        let name = name.clone();
        let token = self.advance()?;
        Ok((name, token.span))
    }

    pub fn parse_program(&mut self) -> Result<Ast, Error> {
        let mut definitions = Vec::new();

        loop {
            match self.current.kind {
                TokenKind::Eof => {
                    return Ok(Ast {
                        definitions,
                        expr: None,
                    });
                }
                TokenKind::Def => {
                    self.advance()?;
                    definitions.push(self.definition()?);
                }
                TokenKind::Ident(_) | TokenKind::Zero | TokenKind::Succ | TokenKind::If => {
                    let expr = self.expr()?;
                    self.expect_eof()?;
                    return Ok(Ast {
                        definitions,
                        expr: Some(expr),
                    });
                }
                _ => {
                    return Err(Error::ExpectedDefinition {
                        found: self.found(),
                        span: self.span(),
                    });
                }
            }
        }
    }

    /// `Ident ['(' Ident (',' Ident)* ')'] '=' Expr`, after the `def` keyword.
    fn definition(&mut self) -> Result<Definition, Error> {
        let (name, _) = self.ident()?;

        let params = match self.check_consume(&TokenKind::ParenL)? {
            Some(_) => Some(self.params()?),
            None => None,
        };

        self.expect(TokenKind::Assign)?;
        let body = self.expr()?;

        Ok(match params {
            Some(params) => Definition::Func { name, params, body },
            None => Definition::Var { name, value: body },
        })
    }

    fn params(&mut self) -> Result<Vec<String>, Error> {
        let mut params = Vec::new();

        loop {
            let (param, _) = self.ident()?;
            params.push(param);
            if self.check_consume(&TokenKind::Comma)?.is_none() {
                break;
            }
        }

        self.expect(TokenKind::ParenR)?;
        Ok(params)
    }

    pub fn expr(&mut self) -> Result<Expr, Error> {
        match self.current.kind {
            TokenKind::Zero => {
                self.advance()?;
                Ok(Expr::Zero)
            }
            TokenKind::Succ => self.succ(),
            TokenKind::If => self.cond(),
            TokenKind::Ident(_) => self.var_or_call(),
            _ => Err(Error::ExpectedExpression {
                found: self.found(),
                span: self.span(),
            }),
        }
    }

    /// A run of `s(` is consumed in a loop, then closed by as many `)`, so
    /// nesting depth does not grow the call stack.
    fn succ(&mut self) -> Result<Expr, Error> {
        let mut depth = 0;
        while self.check_consume(&TokenKind::Succ)?.is_some() {
            self.expect(TokenKind::ParenL)?;
            depth += 1;
        }

        let mut expr = self.expr()?;
        for _ in 0..depth {
            self.expect(TokenKind::ParenR)?;
            expr = Expr::Succ(Box::new(expr));
        }

        Ok(expr)
    }

    /// `if '(' eq '(' Expr ',' Expr ')' ')' then Expr else Expr`
    fn cond(&mut self) -> Result<Expr, Error> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::ParenL)?;
        self.expect(TokenKind::Eq)?;
        self.expect(TokenKind::ParenL)?;
        let lhs = self.expr()?;
        self.expect(TokenKind::Comma)?;
        let rhs = self.expr()?;
        self.expect(TokenKind::ParenR)?;
        self.expect(TokenKind::ParenR)?;

        self.expect(TokenKind::Then)?;
        let then_expr = self.expr()?;
        self.expect(TokenKind::Else)?;
        let else_expr = self.expr()?;

        Ok(Expr::Cond {
            cond: EqCond {
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
        })
    }

    fn var_or_call(&mut self) -> Result<Expr, Error> {
        let (name, span) = self.ident()?;

        // a call only when '(' touches the name
        if !(self.check(&TokenKind::ParenL) && self.current.span.start == span.end) {
            return Ok(Expr::Var(name));
        }

        self.advance()?;
        let args = self.call_args()?;
        Ok(Expr::Call { name, args })
    }

    fn call_args(&mut self) -> Result<Vec<Expr>, Error> {
        let mut args = Vec::new();

        loop {
            args.push(self.expr()?);
            if self.check_consume(&TokenKind::Comma)?.is_none() {
                break;
            }
        }

        self.expect(TokenKind::ParenR)?;
        Ok(args)
    }
}

pub fn parse(source: &str) -> Result<Ast, Error> {
    Parser::new(source)?.parse_program()
}
