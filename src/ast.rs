//! Surface syntax, as produced by the parser.

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Zero,
    Succ(Box<Expr>),
    Var(String),
    Call {
        name: String,
        args: Vec<Expr>,
    },
    Cond {
        cond: EqCond,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
}

impl Drop for Expr {
    fn drop(&mut self) {
        let Expr::Succ(arg) = self else { return };
        let mut next = std::mem::replace(arg.as_mut(), Expr::Zero);
        loop {
            let inner = match &mut next {
                Expr::Succ(arg) => std::mem::replace(arg.as_mut(), Expr::Zero),
                _ => break,
            };
            next = inner;
        }
    }
}

/// The `eq(lhs, rhs)` test of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct EqCond {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Var {
        name: String,
        value: Expr,
    },
    Func {
        name: String,
        params: Vec<String>,
        body: Expr,
    },
}

impl Definition {
    pub fn name(&self) -> &str {
        match self {
            Definition::Var { name, .. } | Definition::Func { name, .. } => name,
        }
    }
}

/// A parsed program: definitions in source order, then at most one expression
/// to evaluate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ast {
    pub definitions: Vec<Definition>,
    pub expr: Option<Expr>,
}
