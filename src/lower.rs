//! Turns a surface [`Ast`] into a [`Program`].
//!
//! Functions are collected first, so every variable definition can call any
//! function regardless of where it is defined. Variables are then evaluated
//! eagerly, in source order, each one seeing only the variables defined above
//! it.

use crate::ast::{Ast, Definition, EqCond, Expr};
use crate::eval::{self, Policy};
use crate::exp::{EqExp, Exp, FuncEnv, Lambda, Program, VarEnv};
use crate::nat::Nat;
use std::convert::Infallible;

impl From<&Expr> for Exp {
    fn from(expr: &Expr) -> Self {
        // peel `s(...)` wrappers in a loop so long chains stay off the stack
        let mut depth = 0;
        let mut expr = expr;
        let base = loop {
            match expr {
                Expr::Succ(arg) => {
                    depth += 1;
                    expr = arg;
                }
                Expr::Zero => break Exp::Zero,
                Expr::Var(name) => break Exp::Var(name.clone()),
                Expr::Call { name, args } => {
                    break Exp::Term {
                        sym: name.clone(),
                        args: args.iter().map(Exp::from).collect(),
                    };
                }
                Expr::Cond {
                    cond,
                    then_expr,
                    else_expr,
                } => {
                    break Exp::Cond {
                        cond: cond.into(),
                        if_exp: Box::new(Exp::from(then_expr.as_ref())),
                        else_exp: Box::new(Exp::from(else_expr.as_ref())),
                    };
                }
            }
        };

        (0..depth).fold(base, |exp, _| Exp::Succ(Box::new(exp)))
    }
}

impl From<&EqCond> for EqExp {
    fn from(cond: &EqCond) -> Self {
        Self {
            lhs: Box::new(Exp::from(cond.lhs.as_ref())),
            rhs: Box::new(Exp::from(cond.rhs.as_ref())),
        }
    }
}

/// Lowers with the lenient policy, where nothing can fail.
pub fn lower(ast: Ast) -> Program {
    let lowered: Result<Program, Infallible> =
        assemble(ast, |exp, vars, funcs| Ok(eval::eval(exp, vars, funcs)));
    match lowered {
        Ok(program) => program,
        Err(never) => match never {},
    }
}

pub use self::lower as transform;

pub fn lower_with(ast: Ast, policy: Policy) -> Result<Program, eval::Error> {
    assemble(ast, |exp, vars, funcs| eval::try_eval(exp, vars, funcs, policy))
}

fn assemble<E>(
    ast: Ast,
    evaluate: impl Fn(&Exp, &VarEnv, &FuncEnv) -> Result<Nat, E>,
) -> Result<Program, E> {
    let mut funcs = FuncEnv::new();
    let mut var_defs = Vec::new();

    for definition in &ast.definitions {
        match definition {
            Definition::Func { name, params, body } => funcs.insert(
                name.clone(),
                Lambda {
                    params: params.clone(),
                    body: body.into(),
                },
            ),
            Definition::Var { name, value } => var_defs.push((name.clone(), Exp::from(value))),
        }
    }

    let mut vars = VarEnv::new();
    for (name, exp) in var_defs {
        let value = evaluate(&exp, &vars, &funcs)?;
        vars = vars.insert(name, value);
    }

    Ok(Program {
        funcs,
        vars,
        expr: ast.expr.as_ref().map(Exp::from),
    })
}
