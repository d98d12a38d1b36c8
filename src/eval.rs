//! Environment-passing evaluator.
//!
//! Evaluation runs on an explicit stack of pending [`Frame`]s instead of host
//! recursion. A selected conditional branch and a called function's body
//! replace the current expression without pushing a frame, so self tail calls
//! run in constant space and only `s(...)` wrappers and unfinished argument
//! lists grow the stack.

use crate::exp::{Exp, FuncEnv, Lambda, VarEnv};
use crate::nat::Nat;
use std::convert::Infallible;

/// What an unbound variable or function name evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Unbound names are zero.
    #[default]
    Lenient,
    /// Unbound names are errors.
    Strict,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("variable '{0}' is not defined")]
    UndefinedVariable(String),
    #[error("function '{0}' is not defined")]
    UndefinedFunction(String),
}

/// Resolution of names that are not bound.
pub trait Unbound {
    type Error;

    fn variable(&self, sym: &str) -> Result<Nat, Self::Error>;
    fn function(&self, sym: &str) -> Result<Nat, Self::Error>;
}

/// Unbound names are zero; evaluation cannot fail.
pub struct Zeroed;

impl Unbound for Zeroed {
    type Error = Infallible;

    fn variable(&self, _sym: &str) -> Result<Nat, Infallible> {
        Ok(Nat::zero())
    }

    fn function(&self, _sym: &str) -> Result<Nat, Infallible> {
        Ok(Nat::zero())
    }
}

pub struct Rejected;

impl Unbound for Rejected {
    type Error = Error;

    fn variable(&self, sym: &str) -> Result<Nat, Error> {
        Err(Error::UndefinedVariable(sym.to_string()))
    }

    fn function(&self, sym: &str) -> Result<Nat, Error> {
        Err(Error::UndefinedFunction(sym.to_string()))
    }
}

enum Frame<'p> {
    Succ,
    CondLhs {
        rhs: &'p Exp,
        if_exp: &'p Exp,
        else_exp: &'p Exp,
        scope: VarEnv,
    },
    CondRhs {
        lhs: Nat,
        if_exp: &'p Exp,
        else_exp: &'p Exp,
        scope: VarEnv,
    },
    Args {
        lambda: &'p Lambda,
        args: &'p [Exp],
        values: Vec<Nat>,
        scope: VarEnv,
    },
}

pub struct TreeWalker<'p, U> {
    funcs: &'p FuncEnv,
    unbound: U,
    stack: Vec<Frame<'p>>,
}

impl<'p, U: Unbound> TreeWalker<'p, U> {
    pub fn new(funcs: &'p FuncEnv, unbound: U) -> Self {
        Self {
            funcs,
            unbound,
            stack: Vec::new(),
        }
    }

    pub fn eval(&mut self, exp: &'p Exp, scope: VarEnv) -> Result<Nat, U::Error> {
        self.stack.clear();

        let mut exp = exp;
        let mut scope = scope;

        loop {
            let mut value = match exp {
                Exp::Zero => Nat::zero(),
                Exp::Var(sym) => match scope.get(sym) {
                    Some(value) => value.clone(),
                    None => self.unbound.variable(sym)?,
                },
                Exp::Succ(arg) => {
                    self.stack.push(Frame::Succ);
                    exp = arg;
                    continue;
                }
                Exp::Cond {
                    cond,
                    if_exp,
                    else_exp,
                } => {
                    self.stack.push(Frame::CondLhs {
                        rhs: &cond.rhs,
                        if_exp,
                        else_exp,
                        scope: scope.clone(),
                    });
                    exp = &cond.lhs;
                    continue;
                }
                Exp::Term { sym, args } => match self.funcs.get(sym) {
                    None => self.unbound.function(sym)?,
                    Some(lambda) => {
                        // arguments without a parameter are never evaluated
                        let args = &args[..args.len().min(lambda.params.len())];
                        match args.first() {
                            None => {
                                scope = VarEnv::bind(&lambda.params, &[]);
                                exp = &lambda.body;
                            }
                            Some(first) => {
                                self.stack.push(Frame::Args {
                                    lambda,
                                    args,
                                    values: Vec::with_capacity(args.len()),
                                    scope: scope.clone(),
                                });
                                exp = first;
                            }
                        }
                        continue;
                    }
                },
            };

            loop {
                match self.stack.pop() {
                    None => return Ok(value),
                    Some(Frame::Succ) => value = value.succ(),
                    Some(Frame::CondLhs {
                        rhs,
                        if_exp,
                        else_exp,
                        scope: saved,
                    }) => {
                        self.stack.push(Frame::CondRhs {
                            lhs: value,
                            if_exp,
                            else_exp,
                            scope: saved.clone(),
                        });
                        exp = rhs;
                        scope = saved;
                        break;
                    }
                    Some(Frame::CondRhs {
                        lhs,
                        if_exp,
                        else_exp,
                        scope: saved,
                    }) => {
                        exp = if lhs == value { if_exp } else { else_exp };
                        scope = saved;
                        break;
                    }
                    Some(Frame::Args {
                        lambda,
                        args,
                        mut values,
                        scope: saved,
                    }) => {
                        values.push(value);
                        match args.get(values.len()) {
                            Some(next) => {
                                exp = next;
                                scope = saved.clone();
                                self.stack.push(Frame::Args {
                                    lambda,
                                    args,
                                    values,
                                    scope: saved,
                                });
                            }
                            None => {
                                scope = VarEnv::bind(&lambda.params, &values);
                                exp = &lambda.body;
                            }
                        }
                        break;
                    }
                }
            }
        }
    }
}

/// Reduces `exp` to a value. Unbound variables and functions are zero.
///
/// Never fails, but a program that does not terminate makes this loop forever.
pub fn eval(exp: &Exp, vars: &VarEnv, funcs: &FuncEnv) -> Nat {
    match TreeWalker::new(funcs, Zeroed).eval(exp, vars.clone()) {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

pub fn try_eval(exp: &Exp, vars: &VarEnv, funcs: &FuncEnv, policy: Policy) -> Result<Nat, Error> {
    match policy {
        Policy::Lenient => Ok(eval(exp, vars, funcs)),
        Policy::Strict => TreeWalker::new(funcs, Rejected).eval(exp, vars.clone()),
    }
}
