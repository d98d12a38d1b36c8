//! The evaluator-facing form of a program.

use crate::eval::{self, Policy};
use crate::nat::Nat;
use rpds::HashTrieMap;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Exp {
    Zero,
    Succ(Box<Exp>),
    Var(String),
    /// Function application.
    Term {
        sym: String,
        args: Vec<Exp>,
    },
    Cond {
        cond: EqExp,
        if_exp: Box<Exp>,
        else_exp: Box<Exp>,
    },
}

// `s(...)` chains can be as long as the source, so unwind them in a loop
impl Drop for Exp {
    fn drop(&mut self) {
        let Exp::Succ(arg) = self else { return };
        let mut next = std::mem::replace(arg.as_mut(), Exp::Zero);
        loop {
            let inner = match &mut next {
                Exp::Succ(arg) => std::mem::replace(arg.as_mut(), Exp::Zero),
                _ => break,
            };
            next = inner;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EqExp {
    pub lhs: Box<Exp>,
    pub rhs: Box<Exp>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub params: Vec<String>,
    pub body: Exp,
}

/// Global function table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuncEnv {
    funcs: HashMap<String, Lambda>,
}

impl FuncEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Lambda> {
        self.funcs.get(name)
    }

    /// Replaces any earlier function of the same name.
    pub fn insert(&mut self, name: String, lambda: Lambda) {
        self.funcs.insert(name, lambda);
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Calls `name` with already evaluated arguments.
    ///
    /// Missing arguments bind to zero, surplus ones are ignored, and an unknown
    /// function yields zero.
    pub fn apply(&self, name: &str, args: &[Nat]) -> Nat {
        match self.get(name) {
            Some(lambda) => eval::eval(&lambda.body, &VarEnv::bind(&lambda.params, args), self),
            None => Nat::zero(),
        }
    }
}

impl FromIterator<(String, Lambda)> for FuncEnv {
    fn from_iter<I: IntoIterator<Item = (String, Lambda)>>(iter: I) -> Self {
        Self {
            funcs: iter.into_iter().collect(),
        }
    }
}

/// Variable bindings visible to one expression.
///
/// Persistent: `insert` returns a new environment and leaves `self` untouched,
/// so cloning is cheap and snapshots never observe later bindings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VarEnv {
    vars: HashTrieMap<String, Nat>,
}

impl VarEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Nat> {
        self.vars.get(name)
    }

    #[inline]
    pub fn insert(&self, name: String, value: Nat) -> Self {
        Self {
            vars: self.vars.insert(name, value),
        }
    }

    /// Fresh environment binding `params` to `args` in order; parameters
    /// without a matching argument are zero.
    pub fn bind(params: &[String], args: &[Nat]) -> Self {
        params
            .iter()
            .enumerate()
            .fold(Self::new(), |env, (i, param)| {
                env.insert(param.clone(), args.get(i).cloned().unwrap_or_default())
            })
    }

    pub fn len(&self) -> usize {
        self.vars.size()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, Nat)> for VarEnv {
    fn from_iter<I: IntoIterator<Item = (String, Nat)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |env, (name, value)| env.insert(name, value))
    }
}

/// A lowered program: both tables plus the expression to run, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub funcs: FuncEnv,
    pub vars: VarEnv,
    pub expr: Option<Exp>,
}

impl Program {
    /// Evaluates the final expression, treating unbound names as zero.
    pub fn run(&self) -> Option<Nat> {
        self.expr
            .as_ref()
            .map(|expr| eval::eval(expr, &self.vars, &self.funcs))
    }

    pub fn try_run(&self, policy: Policy) -> Result<Option<Nat>, eval::Error> {
        self.expr
            .as_ref()
            .map(|expr| eval::try_eval(expr, &self.vars, &self.funcs, policy))
            .transpose()
    }

    pub fn call(&self, name: &str, args: &[Nat]) -> Nat {
        self.funcs.apply(name, args)
    }
}
