//! The typed surface statement tree.

use crate::expr::Expr;
use gsc_common::Span;
use gsc_ir::Type;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub binding: Option<Arc<str>>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StmtKind {
    VariableDeclaration {
        name: Arc<str>,
        /// Explicit surface annotation, e.g. `: integer`. Absent for
        /// inferred `const x = 42;` declarations; lowering reads this to
        /// decide whether a numeric literal narrows.
        annotation: Option<Type>,
        init: Option<Expr>,
    },
    ExpressionStatement(Expr),
    Return(Option<Expr>),
    If {
        cond: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },
    While {
        cond: Expr,
        body: Vec<Stmt>,
    },
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        incr: Option<Expr>,
        body: Vec<Stmt>,
    },
    ForOf {
        name: Arc<str>,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    Block(Vec<Stmt>),
    Throw(Expr),
    TryCatchFinally {
        try_block: Vec<Stmt>,
        catch: Option<CatchClause>,
        finally_block: Option<Vec<Stmt>>,
    },
    Break,
    Continue,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}
