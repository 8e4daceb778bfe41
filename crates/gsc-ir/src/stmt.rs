//! `IRStatement`.

use crate::expr::Expr;
use crate::ty::Type;
use gsc_common::Span;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An SSA-style variable name: `version` is monotonic per `(function, name)`
/// and zero-based, assigned by `IrBuilder`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionedName {
    pub name: Arc<str>,
    pub version: u32,
}

impl VersionedName {
    pub fn new(name: impl Into<Arc<str>>, version: u32) -> Self {
        VersionedName {
            name: name.into(),
            version,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub binding: Option<VersionedName>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StmtNode {
    pub kind: StmtKind,
    pub span: Option<Span>,
}

pub type Stmt = StmtNode;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StmtKind {
    VariableDeclaration {
        name: VersionedName,
        ty: Type,
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
        name: VersionedName,
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

impl StmtNode {
    pub fn new(kind: StmtKind) -> Self {
        StmtNode { kind, span: None }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versioned_names_are_distinguished_by_version() {
        let a = VersionedName::new("x", 0);
        let b = VersionedName::new("x", 1);
        assert_ne!(a, b);
        assert_eq!(a.name, b.name);
    }
}
