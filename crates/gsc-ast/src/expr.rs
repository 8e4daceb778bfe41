//! The typed surface expression tree. A thin structural
//! echo of surface syntax — not a parser's concrete syntax tree. Every node
//! already carries the type the upstream checker resolved for it; numeric
//! literals additionally carry their raw syntactic value so lowering can
//! validate integer narrowing.

use crate::operators::{BinOp, UnOp};
use crate::stmt::Stmt;
use gsc_common::Span;
use gsc_ir::Type;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: Arc<str>,
    pub annotation: Type,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    /// The type the upstream checker resolved for this expression.
    pub resolved_type: Type,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    NumberLiteral(f64),
    StringLiteral(Arc<str>),
    BooleanLiteral(bool),
    NullLiteral,
    UndefinedLiteral,
    Identifier(Arc<str>),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnOp,
        operand: Box<Expr>,
    },
    Conditional {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Member {
        object: Box<Expr>,
        name: Arc<str>,
    },
    /// `obj?.name` - the receiver is evaluated once; the chain
    /// short-circuits to `undefined` if it is null/undefined.
    OptionalMember {
        object: Box<Expr>,
        name: Arc<str>,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// Distinguished from a bare `Call` because dispatch needs the receiver
    /// type for operator selection.
    MethodCall {
        object: Box<Expr>,
        method: Arc<str>,
        args: Vec<Expr>,
    },
    New {
        class_name: Arc<str>,
        args: Vec<Expr>,
        type_args: Vec<Type>,
    },
    ArrayLiteral(Vec<Expr>),
    ObjectLiteral(Vec<(Arc<str>, Expr)>),
    Assignment {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Lambda {
        params: Vec<Param>,
        body: Vec<Stmt>,
        is_async: bool,
    },
    TemplateLiteral(Vec<TemplatePart>),
    Await(Box<Expr>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TemplatePart {
    Text(Arc<str>),
    Expr(Box<Expr>),
}

impl Expr {
    pub fn new(kind: ExprKind, resolved_type: Type, span: Span) -> Self {
        Expr {
            kind,
            resolved_type,
            span,
        }
    }
}
