//! `IRExpression` — every expression carries its inferred type and
//! an optional source location. Constructors are total: each accepts the
//! structural fields plus a type and produces a tagged value.

use crate::ty::Type;
use gsc_common::Span;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    StrictEq,
    StrictNe,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
    TypeOf,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Number(f64),
    Integer(i32),
    Integer53(i64),
    String(Arc<str>),
    Boolean(bool),
    Null,
    Undefined,
}

// f64 has no total Eq, but literal IR nodes are compared structurally only
// in tests against deterministic fixtures, never hashed.
impl Eq for Literal {}

/// A fully-qualified recognized runtime namespace, attached to `Call`/
/// `MethodCall` nodes at lowering time so the generator can route directly
/// to a runtime symbol instead of re-deriving it from the callee text
///.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuiltinNamespace {
    Math,
    Date,
    Json,
    Console,
    FileSystem,
    FileSystemAsync,
    Http,
    HttpAsync,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Type,
    pub span: Option<Span>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: Arc<str>,
    pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    Literal(Literal),
    Identifier(Arc<str>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// Lowered from `c ? t : f` and from optional-chaining guards.
    Conditional {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Member {
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
        builtin: Option<BuiltinNamespace>,
    },
    MethodCall {
        object: Box<Expr>,
        method: Arc<str>,
        args: Vec<Expr>,
        builtin: Option<BuiltinNamespace>,
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
    /// Explicit ownership transfer of a value from `source` (`own<T>` move).
    Move(Box<Expr>),
    /// Explicit non-owning borrow of `source` (`use<T>`).
    Borrow(Box<Expr>),
    Lambda {
        params: Vec<Param>,
        body: Vec<crate::stmt::Stmt>,
        /// Free variables captured from the enclosing scope, carried here
        /// for downstream closure emission and for the hoisting pass'
        /// free-variable analysis.
        captures: Vec<Arc<str>>,
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
    pub fn new(kind: ExprKind, ty: Type) -> Self {
        Expr { kind, ty, span: None }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn literal(lit: Literal, ty: Type) -> Self {
        Expr::new(ExprKind::Literal(lit), ty)
    }

    pub fn identifier(name: impl Into<Arc<str>>, ty: Type) -> Self {
        Expr::new(ExprKind::Identifier(name.into()), ty)
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr, ty: Type) -> Self {
        Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            ty,
        )
    }

    pub fn unary(op: UnaryOp, operand: Expr, ty: Type) -> Self {
        Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            ty,
        )
    }

    pub fn conditional(cond: Expr, then_branch: Expr, else_branch: Expr, ty: Type) -> Self {
        Expr::new(
            ExprKind::Conditional {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            ty,
        )
    }

    pub fn await_expr(promise: Expr, payload_ty: Type) -> Self {
        Expr::new(ExprKind::Await(Box::new(promise)), payload_ty)
    }
}
