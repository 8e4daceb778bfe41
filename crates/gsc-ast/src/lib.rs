//! The typed surface AST data model the lowering stage consumes.
//!
//! The surface parser and external type checker are out of scope; this
//! crate only fixes the shape of their output so `gsc-lowering` has
//! something concrete to walk. It mirrors surface syntax one-to-one and
//! is not a parser.

pub mod decl;
pub mod expr;
pub mod module;
pub mod operators;
pub mod stmt;

pub use decl::{
    ClassDecl, ConstDecl, Decl, FieldDecl, FunctionDecl, FunctionFlags, InterfaceDecl,
    InterfaceMethodDecl, InterfacePropertyDecl, MethodDecl, TypeAliasDecl,
};
pub use expr::{Expr, ExprKind, Param, TemplatePart};
pub use module::{Export, Import, Module, Program};
pub use operators::{BinOp, UnOp};
pub use stmt::{CatchClause, Stmt, StmtKind};
