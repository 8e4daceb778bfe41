//! The GoodScript compiler's intermediate representation.
//!
//! A closed set of tagged-union trees — types, expressions, statements,
//! declarations — shared by every later pipeline stage. The IR is immutable
//! after lowering except for whole-pass rewrites (hoisting, union
//! normalization); see `gsc-passes`.

pub mod builder;
pub mod decl;
pub mod expr;
pub mod stmt;
pub mod ty;
pub mod validate;

pub use builder::{BlockId, IrBuilder};
pub use decl::{
    Access, ClassDeclaration, ClassField, ClassMethod, ConstantDeclaration, Declaration,
    ExportRecord, FunctionDeclaration, FunctionFlags, ImportRecord, InterfaceDeclaration,
    InterfaceMethod, InterfaceProperty, Module, Program, TypeAliasDeclaration,
};
pub use expr::{BinaryOp, BuiltinNamespace, Expr, ExprKind, Literal, Param, TemplatePart, UnaryOp};
pub use stmt::{CatchClause, Stmt, StmtKind, VersionedName};
pub use ty::{Ownership, PrimitiveTag, Type, TypeName};
pub use validate::{validate_program, ValidationError};
