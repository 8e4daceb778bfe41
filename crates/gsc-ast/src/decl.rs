//! The typed surface declaration tree.

use crate::expr::{Expr, Param};
use crate::stmt::Stmt;
use gsc_ir::{Access, Type};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionFlags {
    pub is_async: bool,
    pub is_static: bool,
    pub is_generator: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: Arc<str>,
    pub params: Vec<Param>,
    /// An `async fn` always declares `Promise<T>`; lowering preserves the
    /// body as written and wraps the payload type.
    pub return_annotation: Type,
    pub body: Vec<Stmt>,
    pub flags: FunctionFlags,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: Arc<str>,
    pub annotation: Type,
    pub readonly: bool,
    pub is_static: bool,
    pub access: Access,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub function: FunctionDecl,
    pub access: Access,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: Arc<str>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
    /// The constructor is a special method with no return type and `this`
    /// bound to the instance.
    pub constructor: Option<FunctionDecl>,
    pub base_class: Option<Arc<str>>,
    pub implements: Vec<Arc<str>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfacePropertyDecl {
    pub name: Arc<str>,
    pub annotation: Type,
    pub readonly: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceMethodDecl {
    pub name: Arc<str>,
    pub params: Vec<Param>,
    pub return_annotation: Type,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: Arc<str>,
    pub properties: Vec<InterfacePropertyDecl>,
    pub methods: Vec<InterfaceMethodDecl>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeAliasDecl {
    pub name: Arc<str>,
    pub aliased: Type,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstDecl {
    pub name: Arc<str>,
    pub annotation: Option<Type>,
    pub init: Expr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Function(FunctionDecl),
    Class(ClassDecl),
    Interface(InterfaceDecl),
    TypeAlias(TypeAliasDecl),
    Const(ConstDecl),
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Function(f) => &f.name,
            Decl::Class(c) => &c.name,
            Decl::Interface(i) => &i.name,
            Decl::TypeAlias(t) => &t.name,
            Decl::Const(c) => &c.name,
        }
    }
}
