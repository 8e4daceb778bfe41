//! `Declaration`, `FunctionDeclaration`, `ClassDeclaration`, `Module`,
//! `Program`.

use crate::expr::{Expr, Param};
use crate::stmt::Stmt;
use crate::ty::Type;
use gsc_common::ModulePath;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionFlags {
    pub is_async: bool,
    pub is_static: bool,
    pub is_generator: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: Arc<str>,
    pub params: Vec<Param>,
    pub return_type: Type,
    pub body: Vec<Stmt>,
    pub flags: FunctionFlags,
}

impl FunctionDeclaration {
    /// Invariant: an async function's declared return type
    /// is always `Promise<_>`.
    pub fn is_well_formed_async(&self) -> bool {
        !self.flags.is_async || matches!(self.return_type, Type::Promise(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    Public,
    Private,
    Protected,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassField {
    pub name: Arc<str>,
    pub ty: Type,
    pub readonly: bool,
    pub is_static: bool,
    pub access: Access,
}

impl ClassField {
    /// Excluded from the structural signature when its name begins with an
    /// underscore, independent of declared access.
    pub fn is_signature_visible(&self) -> bool {
        !self.is_static && !self.name.starts_with('_') && self.access == Access::Public
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassMethod {
    pub function: FunctionDeclaration,
    pub access: Access,
}

impl ClassMethod {
    pub fn is_signature_visible(&self) -> bool {
        !self.function.flags.is_static
            && !self.function.name.starts_with('_')
            && self.access == Access::Public
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: Arc<str>,
    pub fields: Vec<ClassField>,
    pub methods: Vec<ClassMethod>,
    pub constructor: Option<FunctionDeclaration>,
    pub base_class: Option<Arc<str>>,
    pub implements: Vec<Arc<str>>,
}

/// A method or property signature contributed to the type environment by an
/// `interface` declaration; consumed by the signature engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceProperty {
    pub name: Arc<str>,
    pub ty: Type,
    pub readonly: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceMethod {
    pub name: Arc<str>,
    pub params: Vec<Param>,
    pub return_type: Type,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDeclaration {
    pub name: Arc<str>,
    pub properties: Vec<InterfaceProperty>,
    pub methods: Vec<InterfaceMethod>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeAliasDeclaration {
    pub name: Arc<str>,
    pub aliased: Type,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstantDeclaration {
    pub name: Arc<str>,
    pub ty: Type,
    pub init: Expr,
}

/// A declaration list entry. Interfaces and type aliases contribute only to
/// the type environment; functions and classes carry bodies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Declaration {
    Function(FunctionDeclaration),
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    TypeAlias(TypeAliasDeclaration),
    Constant(ConstantDeclaration),
}

impl Declaration {
    /// Every declaration carries a stable name unique within its module
    ///.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Function(f) => &f.name,
            Declaration::Class(c) => &c.name,
            Declaration::Interface(i) => &i.name,
            Declaration::TypeAlias(t) => &t.name,
            Declaration::Constant(c) => &c.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub from: ModulePath,
    pub names: Vec<Arc<str>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub names: Vec<Arc<str>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub path: ModulePath,
    pub declarations: Vec<Declaration>,
    pub imports: Vec<ImportRecord>,
    pub exports: Vec<ExportRecord>,
}

impl Module {
    pub fn new(path: ModulePath) -> Self {
        Module {
            path,
            declarations: Vec::new(),
            imports: Vec::new(),
            exports: Vec::new(),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }
}

/// A set of modules addressed by path. Insertion-ordered so a
/// deterministic module-sort toggle (`CompileOptions`) can
/// choose between source order and lexical order without losing either.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    modules: IndexMap<ModulePath, Module>,
}

impl Program {
    pub fn new() -> Self {
        Program {
            modules: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, module: Module) {
        self.modules.insert(module.path.clone(), module);
    }

    pub fn get(&self, path: &ModulePath) -> Option<&Module> {
        self.modules.get(path)
    }

    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::{Ownership, Type};

    #[test]
    fn underscore_prefixed_members_are_not_signature_visible() {
        let field = ClassField {
            name: "_cache".into(),
            ty: Type::number(),
            readonly: false,
            is_static: false,
            access: Access::Public,
        };
        assert!(!field.is_signature_visible());
    }

    #[test]
    fn async_function_must_return_promise() {
        let mut f = FunctionDeclaration {
            name: "f".into(),
            params: vec![],
            return_type: Type::promise(Type::number()),
            body: vec![],
            flags: FunctionFlags {
                is_async: true,
                ..Default::default()
            },
        };
        assert!(f.is_well_formed_async());
        f.return_type = Type::number();
        assert!(!f.is_well_formed_async());
    }

    #[test]
    fn program_preserves_insertion_order_for_deterministic_iteration() {
        let mut p = Program::new();
        p.insert(Module::new(ModulePath::new("b.ts")));
        p.insert(Module::new(ModulePath::new("a.ts")));
        let paths: Vec<_> = p.modules().map(|m| m.path.as_str().to_string()).collect();
        assert_eq!(paths, vec!["b.ts", "a.ts"]);
    }

    #[test]
    fn class_type_carries_ownership() {
        let t = Type::class("Point", Ownership::Share);
        assert_eq!(t.ownership(), Some(Ownership::Share));
    }
}
