//! IR validation: failures here are
//! compiler-internal bugs, never surfaced to the user as lowering
//! diagnostics. `gsc-core` runs this as a debug-assertion gate between
//! lowering/passes and code generation.

use crate::decl::{Declaration, Program};
use crate::ty::Type;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("union type contains a nested union after normalization")]
    NestedUnion,
    #[error("union type contains duplicate members after normalization")]
    DuplicateUnionMember,
    #[error("async function `{0}` does not declare a Promise return type")]
    AsyncWithoutPromiseReturn(String),
}

/// Invariant 3: a `union` never directly contains another `union` after
/// normalization, and has no duplicate members.
fn check_union_normalized(ty: &Type) -> Result<(), ValidationError> {
    match ty {
        Type::Union(members) => {
            for m in members {
                if matches!(m, Type::Union(_)) {
                    return Err(ValidationError::NestedUnion);
                }
                check_union_normalized(m)?;
            }
            for i in 0..members.len() {
                for j in (i + 1)..members.len() {
                    if members[i] == members[j] {
                        return Err(ValidationError::DuplicateUnionMember);
                    }
                }
            }
            Ok(())
        }
        Type::Nullable(inner) | Type::Promise(inner) | Type::Array { element: inner, .. } => {
            check_union_normalized(inner)
        }
        Type::Map { key, value, .. } => {
            check_union_normalized(key)?;
            check_union_normalized(value)
        }
        Type::Function { params, ret } => {
            for p in params {
                check_union_normalized(p)?;
            }
            check_union_normalized(ret)
        }
        Type::Class { type_args, .. } | Type::Interface { type_args, .. } => {
            for arg in type_args {
                check_union_normalized(arg)?;
            }
            Ok(())
        }
        Type::Primitive(_) => Ok(()),
    }
}

pub fn validate_program(program: &Program) -> Result<(), ValidationError> {
    for module in program.modules() {
        for decl in &module.declarations {
            match decl {
                Declaration::Function(f) => {
                    check_union_normalized(&f.return_type)?;
                    if !f.is_well_formed_async() {
                        return Err(ValidationError::AsyncWithoutPromiseReturn(
                            f.name.to_string(),
                        ));
                    }
                }
                Declaration::Class(c) => {
                    for field in &c.fields {
                        check_union_normalized(&field.ty)?;
                    }
                    for method in &c.methods {
                        check_union_normalized(&method.function.return_type)?;
                    }
                }
                Declaration::Interface(i) => {
                    for prop in &i.properties {
                        check_union_normalized(&prop.ty)?;
                    }
                }
                Declaration::TypeAlias(t) => check_union_normalized(&t.aliased)?,
                Declaration::Constant(c) => check_union_normalized(&c.ty)?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{FunctionDeclaration, FunctionFlags, Module};
    use gsc_common::ModulePath;

    #[test]
    fn rejects_nested_union() {
        let ty = Type::Union(vec![Type::number(), Type::Union(vec![Type::string()])]);
        assert_eq!(check_union_normalized(&ty), Err(ValidationError::NestedUnion));
    }

    #[test]
    fn accepts_flat_union() {
        let ty = Type::Union(vec![Type::number(), Type::string()]);
        assert!(check_union_normalized(&ty).is_ok());
    }

    #[test]
    fn rejects_async_function_without_promise_return() {
        let mut module = Module::new(ModulePath::new("a.ts"));
        module.declarations.push(Declaration::Function(FunctionDeclaration {
            name: "f".into(),
            params: vec![],
            return_type: Type::number(),
            body: vec![],
            flags: FunctionFlags {
                is_async: true,
                ..Default::default()
            },
        }));
        let mut program = Program::new();
        program.insert(module);
        assert!(matches!(
            validate_program(&program),
            Err(ValidationError::AsyncWithoutPromiseReturn(_))
        ));
    }
}
