//! Type emission: renders an IR `Type` to a C++ type name under
//! the active memory-mode backend.

use crate::mode::MemoryModeBackend;
use gsc_ir::{Ownership, PrimitiveTag, Type};

pub fn emit_type(ty: &Type, backend: &dyn MemoryModeBackend) -> String {
    match ty {
        Type::Primitive(PrimitiveTag::Number) => "double".to_string(),
        Type::Primitive(PrimitiveTag::Integer) => "int32_t".to_string(),
        Type::Primitive(PrimitiveTag::Integer53) => "int64_t".to_string(),
        Type::Primitive(PrimitiveTag::String) => "gs::String".to_string(),
        Type::Primitive(PrimitiveTag::Boolean) => "bool".to_string(),
        Type::Primitive(PrimitiveTag::Void) => "void".to_string(),
        Type::Class {
            name,
            ownership,
            type_args,
        } => backend.class_ref(name.as_str(), &emit_type_args(type_args, backend), *ownership),
        Type::Interface {
            name,
            ownership,
            type_args,
        } => backend.class_ref(name.as_str(), &emit_type_args(type_args, backend), *ownership),
        Type::Array { element, ownership } => {
            backend.array_ref(&emit_type(element, backend), *ownership)
        }
        Type::Map {
            key,
            value,
            ownership,
        } => backend.map_ref(&emit_type(key, backend), &emit_type(value, backend), *ownership),
        Type::Function { params, ret } => {
            let params = params
                .iter()
                .map(|p| emit_type(p, backend))
                .collect::<Vec<_>>()
                .join(", ");
            format!("std::function<{}({params})>", emit_type(ret, backend))
        }
        Type::Union(members) => {
            let rendered = members
                .iter()
                .map(|m| emit_type(m, backend))
                .collect::<Vec<_>>()
                .join(", ");
            format!("std::variant<{rendered}>")
        }
        Type::Nullable(inner) => format!("std::optional<{}>", emit_type(inner, backend)),
        Type::Promise(inner) => format!("gs::Promise<{}>", emit_type(inner, backend)),
    }
}

fn emit_type_args(type_args: &[Type], backend: &dyn MemoryModeBackend) -> String {
    type_args
        .iter()
        .map(|t| emit_type(t, backend))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether a type's default-zero literal is `0 === -0`: IEEE-754 doubles
/// compare `+0.0 == -0.0`, matching the surface language's `===`. Both
/// memory modes emit the C++ built-in `==`/`!=` for numeric `===`/`!==`,
/// which already has this semantics - no special-casing needed.
pub fn strict_eq_operator() -> &'static str {
    "=="
}

pub fn strict_ne_operator() -> &'static str {
    "!="
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{GcBackend, OwnershipBackend};

    #[test]
    fn gc_mode_wraps_class_types_in_a_gc_ref() {
        let backend = GcBackend;
        let ty = Type::class("Widget", Ownership::Share);
        assert_eq!(emit_type(&ty, &backend), "gs::gc::Ref<Widget>");
    }

    #[test]
    fn ownership_mode_renders_own_for_unique_values() {
        let backend = OwnershipBackend;
        let ty = Type::class("Widget", Ownership::Own);
        assert_eq!(emit_type(&ty, &backend), "gs::Own<Widget>");
    }

    #[test]
    fn nullable_primitive_is_an_optional() {
        let backend = GcBackend;
        assert_eq!(emit_type(&Type::nullable(Type::number()), &backend), "std::optional<double>");
    }

    #[test]
    fn promise_renders_as_gs_promise() {
        let backend = GcBackend;
        assert_eq!(emit_type(&Type::promise(Type::string()), &backend), "gs::Promise<gs::String>");
    }
}
