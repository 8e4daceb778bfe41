//! The `Type` tree and ownership tags.
//!
//! Ownership is fused into the type itself rather than carried in a parallel
//! attribute map ("Ownership as type decoration") — every reference
//! site is then locally checkable without consulting an out-of-band table.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveTag {
    /// IEEE-754 double.
    Number,
    /// 32-bit signed integer.
    Integer,
    /// Safe integer, representable exactly up to 2^53 - 1.
    Integer53,
    String,
    Boolean,
    Void,
}

/// How a reference to a class/interface/array/map value is held.
///
/// Part of the type, not a separate annotation: every class reference
/// site carries exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ownership {
    /// Unique owner; moves on transfer.
    Own,
    /// Reference-counted; deep clones are forbidden.
    Share,
    /// Non-owning borrow; must not outlive its source.
    Use,
    /// By-value copy, for primitives and small aggregates.
    Value,
}

impl Ownership {
    /// Array/map type constructors default to this when unspecified.
    pub const DEFAULT_AGGREGATE: Ownership = Ownership::Value;
}

/// A named type's identity for interning/caching purposes (class or
/// interface declarations share this key shape with the signature engine).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeName(pub Arc<str>);

impl TypeName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        TypeName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        TypeName::new(s)
    }
}

/// The tagged-union type tree. Closed-set enum, dispatched by
/// exhaustive pattern match — never a virtual method.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Primitive(PrimitiveTag),
    Class {
        name: TypeName,
        ownership: Ownership,
        type_args: Vec<Type>,
    },
    Interface {
        name: TypeName,
        ownership: Ownership,
        type_args: Vec<Type>,
    },
    Array {
        element: Box<Type>,
        ownership: Ownership,
    },
    Map {
        key: Box<Type>,
        value: Box<Type>,
        ownership: Ownership,
    },
    Function {
        params: Vec<Type>,
        ret: Box<Type>,
    },
    /// Never directly contains another union after normalization; duplicates
    /// removed; sorted by canonical type string (invariant 3).
    Union(Vec<Type>),
    Nullable(Box<Type>),
    Promise(Box<Type>),
}

impl Type {
    pub fn number() -> Type {
        Type::Primitive(PrimitiveTag::Number)
    }

    pub fn integer() -> Type {
        Type::Primitive(PrimitiveTag::Integer)
    }

    pub fn integer53() -> Type {
        Type::Primitive(PrimitiveTag::Integer53)
    }

    pub fn string() -> Type {
        Type::Primitive(PrimitiveTag::String)
    }

    pub fn boolean() -> Type {
        Type::Primitive(PrimitiveTag::Boolean)
    }

    pub fn void() -> Type {
        Type::Primitive(PrimitiveTag::Void)
    }

    pub fn class(name: impl Into<TypeName>, ownership: Ownership) -> Type {
        Type::Class {
            name: name.into(),
            ownership,
            type_args: Vec::new(),
        }
    }

    pub fn interface(name: impl Into<TypeName>, ownership: Ownership) -> Type {
        Type::Interface {
            name: name.into(),
            ownership,
            type_args: Vec::new(),
        }
    }

    pub fn array(element: Type) -> Type {
        Type::Array {
            element: Box::new(element),
            ownership: Ownership::DEFAULT_AGGREGATE,
        }
    }

    pub fn array_with_ownership(element: Type, ownership: Ownership) -> Type {
        Type::Array {
            element: Box::new(element),
            ownership,
        }
    }

    pub fn map(key: Type, value: Type) -> Type {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
            ownership: Ownership::DEFAULT_AGGREGATE,
        }
    }

    pub fn function(params: Vec<Type>, ret: Type) -> Type {
        Type::Function {
            params,
            ret: Box::new(ret),
        }
    }

    pub fn nullable(inner: Type) -> Type {
        Type::Nullable(Box::new(inner))
    }

    pub fn promise(inner: Type) -> Type {
        Type::Promise(Box::new(inner))
    }

    /// Whether this is a reference type (class/interface/array/map): the
    /// kind of type that `gc` mode makes implicitly nullable.
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            Type::Class { .. } | Type::Interface { .. } | Type::Array { .. } | Type::Map { .. }
        )
    }

    pub fn ownership(&self) -> Option<Ownership> {
        match self {
            Type::Class { ownership, .. }
            | Type::Interface { ownership, .. }
            | Type::Array { ownership, .. }
            | Type::Map { ownership, .. } => Some(*ownership),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_constructor_defaults_ownership_to_value() {
        let arr = Type::array(Type::number());
        assert_eq!(arr.ownership(), Some(Ownership::Value));
    }

    #[test]
    fn primitives_are_not_reference_types() {
        assert!(!Type::number().is_reference());
        assert!(Type::class("Point", Ownership::Own).is_reference());
    }
}
