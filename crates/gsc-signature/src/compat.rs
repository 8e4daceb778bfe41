//! Structural compatibility checks: primitives compare by tag;
//! complex types compare by canonical string. This is what lets a class
//! satisfy an interface without a declared `implements` clause.

use crate::engine::SignatureEngine;
use gsc_ir::Type;

pub fn compatible(engine: &SignatureEngine, a: &Type, b: &Type) -> bool {
    match (a, b) {
        (Type::Primitive(x), Type::Primitive(y)) => x == y,
        _ => engine.type_string(a) == engine.type_string(b),
    }
}
