//! Structural signature engine: canonical type strings, FNV-1a
//! hashing, and the duck-typing compatibility check built on top of them.

pub mod canonical;
pub mod compat;
pub mod engine;
pub mod fnv;

pub use canonical::{canonical_type_string, class_canonical_string, interface_canonical_string};
pub use compat::compatible;
pub use engine::{NamedKind, Signature, SignatureEngine};
pub use fnv::{fnv1a_32, fnv1a_32_hex};
