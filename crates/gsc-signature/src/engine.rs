//! `SignatureEngine` - computes and memoizes canonical strings and FNV-1a
//! hashes per named type (rule 6).
//!
//! Caches are keyed by `(kind, name)` for named declarations and by type
//! value for ad hoc type strings. A systems-language rewrite with an
//! arena-allocated IR should instead key by arena index ("Caches
//! keyed by identity") — this engine's `Type` tree is not arena-allocated,
//! so it memoizes on structural value instead; see DESIGN.md.

use crate::canonical::{canonical_type_string, class_canonical_string, interface_canonical_string};
use crate::fnv::fnv1a_32_hex;
use dashmap::DashMap;
use gsc_ir::{ClassDeclaration, InterfaceDeclaration, Type};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedKind {
    Interface,
    Class,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub canonical: Arc<str>,
    pub hash_hex: Arc<str>,
}

impl Signature {
    fn from_canonical(canonical: String) -> Self {
        let hash_hex = fnv1a_32_hex(&canonical);
        Signature {
            canonical: Arc::from(canonical),
            hash_hex: Arc::from(hash_hex),
        }
    }
}

#[derive(Default)]
pub struct SignatureEngine {
    type_strings: DashMap<Type, Arc<str>>,
    signatures: DashMap<(NamedKind, Arc<str>), Signature>,
}

impl SignatureEngine {
    pub fn new() -> Self {
        SignatureEngine::default()
    }

    /// Canonical string for an arbitrary type, memoized by type identity
    /// (structural value, see module doc).
    pub fn type_string(&self, ty: &Type) -> Arc<str> {
        if let Some(cached) = self.type_strings.get(ty) {
            return cached.clone();
        }
        let computed: Arc<str> = Arc::from(canonical_type_string(ty));
        self.type_strings.insert(ty.clone(), computed.clone());
        computed
    }

    pub fn signature_for_interface(&self, iface: &InterfaceDeclaration) -> Signature {
        let key = (NamedKind::Interface, Arc::from(iface.name.as_ref()));
        if let Some(cached) = self.signatures.get(&key) {
            return cached.clone();
        }
        let sig = Signature::from_canonical(interface_canonical_string(iface));
        self.signatures.insert(key, sig.clone());
        sig
    }

    pub fn signature_for_class(&self, class: &ClassDeclaration) -> Signature {
        let key = (NamedKind::Class, Arc::from(class.name.as_ref()));
        if let Some(cached) = self.signatures.get(&key) {
            return cached.clone();
        }
        let sig = Signature::from_canonical(class_canonical_string(class));
        self.signatures.insert(key, sig.clone());
        sig
    }
}
