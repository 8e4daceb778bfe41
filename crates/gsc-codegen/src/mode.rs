//! The memory-mode idiom table: the IR does not change between
//! `gc` and `ownership` modes, only how a class/array/map reference and a
//! `new` expression render to C++. Implemented as a trait so `expr_emit`/
//! `type_emit` never branch on `MemoryMode` directly - they ask the active
//! backend.

use gsc_common::MemoryMode;
use gsc_ir::Ownership;

pub trait MemoryModeBackend {
    fn mode(&self) -> MemoryMode;

    /// How a `Class`/`Interface` type reference renders, e.g.
    /// `gs::gc::Ref<Widget>` (`gc`) vs. `gs::Share<Widget>` (`ownership`,
    /// `Ownership::Share`).
    fn class_ref(&self, name: &str, type_args: &str, ownership: Ownership) -> String;

    fn array_ref(&self, element: &str, ownership: Ownership) -> String;

    fn map_ref(&self, key: &str, value: &str, ownership: Ownership) -> String;

    /// How `new ClassName(args)` renders under this mode.
    fn new_expr(&self, class_name: &str, args: &str, ownership: Ownership) -> String;

    fn move_expr(&self, inner: &str) -> String;

    fn borrow_expr(&self, inner: &str) -> String;
}

pub struct GcBackend;

impl MemoryModeBackend for GcBackend {
    fn mode(&self) -> MemoryMode {
        MemoryMode::Gc
    }

    /// Every class reference under `gc` is a traced pointer; the ownership
    /// tag on the type is not observable in emitted C++ ("the IR
    /// does not change between modes; only emission does").
    fn class_ref(&self, name: &str, type_args: &str, _ownership: Ownership) -> String {
        if type_args.is_empty() {
            format!("gs::gc::Ref<{name}>")
        } else {
            format!("gs::gc::Ref<{name}<{type_args}>>")
        }
    }

    fn array_ref(&self, element: &str, _ownership: Ownership) -> String {
        format!("gs::gc::Ref<gs::Array<{element}>>")
    }

    fn map_ref(&self, key: &str, value: &str, _ownership: Ownership) -> String {
        format!("gs::gc::Ref<gs::Map<{key}, {value}>>")
    }

    fn new_expr(&self, class_name: &str, args: &str, _ownership: Ownership) -> String {
        format!("gs::gc::make<{class_name}>({args})")
    }

    fn move_expr(&self, inner: &str) -> String {
        // A tracing collector has nothing to move; `own<T>` degrades to a
        // plain reference copy under `gc`.
        inner.to_string()
    }

    fn borrow_expr(&self, inner: &str) -> String {
        inner.to_string()
    }
}

pub struct OwnershipBackend;

impl MemoryModeBackend for OwnershipBackend {
    fn mode(&self) -> MemoryMode {
        MemoryMode::Ownership
    }

    fn class_ref(&self, name: &str, type_args: &str, ownership: Ownership) -> String {
        let base = if type_args.is_empty() {
            name.to_string()
        } else {
            format!("{name}<{type_args}>")
        };
        match ownership {
            Ownership::Own => format!("gs::Own<{base}>"),
            Ownership::Share => format!("gs::Share<{base}>"),
            Ownership::Use => format!("gs::Use<{base}>"),
            Ownership::Value => base,
        }
    }

    fn array_ref(&self, element: &str, ownership: Ownership) -> String {
        self.class_ref(&format!("gs::Array<{element}>"), "", ownership)
    }

    fn map_ref(&self, key: &str, value: &str, ownership: Ownership) -> String {
        self.class_ref(&format!("gs::Map<{key}, {value}>"), "", ownership)
    }

    fn new_expr(&self, class_name: &str, args: &str, ownership: Ownership) -> String {
        match ownership {
            Ownership::Own => format!("gs::make_own<{class_name}>({args})"),
            Ownership::Share => format!("gs::make_share<{class_name}>({args})"),
            // `new` never directly produces a borrow; a checker-enforced
            // invariant upstream (out of this crate's scope) guarantees a
            // `use<T>`-typed site is always initialized from an existing
            // own/share value, never a fresh `new`.
            Ownership::Use => format!("gs::make_own<{class_name}>({args})"),
            Ownership::Value => format!("{class_name}({args})"),
        }
    }

    fn move_expr(&self, inner: &str) -> String {
        format!("std::move({inner})")
    }

    fn borrow_expr(&self, inner: &str) -> String {
        format!("gs::borrow({inner})")
    }
}

pub fn backend_for(mode: MemoryMode) -> Box<dyn MemoryModeBackend> {
    match mode {
        MemoryMode::Gc => Box::new(GcBackend),
        MemoryMode::Ownership => Box::new(OwnershipBackend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gc_mode_ignores_the_ownership_tag() {
        let backend = GcBackend;
        assert_eq!(
            backend.class_ref("Widget", "", Ownership::Own),
            backend.class_ref("Widget", "", Ownership::Share)
        );
    }

    #[test]
    fn ownership_mode_selects_a_distinct_wrapper_per_tag() {
        let backend = OwnershipBackend;
        assert_eq!(backend.class_ref("Widget", "", Ownership::Own), "gs::Own<Widget>");
        assert_eq!(backend.class_ref("Widget", "", Ownership::Share), "gs::Share<Widget>");
        assert_eq!(backend.class_ref("Widget", "", Ownership::Use), "gs::Use<Widget>");
        assert_eq!(backend.class_ref("Widget", "", Ownership::Value), "Widget");
    }
}
