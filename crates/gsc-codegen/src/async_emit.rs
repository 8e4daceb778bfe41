//! Async lowering to coroutine tasks. The bulk of this - the
//! `co_await`/`co_return` placement - lives in [`crate::expr`]/[`crate::stmt`]
//! driven by [`EmitCtx::in_async`]; this module covers the two remaining
//! pieces: the `Promise.resolve`/`reject`/`all` static factories, and
//! deciding whether a module needs the coroutine header include.

use crate::mode::MemoryModeBackend;
use crate::type_emit::emit_type;
use gsc_ir::{ExprKind, Module, Type};

/// `Promise.resolve(v)`/`Promise.reject(err)`/`Promise.all(iterable)` are
/// not in the fixed builtin-namespace table ('s table covers
/// `Math`/`Date`/`JSON`/`Console`/`FileSystem[Async]`/`HTTP[Async]`, not
/// `Promise`) but still need routing to a runtime symbol (rule 5).
/// `resolve`/`reject` both emit the `gs::Promise<T>` constructor call
/// itself - the overload distinguishing a resolved value from a rejected
/// `gs::Error` lives on the runtime type, not in this rewrite. `all` emits
/// the runtime's own `::all` static helper rather than a constructor call.
pub fn promise_static_call(
    object_name: &str,
    member: &str,
    result_ty: &Type,
    backend: &dyn MemoryModeBackend,
) -> Option<String> {
    if object_name != "Promise" {
        return None;
    }
    let payload = match result_ty {
        Type::Promise(inner) => emit_type(inner, backend),
        other => emit_type(other, backend),
    };
    match member {
        "resolve" | "reject" => Some(format!("gs::Promise<{payload}>")),
        "all" => Some(format!("gs::Promise<{payload}>::all")),
        _ => None,
    }
}

/// A callee shaped `Member { object: Identifier(name), .. }`, the only
/// shape a recognized builtin or `Promise.*` call ever takes.
pub fn callee_object_identifier(callee: &gsc_ir::Expr) -> Option<&str> {
    match &callee.kind {
        ExprKind::Member { object, .. } => match &object.kind {
            ExprKind::Identifier(name) => Some(name.as_ref()),
            _ => None,
        },
        _ => None,
    }
}

/// Whether any function (free or method) in `module` is `async`: gates the
/// one-per-module coroutine header include ("The generator
/// inserts the coroutine header include once per module that contains any
/// async function").
pub fn module_needs_coroutine_header(module: &Module) -> bool {
    module.declarations.iter().any(|decl| match decl {
        gsc_ir::Declaration::Function(f) => f.flags.is_async,
        gsc_ir::Declaration::Class(c) => {
            c.methods.iter().any(|m| m.function.flags.is_async)
                || c.constructor.as_ref().is_some_and(|ctor| ctor.flags.is_async)
        }
        _ => false,
    })
}
