//! The table-driven builtin dispatch: `Math.*`/`Date.*`/`JSON.*`/`FileSystem[Async].*`/`HTTP[Async].*`/
//! `console.*` route to a fixed runtime symbol, read from the
//! [`gsc_ir::BuiltinNamespace`] tag the lowerer attached to the call site
//! rather than re-derived from the callee text here.

use gsc_ir::BuiltinNamespace;

/// The runtime namespace a [`BuiltinNamespace`] routes into. `Console`
/// lowercases to match `gs::console::log` ("`console.log(...)`
/// emits a variadic call into the runtime `gs::console::log`").
fn runtime_namespace(ns: BuiltinNamespace) -> &'static str {
    match ns {
        BuiltinNamespace::Math => "Math",
        BuiltinNamespace::Date => "Date",
        BuiltinNamespace::Json => "JSON",
        BuiltinNamespace::Console => "console",
        BuiltinNamespace::FileSystem => "FileSystem",
        BuiltinNamespace::FileSystemAsync => "FileSystemAsync",
        BuiltinNamespace::Http => "HTTP",
        BuiltinNamespace::HttpAsync => "HTTPAsync",
    }
}

/// Render `ns.member(args)` as the fully-qualified runtime call, e.g.
/// `Math.sqrt` -> `gs::Math::sqrt`, `console.log` -> `gs::console::log`.
pub fn runtime_symbol(ns: BuiltinNamespace, member: &str) -> String {
    format!("gs::{}::{member}", runtime_namespace(ns))
}
