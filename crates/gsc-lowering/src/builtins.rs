//! Builtin namespace recognition.
//!
//! A call whose callee is `Member { object: Identifier(ns), name: member }`
//! where `ns` names a recognized runtime namespace is tagged with a
//! [`BuiltinNamespace`] at lowering time, so the generator can route
//! straight to a runtime symbol instead of re-deriving it from text.
//! Table-driven and closed: an unrecognized namespace identifier is
//! left untagged and lowers as an ordinary call.

use gsc_ir::BuiltinNamespace;

pub fn recognize_namespace(identifier: &str) -> Option<BuiltinNamespace> {
    match identifier {
        "Math" => Some(BuiltinNamespace::Math),
        "Date" => Some(BuiltinNamespace::Date),
        "JSON" => Some(BuiltinNamespace::Json),
        "console" | "Console" => Some(BuiltinNamespace::Console),
        "FileSystem" => Some(BuiltinNamespace::FileSystem),
        "FileSystemAsync" => Some(BuiltinNamespace::FileSystemAsync),
        "HTTP" => Some(BuiltinNamespace::Http),
        "HTTPAsync" => Some(BuiltinNamespace::HttpAsync),
        _ => None,
    }
}
