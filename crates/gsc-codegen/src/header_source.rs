//! The `.hpp`/`.cpp` split for a single module ("Header vs.
//! source split"): declarations (class shapes, function signatures, static
//! constants) go to the header; definitions go to the source file.
//! Circular references between modules are handled by forward declaration
//! in headers rather than `#include`ing another module's header back.

use crate::async_emit::module_needs_coroutine_header;
use crate::class_emit::{emit_class_header, emit_class_source, overridden_method_names};
use crate::context::EmitCtx;
use crate::keywords::escape_cpp_keyword;
use crate::mode::MemoryModeBackend;
use crate::stmt::emit_block;
use crate::type_emit::emit_type;
use crate::writer::Writer;
use gsc_ir::{ClassDeclaration, Declaration, FunctionDeclaration, Module, Program, Type};
use std::collections::BTreeSet;

/// The rendered `(header, source)` pair for one module.
pub struct ModuleOutput {
    pub header: String,
    pub source: String,
}

pub fn generate_module(module: &Module, program: &Program, backend: &dyn MemoryModeBackend) -> ModuleOutput {
    let stem = module.path.with_header_extension();
    let header_stem = stem.file_name().and_then(|f| f.to_str()).unwrap_or("module.hpp").to_string();

    let mut header = Writer::new();
    header.line("#pragma once");
    header.blank();
    header.line("#include \"gs/runtime.hpp\"");
    if module_needs_coroutine_header(module) {
        header.line("#include <coroutine>");
        header.line("#include \"gs/task.hpp\"");
    }
    for import in &module.imports {
        header.line(format!("#include \"{}\"", import.from.with_header_extension().display()));
    }
    header.blank();

    for name in forward_declarations(module) {
        header.line(format!("class {};", escape_cpp_keyword(&name)));
    }
    header.blank();

    let mut source = Writer::new();
    source.line(format!("#include \"{header_stem}\""));
    source.blank();

    for decl in &module.declarations {
        match decl {
            Declaration::Class(class) => {
                let overrides = overridden_method_names(class, program);
                header.raw(emit_class_header(class, &overrides, backend));
                header.blank();
                source.raw(emit_class_source(class, backend));
            }
            Declaration::Function(f) => {
                header.line(function_prototype(f, backend));
                source.raw(function_definition(f, backend));
                source.blank();
            }
            Declaration::Constant(c) => {
                header.line(format!("extern {} {};", emit_type(&c.ty, backend), escape_cpp_keyword(&c.name)));
                let ctx = EmitCtx::new(backend);
                source.line(format!(
                    "{} {} = {};",
                    emit_type(&c.ty, backend),
                    escape_cpp_keyword(&c.name),
                    crate::expr::emit_expr(&c.init, &ctx)
                ));
            }
            // Interfaces and type aliases contribute only to the type
            // environment; they have no C++ representation of
            // their own to emit.
            Declaration::Interface(_) | Declaration::TypeAlias(_) => {}
        }
    }

    ModuleOutput {
        header: header.into_string(),
        source: source.into_string(),
    }
}

fn function_prototype(f: &FunctionDeclaration, backend: &dyn MemoryModeBackend) -> String {
    format!(
        "{} {}({});",
        emit_type(&f.return_type, backend),
        escape_cpp_keyword(&f.name),
        f.params
            .iter()
            .map(|p| format!("{} {}", emit_type(&p.ty, backend), escape_cpp_keyword(&p.name)))
            .collect::<Vec<_>>()
            .join(", ")
    )
}

fn function_definition(f: &FunctionDeclaration, backend: &dyn MemoryModeBackend) -> String {
    let mut w = Writer::new();
    let ctx = if f.flags.is_async { EmitCtx::new(backend).in_async() } else { EmitCtx::new(backend) };
    w.line(format!(
        "{} {}({}) {{",
        emit_type(&f.return_type, backend),
        escape_cpp_keyword(&f.name),
        f.params
            .iter()
            .map(|p| format!("{} {}", emit_type(&p.ty, backend), escape_cpp_keyword(&p.name)))
            .collect::<Vec<_>>()
            .join(", ")
    ));
    w.indent();
    emit_block(&f.body, &ctx, &mut w);
    w.dedent();
    w.line("}");
    w.into_string()
}

/// Class/interface names referenced by this module's declarations but not
/// declared in it - forward-declared in the header instead of pulling in
/// another module's header, breaking the cycle a mutual reference would
/// otherwise create.
fn forward_declarations(module: &Module) -> BTreeSet<String> {
    let local_names: BTreeSet<&str> = module
        .declarations
        .iter()
        .filter_map(|d| match d {
            Declaration::Class(c) => Some(c.name.as_ref()),
            _ => None,
        })
        .collect();

    let mut referenced = BTreeSet::new();
    for decl in &module.declarations {
        if let Declaration::Class(class) = decl {
            for field in &class.fields {
                collect_class_names(&field.ty, &mut referenced);
            }
            for method in &class.methods {
                collect_fn_names(&method.function, &mut referenced);
            }
            if let Some(ctor) = &class.constructor {
                collect_fn_names(ctor, &mut referenced);
            }
        }
    }
    referenced.retain(|name| !local_names.contains(name.as_str()));
    referenced
}

fn collect_fn_names(f: &FunctionDeclaration, out: &mut BTreeSet<String>) {
    collect_class_names(&f.return_type, out);
    for p in &f.params {
        collect_class_names(&p.ty, out);
    }
}

fn collect_class_names(ty: &Type, out: &mut BTreeSet<String>) {
    match ty {
        Type::Class { name, .. } | Type::Interface { name, .. } => {
            out.insert(name.as_str().to_string());
        }
        Type::Array { element, .. } => collect_class_names(element, out),
        Type::Map { key, value, .. } => {
            collect_class_names(key, out);
            collect_class_names(value, out);
        }
        Type::Nullable(inner) | Type::Promise(inner) => collect_class_names(inner, out),
        Type::Union(members) => members.iter().for_each(|m| collect_class_names(m, out)),
        Type::Function { params, ret } => {
            params.iter().for_each(|p| collect_class_names(p, out));
            collect_class_names(ret, out);
        }
        Type::Primitive(_) => {}
    }
}
