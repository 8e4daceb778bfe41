//! Canonical string rendering (rule 5) — the textual normal form
//! compared for structural compatibility and hashed for signature caching.

use gsc_ir::{ClassDeclaration, InterfaceDeclaration, Ownership, PrimitiveTag, Type};
use std::fmt::Write as _;

fn ownership_str(o: Ownership) -> &'static str {
    match o {
        Ownership::Own => "own",
        Ownership::Share => "share",
        Ownership::Use => "use",
        Ownership::Value => "value",
    }
}

fn primitive_str(tag: PrimitiveTag) -> &'static str {
    match tag {
        PrimitiveTag::Number => "number",
        PrimitiveTag::Integer => "integer",
        PrimitiveTag::Integer53 => "integer53",
        PrimitiveTag::String => "string",
        PrimitiveTag::Boolean => "boolean",
        PrimitiveTag::Void => "void",
    }
}

/// Render `ty`'s canonical type string. Pure function of the type tree; the
/// `SignatureEngine` is responsible for memoizing calls to this.
pub fn canonical_type_string(ty: &Type) -> String {
    match ty {
        Type::Primitive(tag) => primitive_str(*tag).to_string(),
        Type::Class {
            name,
            ownership,
            type_args,
        } => render_named(name.as_str(), *ownership, type_args),
        Type::Interface {
            name,
            ownership,
            type_args,
        } => render_named(name.as_str(), *ownership, type_args),
        Type::Array { element, ownership } => {
            format!(
                "Array<{},{}>",
                canonical_type_string(element),
                ownership_str(*ownership)
            )
        }
        Type::Map {
            key,
            value,
            ownership,
        } => format!(
            "Map<{},{},{}>",
            canonical_type_string(key),
            canonical_type_string(value),
            ownership_str(*ownership)
        ),
        Type::Function { params, ret } => {
            let params_str = params
                .iter()
                .map(canonical_type_string)
                .collect::<Vec<_>>()
                .join(",");
            format!("({})->{}", params_str, canonical_type_string(ret))
        }
        Type::Union(members) => {
            let mut strings: Vec<String> = members.iter().map(canonical_type_string).collect();
            strings.sort();
            strings.join("|")
        }
        Type::Nullable(inner) => format!("{}?", canonical_type_string(inner)),
        Type::Promise(inner) => format!("Promise<{}>", canonical_type_string(inner)),
    }
}

fn render_named(name: &str, ownership: Ownership, type_args: &[Type]) -> String {
    let mut out = format!("{}<{}>", name, ownership_str(ownership));
    if !type_args.is_empty() {
        let args = type_args
            .iter()
            .map(canonical_type_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(out, "[{args}]").expect("writing to String cannot fail");
    }
    out
}

/// The member list canonical string for an interface (rules 1-4):
/// methods only, sorted by name.
pub fn interface_canonical_string(iface: &InterfaceDeclaration) -> String {
    let mut methods: Vec<&gsc_ir::InterfaceMethod> = iface.methods.iter().collect();
    methods.sort_by(|a, b| a.name.cmp(&b.name));

    let entries: Vec<String> = methods.iter().map(|m| render_method(&m.name, &m.params, &m.return_type)).collect();
    entries.join(";")
}

/// The member list canonical string for a class: public, non-underscore,
/// non-static fields and methods (rules 1-4).
pub fn class_canonical_string(class: &ClassDeclaration) -> String {
    let mut properties: Vec<&gsc_ir::ClassField> = class
        .fields
        .iter()
        .filter(|f| f.is_signature_visible())
        .collect();
    properties.sort_by(|a, b| a.name.cmp(&b.name));

    let mut methods: Vec<&gsc_ir::ClassMethod> = class
        .methods
        .iter()
        .filter(|m| m.is_signature_visible())
        .collect();
    methods.sort_by(|a, b| a.function.name.cmp(&b.function.name));

    let mut entries: Vec<String> = properties
        .iter()
        .map(|f| render_property(&f.name, f.readonly, &f.ty))
        .collect();
    entries.extend(
        methods
            .iter()
            .map(|m| render_method(&m.function.name, &m.function.params, &m.function.return_type)),
    );
    entries.join(";")
}

fn render_property(name: &str, readonly: bool, ty: &Type) -> String {
    if readonly {
        format!("readonly {}:{}", name, canonical_type_string(ty))
    } else {
        format!("{}:{}", name, canonical_type_string(ty))
    }
}

fn render_method(name: &str, params: &[gsc_ir::Param], ret: &Type) -> String {
    let params_str = params
        .iter()
        .map(|p| format!("{}:{}", p.name, canonical_type_string(&p.ty)))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}({}):{}", name, params_str, canonical_type_string(ret))
}
