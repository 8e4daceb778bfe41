//! Class emission ("Class emission"): constructors initialize
//! fields in declaration order; methods are emitted in the source file;
//! static methods become static member functions inside the class; virtual
//! dispatch is opt-in, used only by a method that overrides one declared on
//! a base class.

use crate::context::EmitCtx;
use crate::keywords::escape_cpp_keyword;
use crate::stmt::emit_block;
use crate::type_emit::emit_type;
use crate::writer::Writer;
use gsc_ir::{Access, ClassDeclaration, ClassMethod, FunctionDeclaration, Program};
use std::collections::HashSet;

fn access_keyword(access: Access) -> &'static str {
    match access {
        Access::Public => "public",
        Access::Private => "private",
        Access::Protected => "protected",
    }
}

/// The set of method names declared on `class`'s base class (searched
/// across every module in `program`, since a base class may live in an
/// imported module): a method here is emitted `virtual ... override`.
pub fn overridden_method_names(class: &ClassDeclaration, program: &Program) -> HashSet<String> {
    let Some(base_name) = &class.base_class else {
        return HashSet::new();
    };
    for module in program.modules() {
        if let Some(gsc_ir::Declaration::Class(base)) = module.find(base_name) {
            return base.methods.iter().map(|m| m.function.name.to_string()).collect();
        }
    }
    HashSet::new()
}

/// Declaration text for the header: class shape only, no method bodies.
pub fn emit_class_header(
    class: &ClassDeclaration,
    overrides: &HashSet<String>,
    backend: &dyn crate::mode::MemoryModeBackend,
) -> String {
    let mut w = Writer::new();
    let header = match &class.base_class {
        Some(base) => format!("class {} : public {base} {{", escape_cpp_keyword(&class.name)),
        None => format!("class {} {{", escape_cpp_keyword(&class.name)),
    };
    w.line(header);
    w.indent();

    for access in [Access::Public, Access::Protected, Access::Private] {
        let fields: Vec<_> = class.fields.iter().filter(|f| f.access == access).collect();
        let methods: Vec<_> = class.methods.iter().filter(|m| m.access == access).collect();
        if fields.is_empty() && methods.is_empty() && !(access == Access::Public && class.constructor.is_some()) {
            continue;
        }
        w.line(format!("{}:", access_keyword(access)));
        w.indent();
        if access == Access::Public {
            if let Some(ctor) = &class.constructor {
                w.line(format!(
                    "{}({});",
                    escape_cpp_keyword(&class.name),
                    emit_param_list(ctor, backend)
                ));
            }
        }
        for field in &fields {
            let storage = if field.is_static { "static " } else { "" };
            let readonly = if field.readonly { "const " } else { "" };
            w.line(format!(
                "{storage}{readonly}{} {};",
                emit_type(&field.ty, backend),
                escape_cpp_keyword(&field.name)
            ));
        }
        for method in &methods {
            w.line(emit_method_prototype(method, overrides, backend));
        }
        w.dedent();
    }

    w.dedent();
    w.line("};");
    w.into_string()
}

fn emit_param_list(f: &FunctionDeclaration, backend: &dyn crate::mode::MemoryModeBackend) -> String {
    f.params
        .iter()
        .map(|p| format!("{} {}", emit_type(&p.ty, backend), escape_cpp_keyword(&p.name)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn emit_method_prototype(
    method: &ClassMethod,
    overrides: &HashSet<String>,
    backend: &dyn crate::mode::MemoryModeBackend,
) -> String {
    let f = &method.function;
    let storage = if f.flags.is_static { "static " } else { "" };
    let is_override = overrides.contains(f.name.as_ref());
    let virt = if is_override && !f.flags.is_static { "virtual " } else { "" };
    let suffix = if is_override && !f.flags.is_static { " override" } else { "" };
    format!(
        "{virt}{storage}{} {}({}){suffix};",
        emit_type(&f.return_type, backend),
        escape_cpp_keyword(&f.name),
        emit_param_list(f, backend)
    )
}

/// Definition text for the source file: constructor body (fields
/// initialized in declaration order) plus every method body.
pub fn emit_class_source(class: &ClassDeclaration, backend: &dyn crate::mode::MemoryModeBackend) -> String {
    let mut w = Writer::new();
    let scoped_name = escape_cpp_keyword(&class.name);

    if let Some(ctor) = &class.constructor {
        // Only a field with a same-named constructor parameter gets a
        // member-initializer entry; otherwise `field(field)` would refer to
        // the member itself, not a parameter, and silently leave it
        // indeterminate. Fields without a matching parameter are left for
        // the constructor body to assign (or default-construct).
        let init_list = class
            .fields
            .iter()
            .filter(|f| !f.is_static && ctor.params.iter().any(|p| p.name.as_ref() == f.name.as_ref()))
            .map(|f| escape_cpp_keyword(&f.name))
            .collect::<Vec<_>>();
        w.line(format!(
            "{scoped_name}::{scoped_name}({}){} {{",
            emit_param_list(ctor, backend),
            if init_list.is_empty() {
                String::new()
            } else {
                format!(" : {}", init_list.iter().map(|n| format!("{n}({n})")).collect::<Vec<_>>().join(", "))
            }
        ));
        w.indent();
        let ctx = EmitCtx::new(backend);
        emit_block(&ctor.body, &ctx, &mut w);
        w.dedent();
        w.line("}");
        w.blank();
    }

    for method in &class.methods {
        let f = &method.function;
        let ctx = if f.flags.is_async { EmitCtx::new(backend).in_async() } else { EmitCtx::new(backend) };
        w.line(format!(
            "{} {scoped_name}::{}({}) {{",
            emit_type(&f.return_type, backend),
            escape_cpp_keyword(&f.name),
            emit_param_list(f, backend)
        ));
        w.indent();
        emit_block(&f.body, &ctx, &mut w);
        w.dedent();
        w.line("}");
        w.blank();
    }

    w.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{GcBackend, OwnershipBackend};
    use gsc_ir::{ClassField, Expr, ExprKind, FunctionFlags, Ownership, Param, Stmt, StmtKind, Type};

    fn point() -> ClassDeclaration {
        ClassDeclaration {
            name: "Point".into(),
            fields: vec![ClassField {
                name: "x".into(),
                ty: Type::number(),
                readonly: false,
                is_static: false,
                access: Access::Public,
            }],
            methods: vec![ClassMethod {
                function: FunctionDeclaration {
                    name: "getX".into(),
                    params: vec![],
                    return_type: Type::number(),
                    body: vec![],
                    flags: FunctionFlags::default(),
                },
                access: Access::Public,
            }],
            constructor: Some(FunctionDeclaration {
                name: "constructor".into(),
                params: vec![gsc_ir::Param {
                    name: "x".into(),
                    ty: Type::number(),
                }],
                return_type: Type::void(),
                body: vec![],
                flags: FunctionFlags::default(),
            }),
            base_class: None,
            implements: vec![],
        }
    }

    #[test]
    fn header_declares_fields_and_method_prototypes() {
        let backend = GcBackend;
        let header = emit_class_header(&point(), &HashSet::new(), &backend);
        assert!(header.contains("class Point {"));
        assert!(header.contains("double x;"));
        assert!(header.contains("double getX();"));
        assert!(header.contains("Point(double x);"));
    }

    #[test]
    fn no_base_class_means_no_virtual_methods() {
        let overrides = overridden_method_names(&point(), &Program::new());
        assert!(overrides.is_empty());
    }

    #[test]
    fn constructor_body_initializes_fields_in_declaration_order() {
        let backend = GcBackend;
        let source = emit_class_source(&point(), &backend);
        assert!(source.contains("Point::Point(double x) : x(x) {"));
    }

    #[test]
    fn a_field_with_no_same_named_parameter_gets_no_init_list_entry() {
        let backend = GcBackend;
        let mut class = point();
        class.fields.push(ClassField {
            name: "total".into(),
            ty: Type::number(),
            readonly: false,
            is_static: false,
            access: Access::Public,
        });
        let source = emit_class_source(&class, &backend);
        assert!(source.contains("Point::Point(double x) : x(x) {"), "{source}");
        assert!(!source.contains("total(total)"), "{source}");
        assert!(!source.contains("total(x)"), "{source}");
    }

    /// `this` is the one identifier lowering itself produces for the
    /// implicit receiver, typed as a non-owning borrow (`Ownership::Use`)
    /// of the enclosing class so `this.x = y;` renders a bare C++ `this`
    /// pointer (`this->x = y;`) rather than an undeclared `this_` local,
    /// under both memory modes.
    fn assignment_to_this_dot_x() -> Stmt {
        Stmt::new(StmtKind::ExpressionStatement(Expr::new(
            ExprKind::Assignment {
                target: Box::new(Expr::new(
                    ExprKind::Member {
                        object: Box::new(Expr::identifier("this", Type::class("Point", Ownership::Use))),
                        name: "x".into(),
                    },
                    Type::number(),
                )),
                value: Box::new(Expr::identifier("y", Type::number())),
            },
            Type::number(),
        )))
    }

    fn point_with_this_assigning_constructor() -> ClassDeclaration {
        let mut class = point();
        class.constructor = Some(FunctionDeclaration {
            name: "constructor".into(),
            params: vec![Param {
                name: "y".into(),
                ty: Type::number(),
            }],
            return_type: Type::void(),
            body: vec![assignment_to_this_dot_x()],
            flags: FunctionFlags::default(),
        });
        class
    }

    #[test]
    fn this_dot_field_assignment_renders_a_bare_this_pointer_under_gc() {
        let backend = GcBackend;
        let source = emit_class_source(&point_with_this_assigning_constructor(), &backend);
        assert!(source.contains("this->x = y;"), "{source}");
        assert!(!source.contains("this_"), "{source}");
    }

    #[test]
    fn this_dot_field_assignment_renders_a_bare_this_pointer_under_ownership() {
        let backend = OwnershipBackend;
        let source = emit_class_source(&point_with_this_assigning_constructor(), &backend);
        assert!(source.contains("this->x = y;"), "{source}");
        assert!(!source.contains("this_"), "{source}");
    }
}
