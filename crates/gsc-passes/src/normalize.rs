//! Union flattening/dedup/sort and nullable canonicalization (//! invariants 3-4). Applied once more, uniformly, after lowering — lowering
//! already normalizes the types it constructs locally, so a correct program
//! is a fixed point of this pass ("Union normalization is idempotent").

use gsc_common::MemoryMode;
use gsc_ir::{Declaration, Module, Ownership, Type};
use gsc_signature::SignatureEngine;

/// Normalize a single type per the active memory mode.
///
/// - `Nullable(T)`: in `gc` mode, reference types (class/interface/array/map)
///   are already implicitly nullable through `gs::gc::Ref<T>`, so the wrapper
///   is redundant and is dropped; non-reference types and `ownership` mode
///   keep it explicit.
/// - `Union(members)`: flattened (a union never directly nests another after
///   this pass), deduplicated by canonical string, and sorted by canonical
///   string (invariant 3). A union that collapses to one member after dedup
///   is replaced by that member.
pub fn normalize_type(ty: &Type, mode: MemoryMode, engine: &SignatureEngine) -> Type {
    match ty {
        Type::Nullable(inner) => {
            let inner = normalize_type(inner, mode, engine);
            if mode == MemoryMode::Gc && inner.is_reference() {
                inner
            } else {
                Type::nullable(inner)
            }
        }
        Type::Union(members) => {
            let mut flat = Vec::new();
            for m in members {
                flatten_into(&mut flat, normalize_type(m, mode, engine));
            }
            dedup_sorted_by_canonical(&mut flat, engine);
            match flat.len() {
                1 => flat.into_iter().next().expect("len checked above"),
                _ => Type::Union(flat),
            }
        }
        Type::Array { element, ownership } => Type::Array {
            element: Box::new(normalize_type(element, mode, engine)),
            ownership: *ownership,
        },
        Type::Map {
            key,
            value,
            ownership,
        } => Type::Map {
            key: Box::new(normalize_type(key, mode, engine)),
            value: Box::new(normalize_type(value, mode, engine)),
            ownership: *ownership,
        },
        Type::Function { params, ret } => Type::Function {
            params: params
                .iter()
                .map(|p| normalize_type(p, mode, engine))
                .collect(),
            ret: Box::new(normalize_type(ret, mode, engine)),
        },
        Type::Class {
            name,
            ownership,
            type_args,
        } => Type::Class {
            name: name.clone(),
            ownership: *ownership,
            type_args: type_args.iter().map(|t| normalize_type(t, mode, engine)).collect(),
        },
        Type::Interface {
            name,
            ownership,
            type_args,
        } => Type::Interface {
            name: name.clone(),
            ownership: *ownership,
            type_args: type_args.iter().map(|t| normalize_type(t, mode, engine)).collect(),
        },
        Type::Promise(inner) => Type::Promise(Box::new(normalize_type(inner, mode, engine))),
        Type::Primitive(_) => ty.clone(),
    }
}

fn flatten_into(out: &mut Vec<Type>, ty: Type) {
    match ty {
        Type::Union(members) => out.extend(members),
        other => out.push(other),
    }
}

fn dedup_sorted_by_canonical(members: &mut Vec<Type>, engine: &SignatureEngine) {
    members.sort_by(|a, b| engine.type_string(a).cmp(&engine.type_string(b)));
    members.dedup_by(|a, b| engine.type_string(a) == engine.type_string(b));
}

/// Run the normalization rules over every type reachable from a module's
/// declarations: function signatures, field/parameter annotations, and
/// nested expression types.
pub fn normalize_module(module: &mut Module, mode: MemoryMode, engine: &SignatureEngine) {
    for decl in &mut module.declarations {
        normalize_declaration(decl, mode, engine);
    }
}

fn normalize_declaration(decl: &mut Declaration, mode: MemoryMode, engine: &SignatureEngine) {
    match decl {
        Declaration::Function(f) => {
            f.return_type = normalize_type(&f.return_type, mode, engine);
            for p in &mut f.params {
                p.ty = normalize_type(&p.ty, mode, engine);
            }
            normalize_stmts(&mut f.body, mode, engine);
        }
        Declaration::Class(c) => {
            for field in &mut c.fields {
                field.ty = normalize_type(&field.ty, mode, engine);
            }
            for m in &mut c.methods {
                m.function.return_type = normalize_type(&m.function.return_type, mode, engine);
                for p in &mut m.function.params {
                    p.ty = normalize_type(&p.ty, mode, engine);
                }
                normalize_stmts(&mut m.function.body, mode, engine);
            }
            if let Some(ctor) = &mut c.constructor {
                for p in &mut ctor.params {
                    p.ty = normalize_type(&p.ty, mode, engine);
                }
                normalize_stmts(&mut ctor.body, mode, engine);
            }
        }
        Declaration::Interface(i) => {
            for p in &mut i.properties {
                p.ty = normalize_type(&p.ty, mode, engine);
            }
            for m in &mut i.methods {
                m.return_type = normalize_type(&m.return_type, mode, engine);
                for p in &mut m.params {
                    p.ty = normalize_type(&p.ty, mode, engine);
                }
            }
        }
        Declaration::TypeAlias(t) => {
            t.aliased = normalize_type(&t.aliased, mode, engine);
        }
        Declaration::Constant(c) => {
            c.ty = normalize_type(&c.ty, mode, engine);
            normalize_expr(&mut c.init, mode, engine);
        }
    }
}

fn normalize_stmts(stmts: &mut [gsc_ir::Stmt], mode: MemoryMode, engine: &SignatureEngine) {
    use gsc_ir::StmtKind::*;
    for stmt in stmts {
        match &mut stmt.kind {
            VariableDeclaration { ty, init, .. } => {
                *ty = normalize_type(ty, mode, engine);
                if let Some(e) = init {
                    normalize_expr(e, mode, engine);
                }
            }
            ExpressionStatement(e) | Throw(e) => normalize_expr(e, mode, engine),
            Return(e) => {
                if let Some(e) = e {
                    normalize_expr(e, mode, engine);
                }
            }
            If {
                cond,
                then_branch,
                else_branch,
            } => {
                normalize_expr(cond, mode, engine);
                normalize_stmts(then_branch, mode, engine);
                if let Some(eb) = else_branch {
                    normalize_stmts(eb, mode, engine);
                }
            }
            While { cond, body } => {
                normalize_expr(cond, mode, engine);
                normalize_stmts(body, mode, engine);
            }
            For {
                init,
                cond,
                incr,
                body,
            } => {
                if let Some(i) = init {
                    normalize_stmts(std::slice::from_mut(i), mode, engine);
                }
                if let Some(c) = cond {
                    normalize_expr(c, mode, engine);
                }
                if let Some(inc) = incr {
                    normalize_expr(inc, mode, engine);
                }
                normalize_stmts(body, mode, engine);
            }
            ForOf { iterable, body, .. } => {
                normalize_expr(iterable, mode, engine);
                normalize_stmts(body, mode, engine);
            }
            Block(body) => normalize_stmts(body, mode, engine),
            TryCatchFinally {
                try_block,
                catch,
                finally_block,
            } => {
                normalize_stmts(try_block, mode, engine);
                if let Some(c) = catch {
                    normalize_stmts(&mut c.body, mode, engine);
                }
                if let Some(f) = finally_block {
                    normalize_stmts(f, mode, engine);
                }
            }
            Break | Continue => {}
        }
    }
}

fn normalize_expr(expr: &mut gsc_ir::Expr, mode: MemoryMode, engine: &SignatureEngine) {
    use gsc_ir::ExprKind::*;
    expr.ty = normalize_type(&expr.ty, mode, engine);
    match &mut expr.kind {
        Literal(_) | Identifier(_) => {}
        Binary { left, right, .. } => {
            normalize_expr(left, mode, engine);
            normalize_expr(right, mode, engine);
        }
        Unary { operand, .. } => normalize_expr(operand, mode, engine),
        Conditional {
            cond,
            then_branch,
            else_branch,
        } => {
            normalize_expr(cond, mode, engine);
            normalize_expr(then_branch, mode, engine);
            normalize_expr(else_branch, mode, engine);
        }
        Member { object, .. } => normalize_expr(object, mode, engine),
        Index { object, index } => {
            normalize_expr(object, mode, engine);
            normalize_expr(index, mode, engine);
        }
        Call { callee, args, .. } => {
            normalize_expr(callee, mode, engine);
            for a in args {
                normalize_expr(a, mode, engine);
            }
        }
        MethodCall { object, args, .. } => {
            normalize_expr(object, mode, engine);
            for a in args {
                normalize_expr(a, mode, engine);
            }
        }
        New { args, type_args, .. } => {
            for a in args {
                normalize_expr(a, mode, engine);
            }
            for t in type_args {
                *t = normalize_type(t, mode, engine);
            }
        }
        ArrayLiteral(items) => {
            for i in items {
                normalize_expr(i, mode, engine);
            }
        }
        ObjectLiteral(fields) => {
            for (_, v) in fields {
                normalize_expr(v, mode, engine);
            }
        }
        Assignment { target, value } => {
            normalize_expr(target, mode, engine);
            normalize_expr(value, mode, engine);
        }
        Move(inner) | Borrow(inner) | Await(inner) => normalize_expr(inner, mode, engine),
        Lambda { params, body, .. } => {
            for p in params {
                p.ty = normalize_type(&p.ty, mode, engine);
            }
            normalize_stmts(body, mode, engine);
        }
        TemplateLiteral(parts) => {
            for part in parts {
                if let gsc_ir::TemplatePart::Expr(e) = part {
                    normalize_expr(e, mode, engine);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_ir::TypeName;

    #[test]
    fn gc_mode_drops_nullable_wrapper_around_reference_types() {
        let engine = SignatureEngine::new();
        let class = Type::class("Widget", Ownership::Share);
        let normalized = normalize_type(&Type::nullable(class.clone()), MemoryMode::Gc, &engine);
        assert_eq!(normalized, class);
    }

    #[test]
    fn ownership_mode_keeps_nullable_wrapper_explicit() {
        let engine = SignatureEngine::new();
        let class = Type::class("Widget", Ownership::Own);
        let normalized = normalize_type(
            &Type::nullable(class.clone()),
            MemoryMode::Ownership,
            &engine,
        );
        assert_eq!(normalized, Type::nullable(class));
    }

    #[test]
    fn nullable_primitive_stays_wrapped_in_both_modes() {
        let engine = SignatureEngine::new();
        for mode in [MemoryMode::Gc, MemoryMode::Ownership] {
            let normalized = normalize_type(&Type::nullable(Type::number()), mode, &engine);
            assert_eq!(normalized, Type::nullable(Type::number()));
        }
    }

    #[test]
    fn union_members_are_deduplicated_and_sorted() {
        let engine = SignatureEngine::new();
        let union = Type::Union(vec![Type::string(), Type::number(), Type::string()]);
        let normalized = normalize_type(&union, MemoryMode::Gc, &engine);
        match normalized {
            Type::Union(members) => {
                assert_eq!(members.len(), 2);
                let strings: Vec<_> = members.iter().map(|t| engine.type_string(t)).collect();
                assert!(strings.windows(2).all(|w| w[0] <= w[1]));
            }
            other => panic!("expected a union, got {other:?}"),
        }
    }

    #[test]
    fn nested_unions_flatten() {
        let engine = SignatureEngine::new();
        let nested = Type::Union(vec![Type::Union(vec![Type::number(), Type::boolean()]), Type::string()]);
        let normalized = normalize_type(&nested, MemoryMode::Gc, &engine);
        match normalized {
            Type::Union(members) => assert_eq!(members.len(), 3),
            other => panic!("expected a flattened union, got {other:?}"),
        }
    }

    #[test]
    fn union_of_one_distinct_member_collapses() {
        let engine = SignatureEngine::new();
        let union = Type::Union(vec![Type::number(), Type::number()]);
        assert_eq!(normalize_type(&union, MemoryMode::Gc, &engine), Type::number());
    }

    #[test]
    fn normalization_is_idempotent() {
        let engine = SignatureEngine::new();
        let ty = Type::Union(vec![
            Type::nullable(Type::class("Widget", Ownership::Share)),
            Type::string(),
        ]);
        let once = normalize_type(&ty, MemoryMode::Gc, &engine);
        let twice = normalize_type(&once, MemoryMode::Gc, &engine);
        assert_eq!(once, twice);
    }

    #[test]
    fn class_type_args_are_normalized_recursively() {
        let engine = SignatureEngine::new();
        let generic = Type::Class {
            name: TypeName::new("Box"),
            ownership: Ownership::Own,
            type_args: vec![Type::nullable(Type::class("Widget", Ownership::Share))],
        };
        let normalized = normalize_type(&generic, MemoryMode::Gc, &engine);
        match normalized {
            Type::Class { type_args, .. } => {
                assert_eq!(type_args[0], Type::class("Widget", Ownership::Share));
            }
            other => panic!("expected a class, got {other:?}"),
        }
    }
}
