//! Nested-function hoisting (scenario in ): a nested
//! function declaration with no free variables from its enclosing scope is
//! promoted to a module-level declaration under a mangled name, so the code
//! generator never has to emit a C++ closure for it.
//!
//! A nested function is represented in the IR as a `VariableDeclaration`
//! whose initializer is a `Lambda` - surface `function fib(n) {...}` and
//! `const fib = (n) => {...}` lower to the same shape.
//!
//! Mutual recursion: two sibling nested functions that call each other are
//! hoisted together as long as neither has a free variable from *outside*
//! the pair. This pass approximates that fixed point by excluding every
//! sibling nested-function name from the free-variable scan up front,
//! rather than iterating to a fixed point - see DESIGN.md.

use crate::free_vars::free_variables;
use gsc_ir::{Declaration, Expr, ExprKind, FunctionDeclaration, FunctionFlags, Module, Stmt, StmtKind, Type};
use rustc_hash::FxHashSet;
use std::sync::Arc;

struct Candidate {
    index: usize,
    original_name: Arc<str>,
    params: Vec<gsc_ir::Param>,
    return_type: Type,
    body: Vec<Stmt>,
    is_async: bool,
}

/// Hoist every closure-free nested function in `module`'s top-level function
/// bodies. Module-level declarations (classes, other functions) are left
/// untouched except for the identifier rewrite inside the hoisting function's
/// own body.
pub fn hoist_module(module: &mut Module) {
    let module_names: FxHashSet<Arc<str>> = module
        .declarations
        .iter()
        .map(|d| Arc::from(d.name()))
        .collect();

    let mut new_top_level = Vec::new();
    for decl in &mut module.declarations {
        if let Declaration::Function(f) = decl {
            hoist_function_body(&f.name.clone(), &mut f.body, &module_names, &mut new_top_level);
        }
    }
    module
        .declarations
        .extend(new_top_level.into_iter().map(Declaration::Function));
}

fn hoist_function_body(
    enclosing_name: &str,
    body: &mut Vec<Stmt>,
    reserved: &FxHashSet<Arc<str>>,
    out: &mut Vec<FunctionDeclaration>,
) {
    let sibling_names: FxHashSet<Arc<str>> = body
        .iter()
        .filter_map(|s| nested_function_name(s))
        .collect();

    let mut candidates = Vec::new();
    let mut remaining = Vec::with_capacity(body.len());
    for (index, stmt) in std::mem::take(body).into_iter().enumerate() {
        match extract_candidate(index, stmt, &sibling_names) {
            Ok(candidate) => candidates.push(candidate),
            Err(stmt) => remaining.push(stmt),
        }
    }

    let mut renames: Vec<(Arc<str>, Arc<str>)> = Vec::new();
    let mut hoisted = Vec::new();
    for candidate in candidates {
        let mangled: Arc<str> = Arc::from(format!("{enclosing_name}${}", candidate.original_name));
        if reserved.contains(&mangled) {
            // Mangled name collides with an existing module-level
            // declaration; leave this one as a local closure.
            remaining.insert(
                candidate.index.min(remaining.len()),
                rebuild_stmt(&candidate),
            );
            continue;
        }
        renames.push((candidate.original_name.clone(), mangled.clone()));
        hoisted.push((mangled, candidate));
    }

    for (mangled, candidate) in hoisted {
        let mut decl_body = candidate.body;
        rename_identifiers(&mut decl_body, &renames);
        out.push(FunctionDeclaration {
            name: mangled,
            params: candidate.params,
            return_type: candidate.return_type,
            body: decl_body,
            flags: FunctionFlags {
                is_async: candidate.is_async,
                is_static: false,
                is_generator: false,
            },
        });
    }

    rename_identifiers(&mut remaining, &renames);
    *body = remaining;
}

fn nested_function_name(stmt: &Stmt) -> Option<Arc<str>> {
    match &stmt.kind {
        StmtKind::VariableDeclaration {
            name,
            init: Some(Expr {
                kind: ExprKind::Lambda { .. },
                ..
            }),
            ..
        } => Some(name.name.clone()),
        _ => None,
    }
}

fn extract_candidate(index: usize, stmt: Stmt, siblings: &FxHashSet<Arc<str>>) -> Result<Candidate, Stmt> {
    let (name, ty, lambda) = match stmt.kind {
        StmtKind::VariableDeclaration {
            name,
            ty,
            init:
                Some(Expr {
                    kind: ExprKind::Lambda { params, body, captures, is_async },
                    ty: lambda_ty,
                    span,
                }),
        } => (name, ty, (params, body, captures, is_async, lambda_ty, span)),
        other => {
            return Err(Stmt {
                kind: other,
                span: stmt.span,
            })
        }
    };
    let (params, body, captures, is_async, _lambda_ty, _span) = lambda;

    let mut bound: FxHashSet<Arc<str>> = params.iter().map(|p| p.name.clone()).collect();
    bound.insert(name.name.clone());
    bound.extend(siblings.iter().cloned());
    let free = free_variables(&body, &bound);

    if !free.is_empty() || !captures.is_empty() {
        // Has a genuine outer capture; not eligible. Rebuild the original
        // statement so the caller can keep it in place.
        let rebuilt = Expr::new(
            ExprKind::Lambda {
                params: params.clone(),
                body: body.clone(),
                captures,
                is_async,
            },
            ty.clone(),
        );
        return Err(Stmt::new(StmtKind::VariableDeclaration {
            name,
            ty,
            init: Some(rebuilt),
        }));
    }

    let return_type = match &ty {
        Type::Function { ret, .. } => (**ret).clone(),
        other => other.clone(),
    };

    Ok(Candidate {
        index,
        original_name: name.name,
        params,
        return_type,
        body,
        is_async,
    })
}

fn rebuild_stmt(candidate: &Candidate) -> Stmt {
    Stmt::new(StmtKind::VariableDeclaration {
        name: gsc_ir::VersionedName::new(candidate.original_name.clone(), 0),
        ty: Type::function(
            candidate.params.iter().map(|p| p.ty.clone()).collect(),
            candidate.return_type.clone(),
        ),
        init: Some(Expr::new(
            ExprKind::Lambda {
                params: candidate.params.clone(),
                body: candidate.body.clone(),
                captures: vec![],
                is_async: candidate.is_async,
            },
            Type::function(
                candidate.params.iter().map(|p| p.ty.clone()).collect(),
                candidate.return_type.clone(),
            ),
        )),
    })
}

fn rename_identifiers(stmts: &mut [Stmt], renames: &[(Arc<str>, Arc<str>)]) {
    if renames.is_empty() {
        return;
    }
    for stmt in stmts {
        rename_in_stmt(stmt, renames);
    }
}

fn rename_in_stmt(stmt: &mut Stmt, renames: &[(Arc<str>, Arc<str>)]) {
    match &mut stmt.kind {
        StmtKind::VariableDeclaration { init, .. } => {
            if let Some(e) = init {
                rename_in_expr(e, renames);
            }
        }
        StmtKind::ExpressionStatement(e) | StmtKind::Throw(e) => rename_in_expr(e, renames),
        StmtKind::Return(e) => {
            if let Some(e) = e {
                rename_in_expr(e, renames);
            }
        }
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            rename_in_expr(cond, renames);
            rename_identifiers(then_branch, renames);
            if let Some(eb) = else_branch {
                rename_identifiers(eb, renames);
            }
        }
        StmtKind::While { cond, body } => {
            rename_in_expr(cond, renames);
            rename_identifiers(body, renames);
        }
        StmtKind::For {
            init,
            cond,
            incr,
            body,
        } => {
            if let Some(i) = init {
                rename_in_stmt(i, renames);
            }
            if let Some(c) = cond {
                rename_in_expr(c, renames);
            }
            if let Some(inc) = incr {
                rename_in_expr(inc, renames);
            }
            rename_identifiers(body, renames);
        }
        StmtKind::ForOf { iterable, body, .. } => {
            rename_in_expr(iterable, renames);
            rename_identifiers(body, renames);
        }
        StmtKind::Block(body) => rename_identifiers(body, renames),
        StmtKind::TryCatchFinally {
            try_block,
            catch,
            finally_block,
        } => {
            rename_identifiers(try_block, renames);
            if let Some(c) = catch {
                rename_identifiers(&mut c.body, renames);
            }
            if let Some(f) = finally_block {
                rename_identifiers(f, renames);
            }
        }
        StmtKind::Break | StmtKind::Continue => {}
    }
}

fn rename_in_expr(expr: &mut Expr, renames: &[(Arc<str>, Arc<str>)]) {
    match &mut expr.kind {
        ExprKind::Literal(_) => {}
        ExprKind::Identifier(name) => {
            if let Some((_, to)) = renames.iter().find(|(from, _)| from == name) {
                *name = to.clone();
            }
        }
        ExprKind::Binary { left, right, .. } => {
            rename_in_expr(left, renames);
            rename_in_expr(right, renames);
        }
        ExprKind::Unary { operand, .. } => rename_in_expr(operand, renames),
        ExprKind::Conditional {
            cond,
            then_branch,
            else_branch,
        } => {
            rename_in_expr(cond, renames);
            rename_in_expr(then_branch, renames);
            rename_in_expr(else_branch, renames);
        }
        ExprKind::Member { object, .. } => rename_in_expr(object, renames),
        ExprKind::Index { object, index } => {
            rename_in_expr(object, renames);
            rename_in_expr(index, renames);
        }
        ExprKind::Call { callee, args, .. } => {
            rename_in_expr(callee, renames);
            for a in args {
                rename_in_expr(a, renames);
            }
        }
        ExprKind::MethodCall { object, args, .. } => {
            rename_in_expr(object, renames);
            for a in args {
                rename_in_expr(a, renames);
            }
        }
        ExprKind::New { args, .. } => {
            for a in args {
                rename_in_expr(a, renames);
            }
        }
        ExprKind::ArrayLiteral(items) => {
            for i in items {
                rename_in_expr(i, renames);
            }
        }
        ExprKind::ObjectLiteral(fields) => {
            for (_, v) in fields {
                rename_in_expr(v, renames);
            }
        }
        ExprKind::Assignment { target, value } => {
            rename_in_expr(target, renames);
            rename_in_expr(value, renames);
        }
        ExprKind::Move(inner) | ExprKind::Borrow(inner) | ExprKind::Await(inner) => {
            rename_in_expr(inner, renames)
        }
        ExprKind::Lambda { body, .. } => rename_identifiers(body, renames),
        ExprKind::TemplateLiteral(parts) => {
            for part in parts {
                if let gsc_ir::TemplatePart::Expr(e) = part {
                    rename_in_expr(e, renames);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_common::ModulePath;
    use gsc_ir::{BinaryOp, Literal, Param, VersionedName};

    fn fib_module() -> Module {
        let mut module = Module::new(ModulePath::new("fib.ts"));
        let nested_fib = Stmt::new(StmtKind::VariableDeclaration {
            name: VersionedName::new("fib", 0),
            ty: Type::function(vec![Type::integer()], Type::integer()),
            init: Some(Expr::new(
                ExprKind::Lambda {
                    params: vec![Param {
                        name: Arc::from("n"),
                        ty: Type::integer(),
                    }],
                    body: vec![Stmt::new(StmtKind::Return(Some(Expr::binary(
                        BinaryOp::Add,
                        Expr::identifier("n", Type::integer()),
                        Expr::new(
                            ExprKind::Call {
                                callee: Box::new(Expr::identifier(
                                    "fib",
                                    Type::function(vec![Type::integer()], Type::integer()),
                                )),
                                args: vec![Expr::identifier("n", Type::integer())],
                                builtin: None,
                            },
                            Type::integer(),
                        ),
                        Type::integer(),
                    ))))],
                    captures: vec![],
                    is_async: false,
                },
                Type::function(vec![Type::integer()], Type::integer()),
            )),
        });
        let outer = FunctionDeclaration {
            name: Arc::from("compute"),
            params: vec![],
            return_type: Type::integer(),
            body: vec![
                nested_fib,
                Stmt::new(StmtKind::Return(Some(Expr::new(
                    ExprKind::Call {
                        callee: Box::new(Expr::identifier(
                            "fib",
                            Type::function(vec![Type::integer()], Type::integer()),
                        )),
                        args: vec![Expr::literal(Literal::Integer(10), Type::integer())],
                        builtin: None,
                    },
                    Type::integer(),
                )))),
            ],
            flags: FunctionFlags::default(),
        };
        module.declarations.push(Declaration::Function(outer));
        module
    }

    #[test]
    fn closure_free_recursive_nested_function_is_hoisted() {
        let mut module = fib_module();
        hoist_module(&mut module);

        let hoisted = module
            .declarations
            .iter()
            .find(|d| d.name() == "compute$fib")
            .expect("fib should be hoisted to module level");
        let Declaration::Function(f) = hoisted else {
            panic!("expected a function declaration");
        };
        assert_eq!(f.params.len(), 1);

        let outer = module
            .declarations
            .iter()
            .find(|d| d.name() == "compute")
            .unwrap();
        let Declaration::Function(outer) = outer else {
            panic!("expected a function declaration");
        };
        assert_eq!(outer.body.len(), 1, "the nested declaration is removed");
    }

    #[test]
    fn nested_function_capturing_an_outer_binding_is_not_hoisted() {
        let mut module = Module::new(ModulePath::new("capture.ts"));
        let outer = FunctionDeclaration {
            name: Arc::from("withOffset"),
            params: vec![],
            return_type: Type::integer(),
            body: vec![
                Stmt::new(StmtKind::VariableDeclaration {
                    name: VersionedName::new("offset", 0),
                    ty: Type::integer(),
                    init: Some(Expr::literal(Literal::Integer(0), Type::integer())),
                }),
                Stmt::new(StmtKind::VariableDeclaration {
                    name: VersionedName::new("addOffset", 0),
                    ty: Type::function(vec![Type::integer()], Type::integer()),
                    init: Some(Expr::new(
                        ExprKind::Lambda {
                            params: vec![Param {
                                name: Arc::from("n"),
                                ty: Type::integer(),
                            }],
                            body: vec![Stmt::new(StmtKind::Return(Some(Expr::binary(
                                BinaryOp::Add,
                                Expr::identifier("n", Type::integer()),
                                Expr::identifier("offset", Type::integer()),
                                Type::integer(),
                            ))))],
                            captures: vec![Arc::from("offset")],
                            is_async: false,
                        },
                        Type::function(vec![Type::integer()], Type::integer()),
                    )),
                }),
            ],
            flags: FunctionFlags::default(),
        };
        module.declarations.push(Declaration::Function(outer));

        hoist_module(&mut module);

        assert!(
            !module.declarations.iter().any(|d| d.name() == "withOffset$addOffset"),
            "a nested function with an outer capture must not be hoisted"
        );
    }
}
