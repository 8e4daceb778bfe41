//! Expression emission ("Expression emission rules").

use crate::builtins::runtime_symbol;
use crate::context::EmitCtx;
use crate::keywords::escape_cpp_keyword;
use crate::type_emit::emit_type;
use gsc_common::MemoryMode;
use gsc_ir::{BinaryOp, Expr, ExprKind, Literal, Ownership, Type, UnaryOp};

fn binary_operator(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
        BinaryOp::StrictEq => "==",
        BinaryOp::StrictNe => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::Le => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::Ge => ">=",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
        BinaryOp::BitAnd => "&",
        BinaryOp::BitOr => "|",
        BinaryOp::BitXor => "^",
        BinaryOp::Shl => "<<",
        BinaryOp::Shr => ">>",
    }
}

fn is_string_type(ty: &Type) -> bool {
    matches!(ty, Type::Primitive(gsc_ir::PrimitiveTag::String))
}

/// `===`/`!==` render as IEEE comparison for numbers (`0 === -0` is true,
/// `NaN === NaN` is false, both already true of C++ `==`/`!=` on `double`)
/// but delegate to the runtime string-equality function for strings
/// (see DESIGN.md's open-question resolution).
fn emit_binary(op: BinaryOp, left: &Expr, right: &Expr, ctx: &EmitCtx) -> String {
    let l = emit_expr(left, ctx);
    let r = emit_expr(right, ctx);
    if matches!(op, BinaryOp::StrictEq | BinaryOp::StrictNe) && is_string_type(&left.ty) {
        let eq = format!("({l}).equals({r})");
        return if op == BinaryOp::StrictEq {
            eq
        } else {
            format!("!{eq}")
        };
    }
    format!("({l} {} {r})", binary_operator(op))
}

fn emit_unary(op: UnaryOp, operand: &Expr, ctx: &EmitCtx) -> String {
    let o = emit_expr(operand, ctx);
    match op {
        UnaryOp::Neg => format!("(-{o})"),
        UnaryOp::Not => format!("(!{o})"),
        UnaryOp::BitNot => format!("(~{o})"),
        UnaryOp::TypeOf => format!("gs::type_of({o})"),
    }
}

/// Whether `object`'s type renders to a pointer-like wrapper under `mode`,
/// and so needs `->` rather than `.` at a member/index access site.
fn is_pointer_like(ty: &Type, mode: MemoryMode) -> bool {
    match ty {
        Type::Class { ownership, .. } | Type::Interface { ownership, .. } => match mode {
            MemoryMode::Gc => true,
            MemoryMode::Ownership => *ownership != Ownership::Value,
        },
        _ => false,
    }
}

fn member_operator(object: &Expr, ctx: &EmitCtx) -> &'static str {
    if is_pointer_like(&object.ty, ctx.backend.mode()) {
        "->"
    } else {
        "."
    }
}

fn emit_literal(lit: &Literal, ty: &Type, ctx: &EmitCtx) -> String {
    match lit {
        Literal::Number(n) => format_double(*n),
        Literal::Integer(i) => i.to_string(),
        Literal::Integer53(i) => format!("{i}LL"),
        Literal::String(s) => format!("gs::String({:?})", s.as_ref()),
        Literal::Boolean(b) => b.to_string(),
        Literal::Null | Literal::Undefined => emit_null_literal(ty, ctx),
    }
}

/// Render a `number` literal so `0`/`-0`/`NaN`/`Infinity` keep IEEE-754
/// identity (open question, resolved: emit the bit pattern the C++
/// `double` literal grammar understands directly rather than normalizing
/// `-0.0` to `0.0`).
fn format_double(n: f64) -> String {
    if n.is_nan() {
        "std::numeric_limits<double>::quiet_NaN()".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "std::numeric_limits<double>::infinity()".to_string()
        } else {
            "(-std::numeric_limits<double>::infinity())".to_string()
        }
    } else if n == 0.0 && n.is_sign_negative() {
        "(-0.0)".to_string()
    } else {
        format!("{n:?}")
    }
}

/// `null`/`undefined` render per the type they flow into: a nullable
/// reference under `gc` is a `gs::gc::Ref<T>` that is itself nullable
/// (`nullptr`); under `ownership` a `nullable(T)`/`T | null` is
/// `std::optional<T>` (`std::nullopt`) unless it is itself a borrow/pointer
/// wrapper, which is also `nullptr`-able.
fn emit_null_literal(ty: &Type, ctx: &EmitCtx) -> String {
    match ty {
        Type::Nullable(inner) => match ctx.backend.mode() {
            MemoryMode::Gc => "nullptr".to_string(),
            MemoryMode::Ownership => {
                if is_pointer_like(inner, MemoryMode::Ownership) {
                    "nullptr".to_string()
                } else {
                    "std::nullopt".to_string()
                }
            }
        },
        _ => "nullptr".to_string(),
    }
}

pub fn emit_expr(expr: &Expr, ctx: &EmitCtx) -> String {
    match &expr.kind {
        ExprKind::Literal(lit) => emit_literal(lit, &expr.ty, ctx),
        ExprKind::Identifier(name) => escape_cpp_keyword(name),
        ExprKind::Binary { op, left, right } => emit_binary(*op, left, right, ctx),
        ExprKind::Unary { op, operand } => emit_unary(*op, operand, ctx),
        ExprKind::Conditional {
            cond,
            then_branch,
            else_branch,
        } => format!(
            "({} ? {} : {})",
            emit_expr(cond, ctx),
            emit_expr(then_branch, ctx),
            emit_expr(else_branch, ctx)
        ),
        ExprKind::Member { object, name } => format!(
            "{}{}{}",
            emit_expr(object, ctx),
            member_operator(object, ctx),
            escape_cpp_keyword(name)
        ),
        ExprKind::Index { object, index } => {
            format!("{}[{}]", emit_expr(object, ctx), emit_expr(index, ctx))
        }
        ExprKind::Call {
            callee,
            args,
            builtin,
        } => emit_call(callee, args, *builtin, &expr.ty, ctx),
        ExprKind::MethodCall {
            object,
            method,
            args,
            builtin,
        } => emit_method_call(object, method, args, *builtin, ctx),
        ExprKind::New {
            class_name,
            args,
            type_args,
        } => emit_new(class_name, args, type_args, &expr.ty, ctx),
        ExprKind::ArrayLiteral(items) => {
            let rendered = items.iter().map(|e| emit_expr(e, ctx)).collect::<Vec<_>>().join(", ");
            let element_ty = match &expr.ty {
                Type::Array { element, .. } => emit_type(element, ctx.backend),
                other => emit_type(other, ctx.backend),
            };
            format!("gs::Array<{element_ty}>{{{rendered}}}")
        }
        ExprKind::ObjectLiteral(fields) => {
            let rendered = fields
                .iter()
                .map(|(name, value)| format!("{{\"{name}\", {}}}", emit_expr(value, ctx)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("gs::Property::object({{{rendered}}})")
        }
        ExprKind::Assignment { target, value } => {
            format!("{} = {}", emit_expr(target, ctx), emit_expr(value, ctx))
        }
        ExprKind::Move(inner) => ctx.backend.move_expr(&emit_expr(inner, ctx)),
        ExprKind::Borrow(inner) => ctx.backend.borrow_expr(&emit_expr(inner, ctx)),
        ExprKind::Lambda {
            params,
            body,
            captures,
            is_async,
        } => emit_lambda(params, body, captures, *is_async, &expr.ty, ctx),
        ExprKind::TemplateLiteral(parts) => emit_template_literal(parts, ctx),
        ExprKind::Await(inner) => emit_await(inner, ctx),
    }
}

/// A builtin call's callee is a `Member` node naming the recognized
/// namespace; the namespace identifier itself (`Math`, ...) is
/// never emitted, only the runtime symbol it resolves to.
fn emit_call(
    callee: &Expr,
    args: &[Expr],
    builtin: Option<gsc_ir::BuiltinNamespace>,
    result_ty: &Type,
    ctx: &EmitCtx,
) -> String {
    let rendered_args = args.iter().map(|a| emit_expr(a, ctx)).collect::<Vec<_>>().join(", ");
    let target = match (builtin, &callee.kind) {
        (Some(ns), ExprKind::Member { name, .. }) => runtime_symbol(ns, name),
        (None, ExprKind::Member { name, .. }) => {
            match crate::async_emit::callee_object_identifier(callee)
                .and_then(|obj| crate::async_emit::promise_static_call(obj, name, result_ty, ctx.backend))
            {
                Some(rewritten) => rewritten,
                None => emit_expr(callee, ctx),
            }
        }
        _ => emit_expr(callee, ctx),
    };
    format!("{target}({rendered_args})")
}

fn emit_method_call(
    object: &Expr,
    method: &str,
    args: &[Expr],
    builtin: Option<gsc_ir::BuiltinNamespace>,
    ctx: &EmitCtx,
) -> String {
    let rendered_args = args.iter().map(|a| emit_expr(a, ctx)).collect::<Vec<_>>().join(", ");
    if let Some(ns) = builtin {
        return format!("{}({rendered_args})", runtime_symbol(ns, method));
    }
    format!(
        "{}{}{}({rendered_args})",
        emit_expr(object, ctx),
        member_operator(object, ctx),
        escape_cpp_keyword(method)
    )
}

fn emit_new(class_name: &str, args: &[Expr], type_args: &[Type], ty: &Type, ctx: &EmitCtx) -> String {
    let rendered_args = args.iter().map(|a| emit_expr(a, ctx)).collect::<Vec<_>>().join(", ");
    let ownership = ty.ownership().unwrap_or(Ownership::Value);
    let class_with_args = if type_args.is_empty() {
        class_name.to_string()
    } else {
        let rendered = type_args.iter().map(|t| emit_type(t, ctx.backend)).collect::<Vec<_>>().join(", ");
        format!("{class_name}<{rendered}>")
    };
    ctx.backend.new_expr(&class_with_args, &rendered_args, ownership)
}

/// A free-standing lambda ("Function/arrow/lambda"): captures the
/// free-variable set by value/reference depending on mode - `gc` mode
/// captures managed refs by copy (cheap, traced); `ownership` mode captures
/// borrows by reference and owned values by move into the closure.
fn emit_lambda(
    params: &[gsc_ir::Param],
    body: &[gsc_ir::Stmt],
    captures: &[std::sync::Arc<str>],
    is_async: bool,
    ty: &Type,
    ctx: &EmitCtx,
) -> String {
    let capture_list = match ctx.backend.mode() {
        MemoryMode::Gc => "=".to_string(),
        MemoryMode::Ownership => captures
            .iter()
            .map(|c| format!("&{}", escape_cpp_keyword(c)))
            .collect::<Vec<_>>()
            .join(", "),
    };
    let rendered_params = params
        .iter()
        .map(|p| format!("{} {}", emit_type(&p.ty, ctx.backend), escape_cpp_keyword(&p.name)))
        .collect::<Vec<_>>()
        .join(", ");
    let ret = match ty {
        Type::Function { ret, .. } => emit_type(ret, ctx.backend),
        _ => "auto".to_string(),
    };
    let lambda_ctx = if is_async { ctx.in_async() } else { EmitCtx::new(ctx.backend) };
    let mut w = crate::writer::Writer::new();
    crate::stmt::emit_block(body, &lambda_ctx, &mut w);
    let body_text = w.into_string();
    format!(
        "[{capture_list}]({rendered_params}) -> {ret} {{\n{body_text}}}"
    )
}

fn emit_template_literal(parts: &[gsc_ir::TemplatePart], ctx: &EmitCtx) -> String {
    let rendered = parts
        .iter()
        .map(|p| match p {
            gsc_ir::TemplatePart::Text(text) => format!("gs::String({:?})", text.as_ref()),
            gsc_ir::TemplatePart::Expr(e) => format!("gs::to_string({})", emit_expr(e, ctx)),
        })
        .collect::<Vec<_>>();
    if rendered.is_empty() {
        return "gs::String(\"\")".to_string();
    }
    rendered.join(" + ")
}

fn emit_await(inner: &Expr, ctx: &EmitCtx) -> String {
    let inner_text = emit_expr(inner, ctx);
    if ctx.in_async {
        format!("(co_await {inner_text})")
    } else {
        // Only reachable for a malformed program (await outside async);
        // the checker rejects this upstream, but emission stays total.
        format!("(co_await {inner_text})")
    }
}
