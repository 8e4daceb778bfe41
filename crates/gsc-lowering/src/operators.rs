//! Operator mapping: one-to-one except `??`, which lowers to a
//! guarded conditional in `expr.rs` rather than to a binary IR node.

use gsc_ast::{BinOp, UnOp};
use gsc_ir::{BinaryOp, UnaryOp};

/// Maps every `BinOp` except `NullishCoalescing`, which the caller handles
/// separately because it needs a fresh temporary, not a plain binary node.
pub fn map_binary_op(op: BinOp) -> Option<BinaryOp> {
    match op {
        BinOp::Plus => Some(BinaryOp::Add),
        BinOp::Minus => Some(BinaryOp::Sub),
        BinOp::Star => Some(BinaryOp::Mul),
        BinOp::Slash => Some(BinaryOp::Div),
        BinOp::Percent => Some(BinaryOp::Mod),
        BinOp::EqEqEq => Some(BinaryOp::StrictEq),
        BinOp::NotEqEqEq => Some(BinaryOp::StrictNe),
        BinOp::Lt => Some(BinaryOp::Lt),
        BinOp::Le => Some(BinaryOp::Le),
        BinOp::Gt => Some(BinaryOp::Gt),
        BinOp::Ge => Some(BinaryOp::Ge),
        BinOp::AmpAmp => Some(BinaryOp::And),
        BinOp::PipePipe => Some(BinaryOp::Or),
        BinOp::Amp => Some(BinaryOp::BitAnd),
        BinOp::Pipe => Some(BinaryOp::BitOr),
        BinOp::Caret => Some(BinaryOp::BitXor),
        BinOp::LtLt => Some(BinaryOp::Shl),
        BinOp::GtGt => Some(BinaryOp::Shr),
        BinOp::NullishCoalescing => None,
    }
}

pub fn map_unary_op(op: UnOp) -> UnaryOp {
    match op {
        UnOp::Minus => UnaryOp::Neg,
        UnOp::Bang => UnaryOp::Not,
        UnOp::Tilde => UnaryOp::BitNot,
        UnOp::TypeOf => UnaryOp::TypeOf,
    }
}

/// Whether the result type of an arithmetic binary op on two operand types
/// promotes to `number` ("arithmetic integer/number promotion"):
/// mixing `integer`/`integer53` with `number`, or either integer kind with
/// the other, promotes to the wider/more general type.
pub fn promoted_arithmetic_type(op: BinaryOp, left: &gsc_ir::Type, right: &gsc_ir::Type) -> gsc_ir::Type {
    use gsc_ir::{PrimitiveTag::*, Type::Primitive};
    if !matches!(
        op,
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod
    ) {
        unreachable!("promoted_arithmetic_type called for a non-arithmetic op");
    }
    match (left, right) {
        (Primitive(Integer), Primitive(Integer)) => gsc_ir::Type::integer(),
        (Primitive(Integer53), Primitive(Integer53))
        | (Primitive(Integer53), Primitive(Integer))
        | (Primitive(Integer), Primitive(Integer53)) => gsc_ir::Type::integer53(),
        _ => gsc_ir::Type::number(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_ir::Type;

    #[test]
    fn two_integers_stay_integer() {
        assert_eq!(
            promoted_arithmetic_type(BinaryOp::Add, &Type::integer(), &Type::integer()),
            Type::integer()
        );
    }

    #[test]
    fn integer_and_number_promote_to_number() {
        assert_eq!(
            promoted_arithmetic_type(BinaryOp::Add, &Type::integer(), &Type::number()),
            Type::number()
        );
    }

    #[test]
    fn integer_and_integer53_promote_to_integer53() {
        assert_eq!(
            promoted_arithmetic_type(BinaryOp::Mul, &Type::integer(), &Type::integer53()),
            Type::integer53()
        );
    }

    #[test]
    fn nullish_coalescing_has_no_direct_binary_op_mapping() {
        assert_eq!(map_binary_op(BinOp::NullishCoalescing), None);
    }
}
