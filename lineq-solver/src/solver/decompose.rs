//! Simplification of the nested sub-expressions of the left-hand side.
//!
//! The walk is bottom-up. Each node is rebuilt from its already-simplified children, and then
//! either kept as it is (if it is already a simple relation between a term and the unknown) or
//! replaced by its simplified value, which records a step. To render the equation at the time of
//! each step, every recursive call receives a closure that places a node back into the equation.

use crate::{
    equation::Equation,
    step::Step,
    step_collector::StepCollector,
};
use lineq_compute::{ComputeEngine, MathExpr, Operator};
use lineq_error::Error;

/// Returns true if `node` needs no simplification of its own.
fn is_terminal(node: &MathExpr, unknown: &str) -> bool {
    match node {
        MathExpr::Op(Operator::Add | Operator::Subtract, operands) => match operands.as_slice() {
            [a, b] => a.contains_symbol(unknown) != b.contains_symbol(unknown),
            _ => false,
        },
        MathExpr::Op(Operator::Multiply, operands) => match operands.as_slice() {
            [_, b] => b.is_symbol(unknown),
            _ => false,
        },
        MathExpr::Op(Operator::Negate, _) => true,
        MathExpr::Op(..) => false,
        MathExpr::Number(_) | MathExpr::Symbol(_) => true,
    }
}

/// Walks the operands of a node with the given operator, returning the simplified operands.
fn walk_operands<C: StepCollector>(
    op: Operator,
    operands: &[MathExpr],
    rebuild: &dyn Fn(MathExpr) -> MathExpr,
    engine: &ComputeEngine,
    collector: &mut C,
) -> Result<Vec<MathExpr>, Error> {
    let mut done = Vec::with_capacity(operands.len());
    for (i, operand) in operands.iter().enumerate() {
        let context = |child: MathExpr| {
            let siblings = done.iter()
                .cloned()
                .chain(std::iter::once(child))
                .chain(operands[i + 1..].iter().cloned())
                .collect();
            rebuild(MathExpr::Op(op, siblings))
        };
        let simplified = walk(operand, &context, engine, collector)?;
        done.push(simplified);
    }
    Ok(done)
}

fn walk<C: StepCollector>(
    expr: &MathExpr,
    rebuild: &dyn Fn(MathExpr) -> MathExpr,
    engine: &ComputeEngine,
    collector: &mut C,
) -> Result<MathExpr, Error> {
    let MathExpr::Op(op, operands) = expr else {
        return Ok(expr.clone());
    };

    let node = MathExpr::Op(*op, walk_operands(*op, operands, rebuild, engine, collector)?);
    if is_terminal(&node, engine.unknown()) {
        return Ok(node);
    }

    let result = engine.simplify(&node)?;
    collector.record(|| Step::new(format!("{} {}", op, node), rebuild(node.clone()), result.clone()));
    Ok(result)
}

/// Simplifies the sub-expressions of the left-hand side of the equation, returning the new
/// left-hand side.
///
/// The root of the left-hand side is rebuilt from its simplified children, but is not simplified
/// itself.
pub fn decompose<C: StepCollector>(
    equation: &Equation,
    engine: &ComputeEngine,
    collector: &mut C,
) -> Result<MathExpr, Error> {
    let MathExpr::Op(op, operands) = equation.lhs() else {
        return Ok(equation.lhs().clone());
    };

    let rebuild = |lhs: MathExpr| equation.with_lhs(lhs).to_expr();
    Ok(MathExpr::Op(*op, walk_operands(*op, operands, &rebuild, engine, collector)?))
}
