use crate::{
    context::Context,
    db::axiom::Axiom,
    structures::{deduction::Deduction, expression::ConnectiveKind},
    types::err::ErrorKind,
};

use super::{Application, Rule};

impl Context {
    /// A ∧ B ⊢ A, B
    pub(super) fn simplification(&mut self, a: Axiom) -> Result<Application, ErrorKind> {
        let operands = match self.expressions.as_connective(a.expression) {
            Some(connective) if connective.kind == ConnectiveKind::Conjunction => {
                connective.operands.clone()
            }
            _ => return Ok(Application::Inapplicable),
        };

        let deductions = operands
            .into_iter()
            .map(|operand| Deduction::new(operand, Rule::Simplification, vec![a.id]))
            .collect();

        Ok(Application::Produced(deductions))
    }
}
