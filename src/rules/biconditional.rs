use crate::{
    context::Context,
    db::axiom::Axiom,
    structures::{deduction::Deduction, expression::Expression},
    types::err::ErrorKind,
};

use super::{Application, Rule};

impl Context {
    /// A ↔ B ⊢ A → B, B → A
    pub(super) fn biconditional_elimination(&mut self, a: Axiom) -> Result<Application, ErrorKind> {
        let (x, y) = match self.expressions.get(self.expressions.actual(a.expression)) {
            Expression::Biconditional(x, y) => (*x, *y),
            _ => return Ok(Application::Inapplicable),
        };

        let forwards = self.expressions.implication(x, y);
        let backwards = self.expressions.implication(y, x);

        Ok(Application::Produced(vec![
            Deduction::new(forwards, Rule::BiconditionalElimination, vec![a.id]),
            Deduction::new(backwards, Rule::BiconditionalElimination, vec![a.id]),
        ]))
    }
}
