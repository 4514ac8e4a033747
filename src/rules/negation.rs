use crate::{
    context::Context,
    db::axiom::Axiom,
    structures::{deduction::Deduction, equivalence::Relation},
    types::err::ErrorKind,
};

use super::{Application, Rule};

impl Context {
    /// A → B, A → ¬B ⊢ ¬A
    ///
    /// Antecedents are matched by equivalence, and consequents by negation.
    pub(super) fn negation_introduction(
        &mut self,
        a: Axiom,
        b: Axiom,
    ) -> Result<Application, ErrorKind> {
        let (Some((p, q)), Some((r, s))) = (
            self.expressions.as_implication(a.expression),
            self.expressions.as_implication(b.expression),
        ) else {
            return Ok(Application::Inapplicable);
        };

        if self.expressions.relation(p, r)? != Relation::Equivalent {
            return Ok(Application::Inapplicable);
        }

        if self.expressions.relation(q, s)? != Relation::Negated {
            return Ok(Application::Inapplicable);
        }

        let negated = self.expressions.negate(p);
        Ok(Application::Produced(vec![Deduction::new(
            negated,
            Rule::NegationIntroduction,
            vec![a.id, b.id],
        )]))
    }
}
