//! Modus ponens and modus tollens.
//!
//! Premises are matched to the antecedent (or consequent) of an implication by truth table, and so `p ∧ q → r` and `q ∧ p` give `r`.

use crate::{
    context::Context,
    db::axiom::Axiom,
    structures::{deduction::Deduction, equivalence::Relation},
    types::err::ErrorKind,
};

use super::{Application, Rule};

impl Context {
    /// A → B, A ⊢ B
    pub(super) fn modus_ponens(&mut self, a: Axiom, b: Axiom) -> Result<Application, ErrorKind> {
        for (implication, premise) in [(a, b), (b, a)] {
            let Some((antecedent, consequent)) = self.expressions.as_implication(implication.expression) else {
                continue;
            };

            if self.expressions.relation(antecedent, premise.expression)? == Relation::Equivalent {
                return Ok(Application::Produced(vec![Deduction::new(
                    consequent,
                    Rule::ModusPonens,
                    vec![a.id, b.id],
                )]));
            }
        }

        Ok(Application::Inapplicable)
    }

    /// A → B, ¬B ⊢ ¬A
    pub(super) fn modus_tollens(&mut self, a: Axiom, b: Axiom) -> Result<Application, ErrorKind> {
        for (implication, premise) in [(a, b), (b, a)] {
            let Some((antecedent, consequent)) = self.expressions.as_implication(implication.expression) else {
                continue;
            };

            if self.expressions.relation(consequent, premise.expression)? == Relation::Negated {
                let negated = self.expressions.negate(antecedent);
                return Ok(Application::Produced(vec![Deduction::new(
                    negated,
                    Rule::ModusTollens,
                    vec![a.id, b.id],
                )]));
            }
        }

        Ok(Application::Inapplicable)
    }
}
