//! Rules which use the value of part of an implication.
//!
//! Both rules cite the axioms which give the part its value, rather than the implication itself.
//! If no such axioms are known, the implication is cited.

use crate::{
    context::Context,
    db::{axiom::Axiom, AxiomId, ExprKey},
    structures::deduction::{explain, Deduction},
    types::err::ErrorKind,
};

use super::{Application, Rule};

impl Context {
    /// A → B, where A is true ⊢ B
    pub(super) fn antecedent_evaluation(&mut self, a: Axiom) -> Result<Application, ErrorKind> {
        let Some((antecedent, consequent)) = self.expressions.as_implication(a.expression) else {
            return Ok(Application::Inapplicable);
        };

        match self.value_of(antecedent)? {
            None => Ok(Application::Deferred),

            Some(false) => Ok(Application::Inapplicable),

            Some(true) => {
                let causes = self.causes_or(antecedent, a.id)?;
                let name = format!("Antecedent of {} evaluates as True", a.id);
                Ok(Application::Produced(vec![evaluation_deduction(
                    consequent,
                    Rule::AntecedentEvaluation,
                    &name,
                    a.id,
                    causes,
                )]))
            }
        }
    }

    /// A → B, where B is false ⊢ ¬A
    pub(super) fn consequent_evaluation(&mut self, a: Axiom) -> Result<Application, ErrorKind> {
        let Some((antecedent, consequent)) = self.expressions.as_implication(a.expression) else {
            return Ok(Application::Inapplicable);
        };

        match self.value_of(consequent)? {
            None => Ok(Application::Deferred),

            Some(true) => Ok(Application::Inapplicable),

            Some(false) => {
                let causes = self.causes_or(consequent, a.id)?;
                let negated = self.expressions.negate(antecedent);
                let name = format!("Consequent of {} evaluates as False", a.id);
                Ok(Application::Produced(vec![evaluation_deduction(
                    negated,
                    Rule::ConsequentEvaluation,
                    &name,
                    a.id,
                    causes,
                )]))
            }
        }
    }

    fn causes_or(&self, key: ExprKey, fallback: AxiomId) -> Result<Vec<AxiomId>, ErrorKind> {
        let causes = self.causes_of(key)?;
        match causes.is_empty() {
            true => Ok(vec![fallback]),
            false => Ok(causes),
        }
    }
}

/// A deduction which explains with `causes` and cites both the implication and the causes.
fn evaluation_deduction(
    expression: ExprKey,
    rule: Rule,
    name: &str,
    implication: AxiomId,
    causes: Vec<AxiomId>,
) -> Deduction {
    let explanation = explain(name, &causes);

    let mut cites = causes;
    if !cites.contains(&implication) {
        cites.insert(0, implication);
    }

    Deduction {
        expression,
        rule,
        explanation,
        cites,
    }
}
