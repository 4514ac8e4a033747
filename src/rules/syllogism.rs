use crate::{
    context::Context,
    db::{axiom::Axiom, ExprKey},
    structures::{
        deduction::Deduction,
        equivalence::Relation,
        expression::ConnectiveKind,
    },
    types::err::ErrorKind,
};

use super::{Application, Rule};

impl Context {
    /// A → B, B → C ⊢ A → C
    pub(super) fn hypothetical_syllogism(
        &mut self,
        a: Axiom,
        b: Axiom,
    ) -> Result<Application, ErrorKind> {
        for (first, second) in [(a, b), (b, a)] {
            let (Some((p, q)), Some((r, s))) = (
                self.expressions.as_implication(first.expression),
                self.expressions.as_implication(second.expression),
            ) else {
                return Ok(Application::Inapplicable);
            };

            if self.expressions.relation(q, r)? == Relation::Equivalent {
                let conclusion = self.expressions.implication(p, s);
                return Ok(Application::Produced(vec![Deduction::new(
                    conclusion,
                    Rule::HypotheticalSyllogism,
                    vec![a.id, b.id],
                )]));
            }
        }

        Ok(Application::Inapplicable)
    }

    /// A ∨ B, ¬A ⊢ B
    ///
    /// The disjunct ruled out may be any combination of operands of the disjunction, as found when checking interest.
    /// So, `p ∨ q ∨ r` and `¬(p ∨ r)` give `q`.
    pub(super) fn disjunctive_syllogism(
        &mut self,
        a: Axiom,
        b: Axiom,
    ) -> Result<Application, ErrorKind> {
        for (disjunction, other) in [(a, b), (b, a)] {
            let Some(remaining) = self.remaining_disjuncts(disjunction, other) else {
                continue;
            };

            let conclusion = match remaining.as_slice() {
                [single] => *single,
                _ => self
                    .expressions
                    .connective(ConnectiveKind::Disjunction, remaining),
            };

            return Ok(Application::Produced(vec![Deduction::new(
                conclusion,
                Rule::DisjunctiveSyllogism,
                vec![a.id, b.id],
            )]));
        }

        Ok(Application::Inapplicable)
    }

    /// The operands of `disjunction` not ruled out by `other`, if some (but not all) operands are ruled out.
    fn remaining_disjuncts(&self, disjunction: Axiom, other: Axiom) -> Option<Vec<ExprKey>> {
        let key = self.expressions.actual(disjunction.expression);
        let connective = self.expressions.as_connective(key)?;
        if connective.kind != ConnectiveKind::Disjunction {
            return None;
        }

        let record = self.interest.record_for(key, other.id)?;
        if record.relation != Relation::Negated {
            return None;
        }

        let remaining = connective
            .operands
            .iter()
            .filter(|operand| !record.operands.contains(operand))
            .copied()
            .collect::<Vec<_>>();

        match remaining.is_empty() {
            true => None,
            false => Some(remaining),
        }
    }
}
