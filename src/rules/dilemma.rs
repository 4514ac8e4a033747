//! Constructive and destructive dilemmas.
//!
//! Each dilemma takes two implications and a disjunction, in any order.
//! As the order of the implications does not matter, three orders of the axioms are checked, each with a different axiom as the disjunction.
//!
//! The disjunction is matched by truth table against the disjunction of the antecedents (or negated consequents), without adding that disjunction to the expression database.

use crate::{
    context::Context,
    db::axiom::Axiom,
    structures::{
        deduction::Deduction,
        equivalence::Relation,
        expression::ConnectiveKind,
    },
    types::err::ErrorKind,
};

use super::{Application, Rule};

/// The name used when a constructive dilemma gives a single expression, e.g. from `p → r`, `q → r`, and `p ∨ q`.
const DISJUNCTION_ELIMINATION: &str = "Disjunction Elimination";

impl Context {
    /// A → C, B → D, A ∨ B ⊢ C ∨ D
    pub(super) fn constructive_dilemma(
        &mut self,
        a: Axiom,
        b: Axiom,
        c: Axiom,
    ) -> Result<Application, ErrorKind> {
        for (x, y, z) in [(a, b, c), (a, c, b), (b, c, a)] {
            if let Some(deduction) = self.constructive_dilemma_ordered(x, y, z)? {
                return Ok(Application::Produced(vec![deduction]));
            }
        }
        Ok(Application::Inapplicable)
    }

    fn constructive_dilemma_ordered(
        &mut self,
        x: Axiom,
        y: Axiom,
        z: Axiom,
    ) -> Result<Option<Deduction>, ErrorKind> {
        let (Some((xa, xb)), Some((ya, yb))) = (
            self.expressions.as_implication(x.expression),
            self.expressions.as_implication(y.expression),
        ) else {
            return Ok(None);
        };

        let variables = self.expressions.variables(xa).union(&self.expressions.variables(ya));
        let db = &self.expressions;
        let relation = db.relation_to(z.expression, variables, |helper| {
            db.truth(xa, helper) || db.truth(ya, helper)
        })?;
        if relation != Relation::Equivalent {
            return Ok(None);
        }

        let conclusion = self
            .expressions
            .connective(ConnectiveKind::Disjunction, vec![xb, yb]);

        let name = match self.expressions.as_connective(conclusion) {
            Some(connective) if connective.kind == ConnectiveKind::Disjunction => {
                Rule::ConstructiveDilemma.name()
            }
            _ => DISJUNCTION_ELIMINATION,
        };

        Ok(Some(Deduction::named(
            conclusion,
            Rule::ConstructiveDilemma,
            name,
            vec![x.id, y.id, z.id],
        )))
    }

    /// A → C, B → D, ¬C ∨ ¬D ⊢ ¬A ∨ ¬B
    ///
    /// Not applied when C and D are equivalent, as then ¬C ∨ ¬D is ¬C and modus tollens applies instead.
    pub(super) fn destructive_dilemma(
        &mut self,
        a: Axiom,
        b: Axiom,
        c: Axiom,
    ) -> Result<Application, ErrorKind> {
        for (x, y, z) in [(a, b, c), (a, c, b), (b, c, a)] {
            if let Some(deduction) = self.destructive_dilemma_ordered(x, y, z)? {
                return Ok(Application::Produced(vec![deduction]));
            }
        }
        Ok(Application::Inapplicable)
    }

    fn destructive_dilemma_ordered(
        &mut self,
        x: Axiom,
        y: Axiom,
        z: Axiom,
    ) -> Result<Option<Deduction>, ErrorKind> {
        let (Some((xa, xb)), Some((ya, yb))) = (
            self.expressions.as_implication(x.expression),
            self.expressions.as_implication(y.expression),
        ) else {
            return Ok(None);
        };

        if self.expressions.relation(xb, yb)? == Relation::Equivalent {
            return Ok(None);
        }

        let variables = self.expressions.variables(xb).union(&self.expressions.variables(yb));
        let db = &self.expressions;
        let relation = db.relation_to(z.expression, variables, |helper| {
            !db.truth(xb, helper) || !db.truth(yb, helper)
        })?;
        if relation != Relation::Equivalent {
            return Ok(None);
        }

        let not_xa = self.expressions.negate(xa);
        let not_ya = self.expressions.negate(ya);
        let conclusion = self
            .expressions
            .connective(ConnectiveKind::Disjunction, vec![not_xa, not_ya]);

        Ok(Some(Deduction::new(
            conclusion,
            Rule::DestructiveDilemma,
            vec![x.id, y.id, z.id],
        )))
    }
}
