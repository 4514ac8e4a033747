/*!
The search for [axioms of interest](crate::db::interest).

Checking interest is always bidirectional: when two axioms are checked, each part of each axiom is checked against the other axiom.
Parts of an axiom are examined from the top down, though operands of a connective are checked before the connective itself.

- A variable equivalent to an axiom is assigned true, and a variable equivalent to the negation of an axiom is assigned false.
- An implication related to an axiom records the axiom, if no other axiom has been recorded.
- A conjunction or disjunction records the first combination of operands which relates to an axiom, searching combinations by increasing size.

# Combinations

For a connective and an axiom, the search for a combination of operands is skipped unless the connective uses every variable of the axiom.
Single operands are checked first.
After, only operands which share some variable with the axiom are considered, and only combinations which together use exactly the variables of the axiom are related to the axiom.

Combinations are related to the axiom by building a truth table directly from the operands, without adding the combination to the expression database.
*/

use crate::{
    context::Context,
    db::{axiom::Axiom, interest::InterestRecord, ExprKey},
    generic::combinations::Combinations,
    misc::log::targets::{self},
    structures::{
        equivalence::Relation,
        expression::{ConnectiveKind, Expression},
        variable_set::VariableSet,
    },
    types::err::ErrorKind,
};

impl Context {
    /// Checks each part of `a` against `b`, and each part of `b` against `a`.
    pub fn check_interest(&mut self, a: Axiom, b: Axiom) -> Result<(), ErrorKind> {
        self.check_node_interest(a.expression, b)?;
        self.check_node_interest(b.expression, a)
    }

    fn check_node_interest(&mut self, key: ExprKey, axiom: Axiom) -> Result<(), ErrorKind> {
        match self.expressions.get(key).clone() {
            Expression::Variable(variable) => {
                match self.expressions.relation(axiom.expression, key)? {
                    Relation::Equivalent => self.variables.assign(variable, true, axiom.id)?,
                    Relation::Negated => self.variables.assign(variable, false, axiom.id)?,
                    Relation::Unrelated => {}
                }
                Ok(())
            }

            Expression::Negation(inner) | Expression::Group(inner, _) => {
                self.check_node_interest(inner, axiom)
            }

            Expression::Implication(antecedent, consequent) => {
                if self.interest.implication_record(key).is_none() {
                    let relation = self.expressions.relation(axiom.expression, key)?;
                    if relation.is_related() {
                        log::trace!(target: targets::INTEREST, "{} is of interest to implication {}", axiom.id, self.expressions.node(key).id());
                        self.interest.set_implication_record(
                            key,
                            InterestRecord {
                                axiom,
                                operands: Vec::default(),
                                relation,
                            },
                        );
                    }
                }

                self.check_node_interest(antecedent, axiom)?;
                self.check_node_interest(consequent, axiom)
            }

            Expression::Biconditional(a, b) => {
                self.check_node_interest(a, axiom)?;
                self.check_node_interest(b, axiom)
            }

            Expression::Connective(connective) => {
                if !self.interest.mark_checked(key, axiom.id) {
                    return Ok(());
                }

                for operand in &connective.operands {
                    self.check_node_interest(*operand, axiom)?;
                }

                if let Some((operands, relation)) =
                    self.relate_operands(key, connective.kind, &connective.operands, axiom)?
                {
                    log::trace!(target: targets::INTEREST, "{} is of interest to connective {} ({} operands)", axiom.id, self.expressions.node(key).id(), operands.len());
                    self.interest.add_record(
                        key,
                        InterestRecord {
                            axiom,
                            operands,
                            relation,
                        },
                    );
                }

                Ok(())
            }
        }
    }

    /// The first combination of `operands` related to `axiom`, with the relation.
    fn relate_operands(
        &self,
        key: ExprKey,
        kind: ConnectiveKind,
        operands: &[ExprKey],
        axiom: Axiom,
    ) -> Result<Option<(Vec<ExprKey>, Relation)>, ErrorKind> {
        let target = self.expressions.variables(axiom.expression);

        if !self.expressions.variables(key).is_superset(&target) {
            return Ok(None);
        }

        for operand in operands {
            let relation = self.expressions.relation(*operand, axiom.expression)?;
            if relation.is_related() {
                return Ok(Some((vec![*operand], relation)));
            }
        }

        let sharing = operands
            .iter()
            .filter(|operand| self.expressions.variables(**operand).intersects(&target))
            .copied()
            .collect::<Vec<_>>();

        if sharing.len() < 2 {
            return Ok(None);
        }

        let db = &self.expressions;
        let mut combinations = Combinations::new(sharing.len(), 2);

        for size in 2..=sharing.len() {
            combinations.restart(size);

            while let Some(indices) = combinations.advance() {
                let mut used = VariableSet::default();
                for index in indices {
                    used.union_with(&db.variables(sharing[*index]));
                }
                if used != target {
                    continue;
                }

                let relation = db.relation_to(axiom.expression, target, |helper| match kind {
                    ConnectiveKind::Conjunction => {
                        indices.iter().all(|index| db.truth(sharing[*index], helper))
                    }
                    ConnectiveKind::Disjunction => {
                        indices.iter().any(|index| db.truth(sharing[*index], helper))
                    }
                })?;

                if relation.is_related() {
                    let chosen = indices.iter().map(|index| sharing[*index]).collect();
                    return Ok(Some((chosen, relation)));
                }
            }
        }

        Ok(None)
    }
}
