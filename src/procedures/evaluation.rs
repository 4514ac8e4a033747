/*!
The value of an expression, given the axioms admitted so far.

A value is either known (`Some(true)` or `Some(false)`) or unknown (`None`).

- A variable has the value assigned by some axiom, if any.
- A negation flips the value of the negated expression, and a group has the value of the grouped expression.
- A conjunction is false if some operand is false, and true if every variable of the conjunction is used by some operand known to be true.
  Otherwise, the axioms of interest to the conjunction are examined in the order found.
  An axiom equivalent to the negation of some operands makes the conjunction false, and an axiom equivalent to some operands covers the variables of the axiom.
- A disjunction is dual to a conjunction.
- An implication has its classical value, if the value of the antecedent or consequent is enough to decide the value.
  Otherwise, the implication has the value given by the axiom of interest to the implication, if any.
- A biconditional is true if both sides have the same known value, and false if the values differ.

Every operand of a connective (and both sides of an implication) is evaluated, even if the value of the expression is already decided, so inconsistent values are found as soon as possible.

The first known value of each expression is kept, and an expression found to have some other value is an error.
*/

use crate::{
    context::Context,
    db::{AxiomId, ExprKey},
    structures::{
        equivalence::Relation,
        expression::{ConnectiveKind, Expression},
        variable_set::VariableSet,
    },
    types::err::{self, ErrorKind},
};

impl Context {
    /// The value of the expression, if known.
    pub fn value_of(&self, key: ExprKey) -> Result<Option<bool>, ErrorKind> {
        let value = self.value_internal(key)?;

        if let Some(now) = value {
            let memo = self.expressions.node(key).value();
            match memo.get() {
                None => memo.set(Some(now)),

                Some(was) if was != now => {
                    return Err(err::EvaluationError::InconsistentExpression {
                        expression: self.write(key),
                        was,
                        now,
                        because: None,
                    }
                    .into());
                }

                Some(_) => {}
            }
        }

        Ok(value)
    }

    fn value_internal(&self, key: ExprKey) -> Result<Option<bool>, ErrorKind> {
        match self.expressions.get(key) {
            Expression::Variable(variable) => Ok(self.variables.value_of(*variable)),

            Expression::Negation(inner) => Ok(self.value_of(*inner)?.map(|value| !value)),

            Expression::Group(inner, _) => self.value_of(*inner),

            Expression::Connective(connective) => {
                let absorbing = absorbing_value(connective.kind);
                let mut uncovered = self.expressions.variables(key);
                let mut absorbed = false;

                for operand in &connective.operands {
                    let Some(value) = self.value_of(*operand)? else {
                        continue;
                    };
                    uncovered.difference_with(&self.expressions.variables(*operand));
                    if value == absorbing {
                        absorbed = true;
                    }
                }

                if absorbed {
                    return Ok(Some(absorbing));
                }
                if uncovered.is_empty() {
                    return Ok(Some(!absorbing));
                }

                for record in self.interest.records(key) {
                    uncovered.difference_with(&self.expressions.variables(record.axiom.expression));

                    if record.relation == absorbing_relation(connective.kind) {
                        return Ok(Some(absorbing));
                    }

                    if uncovered.is_empty() {
                        return Ok(Some(!absorbing));
                    }
                }

                Ok(None)
            }

            Expression::Implication(antecedent, consequent) => {
                let a = self.value_of(*antecedent)?;
                let b = self.value_of(*consequent)?;

                let classical = match (a, b) {
                    (Some(false), _) | (_, Some(true)) => Some(true),
                    (Some(true), Some(false)) => Some(false),
                    _ => None,
                };

                let record = self.interest.implication_record(key);
                let recorded = record.map(|record| record.relation == Relation::Equivalent);

                match (classical, record) {
                    (Some(now), Some(record)) if Some(now) != recorded => {
                        Err(err::EvaluationError::InconsistentExpression {
                            expression: self.write(key),
                            was: !now,
                            now,
                            because: Some(record.axiom.id),
                        }
                        .into())
                    }

                    (Some(now), _) => Ok(Some(now)),

                    (None, _) => Ok(recorded),
                }
            }

            Expression::Biconditional(a, b) => {
                let a = self.value_of(*a)?;
                let b = self.value_of(*b)?;
                Ok(a.zip(b).map(|(a, b)| a == b))
            }
        }
    }

    /// The axioms which justify the value of the expression.
    ///
    /// Empty if the value of the expression is unknown, or no specific axioms are responsible.
    pub fn causes_of(&self, key: ExprKey) -> Result<Vec<AxiomId>, ErrorKind> {
        let mut causes = Vec::default();

        match self.expressions.get(key) {
            Expression::Variable(variable) => {
                if let Some(assignment) = self.variables.assignment_of(*variable) {
                    causes.push(assignment.axiom);
                }
            }

            Expression::Negation(inner) | Expression::Group(inner, _) => {
                return self.causes_of(*inner);
            }

            Expression::Connective(connective) => {
                let absorbing = absorbing_value(connective.kind);
                let mut uncovered: VariableSet = self.expressions.variables(key);
                let mut absorbed = false;

                for operand in &connective.operands {
                    let Some(value) = self.value_of(*operand)? else {
                        continue;
                    };
                    uncovered.difference_with(&self.expressions.variables(*operand));

                    let operand_causes = self.causes_of(*operand)?;
                    if value == absorbing {
                        absorbed = true;
                        if !operand_causes.is_empty() {
                            return Ok(operand_causes);
                        }
                    }
                    extend_distinct(&mut causes, operand_causes);
                }

                if (absorbed || uncovered.is_empty()) && !causes.is_empty() {
                    return Ok(causes);
                }

                for record in self.interest.records(key) {
                    uncovered.difference_with(&self.expressions.variables(record.axiom.expression));

                    if record.relation == absorbing_relation(connective.kind) {
                        return Ok(vec![record.axiom.id]);
                    }

                    extend_distinct(&mut causes, vec![record.axiom.id]);
                    if uncovered.is_empty() {
                        break;
                    }
                }
            }

            Expression::Implication(a, b) => match self.interest.implication_record(key) {
                Some(record) => causes.push(record.axiom.id),
                None => {
                    extend_distinct(&mut causes, self.causes_of(*a)?);
                    extend_distinct(&mut causes, self.causes_of(*b)?);
                }
            },

            Expression::Biconditional(a, b) => {
                extend_distinct(&mut causes, self.causes_of(*a)?);
                extend_distinct(&mut causes, self.causes_of(*b)?);
            }
        }

        Ok(causes)
    }
}

/// The value of a single operand which decides the value of a connective.
fn absorbing_value(kind: ConnectiveKind) -> bool {
    match kind {
        ConnectiveKind::Conjunction => false,
        ConnectiveKind::Disjunction => true,
    }
}

/// The relation of an axiom of interest which decides the value of a connective.
fn absorbing_relation(kind: ConnectiveKind) -> Relation {
    match kind {
        ConnectiveKind::Conjunction => Relation::Negated,
        ConnectiveKind::Disjunction => Relation::Equivalent,
    }
}

fn extend_distinct(causes: &mut Vec<AxiomId>, more: Vec<AxiomId>) {
    for cause in more {
        if !causes.contains(&cause) {
            causes.push(cause);
        }
    }
}
