/*!
Truth tables of expressions, and the relation between expressions given by truth tables.

The truth table of a node is built on first request and cached with the node.
See [Equivalence] for the encoding.

As a truth table begins with the variables used, expressions over different variables are unrelated.
This is checked before any table is built, and so relating expressions over different variables never fails.
*/

use crate::{
    db::{expression::ExpressionDB, ExprKey},
    misc::log::targets::{self},
    structures::{
        equivalence::{Equivalence, HelperValuation, Relation},
        expression::{ConnectiveKind, Expression},
        variable_set::VariableSet,
    },
    types::err::ExpressionError,
};

impl ExpressionDB {
    /// The truth of the expression on the valuation of `helper`.
    pub fn truth(&self, key: ExprKey, helper: &HelperValuation) -> bool {
        match self.get(key) {
            Expression::Variable(variable) => helper.value_of(*variable),

            Expression::Negation(inner) => !self.truth(*inner, helper),

            Expression::Connective(connective) => match connective.kind {
                ConnectiveKind::Conjunction => connective
                    .operands
                    .iter()
                    .all(|operand| self.truth(*operand, helper)),

                ConnectiveKind::Disjunction => connective
                    .operands
                    .iter()
                    .any(|operand| self.truth(*operand, helper)),
            },

            Expression::Implication(a, b) => !self.truth(*a, helper) || self.truth(*b, helper),

            Expression::Biconditional(a, b) => self.truth(*a, helper) == self.truth(*b, helper),

            Expression::Group(inner, _) => self.truth(*inner, helper),
        }
    }

    /// The truth table of the expression.
    pub fn equivalence(&self, key: ExprKey) -> Result<&Equivalence, ExpressionError> {
        let key = self.actual(key);
        let node = self.node(key);

        if let Some(table) = node.table().get() {
            return Ok(table);
        }

        let table = Equivalence::build(node.variables(), self.variable_limit, |helper| {
            self.truth(key, helper)
        })?;
        log::trace!(target: targets::EQUIVALENCE, "Table of {}: {:?}", node.id(), table.as_bytes());

        Ok(node.table().get_or_init(|| table))
    }

    /// How `a` relates to `b`.
    pub fn relation(&self, a: ExprKey, b: ExprKey) -> Result<Relation, ExpressionError> {
        if self.variables(a) != self.variables(b) {
            return Ok(Relation::Unrelated);
        }

        let a_table = self.equivalence(a)?;
        let b_table = self.equivalence(b)?;
        Ok(a_table.relation(b_table))
    }

    /// How `key` relates to the function `evaluate` over `variables`.
    ///
    /// Useful to relate an expression to some combination of expressions, without adding the combination to the database.
    pub fn relation_to(
        &self,
        key: ExprKey,
        variables: VariableSet,
        evaluate: impl FnMut(&HelperValuation) -> bool,
    ) -> Result<Relation, ExpressionError> {
        if self.variables(key) != variables {
            return Ok(Relation::Unrelated);
        }

        let table = Equivalence::build(variables, self.variable_limit, evaluate)?;
        Ok(self.equivalence(key)?.relation(&table))
    }

    /// Whether the expression is true on every valuation.
    pub fn is_tautology(&self, key: ExprKey) -> Result<bool, ExpressionError> {
        let table = self.equivalence(key)?;
        Ok((0..table.row_count()).all(|row| table.value_at(row)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, db::variable::VariableDB};

    use super::*;

    #[test]
    fn negation_relates() {
        let mut db = ExpressionDB::new(&Config::default());
        let mut variables = VariableDB::default();
        let p = variables.ensure("p", &mut db).unwrap();
        let q = variables.ensure("q", &mut db).unwrap();

        let p_q = db.implication(p, q);
        let not_p_q = db.negation(p_q);
        let not_not_p_q = db.negation(not_p_q);

        assert_eq!(db.relation(p_q, p_q), Ok(Relation::Equivalent));
        assert_eq!(db.relation(p_q, not_p_q), Ok(Relation::Negated));
        assert_eq!(db.relation(p_q, not_not_p_q), Ok(Relation::Equivalent));
        assert_eq!(db.relation(p, q), Ok(Relation::Unrelated));
    }

    #[test]
    fn tautologies() {
        let mut db = ExpressionDB::new(&Config::default());
        let mut variables = VariableDB::default();
        let p = variables.ensure("p", &mut db).unwrap();
        let q = variables.ensure("q", &mut db).unwrap();

        let p_p = db.implication(p, p);
        let p_q = db.implication(p, q);

        assert_eq!(db.is_tautology(p_p), Ok(true));
        assert_eq!(db.is_tautology(p_q), Ok(false));
    }

    #[test]
    fn limit_is_configurable() {
        let mut config = Config::default();
        config.variable_limit.value = 2;

        let mut db = ExpressionDB::new(&config);
        let mut variables = VariableDB::default();
        let keys = ["a", "b", "c"]
            .iter()
            .map(|name| variables.ensure(name, &mut db).unwrap())
            .collect::<Vec<_>>();

        let ab = db.connective(ConnectiveKind::Conjunction, keys[..2].to_vec());
        let abc = db.connective(ConnectiveKind::Conjunction, keys.clone());

        assert!(db.equivalence(ab).is_ok());
        assert_eq!(
            db.equivalence(abc).map(|table| table.row_count()),
            Err(ExpressionError::TooManyVariables { count: 3, limit: 2 })
        );
    }
}
