/*!
A database of variable related things.

Variables are identified by a name when reading, and are otherwise a [Variable], an index into the fields of the database.

For each variable the database records:
- The name of the variable.
- The (unique) node of the variable in the [expression database](crate::db::expression).
- The value of the variable, if some axiom is equivalent to the variable or the negation of the variable, together with that axiom.
*/

use std::collections::HashMap;

use crate::{
    db::{expression::ExpressionDB, AxiomId, ExprKey},
    misc::log::targets::{self},
    structures::variable::{Variable, VARIABLE_LIMIT},
    types::err::{self},
};

/// A value, and the axiom responsible for the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub value: bool,
    pub axiom: AxiomId,
}

#[derive(Default)]
pub struct VariableDB {
    names: Vec<String>,
    nodes: Vec<ExprKey>,
    assignments: Vec<Option<Assignment>>,
    index: HashMap<String, Variable>,
}

impl VariableDB {
    /// The node of the variable with the given name, if the variable has been seen.
    pub fn node_of(&self, name: &str) -> Option<ExprKey> {
        self.index.get(name).map(|v| self.nodes[*v as usize])
    }

    /// The node of the variable with the given name, added to the database if not already present.
    pub fn ensure(
        &mut self,
        name: &str,
        expressions: &mut ExpressionDB,
    ) -> Result<ExprKey, err::VariableDBError> {
        if let Some(node) = self.node_of(name) {
            return Ok(node);
        }

        if self.names.len() >= VARIABLE_LIMIT {
            log::error!(target: targets::PARSER, "Variables exhausted at {name}");
            return Err(err::VariableDBError::VariablesExhausted);
        }

        let variable = self.names.len() as Variable;
        let node = expressions.variable(variable);

        self.names.push(name.to_owned());
        self.nodes.push(node);
        self.assignments.push(None);
        self.index.insert(name.to_owned(), variable);

        log::trace!(target: targets::PARSER, "Variable {variable}: {name}");
        Ok(node)
    }

    pub fn variable_of(&self, name: &str) -> Option<Variable> {
        self.index.get(name).copied()
    }

    pub fn name_of(&self, variable: Variable) -> &str {
        &self.names[variable as usize]
    }

    /// A count of variables in the database.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn value_of(&self, variable: Variable) -> Option<bool> {
        self.assignments[variable as usize].map(|assignment| assignment.value)
    }

    pub fn assignment_of(&self, variable: Variable) -> Option<Assignment> {
        self.assignments[variable as usize]
    }

    /// Assigns `value` to `variable`, due to `axiom`.
    ///
    /// A variable keeps the first axiom which assigned it a value, and assigning the same value again has no effect.
    /// Assigning the other value is an error.
    pub fn assign(
        &mut self,
        variable: Variable,
        value: bool,
        axiom: AxiomId,
    ) -> Result<(), err::VariableDBError> {
        match self.assignments[variable as usize] {
            None => {
                log::trace!(target: targets::INTEREST, "{} = {value} by {axiom}", self.name_of(variable));
                self.assignments[variable as usize] = Some(Assignment { value, axiom });
                Ok(())
            }

            Some(assignment) if assignment.value == value => Ok(()),

            Some(assignment) => Err(err::VariableDBError::AlreadyAssigned {
                name: self.name_of(variable).to_owned(),
                value: assignment.value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn ensure_is_idempotent() {
        let mut expressions = ExpressionDB::new(&Config::default());
        let mut variables = VariableDB::default();

        let p = variables.ensure("p", &mut expressions).unwrap();
        let q = variables.ensure("q", &mut expressions).unwrap();

        assert_ne!(p, q);
        assert_eq!(variables.ensure("p", &mut expressions), Ok(p));
        assert_eq!(variables.count(), 2);
        assert_eq!(variables.variable_of("q"), Some(1));
    }

    #[test]
    fn exhaustion() {
        let mut expressions = ExpressionDB::new(&Config::default());
        let mut variables = VariableDB::default();

        for index in 0..VARIABLE_LIMIT {
            assert!(variables.ensure(&format!("v{index}"), &mut expressions).is_ok());
        }
        assert!(variables.ensure("v0", &mut expressions).is_ok());
        assert_eq!(
            variables.ensure("fresh", &mut expressions),
            Err(err::VariableDBError::VariablesExhausted)
        );
    }

    #[test]
    fn reassignment() {
        let mut expressions = ExpressionDB::new(&Config::default());
        let mut variables = VariableDB::default();
        variables.ensure("p", &mut expressions).unwrap();

        assert!(variables.assign(0, true, 1).is_ok());
        assert!(variables.assign(0, true, 3).is_ok());
        assert_eq!(variables.assignment_of(0).map(|a| a.axiom), Some(1));
        assert_eq!(
            variables.assign(0, false, 5),
            Err(err::VariableDBError::AlreadyAssigned {
                name: "p".to_owned(),
                value: true
            })
        );
    }
}
