//! Writing expressions as text.

use crate::{
    config::Notation,
    db::{variable::VariableDB, ExprKey},
    structures::expression::{symbols, Expression},
};

use super::ExpressionDB;

impl ExpressionDB {
    /// The expression as text, with variables named by `variables`.
    ///
    /// With [Notation::Written] the operands of a connective are written in the order given when the connective was built, and otherwise in canonical order.
    pub fn write(&self, key: ExprKey, variables: &VariableDB, notation: Notation) -> String {
        let mut buffer = String::new();
        self.write_to(&mut buffer, key, variables, notation);
        buffer
    }

    fn write_to(&self, buffer: &mut String, key: ExprKey, variables: &VariableDB, notation: Notation) {
        match self.get(key) {
            Expression::Variable(variable) => buffer.push_str(variables.name_of(*variable)),

            Expression::Negation(inner) => {
                buffer.push_str(symbols::NEGATION);
                self.write_to(buffer, *inner, variables, notation);
            }

            Expression::Connective(connective) => {
                let operands = match notation {
                    Notation::Written => &connective.written,
                    Notation::Canonical => &connective.operands,
                };
                for (index, operand) in operands.iter().enumerate() {
                    if index > 0 {
                        buffer.push_str(connective.kind.symbol());
                    }
                    self.write_to(buffer, *operand, variables, notation);
                }
            }

            Expression::Implication(a, b) => {
                self.write_to(buffer, *a, variables, notation);
                buffer.push_str(symbols::IMPLICATION);
                self.write_to(buffer, *b, variables, notation);
            }

            Expression::Biconditional(a, b) => {
                self.write_to(buffer, *a, variables, notation);
                buffer.push_str(symbols::BICONDITIONAL);
                self.write_to(buffer, *b, variables, notation);
            }

            Expression::Group(inner, bracket) => {
                buffer.push(bracket.opening());
                self.write_to(buffer, *inner, variables, notation);
                buffer.push(bracket.closing());
            }
        }
    }
}
