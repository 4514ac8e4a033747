/*!
A database of axioms.

An axiom is an expression taken to be true, either a premise or a deduction.

Before an axiom is added to the database the axiom is compared to every axiom already in the database:
- If the candidate is equivalent to some axiom, the candidate is a duplicate and not added.
- If the candidate is equivalent to the negation of some axiom, the axioms are inconsistent, and an error is returned.

Comparison is by [truth table](crate::structures::equivalence), and the truth table of the candidate is built before any comparison.
So, an axiom with too many variables for a truth table is never added.
*/

use crate::{
    db::{expression::ExpressionDB, AxiomId, ExprKey},
    misc::log::targets::{self},
    structures::equivalence::Relation,
    types::err::{self, ErrorKind},
};

/// An axiom, the id of the axiom together with the (ungrouped) expression of the axiom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axiom {
    pub id: AxiomId,
    pub expression: ExprKey,
}

/// The result of an attempt to admit an axiom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The axiom was added.
    Fresh,

    /// The axiom is equivalent to the axiom with the given id, and was not added.
    Duplicate(AxiomId),
}

#[derive(Default)]
pub struct AxiomDB {
    axioms: Vec<Axiom>,
}

impl AxiomDB {
    /// Adds `candidate` to the database, if the candidate is neither a duplicate nor inconsistent with some axiom in the database.
    pub fn admit(
        &mut self,
        candidate: Axiom,
        expressions: &ExpressionDB,
    ) -> Result<Admission, ErrorKind> {
        expressions.equivalence(candidate.expression)?;

        for existing in &self.axioms {
            match expressions.relation(candidate.expression, existing.expression)? {
                Relation::Equivalent => {
                    log::trace!(target: targets::AXIOM_DB, "{} duplicates {}", candidate.id, existing.id);
                    return Ok(Admission::Duplicate(existing.id));
                }

                Relation::Negated => {
                    log::info!(target: targets::AXIOM_DB, "{} negates {}", candidate.id, existing.id);
                    return Err(err::AxiomDBError::Inconsistent {
                        candidate: candidate.id,
                        existing: existing.id,
                    }
                    .into());
                }

                Relation::Unrelated => {}
            }
        }

        log::trace!(target: targets::AXIOM_DB, "Admitted {}", candidate.id);
        self.axioms.push(candidate);
        Ok(Admission::Fresh)
    }

    /// The axiom at `index`, in order of admission.
    pub fn get(&self, index: usize) -> Option<Axiom> {
        self.axioms.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    /// The axioms, in order of admission.
    pub fn as_slice(&self) -> &[Axiom] {
        &self.axioms
    }
}
