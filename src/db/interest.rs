/*!
A database of axioms of interest.

For a conjunction or disjunction, an axiom is *of interest* if some combination of operands of the connective is equivalent to the axiom, or the negation of the axiom.
Likewise, for an implication, an axiom is of interest if the implication itself is equivalent to the axiom, or the negation of the axiom.

Records are found by [check_interest](crate::context::Context::check_interest) and used when [evaluating](crate::procedures::evaluation) expressions, and by [disjunctive syllogism](crate::rules::Rule::DisjunctiveSyllogism).

For connectives, the axioms checked are recorded regardless of whether some record was found, and so each (connective, axiom) pair is examined at most once.
Records of a connective are kept in the order found.
*/

use std::collections::HashSet;

use slotmap::SecondaryMap;

use crate::{
    db::{axiom::Axiom, AxiomId, ExprKey},
    structures::equivalence::Relation,
};

/// A relation between an axiom and (some part of) an expression.
#[derive(Clone, Debug)]
pub struct InterestRecord {
    pub axiom: Axiom,

    /// The operands of a connective which, combined, relate to the axiom.
    /// Empty for implications.
    pub operands: Vec<ExprKey>,

    pub relation: Relation,
}

#[derive(Default)]
struct ConnectiveInterest {
    checked: HashSet<AxiomId>,
    records: Vec<InterestRecord>,
}

#[derive(Default)]
pub struct InterestDB {
    connectives: SecondaryMap<ExprKey, ConnectiveInterest>,
    implications: SecondaryMap<ExprKey, InterestRecord>,
}

impl InterestDB {
    /// Notes `axiom` has been checked against the connective, returning false if the axiom had already been checked.
    pub fn mark_checked(&mut self, connective: ExprKey, axiom: AxiomId) -> bool {
        match self.connectives.entry(connective) {
            Some(entry) => entry.or_default().checked.insert(axiom),
            None => false,
        }
    }

    pub fn add_record(&mut self, connective: ExprKey, record: InterestRecord) {
        if let Some(entry) = self.connectives.entry(connective) {
            entry.or_default().records.push(record);
        }
    }

    /// The records of a connective, in the order found.
    pub fn records(&self, connective: ExprKey) -> &[InterestRecord] {
        match self.connectives.get(connective) {
            Some(interest) => &interest.records,
            None => &[],
        }
    }

    /// The record of a connective for a specific axiom, if any.
    pub fn record_for(&self, connective: ExprKey, axiom: AxiomId) -> Option<&InterestRecord> {
        self.records(connective)
            .iter()
            .find(|record| record.axiom.id == axiom)
    }

    /// The record of an implication, if any.
    ///
    /// An implication has at most one record, the first found.
    pub fn implication_record(&self, implication: ExprKey) -> Option<&InterestRecord> {
        self.implications.get(implication)
    }

    pub fn set_implication_record(&mut self, implication: ExprKey, record: InterestRecord) {
        if !self.implications.contains_key(implication) {
            self.implications.insert(implication, record);
        }
    }
}
