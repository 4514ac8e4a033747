//! Deductions, proposed by a rule and waiting to be admitted as axioms.

use crate::{
    db::{AxiomId, ExprKey},
    rules::Rule,
};

/// A proposed expression, with the rule which proposed the expression and the axioms cited by the rule.
#[derive(Clone, Debug)]
pub struct Deduction {
    pub expression: ExprKey,

    pub rule: Rule,

    /// The explanation shown alongside the expression, e.g. `Modus Ponens: 1, 2`.
    pub explanation: String,

    /// The axioms the deduction rests on, in the order cited.
    pub cites: Vec<AxiomId>,
}

impl Deduction {
    /// A deduction with the standard explanation of `rule`, citing `cites`.
    pub fn new(expression: ExprKey, rule: Rule, cites: Vec<AxiomId>) -> Self {
        let explanation = explain(rule.name(), &cites);
        Deduction {
            expression,
            rule,
            explanation,
            cites,
        }
    }

    /// A deduction with a bespoke name in the explanation.
    pub fn named(expression: ExprKey, rule: Rule, name: &str, cites: Vec<AxiomId>) -> Self {
        let explanation = explain(name, &cites);
        Deduction {
            expression,
            rule,
            explanation,
            cites,
        }
    }
}

/// `<name>: <id>, <id>, …`
pub fn explain(name: &str, cites: &[AxiomId]) -> String {
    let ids = cites.iter().map(|id| id.to_string()).collect::<Vec<_>>();
    format!("{name}: {}", ids.join(", "))
}
