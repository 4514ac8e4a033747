/*!
Rules of inference, and their application to axioms.

Each [Rule] takes one, two, or three axioms, and the [application](Application) of a rule to some axioms either:
- Produces some (possibly empty) collection of [deductions](Deduction).
- Is inapplicable, and will remain so regardless of what is deduced later.
- Is deferred, as whether the rule applies depends on the value of some expression which is not (yet) known.

# Scheduling

Whenever an axiom is admitted, rules are applied to tuples of axioms which end with the admitted axiom:
- Each unary rule to the axiom.
- Each binary rule to each earlier axiom and the axiom.
- Each ternary rule to each pair of earlier axioms and the axiom.

Deductions are placed at the back of the deduction queue of the context.
Deferred applications are kept as [Pending] applications, and each pending application is retried (in the order deferred) after each admission, before rules are applied to the admitted axiom.
A pending application is forgotten once it produces deductions or becomes inapplicable.

[Biconditional elimination](Rule::BiconditionalElimination) is an exception, and is applied to each premise only, before any other rule.
*/

mod biconditional;
mod dilemma;
mod evaluation;
mod implication;
mod negation;
mod simplification;
mod syllogism;

use crate::{
    context::{Context, Queued},
    db::axiom::Axiom,
    misc::log::targets::{self},
    structures::deduction::Deduction,
    types::err::ErrorKind,
};

/// The rules of inference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A ↔ B ⊢ A → B, B → A
    BiconditionalElimination,

    /// A ∧ B ⊢ A, B
    Simplification,

    /// A → B, where A is true ⊢ B
    AntecedentEvaluation,

    /// A → B, where B is false ⊢ ¬A
    ConsequentEvaluation,

    /// A → B, A ⊢ B
    ModusPonens,

    /// A → B, ¬B ⊢ ¬A
    ModusTollens,

    /// A → B, B → C ⊢ A → C
    HypotheticalSyllogism,

    /// A ∨ B, ¬A ⊢ B
    DisjunctiveSyllogism,

    /// A → B, A → ¬B ⊢ ¬A
    NegationIntroduction,

    /// A → C, B → D, A ∨ B ⊢ C ∨ D
    ConstructiveDilemma,

    /// A → C, B → D, ¬C ∨ ¬D ⊢ ¬A ∨ ¬B
    DestructiveDilemma,
}

impl Rule {
    /// Rules applied to the most recent axiom, in order of application.
    pub const UNARY: [Rule; 3] = [
        Rule::ConsequentEvaluation,
        Rule::AntecedentEvaluation,
        Rule::Simplification,
    ];

    /// Rules applied to some axiom and the most recent axiom, in order of application.
    pub const BINARY: [Rule; 5] = [
        Rule::NegationIntroduction,
        Rule::ModusTollens,
        Rule::ModusPonens,
        Rule::HypotheticalSyllogism,
        Rule::DisjunctiveSyllogism,
    ];

    /// Rules applied to two axioms and the most recent axiom, in order of application.
    pub const TERNARY: [Rule; 2] = [Rule::DestructiveDilemma, Rule::ConstructiveDilemma];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BiconditionalElimination => "Biconditional Elimination",
            Self::Simplification => "Simplification",
            Self::AntecedentEvaluation => "Antecedent evaluates as True",
            Self::ConsequentEvaluation => "Consequent evaluates as False",
            Self::ModusPonens => "Modus Ponens",
            Self::ModusTollens => "Modus Tollens",
            Self::HypotheticalSyllogism => "Hypothetical Syllogism",
            Self::DisjunctiveSyllogism => "Disjunctive Syllogism",
            Self::NegationIntroduction => "Negation Introduction",
            Self::ConstructiveDilemma => "Constructive Dilemma",
            Self::DestructiveDilemma => "Destructive Dilemma",
        }
    }

    /// The count of axioms the rule takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::BiconditionalElimination
            | Self::Simplification
            | Self::AntecedentEvaluation
            | Self::ConsequentEvaluation => 1,

            Self::ModusPonens
            | Self::ModusTollens
            | Self::HypotheticalSyllogism
            | Self::DisjunctiveSyllogism
            | Self::NegationIntroduction => 2,

            Self::ConstructiveDilemma | Self::DestructiveDilemma => 3,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The result of applying a rule to some axioms.
#[derive(Debug)]
pub enum Application {
    Produced(Vec<Deduction>),

    /// The rule does not apply, and never will.
    Inapplicable,

    /// Whether the rule applies is not yet known.
    Deferred,
}

/// An application of a rule which was deferred.
#[derive(Clone, Debug)]
pub struct Pending {
    pub rule: Rule,
    pub axioms: Vec<Axiom>,
}

impl Context {
    /// Applies `rule` to `axioms`.
    ///
    /// If the count of axioms differs from the arity of the rule, the rule is inapplicable.
    pub fn apply_rule(&mut self, rule: Rule, axioms: &[Axiom]) -> Result<Application, ErrorKind> {
        match (rule, axioms) {
            (Rule::BiconditionalElimination, [a]) => self.biconditional_elimination(*a),
            (Rule::Simplification, [a]) => self.simplification(*a),
            (Rule::AntecedentEvaluation, [a]) => self.antecedent_evaluation(*a),
            (Rule::ConsequentEvaluation, [a]) => self.consequent_evaluation(*a),

            (Rule::ModusPonens, [a, b]) => self.modus_ponens(*a, *b),
            (Rule::ModusTollens, [a, b]) => self.modus_tollens(*a, *b),
            (Rule::HypotheticalSyllogism, [a, b]) => self.hypothetical_syllogism(*a, *b),
            (Rule::DisjunctiveSyllogism, [a, b]) => self.disjunctive_syllogism(*a, *b),
            (Rule::NegationIntroduction, [a, b]) => self.negation_introduction(*a, *b),

            (Rule::ConstructiveDilemma, [a, b, c]) => self.constructive_dilemma(*a, *b, *c),
            (Rule::DestructiveDilemma, [a, b, c]) => self.destructive_dilemma(*a, *b, *c),

            _ => Ok(Application::Inapplicable),
        }
    }

    /// Applies every rule to each tuple of axioms which ends with the axiom at `index`.
    pub(crate) fn apply_rules(&mut self, index: usize) -> Result<(), ErrorKind> {
        let Some(last) = self.axioms.get(index) else {
            return Ok(());
        };

        for rule in Rule::UNARY {
            self.schedule(rule, vec![last])?;
        }

        for i in 0..index {
            let Some(a) = self.axioms.get(i) else { break };
            for rule in Rule::BINARY {
                self.schedule(rule, vec![a, last])?;
            }
        }

        for i in 0..index {
            for j in i + 1..index {
                let (Some(a), Some(b)) = (self.axioms.get(i), self.axioms.get(j)) else {
                    break;
                };
                for rule in Rule::TERNARY {
                    self.schedule(rule, vec![a, b, last])?;
                }
            }
        }

        Ok(())
    }

    fn schedule(&mut self, rule: Rule, axioms: Vec<Axiom>) -> Result<(), ErrorKind> {
        match self.apply_rule(rule, &axioms)? {
            Application::Produced(deductions) => self.queue_deductions(deductions),

            Application::Deferred => {
                log::trace!(target: targets::QUEUE, "Deferred {rule} on {:?}", ids(&axioms));
                self.pending.push(Pending { rule, axioms });
            }

            Application::Inapplicable => {}
        }
        Ok(())
    }

    /// Retries each pending application, in the order deferred.
    pub(crate) fn retry_pending(&mut self) -> Result<(), ErrorKind> {
        let mut index = 0;
        while index < self.pending.len() {
            let Pending { rule, axioms } = self.pending[index].clone();
            self.counters.retries += 1;

            match self.apply_rule(rule, &axioms)? {
                Application::Deferred => index += 1,

                Application::Inapplicable => {
                    self.pending.remove(index);
                }

                Application::Produced(deductions) => {
                    log::trace!(target: targets::QUEUE, "Resolved {rule} on {:?}", ids(&axioms));
                    self.pending.remove(index);
                    self.queue_deductions(deductions);
                }
            }
        }
        Ok(())
    }

    pub(crate) fn queue_deductions(&mut self, deductions: Vec<Deduction>) {
        for deduction in deductions {
            log::trace!(target: targets::RULES, "Proposed: {}", deduction.explanation);
            self.counters.proposals += 1;
            self.deductions.push_back(Queued::Deduction(deduction));
        }
    }
}

fn ids(axioms: &[Axiom]) -> Vec<usize> {
    axioms.iter().map(|axiom| axiom.id).collect()
}
