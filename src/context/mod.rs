/*!
The context, from which deductions are drawn one step at a time.

A context is built from [text](Context::from_text), with one premise on each line.
Each call to [step](Context::step) returns the next line of the proof, until nothing else can be deduced.

# Example
```rust
# use deducer::context::Context;
# use deducer::config::Config;
# use deducer::reports::Report;
# use deducer::structures::step::Step;
let mut the_context = Context::from_text("p\np → q", Config::default()).unwrap();

match the_context.step() {
    Some(Step::Deduced { id, text, explanation }) => {
        assert_eq!(id, 5);
        assert_eq!(text, "q");
        assert_eq!(explanation, "Antecedent of 2 evaluates as True: 1");
    }
    _ => panic!("q expected"),
}

assert!(the_context.step().is_none());
assert_eq!(the_context.report(), Report::FixedPoint);
```

# Numbering

Each axiom has an id, which is also the line of the axiom in the written proof.
A premise has the id of the line it was written on.
The proof continues two lines after the last premise (leaving a line for a separator) and each deduction is followed by an empty line.
So, deduced axioms have ids which increase by two.
*/

mod counters;
pub use counters::Counters;

use std::collections::VecDeque;

use crate::{
    config::Config,
    db::{
        axiom::{Axiom, AxiomDB},
        expression::ExpressionDB,
        interest::InterestDB,
        proof::ProofGraph,
        variable::VariableDB,
        AxiomId, ExprKey,
    },
    reports::Report,
    rules::Pending,
    structures::{deduction::Deduction, step::Step},
    types::err::ErrorKind,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context holds premises, and deduction has not started.
    Input,

    /// Some deductions have been made, and there may be more.
    Deducing,

    /// Nothing else can be deduced.
    Exhausted,

    /// Some error was found, and nothing else will be deduced.
    Inconsistent,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Deducing => write!(f, "Deducing"),
            Self::Exhausted => write!(f, "Exhausted"),
            Self::Inconsistent => write!(f, "Inconsistent"),
        }
    }
}

/// An entry of the deduction queue.
#[derive(Debug)]
pub(crate) enum Queued {
    Deduction(Deduction),

    /// An error found after some axiom was admitted, to be returned once the axiom has been stepped past.
    Error(ErrorKind),
}

pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context.
    pub counters: Counters,

    /// The expression database.
    /// See [db::expression](crate::db::expression) for details.
    pub expressions: ExpressionDB,

    /// The variable database.
    /// See [db::variable](crate::db::variable) for details.
    pub variables: VariableDB,

    /// The axiom database.
    /// See [db::axiom](crate::db::axiom) for details.
    pub axioms: AxiomDB,

    /// The axiom-of-interest database.
    /// See [db::interest](crate::db::interest) for details.
    pub interest: InterestDB,

    /// The proof graph.
    /// See [db::proof](crate::db::proof) for details.
    pub proof: ProofGraph,

    /// The state of the context.
    pub state: ContextState,

    /// Premises, as read.
    pub(crate) premises: Vec<Axiom>,

    /// Deductions waiting to be admitted, in the order proposed.
    pub(crate) deductions: VecDeque<Queued>,

    /// Deferred rule applications, in the order deferred.
    pub(crate) pending: Vec<Pending>,

    /// Steps waiting to be returned.
    pub(crate) steps: VecDeque<Step>,

    /// The id of the next deduced axiom.
    pub(crate) next_axiom_id: AxiomId,
}

impl Context {
    /// A context with no premises.
    pub fn from_config(config: Config) -> Self {
        Context {
            counters: Counters::default(),
            expressions: ExpressionDB::new(&config),
            variables: VariableDB::default(),
            axioms: AxiomDB::default(),
            interest: InterestDB::default(),
            proof: ProofGraph::default(),
            state: ContextState::Input,
            premises: Vec::default(),
            deductions: VecDeque::default(),
            pending: Vec::default(),
            steps: VecDeque::default(),
            next_axiom_id: 1,
            config,
        }
    }

    /// A high-level report on the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The premises of the context, in the order written.
    pub fn premises(&self) -> &[Axiom] {
        &self.premises
    }

    /// The expression, written with the configured notation.
    pub fn write(&self, key: ExprKey) -> String {
        self.expressions
            .write(key, &self.variables, self.config.notation.value)
    }

    /// The premises the axiom with the given id rests on, in ascending order of id.
    ///
    /// A premise rests on itself.
    pub fn premises_of(&self, id: AxiomId) -> Vec<AxiomId> {
        self.proof.premises_of(id)
    }

    /// The value of the variable with the given name, if the variable exists and has a value.
    pub fn variable_value(&self, name: &str) -> Option<bool> {
        let variable = self.variables.variable_of(name)?;
        self.variables.value_of(variable)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
