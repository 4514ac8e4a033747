//! The result of a single [step](crate::context::Context::step) of a context.

use serde::Serialize;

use crate::db::AxiomId;

/// One line of a proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Step {
    /// A fresh axiom, deduced from earlier axioms.
    Deduced {
        /// The id of the axiom, which is also the line of the axiom in a written proof.
        id: AxiomId,

        /// The expression of the axiom, written with the configured notation.
        text: String,

        /// The rule and axioms which justify the deduction.
        explanation: String,
    },

    /// An error, after which the context does not deduce anything else.
    Error { text: String },
}

impl Step {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The text of the step, an expression or an error message.
    pub fn text(&self) -> &str {
        match self {
            Self::Deduced { text, .. } => text,
            Self::Error { text } => text,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deduced {
                text, explanation, ..
            } => write!(f, "{text} # {explanation}"),
            Self::Error { text } => write!(f, "# {text}"),
        }
    }
}
