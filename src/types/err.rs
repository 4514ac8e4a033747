//! Error types used in the library.
//!
//! - Parse errors are external, and carry the position at which the text could not be read.
//! - The remaining errors arise while deducing and are fatal to the [context](crate::context) they arise in.
//!   A context which has returned an error step will not return any further steps.
//! - Non-fatal conditions (a duplicate deduction, a rule which cannot yet be applied) are not errors, and are handled internally.
//!
//! Names of the error enums mostly overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::AxiomId, structures::expression::Bracket};

/// The umbrella error, wrapping the error of each concern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AxiomDB(AxiomDBError),
    Evaluation(EvaluationError),
    Expression(ExpressionError),
    Parse(ParseError),
    VariableDB(VariableDBError),

    /// Some method was called on a context in a state which does not support the method.
    InvalidState,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AxiomDB(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
            Self::Expression(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::VariableDB(e) => write!(f, "{e}"),
            Self::InvalidState => write!(f, "Invalid state."),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in the axiom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AxiomDBError {
    /// The candidate axiom is the negation of an existing axiom.
    Inconsistent {
        candidate: AxiomId,
        existing: AxiomId,
    },
}

impl From<AxiomDBError> for ErrorKind {
    fn from(e: AxiomDBError) -> Self {
        ErrorKind::AxiomDB(e)
    }
}

impl std::fmt::Display for AxiomDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inconsistent {
                candidate,
                existing,
            } => write!(f, "Inconsistent axioms: {candidate} / {existing}"),
        }
    }
}

/// Errors when evaluating the value of an expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The expression was found to have some value, and now has the other value.
    InconsistentExpression {
        /// The written form of the expression.
        expression: String,

        /// The value the expression had.
        was: bool,

        /// The value the expression now has.
        now: bool,

        /// The axiom responsible for the value the expression had, if known.
        because: Option<AxiomId>,
    },
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InconsistentExpression {
                expression,
                was,
                now,
                because,
            } => {
                write!(
                    f,
                    "Inconsistent expression: {expression} evaluated as {}",
                    truth_name(*was)
                )?;
                if let Some(axiom) = because {
                    write!(f, " because of {axiom}")?;
                }
                write!(f, " but now evaluates as {}", truth_name(*now))
            }
        }
    }
}

/// Errors related to a single expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExpressionError {
    /// A truth table was requested for an expression with too many variables.
    TooManyVariables {
        /// The count of variables used by the expression.
        count: usize,

        /// The largest count of variables supported.
        limit: usize,
    },
}

impl From<ExpressionError> for ErrorKind {
    fn from(e: ExpressionError) -> Self {
        ErrorKind::Expression(e)
    }
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyVariables { count, limit } => {
                write!(f, "Expression uses more than {limit} variables ({count}).")
            }
        }
    }
}

/// The reason some text could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// A character which is not part of the grammar.
    InvalidCharacter(char),

    /// The text ended where a variable, negation, or opening bracket was required.
    UnexpectedEndOfInput,

    /// The line ended where a variable, negation, or opening bracket was required.
    UnexpectedEndOfLine,

    /// A binary operator was found where a variable, negation, or opening bracket was required.
    UnexpectedOperator,

    /// Something other than a variable, negation, or opening bracket was found where one was required.
    UnaryExpected,

    /// A bracket was opened and not closed.
    ClosingBracketExpected(Bracket),

    /// An expression was complete, but the line continued.
    EndOfLineExpected,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter(c) => write!(f, "Invalid character: {c}"),
            Self::UnexpectedEndOfInput => {
                write!(f, "Unexpected end of code. Variable, negation or ( expected.")
            }
            Self::UnexpectedEndOfLine => {
                write!(f, "Unexpected end of line. Variable, negation or ( expected.")
            }
            Self::UnexpectedOperator => {
                write!(f, "Unexpected operator. Variable, negation or ( expected.")
            }
            Self::UnaryExpected => write!(
                f,
                "Invalid character found. Variable, negation or ( expected."
            ),
            Self::ClosingBracketExpected(bracket) => write!(
                f,
                "{}, conjunction, disjunction, implication or biconditional operator expected.",
                bracket.closing()
            ),
            Self::EndOfLineExpected => write!(f, "End of line expected."),
        }
    }
}

/// Errors during parsing, tagged with the position of the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,

    /// The byte index of the error in the source text.
    pub index: usize,

    /// The (1-based) line of the error.
    pub line: usize,

    /// The (1-based) column of the error, counted in characters.
    pub column: usize,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Ln {}, Col {})", self.kind, self.line, self.column)
    }
}

/// Errors in the variable database.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VariableDBError {
    /// There are no more fresh variables.
    VariablesExhausted,

    /// Some axiom requires a variable to have a value other than the value already assigned.
    AlreadyAssigned {
        /// The name of the variable.
        name: String,

        /// The value already assigned.
        value: bool,
    },
}

impl From<VariableDBError> for ErrorKind {
    fn from(e: VariableDBError) -> Self {
        ErrorKind::VariableDB(e)
    }
}

impl std::fmt::Display for VariableDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariablesExhausted => write!(
                f,
                "More than {} declared variables.",
                crate::structures::variable::VARIABLE_LIMIT
            ),
            Self::AlreadyAssigned { name, value } => write!(
                f,
                "Variable already assigned to a different value: {name} is {}",
                truth_name(*value)
            ),
        }
    }
}

fn truth_name(value: bool) -> &'static str {
    match value {
        true => "True",
        false => "False",
    }
}
