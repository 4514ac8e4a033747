/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding deduction.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// More may be deduced.
    Deducing,

    /// Nothing else can be deduced from the premises.
    FixedPoint,

    /// Some inconsistency was found, and so nothing else will be deduced.
    Inconsistent,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Deducing => Self::Deducing,
            ContextState::Exhausted => Self::FixedPoint,
            ContextState::Inconsistent => Self::Inconsistent,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deducing => write!(f, "Deducing"),
            Self::FixedPoint => write!(f, "Fixed point"),
            Self::Inconsistent => write!(f, "Inconsistent"),
        }
    }
}
