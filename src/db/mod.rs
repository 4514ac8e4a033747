//! Databases owned by a context.
//!
//! - [The expression database](crate::db::expression)
//!   + Every node of every expression, read or deduced, each accessed by an [ExprKey]. \
//!     Nodes are never removed, and so keys remain valid for the lifetime of a context.
//! - [The variable database](crate::db::variable)
//!   + Names of variables, and the value (if any) each variable has been assigned by some axiom.
//! - [The axiom database](crate::db::axiom)
//!   + The axioms of a context, premises and deductions, in the order admitted.
//! - [The interest database](crate::db::interest)
//!   + For conjunctions, disjunctions, and implications, which axioms relate to (some combination of) the operands of the expression.
//! - [The proof graph](crate::db::proof)
//!   + Which axioms each deduction rests on.

pub mod axiom;
pub mod expression;
pub mod interest;
mod keys;
pub use keys::*;
pub mod proof;
pub mod variable;
