//! Key structures, such as variables, expressions, and the truth tables of expressions.
//!
//! Structures here are plain data.
//! The stores which own instances of these structures, and give them meaning relative to one another, are found in the [database module](crate::db).
//!
//! # Expressions
//!
//! An [expression](expression) is a tree of nodes built from [variables](variable) by negation, conjunction, disjunction, implication, and biconditional.
//! Nodes of an expression are stored in an arena and referenced by [key](crate::db::ExprKey).
//!
//! # Equivalence
//!
//! Two expressions are identified when they have the same [truth table](equivalence), and are exact opposites when the truth tables are complements.
//! This is the only notion of sameness used when reasoning, and the syntax of an expression is relevant only for display and quick rejection of duplicates.

pub mod deduction;
pub mod equivalence;
pub mod expression;
pub mod step;
pub mod variable;
pub mod variable_set;
