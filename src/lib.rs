//! A library for forward-chaining deduction in propositional logic.
//!
//! deducer reads a collection of premises and, one step at a time, deduces fresh statements from the premises using the familiar rules of inference of natural deduction.
//! Deduction continues until nothing else can be deduced, or until some inconsistency is found.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built from [text](crate::context::Context::from_text) with a configuration, with one premise on each line.
//! Each [step](crate::context::Context::step) of a context returns the next line of a proof.
//!
//! Internally, and at a high-level, deduction is viewed in terms of a handful of databases:
//! - Expressions are stored in an [expression database](crate::db::expression), which keeps expressions in a canonical form.
//! - Axioms (premises and deductions) are stored in an [axiom database](crate::db::axiom), which rejects duplicate and inconsistent axioms.
//! - Relations between parts of expressions and axioms are stored in an [interest database](crate::db::interest).
//!
//! Two expressions are compared by [truth table](crate::structures::equivalence), and so `p ∧ q` and `q ∧ p`, or `¬¬p` and `p`, are the same expression for the purposes of deduction.
//!
//! Useful starting points, then, may be:
//! - The [rules] of inference, and how the rules are scheduled.
//! - The [step procedure](crate::procedures::step) to inspect how deductions become axioms.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Example
//!
//! ```rust
//! # use deducer::config::Config;
//! # use deducer::context::Context;
//! # use deducer::reports::Report;
//! let text = "
//! p ∨ q
//! ¬p
//! q → r
//! ";
//!
//! let mut the_context = Context::from_text(text, Config::default()).unwrap();
//!
//! let mut proof = Vec::default();
//! while let Some(step) = the_context.step() {
//!     proof.push(step.to_string());
//! }
//!
//! assert_eq!(proof, vec![
//!     "q # Disjunctive Syllogism: 2, 3",
//!     "r # Antecedent of 4 evaluates as True: 8",
//! ]);
//! assert_eq!(the_context.report(), Report::FixedPoint);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is provided by the library, though the command line interface uses [log4rs](https://docs.rs/log4rs) when built with the `log` feature.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;
pub mod rules;

pub mod misc;
pub mod reports;
