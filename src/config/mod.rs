/*!
Configuration of a context.

All configuration of a context is contained in a [Config], given when the context is built.
The relevant parts of the configuration are copied to databases which use them, and so the configuration of a context does not change after the context is built.
*/

mod config_option;
pub use config_option::ConfigOption;

use serde::Serialize;

use crate::structures::equivalence::TRUTH_TABLE_LIMIT;

/// How expressions are written in steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// Operands of conjunctions and disjunctions in the order written.
    #[default]
    Written,

    /// Operands of conjunctions and disjunctions in canonical order.
    Canonical,
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Written => write!(f, "written"),
            Self::Canonical => write!(f, "canonical"),
        }
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The greatest count of variables of an expression for which a truth table is built.
    pub variable_limit: ConfigOption<usize>,

    /// Whether the negation of a negation, when deduced, is written as the negated expression.
    pub strip_double_negation: ConfigOption<bool>,

    /// Whether rules skip deductions which are true on every valuation, such as `p → p`.
    pub skip_tautologies: ConfigOption<bool>,

    /// How expressions are written in steps.
    pub notation: ConfigOption<Notation>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variable_limit: ConfigOption {
                name: "variable_limit",
                min: 1,
                max: TRUTH_TABLE_LIMIT,
                value: TRUTH_TABLE_LIMIT,
            },

            strip_double_negation: ConfigOption {
                name: "strip_double_negation",
                min: false,
                max: true,
                value: false,
            },

            skip_tautologies: ConfigOption {
                name: "skip_tautologies",
                min: false,
                max: true,
                value: false,
            },

            notation: ConfigOption {
                name: "notation",
                min: Notation::Written,
                max: Notation::Canonical,
                value: Notation::Written,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deductions_are_kept_as_made() {
        let config = Config::default();
        assert!(!config.skip_tautologies.value);
        assert!(!config.strip_double_negation.value);
    }

    #[test]
    fn bounded_set() {
        let mut config = Config::default();

        assert!(config.variable_limit.set(8));
        assert_eq!(config.variable_limit.value, 8);

        assert!(!config.variable_limit.set(TRUTH_TABLE_LIMIT + 1));
        assert!(!config.variable_limit.set(0));
        assert_eq!(config.variable_limit.value, 8);
    }
}
