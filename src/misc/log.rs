/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder)
    pub const PARSER: &str = "parser";

    /// Logs related to the [expression database](crate::db::expression)
    pub const EXPRESSION_DB: &str = "expression_db";

    /// Logs related to [truth tables](crate::procedures::equivalence)
    pub const EQUIVALENCE: &str = "equivalence";

    /// Logs related to the search for [axioms of interest](crate::procedures::interest)
    pub const INTEREST: &str = "interest";

    /// Logs related to the [axiom database](crate::db::axiom)
    pub const AXIOM_DB: &str = "axiom_db";

    /// Logs related to the application of [rules](crate::rules)
    pub const RULES: &str = "rules";

    /// Logs related to [stepping](crate::procedures::step)
    pub const STEP: &str = "step";

    /// Logs related to the deduction and pending queues
    pub const QUEUE: &str = "queue";
}
