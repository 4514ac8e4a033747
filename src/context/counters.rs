/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of steps returned, including error steps.
    pub steps: usize,

    /// A count of deductions proposed by rules.
    pub proposals: usize,

    /// A count of deductions equivalent to some axiom, and so not admitted.
    pub duplicates: usize,

    /// A count of deductions skipped as true on every valuation.
    pub tautologies: usize,

    /// A count of axioms admitted, including premises.
    pub admitted: usize,

    /// A count of attempts to apply some deferred rule.
    pub retries: usize,
}
