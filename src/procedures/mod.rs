/*!
Procedures of a context.

- [equivalence] builds truth tables, and relates expressions by truth table.
- [evaluation] finds the value of an expression, given the axioms admitted so far.
- [interest] records which axioms relate to (parts of) which expressions.
- [seed] prepares a context built from premises for deduction.
- [step] admits deductions, one at a time.
*/

pub mod equivalence;
pub mod evaluation;
pub mod interest;
pub mod seed;
pub mod step;
