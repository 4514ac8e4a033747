/*!
The canonical truth table encoding of an expression.

For an expression using variables *v*₀ < *v*₁ < … < *v*ₖ₋₁ (with *k* at most [TRUTH_TABLE_LIMIT]) the encoding is a byte vector made of:
- The *k* variables, one byte each, in ascending order.
- 2ᵏ bits, one for each valuation of the variables, packed little-end first into bytes.

Row *i* of the table values *v*ⱼ with bit *k - 1 - j* of *i*, so the first variable is the most significant.

As the variables prefix the bits, two encodings of expressions over different variables never agree, and a difference is typically found within the first few bytes.

- Two expressions are equivalent if and only if their encodings are identical.
- Two expressions are negations of each other if and only if their prefixes are identical and every bit of one is the complement of the corresponding bit of the other.
  As the final byte may be partial, the complement of the final byte is masked to the bits in use.

```rust
# use deducer::structures::equivalence::{Equivalence, Relation};
# use deducer::structures::variable_set::VariableSet;
let pq = VariableSet::from_iter([0, 1]);

let p_and_q = Equivalence::build(pq, 16, |v| v.value_of(0) && v.value_of(1)).unwrap();
let q_and_p = Equivalence::build(pq, 16, |v| v.value_of(1) && v.value_of(0)).unwrap();
let not_p_or_not_q = Equivalence::build(pq, 16, |v| !v.value_of(0) || !v.value_of(1)).unwrap();

assert_eq!(p_and_q.relation(&q_and_p), Relation::Equivalent);
assert_eq!(p_and_q.relation(&not_p_or_not_q), Relation::Negated);
```
*/

use crate::types::err::ExpressionError;

use super::{
    variable::{Variable, VARIABLE_LIMIT},
    variable_set::VariableSet,
};

/// The largest count of variables for which a truth table is built.
pub const TRUTH_TABLE_LIMIT: usize = 16;

/// How one expression relates to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// The expressions have the same truth table.
    Equivalent,

    /// The truth table of one expression is the complement of the other.
    Negated,

    /// Neither.
    Unrelated,
}

impl Relation {
    /// The relation as a signed integer: `1` for equivalent, `-1` for negated, and `0` otherwise.
    pub fn sign(&self) -> i8 {
        match self {
            Self::Equivalent => 1,
            Self::Negated => -1,
            Self::Unrelated => 0,
        }
    }

    pub fn is_related(&self) -> bool {
        !matches!(self, Self::Unrelated)
    }

    /// The relation to the negation of the other expression.
    pub fn negate(&self) -> Self {
        match self {
            Self::Equivalent => Self::Negated,
            Self::Negated => Self::Equivalent,
            Self::Unrelated => Self::Unrelated,
        }
    }
}

/// Scratch values of every variable, used when filling a truth table.
///
/// A helper valuation is owned by the procedure building a truth table, and passed to each evaluation of a row.
pub struct HelperValuation {
    values: [bool; VARIABLE_LIMIT],
}

impl Default for HelperValuation {
    fn default() -> Self {
        HelperValuation {
            values: [false; VARIABLE_LIMIT],
        }
    }
}

impl HelperValuation {
    pub fn value_of(&self, variable: Variable) -> bool {
        self.values[variable as usize]
    }

    pub fn set(&mut self, variable: Variable, value: bool) {
        self.values[variable as usize] = value;
    }
}

/// The canonical truth table encoding of an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equivalence {
    variable_count: usize,
    bytes: Vec<u8>,
    last_byte_mask: u8,
}

impl Equivalence {
    /// Builds the truth table of `evaluate` over `variables`.
    ///
    /// `evaluate` is called once for each row of the table, with a helper valuation on which exactly the variables of the row have been set.
    pub fn build(
        variables: VariableSet,
        limit: usize,
        mut evaluate: impl FnMut(&HelperValuation) -> bool,
    ) -> Result<Self, ExpressionError> {
        let variable_count = variables.len();
        let limit = limit.min(TRUTH_TABLE_LIMIT);
        if variable_count > limit {
            return Err(ExpressionError::TooManyVariables {
                count: variable_count,
                limit,
            });
        }

        let ordered = variables.iter().collect::<Vec<_>>();
        let row_count: usize = 1 << variable_count;

        let mut bytes = vec![0; variable_count + row_count.div_ceil(8)];
        bytes[..variable_count].copy_from_slice(&ordered);

        let valid_bits_in_last_byte = match row_count % 8 {
            0 => 8,
            partial => partial,
        };
        let last_byte_mask = ((1_u16 << valid_bits_in_last_byte) - 1) as u8;

        let mut helper = HelperValuation::default();
        let mut bit_index = variable_count * 8;
        for row in 0..row_count {
            let mut tmp = row;
            for variable in ordered.iter().rev() {
                helper.set(*variable, tmp & 1 == 1);
                tmp >>= 1;
            }

            if evaluate(&helper) {
                bytes[bit_index / 8] |= 1 << (bit_index % 8);
            }
            bit_index += 1;
        }

        Ok(Equivalence {
            variable_count,
            bytes,
            last_byte_mask,
        })
    }

    /// The variables of the table, in ascending order.
    pub fn variables(&self) -> &[Variable] {
        &self.bytes[..self.variable_count]
    }

    /// The bytes holding the results of each row.
    pub fn bits(&self) -> &[u8] {
        &self.bytes[self.variable_count..]
    }

    /// The full encoding, variables first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A count of the rows of the table, i.e. 2ᵏ for k variables.
    pub fn row_count(&self) -> usize {
        1 << self.variable_count
    }

    /// The result of the given row.
    pub fn value_at(&self, row: usize) -> bool {
        let bits = self.bits();
        bits[row / 8] & (1 << (row % 8)) != 0
    }

    /// How `self` relates to `other`, found with a single pass over the tables.
    pub fn relation(&self, other: &Self) -> Relation {
        if self.variable_count != other.variable_count || self.variables() != other.variables() {
            return Relation::Unrelated;
        }

        let (a, b) = (self.bits(), other.bits());
        let last = a.len() - 1;

        if a[0] == b[0] {
            match a[1..] == b[1..] {
                true => Relation::Equivalent,
                false => Relation::Unrelated,
            }
        } else {
            let complement = |index: usize| match index == last {
                true => !b[index] & self.last_byte_mask,
                false => !b[index],
            };
            match (0..=last).all(|index| a[index] == complement(index)) {
                true => Relation::Negated,
                false => Relation::Unrelated,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(variables: &[Variable]) -> VariableSet {
        VariableSet::from_iter(variables.iter().copied())
    }

    #[test]
    fn row_counts() {
        for k in 0..=TRUTH_TABLE_LIMIT {
            let variables = set(&(0..k as Variable).collect::<Vec<_>>());
            let table = Equivalence::build(variables, TRUTH_TABLE_LIMIT, |_| true).unwrap();

            assert_eq!(table.row_count(), 1 << k);
            assert_eq!(table.variables().len(), k);
            assert_eq!(table.bits().len(), (1_usize << k).div_ceil(8));
            assert!((0..table.row_count()).all(|row| table.value_at(row)));
        }
    }

    #[test]
    fn limit() {
        let variables = set(&(0..17).collect::<Vec<_>>());
        assert_eq!(
            Equivalence::build(variables, TRUTH_TABLE_LIMIT, |_| true),
            Err(ExpressionError::TooManyVariables {
                count: 17,
                limit: 16
            })
        );

        let variables = set(&[0, 1, 2]);
        assert!(Equivalence::build(variables, 2, |_| true).is_err());
    }

    #[test]
    fn first_variable_is_most_significant() {
        let table = Equivalence::build(set(&[4, 9]), TRUTH_TABLE_LIMIT, |v| v.value_of(4)).unwrap();

        // Rows: (4, 9) = (F, F), (F, T), (T, F), (T, T)
        assert!(!table.value_at(0));
        assert!(!table.value_at(1));
        assert!(table.value_at(2));
        assert!(table.value_at(3));
    }

    #[test]
    fn negation_masks_partial_byte() {
        let p = set(&[0]);
        let yes = Equivalence::build(p, TRUTH_TABLE_LIMIT, |v| v.value_of(0)).unwrap();
        let no = Equivalence::build(p, TRUTH_TABLE_LIMIT, |v| !v.value_of(0)).unwrap();
        let top = Equivalence::build(p, TRUTH_TABLE_LIMIT, |_| true).unwrap();

        assert_eq!(yes.relation(&no), Relation::Negated);
        assert_eq!(no.relation(&yes), Relation::Negated);
        assert_eq!(yes.relation(&yes), Relation::Equivalent);
        assert_eq!(yes.relation(&top), Relation::Unrelated);
    }

    #[test]
    fn negation_across_full_bytes() {
        let variables = set(&[0, 1, 2, 3, 4]);
        let odd = |v: &HelperValuation| (0..5).filter(|x| v.value_of(*x)).count() % 2 == 1;

        let a = Equivalence::build(variables, TRUTH_TABLE_LIMIT, odd).unwrap();
        let b = Equivalence::build(variables, TRUTH_TABLE_LIMIT, |v| !odd(v)).unwrap();

        assert_eq!(a.relation(&b), Relation::Negated);
        assert_eq!(a.relation(&b).sign(), -1);
    }

    #[test]
    fn different_variables_unrelated() {
        let p = Equivalence::build(set(&[0]), TRUTH_TABLE_LIMIT, |v| v.value_of(0)).unwrap();
        let q = Equivalence::build(set(&[1]), TRUTH_TABLE_LIMIT, |v| !v.value_of(1)).unwrap();

        assert_eq!(p.relation(&q), Relation::Unrelated);
    }
}
