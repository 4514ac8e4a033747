/*!
A set of [variables](Variable), represented as a fixed width bitset.

As there are at most [VARIABLE_LIMIT] variables, four words are sufficient.
Sets are [Copy], and operations are a handful of word operations.

Iteration is in ascending order of variables, and comparison of two sets is by comparison of these sequences.
This order is used to sort the operands of a conjunction or disjunction.

```rust
# use deducer::structures::variable_set::VariableSet;
let mut a = VariableSet::default();
a.insert(3);
a.insert(1);

let b = VariableSet::from_iter([1, 200]);

assert!(a.intersects(&b));
assert_eq!(a.union(&b).iter().collect::<Vec<_>>(), vec![1, 3, 200]);
```
*/

use std::cmp::Ordering;

use super::variable::{Variable, VARIABLE_LIMIT};

const WORD_BITS: usize = u64::BITS as usize;
const WORDS: usize = VARIABLE_LIMIT / WORD_BITS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VariableSet {
    words: [u64; WORDS],
}

impl VariableSet {
    /// The set containing exactly `variable`.
    pub fn singleton(variable: Variable) -> Self {
        let mut set = Self::default();
        set.insert(variable);
        set
    }

    pub fn insert(&mut self, variable: Variable) {
        let v = variable as usize;
        self.words[v / WORD_BITS] |= 1 << (v % WORD_BITS);
    }

    pub fn remove(&mut self, variable: Variable) {
        let v = variable as usize;
        self.words[v / WORD_BITS] &= !(1 << (v % WORD_BITS));
    }

    pub fn contains(&self, variable: Variable) -> bool {
        let v = variable as usize;
        self.words[v / WORD_BITS] & (1 << (v % WORD_BITS)) != 0
    }

    /// A count of the variables in the set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut set = *self;
        set.union_with(other);
        set
    }

    pub fn union_with(&mut self, other: &Self) {
        for (word, other_word) in self.words.iter_mut().zip(other.words) {
            *word |= other_word;
        }
    }

    /// Removes every variable in `other` from the set.
    pub fn difference_with(&mut self, other: &Self) {
        for (word, other_word) in self.words.iter_mut().zip(other.words) {
            *word &= !other_word;
        }
    }

    /// Whether the sets share at least one variable.
    pub fn intersects(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words)
            .any(|(word, other_word)| word & other_word != 0)
    }

    /// Whether every variable of `other` is in the set.
    pub fn is_superset(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words)
            .all(|(word, other_word)| other_word & !word == 0)
    }

    /// An iterator over the variables of the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Variable> + '_ {
        self.words.iter().enumerate().flat_map(|(index, word)| {
            let mut word = *word;
            std::iter::from_fn(move || match word {
                0 => None,
                _ => {
                    let bit = word.trailing_zeros() as usize;
                    word &= word - 1;
                    Some((index * WORD_BITS + bit) as Variable)
                }
            })
        })
    }

    /// Compares the ascending sequences of variables of two sets.
    pub fn signature_cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl FromIterator<Variable> for VariableSet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut set = Self::default();
        for variable in iter {
            set.insert(variable);
        }
        set
    }
}

impl std::fmt::Display for VariableSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids = self.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        write!(f, "{}", ids.join("_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        let set = VariableSet::from_iter([0, 63, 64, 255]);
        assert_eq!(set.len(), 4);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 63, 64, 255]);
        assert!(set.contains(255));
        assert!(!set.contains(254));
    }

    #[test]
    fn superset_and_difference() {
        let mut a = VariableSet::from_iter([1, 2, 3]);
        let b = VariableSet::from_iter([2, 3]);

        assert!(a.is_superset(&b));
        assert!(!b.is_superset(&a));

        a.difference_with(&b);
        assert_eq!(a, VariableSet::singleton(1));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn signature_order() {
        let a = VariableSet::from_iter([1, 2]);
        let b = VariableSet::from_iter([1, 3]);
        let c = VariableSet::from_iter([1]);

        assert_eq!(a.signature_cmp(&b), Ordering::Less);
        assert_eq!(c.signature_cmp(&a), Ordering::Less);
        assert_eq!(a.signature_cmp(&a), Ordering::Equal);
        assert_eq!(format!("{a}"), "1_2");
    }
}
