/*!
A generator of k-combinations of the indices 0..n, in lexicographic order.

The generator holds a single buffer of indices, updated in place by [advance](Combinations::advance).
No recursion is used, and so the depth of the stack is independent of n and k.

```rust
# use deducer::generic::combinations::Combinations;
let mut combinations = Combinations::new(4, 2);
let mut seen = Vec::default();
while let Some(indices) = combinations.advance() {
    seen.push(indices.to_vec());
}
assert_eq!(seen, vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
```

The same generator may be [restarted](Combinations::restart) with a different size.
*/

pub struct Combinations {
    count: usize,
    counters: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    /// A generator of combinations of `size` indices from 0..`count`.
    pub fn new(count: usize, size: usize) -> Self {
        let mut combinations = Combinations {
            count,
            counters: Vec::with_capacity(size),
            started: false,
            exhausted: false,
        };
        combinations.restart(size);
        combinations
    }

    /// Resets the generator to the first combination of `size` indices.
    pub fn restart(&mut self, size: usize) {
        self.counters.clear();
        self.counters.extend(0..size);
        self.started = false;
        self.exhausted = size > self.count;
    }

    /// The next combination, if any.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(&self.counters);
        }

        let size = self.counters.len();
        let mut index = size;
        loop {
            if index == 0 {
                self.exhausted = true;
                return None;
            }
            index -= 1;

            self.counters[index] += 1;
            // The greatest index at position i is count - size + i.
            if self.counters[index] + (size - index) <= self.count {
                break;
            }
        }

        for following in index + 1..size {
            self.counters[following] = self.counters[following - 1] + 1;
        }

        Some(&self.counters)
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|indices| indices.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn counts() {
        for n in 0..9 {
            for k in 0..=n {
                assert_eq!(Combinations::new(n, k).count(), binomial(n, k), "{n} choose {k}");
            }
        }
    }

    #[test]
    fn ordered_and_increasing() {
        let all = Combinations::new(6, 3).collect::<Vec<_>>();
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(all.iter().all(|c| c.windows(2).all(|pair| pair[0] < pair[1])));
        assert_eq!(all.first(), Some(&vec![0, 1, 2]));
        assert_eq!(all.last(), Some(&vec![3, 4, 5]));
    }

    #[test]
    fn restart() {
        let mut combinations = Combinations::new(3, 2);
        assert_eq!(combinations.by_ref().count(), 3);
        assert_eq!(combinations.advance(), None);

        combinations.restart(3);
        assert_eq!(combinations.advance(), Some([0, 1, 2].as_slice()));
        assert_eq!(combinations.advance(), None);
    }

    #[test]
    fn oversized() {
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }
}
