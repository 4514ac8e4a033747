/*!
(The internal representation of) a variable (aka. an 'atom').

- 'Internal' variables are small integers, used internal to a context.
- 'External' variables are names, e.g. `p`, `rain`, `x_1`, as written in some source text.

Each internal variable is a u8 *v* such that either:
- *v* is 0, or:
- *v - 1* is a variable.

So, a context supports at most [VARIABLE_LIMIT] variables.
The names of variables are stored in the [variable database](crate::db::variable), along with any value assigned to the variable.

```rust
# use deducer::structures::variable::{Variable, VARIABLE_LIMIT};
let variables = (0..VARIABLE_LIMIT).map(|v| v as Variable).collect::<Vec<_>>();
assert_eq!(variables.last(), Some(&Variable::MAX));
```
*/

/// A variable, aka. an 'atom'.
pub type Variable = u8;

/// The count of distinct variables supported by a context.
pub const VARIABLE_LIMIT: usize = Variable::MAX as usize + 1;
