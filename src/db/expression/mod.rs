/*!
The expression database, an arena of [expression](Expression) nodes.

Nodes are created through methods of the database, which keep expressions in a canonical form.

# Connectives

A conjunction or disjunction is built by [connective](ExpressionDB::connective), which:
1. Flattens any operand which is itself a connective of the same kind into the operands of that connective.
2. Removes syntactic duplicates, keeping the first.
3. Sorts operands by the ascending sequence of variables they use, with ties broken by [structural order](ExpressionDB::structural_cmp).
4. Removes operands equivalent to the operand before, by comparison of [truth tables](crate::structures::equivalence).
   If some truth table cannot be built (due to a limit on variables) the operands are kept.
5. Returns the only operand, if only one operand remains.

As a consequence, two connectives over the same (syntactic) operands have the same operands in the same order, regardless of the order the operands were given in.
And so [equals](ExpressionDB::equals) is a cheap first test of equivalence.

```rust
# use deducer::config::Config;
# use deducer::db::{expression::ExpressionDB, variable::VariableDB};
# use deducer::structures::expression::ConnectiveKind;
let mut expressions = ExpressionDB::new(&Config::default());
let mut variables = VariableDB::default();

let p = variables.ensure("p", &mut expressions).unwrap();
let q = variables.ensure("q", &mut expressions).unwrap();

let p_and_q = expressions.connective(ConnectiveKind::Conjunction, vec![p, q]);
let q_and_p_and_q = expressions.connective(ConnectiveKind::Conjunction, vec![q, p, q]);

assert!(expressions.equals(p_and_q, q_and_p_and_q));

let p_and_p = expressions.connective(ConnectiveKind::Conjunction, vec![p, p]);
assert_eq!(p_and_p, p);
```

# Caches

Each node caches the set of variables used by the node (built with the node), the truth table of the node (built on first request), and the first value the node was evaluated to.
*/

mod display;

use std::{
    cell::{Cell, OnceCell},
    cmp::Ordering,
};

use slotmap::SlotMap;

use crate::{
    config::Config,
    db::ExprKey,
    misc::log::targets::{self},
    structures::{
        equivalence::{Equivalence, Relation},
        expression::{Bracket, Connective, ConnectiveKind, Expression},
        variable::Variable,
        variable_set::VariableSet,
    },
};

/// A node of the expression database.
pub struct ExpressionNode {
    /// The order in which the node was created.
    id: usize,

    expression: Expression,

    variables: VariableSet,

    table: OnceCell<Equivalence>,

    value: Cell<Option<bool>>,
}

impl ExpressionNode {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn variables(&self) -> VariableSet {
        self.variables
    }

    pub(crate) fn table(&self) -> &OnceCell<Equivalence> {
        &self.table
    }

    pub(crate) fn value(&self) -> &Cell<Option<bool>> {
        &self.value
    }
}

/// The expression database.
pub struct ExpressionDB {
    nodes: SlotMap<ExprKey, ExpressionNode>,

    next_id: usize,

    /// The limit on variables in a truth table.
    pub(crate) variable_limit: usize,

    /// Whether negating a negation returns the negated expression.
    strip_double_negation: bool,
}

impl ExpressionDB {
    pub fn new(config: &Config) -> Self {
        ExpressionDB {
            nodes: SlotMap::with_key(),
            next_id: 1,
            variable_limit: config.variable_limit.value,
            strip_double_negation: config.strip_double_negation.value,
        }
    }

    pub fn node(&self, key: ExprKey) -> &ExpressionNode {
        &self.nodes[key]
    }

    pub fn get(&self, key: ExprKey) -> &Expression {
        &self.nodes[key].expression
    }

    /// The variables used by the expression.
    pub fn variables(&self, key: ExprKey) -> VariableSet {
        self.nodes[key].variables
    }

    /// A count of nodes in the database.
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// The expression, with any surrounding group removed.
    pub fn actual(&self, key: ExprKey) -> ExprKey {
        match self.get(key) {
            Expression::Group(inner, _) => *inner,
            _ => key,
        }
    }

    /// The expression, if the expression is a connective (ignoring any group).
    pub fn as_connective(&self, key: ExprKey) -> Option<&Connective> {
        match self.get(self.actual(key)) {
            Expression::Connective(connective) => Some(connective),
            _ => None,
        }
    }

    /// The antecedent and consequent, if the expression is an implication (ignoring any group).
    pub fn as_implication(&self, key: ExprKey) -> Option<(ExprKey, ExprKey)> {
        match self.get(self.actual(key)) {
            Expression::Implication(a, b) => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn is_unary(&self, key: ExprKey) -> bool {
        self.get(key).is_unary()
    }

    fn insert(&mut self, expression: Expression) -> ExprKey {
        let variables = match &expression {
            Expression::Variable(variable) => VariableSet::singleton(*variable),

            Expression::Negation(inner) | Expression::Group(inner, _) => self.variables(*inner),

            Expression::Connective(connective) => {
                let mut variables = VariableSet::default();
                for operand in &connective.operands {
                    variables.union_with(&self.variables(*operand));
                }
                variables
            }

            Expression::Implication(a, b) | Expression::Biconditional(a, b) => {
                self.variables(*a).union(&self.variables(*b))
            }
        };

        let id = self.next_id;
        self.next_id += 1;

        self.nodes.insert(ExpressionNode {
            id,
            expression,
            variables,
            table: OnceCell::new(),
            value: Cell::new(None),
        })
    }

    /// A fresh node for a variable.
    ///
    /// Each variable should have a unique node, and so this is only called by the [variable database](crate::db::variable).
    pub(crate) fn variable(&mut self, variable: Variable) -> ExprKey {
        self.insert(Expression::Variable(variable))
    }

    /// The expression, grouped if not unary.
    pub fn wrap(&mut self, key: ExprKey) -> ExprKey {
        match self.is_unary(key) {
            true => key,
            false => self.insert(Expression::Group(key, Bracket::default())),
        }
    }

    /// The expression surrounded by `bracket`, if the expression is not unary.
    pub fn group(&mut self, key: ExprKey, bracket: Bracket) -> ExprKey {
        match self.is_unary(key) {
            true => key,
            false => self.insert(Expression::Group(key, bracket)),
        }
    }

    /// The negation of an expression, as written.
    pub fn negation(&mut self, key: ExprKey) -> ExprKey {
        let actual = self.actual(key);
        let inner = if self.is_unary(actual) {
            actual
        } else if self.is_unary(key) {
            key
        } else {
            self.insert(Expression::Group(actual, Bracket::default()))
        };
        self.insert(Expression::Negation(inner))
    }

    /// The negation of an expression, as deduced.
    ///
    /// Unlike [negation](ExpressionDB::negation) the negation of a negation is the negated expression, if so configured.
    pub fn negate(&mut self, key: ExprKey) -> ExprKey {
        if self.strip_double_negation {
            if let Expression::Negation(inner) = self.get(self.actual(key)) {
                return self.actual(*inner);
            }
        }
        self.negation(key)
    }

    pub fn implication(&mut self, antecedent: ExprKey, consequent: ExprKey) -> ExprKey {
        let antecedent = self.wrap(antecedent);
        let consequent = self.wrap(consequent);
        self.insert(Expression::Implication(antecedent, consequent))
    }

    pub fn biconditional(&mut self, a: ExprKey, b: ExprKey) -> ExprKey {
        let a = self.wrap(a);
        let b = self.wrap(b);
        self.insert(Expression::Biconditional(a, b))
    }

    /// A conjunction or disjunction of `operands`, in canonical form.
    pub fn connective(&mut self, kind: ConnectiveKind, operands: Vec<ExprKey>) -> ExprKey {
        let written = operands
            .into_iter()
            .map(|operand| self.wrap(operand))
            .collect::<Vec<_>>();

        let mut flat = Vec::with_capacity(written.len());
        for operand in &written {
            match self.get(self.actual(*operand)) {
                Expression::Connective(inner) if inner.kind == kind => {
                    flat.extend(inner.operands.iter().copied())
                }
                _ => flat.push(*operand),
            }
        }

        let mut distinct: Vec<ExprKey> = Vec::with_capacity(flat.len());
        for operand in flat {
            if !distinct.iter().any(|kept| self.equals(*kept, operand)) {
                distinct.push(operand);
            }
        }

        distinct.sort_by(|a, b| {
            self.variables(*a)
                .signature_cmp(&self.variables(*b))
                .then_with(|| self.structural_cmp(*a, *b))
        });

        let mut canonical: Vec<ExprKey> = Vec::with_capacity(distinct.len());
        for operand in distinct {
            if let Some(previous) = canonical.last() {
                if self.variables(*previous) == self.variables(operand) {
                    match self.relation(*previous, operand) {
                        Ok(Relation::Equivalent) => continue,
                        Ok(_) => {}
                        Err(e) => {
                            log::debug!(target: targets::EXPRESSION_DB, "Operands kept: {e}");
                        }
                    }
                }
            }
            canonical.push(operand);
        }

        match canonical.as_slice() {
            [single] => *single,
            _ => self.insert(Expression::Connective(Connective {
                kind,
                operands: canonical,
                written,
            })),
        }
    }

    /// Syntactic equality of two expressions, ignoring groups.
    pub fn equals(&self, a: ExprKey, b: ExprKey) -> bool {
        self.structural_cmp(a, b) == Ordering::Equal
    }

    /// A total order on expressions, ignoring groups.
    ///
    /// Expressions are ordered by kind, then variable, then operands from left to right.
    pub fn structural_cmp(&self, a: ExprKey, b: ExprKey) -> Ordering {
        let (a, b) = (self.actual(a), self.actual(b));
        if a == b {
            return Ordering::Equal;
        }

        let (ea, eb) = (self.get(a), self.get(b));
        match (ea, eb) {
            (Expression::Variable(x), Expression::Variable(y)) => x.cmp(y),

            (Expression::Negation(x), Expression::Negation(y)) => self.structural_cmp(*x, *y),

            (Expression::Connective(x), Expression::Connective(y)) if x.kind == y.kind => {
                for (p, q) in x.operands.iter().zip(&y.operands) {
                    match self.structural_cmp(*p, *q) {
                        Ordering::Equal => {}
                        unequal => return unequal,
                    }
                }
                x.operands.len().cmp(&y.operands.len())
            }

            (Expression::Implication(xa, xb), Expression::Implication(ya, yb))
            | (Expression::Biconditional(xa, xb), Expression::Biconditional(ya, yb)) => self
                .structural_cmp(*xa, *ya)
                .then_with(|| self.structural_cmp(*xb, *yb)),

            _ => ea.rank().cmp(&eb.rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::variable::VariableDB;

    fn setup(names: &[&str]) -> (ExpressionDB, Vec<ExprKey>) {
        let mut expressions = ExpressionDB::new(&Config::default());
        let mut variables = VariableDB::default();
        let keys = names
            .iter()
            .map(|name| variables.ensure(name, &mut expressions).unwrap())
            .collect();
        (expressions, keys)
    }

    #[test]
    fn flatten_same_kind() {
        let (mut db, v) = setup(&["a", "b", "c"]);
        let ab = db.connective(ConnectiveKind::Conjunction, vec![v[0], v[1]]);
        let ab_c = db.connective(ConnectiveKind::Conjunction, vec![ab, v[2]]);

        let connective = db.as_connective(ab_c).unwrap();
        assert_eq!(connective.operands, vec![v[0], v[1], v[2]]);
        assert_eq!(connective.written.len(), 2);
    }

    #[test]
    fn no_flatten_across_kinds() {
        let (mut db, v) = setup(&["a", "b", "c"]);
        let ab = db.connective(ConnectiveKind::Disjunction, vec![v[0], v[1]]);
        let ab_c = db.connective(ConnectiveKind::Conjunction, vec![ab, v[2]]);

        let connective = db.as_connective(ab_c).unwrap();
        assert_eq!(connective.operands.len(), 2);
        assert!(matches!(
            db.get(connective.operands[0]),
            Expression::Group(_, Bracket::Round)
        ));
    }

    #[test]
    fn semantic_duplicates_collapse() {
        let (mut db, v) = setup(&["a", "b"]);
        let ab = db.connective(ConnectiveKind::Conjunction, vec![v[0], v[1]]);
        let not_ab = db.negation(ab);
        let not_a = db.negation(v[0]);
        let not_b = db.negation(v[1]);
        let either_not = db.connective(ConnectiveKind::Disjunction, vec![not_a, not_b]);

        // ¬(a ∧ b) and (¬a ∨ ¬b) are syntactically distinct, but equivalent.
        let both = db.connective(ConnectiveKind::Conjunction, vec![not_ab, either_not]);
        assert_eq!(db.actual(both), not_ab);
    }

    #[test]
    fn order_ignores_input_order() {
        let (mut db, v) = setup(&["a", "b", "c"]);
        let not_c = db.negation(v[2]);
        let x = db.connective(ConnectiveKind::Disjunction, vec![not_c, v[1], v[0]]);
        let y = db.connective(ConnectiveKind::Disjunction, vec![v[0], not_c, v[1]]);

        assert!(db.equals(x, y));
        assert_eq!(
            db.as_connective(x).unwrap().operands,
            db.as_connective(y).unwrap().operands
        );
    }

    #[test]
    fn negation_wraps() {
        let (mut db, v) = setup(&["a", "b"]);
        let ab = db.connective(ConnectiveKind::Conjunction, vec![v[0], v[1]]);
        let not_ab = db.negation(ab);

        match db.get(not_ab) {
            Expression::Negation(inner) => {
                assert!(matches!(db.get(*inner), Expression::Group(_, _)));
                assert_eq!(db.actual(*inner), ab);
            }
            _ => panic!("negation expected"),
        }

        let not_not_ab = db.negate(not_ab);
        assert!(matches!(db.get(not_not_ab), Expression::Negation(inner) if *inner == not_ab));
    }

    #[test]
    fn negate_strips_when_configured() {
        let mut config = Config::default();
        config.strip_double_negation.value = true;

        let mut db = ExpressionDB::new(&config);
        let mut variables = VariableDB::default();
        let a = variables.ensure("a", &mut db).unwrap();
        let b = variables.ensure("b", &mut db).unwrap();

        let ab = db.connective(ConnectiveKind::Conjunction, vec![a, b]);
        let not_ab = db.negation(ab);
        assert_eq!(db.negate(not_ab), ab);

        let not_a = db.negate(a);
        assert_eq!(db.negate(not_a), a);
    }

    #[test]
    fn variables_of_implication() {
        let (mut db, v) = setup(&["a", "b", "c"]);
        let bc = db.connective(ConnectiveKind::Disjunction, vec![v[1], v[2]]);
        let a_bc = db.implication(v[0], bc);

        assert_eq!(db.variables(a_bc).iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(!db.is_unary(a_bc));
    }
}
