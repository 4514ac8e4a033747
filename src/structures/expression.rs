/*!
Expressions of propositional logic.

An [Expression] is a single node of an expression tree.
Sub-expressions are not owned, and are instead referred to by [keys](ExprKey) to the [expression database](crate::db::expression), which owns every node of a context.
This allows sub-expressions to be shared between expressions, and in particular, each variable has a unique node.

Nodes are built through the expression database, which upholds the following:

- The operand of a negation, and the operands of an implication or biconditional, are *unary*.
  That is, a variable, a negation, or a group.
  Any other expression is wrapped in a [Group] when used as an operand.
- The operands of a [Connective] are unary, and in canonical order.
  See [connective](crate::db::expression::ExpressionDB::connective) for details.
- A group never directly contains a unary expression.

[Group]: Expression::Group
*/

use crate::db::ExprKey;

use super::variable::Variable;

/// The glyphs used to write a group.
///
/// Brackets make no difference to the meaning of an expression, and are kept only to write an expression as it was read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `(` and `)`
    #[default]
    Round,

    /// `[` and `]`
    Square,

    /// `{` and `}`
    Curly,
}

impl Bracket {
    pub fn opening(&self) -> char {
        match self {
            Self::Round => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    pub fn closing(&self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }
}

/// The kind of an n-ary connective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConnectiveKind {
    Conjunction,
    Disjunction,
}

impl ConnectiveKind {
    /// The symbol placed between operands, with surrounding whitespace.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Conjunction => " ∧ ",
            Self::Disjunction => " ∨ ",
        }
    }
}

/// A conjunction or disjunction of two or more operands.
#[derive(Clone, Debug)]
pub struct Connective {
    pub kind: ConnectiveKind,

    /// The operands, in canonical order and without duplicates.
    pub operands: Vec<ExprKey>,

    /// The operands as written, before flattening, deduplication, or sorting.
    pub written: Vec<ExprKey>,
}

/// A node of an expression tree.
#[derive(Clone, Debug)]
pub enum Expression {
    Variable(Variable),

    Negation(ExprKey),

    Connective(Connective),

    /// An implication, with antecedent and consequent.
    Implication(ExprKey, ExprKey),

    Biconditional(ExprKey, ExprKey),

    /// A non-unary expression surrounded by brackets.
    Group(ExprKey, Bracket),
}

impl Expression {
    /// Whether the expression may be used as an operand without brackets.
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            Self::Variable(_) | Self::Negation(_) | Self::Group(_, _)
        )
    }

    /// The discriminant of the expression, used to order expressions of different kinds.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Self::Variable(_) => 0,
            Self::Negation(_) => 1,
            Self::Connective(Connective {
                kind: ConnectiveKind::Conjunction,
                ..
            }) => 2,
            Self::Connective(Connective {
                kind: ConnectiveKind::Disjunction,
                ..
            }) => 3,
            Self::Implication(_, _) => 4,
            Self::Biconditional(_, _) => 5,
            Self::Group(_, _) => 6,
        }
    }
}

/// Symbols used when writing expressions.
pub mod symbols {
    pub const NEGATION: &str = "¬";
    pub const IMPLICATION: &str = " → ";
    pub const BICONDITIONAL: &str = " ↔ ";
}
