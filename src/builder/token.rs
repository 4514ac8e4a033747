//! Tokens of premise text.

use crate::structures::expression::Bracket;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Variable,
    Opening(Bracket),
    Closing(Bracket),
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    Biconditional,
    EndOfLine,
}

impl TokenKind {
    /// The kind of token given by a single character, for characters which are a token on their own.
    pub fn of_symbol(c: char) -> Option<Self> {
        let kind = match c {
            '(' => Self::Opening(Bracket::Round),
            '[' => Self::Opening(Bracket::Square),
            '{' => Self::Opening(Bracket::Curly),
            ')' => Self::Closing(Bracket::Round),
            ']' => Self::Closing(Bracket::Square),
            '}' => Self::Closing(Bracket::Curly),
            '~' | '-' | '¬' => Self::Negation,
            '^' | '&' | '.' | '∧' | '⋅' => Self::Conjunction,
            'v' | '|' | '∨' => Self::Disjunction,
            '>' | '→' | '⊃' => Self::Implication,
            '=' | '↔' | '≡' => Self::Biconditional,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether the token is a binary operator.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Self::Conjunction | Self::Disjunction | Self::Implication | Self::Biconditional
        )
    }

    /// Whether the token is an implication or biconditional.
    pub fn is_conditional(&self) -> bool {
        matches!(self, Self::Implication | Self::Biconditional)
    }
}

/// A token, together with the text of the token and the position of the token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'t> {
    pub kind: TokenKind,

    pub text: &'t str,

    /// Byte index of the token in the source text.
    pub index: usize,

    pub line: usize,

    /// The column of the token, counted in characters.
    pub column: usize,
}
