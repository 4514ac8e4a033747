/*!
A recursive descent parser for premises.

From the loosest binding to the tightest:
- Implication and biconditional, which associate to the right.
- Disjunction.
- Conjunction.
- Negation, variables, and groups.

So, `a ∧ b ∨ c → d` is read as `((a ∧ b) ∨ c) → d`, and `a → b → c` as `a → (b → c)`.

Any of three kinds of bracket may be used for a group, though a group must be closed by the same kind of bracket as opened the group.
A group around a unary expression is dropped.
*/

use crate::{
    builder::{token::TokenKind, token_stream::TokenStream},
    context::Context,
    db::ExprKey,
    structures::expression::ConnectiveKind,
    types::err::{ErrorKind, ParseErrorKind},
};

impl Context {
    pub(super) fn parse_conditional(
        &mut self,
        stream: &mut TokenStream,
    ) -> Result<ExprKey, ErrorKind> {
        let antecedent = self.parse_connective(stream, ConnectiveKind::Disjunction)?;

        match stream.peek()? {
            Some(token) if token.kind.is_conditional() => {
                stream.next_token()?;
                let consequent = self.parse_conditional(stream)?;
                match token.kind {
                    TokenKind::Implication => {
                        Ok(self.expressions.implication(antecedent, consequent))
                    }
                    _ => Ok(self.expressions.biconditional(antecedent, consequent)),
                }
            }

            _ => Ok(antecedent),
        }
    }

    /// A run of operands joined by the connective `kind`.
    ///
    /// Operands of a disjunction are conjunctions, and operands of a conjunction are unary.
    fn parse_connective(
        &mut self,
        stream: &mut TokenStream,
        kind: ConnectiveKind,
    ) -> Result<ExprKey, ErrorKind> {
        let (operator, operand) = match kind {
            ConnectiveKind::Disjunction => (TokenKind::Disjunction, Some(ConnectiveKind::Conjunction)),
            ConnectiveKind::Conjunction => (TokenKind::Conjunction, None),
        };

        let mut operands = vec![self.parse_operand(stream, operand)?];

        while let Some(token) = stream.peek()? {
            if token.kind != operator {
                break;
            }
            stream.next_token()?;
            operands.push(self.parse_operand(stream, operand)?);
        }

        match operands.as_slice() {
            [single] => Ok(*single),
            _ => Ok(self.expressions.connective(kind, operands)),
        }
    }

    fn parse_operand(
        &mut self,
        stream: &mut TokenStream,
        kind: Option<ConnectiveKind>,
    ) -> Result<ExprKey, ErrorKind> {
        match kind {
            Some(kind) => self.parse_connective(stream, kind),
            None => self.parse_unary(stream),
        }
    }

    fn parse_unary(&mut self, stream: &mut TokenStream) -> Result<ExprKey, ErrorKind> {
        let Some(token) = stream.next_token()? else {
            return Err(stream.error_here(ParseErrorKind::UnexpectedEndOfInput).into());
        };

        match token.kind {
            TokenKind::Variable => Ok(self.variables.ensure(token.text, &mut self.expressions)?),

            TokenKind::Opening(bracket) => {
                let inner = self.parse_conditional(stream)?;

                match stream.next_token()? {
                    None => Err(stream
                        .error_here(ParseErrorKind::ClosingBracketExpected(bracket))
                        .into()),

                    Some(closing) if closing.kind != TokenKind::Closing(bracket) => Err(stream
                        .error_at(ParseErrorKind::ClosingBracketExpected(bracket), &closing)
                        .into()),

                    Some(_) => Ok(self.expressions.group(inner, bracket)),
                }
            }

            TokenKind::Negation => {
                let inner = self.parse_unary(stream)?;
                Ok(self.expressions.negation(inner))
            }

            TokenKind::EndOfLine => {
                Err(stream.error_at(ParseErrorKind::UnexpectedEndOfLine, &token).into())
            }

            kind if kind.is_operator() => {
                Err(stream.error_at(ParseErrorKind::UnexpectedOperator, &token).into())
            }

            _ => Err(stream.error_at(ParseErrorKind::UnaryExpected, &token).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{Config, Notation},
        context::Context,
        structures::expression::{Bracket, Expression},
        types::err::{ErrorKind, ParseError, ParseErrorKind},
    };

    fn written(text: &str) -> Vec<String> {
        let the_context = Context::from_text(text, Config::default()).unwrap();
        the_context
            .premises()
            .iter()
            .map(|premise| the_context.write(premise.expression))
            .collect()
    }

    fn parse_error(text: &str) -> ParseError {
        match Context::from_text(text, Config::default()) {
            Err(ErrorKind::Parse(e)) => e,
            _ => panic!("parse error expected"),
        }
    }

    #[test]
    fn precedence() {
        assert_eq!(written("a & b | c > d"), vec!["((a ∧ b) ∨ c) → d"]);
        assert_eq!(written("a | b & c"), vec!["a ∨ (b ∧ c)"]);
        assert_eq!(written("a > b > c"), vec!["a → (b → c)"]);
    }

    #[test]
    fn brackets_are_kept() {
        assert_eq!(written("[a v b] & {c > d}"), vec!["[a ∨ b] ∧ {c → d}"]);
        assert_eq!(written("((a))"), vec!["a"]);
        assert_eq!(written("~(a & b)"), vec!["¬(a ∧ b)"]);
        assert_eq!(written("--a"), vec!["¬¬a"]);
    }

    #[test]
    fn premise_ids_are_lines() {
        let the_context = Context::from_text("a\n\n# note\nb = c\n", Config::default()).unwrap();
        let ids = the_context
            .premises()
            .iter()
            .map(|premise| premise.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 4]);

        let premise = the_context.premises()[1];
        assert!(matches!(
            the_context.expressions.get(premise.expression),
            Expression::Biconditional(_, _)
        ));
    }

    #[test]
    fn notation() {
        let mut config = Config::default();
        config.notation.value = Notation::Canonical;

        let the_context = Context::from_text("a ∧ b\nb ∨ a", config).unwrap();
        let premise = the_context.premises()[1];
        assert_eq!(the_context.write(premise.expression), "a ∨ b");

        let the_context = Context::from_text("a ∧ b\nb ∨ a", Config::default()).unwrap();
        let premise = the_context.premises()[1];
        assert_eq!(the_context.write(premise.expression), "b ∨ a");
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse_error("a &"),
            ParseError {
                kind: ParseErrorKind::UnexpectedEndOfInput,
                index: 3,
                line: 1,
                column: 4,
            }
        );

        assert_eq!(
            parse_error("a &\nb"),
            ParseError {
                kind: ParseErrorKind::UnexpectedEndOfLine,
                index: 3,
                line: 1,
                column: 4,
            }
        );

        assert_eq!(
            parse_error("a & & b"),
            ParseError {
                kind: ParseErrorKind::UnexpectedOperator,
                index: 4,
                line: 1,
                column: 5,
            }
        );

        assert_eq!(
            parse_error("(a & b]"),
            ParseError {
                kind: ParseErrorKind::ClosingBracketExpected(Bracket::Round),
                index: 6,
                line: 1,
                column: 7,
            }
        );

        assert_eq!(
            parse_error("a b"),
            ParseError {
                kind: ParseErrorKind::EndOfLineExpected,
                index: 2,
                line: 1,
                column: 3,
            }
        );

        assert_eq!(parse_error("a\n)").kind, ParseErrorKind::UnaryExpected);
    }
}
