/*!
Tools for building a context from text.

Text is read line by line, with one premise on each line.
Empty lines and lines holding only a comment are skipped.

# Example
```rust
# use deducer::context::Context;
# use deducer::config::Config;
let text = "
p ∨ q  # either
¬p     # not this one
";

let the_context = Context::from_text(text, Config::default()).unwrap();

let ids = the_context.premises().iter().map(|premise| premise.id).collect::<Vec<_>>();
assert_eq!(ids, vec![2, 3]);
```

For the grammar of premises, see [parser] and [token_stream].
*/

pub mod parser;
pub mod token;
pub mod token_stream;

use crate::{
    builder::token::TokenKind,
    config::Config,
    context::{Context, ContextState},
    db::axiom::Axiom,
    misc::log::targets::{self},
    types::err::{ErrorKind, ParseErrorKind},
};

use token_stream::TokenStream;

impl Context {
    /// A context with the premises written in `text`.
    pub fn from_text(text: &str, config: Config) -> Result<Self, ErrorKind> {
        let mut the_context = Context::from_config(config);
        the_context.read_premises(text)?;
        Ok(the_context)
    }

    /// Reads the premises written in `text` into the context.
    ///
    /// As the id of a premise is the line the premise is written on, premises may be read only once, and before any step.
    pub fn read_premises(&mut self, text: &str) -> Result<(), ErrorKind> {
        if self.state != ContextState::Input || !self.premises.is_empty() {
            return Err(ErrorKind::InvalidState);
        }

        let mut stream = TokenStream::new(text);

        while let Some(token) = stream.peek()? {
            if token.kind == TokenKind::EndOfLine {
                stream.next_token()?;
                continue;
            }

            let key = self.parse_conditional(&mut stream)?;

            if let Some(token) = stream.peek()? {
                if token.kind != TokenKind::EndOfLine {
                    return Err(stream
                        .error_at(ParseErrorKind::EndOfLineExpected, &token)
                        .into());
                }
            }

            let premise = Axiom {
                id: token.line,
                expression: self.expressions.actual(key),
            };
            log::trace!(target: targets::PARSER, "Premise {}: {}", premise.id, self.write(premise.expression));

            self.proof.add_premise(premise.id);
            self.premises.push(premise);
        }

        self.next_axiom_id = stream.line() + 3;
        log::info!(target: targets::PARSER, "Read {} premises over {} lines", self.premises.len(), stream.line());

        Ok(())
    }
}
