/*!
A lazy stream of [tokens](Token) over some text.

Tokens are read one at a time, as the parser asks for them.

- Whitespace separates tokens, and is otherwise ignored.
- Any of `\n`, `\r`, `\n\r`, `\r\n`, NEL, and the unicode line and paragraph separators end a line.
- A `#` starts a comment, which runs to the end of the line.
- A variable is a run of ASCII letters, digits, and underscores, though `v` at the start of a token is always a disjunction.
*/

use crate::{
    builder::token::{Token, TokenKind},
    types::err::{ParseError, ParseErrorKind},
};

pub struct TokenStream<'t> {
    source: &'t str,

    /// The byte index of the next character to read.
    index: usize,

    line: usize,

    column: usize,

    peeked: Option<Option<Token<'t>>>,
}

impl<'t> TokenStream<'t> {
    pub fn new(source: &'t str) -> Self {
        TokenStream {
            source,
            index: 0,
            line: 1,
            column: 1,
            peeked: None,
        }
    }

    /// The line of the next character to be read.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The next token, without advancing the stream.
    pub fn peek(&mut self) -> Result<Option<Token<'t>>, ParseError> {
        match self.peeked {
            Some(token) => Ok(token),
            None => {
                let token = self.fetch()?;
                self.peeked = Some(token);
                Ok(token)
            }
        }
    }

    /// The next token.
    pub fn next_token(&mut self) -> Result<Option<Token<'t>>, ParseError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.fetch(),
        }
    }

    /// An error at the position of `token`.
    pub fn error_at(&self, kind: ParseErrorKind, token: &Token) -> ParseError {
        ParseError {
            kind,
            index: token.index,
            line: token.line,
            column: token.column,
        }
    }

    /// An error at the current position of the stream.
    pub fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            index: self.index,
            line: self.line,
            column: self.column,
        }
    }

    fn next_char(&self) -> Option<char> {
        self.source[self.index..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.index += c.len_utf8();
        self.column += 1;
    }

    fn fetch(&mut self) -> Result<Option<Token<'t>>, ParseError> {
        while let Some(c) = self.next_char() {
            let (index, line, column) = (self.index, self.line, self.column);

            match c {
                ' ' | '\t' | '\u{0B}' | '\u{0C}' | '\u{A0}' => self.bump(c),

                '\n' | '\r' => {
                    self.index += 1;
                    let pair = if c == '\n' { '\r' } else { '\n' };
                    if self.next_char() == Some(pair) {
                        self.index += 1;
                    }
                    return Ok(Some(self.end_of_line(index, line, column)));
                }

                '\u{85}' | '\u{2028}' | '\u{2029}' => {
                    self.index += c.len_utf8();
                    return Ok(Some(self.end_of_line(index, line, column)));
                }

                '#' => {
                    while let Some(c) = self.next_char() {
                        if c == '\n' || c == '\r' {
                            break;
                        }
                        self.bump(c);
                    }
                }

                _ => {
                    if let Some(kind) = TokenKind::of_symbol(c) {
                        self.bump(c);
                        return Ok(Some(Token {
                            kind,
                            text: &self.source[index..self.index],
                            index,
                            line,
                            column,
                        }));
                    }

                    if !is_identifier_char(c) {
                        return Err(self.error_here(ParseErrorKind::InvalidCharacter(c)));
                    }

                    while let Some(c) = self.next_char() {
                        if !is_identifier_char(c) {
                            break;
                        }
                        self.bump(c);
                    }

                    return Ok(Some(Token {
                        kind: TokenKind::Variable,
                        text: &self.source[index..self.index],
                        index,
                        line,
                        column,
                    }));
                }
            }
        }

        Ok(None)
    }

    fn end_of_line(&mut self, index: usize, line: usize, column: usize) -> Token<'t> {
        self.line += 1;
        self.column = 1;
        Token {
            kind: TokenKind::EndOfLine,
            text: &self.source[index..self.index],
            index,
            line,
            column,
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
