//! Text to `Symbol` conversion.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::intern::Interner;

use super::grammar::Symbol;

/// Parses KIF text into interned symbols.
///
/// `;` starts a comment running to the end of the line. Tokens are split on
/// whitespace and parentheses.
#[derive(Clone, Debug)]
pub struct SymbolFactory {
    pool: Arc<Interner>,
}

impl SymbolFactory {
    /// Create a factory interning into `pool`.
    #[must_use]
    pub fn new(pool: Arc<Interner>) -> Self {
        Self { pool }
    }

    /// The pool symbols are interned into.
    #[must_use]
    pub fn pool(&self) -> &Arc<Interner> {
        &self.pool
    }

    /// Parse exactly one symbol.
    ///
    /// Fails on empty input, unbalanced parentheses, or anything left over
    /// after the first complete expression.
    pub fn parse(&self, text: &str) -> Result<Symbol> {
        let mut symbols = self.build(text)?;
        match symbols.len() {
            0 => Err(Error::format("empty input", text)),
            1 => Ok(symbols.remove(0)),
            _ => Err(Error::format("trailing tokens after expression", text)),
        }
    }

    /// Parse a sequence of top-level symbols, e.g. a whole game description.
    pub fn parse_all(&self, text: &str) -> Result<Vec<Symbol>> {
        self.build(text)
    }

    fn build(&self, text: &str) -> Result<Vec<Symbol>> {
        let mut top = Vec::new();
        // One frame per open parenthesis.
        let mut frames: Vec<Vec<Symbol>> = Vec::new();

        for token in lex(text) {
            match token {
                "(" => frames.push(Vec::new()),
                ")" => {
                    let items = frames
                        .pop()
                        .ok_or_else(|| Error::format("unbalanced parentheses", text))?;
                    let list = Symbol::List(self.pool.list(items));
                    frames.last_mut().unwrap_or(&mut top).push(list);
                }
                atom => {
                    let atom = Symbol::Atom(self.pool.atom(atom));
                    frames.last_mut().unwrap_or(&mut top).push(atom);
                }
            }
        }

        if !frames.is_empty() {
            return Err(Error::format("unbalanced parentheses", text));
        }
        Ok(top)
    }
}

/// Split text into tokens, dropping comments.
fn lex(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for line in text.lines() {
        let line = match line.find(';') {
            Some(end) => &line[..end],
            None => line,
        };

        let mut start = None;
        for (i, ch) in line.char_indices() {
            if ch == '(' || ch == ')' || ch.is_whitespace() {
                if let Some(s) = start.take() {
                    tokens.push(&line[s..i]);
                }
                if !ch.is_whitespace() {
                    tokens.push(&line[i..i + 1]);
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            tokens.push(&line[s..]);
        }
    }
    tokens
}
