//! The option-matching state machine.
//!
//! Consumes the token sequence produced by the tokenizer, matches it against
//! an [`OptionSet`], and produces a [`ParseResult`]. All lookahead and
//! ambiguity policy lives here.

use std::iter::Peekable;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::option::{Arity, OptionSet};
use crate::result::{ParseResult, Value};
use crate::tokenizer::Tokenizer;

/// Parses raw command-line strings against a fixed set of options.
///
/// A parser is reusable: every [`parse`](CommandLineParser::parse) call
/// allocates fresh value cells, so independent command lines can be parsed
/// one after another (or fanned out across threads) without leakage.
pub struct CommandLineParser {
    options: Arc<OptionSet>,
}

impl CommandLineParser {
    /// Build a parser over `options`, rejecting duplicate names.
    pub fn new(options: OptionSet) -> Result<Self> {
        options.validate()?;
        Ok(CommandLineParser {
            options: Arc::new(options),
        })
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Parse one raw command-line string.
    pub fn parse(&self, command_line: &str) -> Result<ParseResult> {
        let set = &self.options;
        let mut cells: Vec<Option<Value>> = vec![None; set.len()];

        // Configured defaults enter the result up front; explicit values
        // overwrite them later.
        for (index, opt) in set.iter().enumerate() {
            if let Some(argument) = &opt.argument {
                if let Some(default) = &argument.default {
                    cells[index] = Some(Value::Str(default.clone()));
                }
            }
        }

        let mut operands: Vec<String> = Vec::new();
        let mut tokens = Tokenizer::new(command_line).peekable();
        let mut collecting_operands = false;

        while let Some(token) = tokens.next() {
            if collecting_operands {
                operands.push(token);
                continue;
            }
            if token == "--" || token == "-" {
                // Operand marker; the marker itself is discarded.
                collecting_operands = true;
                continue;
            }
            if token.starts_with("--") {
                self.parse_long(&token[2..], &mut cells, &mut tokens)?;
            } else if token.starts_with('-') && token.len() > 1 {
                self.parse_cluster(&token[1..], &mut cells, &mut tokens)?;
            } else {
                // Program name or stray positional text before any marker.
                trace!(token = token.as_str(), "dropping non-option token");
            }
        }

        debug!(
            options = cells.iter().filter(|c| c.is_some()).count(),
            operands = operands.len(),
            "command line parsed"
        );
        Ok(ParseResult {
            set: Arc::clone(&self.options),
            cells,
            operands,
        })
    }

    /// `body` is the token with its `--` prefix stripped.
    fn parse_long(
        &self,
        body: &str,
        cells: &mut [Option<Value>],
        tokens: &mut Peekable<Tokenizer<'_>>,
    ) -> Result<()> {
        let (name, explicit) = match body.find('=') {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };
        let index = self
            .options
            .find_long(name)
            .ok_or_else(|| Error::UnknownOption(name.to_string()))?;
        self.apply(index, name, explicit, cells, tokens)
    }

    /// `body` is the token with its `-` prefix stripped: one or more flag
    /// characters, optionally ending in a value-taking option whose value
    /// may be attached inline.
    fn parse_cluster(
        &self,
        body: &str,
        cells: &mut [Option<Value>],
        tokens: &mut Peekable<Tokenizer<'_>>,
    ) -> Result<()> {
        let mut rest = body;
        while let Some(c) = rest.chars().next() {
            rest = &rest[c.len_utf8()..];
            let index = self
                .options
                .find_short(c)
                .ok_or_else(|| Error::UnknownOption(c.to_string()))?;
            if self.options.get(index).takes_value() {
                // Whatever remains of the token is the inline value; no
                // lookahead happens when an inline value is present.
                let inline = if rest.is_empty() { None } else { Some(rest) };
                return self.apply(index, &c.to_string(), inline, cells, tokens);
            }
            bump_count(&mut cells[index]);
        }
        Ok(())
    }

    /// Record one occurrence of option `index`, resolving its value from
    /// `pre` (inline or explicit `=` text) or from lookahead.
    fn apply(
        &self,
        index: usize,
        name: &str,
        pre: Option<&str>,
        cells: &mut [Option<Value>],
        tokens: &mut Peekable<Tokenizer<'_>>,
    ) -> Result<()> {
        let opt = self.options.get(index);

        if let Arity::None = opt.arity {
            // Flags only count occurrences; explicit `=` text is discarded.
            bump_count(&mut cells[index]);
            return Ok(());
        }

        let value = match pre {
            Some(v) => Some(v.to_string()),
            None => self.take_lookahead(tokens),
        };
        // An empty value string counts as no value obtained.
        let value = value.filter(|v| !v.is_empty());

        match value {
            Some(v) => {
                if let Some(argument) = &opt.argument {
                    if !argument.validates(&v) {
                        return Err(Error::InvalidArgument(name.to_string()));
                    }
                }
                cells[index] = Some(Value::Str(v));
            }
            None => match opt.arity {
                Arity::Required => return Err(Error::MissingArgument(name.to_string())),
                _ => bump_count(&mut cells[index]),
            },
        }
        Ok(())
    }

    /// Consume the next token as a value unless it looks like an option of
    /// this set. The blocked token stays put for normal processing.
    fn take_lookahead(&self, tokens: &mut Peekable<Tokenizer<'_>>) -> Option<String> {
        let next = tokens.peek()?;
        if self.looks_like_option(next) {
            return None;
        }
        tokens.next()
    }

    /// Shape check for lookahead blocking only; a bare `-` never counts.
    fn looks_like_option(&self, token: &str) -> bool {
        if token.starts_with("--") && token.len() > 2 {
            let body = &token[2..];
            let name = match body.find('=') {
                Some(pos) => &body[..pos],
                None => body,
            };
            return self.options.find_long(name).is_some();
        }
        if token.starts_with('-') && token.len() > 1 {
            return match token[1..].chars().next() {
                Some(c) => self.options.find_short(c).is_some(),
                None => false,
            };
        }
        false
    }
}

fn bump_count(cell: &mut Option<Value>) {
    // A bare occurrence replaces any held string (default or earlier value).
    let next = match cell {
        Some(Value::Count(n)) => *n + 1,
        _ => 1,
    };
    *cell = Some(Value::Count(next));
}
