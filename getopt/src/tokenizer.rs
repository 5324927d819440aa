//! Splits a raw command-line string into argument tokens.
//!
//! Quoting follows the shell just far enough to let option values contain
//! whitespace: single and double quotes group characters, a quote of the
//! other type is taken literally inside a quoted region, and adjacent
//! quoted/unquoted segments concatenate into one token. There is no escape
//! character.

use std::str::Chars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Lazy iterator over the tokens of a command-line string.
///
/// The tokenizer is restartable: constructing a fresh `Tokenizer` over the
/// same input yields the same sequence.
pub struct Tokenizer<'a> {
    chars: Chars<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            chars: input.chars(),
        }
    }
}

/// Tokenize a whole string at once.
pub fn tokenize(input: &str) -> Vec<String> {
    Tokenizer::new(input).collect()
}

impl Iterator for Tokenizer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut buf = String::new();
        // An empty quoted segment ('' or "") still produces a token, so
        // track whether a quote opened the buffer.
        let mut opened = false;
        let mut quote = Quote::None;

        loop {
            let c = match self.chars.next() {
                Some(c) => c,
                None => {
                    // Unterminated quotes are not an error; the content so
                    // far is taken literally.
                    if opened || !buf.is_empty() {
                        return Some(buf);
                    }
                    return None;
                }
            };

            match quote {
                Quote::None => match c {
                    ' ' | '\t' | '\n' => {
                        if opened || !buf.is_empty() {
                            return Some(buf);
                        }
                        // leading separator, nothing accumulated yet
                    }
                    '\'' => {
                        quote = Quote::Single;
                        opened = true;
                    }
                    '"' => {
                        quote = Quote::Double;
                        opened = true;
                    }
                    _ => buf.push(c),
                },
                Quote::Single => match c {
                    '\'' => quote = Quote::None,
                    _ => buf.push(c),
                },
                Quote::Double => match c {
                    '"' => quote = Quote::None,
                    _ => buf.push(c),
                },
            }
        }
    }
}
