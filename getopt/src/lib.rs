//! Getopt-style command-line parsing over raw strings.
//!
//! Takes one raw command-line string, tokenizes it with shell-like quoting
//! (just enough for option values to contain whitespace), and matches the
//! tokens against a declared [`OptionSet`]: short-option clusters, long
//! options with or without `=`, an operand marker, and operands. The result
//! maps either name of an option to one shared value.
//!
//! ```
//! use getopt::{Arity, CommandLineParser, Opt, OptionSet};
//!
//! let parser = CommandLineParser::new(
//!     OptionSet::new()
//!         .option(Opt::pair('v', "verbose"))
//!         .option(Opt::pair('o', "output").arity(Arity::Required)),
//! )?;
//!
//! let result = parser.parse("build -vv -o target/out -- input.txt")?;
//! assert_eq!(result.count("verbose"), 2);
//! assert_eq!(result.value("output"), Some("target/out"));
//! assert_eq!(result.operands(), ["input.txt"]);
//! # Ok::<(), getopt::Error>(())
//! ```

mod error;
mod getopt;
mod option;
mod parser;
mod result;
mod tokenizer;

pub use crate::getopt::Getopt;
pub use error::{Error, Result};
pub use option::{Argument, Arity, Opt, OptionSet, Validator};
pub use parser::CommandLineParser;
pub use result::{ParseResult, Value};
pub use tokenizer::{tokenize, Tokenizer};
