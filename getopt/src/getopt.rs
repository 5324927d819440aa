//! Caller-facing front end: owns the option set, delegates parsing, and
//! renders a usage text. Rendering is presentation only and never affects
//! parse semantics.

use crate::error::Result;
use crate::option::{Arity, Opt, OptionSet};
use crate::parser::CommandLineParser;
use crate::result::ParseResult;

const MAX_COL_WIDTH: usize = 79;

pub struct Getopt {
    parser: CommandLineParser,
    banner: Option<String>,
}

impl Getopt {
    pub fn new(options: OptionSet) -> Result<Self> {
        Ok(Getopt {
            parser: CommandLineParser::new(options)?,
            banner: None,
        })
    }

    /// Replace the default `Usage:` line of the help text.
    pub fn banner(mut self, text: &str) -> Self {
        self.banner = Some(text.to_string());
        self
    }

    pub fn options(&self) -> &OptionSet {
        self.parser.options()
    }

    pub fn parse(&self, command_line: &str) -> Result<ParseResult> {
        self.parser.parse(command_line)
    }

    /// Render the option overview, one aligned row per option with the
    /// description word-wrapped under a shared left column.
    pub fn help_text(&self, program: &str) -> String {
        let mut out = String::new();
        match &self.banner {
            Some(banner) => {
                out.push_str(banner);
                out.push('\n');
            }
            None => {
                out.push_str("Usage: ");
                out.push_str(program);
                out.push_str(" [options] [operands]\n");
            }
        }
        out.push_str("Options:\n");

        let max_left = self
            .options()
            .iter()
            .map(|opt| left_column(opt).len())
            .max()
            .unwrap_or(0);
        // "  " prefix + left column + 2 separator spaces
        let indent_length = max_left + 4;
        let line_length = if MAX_COL_WIDTH > indent_length {
            MAX_COL_WIDTH - indent_length
        } else {
            20
        };

        for opt in self.options().iter() {
            let left = left_column(opt);
            match opt.description.as_deref() {
                Some(text) if !text.is_empty() => {
                    out.push_str("  ");
                    out.push_str(&left);
                    for _ in left.len()..max_left + 2 {
                        out.push(' ');
                    }
                    write_wrapped(&mut out, text, indent_length, line_length);
                }
                _ => {
                    out.push_str("  ");
                    out.push_str(&left);
                    out.push('\n');
                }
            }
        }
        out
    }
}

/// "-a, --alpha <arg>" — the fixed-width part of a help row.
fn left_column(opt: &Opt) -> String {
    let mut left = String::new();
    match (opt.short_name(), opt.long_name()) {
        (Some(short), Some(long)) => {
            left.push('-');
            left.push(short);
            left.push_str(", --");
            left.push_str(long);
        }
        (Some(short), None) => {
            left.push('-');
            left.push(short);
        }
        (None, Some(long)) => {
            left.push_str("    --");
            left.push_str(long);
        }
        (None, None) => {}
    }
    match opt.arity {
        Arity::None => {}
        Arity::Optional => left.push_str(" [<arg>]"),
        Arity::Required => left.push_str(" <arg>"),
    }
    left
}

/// Word-wrap `text` at word boundaries, indenting continuation lines.
fn write_wrapped(out: &mut String, text: &str, indent_length: usize, line_length: usize) {
    let mut help = text;
    while help.len() > line_length {
        let mut end = line_length;
        while !help.is_char_boundary(end) {
            end -= 1;
        }
        let break_pos = match help[..end].rfind(' ') {
            Some(pos) if pos > 0 => pos,
            _ => break,
        };
        out.push_str(&help[..break_pos]);
        out.push('\n');
        for _ in 0..indent_length {
            out.push(' ');
        }
        help = help[break_pos..].trim_start_matches(' ');
    }
    if !help.is_empty() {
        out.push_str(help);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Getopt {
        Getopt::new(
            OptionSet::new()
                .option(Opt::pair('a', "alpha").description("First one"))
                .option(
                    Opt::long("beta")
                        .arity(Arity::Required)
                        .description("Second one, takes a value"),
                )
                .option(Opt::short('v').description("Verbosity")),
        )
        .unwrap()
    }

    #[test]
    fn help_lists_every_option() {
        let help = sample().help_text("tool");
        assert!(help.starts_with("Usage: tool [options] [operands]\n"));
        assert!(help.contains("-a, --alpha"));
        assert!(help.contains("    --beta <arg>"));
        assert!(help.contains("-v"));
        assert!(help.contains("Second one, takes a value"));
    }

    #[test]
    fn help_rows_share_one_description_column() {
        let help = sample().help_text("tool");
        let columns: Vec<usize> = help
            .lines()
            .filter_map(|line| {
                line.find("First one")
                    .or_else(|| line.find("Second one"))
                    .or_else(|| line.find("Verbosity"))
            })
            .collect();
        assert_eq!(columns.len(), 3);
        assert!(columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn long_descriptions_wrap_under_the_column() {
        let long_text = "word ".repeat(40);
        let getopt = Getopt::new(
            OptionSet::new().option(Opt::short('x').description(long_text.trim_end())),
        )
        .unwrap();
        let help = getopt.help_text("tool");
        let wrapped: Vec<&str> = help.lines().filter(|l| l.contains("word")).collect();
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(line.len() <= MAX_COL_WIDTH);
        }
        // continuation lines are indented past the left column
        assert!(wrapped[1].starts_with("    "));
    }

    #[test]
    fn custom_banner_replaces_usage_line() {
        let getopt = Getopt::new(OptionSet::new().option(Opt::short('a')))
            .unwrap()
            .banner("tool - does things\nUsage: tool [-a]");
        let help = getopt.help_text("tool");
        assert!(help.starts_with("tool - does things\n"));
        assert!(!help.contains("[operands]"));
    }

    #[test]
    fn parse_delegates_to_the_engine() {
        let getopt = sample();
        let r = getopt.parse("-a --beta value rest -- op").unwrap();
        assert_eq!(r.count("alpha"), 1);
        assert_eq!(r.value("beta"), Some("value"));
        assert_eq!(r.operands(), ["op"]);
    }
}
