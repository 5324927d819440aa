//! Test driver for getopt integration tests.
//!
//! Provides the option sets the scenario tests share, so individual tests
//! stay focused on the command lines they exercise.

use getopt::{Argument, Arity, Getopt, Opt, OptionSet};

/// One counting flag per character in `names`.
pub fn flags(names: &str) -> OptionSet {
    names
        .chars()
        .fold(OptionSet::new(), |set, c| set.option(Opt::short(c)))
}

/// The option set of a small archiving tool, used as a realistic workload.
pub fn archiver() -> Getopt {
    let options = OptionSet::new()
        .option(Opt::pair('c', "create").description("Create a new archive."))
        .option(Opt::pair('x', "extract").description("Extract an archive."))
        .option(
            Opt::pair('f', "file")
                .arity(Arity::Required)
                .description("Archive file to read or write."),
        )
        .option(
            Opt::pair('C', "directory")
                .arity(Arity::Required)
                .description("Change to this directory first."),
        )
        .option(Opt::pair('v', "verbose").description("List entries as they are processed."))
        .option(
            Opt::pair('z', "compress")
                .arity(Arity::Optional)
                .argument(
                    Argument::new()
                        .default_value("gzip")
                        .validator(|v| matches!(v, "gzip" | "zstd" | "none")),
                )
                .description("Compression to apply."),
        )
        .option(
            Opt::long("exclude")
                .arity(Arity::Required)
                .description("Skip entries matching this pattern."),
        );
    Getopt::new(options).expect("archiver option set is valid")
}
