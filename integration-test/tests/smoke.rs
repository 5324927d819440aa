//! End-to-end scenarios through the public API.

use getopt::{Arity, Error, Opt, OptionSet};
use test_driver::{archiver, flags};

#[test]
fn create_archive_full_command_line() {
    let r = archiver()
        .parse("some-tool -cvf backup.tar --exclude '*.log' --compress=zstd -- src docs")
        .unwrap();
    assert_eq!(r.count("create"), 1);
    assert_eq!(r.count("verbose"), 1);
    assert_eq!(r.value("file"), Some("backup.tar"));
    assert_eq!(r.value("exclude"), Some("*.log"));
    assert_eq!(r.value("compress"), Some("zstd"));
    assert_eq!(r.operands(), ["src", "docs"]);
}

#[test]
fn short_and_long_names_share_one_value() {
    let r = archiver().parse("-x -C /tmp").unwrap();
    assert_eq!(r.value("directory"), Some("/tmp"));
    assert_eq!(r.value("C"), Some("/tmp"));
    assert_eq!(r.count("x"), 1);
    assert_eq!(r.count("extract"), 1);
}

#[test]
fn defaults_reset_between_parses() {
    let tool = archiver();

    let first = tool.parse("-c --compress zstd").unwrap();
    assert_eq!(first.value("compress"), Some("zstd"));

    // A fresh parse starts again from the configured default.
    let second = tool.parse("-c").unwrap();
    assert_eq!(second.value("compress"), Some("gzip"));
}

#[test]
fn flags_accumulate_across_forms() {
    let parser = getopt::CommandLineParser::new(flags("abc")).unwrap();
    let r = parser.parse("-abc -a -cc").unwrap();
    assert_eq!(r.count("a"), 2);
    assert_eq!(r.count("b"), 1);
    assert_eq!(r.count("c"), 3);
}

#[test]
fn quoted_values_survive_end_to_end() {
    let r = archiver().parse("-c -f 'my archive.tar'").unwrap();
    assert_eq!(r.value("file"), Some("my archive.tar"));

    let r = archiver().parse(r#"-c --exclude 'it'"'"'s.log'"#).unwrap();
    assert_eq!(r.value("exclude"), Some("it's.log"));
}

#[test]
fn operands_after_marker_are_verbatim() {
    let r = archiver().parse("-c -- -x --file x -").unwrap();
    assert_eq!(r.operands(), ["-x", "--file", "x", "-"]);
    assert_eq!(r.count("extract"), 0);
}

#[test]
fn bare_hyphen_switches_to_operands() {
    let r = archiver().parse("-c - leftover").unwrap();
    assert_eq!(r.count("create"), 1);
    assert_eq!(r.operands(), ["leftover"]);
}

#[test]
fn error_messages_name_the_option() {
    let tool = archiver();

    let err = tool.parse("-q").unwrap_err();
    assert_eq!(err.to_string(), "option 'q' is unknown");

    let err = tool.parse("-c --exclude").unwrap_err();
    assert_eq!(err.to_string(), "option 'exclude' must have a value");

    let err = tool.parse("--compress=bzip2").unwrap_err();
    assert_eq!(err.to_string(), "option 'compress' has an invalid value");
}

#[test]
fn errors_abort_without_partial_results() {
    // The failing token is mid-line; the caller sees only the error.
    let result = archiver().parse("-cv -q --exclude rest");
    assert!(matches!(result, Err(Error::UnknownOption(_))));
}

#[test]
fn duplicate_declaration_is_rejected() {
    let set = OptionSet::new()
        .option(Opt::pair('f', "file").arity(Arity::Required))
        .option(Opt::long("file"));
    assert!(matches!(
        getopt::CommandLineParser::new(set),
        Err(Error::DuplicateOption(name)) if name == "file"
    ));
}

#[test]
fn help_text_covers_the_whole_set() {
    let help = archiver().help_text("archiver");
    assert!(help.starts_with("Usage: archiver [options] [operands]\n"));
    for needle in [
        "-c, --create",
        "-f, --file <arg>",
        "-z, --compress [<arg>]",
        "    --exclude <arg>",
        "Compression to apply.",
    ] {
        assert!(help.contains(needle), "missing {:?} in:\n{}", needle, help);
    }
}
