// Demo runner: parses its own argument list with a sample option set.

use getopt::{Argument, Arity, Getopt, Opt, OptionSet, Value};

fn build_options() -> OptionSet {
    OptionSet::new()
        .option(Opt::pair('v', "verbose").description("Increase verbosity. Can be repeated."))
        .option(
            Opt::pair('o', "output")
                .arity(Arity::Required)
                .description("Write results to this path."),
        )
        .option(
            Opt::pair('f', "format")
                .arity(Arity::Optional)
                .argument(
                    Argument::new()
                        .default_value("text")
                        .validator(|v| matches!(v, "text" | "json")),
                )
                .description("Output format, text or json."),
        )
        .option(Opt::long("help").description("Show this help message."))
}

fn main() {
    let line = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let getopt = match Getopt::new(build_options()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("demo: {}", e);
            std::process::exit(1);
        }
    };

    let result = match getopt.parse(&line) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("demo: {}", e);
            std::process::exit(1);
        }
    };

    if result.is_present("help") {
        print!("{}", getopt.help_text("demo"));
        return;
    }

    for (opt, value) in result.options() {
        let name = match opt.long_name() {
            Some(long) => long.to_string(),
            None => opt.short_name().map(String::from).unwrap_or_default(),
        };
        match value {
            Value::Count(n) => println!("{}: {} occurrence(s)", name, n),
            Value::Str(s) => println!("{}: '{}'", name, s),
        }
    }
    for operand in result.operands() {
        println!("operand: '{}'", operand);
    }
}
