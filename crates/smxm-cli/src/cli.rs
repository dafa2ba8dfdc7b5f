use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("smxm")
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .about("Serial dense matrix multiplication workload for energy measurement")
        .arg(
            Arg::new("matrix_size")
                .value_name("matrix-size")
                .help("Side length N of the N x N matrices")
                .required_unless_present("config")
                .allow_negative_numbers(true)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(
                    "Path to a JSON benchmark configuration file. \
                     Command-line options override its values.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed of the matrix fill generator. Defaults to a fresh random seed.")
                .value_parser(clap::value_parser!(u64))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("repeat")
                .short('r')
                .long("repeat")
                .help("Run the whole benchmark this many times and print a summary.")
                .value_parser(clap::value_parser!(usize))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Write one JSON report per run instead of the text report.")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
}

/// First non-empty line of a rendered clap error, without the usage block.
pub fn error_line(err: &clap::Error) -> String {
    err.render()
        .to_string()
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("error: invalid arguments")
        .to_string()
}
