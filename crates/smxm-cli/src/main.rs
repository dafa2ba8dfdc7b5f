use clap::error::ErrorKind;
use log::LevelFilter;

use smxm_cli::bench::input::config_from_arguments;
use smxm_cli::bench::output::write_reports;
use smxm_cli::cli::{build_cli, error_line};

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SMXM_LOG", "warn"))
        .init();

    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                std::process::exit(0)
            }
            ErrorKind::MissingRequiredArgument => {
                let program = std::env::args().next().unwrap_or_else(|| "smxm".to_string());
                eprintln!("Usage: {} <matrix-size>", program);
                std::process::exit(1)
            }
            _ => {
                eprintln!("{}", error_line(&e));
                std::process::exit(1)
            }
        },
    };

    if let Err(e) = run(&matches) {
        eprintln!("{:#}", e);
        std::process::exit(1)
    }
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let config = config_from_arguments(matches)?;
    log::info!(
        "[smxm] N={} repetitions={} output={:?}",
        config.matrix_size,
        config.repetitions,
        config.output
    );

    let reports = smxm_core::run(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_reports(&mut out, &reports, config.output)
}
