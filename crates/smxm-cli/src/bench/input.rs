use anyhow::{Context, Result};
use clap::ArgMatches;
use std::fs;
use std::path::Path;

use smxm_core::{parse_matrix_size, BenchConfig, OutputFormat};

use crate::util::validate_json_file;

/// Read a benchmark configuration from a JSON file.
///
/// Fields that are missing keep their defaults; fields with an invalid value
/// are reported and also fall back to the default.
pub fn load_bench_config(config_path: &Path) -> Result<BenchConfig> {
    validate_json_file(config_path)?;
    let config_json = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

    let partial: serde_json::Value = serde_json::from_str(&config_json)
        .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
    let mut config = BenchConfig::default();

    macro_rules! load_or_default {
        ($field:ident) => {
            if let Some(val) = partial.get(stringify!($field)) {
                if let Ok(parsed) = serde_json::from_value(val.clone()) {
                    config.$field = parsed;
                } else {
                    log::warn!(
                        "Config Invalid value for '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            } else {
                log::debug!(
                    "Config Missing field '{}', using default: {:?}",
                    stringify!($field),
                    config.$field
                );
            }
        };
    }

    load_or_default!(matrix_size);
    load_or_default!(seed);
    load_or_default!(repetitions);
    load_or_default!(output);

    Ok(config)
}

/// Build the effective configuration: config file first, then command-line
/// overrides.
pub fn config_from_arguments(matches: &ArgMatches) -> Result<BenchConfig> {
    let mut config = match matches.get_one::<std::path::PathBuf>("config") {
        Some(path) => {
            log::info!("Using config: {:?}", path);
            load_bench_config(path)?
        }
        None => BenchConfig::default(),
    };

    if let Some(size) = matches.get_one::<String>("matrix_size") {
        config.matrix_size = parse_matrix_size(size)?;
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }
    if let Some(repeat) = matches.get_one::<usize>("repeat") {
        config.repetitions = *repeat;
    }
    if matches.get_flag("json") {
        config.output = OutputFormat::Json;
    }

    config.validate()?;
    Ok(config)
}
