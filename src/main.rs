use fmconv::cli::commands::{CliArgs, Commands};
use fmconv::cli::handlers::{handle_convert, handle_inspect, EXIT_FAILURE};
use fmconv::util::logging::{init_logging, parse_level, LoggingConfig};
use fmconv::{ConfigError, ConverterConfig, VERSION};

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(logging_config(&args, &ConverterConfig::default()));
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };
    init_logging(logging_config(&args, &config));

    debug!("fmconv v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Convert(convert_args) => handle_convert(convert_args, &config, args.quiet),
        Commands::Inspect(inspect_args) => handle_inspect(inspect_args),
    };

    std::process::exit(exit_code);
}

fn load_config() -> Result<ConverterConfig, ConfigError> {
    let config = ConverterConfig::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Command-line level flags override the configured level
fn logging_config(args: &CliArgs, config: &ConverterConfig) -> LoggingConfig {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        parse_level(&config.log_level)
    };

    LoggingConfig {
        level,
        use_json: config.log_json,
    }
}
