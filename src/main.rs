//! DataProcessor: settings bootstrap.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Parse CLI args
//!   3. Load config
//!   4. Resolve effective log level (CLI `-v` flags > env > config)
//!   5. Init logger once
//!   6. Install the process-wide settings
//!   7. Print status and exit

use data_processor::{config, error::AppError, logger, settings};
use tracing::{info, warn};

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present; ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_cli_args()?;

    let config = config::load(args.config_path.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(config.log_level.as_str());
    logger::init(effective_log_level, args.log_level.is_some())?;

    let settings = settings::init(config.settings)?;

    info!(
        app_name = %settings.app_name,
        version = %settings.version,
        port = settings.port,
        log_level = %effective_log_level,
        "settings loaded"
    );
    match &settings.secret_key {
        Some(key) => info!(secret = %key, "secret key present"),
        None => warn!("no secret key in environment; components that sign or verify will refuse to start"),
    }

    if args.json {
        let json = serde_json::to_string_pretty(&settings.summary())
            .map_err(|e| AppError::Config(format!("cannot serialise settings: {e}")))?;
        println!("{json}");
    } else {
        println!(
            "✓ {} v{} ready on port {} (codes: {})",
            settings.app_name,
            settings.version,
            settings.port,
            settings
                .validation_codes_text()
                .unwrap_or_else(|| format!("{:?}", settings.validation_codes)),
        );
    }

    Ok(())
}

fn parse_cli_args() -> Result<CliArgs, AppError> {
    let mut verbosity = 0u8;
    let mut config_path = None;
    let mut json = false;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: data-processor [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --config <PATH>        Path to configuration file (default: {})", config::DEFAULT_CONFIG_PATH);
                println!("      --json                 Print the resolved settings as JSON");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-f" | "--config" => match iter.next() {
                Some(path) => config_path = Some(path),
                None => {
                    return Err(AppError::Config("-f/--config requires a path argument".into()));
                }
            },
            "--json" => json = true,
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a => {
                if let Some(n) = logger::verbosity_of_flag(a) {
                    verbosity = verbosity.saturating_add(n);
                }
            }
        }
    }

    Ok(CliArgs {
        log_level: logger::level_for_verbosity(verbosity),
        config_path,
        json,
    })
}
