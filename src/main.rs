use anyhow::Context;
use brickset::core::commands;
use brickset::utils::{logger, validation::Validate};
use brickset::{BricksetError, CliConfig, LegoSetRepository, TomlConfig};
use clap::Parser;
use std::io;

fn main() {
    let cli = CliConfig::parse();

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<BricksetError>() {
            Some(err) => {
                tracing::error!(
                    "❌ {} (Category: {:?}, Severity: {:?})",
                    err,
                    err.category(),
                    err.severity()
                );
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let file_config = match &cli.config {
        Some(path) => {
            let mut config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            cli.merge_into(&mut config);
            Some(config)
        }
        None => None,
    };

    let logging = file_config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    if logging.json || cli.log_json {
        logger::init_json_logger(cli.verbose, &logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &logging.level);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let repo = match &file_config {
        Some(config) => {
            config.validate()?;
            LegoSetRepository::from_config(config)?
        }
        None => {
            cli.validate()?;
            LegoSetRepository::from_config(cli)?
        }
    };

    let params = file_config.map(|c| c.report).unwrap_or_default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    commands::execute(&mut out, &repo, &cli.selected_command(), &params, cli.json)?;
    Ok(())
}
