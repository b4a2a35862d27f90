use clap::Parser;
use engine::CountdownEngine;
use savedate::app::application_lifecycle::ApplicationLifecycle;
use savedate::app::report::CountdownReport;
use savedate::config::{self, ConfigLoadResult, LoggingConfig, setup};
use savedate::logger;
use std::error::Error as StdError;
use std::path::PathBuf;

/// Terminal save-the-date with a live countdown
#[derive(Parser, Debug)]
#[command(name = "savedate", version, about)]
struct Cli {
    /// Configuration file to use instead of the standard locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the time remaining and exit
    #[arg(long)]
    once: bool,

    /// With --once, print JSON instead of text
    #[arg(long, requires = "once")]
    json: bool,

    /// Write the default configuration and themes to the config directory and exit
    #[arg(long, conflicts_with = "once")]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn StdError>> {
    let cli = Cli::parse();

    if cli.init {
        let dir = setup::initialize_config_dir()?;
        println!("Configuration written to {}", dir.display());
        return Ok(());
    }

    let config_result = config::init_config(cli.config.as_deref());

    let logging = config_result
        .as_config()
        .map(|config| config.logging().clone())
        .unwrap_or_default();
    init_logger(&logging);

    if cli.once {
        return print_once(config_result, cli.json);
    }

    let mut model = ApplicationLifecycle::initialize()?;
    ApplicationLifecycle::setup_terminal(&mut model)?;
    let loop_result = ApplicationLifecycle::run_application_loop(&mut model);
    ApplicationLifecycle::shutdown_application(model).await?;
    loop_result
}

fn init_logger(logging: &LoggingConfig) {
    if let Err(e) = logger::setup_logger(logging) {
        eprintln!("Failed to initialize logger: {e}");
    }
}

fn print_once(config_result: &ConfigLoadResult, json: bool) -> Result<(), Box<dyn StdError>> {
    let config = match config_result {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
            return Err(e.clone().into());
        }
    };

    if let Err(errors) = config.validate() {
        let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
        return Err(messages.join("\n").into());
    }

    let engine = CountdownEngine::with_system_clock(
        config.target()?,
        config.countdown().elapsed_policy(),
    );
    let report = CountdownReport::from_engine(&engine, config.event());

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_text(config.event().labels()));
    }
    Ok(())
}
