//! dicfg - layered configuration reader
//!
//! Entry point for the dicfg CLI application.

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dicfg::cli::Cli;
use dicfg::error::{exit_code, DicfgError};
use dicfg::output::render;
use dicfg::reader::ConfigReaderBuilder;
use dicfg::settings::{generate_example_settings, load_settings, Settings};
use dicfg::UserConfig;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            if let Some(dicfg_err) = err.downcast_ref::<DicfgError>() {
                eprintln!("Error: {dicfg_err}");
                return ExitCode::from(dicfg_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn init_tracing(debug: bool) {
    // The default level only applies when RUST_LOG is unset
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .try_init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.example_settings {
        print!("{}", generate_example_settings());
        return Ok(exit_code::SUCCESS);
    }

    init_tracing(cli.debug);
    debug!(version = env!("CARGO_PKG_VERSION"), "dicfg starting");

    let Some(name) = cli.name.as_deref() else {
        anyhow::bail!("A reader name is required");
    };

    let settings = if cli.no_settings {
        Settings::default()
    } else {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        load_settings(cli.settings.as_deref(), &cwd)?
    };
    debug!(?settings, "resolved settings");

    let reader = ConfigReaderBuilder::from(cli.reader_options(name, &settings)).build()?;
    let user_config = UserConfig::from(cli.user_config.clone());
    let merged = reader.read(user_config, &cli.presets, &cli.overrides)?;

    let value = match &cli.get {
        Some(path) => merged
            .get_path(path)
            .cloned()
            .with_context(|| format!("No value at '{path}' in the config for '{name}'"))?,
        None => merged.into_value(),
    };

    let format = cli.output_format(&settings);
    let text = render(&value, format, cli.pretty(&settings))
        .with_context(|| format!("Failed to render output as {}", format.name()))?;
    println!("{text}");

    Ok(exit_code::SUCCESS)
}
