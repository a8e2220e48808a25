// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> Command Dispatch
//!   Version | Tag | Readme | Settings
//! ```

use std::process::ExitCode;

use ds_release::cli::global::GlobalOptions;
use ds_release::cli::{self, Command};
use ds_release::cmd::config::run_settings_command;
use ds_release::cmd::readme::run_readme_command;
use ds_release::cmd::tag::run_tag_command;
use ds_release::config::Settings;
use ds_release::logging::init_logging;
use ds_release::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global.log_level.unwrap_or(LogLevel::INFO);
    let file_level = global.file_log_level.unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Tag(args)) => match load_settings(&cli.global) {
            Ok(settings) => run_tag_command(args, &settings).await,
            Err(e) => Err(e),
        },
        Some(Command::Readme(args)) => match load_settings(&cli.global) {
            Ok(settings) => run_readme_command(args, &settings, cli.global.dry)
                .await
                .map(|_| ()),
            Err(e) => Err(e),
        },
        Some(Command::Settings(args)) => cli.global.config_loader().and_then(|loader| {
            let files = loader.format_loaded_files();
            let settings = loader.build()?;
            run_settings_command(args, &settings, &files)
        }),
        None => Err(anyhow::anyhow!(
            "no command specified, use --help for usage information"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn load_settings(global: &GlobalOptions) -> ds_release::error::Result<Settings> {
    global.config_loader()?.build()
}
