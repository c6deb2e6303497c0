// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Build | Create | Pack | Push | Options | Version
//! Exit codes: 0 ok, tool code for build/pack/push, 2 usage, 1 runtime
//! ```

use std::process::ExitCode;

use uget_rs::cli::{self, Command};
use uget_rs::cmd::build::run_build_command;
use uget_rs::cmd::config::{resolve_config, run_options_command};
use uget_rs::cmd::create::run_create_command;
use uget_rs::cmd::exit_code_for_error;
use uget_rs::cmd::pack::run_pack_command;
use uget_rs::cmd::push::run_push_command;
use uget_rs::config::{Config, types::GlobalConfig};
use uget_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let config = match resolve_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_log_config(global: &GlobalConfig) -> LogConfig {
    let log_file = (!global.log_file.as_os_str().is_empty())
        .then(|| global.log_file.display().to_string());

    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(log_file)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => unreachable!("handled before dispatch"),
        Some(Command::Options) => {
            run_options_command(config);
            Ok(0)
        }
        Some(Command::Build(args)) => run_build_command(args, config).await,
        Some(Command::Create(args)) => run_create_command(args, config).await,
        Some(Command::Pack(args)) => run_pack_command(args, config).await,
        Some(Command::Push(args)) => run_push_command(args, config).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::from(uget_rs::error::USAGE_EXIT_CODE);
        }
    };

    match result {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code_for_error(&e))
        }
    }
}
