// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Versions | VerifyVersions | VerifyBwcTests | BranchConsistency
//!   Metadata | TaskOrder | Ide | Options | Inis
//! ```

use std::process::ExitCode;

use bwc_rs::cli::global::GlobalOptions;
use bwc_rs::cli::{self, Command};
use bwc_rs::cmd::config::{run_inis_command, run_options_command};
use bwc_rs::cmd::ide::run_ide_command;
use bwc_rs::cmd::metadata::run_metadata_command;
use bwc_rs::cmd::order::run_task_order_command;
use bwc_rs::cmd::verify::{
    run_branch_consistency_command, run_verify_bwc_tests_command, run_verify_versions_command,
};
use bwc_rs::cmd::versions::run_versions_command;
use bwc_rs::config::Config;
use bwc_rs::config::loader::ConfigLoader;
use bwc_rs::context::{BuildContext, IdeMode};
use bwc_rs::error::Result;
use bwc_rs::logging::{LogConfig, init_logging};
use bwc_rs::metadata::BuildMetadata;
use bwc_rs::verify::ensure_online;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_CONFIG_FILE: &str = "bwc.toml";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loader = build_config_loader(&cli.global);
    let loaded_files = loader.format_loaded_files();
    let config = apply_overrides(loader, &cli.global).and_then(ConfigLoader::build);

    let log_config = config
        .as_ref()
        .map_or_else(|_| LogConfig::default(), build_log_config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match config {
        Ok(config) => dispatch_command(&cli, config, &loaded_files).await,
        Err(e) => Err(e.context("failed to load config")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_file_format(config.global.log_format)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: Config, loaded_files: &[String]) -> Result<()> {
    let ide = IdeMode::detect(&cli.global.tasks, &cli.global.property_map());

    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(&config);
            Ok(())
        }
        Some(Command::Inis) => {
            run_inis_command(loaded_files);
            Ok(())
        }
        Some(Command::Versions(args)) => {
            let ctx = load_context(config, ide)?;
            run_versions_command(args, &ctx)
        }
        Some(Command::VerifyVersions) => {
            ensure_online(&config)?;
            let ctx = load_context(config, ide)?;
            run_verify_versions_command(&ctx).await
        }
        Some(Command::VerifyBwcTests) => run_verify_bwc_tests_command(&config),
        Some(Command::BranchConsistency) => {
            ensure_online(&config)?;
            let ctx = load_context(config, ide)?;
            run_branch_consistency_command(&ctx).await
        }
        Some(Command::Metadata(args)) => run_metadata_command(args, &BuildMetadata::from_env()?),
        Some(Command::TaskOrder(args)) => run_task_order_command(args, &config),
        Some(Command::Ide) => {
            run_ide_command(ide);
            Ok(())
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn load_context(config: Config, ide: IdeMode) -> Result<BuildContext> {
    let metadata = BuildMetadata::from_env()?;
    BuildContext::load(config, metadata, ide)
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    loader.with_env_prefix("BWC")
}

fn apply_overrides(mut loader: ConfigLoader, global: &GlobalOptions) -> Result<ConfigLoader> {
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    Ok(loader)
}
