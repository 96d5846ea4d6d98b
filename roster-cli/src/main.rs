//! `roster`: inspect records, column configs and validators from the shell.

mod cli;
mod commands;
mod error;
mod paths;
mod render;
mod settings;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::cli::{Cli, Cmd};
use crate::commands::crud::Target;
use crate::error::CliError;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let CliError::Invalid { report, .. } = &e {
                print!("{}", report);
            }
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Log to the rotated `latest.log`; without a cache dir, run unlogged.
fn init_logging() {
    paths::rotate_logs();
    let Some(log_path) = paths::log_file() else {
        return;
    };
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(log_file) = File::create(&log_path) else {
        return;
    };
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    log::info!("roster {} starting", env!("CARGO_PKG_VERSION"));
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let settings = Settings::load(cli.global.config.as_ref())?.apply(&cli.global);

    match cli.cmd {
        Cmd::Table(args) => commands::table::run(&args, &settings),
        Cmd::CheckId { ids } => commands::check_id::run(&ids).await,
        Cmd::Validate { form } => commands::validate::run(&form).await,
        Cmd::Link { resource, id, action } => {
            let target = Target {
                resource,
                id,
                name: None,
                entity: "Record".into(),
            };
            commands::crud::link(&target, action, &settings)
        }
        Cmd::Delete {
            resource,
            id,
            name,
            entity,
            yes,
            native_methods,
        } => {
            let backend = commands::crud::backend(&settings, &resource, native_methods)?;
            let target = Target {
                resource,
                id,
                name,
                entity,
            };
            commands::crud::delete(&target, backend, commands::crud::prompt(yes)).await
        }
    }
}
