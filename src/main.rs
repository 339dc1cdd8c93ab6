use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{FileConfig, PatchConfig};
use crate::patcher::Patcher;
use crate::types::{PatchOutcome, PatchReport};

mod config;
mod error;
mod patcher;
mod tools;
mod types;
mod utils;

#[cfg(test)]
mod tests;

/// Exit status for unusable flags or configuration, matching clap's usage errors.
const EXIT_USAGE: u8 = 2;

/// Register a source file in an Xcode project manifest next to an existing file.
#[derive(Parser, Debug)]
#[command(name = "xcode-add-file", version, long_about = None)]
struct Cli {
    /// Path to the project.pbxproj file
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Existing file whose entries mark the insertion points
    #[arg(long, value_name = "NAME")]
    anchor: Option<String>,

    /// File to add to the project
    #[arg(long, value_name = "NAME")]
    target: Option<String>,

    /// TOML file with manifest_path, anchor_file_name and target_file_name
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Check and show the new entries without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print a JSON report instead of status lines
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_config(cli: &Cli) -> Result<PatchConfig> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let overrides = FileConfig {
        manifest_path: cli.manifest.clone(),
        anchor_file_name: cli.anchor.clone(),
        target_file_name: cli.target.clone(),
    };
    Ok(PatchConfig::resolve(file, overrides)?)
}

fn execute(cli: &Cli, patcher: &Patcher) -> Result<()> {
    let config = patcher.config();
    let result = if cli.dry_run {
        patcher.dry_run()
    } else {
        patcher.run()
    };
    let outcome = result
        .with_context(|| format!("failed to add {} to Xcode project", config.target_file_name))?;

    if cli.json {
        let report = build_report(config, &outcome);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_status(config, &outcome);
    }
    Ok(())
}

fn print_status(config: &PatchConfig, outcome: &PatchOutcome) {
    let target = &config.target_file_name;
    match outcome {
        PatchOutcome::AlreadyPresent => {
            println!("\u{001b}[93m⚠️  {} already in project\u{001b}[0m", target);
        }
        PatchOutcome::Added { entry, backup } => {
            println!("Generated UUIDs:");
            println!("  FILE_REF: {}", entry.file_ref);
            println!("  BUILD_FILE: {}", entry.build_file);
            println!(
                "\u{001b}[92m✅ Backed up project file to {}\u{001b}[0m",
                backup.display()
            );
            println!("\u{001b}[92m✅ Added {} to Xcode project\u{001b}[0m", target);
        }
        PatchOutcome::WouldAdd { entry, lines } => {
            println!("Generated UUIDs:");
            println!("  FILE_REF: {}", entry.file_ref);
            println!("  BUILD_FILE: {}", entry.build_file);
            utils::display_inserted_lines(lines);
            println!(
                "\u{001b}[94mDry run: {} not modified\u{001b}[0m",
                config.manifest_path.display()
            );
        }
    }
}

fn build_report(config: &PatchConfig, outcome: &PatchOutcome) -> PatchReport {
    let (label, entry, backup) = match outcome {
        PatchOutcome::AlreadyPresent => ("already_present", None, None),
        PatchOutcome::Added { entry, backup } => ("added", Some(entry), Some(backup.clone())),
        PatchOutcome::WouldAdd { entry, .. } => ("would_add", Some(entry), None),
    };
    PatchReport {
        manifest: config.manifest_path.clone(),
        anchor: config.anchor_file_name.clone(),
        target: config.target_file_name.clone(),
        outcome: label,
        file_ref: entry.map(|e| e.file_ref.clone()),
        build_file: entry.map(|e| e.build_file.clone()),
        backup,
        finished_at: Utc::now(),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\u{001b}[91m❌ Error: {:#}\u{001b}[0m", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };
    tracing::debug!(?config, "resolved configuration");

    let patcher = Patcher::new(config);
    match execute(&cli, &patcher) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\u{001b}[91m❌ Error: {:#}\u{001b}[0m", e);
            ExitCode::FAILURE
        }
    }
}
