//! bim-meta - Bulk image metadata cleaner
//!
//! Command-line host for the metadata normalizer. Each subcommand maps onto one
//! processing mode:
//! - `missing`  -> REPORT_MISSING
//! - `current`  -> REPORT_ALL
//! - `proposed` -> REPORT_PROPOSED
//! - `commit`   -> COMMIT
//!
//! The report goes to stdout, logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bim_common::config::{load_toml_config_or_default, RootFolderInitializer, RootFolderResolver};
use bim_meta::config::{apply_cli_overrides, resolve_commit_policy};
use bim_meta::models::BatchSummary;
use bim_meta::render::{render_json, render_text, OutputFormat};
use bim_meta::{BatchProcessor, ReportMode, SqliteAttachmentStore};

/// Command-line arguments for bim-meta
#[derive(Parser, Debug)]
#[command(name = "bim-meta")]
#[command(about = "Bulk-edit image attachment alt text, titles and descriptions")]
#[command(version)]
struct Args {
    /// Root folder holding the attachment database
    #[arg(short, long, global = true)]
    root_folder: Option<PathBuf>,

    /// Database file (defaults to <root folder>/bim.db)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// TOML config file (defaults to the platform config dir)
    #[arg(short, long, global = true, env = "BIM_CONFIG")]
    config: Option<PathBuf>,

    /// Report output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List attachments missing alt text or caption
    Missing,
    /// List every attachment with its current metadata
    Current,
    /// List current metadata next to the cleaned and inferred values
    Proposed,
    /// Write cleaned titles and inferred alt text to every attachment
    Commit {
        /// Leave descriptions untouched
        #[arg(long)]
        keep_description: bool,

        /// Also write the inferred alt text into captions
        #[arg(long)]
        overwrite_caption: bool,
    },
}

impl Command {
    fn mode(&self) -> ReportMode {
        match self {
            Command::Missing => ReportMode::ReportMissing,
            Command::Current => ReportMode::ReportAll,
            Command::Proposed => ReportMode::ReportProposed,
            Command::Commit { .. } => ReportMode::Commit,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing init so its log level can apply
    let (toml_config, config_error) = load_toml_config_or_default(args.config.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&toml_config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting bim-meta v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    if let Some(e) = config_error {
        warn!("{} - using compiled defaults", e);
    }

    // Root folder: CLI > BIM_ROOT_FOLDER > TOML > compiled default
    let root_folder = RootFolderResolver::new()
        .with_cli_arg(args.root_folder.clone())
        .with_toml_config(&toml_config)
        .resolve();

    let db_path = match &args.database {
        Some(path) => path.clone(),
        None => {
            let initializer = RootFolderInitializer::new(root_folder);
            initializer
                .ensure_directory_exists()
                .context("Failed to initialize root folder")?;
            initializer.database_path()
        }
    };
    info!("Database: {}", db_path.display());

    let pool = bim_common::db::init_database(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;
    let store = SqliteAttachmentStore::new(pool);

    let mut policy = resolve_commit_policy(&toml_config);
    if let Command::Commit {
        keep_description,
        overwrite_caption,
    } = &args.command
    {
        policy = apply_cli_overrides(policy, *keep_description, *overwrite_caption);
    }

    let mode = args.command.mode();
    let entries = BatchProcessor::new(&store)
        .with_policy(policy)
        .run(mode)
        .await
        .context("Failed to enumerate attachments")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            render_text(&mut out, &entries)?;
            writeln!(out, "Summary: {}", BatchSummary::from_entries(&entries))?;
        }
        OutputFormat::Json => render_json(&mut out, mode, &entries)?,
    }
    out.flush()?;

    Ok(())
}
