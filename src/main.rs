//! swshtools CLI - Command-line tool for Pokémon Sword/Shield data tables.
//!
//! This is the main entry point for the swshtools command-line application.

mod json;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use swsh::prelude::*;

use crate::json::InlineFormatter;

/// swshtools - Pokémon Sword/Shield binary table converter
#[derive(Parser)]
#[command(name = "swshtools")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the enumeration registry
    #[arg(long, global = true, env = "SWSH_CONSTANTS", default_value = "constants.json")]
    constants: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump personal_total.bin to JSON
    Upersonal {
        /// Input binary file
        in_path: PathBuf,
        /// Output JSON file
        out_path: PathBuf,
    },

    /// Dump wazaoboe_total.bin to JSON
    Uwazaoboe {
        /// Input binary file
        in_path: PathBuf,
        /// Output JSON file
        out_path: PathBuf,
    },

    /// Dump pokecaplist.bin to JSON
    Upokecaplist {
        /// Input binary file
        in_path: PathBuf,
        /// Output JSON file
        out_path: PathBuf,
    },

    /// Pack personal JSON back to binary
    Ppersonal {
        /// Input JSON file
        in_path: PathBuf,
        /// Output binary file
        out_path: PathBuf,
    },

    /// Pack level-up learnset JSON back to binary
    Pwazaoboe {
        /// Input JSON file
        in_path: PathBuf,
        /// Output binary file
        out_path: PathBuf,
    },

    /// Pack icon list JSON back to binary
    Ppokecaplist {
        /// Input JSON file
        in_path: PathBuf,
        /// Output binary file
        out_path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = Registry::load(&cli.constants)
        .with_context(|| format!("Failed to load constants from {}", cli.constants.display()))?;

    let start = Instant::now();
    match &cli.command {
        Commands::Upersonal { in_path, out_path } => cmd_upersonal(&registry, in_path, out_path)?,
        Commands::Uwazaoboe { in_path, out_path } => cmd_uwazaoboe(&registry, in_path, out_path)?,
        Commands::Upokecaplist { in_path, out_path } => {
            cmd_upokecaplist(&registry, in_path, out_path)?
        }
        Commands::Ppersonal { in_path, out_path } => cmd_ppersonal(&registry, in_path, out_path)?,
        Commands::Pwazaoboe { in_path, out_path } => cmd_pwazaoboe(&registry, in_path, out_path)?,
        Commands::Ppokecaplist { in_path, out_path } => {
            cmd_ppokecaplist(&registry, in_path, out_path)?
        }
    }
    tracing::debug!(elapsed = ?start.elapsed(), "done");

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_binary(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn cmd_upersonal(registry: &Registry, in_path: &Path, out_path: &Path) -> Result<()> {
    let data = read_binary(in_path)?;
    let table = PersonalTable::unpack(&data, registry).context("Failed to decode personal table")?;
    let text = json::to_string(&table, InlineFormatter::pretty())?;
    json::write_output(out_path, text)?;

    tracing::info!("Dumped {} personal entries to {}", table.len(), out_path.display());
    Ok(())
}

fn cmd_uwazaoboe(registry: &Registry, in_path: &Path, out_path: &Path) -> Result<()> {
    let data = read_binary(in_path)?;
    let table = LearnsetTable::unpack(&data, registry).context("Failed to decode learnset table")?;
    let text = json::to_string(&table, InlineFormatter::inline_from(3))?;
    json::write_output(out_path, text)?;

    tracing::info!("Dumped {} learnsets to {}", table.len(), out_path.display());
    Ok(())
}

fn cmd_upokecaplist(registry: &Registry, in_path: &Path, out_path: &Path) -> Result<()> {
    let data = read_binary(in_path)?;
    let list = IconList::unpack(&data, registry).context("Failed to decode icon list")?;
    let text = json::to_string(&list, InlineFormatter::pretty())?;
    json::write_output(out_path, text)?;

    tracing::info!("Dumped {} icon entries to {}", list.len(), out_path.display());
    Ok(())
}

fn cmd_ppersonal(registry: &Registry, in_path: &Path, out_path: &Path) -> Result<()> {
    let table: PersonalTable = json::read_json(in_path)?;
    let data = table.pack(registry).context("Failed to encode personal table")?;
    json::write_output(out_path, &data)?;

    tracing::info!(
        "Packed {} personal entries ({} bytes) to {}",
        table.len(),
        data.len(),
        out_path.display()
    );
    Ok(())
}

fn cmd_pwazaoboe(registry: &Registry, in_path: &Path, out_path: &Path) -> Result<()> {
    let table: LearnsetTable = json::read_json(in_path)?;
    let packed = table.pack(registry).context("Failed to encode learnset table")?;
    json::write_output(out_path, &packed.data)?;

    tracing::info!(
        "Packed {} learnsets ({} bytes, {} truncated) to {}",
        table.len(),
        packed.data.len(),
        packed.warnings.len(),
        out_path.display()
    );
    Ok(())
}

fn cmd_ppokecaplist(registry: &Registry, in_path: &Path, out_path: &Path) -> Result<()> {
    let list: IconList = json::read_json(in_path)?;
    let data = list.pack(registry).context("Failed to encode icon list")?;
    json::write_output(out_path, &data)?;

    tracing::info!("Packed {} icon entries ({} bytes) to {}", list.len(), data.len(), out_path.display());
    Ok(())
}
