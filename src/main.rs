//! Pressroom - build-time page generation for a markdown blog.

mod build;
mod cli;
mod config;
mod filter;
mod generator;
mod graph;
mod logger;
mod page;
mod utils;

use anyhow::{Context, Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use graph::source::load_graph;
use page::RegisteredPages;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { .. } => build_all(&config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found.");
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Load the content graph, run the page-generation pass, and hand the
/// registered descriptors to the manifest.
fn build_all(config: &SiteConfig) -> Result<()> {
    log!("build"; "{} ({})", config.base.title, config.build.mode);

    let graph = load_graph(config)?;

    let mut registered = RegisteredPages::new();
    let summary = build_site(config, &graph, &mut registered)?;

    let manifest = registered
        .write_manifest(config)
        .context("failed to write page manifest")?;

    log!("build"; "{} pages -> {}", summary.total_pages(), manifest.display());
    Ok(())
}
