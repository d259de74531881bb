use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use portfolio::{SiteConfig, links, logging};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Single-page developer portfolio with a starfield hero")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Site config merged over the built-in content
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Directory that download links resolve against
    #[arg(long, value_name = "DIR", global = true)]
    site_root: Option<PathBuf>,

    /// Skip the 3D star field behind the hero
    #[arg(long)]
    no_background: bool,

    /// Seed for the star field layout
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the config and check that every download exists
    Check,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init_logging(args.verbose);

    let mut config = SiteConfig::load(args.config.as_deref()).context("failed to load site config")?;
    if let Some(root) = args.site_root {
        config = config.with_site_root(root);
    }

    match args.command {
        Some(Command::Check) => check(&config),
        None => {
            if let Some(seed) = args.seed {
                config = config.with_seed(seed);
            }
            if args.no_background {
                config = config.without_background();
            }
            for problem in links::check_assets(&config.content, &config.site_root) {
                tracing::warn!(%problem, "download link will fail");
            }
            run(config)
        }
    }
}

fn check(config: &SiteConfig) -> anyhow::Result<()> {
    let problems = links::check_assets(&config.content, &config.site_root);
    for problem in &problems {
        tracing::error!(%problem, "asset check failed");
    }
    if !problems.is_empty() {
        anyhow::bail!("{} download asset(s) missing", problems.len());
    }

    let content = &config.content;
    println!(
        "config ok: {} links, {} projects, {} skills, site root {}",
        content.links.len(),
        content.projects.len(),
        content.skills.len(),
        config.site_root.display()
    );
    Ok(())
}

#[cfg(feature = "gui")]
fn run(config: SiteConfig) -> anyhow::Result<()> {
    portfolio::gui::run(config).context("window closed with an error")
}

#[cfg(not(feature = "gui"))]
fn run(_config: SiteConfig) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; only `portfolio check` is available")
}
