use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use variant_registry::videos::writer;
use variant_registry::{
    base_variant, is_960, variant_key, GameStatus, PairingSystem, Registry, TournamentStatus,
    Video, VideoCatalog, VideoTarget,
};

#[derive(Parser)]
#[command(name = "variant-registry")]
#[command(about = "Inspect the chess variant, status and video vocabulary", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported variants in menu order
    Variants {
        /// Only list the grand family
        #[arg(long)]
        grand: bool,
    },

    /// Show everything known about one variant
    Show {
        /// Variant key (e.g. capahouse960)
        variant: String,
    },

    /// Print game and tournament status codes
    Statuses,

    /// Check the registry tables and the video catalog
    Validate,

    /// List catalog videos
    Videos {
        /// Only videos with this tag (case-sensitive)
        #[arg(long)]
        tag: Option<String>,

        /// Only videos for this level: beginner, intermediate or advanced
        #[arg(long)]
        target: Option<String>,

        /// Write the listing to a CSV file instead of stdout
        #[arg(short, long, env = "VARIANT_REGISTRY_VIDEOS_CSV")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Build explicitly so broken tables surface as an error, not a panic
    let registry = Registry::new().context("Variant registry failed validation")?;

    match cli.command {
        Commands::Variants { grand } => {
            list_variants(&registry, grand)?;
        }
        Commands::Show { variant } => {
            show(&registry, &variant)?;
        }
        Commands::Statuses => {
            statuses();
        }
        Commands::Validate => {
            validate(&registry)?;
        }
        Commands::Videos {
            tag,
            target,
            output,
        } => {
            videos(tag.as_deref(), target.as_deref(), output.as_ref())?;
        }
    }

    Ok(())
}

fn list_variants(registry: &Registry, grand: bool) -> Result<()> {
    let keys = if grand {
        registry.grands()
    } else {
        registry.variants()
    };

    for &key in keys {
        let info = registry.variant(key)?;
        println!(
            "{:<2} {:<14} {:<14} {}",
            info.icon, info.key, info.display_name, info.pgn_alias
        );
    }
    println!();
    println!("{} variants", keys.len());
    Ok(())
}

fn show(registry: &Registry, key: &str) -> Result<()> {
    if !registry.is_supported(key) && registry.is_importable(key) {
        anyhow::bail!("{} can be imported but is not offered for play", key);
    }
    let info = registry
        .variant(key)
        .with_context(|| format!("Cannot show variant '{}'", key))?;

    println!("Variant: {}", info.key);
    println!("  Name: {}", info.display_name);
    println!("  Icon: {}", info.icon);
    println!("  PGN: {}", info.pgn_alias);
    println!("  Grand family: {}", if info.grand { "yes" } else { "no" });

    let partner = if is_960(key) {
        base_variant(key).to_string()
    } else {
        variant_key(key, true)
    };
    if registry.is_supported(&partner) {
        println!("  Counterpart: {}", partner);
    }
    Ok(())
}

fn statuses() {
    println!("Game status:");
    for status in GameStatus::all() {
        let state = if status.is_over() { "over" } else { "live" };
        println!("  {:>3}  {:<14} {}", status.code(), status.name(), state);
    }
    println!();

    println!("Tournament status:");
    for status in TournamentStatus::all() {
        println!("  {:>3}  {}", status.code(), status.name());
    }
    println!();

    println!("Pairing systems:");
    for system in PairingSystem::all() {
        println!("  {:>3}  {}", system.code(), system);
    }
}

fn validate(registry: &Registry) -> Result<()> {
    registry.validate()?;
    println!("Registry is valid");
    println!("  {} variants", registry.variants().len());
    println!("  {} grand-family variants", registry.grands().len());
    println!("  {} loss reasons", registry.loss_reasons().count());

    let catalog = VideoCatalog::builtin();
    let undeclared = catalog.undeclared_tags();
    let bad_durations: Vec<&Video> = catalog
        .videos()
        .iter()
        .filter(|v| v.duration_secs().is_err())
        .collect();

    println!("Video catalog: {} entries", catalog.len());
    if undeclared.is_empty() && bad_durations.is_empty() {
        println!("  No issues found");
    } else {
        println!("  Issues found:");
        for tag in undeclared {
            println!("    - undeclared tag '{}'", tag);
        }
        for video in bad_durations {
            println!("    - {}: bad duration '{}'", video.id, video.duration);
        }
    }
    Ok(())
}

fn videos(tag: Option<&str>, target: Option<&str>, output: Option<&PathBuf>) -> Result<()> {
    let catalog = VideoCatalog::builtin();
    let target: Option<VideoTarget> = target
        .map(|t| t.parse::<VideoTarget>())
        .transpose()
        .context("Invalid --target")?;

    let mut selected: Vec<&Video> = match tag {
        Some(tag) => catalog.filter_by_tag(tag),
        None => catalog.videos().iter().collect(),
    };
    if let Some(target) = target {
        selected.retain(|v| v.target == target);
    }

    if let Some(path) = output {
        writer::write_videos_csv(&selected, path).context("Failed to write CSV file")?;
        println!("Wrote {} videos to {}", selected.len(), path.display());
        return Ok(());
    }

    for video in &selected {
        println!(
            "{}  {:<8} {:>8}  {} ({})",
            video.id,
            video.target.name(),
            video.duration,
            video.title,
            video.author
        );
        println!("    {}", video.tags.join(", "));
    }
    println!();
    println!("{} videos", selected.len());
    Ok(())
}
