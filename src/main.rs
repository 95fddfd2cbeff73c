use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use devwrap::github::{DEFAULT_API_BASE, validate_handle};
use devwrap::{Card, ClientConfig, GithubClient, Theme, render_card};

/// Build a developer wrap card from a GitHub account.
#[derive(Parser, Debug)]
#[command(name = "devwrap")]
#[command(version)]
struct Cli {
    /// GitHub handle to look up
    handle: String,

    /// Token sent with every request to raise rate limits
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Calendar year for the commit and pull request searches (default: current year)
    #[arg(long)]
    year: Option<i32>,

    /// Card theme
    #[arg(short, long, value_enum, default_value = "minimal")]
    theme: Theme,

    /// Write one card per theme as devwrap-<handle>-<theme>.svg next to --output
    #[arg(long)]
    all_themes: bool,

    /// Output SVG path (default: devwrap-<handle>.svg)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the fetched profile as JSON instead of rendering a card
    #[arg(long)]
    json: bool,

    /// API base URL
    #[arg(long, env = "DEVWRAP_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        LevelFilter::Error
    } else {
        match cli.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_target(false)
        .format_timestamp(None)
        .init();

    if let Err(err) = run(cli).await {
        log::error!("{err:#}");
        if let Some(e) = err.downcast_ref::<devwrap::Error>() {
            eprintln!("{}", e.user_message());
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::default()
        .with_token(cli.token)
        .with_base_url(cli.api_base);
    if let Some(year) = cli.year {
        config = config.with_year(year);
    }

    let handle = validate_handle(&cli.handle)?;
    let client = GithubClient::new(config);
    let profile = client.fetch_profile(handle).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let mut card = Card::default();
    card.apply_profile(handle, &profile);
    log::info!(
        "{handle} ranks {} (lines of code is an estimate)",
        card.rank()
    );

    if cli.all_themes {
        let dir = cli
            .output
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(Path::new(""));
        for theme in Theme::ALL {
            let path = dir.join(format!("{}-{theme}.svg", card.file_stem()));
            write_card(&card, theme, &path)?;
        }
    } else {
        let path = cli
            .output
            .unwrap_or_else(|| PathBuf::from(format!("{}.svg", card.file_stem())));
        write_card(&card, cli.theme, &path)?;
    }

    Ok(())
}

fn write_card(card: &Card, theme: Theme, path: &Path) -> anyhow::Result<()> {
    fs::write(path, render_card(card, theme))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated {} ({theme})", path.display());
    Ok(())
}
