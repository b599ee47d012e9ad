use anyhow::{Context, Result};
use clap::Parser;
use kanban_dashboard::source::{BoardSource, FileSource, HttpSource};
use kanban_dashboard::{view, Dashboard, DashboardConfig, Grouping, SortMode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kanban-dashboard")]
#[command(about = "Fetch a kanban board and print it grouped into columns")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board endpoint (overrides the configuration and DASHBOARD_URL)
    #[arg(short, long, conflicts_with = "file")]
    url: Option<String>,

    /// Read the board document from a JSON file instead of the endpoint
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Grouping: status, users, priority
    #[arg(short, long, value_parser = parse_grouping)]
    group: Option<Grouping>,

    /// Ordering inside a column: priority, title
    #[arg(short, long, value_parser = parse_ordering)]
    order: Option<SortMode>,

    /// Print the columns as JSON
    #[arg(long)]
    json: bool,
}

fn parse_grouping(s: &str) -> std::result::Result<Grouping, String> {
    s.parse().map_err(|e: kanban_dashboard::DashboardError| e.to_string())
}

fn parse_ordering(s: &str) -> std::result::Result<SortMode, String> {
    s.parse().map_err(|e: kanban_dashboard::DashboardError| e.to_string())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    let mut config = config.with_env_overrides();

    if let Some(url) = &cli.url {
        config.endpoint = url.clone();
    }
    if let Some(grouping) = cli.group {
        config.grouping = grouping;
    }
    if let Some(ordering) = cli.order {
        config.ordering = ordering;
    }
    Ok(config)
}

async fn show<S: BoardSource>(source: S, config: &DashboardConfig, json: bool) -> Result<()> {
    let mut dashboard = Dashboard::from_config(source, config);
    dashboard.refresh().await;

    if let Some(reason) = &dashboard.state().last_error {
        anyhow::bail!("could not fetch board from {}: {}", dashboard.source().describe(), reason);
    }

    let columns = dashboard.columns();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&columns).context("serializing columns")?
        );
    } else {
        print!("{}", view::render_text(dashboard.state(), &columns));
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    match &cli.file {
        Some(path) => show(FileSource::new(path), &config, cli.json).await,
        None => {
            let source = HttpSource::new(config.endpoint.clone(), config.timeout())
                .context("building HTTP client")?;
            show(source, &config, cli.json).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
