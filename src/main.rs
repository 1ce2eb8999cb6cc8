use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use route_finder::{
    config::Config,
    graph::{RouteEvent, RouteFinder},
    loader::EdgeList,
    reports::ReportGenerator,
    types::RouteReport,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "route-finder")]
#[command(about = "Enumerates every simple directed route between two nodes")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route between two nodes
    Routes {
        /// Source node
        #[arg(short, long)]
        from: String,

        /// Target node
        #[arg(short, long)]
        to: String,

        /// Edge list file (.json, .yml, .yaml or .txt)
        #[arg(short, long)]
        edges: Option<PathBuf>,

        /// Output format (text, json, markdown)
        #[arg(short, long)]
        output: Option<String>,

        /// Output file path (defaults to stdout)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Print the edge list as a Graphviz DOT graph
    Dot {
        /// Edge list file (.json, .yml, .yaml or .txt)
        #[arg(short, long)]
        edges: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Configuration file path
        #[arg(short, long, default_value = "route-finder.yml")]
        config_file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref()).await?;
    let log_level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(log_level)?;

    info!("Starting route finder");

    match cli.command {
        Commands::Routes {
            from,
            to,
            edges,
            output,
            output_file,
        } => {
            let edges = resolve_edges(edges, &config)?;
            let format = output.unwrap_or_else(|| config.output.format.clone());
            let output_file = output_file.or_else(|| config.output.output_file.clone());
            find_routes(&edges, from, to, &format, output_file.as_deref()).await?;
        }

        Commands::Dot { edges } => {
            let edges = resolve_edges(edges, &config)?;
            export_dot(&edges)?;
        }

        Commands::Init { config_file, force } => {
            init_config(config_file, force).await?;
        }
    }

    Ok(())
}

/// Initialize tracing with the specified log level
fn init_tracing(log_level: &str) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(log_level))
        .context("Failed to create env filter")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_level(true),
        )
        .with(env_filter)
        .init();

    Ok(())
}

/// Defaults, then the configuration file, then `ROUTE_FINDER_*` environment
/// variables. Command line flags are applied on top by the caller.
async fn load_config(config_path: Option<&PathBuf>) -> Result<Config> {
    // Tracing is not initialized yet, so report a missing file directly.
    if let Some(path) = config_path.filter(|path| !path.exists()) {
        eprintln!("Configuration file not found: {:?}. Using defaults.", path);
    }

    let config = Config::load_layered(config_path)
        .await
        .context("Failed to load configuration")?;

    config.validate()?;
    Ok(config)
}

fn resolve_edges(edges: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    edges
        .or_else(|| config.graph.edges_file.clone())
        .context("No edge list given; pass --edges or set graph.edges_file in the configuration")
}

/// Search the routes and write the report
async fn find_routes(
    edges_path: &Path,
    source: String,
    target: String,
    format: &str,
    output_file: Option<&Path>,
) -> Result<()> {
    let edge_list = EdgeList::load(edges_path)
        .with_context(|| format!("Failed to load edge list: {:?}", edges_path))?;

    info!("Finding routes from {} to {}", source, target);
    let graph = edge_list.graph();
    let mut receiver = graph.routes_between(source.clone(), target.clone()).publish(64);

    let mut routes = Vec::new();
    while let Some(event) = receiver.recv().await {
        match event {
            RouteEvent::Route(route) => {
                debug!("Received route with {} hops", route.hop_count());
                routes.push(route);
            }
            RouteEvent::Completed => {
                info!("Route search completed with {} routes", routes.len());
            }
        }
    }

    if routes.is_empty() {
        warn!("No route from {} to {}", source, target);
    }

    let report = RouteReport::new(source, target, graph.link_count(), routes);
    let content = ReportGenerator::new().generate(&report, format)?;

    if let Some(file_path) = output_file {
        tokio::fs::write(file_path, &content)
            .await
            .with_context(|| format!("Failed to write output to: {:?}", file_path))?;
        info!("Report written to: {:?}", file_path);
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn export_dot(edges_path: &Path) -> Result<()> {
    let edge_list = EdgeList::load(edges_path)
        .with_context(|| format!("Failed to load edge list: {:?}", edges_path))?;

    println!("{}", edge_list.to_dot());
    Ok(())
}

/// Initialize configuration file
async fn init_config(config_file: PathBuf, force: bool) -> Result<()> {
    info!("Initializing configuration file: {:?}", config_file);

    if config_file.exists() && !force {
        warn!("Configuration file already exists: {:?}. Use --force to overwrite.", config_file);
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_file)
        .await
        .with_context(|| format!("Failed to write configuration file: {:?}", config_file))?;

    info!("Configuration file created successfully: {:?}", config_file);
    println!("Configuration file created: {:?}", config_file);
    println!("Set graph.edges_file to the edge list you want to search.");

    Ok(())
}
