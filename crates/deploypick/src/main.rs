//! Deploypick - analyze a project and recommend where to deploy it.

mod output;
mod scan;
mod server;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use deploypick_schema::{validate_catalog, ProjectFile, RecommendationReport};
use deploypick_selector::{builtin_catalog, document::read_document, load_catalog};
use deploypick_selector::{Selector, SelectorConfig};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "deploypick")]
#[command(
    author,
    version,
    about = "Analyze a project's files and recommend a hosting platform"
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Selector configuration file (YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Platform catalog file (YAML or JSON), replaces the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Where the project's file list comes from.
#[derive(Args)]
struct ProjectSource {
    /// Project directory to scan
    #[arg(long, conflicts_with = "files", required_unless_present = "files")]
    dir: Option<PathBuf>,

    /// File list (JSON or YAML array of {name, size, content?}, or a {files: [...]} body)
    #[arg(long)]
    files: Option<PathBuf>,

    /// Largest file whose content is read during a directory scan
    #[arg(long, default_value_t = scan::DEFAULT_MAX_CONTENT_BYTES)]
    max_content_bytes: u64,

    /// List names and sizes only, without reading file contents
    #[arg(long)]
    no_content: bool,
}

impl ProjectSource {
    fn load(&self) -> Result<Vec<ProjectFile>> {
        match (&self.dir, &self.files) {
            (Some(dir), _) => {
                let options = scan::ScanOptions {
                    max_content_bytes: self.max_content_bytes,
                    read_content: !self.no_content,
                    ..Default::default()
                };
                scan::scan_directory(dir, &options)
                    .with_context(|| format!("Failed to scan {}", dir.display()))
            }
            (None, Some(path)) => scan::load_file_list(path)
                .with_context(|| format!("Failed to load file list {}", path.display())),
            (None, None) => anyhow::bail!("Either --dir or --files is required"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a project and rank hosting platforms
    Recommend {
        #[command(flatten)]
        source: ProjectSource,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Number of platforms to show (overrides the config file)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Print the project analysis as JSON
    Analyze {
        #[command(flatten)]
        source: ProjectSource,
    },

    /// List the active platform catalog
    Catalog {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a catalog file against the catalog schema
    ValidateCatalog {
        /// Catalog file path
        path: PathBuf,
    },

    /// Serve the selector over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
}

fn build_selector(config_path: Option<&Path>, catalog_path: Option<&Path>) -> Result<Selector> {
    let config = match config_path {
        Some(path) => SelectorConfig::from_file(path)?,
        None => SelectorConfig::default(),
    };
    let catalog = match catalog_path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => builtin_catalog(),
    };
    Ok(Selector::new(config, catalog))
}

/// Print a recommendation for `source`.
///
/// `top` overrides the configured `top_n`. Fails after printing when the
/// catalog has no platform to recommend.
fn run_recommend(
    mut selector: Selector,
    source: &ProjectSource,
    format: OutputFormat,
    top: Option<usize>,
) -> Result<()> {
    if let Some(top_n) = top {
        let mut config = selector.config().clone();
        config.top_n = top_n;
        config.validate()?;
        selector = Selector::new(config, selector.catalog().to_vec());
    }

    let files = source.load()?;
    info!("Analyzing {} files", files.len());
    let recommendation = selector.recommend(&files);
    let has_platform = recommendation.best_platform.is_some();

    match format {
        OutputFormat::Json => {
            let report = RecommendationReport::new(recommendation);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            let mut text = String::new();
            output::render_recommendation(&mut text, &recommendation)?;
            print!("{}", text);
        }
    }

    if !has_platform {
        anyhow::bail!("No platform available: the catalog is empty");
    }
    Ok(())
}

fn validate_catalog_file(path: &Path) -> Result<()> {
    let value: serde_json::Value =
        read_document(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let result = validate_catalog(&value)?;

    for warning in &result.warnings {
        println!("warning: {}", warning);
    }

    if result.valid {
        println!("Catalog is valid.");
        Ok(())
    } else {
        println!("Catalog problems:");
        for message in result.messages() {
            println!("  - {}", message);
        }
        anyhow::bail!("{} problems found in {}", result.errors.len(), path.display())
    }
}

/// Install the global subscriber. Logs go to stderr; stdout is reserved for
/// command output.
fn init_logging(verbose: bool, format: LogFormat) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_format);

    match cli.command {
        Commands::Recommend {
            source,
            format,
            top,
        } => {
            let selector = build_selector(cli.config.as_deref(), cli.catalog.as_deref())?;
            run_recommend(selector, &source, format, top)?;
        }

        Commands::Analyze { source } => {
            let files = source.load()?;
            let analysis = deploypick_selector::analyze(&files);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }

        Commands::Catalog { format } => {
            let selector = build_selector(cli.config.as_deref(), cli.catalog.as_deref())?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(selector.catalog())?);
                }
                OutputFormat::Text => {
                    let mut text = String::new();
                    output::render_catalog(&mut text, selector.catalog())?;
                    print!("{}", text);
                }
            }
        }

        Commands::ValidateCatalog { path } => {
            info!("Validating catalog: {}", path.display());
            validate_catalog_file(&path)?;
        }

        Commands::Serve { bind } => {
            let selector = build_selector(cli.config.as_deref(), cli.catalog.as_deref())?;
            info!("Serving {} platforms", selector.catalog().len());
            server::serve(Arc::new(selector), bind).await?;
        }
    }

    Ok(())
}
