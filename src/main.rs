//! Link Validator main entry point
//!
//! This is the command-line interface for the link validator. Every option can
//! also be given as a GitHub Actions input through its `INPUT_*` variable.

use clap::Parser;
use link_validator::config::{
    compute_config_hash, read_config, validate, Config, ConfigOverrides, DiscoverySource,
};
use link_validator::output::{print_report, write_github_outputs, Report};
use link_validator::{Crawler, LinkChecker, LinkError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Link Validator: find broken links on a website
///
/// URLs are discovered from an XML sitemap or by crawling same-host links
/// from a base URL, then checked with bounded concurrency. Command-line flags
/// take precedence over environment variables, which take precedence over the
/// configuration file.
#[derive(Parser, Debug)]
#[command(name = "link-validator")]
#[command(version)]
#[command(about = "Checks a website for broken links", long_about = None)]
#[command(after_help = EXIT_STATUS_HELP)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL of the sitemap to check (alternative to --base-url)
    #[arg(long, env = "INPUT_SITEMAP_URL")]
    sitemap_url: Option<String>,

    /// Base URL to start crawling from (alternative to --sitemap-url)
    #[arg(long, env = "INPUT_BASE_URL")]
    base_url: Option<String>,

    /// Maximum crawl depth
    #[arg(long, env = "INPUT_MAX_DEPTH")]
    max_depth: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, env = "INPUT_TIMEOUT")]
    timeout: Option<u64>,

    /// User agent string
    #[arg(long, env = "INPUT_USER_AGENT")]
    user_agent: Option<String>,

    /// Comma-separated regex patterns to exclude URLs
    #[arg(long, env = "INPUT_EXCLUDE_PATTERNS", value_delimiter = ',')]
    exclude_patterns: Option<Vec<String>>,

    /// Exit with an error code if broken links are found
    #[arg(long, env = "INPUT_FAIL_ON_ERROR", num_args = 0..=1, default_missing_value = "true")]
    fail_on_error: Option<bool>,

    /// Maximum concurrent requests
    #[arg(long, env = "INPUT_MAX_CONCURRENT")]
    max_concurrent: Option<usize>,

    /// Enable verbose output
    #[arg(long, env = "INPUT_VERBOSE", num_args = 0..=1, default_missing_value = "true")]
    verbose: Option<bool>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbosity")]
    quiet: bool,

    /// Print results as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            sitemap_url: self.sitemap_url.clone(),
            base_url: self.base_url.clone(),
            max_depth: self.max_depth,
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
            exclude_patterns: self.exclude_patterns.clone(),
            fail_on_error: self.fail_on_error,
            max_concurrent: self.max_concurrent,
            verbose: self.verbose,
        }
    }
}

const EXIT_BROKEN_LINKS: u8 = 1;
const EXIT_ERROR: u8 = 2;

const EXIT_STATUS_HELP: &str = "\
A link is broken when it answers with status 400 or above, or when no response
arrives at all (reported as status 0: timeouts, DNS or connection failures).

Exit status:
  0  no broken links, or broken links with --fail-on-error false
  1  broken links found and --fail-on-error is set (the default)
  2  configuration, sitemap or crawl error";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet
            eprintln!("Error: {}", e);
            eprintln!("\nUse --help for usage information.");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Setup logging based on verbosity
    let verbosity = if config.verbose {
        cli.verbosity.max(1)
    } else {
        cli.verbosity
    };
    setup_logging(verbosity, cli.quiet);

    if let Some(path) = &cli.config {
        match compute_config_hash(path) {
            Ok(hash) => tracing::info!("Configuration loaded from {} (hash: {})", path.display(), hash),
            Err(e) => tracing::warn!("Could not hash {}: {}", path.display(), e),
        }
    }

    match run(&config, cli.json).await {
        Ok(report) if report.has_broken_links() && config.fail_on_error => {
            ExitCode::from(EXIT_BROKEN_LINKS)
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Layers file, environment and flag values, then validates the result
fn build_config(cli: &Cli) -> Result<Config, LinkError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };
    config.apply(cli.overrides());
    validate(&config)?;
    Ok(config)
}

/// Discovers URLs, checks them and publishes the report
async fn run(config: &Config, json: bool) -> Result<Report, LinkError> {
    let crawler = Crawler::new(config)?;

    let urls = match config.discovery_source() {
        Some(DiscoverySource::Sitemap(url)) => {
            tracing::info!("Fetching URLs from sitemap: {}", url);
            crawler.get_urls_from_sitemap(&url).await?
        }
        Some(DiscoverySource::Crawl(url)) => {
            tracing::info!("Crawling website starting from: {}", url);
            crawler.crawl_website(&url, config.max_depth).await?
        }
        None => {
            return Err(link_validator::ConfigError::Validation(
                "either sitemap-url or base-url must be provided".to_string(),
            )
            .into())
        }
    };
    tracing::info!("Found {} URLs to check", urls.len());

    let checker = LinkChecker::new(config)?;
    let results = checker.check_links(&urls).await;
    let report = Report::from_results(&results);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_report(&report);
    }

    if let Err(e) = write_github_outputs(&report) {
        tracing::warn!("Failed to write GitHub outputs: {}", e);
    }

    Ok(report)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_validator=info,warn"),
            1 => EnvFilter::new("link_validator=debug,info"),
            2 => EnvFilter::new("link_validator=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
