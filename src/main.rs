//! DfAM Stats - Conventional vs. DfAM case-study comparison
//!
//! Prints descriptive statistics and paired t-tests for design iterations,
//! surface roughness and dimensional error, and optionally exports the
//! long-form data behind the three grouped bar charts.
//!
//! # Usage
//!
//! ```bash
//! # Built-in case studies, text report
//! dfam-stats
//!
//! # Custom study, JSON report, chart data into ./charts
//! dfam-stats --config study_config.toml --format json --export-dir charts
//! ```
//!
//! # Environment Variables
//!
//! - `DFAM_CONFIG`: Path to a study config (used when `--config` is absent)
//! - `DFAM_ALPHA`: Significance level override
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use dfam_stats::report::export::export_charts;
use dfam_stats::{render_json, render_text, ComparisonAnalyzer, StudyConfig};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "dfam-stats")]
#[command(about = "Paired statistics for Conventional vs. DfAM case studies")]
#[command(version)]
struct CliArgs {
    /// Study config TOML. Overrides DFAM_CONFIG and ./study_config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Directory for long-form chart CSVs and the charts.json manifest
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Significance level for the paired t-tests (overrides the config)
    #[arg(long, env = "DFAM_ALPHA")]
    alpha: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => StudyConfig::load_from_file(path)
            .with_context(|| format!("Failed to load study config {}", path.display()))?,
        None => StudyConfig::load(),
    };

    let dataset = config.dataset().context("Invalid case-study table")?;
    let alpha = args.alpha.unwrap_or(config.study.significance_level);

    let analyzer = ComparisonAnalyzer::new(alpha)
        .context("Invalid significance level")?
        .with_title(config.study.title.clone());
    let report = analyzer.analyze(&dataset).context("Analysis failed")?;

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => {
            println!("{}", render_json(&report).context("Failed to serialize report")?);
        }
    }

    if let Some(dir) = &args.export_dir {
        let written = export_charts(dir, &dataset)
            .with_context(|| format!("Failed to export chart data to {}", dir.display()))?;
        info!(files = written.len(), dir = %dir.display(), "Chart data exported");
    }

    Ok(())
}
