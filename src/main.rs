//! CLI entry point for the bike-share report.
//!
//! Loads the daily and hourly tables once, then renders one view, every view,
//! or whatever views are typed on stdin.

use anyhow::Result;
use bike_report::{
    config::ReportConfig,
    loader::{Dataset, Logo},
    output::{print_json, print_pretty, write_page},
    shell::{Linking, Shell, View},
};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_LOG_FILE: &str = "logs/bike_report.log";

#[derive(Parser)]
#[command(name = "bike-report")]
#[command(about = "Bike sharing usage report", long_about = None)]
struct Cli {
    /// Daily table (overrides BIKE_DAY_CSV)
    #[arg(long, global = true, value_name = "PATH")]
    day: Option<PathBuf>,

    /// Hourly table (overrides BIKE_HOUR_CSV)
    #[arg(long, global = true, value_name = "PATH")]
    hour: Option<PathBuf>,

    /// Sidebar logo (overrides BIKE_LOGO)
    #[arg(long, global = true, value_name = "PATH")]
    logo: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single view
    Show {
        /// View to render: overview, weather, user-pattern or advanced
        #[arg(short, long, default_value = "overview")]
        view: View,

        /// HTML file to write
        #[arg(short, long, default_value = "report.html")]
        output: PathBuf,

        /// Write the page as HTML, or print the view's numbers as JSON
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Read one view per line from stdin and redraw the page after each
    Browse {
        /// HTML file to redraw
        #[arg(short, long, default_value = "report.html")]
        output: PathBuf,
    },
    /// Render every view into its own page with a linked sidebar
    Site {
        /// Directory for the pages
        #[arg(short = 'd', long, default_value = "report")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    let _log_guard = init_logging()?;

    let cli = Cli::parse();

    let config = ReportConfig::from_env().with_overrides(cli.day, cli.hour, cli.logo);
    let dataset = Dataset::load(&config)?;
    let logo = Logo::load(&config.logo)?;

    match cli.command {
        Commands::Show {
            view,
            output,
            format,
        } => show(&dataset, &logo, view, &output, format)?,
        Commands::Browse { output } => browse(&dataset, &logo, &output)?,
        Commands::Site { output_dir } => site(&dataset, &logo, &output_dir)?,
    }

    Ok(())
}

/// Colored stderr at `RUST_LOG` (default info) plus a daily-rolled JSON file
/// at `RUST_LOG_JSON` (default debug). The guard flushes the file on drop.
fn init_logging() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let log_file_path = Path::new(&log_file_path);
    let log_dir = log_file_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("bike_report.log"));

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, log_file_name));

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}

#[tracing::instrument(skip_all, fields(view = %view, output = %output.display()))]
fn show(dataset: &Dataset, logo: &Logo, view: View, output: &Path, format: Format) -> Result<()> {
    let mut shell = Shell::new(dataset, logo);
    let page = shell.select(view)?;

    match format {
        Format::Html => write_page(output, &page.html)?,
        Format::Json => {
            print_pretty(&page.summary);
            print_json(&page.summary)?;
        }
    }

    Ok(())
}

#[tracing::instrument(skip_all, fields(output = %output.display()))]
fn browse(dataset: &Dataset, logo: &Logo, output: &Path) -> Result<()> {
    let views: Vec<&str> = View::ALL.iter().map(|v| v.slug()).collect();
    info!(views = %views.join(", "), "Type a view per line, 'quit' to stop");

    let mut shell = Shell::new(dataset, logo);
    let pages = shell.browse(std::io::stdin().lock(), |page| {
        write_page(output, &page.html)
    })?;

    info!(pages, last_view = %shell.current(), "Browsing finished");
    Ok(())
}

#[tracing::instrument(skip_all, fields(output_dir = %output_dir.display()))]
fn site(dataset: &Dataset, logo: &Logo, output_dir: &Path) -> Result<()> {
    let mut shell = Shell::new(dataset, logo).with_linking(Linking::Files);

    for view in View::ALL {
        let page = shell.select(view)?;
        write_page(&output_dir.join(view.file_name()), &page.html)?;
    }

    info!(pages = View::ALL.len(), "Site written");
    Ok(())
}
