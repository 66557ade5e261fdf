//! Wrap standalone HTML pages in the pdoc site chrome.
//!
//! Reads `docs/index.html` once for the shared head, sidebar and footer, then
//! rewrites every other `docs/*.html` page that lacks the sidebar so navigation
//! stays consistent across the whole site. Already wrapped pages are skipped,
//! so running it again is a no-op.

mod driver;
mod error;
mod page;
mod parser;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use settings::Settings;

#[derive(Parser)]
#[command(name = "integrate_html", about = "Integrate standalone HTML files into the pdoc template")]
struct Cli {
    /// Documentation directory (default: docs)
    #[arg(long)]
    docs_dir: Option<PathBuf>,
    /// Index page used as the template source (default: index.html)
    #[arg(long = "index")]
    index_file: Option<String>,
    /// List standalone pages without rewriting them
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(dir) = self.docs_dir {
            settings.docs_dir = dir;
        }
        if let Some(index) = self.index_file {
            settings.index_file = index;
        }
        settings.dry_run |= self.dry_run;
        settings
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let settings = Cli::parse().apply(Settings::load()?);
    info!(settings = ?settings, "starting integration");

    let report = driver::run(&settings).map_err(|e| {
        tracing::error!(fatal = e.is_fatal(), "{}", e);
        e
    })?;
    if !report.files.is_empty() {
        report.print();
    }

    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "done");
    Ok(())
}
