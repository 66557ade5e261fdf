use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::IntegrateError;
use crate::page;
use crate::parser::{content, template, TemplateRegions};
use crate::settings::Settings;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Pages carrying this were produced by pdoc or already wrapped.
pub const SIDEBAR_MARKER: &str = template::SIDEBAR_ANCHOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug)]
pub enum Outcome {
    Integrated { bytes: usize },
    Missing,
    ExtractFailed(IntegrateError),
    WriteFailed(IntegrateError),
}

#[derive(Debug)]
pub struct FileReport {
    pub name: String,
    pub outcome: Outcome,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub candidates: Vec<String>,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn integrated(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Integrated { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.integrated()
    }

    pub fn print(&self) {
        println!(
            "\nIntegration complete! Processed {} files ({} integrated, {} failed).",
            self.files.len(),
            self.integrated(),
            self.failed()
        );
    }
}

pub fn is_standalone(html: &str) -> bool {
    !html.contains(SIDEBAR_MARKER)
}

/// List `*.html` files directly inside `docs_dir`, minus the index, that still
/// lack the sidebar. Sorted by file name.
pub fn discover(docs_dir: &Path, index_file: &str) -> Result<Vec<Candidate>, IntegrateError> {
    let entries = fs::read_dir(docs_dir).map_err(|source| IntegrateError::Read {
        path: docs_dir.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        if name == index_file {
            continue;
        }

        match fs::read_to_string(&path) {
            Ok(html) if is_standalone(&html) => candidates.push(Candidate { name, path }),
            Ok(_) => debug!(file = %name, "already integrated"),
            Err(e) => {
                warn!(file = %name, error = %e, "skipping unreadable file");
                println!("Warning: Could not read {}: {}", name, e);
            }
        }
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(candidates)
}

pub fn integrate_file(candidate: &Candidate, regions: &TemplateRegions) -> FileReport {
    let outcome = if !candidate.path.exists() {
        Outcome::Missing
    } else {
        match content::extract(&candidate.path) {
            Err(e) => Outcome::ExtractFailed(e),
            Ok(extracted) => match page::write_page(&candidate.path, &extracted, regions) {
                Ok(bytes) => Outcome::Integrated { bytes },
                Err(e) => Outcome::WriteFailed(e),
            },
        }
    };
    FileReport {
        name: candidate.name.clone(),
        outcome,
    }
}

#[cfg(feature = "rayon")]
fn integrate_all(candidates: &[Candidate], regions: &TemplateRegions) -> Vec<FileReport> {
    candidates
        .par_iter()
        .map(|c| integrate_file(c, regions))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn integrate_all(candidates: &[Candidate], regions: &TemplateRegions) -> Vec<FileReport> {
    candidates
        .iter()
        .map(|c| integrate_file(c, regions))
        .collect()
}

pub fn run(settings: &Settings) -> Result<RunReport, IntegrateError> {
    if !settings.docs_dir.is_dir() {
        return Err(IntegrateError::DocsDirMissing(settings.docs_dir.clone()));
    }

    let regions = template::load(&settings.index_path())?;
    debug!(
        before_content = regions.before_content.len(),
        sidebar = regions.sidebar.len(),
        footer = regions.footer.len(),
        "template regions extracted"
    );

    let candidates = discover(&settings.docs_dir, &settings.index_file)?;
    let mut report = RunReport {
        candidates: candidates.iter().map(|c| c.name.clone()).collect(),
        files: Vec::new(),
    };

    if candidates.is_empty() {
        println!("No standalone HTML files found to integrate");
        return Ok(report);
    }

    println!("Found {} standalone HTML files to integrate:", report.candidates.len());
    for name in &report.candidates {
        println!("  - {}", name);
    }

    if settings.dry_run {
        info!(count = candidates.len(), "dry run, nothing written");
        return Ok(report);
    }

    report.files = integrate_all(&candidates, &regions);

    for file in &report.files {
        println!("\nIntegrating {}...", file.name);
        match &file.outcome {
            Outcome::Integrated { bytes } => {
                debug!(file = %file.name, bytes, "page written");
                println!("✓ Successfully integrated {}", file.name);
            }
            Outcome::Missing => println!("File {} not found, skipping...", file.name),
            Outcome::ExtractFailed(e) => {
                println!("{}", e);
                println!("✗ Failed to extract content from {}", file.name);
            }
            Outcome::WriteFailed(e) => {
                println!("{}", e);
                println!("✗ Failed to write {}", file.name);
            }
        }
    }

    Ok(report)
}

// ── Tests ──
