//! Directory conversion: the file and directory boundary around the
//! header extraction transform.
//!
//! Every document is processed independently; a failure on one file is
//! logged and recorded in the report, never aborting the run.
//!
//! # Example
//!
//! ```no_run
//! use mdfront::convert::{convert_dir, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> mdfront::Result<()> {
//!     let report = convert_dir(Path::new("./notes"), &ConvertOptions::default())?;
//!     println!("{} converted, {} unchanged", report.converted(), report.unchanged());
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, HeaderExtractor};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for directory conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Extraction options for the transform itself.
    pub extract: ExtractOptions,

    /// File extensions to process, lowercase without the leading dot.
    pub extensions: Vec<String>,

    /// Report what would change without writing anything.
    pub dry_run: bool,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Replace the processed extensions.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Enable or disable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let ext = e.to_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            })
            .unwrap_or(false)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            extract: ExtractOptions::default(),
            extensions: vec!["md".to_string()],
            dry_run: false,
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "detail")]
pub enum FileOutcome {
    /// The file contained a convertible table and was rewritten.
    Converted,
    /// The transform left the content unchanged; nothing was written.
    Unchanged,
    /// Reading, decoding, or writing the file failed.
    Failed(String),
}

/// Per-file entry in a conversion report.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the processed file.
    pub path: PathBuf,

    /// What happened to it.
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Result of converting a directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertReport {
    /// Per-file outcomes in processing order.
    pub files: Vec<FileReport>,
}

impl ConvertReport {
    /// Record an outcome for a file.
    pub fn record(&mut self, path: impl Into<PathBuf>, outcome: FileOutcome) {
        self.files.push(FileReport {
            path: path.into(),
            outcome,
        });
    }

    /// Number of files rewritten.
    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Converted))
    }

    /// Number of files left as-is.
    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Unchanged))
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files
            .iter()
            .filter(|file| predicate(&file.outcome))
            .count()
    }
}

/// List candidate documents in a directory, non-recursive.
///
/// Entries are filtered by extension and sorted by file name so runs are
/// deterministic regardless of the platform's directory order.
pub fn list_documents(dir: &Path, options: &ConvertOptions) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && options.matches_extension(&path) {
            documents.push(path);
        }
    }

    documents.sort();
    Ok(documents)
}

/// Convert a single file in place.
///
/// The file stem serves as the fallback title when the document has no
/// heading line. Returns the outcome; nothing is written when the
/// transform is a no-op or `dry_run` is set.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<FileOutcome> {
    let bytes = fs::read(path)?;
    let content =
        String::from_utf8(bytes).map_err(|_| Error::Decode(path.to_path_buf()))?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(options.extract.fallback_title.as_str());

    let extractor = HeaderExtractor::new(options.extract.clone());
    let converted = extractor.transform_named(&content, stem);

    if converted == content {
        log::debug!("unchanged: {}", path.display());
        return Ok(FileOutcome::Unchanged);
    }

    if !options.dry_run {
        fs::write(path, converted)?;
    }
    log::info!("converted: {}", path.display());
    Ok(FileOutcome::Converted)
}

/// Convert all matching documents in a directory.
///
/// Documents are processed one at a time in sorted name order. Per-file
/// failures are logged and recorded; only a missing or unreadable
/// directory is an error.
pub fn convert_dir(dir: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
    let documents = list_documents(dir, options)?;

    let mut report = ConvertReport::default();
    for path in documents {
        match convert_file(&path, options) {
            Ok(outcome) => report.record(&path, outcome),
            Err(err) => {
                log::warn!("failed to process {}: {err}", path.display());
                report.record(&path, FileOutcome::Failed(err.to_string()));
            }
        }
    }

    Ok(report)
}
