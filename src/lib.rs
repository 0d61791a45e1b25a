//! # mdfront
//!
//! Convert leading Markdown metadata tables to YAML front matter.
//!
//! Documents that start with a metadata table (tag, author, source,
//! creation time) are rewritten: the table is removed and a `---`
//! delimited front matter block is prepended. Documents without a
//! recognizable table, or with an existing front matter block, pass
//! through untouched.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdfront::{convert_dir, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> mdfront::Result<()> {
//!     let report = convert_dir(Path::new("./notes"), &ConvertOptions::default())?;
//!     println!("{} of {} files converted", report.converted(), report.total());
//!     Ok(())
//! }
//! ```
//!
//! The transform itself is a pure function over document text:
//!
//! ```
//! let doc = "# Note\n\n| 字段 | 值 |\n| --- | --- |\n| 标签 | work |\n\nbody\n";
//! let converted = mdfront::transform(doc);
//! assert!(converted.starts_with("---\ntitle: \"Note\"\n"));
//! ```

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;

// Re-export commonly used types
pub use convert::{
    convert_dir, convert_file, list_documents, ConvertOptions, ConvertReport, FileOutcome,
    FileReport,
};
pub use detect::{has_frontmatter, is_markdown_path};
pub use error::{Error, Result};
pub use extract::{
    transform, transform_with_options, ExtractOptions, HeaderExtractor, LabelMap,
};
pub use model::{MetaKey, MetaValue, Metadata, TableRegion};

use std::path::Path;

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```no_run
/// use mdfront::{LabelMap, Mdfront};
///
/// let report = Mdfront::new()
///     .with_labels(LabelMap::english())
///     .dry_run()
///     .run("./notes")?;
/// # Ok::<(), mdfront::Error>(())
/// ```
pub struct Mdfront {
    options: ConvertOptions,
}

impl Mdfront {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set the recognized label map.
    pub fn with_labels(mut self, labels: LabelMap) -> Self {
        self.options.extract = self.options.extract.with_labels(labels);
        self
    }

    /// Add a single recognized label.
    pub fn with_label(mut self, label: impl Into<String>, key: MetaKey) -> Self {
        self.options.extract = self.options.extract.with_label(label, key);
        self
    }

    /// Set the fallback title for documents without a heading.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.options.extract = self.options.extract.with_fallback_title(title);
        self
    }

    /// Set the processed file extensions.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.options = self.options.with_extensions(extensions);
        self
    }

    /// Report changes without writing any file.
    pub fn dry_run(mut self) -> Self {
        self.options = self.options.with_dry_run(true);
        self
    }

    /// The assembled conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Transform a single document's text.
    pub fn transform(&self, text: &str) -> String {
        transform_with_options(text, &self.options.extract)
    }

    /// Convert all matching documents in a directory.
    pub fn run<P: AsRef<Path>>(self, dir: P) -> Result<ConvertReport> {
        convert_dir(dir.as_ref(), &self.options)
    }
}

impl Default for Mdfront {
    fn default() -> Self {
        Self::new()
    }
}
