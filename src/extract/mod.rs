//! Header extraction: the metadata-table to front-matter transform.

mod labels;
mod options;
mod value;

pub use labels::LabelMap;
pub use options::{
    ExtractOptions, DATE_FORMAT_DASH, DATE_FORMAT_SLASH, DATE_OUTPUT_FORMAT,
};

use crate::detect::has_frontmatter;
use crate::model::{MetaKey, MetaValue, Metadata, TableRegion};
use value::{normalize_date, ListParser};

/// Transform a document with default options.
pub fn transform(text: &str) -> String {
    HeaderExtractor::new(ExtractOptions::default()).transform(text)
}

/// Transform a document with custom options.
pub fn transform_with_options(text: &str, options: &ExtractOptions) -> String {
    HeaderExtractor::new(options.clone()).transform(text)
}

/// Converts a leading metadata table into a YAML front matter block.
///
/// The transform is pure and total: it never fails, and returns its input
/// unchanged whenever the document already carries a front matter block or
/// no convertible table is found.
pub struct HeaderExtractor {
    options: ExtractOptions,
    list_parser: ListParser,
}

impl HeaderExtractor {
    /// Create a new extractor.
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            list_parser: ListParser::new(),
        }
    }

    /// The options this extractor was built with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Transform a document, using the configured fallback title when it
    /// has no heading line.
    pub fn transform(&self, text: &str) -> String {
        self.transform_named(text, &self.options.fallback_title)
    }

    /// Transform a document with a caller-supplied fallback title,
    /// typically the file stem.
    ///
    /// Steps: skip documents that already start with a front matter block,
    /// take the title from the first `#` heading, locate the first metadata
    /// table, collect its recognized fields, then reassemble the document
    /// with the table replaced by a front matter header.
    pub fn transform_named(&self, text: &str, fallback_title: &str) -> String {
        if has_frontmatter(text) {
            return text.to_string();
        }

        let lines: Vec<&str> = text.split('\n').collect();

        let region = match TableRegion::detect(&lines) {
            Some(region) => region,
            None => return text.to_string(),
        };

        let title = extract_title(&lines).unwrap_or_else(|| fallback_title.to_string());
        let metadata = self.collect_metadata(&lines, region, title);

        reassemble(&lines, region, &metadata)
    }

    /// Walk the table rows and build the metadata record.
    fn collect_metadata(&self, lines: &[&str], region: TableRegion, title: String) -> Metadata {
        let mut metadata = Metadata::new(title);

        for index in region.start..=region.end {
            if index == region.header_row {
                continue;
            }

            let cells: Vec<&str> = lines[index].split('|').collect();
            // The edge delimiters produce empty first and last cells, so a
            // well-formed row `| label | value |` has at least 3 cells
            if cells.len() < 3 {
                continue;
            }

            let label = cells[1].trim();
            let value = cells[2].trim();
            if value.is_empty() {
                continue;
            }

            let key = match self.options.labels.resolve(label) {
                Some(key) => key,
                None => {
                    log::debug!("ignoring unrecognized table field: {label}");
                    continue;
                }
            };

            let meta_value = match key {
                MetaKey::Tags => MetaValue::List(self.list_parser.parse(value)),
                MetaKey::Author => MetaValue::List(vec![value.to_string()]),
                MetaKey::Source => MetaValue::Scalar(value.to_string()),
                MetaKey::Created => MetaValue::Scalar(normalize_date(
                    value,
                    &self.options.date_input_formats,
                    &self.options.date_output_format,
                )),
            };

            metadata.insert(key, meta_value);
        }

        metadata
    }
}

/// Drop the table lines and prepend the front matter block.
fn reassemble(lines: &[&str], region: TableRegion, metadata: &Metadata) -> String {
    let body: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(index, _)| !region.contains(*index))
        .map(|(_, line)| *line)
        .collect();

    let mut output = metadata.to_yaml_frontmatter();
    output.push('\n');
    output.push_str(&body.join("\n"));
    output
}

/// Extract the title from the first heading line.
///
/// The first line whose trimmed form starts with `#` wins, even when a
/// later heading is more prominent; a heading with no text after the
/// markers yields `None`.
fn extract_title(lines: &[&str]) -> Option<String> {
    let heading = lines
        .iter()
        .map(|line| line.trim())
        .find(|line| line.starts_with('#'))?;

    let title = heading.trim_start_matches('#').trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
