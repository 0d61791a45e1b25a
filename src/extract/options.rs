//! Extraction options and configuration.

use super::LabelMap;
use crate::model::MetaKey;

/// Slash-delimited creation time, e.g. `2023/05/10 14:30`.
pub const DATE_FORMAT_SLASH: &str = "%Y/%m/%d %H:%M";

/// Dash-delimited creation time, e.g. `2023-05-10 14:30`.
pub const DATE_FORMAT_DASH: &str = "%Y-%m-%d %H:%M";

/// Date-only output format for the `created` key.
pub const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Options for the header extraction transform.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Recognized table labels and the metadata keys they map to.
    pub labels: LabelMap,

    /// Title used when the document has no heading line and no file name
    /// is available.
    pub fallback_title: String,

    /// Creation time patterns, tried in order.
    pub date_input_formats: Vec<String>,

    /// Output pattern for normalized creation dates.
    pub date_output_format: String,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label map.
    pub fn with_labels(mut self, labels: LabelMap) -> Self {
        self.labels = labels;
        self
    }

    /// Add a single recognized label.
    pub fn with_label(mut self, label: impl Into<String>, key: MetaKey) -> Self {
        self.labels = self.labels.with_label(label, key);
        self
    }

    /// Set the fallback title.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    /// Replace the creation time input patterns.
    pub fn with_date_formats(mut self, formats: Vec<String>) -> Self {
        self.date_input_formats = formats;
        self
    }

    /// Set the output pattern for normalized creation dates.
    pub fn with_date_output_format(mut self, format: impl Into<String>) -> Self {
        self.date_output_format = format.into();
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            labels: LabelMap::default(),
            fallback_title: "untitled".to_string(),
            date_input_formats: vec![
                DATE_FORMAT_SLASH.to_string(),
                DATE_FORMAT_DASH.to_string(),
            ],
            date_output_format: DATE_OUTPUT_FORMAT.to_string(),
        }
    }
}
