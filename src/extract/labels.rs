//! Recognized table label configuration.

use crate::model::MetaKey;

/// Ordered mapping from table field labels to metadata keys.
///
/// The labels a metadata table may use are locale-specific, so the
/// recognized set is an explicit table instead of hard-coded literals.
/// Lookup is an exact match on the trimmed label cell.
///
/// # Example
/// ```
/// use mdfront::extract::LabelMap;
/// use mdfront::model::MetaKey;
///
/// let labels = LabelMap::english().with_label("topic", MetaKey::Tags);
/// assert_eq!(labels.resolve("topic"), Some(MetaKey::Tags));
/// ```
#[derive(Debug, Clone)]
pub struct LabelMap {
    entries: Vec<(String, MetaKey)>,
}

impl LabelMap {
    /// Create an empty label map. Nothing is recognized until labels are
    /// added with [`with_label`](Self::with_label).
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The reference label set: Chinese field names as produced by the
    /// note-taking tools this converter was written for.
    pub fn with_defaults() -> Self {
        Self::empty()
            .with_label("标签", MetaKey::Tags)
            .with_label("作者", MetaKey::Author)
            .with_label("来源", MetaKey::Source)
            .with_label("创建时间", MetaKey::Created)
    }

    /// English label set: `tags`, `author`, `source`, `created`.
    pub fn english() -> Self {
        Self::empty()
            .with_label("tags", MetaKey::Tags)
            .with_label("author", MetaKey::Author)
            .with_label("source", MetaKey::Source)
            .with_label("created", MetaKey::Created)
    }

    /// Add a label, replacing any previous mapping for the same label.
    pub fn with_label(mut self, label: impl Into<String>, key: MetaKey) -> Self {
        let label = label.into();
        if let Some(slot) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            slot.1 = key;
        } else {
            self.entries.push((label, key));
        }
        self
    }

    /// Look up the metadata key for a label, if recognized.
    pub fn resolve(&self, label: &str) -> Option<MetaKey> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, key)| *key)
    }

    /// Number of recognized labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no labels are recognized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = LabelMap::default();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels.resolve("标签"), Some(MetaKey::Tags));
        assert_eq!(labels.resolve("作者"), Some(MetaKey::Author));
        assert_eq!(labels.resolve("来源"), Some(MetaKey::Source));
        assert_eq!(labels.resolve("创建时间"), Some(MetaKey::Created));
        assert_eq!(labels.resolve("tags"), None);
    }

    #[test]
    fn test_english_labels() {
        let labels = LabelMap::english();
        assert_eq!(labels.resolve("tags"), Some(MetaKey::Tags));
        assert_eq!(labels.resolve("created"), Some(MetaKey::Created));
        assert_eq!(labels.resolve("标签"), None);
    }

    #[test]
    fn test_with_label_replaces() {
        let labels = LabelMap::english().with_label("author", MetaKey::Source);
        assert_eq!(labels.len(), 4);
        assert_eq!(labels.resolve("author"), Some(MetaKey::Source));
    }

    #[test]
    fn test_empty_map() {
        let labels = LabelMap::empty();
        assert!(labels.is_empty());
        assert_eq!(labels.resolve("标签"), None);
    }
}
