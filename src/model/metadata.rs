//! Document metadata and YAML front matter serialization.

use serde::Serialize;

/// Recognized metadata keys.
///
/// These are the keys emitted into the front matter block. Which table
/// labels map to which key is decided by the
/// [`LabelMap`](crate::extract::LabelMap), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaKey {
    /// Document tags (list).
    Tags,
    /// Document author (list).
    Author,
    /// Where the document came from (scalar).
    Source,
    /// Creation date (scalar, normalized to `YYYY-MM-DD` when parseable).
    Created,
}

impl MetaKey {
    /// The YAML key name for this metadata key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaKey::Tags => "tags",
            MetaKey::Author => "author",
            MetaKey::Source => "source",
            MetaKey::Created => "created",
        }
    }
}

/// A metadata value: a single string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Single string value, emitted as `key: "value"`.
    Scalar(String),
    /// Ordered list, emitted as `key:` followed by `- "item"` lines.
    List(Vec<String>),
}

/// Metadata collected from one document's table.
///
/// `title` is always present; the remaining fields appear in the order
/// their table rows were first seen, which is also the order they are
/// emitted into the front matter block.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    /// Document title, from the first heading line or a fallback.
    pub title: String,

    /// Fields in insertion order.
    fields: Vec<(MetaKey, MetaValue)>,
}

impl Metadata {
    /// Create metadata with a title and no other fields.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Insert or replace a field.
    ///
    /// A repeated key overwrites the value but keeps the position of the
    /// first insertion, so duplicate table rows do not reorder the output.
    pub fn insert(&mut self, key: MetaKey, value: MetaValue) {
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    /// Get a field value by key.
    pub fn get(&self, key: MetaKey) -> Option<&MetaValue> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Number of fields besides the title.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over the fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (MetaKey, &MetaValue)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    /// Serialize to a YAML front matter block.
    ///
    /// The block is delimited by `---` lines, emits `title` first and the
    /// remaining keys in insertion order, and ends with a trailing newline
    /// after the closing delimiter.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        lines.push(format!("title: \"{}\"", escape_yaml(&self.title)));

        for (key, value) in &self.fields {
            match value {
                MetaValue::Scalar(s) => {
                    lines.push(format!("{}: \"{}\"", key.as_str(), escape_yaml(s)));
                }
                MetaValue::List(items) => {
                    lines.push(format!("{}:", key.as_str()));
                    for item in items {
                        lines.push(format!("  - \"{}\"", escape_yaml(item)));
                    }
                }
            }
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmatter_title_only() {
        let metadata = Metadata::new("My Note");
        assert_eq!(metadata.to_yaml_frontmatter(), "---\ntitle: \"My Note\"\n---\n");
    }

    #[test]
    fn test_frontmatter_field_order() {
        let mut metadata = Metadata::new("t");
        metadata.insert(MetaKey::Source, MetaValue::Scalar("web".into()));
        metadata.insert(
            MetaKey::Tags,
            MetaValue::List(vec!["a".into(), "b".into()]),
        );

        let yaml = metadata.to_yaml_frontmatter();
        assert_eq!(
            yaml,
            "---\ntitle: \"t\"\nsource: \"web\"\ntags:\n  - \"a\"\n  - \"b\"\n---\n"
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut metadata = Metadata::new("t");
        metadata.insert(MetaKey::Author, MetaValue::List(vec!["first".into()]));
        metadata.insert(MetaKey::Created, MetaValue::Scalar("2023-01-01".into()));
        metadata.insert(MetaKey::Author, MetaValue::List(vec!["second".into()]));

        assert_eq!(metadata.field_count(), 2);
        let keys: Vec<_> = metadata.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![MetaKey::Author, MetaKey::Created]);
        assert_eq!(
            metadata.get(MetaKey::Author),
            Some(&MetaValue::List(vec!["second".to_string()]))
        );
    }

    #[test]
    fn test_escape_yaml() {
        let mut metadata = Metadata::new("quote \" and \\ slash");
        metadata.insert(MetaKey::Source, MetaValue::Scalar("line\nbreak".into()));

        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.contains("title: \"quote \\\" and \\\\ slash\""));
        assert!(yaml.contains("source: \"line\\nbreak\""));
    }
}
