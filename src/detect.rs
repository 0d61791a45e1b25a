//! Document shape detection.

use std::path::Path;

/// YAML front matter opening delimiter at the start of a document.
const FRONTMATTER_PREFIX: &str = "---\n";

/// Check if a document already begins with a YAML front matter block.
///
/// Only the opening delimiter is inspected; a document that starts with
/// `---` followed by a line break is treated as already converted and is
/// never touched again. This is what makes the transform idempotent.
///
/// # Example
/// ```
/// use mdfront::detect::has_frontmatter;
///
/// assert!(has_frontmatter("---\ntitle: \"x\"\n---\n\nbody"));
/// assert!(!has_frontmatter("# Heading\n\nbody"));
/// ```
pub fn has_frontmatter(text: &str) -> bool {
    text.starts_with(FRONTMATTER_PREFIX) || text.starts_with("---\r\n")
}

/// Check if a path has a Markdown file extension.
///
/// Matching is case-insensitive on the extension only; the rest of the
/// file name is not inspected.
pub fn is_markdown_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}
