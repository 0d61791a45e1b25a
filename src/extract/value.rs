//! Table cell value parsing: tag lists and date normalization.

use chrono::NaiveDateTime;
use regex::Regex;

/// Parser for bracketed tag list literals.
///
/// A value like `["work", 'rust', notes]` becomes `["work", "rust",
/// "notes"]`; anything not wrapped in brackets is a single-element list.
/// This is a dedicated mini-parser: brackets are stripped, elements are
/// split on commas, trimmed, and unquoted. Quoted elements may contain
/// commas.
#[derive(Debug)]
pub(crate) struct ListParser {
    element: Regex,
}

impl ListParser {
    pub fn new() -> Self {
        // A list element is a double-quoted string, a single-quoted
        // string, or a bare run up to the next comma
        let element = Regex::new(r#"\s*"([^"]*)"\s*|\s*'([^']*)'\s*|([^,]+)"#)
            .expect("valid element pattern");
        Self { element }
    }

    /// Parse a tag cell value into a list of tags.
    pub fn parse(&self, value: &str) -> Vec<String> {
        let trimmed = value.trim();

        let inner = match trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            Some(inner) => inner,
            None => return vec![trimmed.to_string()],
        };

        self.element
            .captures_iter(inner)
            .filter_map(|caps| {
                let text = match caps.get(1).or_else(|| caps.get(2)) {
                    Some(quoted) => quoted.as_str(),
                    None => caps.get(3).map(|m| m.as_str()).unwrap_or("").trim(),
                };
                if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                }
            })
            .collect()
    }
}

/// Normalize a date value to the output format.
///
/// Each input pattern is tried in order with [`NaiveDateTime`]; the first
/// successful parse is reformatted. An unparseable value is returned
/// verbatim, never an error.
pub(crate) fn normalize_date(value: &str, input_formats: &[String], output_format: &str) -> String {
    for format in input_formats {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return parsed.format(output_format).to_string();
        }
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formats() -> Vec<String> {
        vec!["%Y/%m/%d %H:%M".to_string(), "%Y-%m-%d %H:%M".to_string()]
    }

    #[test]
    fn test_parse_plain_value() {
        let parser = ListParser::new();
        assert_eq!(parser.parse("work"), vec!["work"]);
        assert_eq!(parser.parse("  work  "), vec!["work"]);
    }

    #[test]
    fn test_parse_bracketed_list() {
        let parser = ListParser::new();
        assert_eq!(parser.parse("[a, b]"), vec!["a", "b"]);
        assert_eq!(parser.parse("['a', 'b']"), vec!["a", "b"]);
        assert_eq!(parser.parse(r#"["rust", "notes"]"#), vec!["rust", "notes"]);
    }

    #[test]
    fn test_parse_quoted_element_with_comma() {
        let parser = ListParser::new();
        assert_eq!(
            parser.parse(r#"["one, two", three]"#),
            vec!["one, two", "three"]
        );
    }

    #[test]
    fn test_parse_empty_list() {
        let parser = ListParser::new();
        assert_eq!(parser.parse("[]"), Vec::<String>::new());
        assert_eq!(parser.parse("[ , ]"), Vec::<String>::new());
    }

    #[test]
    fn test_normalize_slash_date() {
        assert_eq!(
            normalize_date("2023/05/10 14:30", &formats(), "%Y-%m-%d"),
            "2023-05-10"
        );
    }

    #[test]
    fn test_normalize_dash_date() {
        assert_eq!(
            normalize_date("2023-05-10 14:30", &formats(), "%Y-%m-%d"),
            "2023-05-10"
        );
    }

    #[test]
    fn test_normalize_unparseable_passthrough() {
        assert_eq!(normalize_date("unknown", &formats(), "%Y-%m-%d"), "unknown");
        assert_eq!(
            normalize_date("2023-05-10", &formats(), "%Y-%m-%d"),
            "2023-05-10"
        );
    }
}
