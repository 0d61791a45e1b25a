//! Metadata table region detection.

/// The contiguous line range occupied by the first metadata table in a
/// document, including its header separator row.
///
/// Line indices are zero-based and the range is inclusive on both ends.
/// Invariant: `start <= header_row <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRegion {
    /// Index of the first line whose trimmed form begins with `|`.
    pub start: usize,

    /// Index of the separator row (`|` line containing `---`).
    pub header_row: usize,

    /// Index of the last table line.
    pub end: usize,
}

impl TableRegion {
    /// Detect the first metadata table in a sequence of lines.
    ///
    /// A single pass tracks three cursors:
    /// - `start`: the first line beginning with `|`
    /// - `header_row`: after `start`, the first `|` line containing `---`
    /// - `end`: the line before the first non-`|` line after `header_row`,
    ///   or the last line when the table runs to the end of the document
    ///
    /// Returns `None` when no separator row is found after a table start;
    /// the document then has no convertible table.
    pub fn detect(lines: &[&str]) -> Option<TableRegion> {
        let mut start = None;
        let mut header_row = None;
        let mut end = None;

        for (i, line) in lines.iter().enumerate() {
            let is_table_line = line.trim().starts_with('|');

            match (start, header_row) {
                (None, _) => {
                    if is_table_line {
                        start = Some(i);
                    }
                }
                (Some(_), None) => {
                    if is_table_line && line.contains("---") {
                        header_row = Some(i);
                    }
                }
                (Some(_), Some(_)) => {
                    if !is_table_line {
                        end = Some(i - 1);
                        break;
                    }
                }
            }
        }

        let start = start?;
        let header_row = header_row?;
        // No non-table line after the separator row: table runs to EOF
        let end = end.unwrap_or(lines.len() - 1);

        Some(TableRegion {
            start,
            header_row,
            end,
        })
    }

    /// Check whether a line index falls inside the table region.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Number of lines in the region, separator row included.
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.split('\n').collect()
    }

    #[test]
    fn test_detect_basic_table() {
        let doc = lines("# Title\n\n| field | value |\n| --- | --- |\n| a | b |\n\nbody");
        let region = TableRegion::detect(&doc).unwrap();
        assert_eq!(region.start, 2);
        assert_eq!(region.header_row, 3);
        assert_eq!(region.end, 4);
        assert_eq!(region.line_count(), 3);
    }

    #[test]
    fn test_detect_no_table() {
        let doc = lines("# Title\n\njust text\n");
        assert_eq!(TableRegion::detect(&doc), None);
    }

    #[test]
    fn test_detect_pipe_without_separator() {
        // A | line with no separator row afterwards is not a table
        let doc = lines("| not really a table\nplain text");
        assert_eq!(TableRegion::detect(&doc), None);
    }

    #[test]
    fn test_detect_table_to_eof() {
        let doc = lines("| field | value |\n| --- | --- |\n| a | b |");
        let region = TableRegion::detect(&doc).unwrap();
        assert_eq!(region.start, 0);
        assert_eq!(region.header_row, 1);
        assert_eq!(region.end, 2);
    }

    #[test]
    fn test_detect_indented_table_lines() {
        let doc = lines("  | field | value |\n  | --- |\n  | a | b |\ndone");
        let region = TableRegion::detect(&doc).unwrap();
        assert_eq!(region.start, 0);
        assert_eq!(region.end, 2);
    }

    #[test]
    fn test_contains() {
        let region = TableRegion {
            start: 2,
            header_row: 3,
            end: 5,
        };
        assert!(!region.contains(1));
        assert!(region.contains(2));
        assert!(region.contains(5));
        assert!(!region.contains(6));
    }

    #[test]
    fn test_detect_only_separator_like_first_line() {
        // The line that opens the table can never double as the separator;
        // a later | line must carry the dashes
        let doc = lines("| --- |\n| a | b |\nend");
        assert_eq!(TableRegion::detect(&doc), None);
    }
}
