//! Employee name resolution rules.
//!
//! Timesheets carry the employee name in one of two shapes: a shouting
//! all-caps line near the top, or a filled-in "Print Name" signature label.
//! Each shape gets its own independent rule; precedence between them is
//! applied by the extraction entry point.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;

/// Matches a line consisting only of uppercase letters and whitespace,
/// at least five characters long.
static UPPERCASE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s]{5,}$").expect("uppercase-line pattern compiles"));

/// Matches a "Print Name" label and captures the text after the delimiter.
static PRINT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)print\s*name[:\-\s]*(.+)").expect("print-name pattern compiles")
});

/// Finds the first all-uppercase multi-word line in the document and
/// returns it title-cased.
///
/// Lines containing "PRL" are company boilerplate (letterheads, form
/// titles), not names, and are excluded.
pub(super) fn uppercase_name(document: &Document) -> Option<String> {
    lines(document)
        .find(|line| is_uppercase_name(line))
        .map(title_case)
}

/// Finds the first "Print Name" label with a non-empty value.
pub(super) fn printed_name(document: &Document) -> Option<String> {
    lines(document).find_map(|line| {
        let value = PRINT_NAME.captures(line)?.get(1)?.as_str().trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Returns the stem of a source file name, the last-resort employee name.
pub(super) fn source_stem(source_name: &str) -> String {
    Path::new(source_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| source_name.to_string())
}

/// Iterates every trimmed line of every paragraph and table cell.
fn lines(document: &Document) -> impl Iterator<Item = &str> {
    document
        .paragraphs
        .iter()
        .map(String::as_str)
        .chain(document.cells())
        .flat_map(str::lines)
        .map(str::trim)
}

fn is_uppercase_name(line: &str) -> bool {
    UPPERCASE_LINE.is_match(line)
        && line.split_whitespace().count() >= 2
        && !line.contains("PRL")
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Table, TableRow};

    fn doc_with_paragraphs(paragraphs: &[&str]) -> Document {
        Document {
            paragraphs: paragraphs.iter().map(|s| s.to_string()).collect(),
            tables: vec![],
        }
    }

    #[test]
    fn test_uppercase_name_is_title_cased() {
        let doc = doc_with_paragraphs(&["JOHN SMITH"]);
        assert_eq!(uppercase_name(&doc), Some("John Smith".to_string()));
    }

    #[test]
    fn test_single_word_is_not_a_name() {
        let doc = doc_with_paragraphs(&["TIMESHEET"]);
        assert_eq!(uppercase_name(&doc), None);
    }

    #[test]
    fn test_short_line_is_not_a_name() {
        let doc = doc_with_paragraphs(&["A B"]);
        assert_eq!(uppercase_name(&doc), None);
    }

    #[test]
    fn test_prl_boilerplate_is_excluded() {
        let doc = doc_with_paragraphs(&["PRL STAFFING", "JOHN SMITH"]);
        assert_eq!(uppercase_name(&doc), Some("John Smith".to_string()));
    }

    #[test]
    fn test_mixed_case_line_is_not_a_name() {
        let doc = doc_with_paragraphs(&["John Smith"]);
        assert_eq!(uppercase_name(&doc), None);
    }

    #[test]
    fn test_uppercase_name_found_in_table_cell() {
        let doc = Document {
            paragraphs: vec![],
            tables: vec![Table {
                rows: vec![TableRow {
                    cells: vec!["Operative\nJOHN SMITH".to_string()],
                }],
            }],
        };
        assert_eq!(uppercase_name(&doc), Some("John Smith".to_string()));
    }

    #[test]
    fn test_printed_name_after_colon() {
        let doc = doc_with_paragraphs(&["Print Name: John Smith"]);
        assert_eq!(printed_name(&doc), Some("John Smith".to_string()));
    }

    #[test]
    fn test_printed_name_after_dash() {
        let doc = doc_with_paragraphs(&["Print Name - John Smith"]);
        assert_eq!(printed_name(&doc), Some("John Smith".to_string()));
    }

    #[test]
    fn test_printed_name_is_case_insensitive() {
        let doc = doc_with_paragraphs(&["PRINT NAME JANE DOE"]);
        assert_eq!(printed_name(&doc), Some("JANE DOE".to_string()));
    }

    #[test]
    fn test_empty_printed_name_is_ignored() {
        let doc = doc_with_paragraphs(&["Print Name:", "Print Name: John Smith"]);
        assert_eq!(printed_name(&doc), Some("John Smith".to_string()));
    }

    #[test]
    fn test_source_stem_strips_extension() {
        assert_eq!(source_stem("aaron_hall_week_31.docx"), "aaron_hall_week_31");
    }

    #[test]
    fn test_source_stem_without_extension() {
        assert_eq!(source_stem("upload"), "upload");
    }

    #[test]
    fn test_title_case_lowers_trailing_letters() {
        assert_eq!(title_case("JOHN SMITH"), "John Smith");
        assert_eq!(title_case("  JANE   DOE "), "Jane Doe");
    }
}
