//! Labelled field extraction rules.
//!
//! Client and site are written as `<label>: <value>` on one line, in either
//! a paragraph or a table cell. The first line that yields a non-empty
//! value wins; later matches are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;

static CLIENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)client\s*[:\-]?\s*(.+)").expect("client pattern compiles"));

static SITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)site\s+address\s*[:\-]?\s*(.+)").expect("site pattern compiles")
});

/// Extracts the client name, if labelled anywhere in the document.
pub(super) fn client(document: &Document) -> Option<String> {
    labelled_value(document, &CLIENT)
}

/// Extracts the site address, if labelled anywhere in the document.
pub(super) fn site(document: &Document) -> Option<String> {
    labelled_value(document, &SITE)
}

fn labelled_value(document: &Document, pattern: &Regex) -> Option<String> {
    document
        .paragraphs
        .iter()
        .map(String::as_str)
        .chain(document.cells())
        .flat_map(str::lines)
        .find_map(|line| {
            let value = pattern.captures(line)?.get(1)?.as_str().trim();
            (!value.is_empty()).then(|| value.to_string())
        })
}
