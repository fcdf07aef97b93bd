//! `.docx` container reading.
//!
//! A `.docx` file is a ZIP archive whose main part, `word/document.xml`,
//! carries the body as WordprocessingML. This module extracts that part and
//! walks its element stream into the neutral [`Document`] model: `w:p`
//! elements outside tables become paragraphs, `w:tbl`/`w:tr`/`w:tc` become
//! tables of cell text. Runs, formatting, headers and everything else the
//! extractor does not need are dropped.
//!
//! Any failure to open the container or parse the XML is a
//! [`EngineError::DocumentRead`] for that document; callers decide whether
//! to abort or continue a batch.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::error::{EngineError, EngineResult};

use super::{Document, Table, TableRow};

/// Reads a `.docx` file from disk.
///
/// The returned error names the file, so batch callers can report which
/// document failed without extra bookkeeping.
pub fn read_path<P: AsRef<Path>>(path: P) -> EngineResult<Document> {
    let path = path.as_ref();
    let source = source_label(path);

    let bytes = fs::read(path).map_err(|e| EngineError::DocumentRead {
        document: source.clone(),
        message: e.to_string(),
    })?;

    read_bytes(&bytes, &source)
}

/// Reads a `.docx` document from an in-memory byte buffer.
///
/// `source` is the label used in error messages (typically the original
/// file name of an uploaded document).
pub fn read_bytes(bytes: &[u8], source: &str) -> EngineResult<Document> {
    let read_err = |message: String| EngineError::DocumentRead {
        document: source.to_string(),
        message,
    };

    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| read_err(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| read_err(format!("missing document part: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| read_err(e.to_string()))?;

    parse_body(&xml, source)
}

/// Returns the file name used to label a document in errors and reports.
pub fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Walks the WordprocessingML element stream into a [`Document`].
///
/// Nested tables are not modeled separately; their text flows into the
/// enclosing cell, which is how the timesheet layouts use them.
fn parse_body(xml: &str, source: &str) -> EngineResult<Document> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut tables: Vec<Table> = Vec::new();

    // Depth of w:tbl nesting; cells are only created at depth 1.
    let mut table_depth = 0usize;
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut para_buf = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| EngineError::DocumentRead {
                document: source.to_string(),
                message: format!("malformed XML: {}", e),
            })?;

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        tables.push(Table::default());
                    }
                }
                b"w:tr" => {
                    if table_depth == 1 {
                        if let Some(table) = tables.last_mut() {
                            table.rows.push(TableRow::default());
                        }
                    }
                }
                b"w:tc" => {
                    if table_depth == 1 {
                        if let Some(row) = tables.last_mut().and_then(|t| t.rows.last_mut()) {
                            row.cells.push(String::new());
                        }
                    }
                }
                b"w:p" => {
                    in_paragraph = true;
                    para_buf.clear();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" => {
                    in_paragraph = false;
                    if table_depth == 0 {
                        paragraphs.push(para_buf.clone());
                    } else if let Some(cell) = tables
                        .last_mut()
                        .and_then(|t| t.rows.last_mut())
                        .and_then(|r| r.cells.last_mut())
                    {
                        if !cell.is_empty() {
                            cell.push('\n');
                        }
                        cell.push_str(&para_buf);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => {
                if in_paragraph {
                    match e.name().as_ref() {
                        b"w:tab" => para_buf.push('\t'),
                        b"w:br" | b"w:cr" => para_buf.push('\n'),
                        _ => {}
                    }
                }
            }
            Event::Text(t) => {
                if in_text && in_paragraph {
                    let text = t.unescape().map_err(|e| EngineError::DocumentRead {
                        document: source.to_string(),
                        message: format!("malformed XML text: {}", e),
                    })?;
                    para_buf.push_str(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(Document { paragraphs, tables })
}
