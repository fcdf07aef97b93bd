//! Batch processing of timesheet documents.
//!
//! Documents are processed one at a time, each fully extracted and costed
//! before the next begins; no state is shared between them. A document that
//! fails to read or validate is recorded as a [`DocumentFailure`] and the
//! batch continues — one bad upload must not sink a week's payroll run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::calculation::compute_pay;
use crate::config::PayrollConfig;
use crate::document::{Document, docx};
use crate::error::{EngineError, EngineResult};
use crate::extraction::extract;
use crate::models::ReportRow;
use crate::report::build_row;

/// A document the batch could not process, with the reason.
#[derive(Debug)]
pub struct DocumentFailure {
    /// The source name of the failing document.
    pub source: String,
    /// What went wrong.
    pub error: EngineError,
}

impl std::fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source, self.error)
    }
}

/// The result of a batch run: one row per processed document plus the
/// failures that were skipped over.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Report rows for the documents that processed cleanly.
    pub rows: Vec<ReportRow>,
    /// Documents that failed, in input order.
    pub failures: Vec<DocumentFailure>,
}

/// Extracts and costs a single already-loaded document.
///
/// This is the per-document pipeline: field extraction, rate resolution,
/// pay calculation, row assembly. Skipped day-rows are logged at debug
/// level; they are diagnostics, not errors.
pub fn cost_document(
    document: &Document,
    source: &str,
    config: &PayrollConfig,
) -> EngineResult<ReportRow> {
    let extraction = extract(document, source);

    for skipped in &extraction.skipped {
        debug!(
            source = %source,
            table = skipped.table,
            row = skipped.row,
            reason = %skipped.reason,
            "Skipped day-row"
        );
    }

    let timesheet = &extraction.timesheet;
    let rate = config.rate_table().rate_for(&timesheet.name);
    let pay = compute_pay(&timesheet.shifts, rate, config.policy())?;

    Ok(build_row(timesheet, &pay, source))
}

/// Reads, extracts and costs a single `.docx` file.
pub fn process_document<P: AsRef<Path>>(path: P, config: &PayrollConfig) -> EngineResult<ReportRow> {
    let path = path.as_ref();
    let source = docx::source_label(path);
    let document = docx::read_path(path)?;
    cost_document(&document, &source, config)
}

/// Processes a list of document paths, collecting rows and failures.
///
/// Never fails as a whole: each path either contributes a row or a
/// [`DocumentFailure`].
pub fn process_paths<I>(paths: I, config: &PayrollConfig) -> BatchOutcome
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut outcome = BatchOutcome::default();

    for path in paths {
        let source = docx::source_label(&path);
        match process_document(&path, config) {
            Ok(row) => {
                info!(
                    source = %source,
                    name = %row.name,
                    total_hours = %row.total_hours,
                    total_pay = %row.total_pay,
                    "Processed timesheet"
                );
                outcome.rows.push(row);
            }
            Err(error) => {
                warn!(source = %source, error = %error, "Failed to process timesheet");
                outcome.failures.push(DocumentFailure { source, error });
            }
        }
    }

    outcome
}

/// Processes every `.docx` file in a folder, in name order.
///
/// # Errors
///
/// Returns an error only if the folder itself cannot be listed; individual
/// document failures land in the outcome's `failures`.
pub fn process_folder<P: AsRef<Path>>(dir: P, config: &PayrollConfig) -> EngineResult<BatchOutcome> {
    let dir = dir.as_ref();

    let entries = fs::read_dir(dir).map_err(|e| EngineError::DocumentRead {
        document: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
        })
        .collect();
    paths.sort();

    Ok(process_paths(paths, config))
}
