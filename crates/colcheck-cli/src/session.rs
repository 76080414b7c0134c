//! One comparison run: acquire both paths, read headers, compare, report.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use colcheck_ingest::{Delimiter, HeaderSource};
use colcheck_model::{ColumnSequence, HeaderComparison, compare_headers};

use crate::prompt::{MODEL_PROMPT, NEW_PROMPT, RetryPolicy, resolve_path};
use crate::report::{ComparisonReport, ReportFormat, render};

/// Inputs for a comparison run.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Model file; prompted for when `None`.
    pub model: Option<PathBuf>,
    /// New file; prompted for when `None`.
    pub new: Option<PathBuf>,
    /// CSV delimiter applied to both files.
    pub delimiter: Option<Delimiter>,
    pub retry: RetryPolicy,
    pub format: ReportFormat,
}

/// What a completed run compared.
#[derive(Debug)]
pub struct SessionOutcome {
    pub model: HeaderSource,
    pub new: HeaderSource,
    pub model_columns: ColumnSequence,
    pub new_columns: ColumnSequence,
    pub comparison: HeaderComparison,
}

/// Runs one comparison and writes the rendered report to `output`.
///
/// Paths not set in `options` are read from `input`, with prompts and
/// invalid-path messages written to `prompts`.
pub fn run_session<R, P, W>(
    options: &SessionOptions,
    input: &mut R,
    prompts: &mut P,
    output: &mut W,
) -> Result<SessionOutcome>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let session_span = info_span!("session");
    let _session_guard = session_span.enter();

    let model_path = resolve_path(
        options.model.as_deref(),
        MODEL_PROMPT,
        input,
        prompts,
        options.retry,
    )
    .context("model file")?;
    let new_path = resolve_path(
        options.new.as_deref(),
        NEW_PROMPT,
        input,
        prompts,
        options.retry,
    )
    .context("new file")?;

    let model = HeaderSource::new(model_path).with_delimiter(options.delimiter);
    let new = HeaderSource::new(new_path).with_delimiter(options.delimiter);
    let model_columns = model.read()?;
    let new_columns = new.read()?;

    let comparison = compare_headers(&model_columns, &new_columns);
    info!(
        verdict = ?comparison.verdict(),
        model_columns = model_columns.len(),
        new_columns = new_columns.len(),
        removed = comparison.removed.len(),
        added = comparison.added.len(),
        "Compared headers"
    );
    if comparison.has_duplicates() {
        warn!(
            model = ?comparison.model_duplicates,
            new = ?comparison.new_duplicates,
            "Duplicate column names are ignored by the set comparison"
        );
    }

    let report = ComparisonReport {
        model_file: &model.path,
        new_file: &new.path,
        model_columns: &model_columns,
        new_columns: &new_columns,
        verdict: comparison.verdict(),
        comparison: &comparison,
    };
    let rendered = render(&report, options.format)?;
    output
        .write_all(rendered.as_bytes())
        .context("write report")?;
    output.flush().context("write report")?;

    Ok(SessionOutcome {
        model,
        new,
        model_columns,
        new_columns,
        comparison,
    })
}
