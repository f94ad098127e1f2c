//! Conversion run: read the source, build every row, write the destination
//! and log each field problem.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use kenshin_ingest::{DestinationWriter, IssueLog, read_source};
use kenshin_layout::{RowBuilder, header};
use kenshin_model::{ConvertError, ErrorKind, IssueSink, Profile, SourceRecord};
use tracing::{info, info_span, warn};

use crate::logging::redact_value;

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub issue_log: PathBuf,
    pub profile: Profile,
    pub run_date: NaiveDate,
}

/// Counts reported after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub issue_log: PathBuf,
    pub records: usize,
    pub issues: BTreeMap<ErrorKind, usize>,
    /// Characters written as references because Shift_JIS lacks them.
    pub unmappable: usize,
}

impl RunSummary {
    pub fn issue_count(&self) -> usize {
        self.issues.values().sum()
    }

    /// Whether any field problem was reported.
    pub fn has_issues(&self) -> bool {
        self.issue_count() > 0
    }
}

/// Sink that appends to the issue log, counts by kind and emits a warning.
pub struct RunSink<'a, W: Write> {
    log: &'a mut IssueLog<W>,
    counts: BTreeMap<ErrorKind, usize>,
}

impl<'a, W: Write> RunSink<'a, W> {
    pub fn new(log: &'a mut IssueLog<W>) -> Self {
        Self {
            log,
            counts: BTreeMap::new(),
        }
    }

    pub fn into_counts(self) -> BTreeMap<ErrorKind, usize> {
        self.counts
    }
}

impl<W: Write> IssueSink for RunSink<'_, W> {
    fn report(&mut self, record: &str, error: &ConvertError) {
        *self.counts.entry(error.kind()).or_insert(0) += 1;
        warn!(record = redact_value(record), kind = %error.kind(), "field problem");
        self.log.report(record, error);
    }
}

/// Convert `options.input` into `options.output`.
///
/// Field problems are logged and counted; only I/O failures are errors.
pub fn convert(options: &ConvertOptions) -> Result<RunSummary> {
    let span = info_span!(
        "convert",
        input = %options.input.display(),
        output = %options.output.display()
    );
    let _guard = span.enter();

    let source = read_source(&options.input).context("read source")?;
    info!(records = source.records.len(), "source loaded");

    let mut log = IssueLog::append(&options.issue_log).context("open issue log")?;
    log.start().context("write issue log")?;
    // The Finish line is written even when the destination fails.
    let written = write_destination(options, &source.records, &mut log);
    let closed = log.finish().context("close issue log");
    let (issues, unmappable) = written?;
    closed?;

    let summary = RunSummary {
        input: options.input.clone(),
        output: options.output.clone(),
        issue_log: options.issue_log.clone(),
        records: source.records.len(),
        issues,
        unmappable,
    };
    info!(
        records = summary.records,
        issues = summary.issue_count(),
        unmappable = summary.unmappable,
        "conversion complete"
    );
    Ok(summary)
}

fn write_destination<W: Write>(
    options: &ConvertOptions,
    records: &[SourceRecord],
    log: &mut IssueLog<W>,
) -> Result<(BTreeMap<ErrorKind, usize>, usize)> {
    let mut writer = DestinationWriter::create(&options.output).context("create output")?;
    writer.write_row(header()).context("write header")?;

    let builder = RowBuilder::new(&options.profile, options.run_date);
    let mut sink = RunSink::new(log);
    for record in records {
        let row = builder.build(record, &mut sink);
        writer.write_row(&row).context("write record")?;
    }
    let issues = sink.into_counts();

    let unmappable = writer.unmappable();
    writer.finish().context("flush output")?;
    Ok((issues, unmappable))
}

/// Default destination path: `<dir>/<prefix><YYYYMMDD>.csv`.
pub fn default_output_path(dir: &Path, profile: &Profile, run_date: NaiveDate) -> PathBuf {
    let stamp = run_date.format("%Y%m%d").to_string();
    dir.join(profile.output_file_name(&stamp))
}
