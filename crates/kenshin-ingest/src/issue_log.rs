//! Append-only issue log file.
//!
//! Each run writes a `Start` line, one line per reported issue and a
//! `Finish` line, all prefixed with a local timestamp:
//!
//! ```text
//! 2024/04/01 09:30:00 Start
//! 2024/04/01 09:30:01 20240401001 山田 太郎: required field [保険者番号] is empty
//! 2024/04/01 09:30:02 Finish
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use kenshin_model::{ConvertError, IssueSink};

use crate::error::{IngestError, Result};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Source of timestamps for log lines.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Issue sink writing timestamped lines to a file.
///
/// [`IssueSink::report`] cannot fail, so the first write error is kept and
/// returned by [`IssueLog::finish`]; later lines are dropped.
pub struct IssueLog<W: Write> {
    path: PathBuf,
    out: W,
    clock: Clock,
    written: usize,
    error: Option<std::io::Error>,
}

impl IssueLog<BufWriter<File>> {
    /// Open `path` for appending, creating it when absent.
    pub fn append(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| IngestError::FileCreate {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> IssueLog<W> {
    pub fn new(out: W, path: &Path) -> Self {
        Self::with_clock(out, path, local_now)
    }

    pub fn with_clock(out: W, path: &Path, clock: Clock) -> Self {
        Self {
            path: path.to_path_buf(),
            out,
            clock,
            written: 0,
            error: None,
        }
    }

    /// Issue lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn start(&mut self) -> Result<()> {
        self.line("Start");
        self.take_error()
    }

    /// Write the `Finish` line, flush, and hand back the writer.
    pub fn finish(mut self) -> Result<W> {
        self.line("Finish");
        if self.error.is_none()
            && let Err(e) = self.out.flush()
        {
            self.error = Some(e);
        }
        self.take_error()?;
        Ok(self.out)
    }

    fn line(&mut self, message: &str) {
        if self.error.is_some() {
            return;
        }
        let stamp = (self.clock)().format(TIMESTAMP_FORMAT);
        if let Err(e) = writeln!(self.out, "{stamp} {message}") {
            self.error = Some(e);
        }
    }

    fn take_error(&mut self) -> Result<()> {
        match self.error.take() {
            Some(source) => Err(IngestError::FileWrite {
                path: self.path.clone(),
                source,
            }),
            None => Ok(()),
        }
    }
}

impl<W: Write> IssueSink for IssueLog<W> {
    fn report(&mut self, record: &str, error: &ConvertError) {
        self.line(&format!("{record}: {error}"));
        self.written += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn lines_are_timestamped() {
        let mut log = IssueLog::with_clock(Vec::new(), Path::new("log.txt"), fixed);
        log.start().unwrap();
        log.report(
            "20240401001 山田 太郎",
            &ConvertError::RequiredMissing { field: "保険者番号" },
        );
        assert_eq!(log.written(), 1);
        let bytes = log.finish().unwrap();

        insta::assert_snapshot!(String::from_utf8(bytes).unwrap(), @r"
        2024/04/01 09:30:00 Start
        2024/04/01 09:30:00 20240401001 山田 太郎: required field [保険者番号] is empty
        2024/04/01 09:30:00 Finish
        ");
    }
}
