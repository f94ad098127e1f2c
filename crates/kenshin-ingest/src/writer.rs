//! Comma-delimited Shift_JIS destination writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use encoding_rs::{EncoderResult, SHIFT_JIS};

use crate::error::{IngestError, Result};

/// Writes CRLF-terminated comma-delimited rows, encoded as Shift_JIS.
///
/// Characters Shift_JIS cannot represent are written as decimal character
/// references (`&#NNNN;`) and counted in [`DestinationWriter::unmappable`].
pub struct DestinationWriter<W: Write> {
    path: PathBuf,
    csv: csv::WriterBuilder,
    out: W,
    rows: usize,
    unmappable: usize,
}

impl DestinationWriter<BufWriter<File>> {
    /// Create (or truncate) the destination file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| IngestError::FileCreate {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> DestinationWriter<W> {
    /// Wrap any writer. `path` only labels errors.
    pub fn new(out: W, path: &Path) -> Self {
        let mut csv = csv::WriterBuilder::new();
        csv.terminator(csv::Terminator::CRLF).flexible(true);
        Self {
            path: path.to_path_buf(),
            csv,
            out,
            rows: 0,
            unmappable: 0,
        }
    }

    pub fn write_row<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut row = self.csv.from_writer(Vec::new());
        let line = row
            .write_record(fields)
            .and_then(|()| row.into_inner().map_err(|e| csv::Error::from(e.into_error())))
            .map_err(|e| IngestError::CsvWrite {
                path: self.path.clone(),
                source: e,
            })?;
        let text = String::from_utf8_lossy(&line);
        let (bytes, unmappable) = encode_shift_jis(&text);
        if unmappable > 0 {
            tracing::debug!(row = self.rows, unmappable, "characters outside Shift_JIS");
        }
        self.out.write_all(&bytes).map_err(|e| IngestError::FileWrite {
            path: self.path.clone(),
            source: e,
        })?;
        self.rows += 1;
        self.unmappable += unmappable;
        Ok(())
    }

    /// Rows written so far, header included.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Characters replaced because Shift_JIS cannot represent them.
    pub fn unmappable(&self) -> usize {
        self.unmappable
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().map_err(|e| IngestError::FileWrite {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(self.out)
    }
}

/// Encode `text` as Shift_JIS, returning the bytes and the number of
/// characters that had to be replaced.
pub fn encode_shift_jis(text: &str) -> (Vec<u8>, usize) {
    let mut encoder = SHIFT_JIS.new_encoder();
    let capacity = encoder
        .max_buffer_length_from_utf8_without_replacement(text.len())
        .unwrap_or(text.len() * 2);
    let mut buffer = vec![0u8; capacity.max(16)];
    let mut out = Vec::with_capacity(text.len());
    let mut unmappable = 0;
    let mut rest = text;
    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(rest, &mut buffer, true);
        out.extend_from_slice(&buffer[..written]);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(c) => {
                unmappable += 1;
                out.extend_from_slice(format!("&#{};", u32::from(c)).as_bytes());
            }
        }
    }
    (out, unmappable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(rows: &[&[&str]]) -> (String, usize) {
        let mut writer = DestinationWriter::new(Vec::new(), Path::new("out.csv"));
        for row in rows {
            writer.write_row(*row).unwrap();
        }
        let unmappable = writer.unmappable();
        let bytes = writer.finish().unwrap();
        (SHIFT_JIS.decode(&bytes).0.into_owned(), unmappable)
    }

    #[test]
    fn rows_end_with_crlf() {
        let (text, _) = written(&[&["a", "b"], &["1", ""]]);
        assert_eq!(text, "a,b\r\n1,\r\n");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let (text, _) = written(&[&["胃炎, 経過観察", "x"]]);
        assert_eq!(text, "\"胃炎, 経過観察\",x\r\n");
    }

    #[test]
    fn unmappable_characters_are_counted() {
        let (bytes, count) = encode_shift_jis("高😀血圧");
        assert_eq!(count, 1);
        let decoded = SHIFT_JIS.decode(&bytes).0.into_owned();
        assert_eq!(decoded, "高&#128512;血圧");
    }

    #[test]
    fn full_width_text_round_trips() {
        let (text, count) = written(&[&["リコー三愛", "ﾔﾏﾀﾞ"]]);
        assert_eq!(count, 0);
        assert_eq!(text, "リコー三愛,ﾔﾏﾀﾞ\r\n");
    }
}
