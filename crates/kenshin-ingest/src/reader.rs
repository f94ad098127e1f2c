//! Tab-delimited Shift_JIS source reading.

use std::path::Path;

use encoding_rs::SHIFT_JIS;
use kenshin_model::SourceRecord;

use crate::error::{IngestError, Result};

/// Source records read from one file. The title row is discarded.
#[derive(Debug, Clone, Default)]
pub struct SourceFile {
    pub records: Vec<SourceRecord>,
    /// Number of fields in the discarded title row.
    pub title_width: usize,
}

/// Read a Shift_JIS tab-delimited source file.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_source(&bytes, path)
}

/// Decode and split already-loaded source bytes. `path` only labels errors.
pub fn parse_source(bytes: &[u8], path: &Path) -> Result<SourceFile> {
    let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(IngestError::Decode {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let title_width = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        records.push(row.iter().map(str::to_string).collect());
    }

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        title_width,
        "read source file"
    );
    Ok(SourceFile {
        records,
        title_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kenshin_model::fields;

    fn sjis(text: &str) -> Vec<u8> {
        SHIFT_JIS.encode(text).0.into_owned()
    }

    #[test]
    fn title_row_is_discarded() {
        let bytes = sjis("所属cd1\t所属cd2\n04019001\t本社\n98009001\t工場\n");
        let file = parse_source(&bytes, Path::new("in.txt")).unwrap();
        assert_eq!(file.title_width, 2);
        assert_eq!(file.records.len(), 2);
        assert_eq!(file.records[1].get(fields::ORGANIZATION_CODE), "98009001");
    }

    #[test]
    fn ragged_rows_are_accepted() {
        let bytes = sjis("a\tb\tc\n1\n1\t2\t3\t4\n");
        let file = parse_source(&bytes, Path::new("in.txt")).unwrap();
        assert_eq!(file.records[0].original_len(), 1);
        assert_eq!(file.records[1].original_len(), 4);
    }

    #[test]
    fn katakana_survives_decoding() {
        let bytes = sjis("title\nｻｲｷﾝ\n");
        let file = parse_source(&bytes, Path::new("in.txt")).unwrap();
        assert_eq!(file.records[0].at(0), "ｻｲｷﾝ");
    }

    #[test]
    fn invalid_bytes_are_rejected() {
        let error = parse_source(&[b'a', b'\n', 0x81, b'\n'], Path::new("bad.txt")).unwrap_err();
        assert!(matches!(error, IngestError::Decode { .. }));
    }
}
