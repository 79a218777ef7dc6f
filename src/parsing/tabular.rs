use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::hit::AlignmentHit;
use crate::parsing::ParseError;

/// Parse a tabular (outfmt 6) result file into hits
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read. Malformed rows,
/// including rows that are not valid UTF-8, are skipped, never reported as
/// errors.
pub fn parse_tabular_file(path: &Path) -> Result<Vec<AlignmentHit>, ParseError> {
    let content = std::fs::read(path)?;
    Ok(parse_tabular_bytes(&content))
}

/// Read a tabular result stream fully, then parse it
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails.
pub fn parse_tabular_reader<R: Read>(mut reader: R) -> Result<Vec<AlignmentHit>, ParseError> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    Ok(parse_tabular_bytes(&content))
}

/// Parse tabular text into hits, in input order.
///
/// Blank lines and `#` comment lines are ignored. Rows with fewer than 12
/// fields or unparsable numeric columns are skipped.
#[must_use]
pub fn parse_tabular_text(text: &str) -> Vec<AlignmentHit> {
    parse_tabular_bytes(text.as_bytes())
}

/// Parse raw tabular output into hits, in input order.
///
/// Decoding is per line: a row that is not valid UTF-8 is skipped like any
/// other malformed row and the remaining rows are still parsed.
#[must_use]
pub fn parse_tabular_bytes(bytes: &[u8]) -> Vec<AlignmentHit> {
    let mut hits = Vec::new();
    let mut skipped = 0usize;

    for (i, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim(),
            Err(e) => {
                // Line numbers are 1-based for user friendliness
                debug!("Skipping alignment row {}: not valid UTF-8 ({e})", i + 1);
                skipped += 1;
                continue;
            }
        };
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match AlignmentHit::from_line(line) {
            Ok(hit) => hits.push(hit),
            Err(e) => {
                debug!("Skipping alignment row {}: {e}", i + 1);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {skipped} malformed alignment row(s)");
    }
    debug!("Parsed {} alignment hits", hits.len());

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTFMT6: &str = "NODE_1_length_1000_cov_5\tACC001\t98.5\t950\t10\t1\t1\t950\t1\t950\t1e-50\t800
NODE_2_length_2000_cov_3\tACC002\t99.1\t1900\t5\t0\t1\t1900\t1\t1900\t0.0\t3400
";

    #[test]
    fn test_parse_tabular_text() {
        let hits = parse_tabular_text(OUTFMT6);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].subject_accession, "ACC001");
        assert_eq!(hits[1].query_length, 2000);
        assert!((hits[1].coverage_pct - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let text = format!("{OUTFMT6}truncated\trow\t99.0\n\nq\tACC\tnot_a_number\t1\t0\t0\t1\t1\t1\t1\t0\t1\n");
        let hits = parse_tabular_text(&text);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_comment_lines_skipped() {
        let text = format!("# BLASTN 2.15.0+\n# Fields: query acc.ver, subject acc.ver\n{OUTFMT6}");
        assert_eq!(parse_tabular_text(&text).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_tabular_text("").is_empty());
        assert!(parse_tabular_text("\n\n").is_empty());
    }

    #[test]
    fn test_parse_tabular_reader() {
        let hits = parse_tabular_reader(OUTFMT6.as_bytes()).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_non_utf8_row_skipped_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hits.tsv");
        let mut content = OUTFMT6.lines().next().unwrap().as_bytes().to_vec();
        content.extend_from_slice(b"\ncontig_\xff\tACC002\t99.0\t900\t0\t0\t1\t900\t1\t900\t0.0\t1600\n");
        std::fs::write(&path, content).unwrap();

        let hits = parse_tabular_file(&path).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subject_accession, "ACC001");
    }

    #[test]
    fn test_non_utf8_reader_is_not_an_error() {
        let hits = parse_tabular_reader(&b"contig_\xff\tACC002\n"[..]).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_tabular_file(&dir.path().join("missing.tsv"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
