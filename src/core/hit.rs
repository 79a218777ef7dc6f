use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query length assumed when the query identifier carries no `length_` token.
///
/// This is the nominal length of the serotype reference loci, so an
/// unannotated query is treated as a full-length input rather than a fragment.
pub const FALLBACK_QUERY_LENGTH: u64 = 23_868;

/// Minimum number of columns in a tabular (outfmt 6) result row
pub const MIN_TABULAR_FIELDS: usize = 12;

/// Marker preceding the contig length in assembler-style identifiers
/// such as `NODE_1_length_312435_cov_1075.888199`.
const LENGTH_MARKER: &str = "length_";

// Column indices in the standard 12-column tabular layout
const COL_QUERY_ID: usize = 0;
const COL_SUBJECT_ID: usize = 1;
const COL_IDENTITY: usize = 2;
const COL_ALIGNMENT_LENGTH: usize = 3;
const COL_EVALUE: usize = 10;
const COL_BITSCORE: usize = 11;

/// Why a tabular row could not be turned into a hit.
///
/// Both variants are recoverable: the row is skipped and parsing continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HitError {
    #[error("expected at least 12 fields, found {0}")]
    TooFewFields(usize),

    #[error("invalid {column} value: '{value}'")]
    InvalidNumber { column: &'static str, value: String },
}

/// One parsed aligner result row with derived quality metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentHit {
    /// Contig/sequence identifier being searched
    pub query_id: String,

    /// Reference sequence identifier
    pub subject_accession: String,

    /// Percent identity over the aligned region
    pub identity_pct: f64,

    /// Number of aligned bases
    pub alignment_length: u64,

    /// Query length derived from the query identifier
    pub query_length: u64,

    /// `alignment_length / query_length * 100`, not clamped
    pub coverage_pct: f64,

    pub evalue: f64,

    pub bitscore: f64,
}

impl AlignmentHit {
    /// Build a hit from the tab-split fields of one tabular row.
    ///
    /// Only columns 0, 1, 2, 3, 10 and 11 are read; the rest must exist but
    /// are otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns `HitError::TooFewFields` if the row has fewer than 12 fields,
    /// or `HitError::InvalidNumber` if a numeric column cannot be parsed.
    pub fn from_fields(fields: &[&str]) -> Result<Self, HitError> {
        if fields.len() < MIN_TABULAR_FIELDS {
            return Err(HitError::TooFewFields(fields.len()));
        }

        let query_id = fields[COL_QUERY_ID].to_string();
        let subject_accession = fields[COL_SUBJECT_ID].to_string();
        let identity_pct: f64 = parse_number(fields[COL_IDENTITY], "identity")?;
        let alignment_length: u64 =
            parse_number(fields[COL_ALIGNMENT_LENGTH], "alignment length")?;
        let evalue: f64 = parse_number(fields[COL_EVALUE], "e-value")?;
        let bitscore: f64 = parse_number(fields[COL_BITSCORE], "bit score")?;

        let query_length = derive_query_length(&query_id);

        Ok(Self {
            query_id,
            subject_accession,
            identity_pct,
            alignment_length,
            query_length,
            coverage_pct: coverage_pct(alignment_length, query_length),
            evalue,
            bitscore,
        })
    }

    /// Build a hit from one raw tab-separated line
    ///
    /// # Errors
    ///
    /// See [`AlignmentHit::from_fields`].
    pub fn from_line(line: &str) -> Result<Self, HitError> {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        Self::from_fields(&fields)
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, column: &'static str) -> Result<T, HitError> {
    raw.trim().parse().map_err(|_| HitError::InvalidNumber {
        column,
        value: raw.to_string(),
    })
}

/// Percentage of the query spanned by the alignment.
///
/// Not clamped: an alignment longer than the derived query length
/// reports more than 100%.
#[must_use]
pub fn coverage_pct(alignment_length: u64, query_length: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)] // Contig lengths are far below 2^52
    {
        alignment_length as f64 / query_length as f64 * 100.0
    }
}

/// Derive the query length from an assembler-style identifier.
///
/// Looks for the first `length_` marker followed by one or more digits and
/// returns that integer. Falls back to [`FALLBACK_QUERY_LENGTH`] when no such
/// token exists, when it overflows, or when it is zero.
///
/// # Examples
///
/// ```
/// use campyser::core::hit::{derive_query_length, FALLBACK_QUERY_LENGTH};
///
/// assert_eq!(derive_query_length("NODE_1_length_312435_cov_1075.888199"), 312_435);
/// assert_eq!(derive_query_length("contig_7"), FALLBACK_QUERY_LENGTH);
/// ```
#[must_use]
pub fn derive_query_length(query_id: &str) -> u64 {
    for (idx, _) in query_id.match_indices(LENGTH_MARKER) {
        let rest = &query_id[idx + LENGTH_MARKER.len()..];
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            continue;
        }

        return match rest[..digits_end].parse::<u64>() {
            Ok(length) if length > 0 => length,
            _ => FALLBACK_QUERY_LENGTH,
        };
    }

    FALLBACK_QUERY_LENGTH
}
