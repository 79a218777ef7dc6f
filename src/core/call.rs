use serde::{Deserialize, Serialize};

use crate::core::hit::AlignmentHit;
use crate::core::types::{CallMethod, Confidence};

/// A serotype prediction backed by one accepted alignment hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerotypeCall {
    /// Serotype label, or the accession itself when the map has no entry
    pub serotype: String,

    /// Reference accession of the supporting hit
    pub accession: String,

    pub confidence: Confidence,

    pub method: CallMethod,

    pub identity_pct: f64,

    pub coverage_pct: f64,

    pub evalue: f64,
}

impl SerotypeCall {
    /// Create a call from an accepted hit and its resolved serotype label
    #[must_use]
    pub fn from_hit(hit: &AlignmentHit, serotype: impl Into<String>, method: CallMethod) -> Self {
        Self {
            serotype: serotype.into(),
            accession: hit.subject_accession.clone(),
            confidence: Confidence::High,
            method,
            identity_pct: hit.identity_pct,
            coverage_pct: hit.coverage_pct,
            evalue: hit.evalue,
        }
    }
}
