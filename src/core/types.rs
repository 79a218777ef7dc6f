use serde::{Deserialize, Serialize};

/// Confidence level attached to a serotype call
///
/// Every call that clears the acceptance thresholds is `High`; there is no
/// graded scale below it because a hit either matches or it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
        }
    }
}

/// How a serotype call was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallMethod {
    /// Nucleotide alignment of contigs against the serotype reference database
    Alignment,
}

impl std::fmt::Display for CallMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alignment => write!(f, "alignment"),
        }
    }
}
