use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::SerotypeMap;
use crate::core::call::SerotypeCall;
use crate::core::hit::AlignmentHit;
use crate::core::types::CallMethod;
use crate::matching::caller::SerotypeCaller;
use crate::matching::ranking::{rank_hits, top_hits};

/// Outcome of interpreting one set of alignment hits
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// All hits, ranked by bit score
    pub hits: Vec<AlignmentHit>,

    /// Accepted calls in rank order; empty when no serotype was detected
    pub calls: Vec<SerotypeCall>,
}

impl Analysis {
    /// The single best-supported prediction
    #[must_use]
    pub fn best_call(&self) -> Option<&SerotypeCall> {
        self.calls.first()
    }

    #[must_use]
    pub fn is_no_call(&self) -> bool {
        self.calls.is_empty()
    }

    /// The first `n` ranked hits, for display
    #[must_use]
    pub fn top_hits(&self, n: usize) -> &[AlignmentHit] {
        top_hits(&self.hits, n)
    }
}

/// Runs ranking and calling over the hits of one analysis
pub struct SerotypingEngine<'a> {
    caller: SerotypeCaller<'a>,
}

impl<'a> SerotypingEngine<'a> {
    /// Engine labelling hits through `map`, with calls tagged by `method`.
    ///
    /// Pass the producing aligner's [`crate::aligner::Aligner::method`].
    pub fn new(map: &'a SerotypeMap, method: CallMethod) -> Self {
        Self {
            caller: SerotypeCaller::new(map, method),
        }
    }

    /// Rank the hits and derive serotype calls from the full ranked list
    #[must_use]
    pub fn analyze(&self, hits: Vec<AlignmentHit>) -> Analysis {
        let hits = rank_hits(hits);
        let calls = self.caller.call(&hits);

        debug!(
            "{} of {} hits passed acceptance thresholds",
            calls.len(),
            hits.len()
        );
        match calls.first() {
            Some(best) => info!("Predicted serotype {} ({})", best.serotype, best.accession),
            None => info!("No serotype detected"),
        }

        Analysis { hits, calls }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tabular::parse_tabular_text;

    fn map() -> SerotypeMap {
        SerotypeMap::from_tsv_text("serotype\taccession\nO:2\tACC001\nO:4\tACC004\n")
    }

    fn analyze(map: &SerotypeMap, text: &str) -> Analysis {
        SerotypingEngine::new(map, CallMethod::Alignment).analyze(parse_tabular_text(text))
    }

    #[test]
    fn test_best_call_is_highest_bitscore() {
        let text = "NODE_1_length_1000_cov_5\tACC001\t98.5\t950\t10\t1\t1\t950\t1\t950\t1e-50\t800
NODE_1_length_1000_cov_5\tACC004\t99.5\t990\t2\t0\t1\t990\t1\t990\t0.0\t1700
NODE_1_length_1000_cov_5\tACC009\t70.0\t990\t2\t0\t1\t990\t1\t990\t0.0\t2000
";
        let map = map();
        let analysis = analyze(&map, text);

        assert_eq!(analysis.hits.len(), 3);
        assert_eq!(analysis.hits[0].subject_accession, "ACC009");
        assert_eq!(analysis.calls.len(), 2);
        assert_eq!(analysis.best_call().unwrap().serotype, "O:4");
        assert!(!analysis.is_no_call());
        assert!(analysis
            .calls
            .iter()
            .all(|call| call.method == CallMethod::Alignment));
    }

    #[test]
    fn test_empty_output_is_no_call() {
        let map = map();
        let analysis = analyze(&map, "");
        assert!(analysis.hits.is_empty());
        assert!(analysis.is_no_call());
        assert!(analysis.best_call().is_none());
    }

    #[test]
    fn test_low_identity_row_is_no_call() {
        let text = "NODE_1_length_1000_cov_5\tACC001\t90.0\t950\t10\t1\t1\t950\t1\t950\t1e-50\t800\n";
        let map = map();
        let analysis = analyze(&map, text);
        assert_eq!(analysis.hits.len(), 1);
        assert!(analysis.is_no_call());
    }

    #[test]
    fn test_top_hits_window() {
        let text = (0..7)
            .map(|i| format!("q_length_100\tACC{i}\t99\t90\t0\t0\t1\t90\t1\t90\t0\t{i}\n"))
            .collect::<String>();
        let map = map();
        let analysis = analyze(&map, &text);
        let top = analysis.top_hits(5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].subject_accession, "ACC6");
    }
}
