use crate::catalog::SerotypeMap;
use crate::core::call::SerotypeCall;
use crate::core::hit::AlignmentHit;
use crate::core::types::CallMethod;

/// Minimum percent identity for a hit to support a serotype call
pub const MIN_IDENTITY_PCT: f64 = 95.0;

/// Minimum percent query coverage for a hit to support a serotype call
pub const MIN_COVERAGE_PCT: f64 = 80.0;

/// Whether a hit clears both acceptance thresholds
#[must_use]
pub fn passes_thresholds(hit: &AlignmentHit) -> bool {
    hit.identity_pct >= MIN_IDENTITY_PCT && hit.coverage_pct >= MIN_COVERAGE_PCT
}

/// Turns ranked hits into serotype calls.
///
/// The thresholds are fixed; they are not part of any runtime configuration.
pub struct SerotypeCaller<'a> {
    map: &'a SerotypeMap,
    method: CallMethod,
}

impl<'a> SerotypeCaller<'a> {
    /// `method` records how the hits were produced and is stamped on every call
    pub fn new(map: &'a SerotypeMap, method: CallMethod) -> Self {
        Self { map, method }
    }

    /// Emit one call per accepted hit, preserving rank order.
    ///
    /// An empty result means no serotype was detected.
    #[must_use]
    pub fn call(&self, ranked: &[AlignmentHit]) -> Vec<SerotypeCall> {
        ranked
            .iter()
            .filter(|hit| passes_thresholds(hit))
            .map(|hit| {
                let label = self.map.label_for(&hit.subject_accession);
                SerotypeCall::from_hit(hit, label, self.method)
            })
            .collect()
    }
}
