use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read serotype map {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Lookup from reference accession to serotype label.
///
/// Loaded once from a TSV with a header line followed by
/// `serotype<TAB>accession[<TAB>...]` rows, and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct SerotypeMap {
    by_accession: HashMap<String, String>,
}

impl SerotypeMap {
    /// Create an empty map; every lookup falls back to the accession
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the map from a TSV file.
    ///
    /// A missing file is not an error: the map is empty and calls are labelled
    /// with their accession instead.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Read` if the file exists but cannot be read.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let map = Self::from_tsv_text(&content);
                debug!(
                    "Loaded {} serotype labels from {}",
                    map.len(),
                    path.display()
                );
                Ok(map)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Serotype map {} not found; calls will be labelled by accession",
                    path.display()
                );
                Ok(Self::new())
            }
            Err(source) => Err(CatalogError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Parse TSV text. The first line is always treated as the header.
    /// Rows with fewer than two fields are skipped; a repeated accession
    /// keeps the last label seen.
    #[must_use]
    pub fn from_tsv_text(text: &str) -> Self {
        let mut by_accession = HashMap::new();

        for line in text.lines().skip(1) {
            let fields: Vec<&str> = line.trim().split('\t').collect();
            if fields.len() < 2 {
                continue;
            }
            by_accession.insert(fields[1].to_string(), fields[0].to_string());
        }

        Self { by_accession }
    }

    /// Serotype label for an accession, if known
    #[must_use]
    pub fn get(&self, accession: &str) -> Option<&str> {
        self.by_accession.get(accession).map(String::as_str)
    }

    /// Serotype label for an accession, falling back to the accession itself
    #[must_use]
    pub fn label_for<'a>(&'a self, accession: &'a str) -> &'a str {
        self.get(accession).unwrap_or(accession)
    }

    #[must_use]
    pub fn contains(&self, accession: &str) -> bool {
        self.by_accession.contains_key(accession)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_accession.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_accession.is_empty()
    }

    /// All mapped accessions, in no particular order
    pub fn accessions(&self) -> impl Iterator<Item = &str> {
        self.by_accession.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for SerotypeMap {
    /// Build from `(accession, serotype)` pairs
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            by_accession: iter.into_iter().collect(),
        }
    }
}
