//! Serotype reference catalog.
//!
//! The catalog maps reference accessions in the alignment database to the
//! serotype they represent. It is loaded from a small TSV file:
//!
//! ```text
//! serotype    accession
//! HS1/44      AY332625
//! HS2         AY332624
//! ```
//!
//! Accessions missing from the catalog are still reported, labelled with the
//! accession itself.
//!
//! ## Example
//!
//! ```rust,no_run
//! use campyser::SerotypeMap;
//! use std::path::Path;
//!
//! let map = SerotypeMap::load(Path::new("ser_an.txt")).unwrap();
//! println!("{}", map.label_for("AY332625"));
//! ```

pub mod serotype_map;

pub use serotype_map::{CatalogError, SerotypeMap};
