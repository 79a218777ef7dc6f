//! Alignment-result interpretation: ranking hits and calling serotypes.
//!
//! - [`rank_hits`]: stable sort by bit score, strongest first
//! - [`SerotypeCaller`]: applies the acceptance thresholds and labels hits
//! - [`SerotypingEngine`]: runs both steps and returns an [`Analysis`]
//!
//! ## Acceptance Rule
//!
//! A hit supports a call when
//! `identity >= 95.0 %` **and** `coverage >= 80.0 %`.
//! Both thresholds are compile-time constants so calls stay reproducible
//! between runs and releases.
//!
//! ## Example
//!
//! ```rust
//! use campyser::{CallMethod, SerotypeMap, SerotypingEngine};
//! use campyser::parsing::tabular::parse_tabular_text;
//!
//! let map = SerotypeMap::from_tsv_text("serotype\taccession\nO:2\tACC001\n");
//! let hits = parse_tabular_text(
//!     "NODE_1_length_1000_cov_5\tACC001\t98.5\t950\t10\t1\t1\t950\t1\t950\t1e-50\t800\n",
//! );
//!
//! let analysis = SerotypingEngine::new(&map, CallMethod::Alignment).analyze(hits);
//! assert_eq!(analysis.best_call().unwrap().serotype, "O:2");
//! ```

pub mod caller;
pub mod engine;
pub mod ranking;

pub use caller::{passes_thresholds, SerotypeCaller, MIN_COVERAGE_PCT, MIN_IDENTITY_PCT};
pub use engine::{Analysis, SerotypingEngine};
pub use ranking::{rank_hits, top_hits, DEFAULT_HIT_WINDOW};
