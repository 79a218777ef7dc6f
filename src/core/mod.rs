//! Core data types for serotype calling.
//!
//! - [`AlignmentHit`]: one aligner result row with derived coverage and query length
//! - [`SerotypeCall`]: a serotype prediction supported by one accepted hit
//! - [`Confidence`], [`CallMethod`]: labels carried on each call
//!
//! ## Query Length
//!
//! Tabular aligner output does not include the query length, so it is read from
//! the query identifier when the assembler encodes it there:
//!
//! | Query identifier                        | Query length |
//! |-----------------------------------------|--------------|
//! | `NODE_1_length_312435_cov_1075.888199`  | 312435       |
//! | `contig_1`                              | 23868 (fallback) |

pub mod call;
pub mod hit;
pub mod types;

pub use call::SerotypeCall;
pub use hit::AlignmentHit;
pub use types::{CallMethod, Confidence};
