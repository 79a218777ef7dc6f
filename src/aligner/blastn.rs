use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::aligner::{run_tool, Aligner, AlignerError};
use crate::core::types::CallMethod;

/// Default BLAST database prefix
pub const DEFAULT_DATABASE: &str = "database/campylobacter_db";

/// Default e-value cutoff passed to blastn
pub const DEFAULT_EVALUE: f64 = 1e-10;

/// Default `-max_target_seqs`
pub const DEFAULT_MAX_TARGET_SEQS: usize = 5;

/// `blastn` run against the serotype reference database
#[derive(Debug, Clone)]
pub struct Blastn {
    /// Path or name of the blastn executable
    pub program: PathBuf,
    /// BLAST database prefix
    pub database: PathBuf,
    pub evalue: f64,
    pub max_target_seqs: usize,
}

impl Default for Blastn {
    fn default() -> Self {
        Self {
            program: PathBuf::from("blastn"),
            database: PathBuf::from(DEFAULT_DATABASE),
            evalue: DEFAULT_EVALUE,
            max_target_seqs: DEFAULT_MAX_TARGET_SEQS,
        }
    }
}

impl Blastn {
    /// Command-line arguments for one search writing to `out`
    fn arguments(&self, query: &Path, out: &Path) -> Vec<std::ffi::OsString> {
        let mut args: Vec<std::ffi::OsString> = Vec::with_capacity(12);
        args.push("-query".into());
        args.push(query.as_os_str().to_owned());
        args.push("-db".into());
        args.push(self.database.as_os_str().to_owned());
        args.push("-out".into());
        args.push(out.as_os_str().to_owned());
        args.push("-outfmt".into());
        args.push("6".into());
        args.push("-evalue".into());
        args.push(self.evalue.to_string().into());
        args.push("-max_target_seqs".into());
        args.push(self.max_target_seqs.to_string().into());
        args
    }
}

impl Aligner for Blastn {
    fn method(&self) -> CallMethod {
        CallMethod::Alignment
    }

    fn search(&self, query: &Path) -> Result<Vec<u8>, AlignerError> {
        info!("Running blastn on {}...", query.display());

        // Removed when dropped, on success or failure
        let out = NamedTempFile::with_suffix(".txt")?;
        let args = self.arguments(query, out.path());
        let arg_refs: Vec<&OsStr> = args.iter().map(std::ffi::OsString::as_os_str).collect();

        run_tool(&self.program, &arg_refs)?;

        Ok(std::fs::read(out.path())?)
    }
}
