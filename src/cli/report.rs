use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use crate::cli::OutputFormat;
use crate::matching::engine::Analysis;
use crate::matching::DEFAULT_HIT_WINDOW;

/// Number of calls listed under "Detailed Results"
pub const DEFAULT_DETAIL_CALLS: usize = 3;

/// Controls what goes into a rendered report
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub verbose: bool,
    /// Ranked hits shown in the hit table
    pub hit_window: usize,
    /// Calls listed in verbose detail
    pub detail_calls: usize,
    /// Lines printed before the results in verbose text output
    pub preamble: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            hit_window: DEFAULT_HIT_WINDOW,
            detail_calls: DEFAULT_DETAIL_CALLS,
            preamble: Vec::new(),
        }
    }
}

/// Render an analysis in the requested format
///
/// # Errors
///
/// Returns an error if formatting or JSON serialization fails.
pub fn render(
    analysis: &Analysis,
    format: OutputFormat,
    options: &ReportOptions,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(analysis, options)?,
        OutputFormat::Json => render_json(analysis, options)?,
        OutputFormat::Tsv => render_tsv(analysis)?,
    })
}

/// Render and write the report to `output` (or stdout), returning the exit
/// status: success when a serotype was called, 1 otherwise.
///
/// # Errors
///
/// Returns an error if rendering fails or the output file cannot be written.
pub fn emit(
    analysis: &Analysis,
    format: OutputFormat,
    options: &ReportOptions,
    output: Option<&Path>,
) -> anyhow::Result<ExitCode> {
    let report = render(analysis, format, options)?;

    if let Some(path) = output {
        std::fs::write(path, &report)
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
        println!("Results saved to {}", path.display());
    } else {
        println!("{report}");
    }

    if analysis.is_no_call() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn render_text(analysis: &Analysis, options: &ReportOptions) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    if options.verbose && !options.preamble.is_empty() {
        for line in &options.preamble {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{}", "-".repeat(50))?;
    }

    let top = analysis.top_hits(options.hit_window);
    if !top.is_empty() {
        writeln!(out, "Top alignment hits:")?;
        writeln!(out, "{}", "-".repeat(80))?;
        writeln!(
            out,
            "{:<6} {:<20} {:<10} {:<10} {:<12} {:<10}",
            "Rank", "Accession", "Identity", "Coverage", "E-value", "Bit score"
        )?;
        writeln!(out, "{}", "-".repeat(80))?;
        for (i, hit) in top.iter().enumerate() {
            writeln!(
                out,
                "{:<6} {:<20} {:<10.1} {:<10.1} {:<12.2e} {:<10.1}",
                i + 1,
                hit.subject_accession,
                hit.identity_pct,
                hit.coverage_pct,
                hit.evalue,
                hit.bitscore
            )?;
        }
        writeln!(out)?;
    }

    let Some(best) = analysis.best_call() else {
        out.push_str("No serotype detected");
        return Ok(out);
    };

    writeln!(out, "Predicted Serotype: {}", best.serotype)?;
    writeln!(out, "Confidence: {}", best.confidence)?;
    writeln!(out, "Method: {}", best.method)?;
    writeln!(out, "Identity: {:.1}%", best.identity_pct)?;
    write!(out, "Coverage: {:.1}%", best.coverage_pct)?;

    if options.verbose {
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "Detailed Results:")?;
        writeln!(out, "{}", "-".repeat(30))?;
        write!(out, "Alignment Results:")?;
        for (i, call) in analysis.calls.iter().take(options.detail_calls).enumerate() {
            write!(
                out,
                "\n  {}. {} ({})\n     Identity: {:.1}%, Coverage: {:.1}%\n     E-value: {:.2e}",
                i + 1,
                call.serotype,
                call.accession,
                call.identity_pct,
                call.coverage_pct,
                call.evalue
            )?;
        }
    }

    Ok(out)
}

fn render_json(analysis: &Analysis, options: &ReportOptions) -> anyhow::Result<String> {
    let output = serde_json::json!({
        "prediction": analysis.best_call(),
        "calls": analysis.calls,
        "top_hits": analysis.top_hits(options.hit_window),
        "total_hits": analysis.hits.len(),
    });

    Ok(serde_json::to_string_pretty(&output)?)
}

fn render_tsv(analysis: &Analysis) -> Result<String, std::fmt::Error> {
    let mut out =
        String::from("rank\tserotype\taccession\tconfidence\tmethod\tidentity\tcoverage\tevalue");
    for (i, call) in analysis.calls.iter().enumerate() {
        write!(
            out,
            "\n{}\t{}\t{}\t{}\t{}\t{:.2}\t{:.2}\t{:e}",
            i + 1,
            call.serotype,
            call.accession,
            call.confidence,
            call.method,
            call.identity_pct,
            call.coverage_pct,
            call.evalue
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SerotypeMap;
    use crate::core::types::CallMethod;
    use crate::matching::SerotypingEngine;
    use crate::parsing::tabular::parse_tabular_text;

    const HITS: &str = "NODE_1_length_1000_cov_5\tACC001\t98.5\t950\t10\t1\t1\t950\t1\t950\t1e-50\t800
NODE_1_length_1000_cov_5\tACC002\t97.0\t900\t10\t1\t1\t900\t1\t900\t1e-40\t700
NODE_3_length_5000_cov_5\tACC003\t99.0\t100\t0\t0\t1\t100\t1\t100\t1e-20\t180
";

    fn analysis(text: &str) -> Analysis {
        let map = SerotypeMap::from_tsv_text("serotype\taccession\nO:2\tACC001\n");
        SerotypingEngine::new(&map, CallMethod::Alignment).analyze(parse_tabular_text(text))
    }

    #[test]
    fn test_text_summary() {
        let report = render_text(&analysis(HITS), &ReportOptions::default()).unwrap();
        assert!(report.contains("Predicted Serotype: O:2"));
        assert!(report.contains("Confidence: High"));
        assert!(report.contains("Method: alignment"));
        assert!(report.contains("Identity: 98.5%"));
        assert!(report.contains("Coverage: 95.0%"));
        assert!(!report.contains("Detailed Results"));
    }

    #[test]
    fn test_text_verbose_details() {
        let options = ReportOptions {
            verbose: true,
            preamble: vec!["Analysis completed for: sample.fasta".to_string()],
            ..ReportOptions::default()
        };
        let report = render_text(&analysis(HITS), &options).unwrap();
        assert!(report.starts_with("Analysis completed for: sample.fasta"));
        assert!(report.contains("Detailed Results:"));
        assert!(report.contains("  1. O:2 (ACC001)"));
        // Unmapped accession is its own label
        assert!(report.contains("  2. ACC002 (ACC002)"));
        assert!(report.contains("E-value: 1.00e-50"));
        // Third hit has 2% coverage and is not a call
        assert!(!report.contains("(ACC003)"));
    }

    #[test]
    fn test_text_no_call() {
        let report = render_text(&analysis(""), &ReportOptions::default()).unwrap();
        assert_eq!(report, "No serotype detected");
    }

    #[test]
    fn test_json_output() {
        let json = render_json(&analysis(HITS), &ReportOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["prediction"]["serotype"], "O:2");
        assert_eq!(value["prediction"]["confidence"], "High");
        assert_eq!(value["prediction"]["method"], "alignment");
        assert_eq!(value["calls"].as_array().unwrap().len(), 2);
        assert_eq!(value["total_hits"], 3);
    }

    #[test]
    fn test_json_no_call_has_null_prediction() {
        let json = render_json(&analysis(""), &ReportOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["prediction"].is_null());
    }

    #[test]
    fn test_tsv_output() {
        let tsv = render_tsv(&analysis(HITS)).unwrap();
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("rank\tserotype"));
        assert!(lines[1].starts_with("1\tO:2\tACC001\tHigh\talignment\t98.50\t95.00"));
    }

    #[test]
    fn test_render_dispatches_every_format() {
        let analysis = analysis(HITS);
        let options = ReportOptions::default();
        let text = render(&analysis, OutputFormat::Text, &options).unwrap();
        let json = render(&analysis, OutputFormat::Json, &options).unwrap();
        let tsv = render(&analysis, OutputFormat::Tsv, &options).unwrap();

        assert_eq!(text, render_text(&analysis, &options).unwrap());
        assert!(json.contains("\"prediction\""));
        assert!(tsv.starts_with("rank\tserotype"));
    }
}
