use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::profile::ScoringProfile;
use crate::pipeline::ScoredBatch;
use crate::report::build_summary;
use crate::report::json::{render_comparison_json, render_scores_json, render_summary_json};
use crate::report::text::render_report_text;

pub const SCORES_FILE: &str = "scores.json";
pub const SUMMARY_FILE: &str = "summary.json";
pub const COMPARISON_FILE: &str = "comparison.json";
pub const REPORT_FILE: &str = "report.txt";

pub fn write_reports(
    batch: &ScoredBatch,
    profile: &ScoringProfile,
    out_dir: &Path,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let scores = render_scores_json(&batch.results)?;
    write_text(&out_dir.join(SCORES_FILE), &scores)?;

    let summary = build_summary(batch, profile);
    let summary_json = render_summary_json(&summary)?;
    write_text(&out_dir.join(SUMMARY_FILE), &summary_json)?;

    let comparison = render_comparison_json(&batch.comparisons)?;
    write_text(&out_dir.join(COMPARISON_FILE), &comparison)?;

    let report = render_report_text(&summary, &batch.results);
    write_text(&out_dir.join(REPORT_FILE), &report)?;

    tracing::info!(out_dir = %out_dir.display(), "wrote reports");
    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
