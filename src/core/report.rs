use crate::config::cli::LocalStorage;
use crate::domain::model::Report;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub const REPORT_TITLE: &str = "GPA CALCULATION RESULTS";
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const BANNER_WIDTH: usize = 50;
const TABLE_WIDTH: usize = 30;
const COLUMN_WIDTH: usize = 10;

/// Renders the fixed-layout text report.
pub fn render_report(report: &Report) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(TABLE_WIDTH);
    let mut lines = vec![
        banner.clone(),
        REPORT_TITLE.to_string(),
        banner.clone(),
        String::new(),
        format!("Date: {}", report.generated_at.format(REPORT_DATE_FORMAT)),
        format!("Student Name: {}", report.student_name),
        String::new(),
        "Course Details:".to_string(),
        rule.clone(),
        format!(
            "{:<w$} {:<w$} {}",
            "Course #",
            "Grade",
            "Credits",
            w = COLUMN_WIDTH
        ),
        rule.clone(),
    ];

    for (index, (grade, credit)) in report.grades.iter().zip(&report.credits).enumerate() {
        lines.push(format!(
            "{:<w$} {:<w$.2} {}",
            index + 1,
            grade,
            credit,
            w = COLUMN_WIDTH
        ));
    }

    lines.push(rule);
    lines.push(format!("Total Credits: {}", report.total_credits()));
    lines.push(format!("Calculated GPA: {:.2}", report.gpa));
    lines.push(banner);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub struct ReportWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Path the storage resolves `filename` to.
    pub fn location(&self, filename: &str) -> PathBuf {
        self.storage.location(filename)
    }

    /// Renders and stores the report, propagating storage errors.
    pub fn save(&self, report: &Report, filename: &str) -> Result<()> {
        let content = render_report(report);
        self.storage.write_file(filename, content.as_bytes())?;
        tracing::info!(
            "Report for '{}' written to {} ({} courses)",
            report.student_name,
            filename,
            report.grades.len()
        );
        Ok(())
    }

    /// Like [`save`](Self::save), but a failed write is logged and reported as `false`.
    pub fn write(&self, report: &Report, filename: &str) -> bool {
        match self.save(report, filename) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("❌ Failed to write report {}: {}", filename, e);
                false
            }
        }
    }
}

/// Writes a report for the given courses to `destination`, creating its
/// directory if needed. Returns `false` on any I/O failure.
pub fn write_report(
    student_name: &str,
    grades: &[f64],
    credits: &[u32],
    gpa: f64,
    destination: &Path,
) -> bool {
    let Some(file_name) = destination.file_name().and_then(|name| name.to_str()) else {
        tracing::error!("❌ Invalid report path: {}", destination.display());
        return false;
    };
    let directory = destination
        .parent()
        .map(|parent| parent.to_string_lossy().into_owned())
        .unwrap_or_default();

    let report = Report::new(student_name, grades, credits, gpa);
    ReportWriter::new(LocalStorage::new(directory)).write(&report, file_name)
}
