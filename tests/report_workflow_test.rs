use anyhow::Result;
use gpa_report::core::filename::render_filename;
use gpa_report::{
    calculate_gpa, validate_credit, validate_grade, write_report, GpaError, LocalStorage,
    ReportWriter,
};
use gpa_report::domain::model::Report;
use tempfile::TempDir;

/// Raw strings through the validator, the calculator and the writer.
#[test]
fn test_end_to_end_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let destination = temp_dir.path().join("output").join("gpa_results.txt");

    let grades = ["3.7", "3.3", "4.0", "3.0", "3.5"]
        .iter()
        .map(|g| validate_grade(g))
        .collect::<gpa_report::Result<Vec<_>>>()?;
    let credits = ["3", "4", "3", "3", "2"]
        .iter()
        .map(|c| validate_credit(c))
        .collect::<gpa_report::Result<Vec<_>>>()?;

    let gpa = calculate_gpa(&grades, &credits)?;
    assert_eq!(gpa, 3.49);

    assert!(write_report("John Doe", &grades, &credits, gpa, &destination));
    assert!(destination.exists());

    let content = std::fs::read_to_string(&destination)?;
    assert!(content.starts_with(&format!("{}\nGPA CALCULATION RESULTS\n", "=".repeat(50))));
    assert!(content.contains("Student Name: John Doe\n"));
    assert!(content.contains("Total Credits: 15\n"));
    assert!(content.contains("Calculated GPA: 3.49\n"));

    let rows = [
        "1          3.70       3",
        "2          3.30       4",
        "3          4.00       3",
        "4          3.00       3",
        "5          3.50       2",
    ];
    let positions: Vec<usize> = rows
        .iter()
        .map(|row| content.find(row).expect("row missing"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "rows out of order");

    let date_line = content
        .lines()
        .find(|line| line.starts_with("Date: "))
        .expect("date line missing");
    assert!(chrono::NaiveDateTime::parse_from_str(&date_line[6..], "%Y-%m-%d %H:%M:%S").is_ok());

    Ok(())
}

#[test]
fn test_existing_report_is_overwritten() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let destination = temp_dir.path().join("gpa_results.txt");
    std::fs::write(&destination, "stale content")?;

    assert!(write_report("Ana", &[2.0], &[4], 2.0, &destination));

    let content = std::fs::read_to_string(&destination)?;
    assert!(!content.contains("stale content"));
    assert!(content.contains("Student Name: Ana\n"));
    Ok(())
}

#[test]
fn test_unwritable_destination_returns_false() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // A regular file where the output directory should be.
    let blocker = temp_dir.path().join("output");
    std::fs::write(&blocker, "not a directory")?;

    let destination = blocker.join("gpa_results.txt");
    assert!(!write_report("John Doe", &[3.0], &[3], 3.0, &destination));
    Ok(())
}

#[test]
fn test_writer_with_filename_pattern() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("reports");
    let storage = LocalStorage::new(output_dir.to_string_lossy().into_owned());
    let writer = ReportWriter::new(storage);

    let at = chrono::NaiveDate::from_ymd_opt(2025, 2, 3)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let filename = render_filename("gpa_{name}_{timestamp}.txt", "Tran Thi B", at);
    let report = Report::at("Tran Thi B", &[3.2, 2.8], &[2, 2], 3.0, at);

    writer.save(&report, &filename)?;

    let content = std::fs::read_to_string(output_dir.join("gpa_Tran_Thi_B_20250203_080000.txt"))?;
    assert!(content.contains("Date: 2025-02-03 08:00:00\n"));
    assert!(content.contains("Total Credits: 4\n"));
    Ok(())
}

#[test]
fn test_calculator_errors_are_structural() {
    assert!(matches!(calculate_gpa(&[], &[]), Err(GpaError::EmptyInput)));
    assert!(matches!(
        calculate_gpa(&[3.0, 3.5], &[3]),
        Err(GpaError::LengthMismatch { .. })
    ));
    assert!(matches!(
        calculate_gpa(&[4.0], &[0]),
        Err(GpaError::DivisionByZero)
    ));
}
