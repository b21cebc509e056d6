use crate::core::calculator::calculate_gpa;
use crate::core::report::ReportWriter;
use crate::domain::model::{GpaSummary, Report};
use crate::domain::ports::{Prompter, Storage};
use crate::utils::error::Result;

pub const DEMO_STUDENT: &str = "John Doe";
pub const DEMO_GRADES: [f64; 5] = [3.7, 3.3, 4.0, 3.0, 3.5];
pub const DEMO_CREDITS: [u32; 5] = [3, 4, 3, 3, 2];
pub const DEMO_FILENAME: &str = "demo_results.txt";

/// Calculates the sample student's GPA and saves `demo_results.txt`.
pub fn run_demo<S: Storage, P: Prompter>(storage: S, out: &mut P) -> Result<GpaSummary> {
    out.say(&format!("\n{}", "=".repeat(50)));
    out.say("DEMO");
    out.say(&"=".repeat(50));
    out.say(&format!("\nDemo student: {}", DEMO_STUDENT));
    out.say("Courses:");
    for (index, (grade, credit)) in DEMO_GRADES.iter().zip(DEMO_CREDITS).enumerate() {
        out.say(&format!(
            "  Course {}: grade={}, credits={}",
            index + 1,
            grade,
            credit
        ));
    }

    let gpa = calculate_gpa(&DEMO_GRADES, &DEMO_CREDITS)?;
    out.say(&format!("\nCalculated GPA: {:.2}", gpa));

    let report = Report::new(DEMO_STUDENT, &DEMO_GRADES, &DEMO_CREDITS, gpa);
    if ReportWriter::new(storage).write(&report, DEMO_FILENAME) {
        out.say(&format!("Demo report saved as {}", DEMO_FILENAME));
    } else {
        out.say("Demo report could not be saved.");
    }

    Ok(GpaSummary {
        student_name: DEMO_STUDENT.to_string(),
        course_count: DEMO_GRADES.len(),
        total_credits: DEMO_CREDITS.iter().map(|&c| u64::from(c)).sum(),
        gpa,
    })
}
