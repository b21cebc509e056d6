use crate::domain::model::CourseList;
use crate::utils::error::{GpaError, Result};

/// Credit-weighted mean of `grades`, rounded to two decimals.
///
/// Rounding is half away from zero (`f64::round` on the value scaled by 100).
/// The inputs are checked here as well, since callers may skip the validator.
pub fn calculate_gpa(grades: &[f64], credits: &[u32]) -> Result<f64> {
    if grades.is_empty() || credits.is_empty() {
        return Err(GpaError::EmptyInput);
    }

    if grades.len() != credits.len() {
        return Err(GpaError::LengthMismatch {
            grades: grades.len(),
            credits: credits.len(),
        });
    }

    let (weighted_sum, total_credits) = grades.iter().zip(credits).fold(
        (0.0_f64, 0_u64),
        |(sum, total), (&grade, &credit)| (sum + grade * f64::from(credit), total + u64::from(credit)),
    );

    if total_credits == 0 {
        return Err(GpaError::DivisionByZero);
    }

    let gpa = round_to_hundredths(weighted_sum / total_credits as f64);
    tracing::debug!(
        "Weighted sum {} over {} credits -> GPA {:.2}",
        weighted_sum,
        total_credits,
        gpa
    );

    Ok(gpa)
}

pub fn calculate_course_gpa(courses: &CourseList) -> Result<f64> {
    calculate_gpa(&courses.grades(), &courses.credits())
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
