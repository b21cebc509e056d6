use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One course: a grade on the 0.0-4.0 scale and its credit weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub grade: f64,
    pub credit: u32,
}

impl CourseRecord {
    pub fn new(grade: f64, credit: u32) -> Self {
        Self { grade, credit }
    }
}

/// Courses in entry order. Grades and credits are only ever pushed as a pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseList {
    courses: Vec<CourseRecord>,
}

impl CourseList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: CourseRecord) {
        self.courses.push(record);
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn grades(&self) -> Vec<f64> {
        self.courses.iter().map(|c| c.grade).collect()
    }

    pub fn credits(&self) -> Vec<u32> {
        self.courses.iter().map(|c| c.credit).collect()
    }

    pub fn total_credits(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.credit)).sum()
    }
}

impl FromIterator<CourseRecord> for CourseList {
    fn from_iter<I: IntoIterator<Item = CourseRecord>>(iter: I) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}

/// Console/JSON summary of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaSummary {
    pub student_name: String,
    pub course_count: usize,
    pub total_credits: u64,
    pub gpa: f64,
}

/// Everything the report file shows, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub student_name: String,
    pub grades: Vec<f64>,
    pub credits: Vec<u32>,
    pub gpa: f64,
    pub generated_at: NaiveDateTime,
}

impl Report {
    pub fn new(student_name: &str, grades: &[f64], credits: &[u32], gpa: f64) -> Self {
        Self::at(
            student_name,
            grades,
            credits,
            gpa,
            chrono::Local::now().naive_local(),
        )
    }

    pub fn at(
        student_name: &str,
        grades: &[f64],
        credits: &[u32],
        gpa: f64,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            student_name: student_name.to_string(),
            grades: grades.to_vec(),
            credits: credits.to_vec(),
            gpa,
            generated_at,
        }
    }

    pub fn total_credits(&self) -> u64 {
        self.credits.iter().map(|&c| u64::from(c)).sum()
    }
}
