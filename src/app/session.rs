use crate::core::calculator::calculate_course_gpa;
use crate::core::filename::render_filename;
use crate::core::report::ReportWriter;
use crate::core::validator::{validate_credit, validate_grade, validate_student_name, NameCheck};
use crate::domain::model::{CourseList, CourseRecord, GpaSummary, Report};
use crate::domain::ports::{ConfigProvider, Prompter, Storage};
use crate::utils::error::{GpaError, Result};

pub const DONE_KEYWORD: &str = "done";

const NAME_CHOICES: [&str; 3] = ["Keep this name", "Enter a different name", "Cancel"];

/// What the user decided after being warned that a name contains digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameDecision {
    Accept,
    Retry,
    Abort,
}

impl NameDecision {
    fn from_choice(index: usize) -> Self {
        match index {
            0 => NameDecision::Accept,
            1 => NameDecision::Retry,
            _ => NameDecision::Abort,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Completed {
        summary: GpaSummary,
        saved_to: Option<String>,
    },
    Aborted,
}

/// Interactive shell: collects a name and courses, computes the GPA and
/// saves the report, repeating until the user stops.
pub struct Session<P: Prompter, S: Storage, C: ConfigProvider> {
    prompter: P,
    writer: ReportWriter<S>,
    config: C,
}

impl<P: Prompter, S: Storage, C: ConfigProvider> Session<P, S, C> {
    pub fn new(prompter: P, storage: S, config: C) -> Self {
        Self {
            prompter,
            writer: ReportWriter::new(storage),
            config,
        }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Runs calculations until the user declines another one. Returns how
    /// many completed.
    pub fn run(&mut self) -> usize {
        let mut completed = 0;

        loop {
            match self.run_once() {
                Ok(SessionOutcome::Completed { .. }) => completed += 1,
                Ok(SessionOutcome::Aborted) => {
                    self.prompter.say("Calculation cancelled.");
                    break;
                }
                Err(GpaError::Prompt { message }) => {
                    tracing::warn!("Prompt interrupted: {}", message);
                    self.prompter.say("\nInput interrupted by user.");
                    break;
                }
                Err(e) => {
                    tracing::error!(
                        "❌ Calculation failed: {} (Category: {:?})",
                        e,
                        e.category()
                    );
                    self.prompter
                        .say(&format!("\nError: {}", e.user_friendly_message()));
                    self.prompter.say("The session will end.");
                    break;
                }
            }

            match self.prompter.confirm("Calculate another GPA?", false) {
                Ok(true) => self.prompter.say(""),
                Ok(false) | Err(_) => break,
            }
        }

        self.prompter
            .say("\nThank you for using the GPA calculator!");
        completed
    }

    /// One calculation: name, courses, result, report.
    pub fn run_once(&mut self) -> Result<SessionOutcome> {
        let Some(student_name) = self.ask_student_name()? else {
            return Ok(SessionOutcome::Aborted);
        };

        let courses = self.collect_courses()?;

        self.prompter.say("\nCalculating GPA...");
        let gpa = calculate_course_gpa(&courses)?;
        let summary = GpaSummary {
            student_name: student_name.clone(),
            course_count: courses.len(),
            total_credits: courses.total_credits(),
            gpa,
        };
        self.show_summary(&summary);

        let now = chrono::Local::now().naive_local();
        let filename = render_filename(self.config.filename_pattern(), &student_name, now);
        let report = Report::at(&student_name, &courses.grades(), &courses.credits(), gpa, now);

        self.prompter.say("\nSaving results to file...");
        let saved_to = if self.writer.write(&report, &filename) {
            let path = self.writer.location(&filename).display().to_string();
            self.prompter.say(&format!("Results saved to: {}", path));
            Some(path)
        } else {
            self.prompter.say("Failed to save results to file.");
            None
        };

        Ok(SessionOutcome::Completed { summary, saved_to })
    }

    fn ask_student_name(&mut self) -> Result<Option<String>> {
        loop {
            let input = self.prompter.input("Student name")?;
            match validate_student_name(&input) {
                Ok(NameCheck::Accepted(name)) => return Ok(Some(name)),
                Ok(NameCheck::ContainsDigits(name)) => {
                    let choice = self
                        .prompter
                        .select("Warning: the name contains digits", &NAME_CHOICES)?;
                    match NameDecision::from_choice(choice) {
                        NameDecision::Accept => return Ok(Some(name)),
                        NameDecision::Retry => continue,
                        NameDecision::Abort => return Ok(None),
                    }
                }
                Err(e) => self.prompter.say(&format!("Error: {}", e)),
            }
        }
    }

    fn collect_courses(&mut self) -> Result<CourseList> {
        let mut courses = CourseList::new();

        self.prompter
            .say(&format!("\nEnter course data (type '{}' to finish).", DONE_KEYWORD));
        self.prompter
            .say("Each course needs a grade (0.0-4.0) and a credit count.\n");

        loop {
            let number = courses.len() + 1;
            let input = self.prompter.input(&format!(
                "Course {} - grade (or '{}' to finish)",
                number, DONE_KEYWORD
            ))?;

            if input.trim().eq_ignore_ascii_case(DONE_KEYWORD) {
                if courses.is_empty() {
                    self.report_input_error(&GpaError::EmptyInput);
                    continue;
                }
                break;
            }

            let grade = match validate_grade(&input) {
                Ok(grade) => grade,
                Err(e) if e.is_retryable() => {
                    self.report_input_error(&e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let credit = self.ask_credit(number)?;
            courses.push(CourseRecord::new(grade, credit));
            self.prompter
                .say(&format!("Added course {} successfully!\n", number));
        }

        tracing::debug!("Collected {} courses", courses.len());
        Ok(courses)
    }

    fn ask_credit(&mut self, number: usize) -> Result<u32> {
        loop {
            let input = self
                .prompter
                .input(&format!("Course {} - credits", number))?;
            match validate_credit(&input) {
                Ok(credit) => return Ok(credit),
                Err(e) if e.is_retryable() => self.report_input_error(&e),
                Err(e) => return Err(e),
            }
        }
    }

    fn report_input_error(&mut self, err: &GpaError) {
        self.prompter
            .say(&format!("Error: {}", err.user_friendly_message()));
        self.prompter.say("Please try again.\n");
    }

    fn show_summary(&mut self, summary: &GpaSummary) {
        let rule = "=".repeat(30);
        self.prompter.say(&format!("\n{}", rule));
        self.prompter.say("CALCULATION RESULTS");
        self.prompter.say(&rule);
        self.prompter
            .say(&format!("Student name: {}", summary.student_name));
        self.prompter
            .say(&format!("Number of courses: {}", summary.course_count));
        self.prompter
            .say(&format!("Total credits: {}", summary.total_credits));
        self.prompter.say(&format!("GPA: {:.2}", summary.gpa));
        self.prompter.say(&rule);
    }
}
