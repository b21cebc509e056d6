use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use std::sync::OnceLock;

pub const DEFAULT_FILENAME: &str = "gpa_results.txt";
pub const SESSION_FILENAME_PATTERN: &str = "gpa_{name}_{timestamp}.txt";
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(name|timestamp)\}").expect("placeholder regex is valid"))
}

/// Expands `{name}` and `{timestamp}` in a filename pattern.
///
/// Spaces and path separators in the name become underscores; other text is kept as-is.
pub fn render_filename(pattern: &str, student_name: &str, at: NaiveDateTime) -> String {
    let name = student_name.trim().replace([' ', '/', '\\'], "_");
    let timestamp = at.format(FILENAME_TIMESTAMP_FORMAT).to_string();

    placeholder_regex()
        .replace_all(pattern, |caps: &Captures| match &caps[1] {
            "name" => name.clone(),
            _ => timestamp.clone(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(9, 3, 7)
            .unwrap()
    }

    #[test]
    fn test_session_pattern() {
        assert_eq!(
            render_filename(SESSION_FILENAME_PATTERN, "John Doe", at()),
            "gpa_John_Doe_20240517_090307.txt"
        );
    }

    #[test]
    fn test_name_cannot_leave_output_directory() {
        assert_eq!(
            render_filename("{name}.txt", "../etc/passwd", at()),
            ".._etc_passwd.txt"
        );
    }

    #[test]
    fn test_pattern_without_placeholders() {
        assert_eq!(
            render_filename(DEFAULT_FILENAME, "John Doe", at()),
            "gpa_results.txt"
        );
    }

    #[test]
    fn test_unknown_placeholder_is_left_alone() {
        assert_eq!(
            render_filename("{name}-{term}.txt", "Ana", at()),
            "Ana-{term}.txt"
        );
    }
}
