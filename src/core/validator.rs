use crate::utils::error::{GpaError, Result};

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 4.0;

/// Outcome of checking a student name that is not blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCheck {
    Accepted(String),
    /// The name contains digits; the caller decides whether to keep it.
    ContainsDigits(String),
}

impl NameCheck {
    pub fn name(&self) -> &str {
        match self {
            NameCheck::Accepted(name) | NameCheck::ContainsDigits(name) => name,
        }
    }
}

/// Parses a grade and checks it lies in `[0.0, 4.0]`. The value is returned unrounded.
pub fn validate_grade(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let grade: f64 = trimmed.parse().map_err(|_| GpaError::Format {
        field: "grade".to_string(),
        value: trimmed.to_string(),
    })?;

    // NaN 不在範圍內
    if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
        return Err(GpaError::Range {
            field: "grade".to_string(),
            value: trimmed.to_string(),
            reason: format!("Grade must be between {:.1} and {:.1}", MIN_GRADE, MAX_GRADE),
        });
    }

    Ok(grade)
}

/// Parses a credit as an integer literal and checks it is positive.
pub fn validate_credit(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GpaError::Format {
            field: "credit".to_string(),
            value: trimmed.to_string(),
        });
    }

    let range_error = |reason: String| GpaError::Range {
        field: "credit".to_string(),
        value: trimmed.to_string(),
        reason,
    };
    let not_positive = || range_error("Credit must be a positive integer".to_string());

    // 數字外形已確認，解析失敗只可能是溢位
    let magnitude: u32 = match digits.parse() {
        Ok(value) => value,
        Err(_) if negative => return Err(not_positive()),
        Err(_) => return Err(range_error(format!("Credit must not exceed {}", u32::MAX))),
    };

    if negative || magnitude == 0 {
        return Err(not_positive());
    }

    Ok(magnitude)
}

pub fn validate_student_name(input: &str) -> Result<NameCheck> {
    let name = input.trim();
    if name.is_empty() {
        return Err(GpaError::EmptyName);
    }

    if name.chars().any(|c| c.is_numeric()) {
        tracing::debug!("Student name '{}' contains digits", name);
        return Ok(NameCheck::ContainsDigits(name.to_string()));
    }

    Ok(NameCheck::Accepted(name.to_string()))
}

/// For callers that cannot ask: a name with digits is kept, with a warning.
pub fn accept_student_name(input: &str) -> Result<String> {
    match validate_student_name(input)? {
        NameCheck::Accepted(name) => Ok(name),
        NameCheck::ContainsDigits(name) => {
            tracing::warn!("⚠️ Student name '{}' contains digits; keeping it as entered", name);
            Ok(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_grade() {
        assert_eq!(validate_grade("3.5").unwrap(), 3.5);
        assert_eq!(validate_grade(" 4.0 ").unwrap(), 4.0);
        assert_eq!(validate_grade("0").unwrap(), 0.0);
        assert_eq!(validate_grade("3.333").unwrap(), 3.333);

        assert!(matches!(validate_grade("5.0"), Err(GpaError::Range { .. })));
        assert!(matches!(validate_grade("-0.1"), Err(GpaError::Range { .. })));
        assert!(matches!(validate_grade("NaN"), Err(GpaError::Range { .. })));
        assert!(matches!(validate_grade("abc"), Err(GpaError::Format { .. })));
        assert!(matches!(validate_grade(""), Err(GpaError::Format { .. })));
    }

    #[test]
    fn test_validate_credit() {
        assert_eq!(validate_credit("3").unwrap(), 3);
        assert_eq!(validate_credit(" 12\n").unwrap(), 12);

        assert!(matches!(validate_credit("0"), Err(GpaError::Range { .. })));
        assert!(matches!(validate_credit("-3"), Err(GpaError::Range { .. })));
        assert!(matches!(validate_credit("-0"), Err(GpaError::Range { .. })));
        assert!(matches!(
            validate_credit("99999999999"),
            Err(GpaError::Range { .. })
        ));
        assert!(matches!(
            validate_credit("4294967296"),
            Err(GpaError::Range { .. })
        ));
        assert!(matches!(validate_credit("2.5"), Err(GpaError::Format { .. })));
        assert!(matches!(validate_credit("three"), Err(GpaError::Format { .. })));
        assert!(matches!(validate_credit("-"), Err(GpaError::Format { .. })));
        assert!(matches!(validate_credit("+-3"), Err(GpaError::Format { .. })));
        assert_eq!(validate_credit("+4").unwrap(), 4);
    }

    #[test]
    fn test_credit_literals_beyond_any_integer_type_are_range_errors() {
        match validate_credit("-99999999999999999999") {
            Err(GpaError::Range { reason, .. }) => {
                assert_eq!(reason, "Credit must be a positive integer")
            }
            other => panic!("expected range error, got {:?}", other),
        }
        match validate_credit("99999999999999999999") {
            Err(GpaError::Range { reason, .. }) => assert!(reason.contains("must not exceed")),
            other => panic!("expected range error, got {:?}", other),
        }
    }

    #[test]
    fn test_accept_student_name_keeps_names_with_digits() {
        assert_eq!(accept_student_name(" Agent 47 ").unwrap(), "Agent 47");
        assert_eq!(accept_student_name("Ana").unwrap(), "Ana");
        assert!(matches!(accept_student_name("  "), Err(GpaError::EmptyName)));
    }

    #[test]
    fn test_validate_student_name() {
        assert_eq!(
            validate_student_name("  Nguyen Van A ").unwrap(),
            NameCheck::Accepted("Nguyen Van A".to_string())
        );
        assert_eq!(
            validate_student_name("Agent 47").unwrap(),
            NameCheck::ContainsDigits("Agent 47".to_string())
        );
        assert!(matches!(validate_student_name(""), Err(GpaError::EmptyName)));
        assert!(matches!(
            validate_student_name(" \t\n"),
            Err(GpaError::EmptyName)
        ));
    }
}
