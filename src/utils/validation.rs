use crate::utils::error::{GpaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GpaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GpaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GpaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A file name must stay inside the output directory.
pub fn validate_file_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    validate_path(field_name, value)?;

    if value.contains('/') || value.contains('\\') {
        return Err(GpaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "File name must not contain path separators".to_string(),
        });
    }

    if value == "." || value == ".." {
        return Err(GpaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "File name must not be a directory reference".to_string(),
        });
    }

    Ok(())
}
