pub mod cli;
pub mod toml_config;

use crate::core::filename::{DEFAULT_FILENAME, SESSION_FILENAME_PATTERN};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_path, Validate};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "output";

/// Where reports go and how their files are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_directory: String,
    pub filename_pattern: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_directory: DEFAULT_OUTPUT_DIRECTORY.to_string(),
            filename_pattern: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl ReportConfig {
    /// Defaults used by the interactive shell: one file per student and run.
    pub fn for_session() -> Self {
        Self {
            filename_pattern: SESSION_FILENAME_PATTERN.to_string(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for ReportConfig {
    fn output_directory(&self) -> &str {
        &self.output_directory
    }

    fn filename_pattern(&self) -> &str {
        &self.filename_pattern
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        validate_report_settings(self)
    }
}

/// Checks directory and pattern of any provider; the pattern is expanded
/// with a sample name so placeholders cannot produce an empty or nested path.
pub fn validate_report_settings(config: &dyn ConfigProvider) -> Result<()> {
    validate_path("output.directory", config.output_directory())?;
    validate_path("output.filename_pattern", config.filename_pattern())?;

    let sample = crate::core::filename::render_filename(
        config.filename_pattern(),
        "student",
        NaiveDateTime::default(),
    );
    validate_file_name("output.filename_pattern", &sample)
}

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "gpa-report")]
    #[command(about = "Interactive credit-weighted GPA calculator with text reports")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_OUTPUT_DIRECTORY)]
        pub output_dir: String,

        #[arg(long, default_value = SESSION_FILENAME_PATTERN, help = "File name pattern; supports {name} and {timestamp}")]
        pub filename_pattern: String,

        #[arg(short, long, help = "TOML file with [output] settings")]
        pub config: Option<String>,

        #[arg(long, help = "Run the demonstration before the interactive session")]
        pub demo: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn report_config(&self) -> ReportConfig {
            ReportConfig {
                output_directory: self.output_dir.clone(),
                filename_pattern: self.filename_pattern.clone(),
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn output_directory(&self) -> &str {
            &self.output_dir
        }

        fn filename_pattern(&self) -> &str {
            &self.filename_pattern
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_report_settings(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.output_directory(), "output");
        assert_eq!(config.filename_pattern(), "gpa_results.txt");
        assert!(config.validate().is_ok());

        assert_eq!(
            ReportConfig::for_session().filename_pattern(),
            "gpa_{name}_{timestamp}.txt"
        );
    }

    #[test]
    fn test_rejects_nested_pattern() {
        let config = ReportConfig {
            output_directory: "output".to_string(),
            filename_pattern: "reports/{name}.txt".to_string(),
        };
        assert!(config.validate().is_err());

        let empty_dir = ReportConfig {
            output_directory: String::new(),
            ..ReportConfig::default()
        };
        assert!(empty_dir.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_defaults() {
        use clap::Parser;

        let config = CliConfig::parse_from(["gpa-report"]);
        assert_eq!(config.output_dir, "output");
        assert_eq!(config.filename_pattern, "gpa_{name}_{timestamp}.txt");
        assert!(!config.demo);
        assert_eq!(config.report_config(), ReportConfig::for_session());
    }
}
