pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::DialoguerPrompter, CliConfig};

pub use app::session::{Session, SessionOutcome};
pub use config::{cli::LocalStorage, toml_config::TomlConfig, ReportConfig};
pub use crate::core::{
    calculator::calculate_gpa,
    report::{render_report, write_report, ReportWriter},
    validator::{validate_credit, validate_grade, validate_student_name, NameCheck},
};
pub use utils::error::{GpaError, Result};
