pub mod calculator;
pub mod filename;
pub mod report;
pub mod validator;

pub use crate::domain::model::{CourseList, CourseRecord, GpaSummary, Report};
pub use crate::domain::ports::{ConfigProvider, Prompter, Storage};
pub use crate::utils::error::Result;
