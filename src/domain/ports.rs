use crate::utils::error::Result;
use std::path::PathBuf;

pub trait Storage {
    /// Writes `data` to `path`, creating missing parent directories and
    /// replacing any existing file.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;

    /// Where `path` ends up once written.
    fn location(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}

pub trait ConfigProvider {
    fn output_directory(&self) -> &str;
    fn filename_pattern(&self) -> &str;
}

/// Console interaction used by the interactive session.
pub trait Prompter {
    fn input(&mut self, prompt: &str) -> Result<String>;
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
    /// Returns the index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;
    fn say(&mut self, message: &str);
}
