use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.location(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // 覆寫既有檔案
        fs::write(full_path, data)?;
        Ok(())
    }

    fn location(&self, path: &str) -> PathBuf {
        Path::new(self.base_path()).join(path)
    }
}

#[cfg(feature = "cli")]
pub use terminal::DialoguerPrompter;

#[cfg(feature = "cli")]
mod terminal {
    use crate::domain::ports::Prompter;
    use crate::utils::error::{GpaError, Result};

    impl From<dialoguer::Error> for GpaError {
        fn from(err: dialoguer::Error) -> Self {
            GpaError::Prompt {
                message: err.to_string(),
            }
        }
    }

    /// Terminal prompts backed by `dialoguer`.
    #[derive(Debug, Default)]
    pub struct DialoguerPrompter;

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self
        }
    }

    impl Prompter for DialoguerPrompter {
        fn input(&mut self, prompt: &str) -> Result<String> {
            let value: String = dialoguer::Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            Ok(value)
        }

        fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
            Ok(dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(default)
                .interact()?)
        }

        fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
            Ok(dialoguer::Select::new()
                .with_prompt(prompt)
                .items(items)
                .default(0)
                .interact()?)
        }

        fn say(&mut self, message: &str) {
            println!("{}", message);
        }
    }
}
