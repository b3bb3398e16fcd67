//! Output handling for response bodies

use crate::error::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Output writer that handles file vs stdout
pub struct OutputWriter {
    file: Option<PathBuf>,
}

impl OutputWriter {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    /// Write the body to the configured destination
    pub fn write(&self, content: &[u8]) -> Result<()> {
        if let Some(file_path) = &self.file {
            self.write_to_file(content, file_path)
        } else {
            self.write_to_stdout(content)
        }
    }

    fn write_to_file(&self, content: &[u8], file_path: &Path) -> Result<()> {
        let mut file = File::create(file_path)?;
        file.write_all(content)?;
        Ok(())
    }

    fn write_to_stdout(&self, content: &[u8]) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
        Ok(())
    }
}
