pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter, PickReport, ProblemCard};

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Output file when given, stdout otherwise
pub fn open_destination(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                ensure_dir(parent)?;
            }
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
