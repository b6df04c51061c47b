use crate::config::{HTML_FILE_NAME, JSON_FILE_NAME};
use crate::types::{AggregatorError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a run's artifacts ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub html_path: PathBuf,
    pub json_path: PathBuf,
}

/// Write both artifacts, creating the directory if needed and replacing earlier runs.
pub fn write_outputs(output_dir: &Path, html: &str, json: &str) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir).map_err(|source| AggregatorError::Output {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let html_path = output_dir.join(HTML_FILE_NAME);
    write_file(&html_path, html)?;

    let json_path = output_dir.join(JSON_FILE_NAME);
    write_file(&json_path, json)?;

    info!("Wrote {} and {}", html_path.display(), json_path.display());
    Ok(OutputPaths { html_path, json_path })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| AggregatorError::Output {
        path: path.to_path_buf(),
        source,
    })
}
