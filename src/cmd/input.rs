use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read the whole input: a file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!("Reading input from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            debug!("Reading input from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
