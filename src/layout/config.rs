use serde::Deserialize;

use super::{LayoutError, LayoutTable};

#[derive(Deserialize)]
struct LayoutFile {
    layout: LayoutSpec,
}

#[derive(Deserialize)]
struct LayoutSpec {
    source: String,
    dest: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Invalid(#[from] LayoutError),
}

/// Parse TOML text with a `[layout]` table into a custom [`LayoutTable`].
///
/// ```toml
/// [layout]
/// source = "abc"
/// dest = "xyz"
/// ```
pub fn parse_layout_toml(toml_str: &str) -> Result<LayoutTable, LayoutConfigError> {
    let file: LayoutFile =
        toml::from_str(toml_str).map_err(|e| LayoutConfigError::Parse(e.to_string()))?;
    Ok(LayoutTable::new(&file.layout.source, &file.layout.dest)?)
}
