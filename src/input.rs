use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::breakdown::SpaceLine;
use crate::error::{BreakdownError, Result};

/// Accepted top-level shapes of a line item document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LineDocument {
    List(Vec<SpaceLine>),
    Spaces { spaces: Vec<SpaceLine> },
    Items { items: Vec<SpaceLine> },
}

impl LineDocument {
    fn into_lines(self) -> Vec<SpaceLine> {
        match self {
            LineDocument::List(lines) => lines,
            LineDocument::Spaces { spaces } => spaces,
            LineDocument::Items { items } => items,
        }
    }
}

/// Parse line items from JSON text; `source` is only used in errors
pub fn parse_lines(content: &str, source: &Path) -> Result<Vec<SpaceLine>> {
    let document: LineDocument =
        serde_json::from_str(content).map_err(|e| BreakdownError::InputParse {
            path: source.to_path_buf(),
            source: e,
        })?;
    Ok(document.into_lines())
}

/// Load line items from a JSON file, or stdin when the path is `-`
pub fn load_lines(path: &Path) -> Result<Vec<SpaceLine>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !path.exists() {
            return Err(BreakdownError::InputNotFound(path.to_path_buf()));
        }
        std::fs::read_to_string(path)?
    };

    let source = source_name(path);
    let lines = parse_lines(&content, &source)?;
    tracing::info!(source = %source.display(), lines = lines.len(), "loaded line items");
    Ok(lines)
}

/// Display name for an input path
fn source_name(path: &Path) -> PathBuf {
    if path == Path::new("-") {
        PathBuf::from("<stdin>")
    } else {
        path.to_path_buf()
    }
}
