//! Format-agnostic graph file loading

use std::fmt;
use std::path::Path;

use crate::document::GraphDocument;
use crate::error::{Error, Result};
use crate::InMemoryGraph;

/// Serialization format of a graph file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Toml,
    Json,
    Yaml,
}

impl GraphFormat {
    /// Detect the format from a file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match extension.to_lowercase().as_str() {
            "toml" => Ok(GraphFormat::Toml),
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Toml => write!(f, "TOML"),
            GraphFormat::Json => write!(f, "JSON"),
            GraphFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// Loads graph documents from disk.
///
/// The format is detected from the file extension and parsing is
/// transparent to the caller.
#[derive(Debug, Default)]
pub struct GraphStore;

impl GraphStore {
    pub fn new() -> Self {
        Self
    }

    /// Load and validate a graph file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<InMemoryGraph> {
        let path = path.as_ref();
        let document = self.load_document(path)?;
        tracing::debug!(path = %path.display(), "Building graph from document");
        InMemoryGraph::try_from(document)
    }

    /// Load a graph file without building the graph.
    pub fn load_document(&self, path: impl AsRef<Path>) -> Result<GraphDocument> {
        let path = path.as_ref();
        let format = GraphFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.parse(&content, format).map_err(|e| match e {
            Error::ConfigParse {
                format, message, ..
            } => Error::ConfigParse {
                path: path.to_path_buf(),
                format,
                message,
            },
            other => other,
        })
    }

    /// Parse document text in the given format.
    pub fn parse(&self, content: &str, format: GraphFormat) -> Result<GraphDocument> {
        let parsed = match format {
            GraphFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            GraphFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            GraphFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: "<inline>".into(),
            format: format.to_string(),
            message,
        })
    }
}
