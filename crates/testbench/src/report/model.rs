//! Complexity metrics input document.
//!
//! Shape produced by the static-analysis step:
//!
//! ```json
//! {
//!   "files": [{
//!     "filePath": "Sources/App/routes.swift",
//!     "summary": { "totalFunctions": 2, "totalCyclomaticComplexity": 7, ... },
//!     "functions": [{
//!       "name": "routes", "signature": "func routes(_ app: Application)",
//!       "location": { "line": 12 },
//!       "cyclomaticComplexity": 4, "cognitiveComplexity": 2
//!     }]
//!   }]
//! }
//! ```
//!
//! Unknown fields (including the document-level `summary`) are ignored.

use serde::Deserialize;
use std::path::Path;

use super::ReportError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ComplexityInput {
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub file_path: String,
    #[serde(default)]
    pub summary: FileSummary,
    #[serde(default)]
    pub functions: Vec<FunctionEntry>,
}

/// Per-file rollup, as computed by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileSummary {
    pub total_functions: u64,
    pub total_cyclomatic_complexity: u64,
    pub total_cognitive_complexity: u64,
    pub max_cyclomatic_complexity: u64,
    pub max_cognitive_complexity: u64,
    pub average_cyclomatic_complexity: f64,
    pub average_cognitive_complexity: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub signature: String,
    pub location: SourceLocation,
    #[serde(default)]
    pub cyclomatic_complexity: u64,
    #[serde(default)]
    pub cognitive_complexity: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SourceLocation {
    pub line: u64,
}

impl ComplexityInput {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a metrics file.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ReportError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
