use serde::Serialize;
use std::path::PathBuf;

/// A function declared with `<MvFUNCTION>`.
///
/// `parameters` holds the raw `PARAMETERS` attribute text, untokenized, or
/// `None` when the attribute is absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    /// File the declaration was found in, relative to the store root
    pub source: PathBuf,
    /// 1-based line number of the declaration
    pub line: usize,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, parameters: Option<&str>) -> Self {
        Self {
            name: name.into(),
            parameters: parameters
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            source: PathBuf::new(),
            line: 0,
        }
    }

    pub fn with_location(mut self, source: impl Into<PathBuf>, line: usize) -> Self {
        self.source = source.into();
        self.line = line;
        self
    }

    /// Parameter segments split on commas and trimmed.
    ///
    /// Splitting is naive: a comma inside a default value splits it too.
    pub fn parameter_list(&self) -> Vec<&str> {
        match &self.parameters {
            Some(raw) => raw.split(',').map(str::trim).collect(),
            None => Vec::new(),
        }
    }
}
