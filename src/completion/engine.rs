use std::path::PathBuf;

use super::context::reference_at_cursor;
use super::format::Completion;
use crate::config::{CompletionConfig, Settings};
use crate::extractor::FunctionExtractor;
use crate::resolver::{AliasTable, PathResolver};

/// What the host editor knows at the moment completions are requested.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    /// Name of the file being edited, used for extension gating
    pub file_name: Option<PathBuf>,
    /// Full text of the line holding the cursor
    pub line: String,
    /// Character columns of every cursor on that line
    pub cursors: Vec<usize>,
    /// Folders open in the host's project
    pub project_folders: Vec<PathBuf>,
}

impl CompletionRequest {
    pub fn new(line: impl Into<String>, column: usize) -> Self {
        Self {
            line: line.into(),
            cursors: vec![column],
            ..Self::default()
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_project_folders(mut self, folders: Vec<PathBuf>) -> Self {
        self.project_folders = folders;
        self
    }

    pub fn with_cursors(mut self, cursors: Vec<usize>) -> Self {
        self.cursors = cursors;
        self
    }
}

/// Turns a cursor position into completion entries.
///
/// Holds only immutable configuration; every call re-reads the source tree.
#[derive(Debug, Clone)]
pub struct CompletionEngine {
    resolver: PathResolver,
    config: CompletionConfig,
}

impl CompletionEngine {
    pub fn new(resolver: PathResolver, config: CompletionConfig) -> Self {
        Self { resolver, config }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            PathResolver::new(AliasTable::new(&settings.aliases)),
            settings.completion.clone(),
        )
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Completions for a request. Any inapplicable context yields an empty list.
    pub fn complete(&self, request: &CompletionRequest) -> Vec<Completion> {
        let [column] = request.cursors.as_slice() else {
            crate::debug_event!("engine", "skipped", "{} cursors", request.cursors.len());
            return Vec::new();
        };

        if let Some(file_name) = &request.file_name {
            if !self.config.accepts_file(file_name) {
                crate::debug_event!("engine", "skipped", "{}", file_name.display());
                return Vec::new();
            }
        }

        let Some(reference) = reference_at_cursor(&request.line, *column) else {
            return Vec::new();
        };

        let Some(root) = self.config.root_for(&request.project_folders) else {
            crate::diagnostic!("engine", "no root path configured");
            return Vec::new();
        };

        let Some(relative) = self.resolver.resolve(&reference.key) else {
            return Vec::new();
        };

        FunctionExtractor::new(root)
            .functions(&relative)
            .iter()
            .map(Completion::from_signature)
            .collect()
    }
}
