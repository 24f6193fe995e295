//! Symbolic key to file path resolution
//!
//! Maps the key inside an MvDO expression (`[ g.Module_Feature_CUS_UT ].`) to a
//! `.mv` file relative to the store root. Rules are tried in order and the
//! first match wins:
//!
//! 1. exact lookup in the [`AliasTable`]
//! 2. feature pattern: `(module_)?feature_(filename_)?<feature>(_<file>)?`
//! 3. generic pattern: `(module|filename)_<file>`
//!
//! A key matching nothing is reported as a diagnostic and resolves to `None`.

mod aliases;

pub use aliases::{AliasTable, default_aliases, normalize_key};

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static FEATURE_PATTERN: OnceLock<Regex> = OnceLock::new();
static GENERIC_PATTERN: OnceLock<Regex> = OnceLock::new();

fn feature_pattern() -> &'static Regex {
    FEATURE_PATTERN.get_or_init(|| {
        Regex::new(r"^(?:module_)?feature_(?:filename_)?(?P<feature>[a-z]+)(?:_(?P<file>[a-z]+))?$")
            .expect("feature pattern is a valid regex")
    })
}

fn generic_pattern() -> &'static Regex {
    GENERIC_PATTERN.get_or_init(|| {
        Regex::new(r"^(?:module|filename)_(?P<file>[a-z]+)$")
            .expect("generic pattern is a valid regex")
    })
}

/// Which rule produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionRule {
    /// Exact alias table hit
    Alias,
    /// Feature pattern with both feature and file tokens
    FeatureFile,
    /// Feature pattern with only the feature token
    Feature,
    /// `module_<file>` or `filename_<file>`
    Generic,
}

/// A resolved key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub key: String,
    pub path: String,
    pub rule: ResolutionRule,
}

/// Resolves symbolic keys against an alias table and the naming rules.
#[derive(Debug, Clone)]
pub struct PathResolver {
    aliases: AliasTable,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(AliasTable::builtin())
    }
}

impl PathResolver {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// Resolve a key to a path relative to the store root.
    pub fn resolve(&self, key: &str) -> Option<String> {
        self.resolve_with_rule(key).map(|resolution| resolution.path)
    }

    /// Resolve a key, reporting which rule matched.
    pub fn resolve_with_rule(&self, key: &str) -> Option<Resolution> {
        let key = normalize_key(key);

        let (path, rule) = if let Some(path) = self.aliases.get(&key) {
            (path.to_string(), ResolutionRule::Alias)
        } else if let Some(captures) = feature_pattern().captures(&key) {
            let feature = &captures["feature"];
            match captures.name("file") {
                Some(file) => (
                    format!("features/{feature}/{feature}_{}.mv", file.as_str()),
                    ResolutionRule::FeatureFile,
                ),
                None => (
                    format!("features/{feature}/{feature}.mv"),
                    ResolutionRule::Feature,
                ),
            }
        } else if let Some(captures) = generic_pattern().captures(&key) {
            (format!("{}.mv", &captures["file"]), ResolutionRule::Generic)
        } else {
            crate::diagnostic!("resolver", "failed to lookup MvDO path", "{key}");
            return None;
        };

        crate::debug_event!("resolver", "resolved", "{key} -> {path} ({rule:?})");
        Some(Resolution { key, path, rule })
    }
}
