//! Alias table for symbolic keys with irregular file locations.

use indexmap::IndexMap;

/// Built-in key to path aliases for the stock store libraries.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("module_admin", "admin.mv"),
    ("filename_admin", "admin.mv"),
    ("module_json", "json.mv"),
    ("filename_json", "json.mv"),
    ("library_db", "lib/db.mv"),
    ("library_filename_db", "lib/db.mv"),
    ("module_library_db", "lib/db.mv"),
    ("library_dbapi", "lib/dbapi.mv"),
    ("library_filename_dbapi", "lib/dbapi.mv"),
    ("module_library_dbapi", "lib/dbapi.mv"),
    ("library_native_dbapi", "lib/dbapi_mysql.mv"),
    ("library_filename_native_dbapi", "lib/dbapi_mysql.mv"),
    ("module_library_native_dbapi", "lib/dbapi_mysql.mv"),
    ("library_utilities", "lib/util.mv"),
    ("library_filename_utilities", "lib/util.mv"),
    ("module_library_utilities", "lib/util.mv"),
    ("library_crypto", "lib/crypto.mv"),
    ("library_filename_crypto", "lib/crypto.mv"),
    ("module_library_crypto", "lib/crypto.mv"),
];

/// Built-in aliases as an ordered map, used as the settings default.
pub fn default_aliases() -> IndexMap<String, String> {
    BUILTIN_ALIASES
        .iter()
        .map(|(key, path)| (key.to_string(), path.to_string()))
        .collect()
}

/// Immutable key to path table, built once at startup.
///
/// Keys are normalized (trimmed, lowercased) on construction, matching the
/// normalization applied to lookup keys.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: IndexMap<String, String>,
}

impl AliasTable {
    /// Build a table from configured entries.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, path)| (normalize_key(key.as_ref()), path.into()))
            .collect();
        Self { entries }
    }

    /// Table holding only the built-in aliases.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ALIASES.iter().copied())
    }

    /// Exact lookup of an already normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Normalize a symbolic key for lookup: trimmed and lowercased.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
