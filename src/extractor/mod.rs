//! Function extraction over the include graph
//!
//! Starting from one `.mv` file, collects every `<MvFUNCTION>` declaration in
//! that file and, depth-first, in each file it pulls in with `<MvINCLUDE>`.
//! Include paths are relative to the store root, not to the including file.
//!
//! Nothing is cached: every call re-reads the whole include closure.

mod scanner;
mod signature;

pub use scanner::{FileScan, LineMarker, scan_file, scan_line};
pub use signature::FunctionSignature;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of walking one include graph.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Extraction {
    /// Own declarations first, then each include's, in include order
    pub functions: Vec<FunctionSignature>,
    /// Files scanned, in visit order
    pub files: Vec<PathBuf>,
    /// Files that were missing or unreadable
    pub missing: Vec<PathBuf>,
    /// Includes skipped because the file was already being expanded
    pub cycles: Vec<PathBuf>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Walks `.mv` include graphs under a store root.
#[derive(Debug, Clone)]
pub struct FunctionExtractor {
    root: PathBuf,
}

impl FunctionExtractor {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        Self { root }
    }

    /// Extract all signatures reachable from `relative`.
    pub fn extract(&self, relative: impl AsRef<Path>) -> Extraction {
        let mut extraction = Extraction::default();
        let mut stack = Vec::new();
        self.walk(relative.as_ref(), &mut stack, &mut extraction);
        extraction
    }

    /// Convenience wrapper returning only the signatures.
    pub fn functions(&self, relative: impl AsRef<Path>) -> Vec<FunctionSignature> {
        self.extract(relative).functions
    }

    fn walk(&self, relative: &Path, stack: &mut Vec<PathBuf>, out: &mut Extraction) {
        let path = self.root.join(relative);

        if !path.is_file() {
            crate::diagnostic!("extractor", "file not found", "{}", path.display());
            out.missing.push(relative.to_path_buf());
            return;
        }

        // Only ancestors count as a cycle; a file reached through two
        // separate branches is expanded both times.
        let identity = path.canonicalize().unwrap_or_else(|_| path.clone());
        if stack.contains(&identity) {
            crate::diagnostic!(
                "extractor",
                "cyclic include skipped",
                "{}",
                relative.display()
            );
            out.cycles.push(relative.to_path_buf());
            return;
        }

        let scan = match scan_file(&path, relative) {
            Ok(scan) => scan,
            Err(e) => {
                crate::diagnostic!("extractor", "cannot read file", "{}: {e}", path.display());
                out.missing.push(relative.to_path_buf());
                return;
            }
        };

        crate::debug_event!(
            "extractor",
            "scanned",
            "{} ({} functions, {} includes)",
            relative.display(),
            scan.functions.len(),
            scan.includes.len()
        );

        out.files.push(relative.to_path_buf());
        out.functions.extend(scan.functions);

        stack.push(identity);
        for include in &scan.includes {
            self.walk(Path::new(include), stack, out);
        }
        stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn names(extraction: &Extraction) -> Vec<&str> {
        extraction.functions.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_single_function() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.mv", r#"<MvFUNCTION NAME="Foo" PARAMETERS="a, b">"#);

        let functions = FunctionExtractor::new(dir.path()).functions("a.mv");
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].name, "Foo");
        assert_eq!(functions[0].parameters.as_deref(), Some("a, b"));
    }

    #[test]
    fn test_depth_first_order() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "a.mv",
            "<MvFUNCTION NAME = \"A1\">\n\
             <MvINCLUDE FILE = \"lib/b.mv\">\n\
             <MvFUNCTION NAME = \"A2\">\n\
             <MvINCLUDE FILE = \"d.mv\">\n",
        );
        write(
            dir.path(),
            "lib/b.mv",
            "<MvFUNCTION NAME = \"B1\">\n<MvINCLUDE FILE = \"lib/c.mv\">\n<MvFUNCTION NAME = \"B2\">\n",
        );
        write(dir.path(), "lib/c.mv", "<MvFUNCTION NAME = \"C1\">\n");
        write(dir.path(), "d.mv", "<MvFUNCTION NAME = \"D1\">\n");

        let extraction = FunctionExtractor::new(dir.path()).extract("a.mv");
        assert_eq!(names(&extraction), vec!["A1", "A2", "B1", "B2", "C1", "D1"]);
        assert_eq!(
            extraction.files,
            vec![
                PathBuf::from("a.mv"),
                PathBuf::from("lib/b.mv"),
                PathBuf::from("lib/c.mv"),
                PathBuf::from("d.mv"),
            ]
        );
        assert!(extraction.missing.is_empty());
        assert!(extraction.cycles.is_empty());
    }

    #[test]
    fn test_missing_root_file() {
        let dir = TempDir::new().unwrap();
        let extraction = FunctionExtractor::new(dir.path()).extract("nope.mv");
        assert!(extraction.is_empty());
        assert_eq!(extraction.missing, vec![PathBuf::from("nope.mv")]);
    }

    #[test]
    fn test_missing_include_keeps_siblings() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "a.mv",
            "<MvINCLUDE FILE = \"gone.mv\">\n<MvFUNCTION NAME = \"Own\">\n<MvINCLUDE FILE = \"b.mv\">\n",
        );
        write(dir.path(), "b.mv", "<MvFUNCTION NAME = \"Sibling\">\n");

        let extraction = FunctionExtractor::new(dir.path()).extract("a.mv");
        assert_eq!(names(&extraction), vec!["Own", "Sibling"]);
        assert_eq!(extraction.missing, vec![PathBuf::from("gone.mv")]);
    }

    #[test]
    fn test_self_include_terminates() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "a.mv",
            "<MvFUNCTION NAME = \"Loop\">\n<MvINCLUDE FILE = \"a.mv\">\n",
        );

        let extraction = FunctionExtractor::new(dir.path()).extract("a.mv");
        assert_eq!(names(&extraction), vec!["Loop"]);
        assert_eq!(extraction.cycles, vec![PathBuf::from("a.mv")]);
    }

    #[test]
    fn test_mutual_include_terminates() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "a.mv",
            "<MvFUNCTION NAME = \"A\">\n<MvINCLUDE FILE = \"b.mv\">\n",
        );
        write(
            dir.path(),
            "b.mv",
            "<MvFUNCTION NAME = \"B\">\n<MvINCLUDE FILE = \"a.mv\">\n",
        );

        let extraction = FunctionExtractor::new(dir.path()).extract("a.mv");
        assert_eq!(names(&extraction), vec!["A", "B"]);
        assert_eq!(extraction.cycles, vec![PathBuf::from("a.mv")]);
    }

    #[test]
    fn test_diamond_include_expands_each_branch() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "a.mv",
            "<MvINCLUDE FILE = \"b.mv\">\n<MvINCLUDE FILE = \"c.mv\">\n",
        );
        write(dir.path(), "b.mv", "<MvINCLUDE FILE = \"shared.mv\">\n");
        write(dir.path(), "c.mv", "<MvINCLUDE FILE = \"shared.mv\">\n");
        write(dir.path(), "shared.mv", "<MvFUNCTION NAME = \"Shared\">\n");

        let extraction = FunctionExtractor::new(dir.path()).extract("a.mv");
        assert_eq!(names(&extraction), vec!["Shared", "Shared"]);
        assert!(extraction.cycles.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_include_keeps_siblings() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "a.mv",
            "<MvINCLUDE FILE = \"locked.mv\">\n<MvFUNCTION NAME = \"Own\">\n<MvINCLUDE FILE = \"b.mv\">\n",
        );
        write(dir.path(), "locked.mv", "<MvFUNCTION NAME = \"Hidden\">\n");
        write(dir.path(), "b.mv", "<MvFUNCTION NAME = \"Sibling\">\n");

        let locked = dir.path().join("locked.mv");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores file modes, so there is nothing unreadable to test.
        if fs::File::open(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
            return;
        }

        let extraction = FunctionExtractor::new(dir.path()).extract("a.mv");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

        assert_eq!(names(&extraction), vec!["Own", "Sibling"]);
        assert_eq!(extraction.missing, vec![PathBuf::from("locked.mv")]);
        assert_eq!(
            extraction.files,
            vec![PathBuf::from("a.mv"), PathBuf::from("b.mv")]
        );
    }
}
