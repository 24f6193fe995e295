//! Line-oriented scanner for `.mv` markup
//!
//! Only two markers matter, both anchored at the start of a line:
//!
//! ```text
//! <MvFUNCTION NAME = "Customer_Load_ID" PARAMETERS = "id, customer var">
//! <MvINCLUDE FILE = "lib/util.mv">
//! ```
//!
//! Whitespace around `=` is optional. Everything else in the file is ignored.

use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use super::FunctionSignature;

static FUNCTION_MARKER: OnceLock<Regex> = OnceLock::new();
static INCLUDE_MARKER: OnceLock<Regex> = OnceLock::new();

fn function_marker() -> &'static Regex {
    FUNCTION_MARKER.get_or_init(|| {
        Regex::new(
            r#"^<MvFUNCTION\s+NAME\s*=\s*"([a-zA-Z0-9_]+)"(?:\s+PARAMETERS\s*=\s*"([^"]*)")?"#,
        )
        .expect("function marker is a valid regex")
    })
}

fn include_marker() -> &'static Regex {
    INCLUDE_MARKER.get_or_init(|| {
        Regex::new(r#"^<MvINCLUDE\s+FILE\s*=\s*"(.*\.mv)">$"#)
            .expect("include marker is a valid regex")
    })
}

/// What a single line declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMarker<'a> {
    Function {
        name: &'a str,
        parameters: Option<&'a str>,
    },
    Include(&'a str),
}

/// Classify one line. The function marker wins when both could apply.
pub fn scan_line(line: &str) -> Option<LineMarker<'_>> {
    if let Some(captures) = function_marker().captures(line) {
        let name = captures.get(1)?.as_str();
        let parameters = captures.get(2).map(|m| m.as_str());
        return Some(LineMarker::Function { name, parameters });
    }

    include_marker()
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| LineMarker::Include(m.as_str()))
}

/// Declarations found in one file, in line order.
#[derive(Debug, Default)]
pub struct FileScan {
    pub functions: Vec<FunctionSignature>,
    pub includes: Vec<String>,
}

/// Scan a file on disk.
///
/// `source` is the root-relative path recorded on each signature. Lines are
/// decoded lossily so stray Latin-1 bytes in comments don't abort the scan.
pub fn scan_file(path: &Path, source: &Path) -> std::io::Result<FileScan> {
    let reader = BufReader::new(File::open(path)?);
    let mut scan = FileScan::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let mut bytes = bytes?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line = String::from_utf8_lossy(&bytes);

        match scan_line(&line) {
            Some(LineMarker::Function { name, parameters }) => {
                scan.functions
                    .push(FunctionSignature::new(name, parameters).with_location(source, index + 1));
            }
            Some(LineMarker::Include(file)) => scan.includes.push(file.to_string()),
            None => {}
        }
    }

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_function_marker_without_spaces() {
        assert_eq!(
            scan_line(r#"<MvFUNCTION NAME="Foo" PARAMETERS="a, b">"#),
            Some(LineMarker::Function {
                name: "Foo",
                parameters: Some("a, b")
            })
        );
    }

    #[test]
    fn test_function_marker_with_spaced_attributes() {
        assert_eq!(
            scan_line(r#"<MvFUNCTION NAME = "Customer_Load_ID" PARAMETERS = "id, customer var" STANDARDOUTPUTLEVEL = "">"#),
            Some(LineMarker::Function {
                name: "Customer_Load_ID",
                parameters: Some("id, customer var")
            })
        );
    }

    #[test]
    fn test_function_marker_without_parameters() {
        assert_eq!(
            scan_line(r#"<MvFUNCTION NAME = "Module_Description" STANDARDOUTPUTLEVEL = "">"#),
            Some(LineMarker::Function {
                name: "Module_Description",
                parameters: None
            })
        );
    }

    #[test]
    fn test_include_marker() {
        assert_eq!(
            scan_line(r#"<MvINCLUDE FILE = "lib/util.mv">"#),
            Some(LineMarker::Include("lib/util.mv"))
        );
        assert_eq!(
            scan_line(r#"<MvINCLUDE FILE="features/cus/cus_ut.mv">"#),
            Some(LineMarker::Include("features/cus/cus_ut.mv"))
        );
    }

    #[test]
    fn test_markers_must_start_the_line() {
        assert_eq!(scan_line(r#"  <MvFUNCTION NAME="Indented">"#), None);
        assert_eq!(scan_line(r#"<MvCOMMENT><MvINCLUDE FILE="x.mv"></MvCOMMENT>"#), None);
        assert_eq!(scan_line(r#"<MvINCLUDE FILE="style.css">"#), None);
        assert_eq!(scan_line(r#"<MvASSIGN NAME = "l.ok" VALUE = "{ 1 }">"#), None);
    }

    #[test]
    fn test_scan_file_records_lines_and_includes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("admin.mv");
        fs::write(
            &path,
            "<MvINCLUDE FILE = \"lib/db.mv\">\r\n\
             <MvFUNCTION NAME = \"First\" PARAMETERS = \"a\">\r\n\
             <MvFUNCTIONRETURN VALUE = 1>\r\n\
             </MvFUNCTION>\r\n\
             <MvFUNCTION NAME = \"Second\">\n\
             <MvINCLUDE FILE = \"json.mv\">",
        )
        .unwrap();

        let scan = scan_file(&path, Path::new("admin.mv")).unwrap();
        let names: Vec<_> = scan.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(scan.functions[0].line, 2);
        assert_eq!(scan.functions[1].line, 5);
        assert_eq!(scan.functions[0].source, Path::new("admin.mv"));
        assert_eq!(scan.includes, vec!["lib/db.mv", "json.mv"]);
    }

    #[test]
    fn test_scan_file_tolerates_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.mv");
        let mut content = b"<MvCOMMENT>caf\xe9</MvCOMMENT>\n".to_vec();
        content.extend_from_slice(b"<MvFUNCTION NAME = \"Cafe\">\n");
        fs::write(&path, content).unwrap();

        let scan = scan_file(&path, Path::new("latin1.mv")).unwrap();
        assert_eq!(scan.functions.len(), 1);
        assert_eq!(scan.functions[0].name, "Cafe");
    }
}
