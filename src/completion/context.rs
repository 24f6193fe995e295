//! Locating the MvDO expression under the cursor
//!
//! An MvDO call looks like `[ g.Module_Library_DB ].Product_Load_Code( ... )`.
//! The key is the text between `g.` and `]`, and completions are offered only
//! while the cursor sits right after the trailing dot or inside a partially
//! typed method name.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

use crate::resolver::normalize_key;

static MVDO_EXPRESSION: OnceLock<Regex> = OnceLock::new();

fn mvdo_expression() -> &'static Regex {
    MVDO_EXPRESSION.get_or_init(|| {
        Regex::new(r"\[\s*g\.([^\]]+)\s*\]\.").expect("MvDO expression is a valid regex")
    })
}

/// An MvDO expression found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MvdoReference {
    /// Normalized symbolic key
    pub key: String,
    /// Byte range of the whole `[ g.KEY ].` match
    pub span: Range<usize>,
}

/// Find the first MvDO expression on a line.
pub fn find_reference(line: &str) -> Option<MvdoReference> {
    let captures = mvdo_expression().captures(line)?;
    let whole = captures.get(0)?;
    let key = captures.get(1)?;

    Some(MvdoReference {
        key: normalize_key(key.as_str()),
        span: whole.range(),
    })
}

/// Find the MvDO expression the cursor is completing, if any.
///
/// `column` counts characters from the start of the line. The text between
/// the trailing dot and the cursor must be empty or a run of ASCII letters,
/// digits and underscores.
pub fn reference_at_cursor(line: &str, column: usize) -> Option<MvdoReference> {
    let reference = find_reference(line)?;
    let cursor = byte_offset(line, column);

    if cursor == reference.span.end {
        return Some(reference);
    }

    let typed = line.get(reference.span.end..cursor).unwrap_or_default();
    if is_identifier_run(typed) {
        Some(reference)
    } else {
        crate::debug_event!(
            "context",
            "cursor outside method name",
            "{:?} after {}",
            typed,
            reference.key
        );
        None
    }
}

fn is_identifier_run(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Byte offset of a character column, clamped to the end of the line.
fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "<MvASSIGN NAME = \"l.ok\" VALUE = \"{ [ g.Module_Library_DB ].";

    #[test]
    fn test_find_reference_normalizes_key() {
        let line = "{ [g.Module_Feature_CUS_UT ].Customer_Load( l.id ) }";
        let reference = find_reference(line).unwrap();
        assert_eq!(reference.key, "module_feature_cus_ut");
        assert_eq!(&line[reference.span.clone()], "[g.Module_Feature_CUS_UT ].");
    }

    #[test]
    fn test_no_reference() {
        assert_eq!(find_reference("<MvEVAL EXPR = \"{ l.value }\">"), None);
        assert_eq!(find_reference("[ g.Module_Library_DB ]"), None);
        assert_eq!(find_reference("[ l.settings ].Method()"), None);
    }

    #[test]
    fn test_cursor_right_after_dot() {
        let column = LINE.chars().count();
        let reference = reference_at_cursor(LINE, column).unwrap();
        assert_eq!(reference.key, "module_library_db");
    }

    #[test]
    fn test_cursor_mid_method_name() {
        let line = format!("{LINE}Product_Lo");
        let reference = reference_at_cursor(&line, line.chars().count());
        assert!(reference.is_some());
    }

    #[test]
    fn test_cursor_after_non_identifier_text() {
        let line = format!("{LINE}Product_Load( l.id");
        assert_eq!(reference_at_cursor(&line, line.chars().count()), None);

        let line = format!("{LINE} Product");
        assert_eq!(reference_at_cursor(&line, line.chars().count()), None);
    }

    #[test]
    fn test_cursor_before_expression() {
        assert_eq!(reference_at_cursor(LINE, 3), None);
    }

    #[test]
    fn test_columns_count_characters() {
        let line = "{ 'é' $ [ g.Module_JSON ].Json";
        let reference = reference_at_cursor(line, line.chars().count()).unwrap();
        assert_eq!(reference.key, "module_json");
    }

    #[test]
    fn test_column_past_end_is_clamped() {
        let line = format!("{LINE}Load");
        assert!(reference_at_cursor(&line, 10_000).is_some());
    }
}
