//! Path expression splitting and concrete path formatting.

use crate::error::FormatError;
use crate::parser::SegmentParser;
use crate::types::Segment;

/// Split a path expression into its raw segment tokens.
///
/// The path must start with `/`; the leading empty component is dropped.
/// Tokens are not parsed here, so a bad bracket further down the path only
/// fails once evaluation reaches it.
///
/// # Example
///
/// ```
/// use json_path_extract::parse_path_expression;
///
/// assert_eq!(parse_path_expression("/[*]/a/b").unwrap(), vec!["[*]", "a", "b"]);
/// assert_eq!(parse_path_expression("/").unwrap(), vec![""]);
/// assert!(parse_path_expression("a/b").is_err());
/// ```
pub fn parse_path_expression(path: &str) -> Result<Vec<String>, FormatError> {
    match path.strip_prefix('/') {
        Some(rest) => Ok(rest.split('/').map(str::to_string).collect()),
        None => Err(FormatError::MissingLeadingSlash(path.to_string())),
    }
}

/// Split and parse a whole path expression up front.
///
/// # Errors
///
/// - `FormatError::MissingLeadingSlash` - the path does not start with `/`
/// - `FormatError::UnsupportedSegment` - a bracketed token is malformed
pub fn validate_path_expression(path: &str) -> Result<Vec<Segment>, FormatError> {
    let tokens = parse_path_expression(path)?;
    SegmentParser::parse_all(&tokens)
}

/// Join concrete labels into a concrete path, e.g. `[0]/a/b/[2]`.
///
/// # Example
///
/// ```
/// use json_path_extract::format_concrete_path;
///
/// let labels = vec!["[0]".to_string(), "a".to_string()];
/// assert_eq!(format_concrete_path(&labels), "[0]/a");
/// ```
pub fn format_concrete_path(labels: &[String]) -> String {
    labels.join("/")
}

/// Concrete label of a sequence element.
pub(crate) fn index_label(index: usize) -> String {
    format!("[{index}]")
}
