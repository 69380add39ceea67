//! Segment parser for the bracket indexing mini-language.

use crate::error::FormatError;
use crate::types::Segment;

/// Segment parser.
pub struct SegmentParser;

impl SegmentParser {
    /// Parse one `/`-delimited token into a [`Segment`].
    ///
    /// Bracketed tokens are tried in order: `[*]`, `[±n]`, `[:n]`, `[n:]`,
    /// `[n:m]`, `[a,b,...]`. A bracketed token matching none of them is an
    /// error. Anything not wrapped in brackets is a key.
    ///
    /// # Example
    ///
    /// ```
    /// use json_path_extract::{Segment, SegmentParser};
    ///
    /// assert_eq!(SegmentParser::parse("[*]").unwrap(), Segment::All);
    /// assert_eq!(SegmentParser::parse("[-1]").unwrap(), Segment::Index(-1));
    /// assert_eq!(SegmentParser::parse("[2:5]").unwrap(), Segment::Range(2, 5));
    /// assert_eq!(SegmentParser::parse("name").unwrap(), Segment::Key("name".into()));
    /// assert!(SegmentParser::parse("[a]").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Segment, FormatError> {
        if token == "[*]" {
            return Ok(Segment::All);
        }
        let inner = match token
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            Some(inner) => inner,
            None => return Ok(Segment::Key(token.to_string())),
        };

        let unsigned = inner.strip_prefix(['+', '-']).unwrap_or(inner);
        if is_digits(unsigned) {
            return Ok(Segment::Index(number(inner, token)?));
        }

        if let Some((start, end)) = inner.split_once(':') {
            match (start.is_empty(), end.is_empty()) {
                (true, false) if is_digits(end) => {
                    return Ok(Segment::RangeTo(number(end, token)?));
                }
                (false, true) if is_digits(start) => {
                    return Ok(Segment::RangeFrom(number(start, token)?));
                }
                (false, false) if is_digits(start) && is_digits(end) => {
                    return Ok(Segment::Range(number(start, token)?, number(end, token)?));
                }
                _ => return Err(unsupported(token)),
            }
        }

        if inner.contains(',') && inner.trim() == inner {
            let items = inner.split(',').map(str::trim).collect::<Vec<_>>();
            if items.iter().all(|item| is_digits(item)) {
                // Entries must also fit `isize` so a bounds error can name them.
                let list = items
                    .into_iter()
                    .map(|item| number::<isize>(item, token).map(|n| n as usize))
                    .collect::<Result<Vec<usize>, _>>()?;
                return Ok(Segment::IndexList(list));
            }
        }

        Err(unsupported(token))
    }

    /// Parse every token of a path expression, failing on the first bad one.
    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Segment>, FormatError> {
        tokens.iter().map(|t| Self::parse(t.as_ref())).collect()
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn number<T: std::str::FromStr>(digits: &str, token: &str) -> Result<T, FormatError> {
    digits.parse().map_err(|_| unsupported(token))
}

fn unsupported(token: &str) -> FormatError {
    FormatError::UnsupportedSegment(token.to_string())
}
