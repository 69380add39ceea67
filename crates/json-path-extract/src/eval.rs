//! Path traversal engine.

use crate::error::PathError;
use crate::options::ExtractOptions;
use crate::parser::SegmentParser;
use crate::path::{format_concrete_path, index_label, parse_path_expression};
use crate::types::*;
use serde_json::Value;
use tracing::{debug, warn};

/// Path extraction engine.
///
/// Holds only its options; every evaluation call owns its own working state,
/// so one engine can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathExtract {
    options: ExtractOptions,
}

impl PathExtract {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Evaluate `path` and mirror the matched structure.
    ///
    /// Key and index steps pass their sub-result through, multi-element
    /// segments (`[*]`, ranges, index lists) produce one labelled branch per
    /// element that matched. Returns `None` when nothing matched.
    ///
    /// # Example
    ///
    /// ```
    /// use json_path_extract::{Aggregate, PathExtract};
    /// use serde_json::json;
    ///
    /// let doc = json!({"a": [1, 2]});
    /// let agg = PathExtract::default().evaluate_aggregate(&doc, "/a/[*]").unwrap().unwrap();
    /// assert_eq!(agg.to_json(), json!([["[0]", 1], ["[1]", 2]]));
    /// ```
    pub fn evaluate_aggregate<'a>(
        &self,
        root: &'a Value,
        path: &str,
    ) -> Result<Option<Aggregate<'a>>, PathError> {
        Ok(self.extract_aggregate(root, path)?.result)
    }

    /// Evaluate `path` and list every terminal match with its concrete path.
    ///
    /// Matches come in traversal order: depth first, ascending indices.
    ///
    /// # Example
    ///
    /// ```
    /// use json_path_extract::PathExtract;
    /// use serde_json::json;
    ///
    /// let doc = json!([{"a": 1}, {"b": 2}, {"a": 3}]);
    /// let matches = PathExtract::default().evaluate_flat(&doc, "/[*]/a").unwrap();
    /// let paths: Vec<_> = matches.iter().map(|m| m.path.as_str()).collect();
    /// assert_eq!(paths, vec!["[0]/a", "[2]/a"]);
    /// ```
    pub fn evaluate_flat<'a>(
        &self,
        root: &'a Value,
        path: &str,
    ) -> Result<Vec<Match<'a>>, PathError> {
        Ok(self.extract_flat(root, path)?.result)
    }

    /// Like [`evaluate_aggregate`](Self::evaluate_aggregate), also reporting
    /// the errors skipped in tolerant mode.
    pub fn extract_aggregate<'a>(
        &self,
        root: &'a Value,
        path: &str,
    ) -> Result<Extraction<Option<Aggregate<'a>>>, PathError> {
        let mut walker = Walker::new(self.options, Mode::Aggregate);
        let result = walker.run(root, path)?;
        Ok(Extraction {
            result,
            skipped: walker.skipped,
        })
    }

    /// Like [`evaluate_flat`](Self::evaluate_flat), also reporting the errors
    /// skipped in tolerant mode.
    pub fn extract_flat<'a>(
        &self,
        root: &'a Value,
        path: &str,
    ) -> Result<Extraction<Vec<Match<'a>>>, PathError> {
        let mut walker = Walker::new(self.options, Mode::Flat);
        walker.run(root, path)?;
        Ok(Extraction {
            result: walker.matches,
            skipped: walker.skipped,
        })
    }
}

/// Aggregate evaluation with default (strict, quiet) options.
pub fn evaluate_aggregate<'a>(
    root: &'a Value,
    path: &str,
) -> Result<Option<Aggregate<'a>>, PathError> {
    PathExtract::default().evaluate_aggregate(root, path)
}

/// Flat evaluation with default (strict, quiet) options.
pub fn evaluate_flat<'a>(root: &'a Value, path: &str) -> Result<Vec<Match<'a>>, PathError> {
    PathExtract::default().evaluate_flat(root, path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Aggregate,
    Flat,
}

/// Working state of one evaluation call.
struct Walker<'a> {
    options: ExtractOptions,
    mode: Mode,
    /// Concrete labels of the branch currently being walked.
    labels: Vec<String>,
    matches: Vec<Match<'a>>,
    skipped: Vec<PathError>,
}

impl<'a> Walker<'a> {
    fn new(options: ExtractOptions, mode: Mode) -> Self {
        Self {
            options,
            mode,
            labels: Vec::new(),
            matches: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn run(&mut self, root: &'a Value, path: &str) -> Result<Option<Aggregate<'a>>, PathError> {
        let tokens = match parse_path_expression(path) {
            Ok(tokens) => tokens,
            Err(err) => return self.fail(err.into()),
        };
        if self.options.verbose_trace {
            debug!(path, mode = ?self.mode, segments = tokens.len(), "evaluate");
        }
        self.step(root, &tokens)
    }

    fn step(
        &mut self,
        value: &'a Value,
        tokens: &[String],
    ) -> Result<Option<Aggregate<'a>>, PathError> {
        let Some((token, rest)) = tokens.split_first() else {
            return Ok(self.terminal(value));
        };
        let segment = match SegmentParser::parse(token) {
            Ok(segment) => segment,
            Err(err) => return self.fail(err.into()),
        };
        if self.options.verbose_trace {
            debug!(at = %self.at(), %segment, remaining = rest.len(), "apply segment");
        }

        match segment {
            Segment::Key(key) => self.select_key(&key, value, rest),
            Segment::Index(index) => self.select_index(index, value, rest),
            multi => self.select_many(&multi, value, rest),
        }
    }

    fn select_key(
        &mut self,
        key: &str,
        value: &'a Value,
        rest: &[String],
    ) -> Result<Option<Aggregate<'a>>, PathError> {
        let Value::Object(map) = value else {
            return Ok(self.no_match("key lookup on non-map"));
        };
        match map.get(key) {
            Some(child) => self.enter(key.to_string(), child, rest),
            None => Ok(self.no_match("missing key")),
        }
    }

    fn select_index(
        &mut self,
        index: isize,
        value: &'a Value,
        rest: &[String],
    ) -> Result<Option<Aggregate<'a>>, PathError> {
        let Value::Array(arr) = value else {
            return Ok(self.no_match("index on non-sequence"));
        };
        match resolve_index(index, arr.len()) {
            Some(i) => self.enter(index_label(i), &arr[i], rest),
            None => self.fail(PathError::Bounds {
                index,
                len: arr.len(),
            }),
        }
    }

    fn select_many(
        &mut self,
        segment: &Segment,
        value: &'a Value,
        rest: &[String],
    ) -> Result<Option<Aggregate<'a>>, PathError> {
        let Value::Array(arr) = value else {
            return Ok(self.no_match("multi-element selection on non-sequence"));
        };

        let mut branches = Vec::new();
        for selected in selection(segment, arr.len()) {
            let i = match selected {
                Ok(i) => i,
                Err(err) => {
                    self.fail(err)?;
                    continue;
                }
            };
            let label = index_label(i);
            if let Some(sub) = self.enter(label.clone(), &arr[i], rest)? {
                branches.push((label, sub));
            }
        }

        if self.mode == Mode::Flat || branches.is_empty() {
            return Ok(None);
        }
        Ok(Some(Aggregate::Branches(branches)))
    }

    /// Walk `child` with `label` pushed for the duration of the descent.
    fn enter(
        &mut self,
        label: String,
        child: &'a Value,
        rest: &[String],
    ) -> Result<Option<Aggregate<'a>>, PathError> {
        self.labels.push(label);
        let out = self.step(child, rest);
        self.labels.pop();
        out
    }

    fn terminal(&mut self, value: &'a Value) -> Option<Aggregate<'a>> {
        if self.options.verbose_trace {
            debug!(at = %self.at(), "match");
        }
        match self.mode {
            Mode::Aggregate => Some(Aggregate::Value(value)),
            Mode::Flat => {
                let path = self.at();
                self.matches.push(Match::new(path, value));
                None
            }
        }
    }

    fn no_match(&self, reason: &str) -> Option<Aggregate<'a>> {
        if self.options.verbose_trace {
            debug!(at = %self.at(), reason, "no match");
        }
        None
    }

    /// Abort in strict mode, otherwise record the error and prune the branch.
    fn fail(&mut self, err: PathError) -> Result<Option<Aggregate<'a>>, PathError> {
        if self.options.strict_on_failure {
            return Err(err);
        }
        if self.options.verbose_trace {
            warn!(at = %self.at(), error = %err, "skipping branch");
        }
        self.skipped.push(err);
        Ok(None)
    }

    fn at(&self) -> String {
        format_concrete_path(&self.labels)
    }
}

/// Resolve a possibly negative index against a sequence length.
fn resolve_index(index: isize, len: usize) -> Option<usize> {
    if index >= 0 {
        let i = index as usize;
        (i < len).then_some(i)
    } else {
        let back = index.unsigned_abs();
        (back <= len).then(|| len - back)
    }
}

/// Indices picked by a multi-element segment, in selection order.
///
/// Ranges clamp to the sequence; listed indices past the end are bounds
/// errors.
fn selection(segment: &Segment, len: usize) -> Vec<Result<usize, PathError>> {
    let clamp = |n: usize| n.min(len);
    match segment {
        Segment::All => (0..len).map(Ok).collect(),
        Segment::RangeFrom(start) => (clamp(*start)..len).map(Ok).collect(),
        Segment::RangeTo(end) => (0..clamp(*end)).map(Ok).collect(),
        Segment::Range(start, end) => (clamp(*start)..clamp(*end)).map(Ok).collect(),
        Segment::IndexList(list) => list
            .iter()
            .map(|&i| {
                if i < len {
                    Ok(i)
                } else {
                    // Parsed list entries always fit isize.
                    Err(PathError::Bounds {
                        index: isize::try_from(i).unwrap_or(isize::MAX),
                        len,
                    })
                }
            })
            .collect(),
        Segment::Index(_) | Segment::Key(_) => Vec::new(),
    }
}
