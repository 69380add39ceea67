//! Segment and result types.

use crate::error::PathError;
use serde_json::Value;
use std::fmt;

/// One parsed `/`-delimited path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Every element of a sequence: `[*]`
    All,
    /// Single element, negative counts from the end: `[2]`, `[-1]`
    Index(isize),
    /// Elements from `n` to the end: `[n:]`
    RangeFrom(usize),
    /// Elements before `n`: `[:n]`
    RangeTo(usize),
    /// Elements in `[start, end)`: `[n:m]`
    Range(usize, usize),
    /// Listed elements in listed order: `[1,3,5]`
    IndexList(Vec<usize>),
    /// Map entry: bare token
    Key(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::All => f.write_str("[*]"),
            Segment::Index(n) => write!(f, "[{n}]"),
            Segment::RangeFrom(n) => write!(f, "[{n}:]"),
            Segment::RangeTo(n) => write!(f, "[:{n}]"),
            Segment::Range(n, m) => write!(f, "[{n}:{m}]"),
            Segment::IndexList(list) => {
                f.write_str("[")?;
                for (i, idx) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{idx}")?;
                }
                f.write_str("]")
            }
            Segment::Key(key) => f.write_str(key),
        }
    }
}

/// One terminal match of a flat evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    /// Concrete path, e.g. `[0]/a/b/[2]`.
    pub path: String,
    /// The matched value.
    pub value: &'a Value,
}

impl<'a> Match<'a> {
    pub fn new(path: impl Into<String>, value: &'a Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }
}

/// Nested result of an aggregate evaluation.
///
/// Key and single-index steps pass their sub-result through unchanged, so
/// only multi-element segments introduce nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregate<'a> {
    /// A terminal value.
    Value(&'a Value),
    /// One `(concrete label, sub-result)` per selected element that matched.
    Branches(Vec<(String, Aggregate<'a>)>),
}

impl<'a> Aggregate<'a> {
    /// Render as JSON. Branches become arrays of `[label, sub-result]` pairs.
    pub fn to_json(&self) -> Value {
        match self {
            Aggregate::Value(v) => (*v).clone(),
            Aggregate::Branches(branches) => Value::Array(
                branches
                    .iter()
                    .map(|(label, sub)| {
                        Value::Array(vec![Value::String(label.clone()), sub.to_json()])
                    })
                    .collect(),
            ),
        }
    }

    /// Terminal values in traversal order.
    pub fn leaves(&self) -> Vec<&'a Value> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<&'a Value>) {
        match self {
            Aggregate::Value(v) => out.push(*v),
            Aggregate::Branches(branches) => {
                for (_, sub) in branches {
                    sub.collect_leaves(out);
                }
            }
        }
    }
}

/// Evaluation result together with the errors a tolerant call skipped over.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub result: T,
    pub skipped: Vec<PathError>,
}

impl<T> Extraction<T> {
    /// True when the evaluation completed without tolerating any error.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
