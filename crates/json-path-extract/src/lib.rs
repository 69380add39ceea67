//! Slash-path extraction over JSON values.
//!
//! A path is a `/`-separated list of segments, each either a bare map key or
//! a bracketed index expression:
//!
//! | Segment   | Selects                                      |
//! |-----------|----------------------------------------------|
//! | `key`     | the value under `key` of a map               |
//! | `[*]`     | every element of a sequence                  |
//! | `[n]`     | element `n`, negative counts from the end    |
//! | `[n:]`    | elements from `n` to the end                 |
//! | `[:n]`    | elements before `n`                          |
//! | `[n:m]`   | elements in `[n, m)`                         |
//! | `[a,b,c]` | the listed elements, in listed order         |
//!
//! Evaluation either mirrors the matched structure ([`Aggregate`]) or lists
//! every terminal match with its concrete path ([`Match`]).
//!
//! # Example
//!
//! ```
//! use json_path_extract::{evaluate_flat, evaluate_aggregate};
//! use serde_json::json;
//!
//! let doc = json!([{"a": {"b": ["aa", 3, "777"]}}, {"d": "hhh"}]);
//!
//! let matches = evaluate_flat(&doc, "/[*]/a/b/[*]").unwrap();
//! assert_eq!(matches.len(), 3);
//! assert_eq!(matches[1].path, "[0]/a/b/[1]");
//! assert_eq!(matches[1].value, &json!(3));
//!
//! let agg = evaluate_aggregate(&doc, "/[0]/a/b").unwrap().unwrap();
//! assert_eq!(agg.to_json(), json!(["aa", 3, "777"]));
//! ```

mod error;
pub use error::{FormatError, PathError};

mod types;
pub use types::*;

mod parser;
pub use parser::SegmentParser;

mod path;
pub use path::{format_concrete_path, parse_path_expression, validate_path_expression};

mod options;
pub use options::ExtractOptions;

mod eval;
pub use eval::{evaluate_aggregate, evaluate_flat, PathExtract};

pub mod cli;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc() -> Value {
        json!([
            {"a": {"b": ["aa", 3, "777"]}},
            {"d": "hhh"},
            {"x": [["aa"], [3], ["777"]]},
            {"y": [{"aa": "some aa"}, {"bb": "some bb"}]}
        ])
    }

    #[test]
    fn test_eval_key_chain() {
        let doc = json!({"a": {"b": 42}});
        let matches = evaluate_flat(&doc, "/a/b").unwrap();
        assert_eq!(matches, vec![Match::new("a/b", &json!(42))]);
    }

    #[test]
    fn test_eval_wildcard_over_key() {
        let doc = doc();
        let matches = evaluate_flat(&doc, "/[*]/d").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].path, "[1]/d");
        assert_eq!(matches[0].value, &json!("hhh"));
    }

    #[test]
    fn test_eval_wildcard_terminal() {
        let doc = doc();
        let matches = evaluate_flat(&doc, "/[*]/x").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].path, "[2]/x");
    }

    #[test]
    fn test_eval_index() {
        let doc = doc();
        let agg = evaluate_aggregate(&doc, "/[2]").unwrap().unwrap();
        assert_eq!(agg, Aggregate::Value(&doc[2]));

        let agg = evaluate_aggregate(&doc, "/[-1]").unwrap().unwrap();
        assert_eq!(agg, Aggregate::Value(&doc[3]));
    }

    #[test]
    fn test_eval_range_segments() {
        let doc = json!([10, 11, 12, 13, 14]);
        let values = |path: &str| -> Vec<Value> {
            evaluate_flat(&doc, path)
                .unwrap()
                .into_iter()
                .map(|m| m.value.clone())
                .collect()
        };
        assert_eq!(values("/[2:]"), vec![json!(12), json!(13), json!(14)]);
        assert_eq!(values("/[:2]"), vec![json!(10), json!(11)]);
        assert_eq!(values("/[1:3]"), vec![json!(11), json!(12)]);
        assert_eq!(values("/[4,0,2]"), vec![json!(14), json!(10), json!(12)]);
    }

    #[test]
    fn test_eval_index_list_labels() {
        let doc = json!({"items": ["a", "b", "c", "d"]});
        let paths: Vec<String> = evaluate_flat(&doc, "/items/[3,1]")
            .unwrap()
            .into_iter()
            .map(|m| m.path)
            .collect();
        assert_eq!(paths, vec!["items/[3]", "items/[1]"]);
    }

    #[test]
    fn test_eval_empty_key() {
        let doc = json!({"": {"k": 1}});
        let matches = evaluate_flat(&doc, "//k").unwrap();
        assert_eq!(matches, vec![Match::new("/k", &json!(1))]);
    }

    #[test]
    fn test_eval_format_error() {
        let doc = doc();
        assert_eq!(
            evaluate_flat(&doc, "a/b"),
            Err(PathError::Format(FormatError::MissingLeadingSlash(
                "a/b".into()
            )))
        );
        assert!(evaluate_aggregate(&doc, "/[1:2:3]").is_err());
    }

    #[test]
    fn test_eval_lone_slash_is_empty_key() {
        let doc = json!({"z": 1, "": 2});
        let matches = evaluate_flat(&doc, "/").unwrap();
        assert_eq!(matches, vec![Match::new("", &json!(2))]);
        assert_eq!(evaluate_aggregate(&json!({"z": 1}), "/").unwrap(), None);
    }
}
