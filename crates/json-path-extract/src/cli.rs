//! Core logic of the `json-path-extract` binary.
//!
//! The binary reads a JSON document from stdin, evaluates the path given as
//! its first argument and prints the result as pretty JSON:
//! - aggregate mode (default): the nested result, `null` when nothing matched
//! - `--flat`: an array of `[concrete path, value]` pairs

use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::{ExtractOptions, PathError, PathExtract};

pub const USAGE: &str = "Usage: json-path-extract '<path>' [--flat] [--tolerant] [--verbose]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Path(#[from] PathError),
    #[error("First argument must be a path. {}", USAGE)]
    MissingPath,
    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub path: String,
    pub flat: bool,
    pub options: ExtractOptions,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, CliError> {
        let mut path = None;
        let mut flat = false;
        let mut options = ExtractOptions::default();
        for arg in args {
            match arg.as_ref() {
                "--flat" => flat = true,
                "--tolerant" => options.strict_on_failure = false,
                "--verbose" => options.verbose_trace = true,
                other if other.starts_with("--") => {
                    return Err(CliError::UnknownOption(other.to_string()));
                }
                other if path.is_none() => path = Some(other.to_string()),
                other => return Err(CliError::UnknownOption(other.to_string())),
            }
        }
        Ok(Self {
            path: path.ok_or(CliError::MissingPath)?,
            flat,
            options,
        })
    }
}

/// Evaluate `args.path` against the JSON document `doc_json`.
///
/// Returns the pretty-printed JSON result.
pub fn extract(doc_json: &str, args: &CliArgs) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let engine = PathExtract::new(args.options);
    let out = if args.flat {
        let pairs = engine
            .evaluate_flat(&doc, &args.path)?
            .into_iter()
            .map(|m| Value::Array(vec![Value::String(m.path), m.value.clone()]))
            .collect();
        Value::Array(pairs)
    } else {
        engine
            .evaluate_aggregate(&doc, &args.path)?
            .map(|agg| agg.to_json())
            .unwrap_or(Value::Null)
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Install a stderr `tracing` subscriber. `RUST_LOG` wins when set.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DOC: &str = r#"[{"a": {"b": ["aa", 3, "777"]}}, {"d": "hhh"}]"#;

    #[test]
    fn test_parse_args() {
        let args = CliArgs::parse(&["/[*]/a", "--flat", "--tolerant", "--verbose"]).unwrap();
        assert_eq!(args.path, "/[*]/a");
        assert!(args.flat);
        assert!(!args.options.strict_on_failure);
        assert!(args.options.verbose_trace);

        let args = CliArgs::parse(&["/a"]).unwrap();
        assert!(!args.flat);
        assert_eq!(args.options, ExtractOptions::default());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(matches!(
            CliArgs::parse::<&str>(&[]),
            Err(CliError::MissingPath)
        ));
        assert!(matches!(
            CliArgs::parse(&["/a", "--nope"]),
            Err(CliError::UnknownOption(_))
        ));
        assert!(matches!(
            CliArgs::parse(&["/a", "/b"]),
            Err(CliError::UnknownOption(_))
        ));
    }

    #[test]
    fn test_extract_flat() {
        let args = CliArgs::parse(&["/[*]/a/b/[*]", "--flat"]).unwrap();
        let out: Value = serde_json::from_str(&extract(DOC, &args).unwrap()).unwrap();
        assert_eq!(
            out,
            json!([["[0]/a/b/[0]", "aa"], ["[0]/a/b/[1]", 3], ["[0]/a/b/[2]", "777"]])
        );
    }

    #[test]
    fn test_extract_aggregate() {
        let args = CliArgs::parse(&["/[*]/d"]).unwrap();
        let out: Value = serde_json::from_str(&extract(DOC, &args).unwrap()).unwrap();
        assert_eq!(out, json!([["[1]", "hhh"]]));

        let args = CliArgs::parse(&["/[0]/zzz"]).unwrap();
        assert_eq!(extract(DOC, &args).unwrap(), "null");
    }

    #[test]
    fn test_extract_errors() {
        let args = CliArgs::parse(&["/[5]"]).unwrap();
        assert!(matches!(extract(DOC, &args), Err(CliError::Path(_))));
        assert!(matches!(extract("{not json", &args), Err(CliError::Json(_))));

        let args = CliArgs::parse(&["/[5]", "--tolerant"]).unwrap();
        assert_eq!(extract(DOC, &args).unwrap(), "null");
    }
}
