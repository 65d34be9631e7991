//! Implementation of the `glossa translate` command.

use std::fs::read;
use std::path::PathBuf;

use clap::Args;
use glossa::{Bundle, Data, Translator, Value};
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Serialize;

use crate::output::diagnose;

/// Arguments for the translate command.
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Catalog files to load (.json, .toml)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Language preferences, most preferred first (e.g., "fr-CA, en")
    #[arg(long, env = "GLOSSA_LANG")]
    pub lang: String,

    /// Message id to resolve
    #[arg(long)]
    pub id: String,

    /// Text to print when no language has the message
    #[arg(long)]
    pub default: Option<String>,

    /// Plural count; decimals keep their written digits ("1.50")
    #[arg(long)]
    pub count: Option<String>,

    /// Template data in name=value format (repeatable); values are kept as
    /// written text, like --count
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
struct TranslateResult<'a> {
    language_tags: &'a [String],
    result: Option<String>,
    error: Option<String>,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((key.to_string(), value.to_string()))
}

/// Template data from `-p` pairs. Values stay strings so "007" and "1.50"
/// render exactly as typed.
fn param_data(params: Vec<(String, String)>) -> Data {
    params
        .into_iter()
        .map(|(key, raw)| (key, Value::from(raw)))
        .collect()
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> Result<i32> {
    let mut bundle = Bundle::new();
    for path in &args.files {
        let bytes = read(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        bundle
            .parse_message_file_bytes(&bytes, path)
            .map_err(|e| diagnose(&e, &bytes))?;
    }

    let mut arguments = Vec::with_capacity(2);
    if let Some(count) = args.count {
        arguments.push(Value::from(count));
    }
    if !args.params.is_empty() {
        arguments.push(Value::from(param_data(args.params)));
    }

    let translator = Translator::new(&bundle, &args.lang);
    let (result, error) = match translator.try_translate(&args.id, &arguments) {
        Ok(Some(text)) => (Some(text), None),
        Ok(None) => match args.default {
            Some(default) => (Some(default), None),
            None => (
                None,
                Some(format!(
                    "no translation for '{}' in [{}]",
                    args.id,
                    translator.language_tags().join(", ")
                )),
            ),
        },
        Err(e) => (None, Some(e.to_string())),
    };

    if args.json {
        let output = TranslateResult {
            language_tags: translator.language_tags(),
            result: result.clone(),
            error: error.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if let Some(text) = &result {
        println!("{text}");
    }

    match error {
        Some(error) => {
            if !args.json {
                eprintln!("{error}");
            }
            Ok(exitcode::DATAERR)
        }
        None => Ok(exitcode::OK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_splits_on_first_equals() {
        assert_eq!(
            parse_key_val("Expr=a=b"),
            Ok(("Expr".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_val("Name").is_err());
    }

    #[test]
    fn params_keep_their_written_text() {
        let data = param_data(vec![
            ("Id".to_string(), "007".to_string()),
            ("Price".to_string(), "1.50".to_string()),
        ]);
        assert_eq!(data.get("Id"), Some(&Value::from("007")));
        assert_eq!(data.get("Price"), Some(&Value::from("1.50")));
    }
}
