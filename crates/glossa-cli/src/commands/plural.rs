//! Implementation of the `glossa plural` command.

use clap::Args;
use glossa::{Operands, PluralCategory, PluralRules};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::table::{format_plural_table, PluralRow};

/// Arguments for the plural command.
#[derive(Debug, Args)]
pub struct PluralArgs {
    /// Locale whose plural rule to apply (e.g., ru, pt-PT)
    #[arg(long)]
    pub locale: String,

    /// Numbers to classify, as written ("1", "1.50", "-21")
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one classified value.
#[derive(Serialize)]
struct PluralJson {
    value: String,
    category: Option<String>,
    error: Option<String>,
}

/// Run the plural command.
pub fn run_plural(args: PluralArgs) -> Result<i32> {
    let rules = PluralRules::shared();
    let Some(rule) = rules.resolve(&args.locale) else {
        eprintln!("no plural rule for locale '{}'", args.locale);
        return Ok(exitcode::DATAERR);
    };

    let mut rows = Vec::new();
    let mut json = Vec::new();
    let mut failed = false;
    for value in &args.values {
        match value.parse::<Operands>() {
            Ok(operands) => {
                let category = rule.category_for(&operands);
                json.push(PluralJson {
                    value: value.clone(),
                    category: Some(category.to_string()),
                    error: None,
                });
                rows.push(PluralRow {
                    input: value.clone(),
                    operands,
                    category,
                });
            }
            Err(e) => {
                failed = true;
                if !args.json {
                    eprintln!("{e}");
                }
                json.push(PluralJson {
                    value: value.clone(),
                    category: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        let categories: Vec<&str> = rule
            .categories()
            .iter()
            .copied()
            .map(PluralCategory::as_str)
            .collect();
        println!("{} uses: {}", args.locale, categories.join(", "));
        if !rows.is_empty() {
            println!("{}", format_plural_table(&rows));
        }
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
