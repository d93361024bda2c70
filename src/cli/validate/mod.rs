//! JSON-LD validation command.
//!
//! Every `<script type="application/ld+json">` object must parse, carry the
//! schema.org `@context` and an `@type`, and deserialize into a known
//! [`Schema`] that serializes back to the identical JSON.

mod report;
mod scan;

use anyhow::Result;
use rayon::prelude::*;
use serde_json::Value;

use super::ValidateArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::seo::extract::json_ld_blocks;
use crate::seo::types::{Context, Schema};
use crate::utils::plural_count;

use report::{ValidationError, ValidationReport};
use scan::Source;

/// Validate rendered head fragments.
pub fn validate_site(args: &ValidateArgs, config: &SiteConfig) -> Result<()> {
    let sources = if args.paths.is_empty() {
        scan::render_routes(config)?
    } else {
        scan::read_paths(&args.paths)?
    };

    if sources.is_empty() {
        log!("validate"; "no head fragments found");
        return Ok(());
    }

    log!("validate"; "validating {}", plural_count(sources.len(), "source"));

    let results: Vec<_> = sources
        .par_iter()
        .map(|source| (source.name.clone(), check_source(source)))
        .collect();

    let mut report = ValidationReport::default();
    for (name, (checked, errors)) in results {
        report.add(name, checked, errors);
    }

    report.print();
    log!("validate"; "{} checked, {}", plural_count(report.checked, "object"), report);

    if report.is_clean() {
        return Ok(());
    }
    let summary = format!(
        "{} in {}",
        plural_count(report.error_count(), "error"),
        plural_count(report.source_count(), "source")
    );
    if args.warn_only {
        log!("warning"; "{}", summary);
        Ok(())
    } else {
        anyhow::bail!("validation failed: {}", summary)
    }
}

/// Check every JSON-LD object of a source. Returns the object count and the
/// errors found.
fn check_source(source: &Source) -> (usize, Vec<ValidationError>) {
    let blocks = json_ld_blocks(&source.html);
    if blocks.is_empty() {
        return (
            0,
            vec![ValidationError {
                target: "document".into(),
                reason: "no JSON-LD script found".into(),
            }],
        );
    }

    let mut checked = 0;
    let mut errors = Vec::new();
    for block in blocks {
        let target = format!("script #{}", block.index);
        let values = match block.payload {
            Ok(values) => values,
            Err(e) => {
                errors.push(ValidationError {
                    target,
                    reason: format!("invalid JSON: {e}"),
                });
                continue;
            }
        };

        let many = values.len() > 1;
        for (i, value) in values.iter().enumerate() {
            checked += 1;
            let target = if many {
                format!("{target}[{i}]")
            } else {
                target.clone()
            };
            errors.extend(check_object(value).into_iter().map(|reason| ValidationError {
                target: describe(&target, value),
                reason,
            }));
        }
    }
    (checked, errors)
}

/// `script #2 (WebPage)` when the object has a string `@type`.
fn describe(target: &str, value: &Value) -> String {
    match value.get("@type").and_then(Value::as_str) {
        Some(kind) => format!("{target} ({kind})"),
        None => target.to_string(),
    }
}

/// Problems of one JSON-LD object, empty when valid.
fn check_object(value: &Value) -> Vec<String> {
    let mut problems = Vec::new();

    if !value.is_object() {
        problems.push("not a JSON object".to_string());
        return problems;
    }

    match value.get("@context") {
        None => problems.push("missing @context".to_string()),
        Some(Value::String(ctx)) if ctx == Context::SCHEMA_ORG => {}
        Some(other) => problems.push(format!(
            "@context must be \"{}\", found {other}",
            Context::SCHEMA_ORG
        )),
    }

    match value.get("@type") {
        None => problems.push("missing @type".to_string()),
        Some(Value::String(_)) => {}
        Some(other) => problems.push(format!("@type must be a string, found {other}")),
    }

    if !problems.is_empty() {
        return problems;
    }

    match serde_json::from_value::<Schema>(value.clone()) {
        Err(_) => problems.push("does not match any known schema".to_string()),
        Ok(schema) => match serde_json::to_value(&schema) {
            Ok(round_trip) if round_trip == *value => {}
            Ok(_) => problems.push("changes when round-tripped through its schema".to_string()),
            Err(e) => problems.push(format!("failed to serialize: {e}")),
        },
    }
    problems
}
