//! alertparams — offline structural validation of alerting-rule params.
//!
//! # Usage
//!
//! ```bash
//! # Validate one params document
//! alertparams check --rule-type .index-threshold params.json
//! echo '{"index": ["logs-*"]}' | alertparams check --rule-type .index-threshold -
//!
//! # Validate every rule definition under a directory
//! alertparams scan --rules-dir data/rules
//!
//! # List modeled rule types
//! alertparams rule-types --format json
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{info, warn};

use alertparams_core::{config, parse_params, Config, OutputFormat};
use alertparams_rules::loader::{LoadStatus, RuleLoader};
use alertparams_rules::{
    allowlist_for, check_rule_params, format_params_validation_errors, registered_rule_types,
    specs_for, ParamsReport,
};

// ── CLI ─────────────────────────────────────────────────────────────

/// Validate alerting-rule params against the modeled rule-type schemas.
#[derive(Parser, Debug)]
#[command(name = "alertparams", version, about)]
struct Cli {
    /// Output format: text or json.
    #[arg(long, global = true, env = "ALERTPARAMS_OUTPUT")]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a single params JSON document.
    Check {
        /// Rule type identifier, e.g. `.es-query`.
        #[arg(long)]
        rule_type: String,

        /// Params file, or `-` for stdin.
        #[arg(default_value = "-")]
        params: String,
    },

    /// Validate every rule definition file under a directory.
    Scan {
        /// Directory to scan.
        #[arg(long, env = "ALERTPARAMS_RULES_DIR")]
        rules_dir: Option<PathBuf>,
    },

    /// List rule types with registered params schemas.
    RuleTypes,
}

// ── Commands ────────────────────────────────────────────────────────

fn read_params_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read params from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read '{}'", source))
    }
}

fn print_report(report: &ParamsReport, label: &str) {
    if report.valid {
        println!("ok    {label}");
        return;
    }
    println!("FAIL  {label}");
    for issue in &report.issues {
        match &issue.suggestion {
            Some(hint) => println!("      {} ({hint})", issue.message),
            None => println!("      {}", issue.message),
        }
    }
}

/// Returns whether the params were valid.
fn run_check(rule_type: &str, source: &str, output: OutputFormat) -> Result<bool> {
    let raw = read_params_source(source)?;
    let params = parse_params(&raw).with_context(|| format!("invalid params in '{}'", source))?;

    if specs_for(rule_type).is_empty() {
        warn!(rule_type = %rule_type, "rule type has no registered schema; params are not checked");
    }

    let report = check_rule_params(rule_type, &params);
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text if report.valid => println!("ok"),
        OutputFormat::Text => println!("{}", format_params_validation_errors(&report.messages())),
    }
    Ok(report.valid)
}

/// Returns whether every definition loaded and validated.
fn run_scan(rules_dir: PathBuf, output: OutputFormat) -> Result<bool> {
    let mut loader = RuleLoader::new(rules_dir);
    let results = loader
        .load_all()
        .with_context(|| format!("failed to scan '{}'", loader.rules_dir().display()))?;

    let load_failures: Vec<_> = results
        .iter()
        .filter_map(|result| match &result.status {
            LoadStatus::Failed { error } => Some((result.path.as_path(), error.as_str())),
            _ => None,
        })
        .collect();

    let reports = loader.validate_all();
    let all_ok = load_failures.is_empty() && reports.iter().all(|(_, report)| report.valid);
    info!(
        files = results.len(),
        rules = reports.len(),
        failed_loads = load_failures.len(),
        "scan complete"
    );

    match output {
        OutputFormat::Json => {
            let rules: Vec<_> = reports
                .iter()
                .map(|(rule, report)| {
                    json!({
                        "name": rule.definition.name,
                        "path": rule.path,
                        "report": report,
                    })
                })
                .collect();
            let failures: Vec<_> = load_failures
                .iter()
                .map(|(path, error)| json!({ "path": path, "error": error }))
                .collect();
            let doc = json!({ "valid": all_ok, "load_failures": failures, "rules": rules });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            for (path, error) in &load_failures {
                println!("ERROR {}: {error}", path.display());
            }
            for (rule, report) in &reports {
                print_report(
                    report,
                    &format!("{} [{}]", rule.definition.name, report.rule_type),
                );
            }
        }
    }
    Ok(all_ok)
}

fn run_rule_types(output: OutputFormat) -> Result<()> {
    let listing: Vec<_> = registered_rule_types()
        .map(|rule_type| {
            let schemas: Vec<_> = specs_for(rule_type)
                .iter()
                .map(|spec| json!({ "name": spec.name, "required_keys": spec.required_keys }))
                .collect();
            json!({
                "rule_type": rule_type,
                "schemas": schemas,
                "allowlisted_keys": allowlist_for(rule_type),
            })
        })
        .collect();

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        OutputFormat::Text => {
            for rule_type in registered_rule_types() {
                println!("{rule_type}");
                for spec in specs_for(rule_type) {
                    println!("  {:<28} requires: {}", spec.name, spec.required_keys.join(", "));
                }
                let allowlist = allowlist_for(rule_type);
                if !allowlist.is_empty() {
                    println!("  {:<28} {}", "allowlisted:", allowlist.join(", "));
                }
            }
        }
    }
    Ok(())
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    config::load_dotenv();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    config.log_summary();

    let cli = Cli::parse();
    let output = cli.format.unwrap_or(config.output);

    let ok = match cli.command {
        Command::Check { rule_type, params } => run_check(&rule_type, &params, output)?,
        Command::Scan { rules_dir } => {
            run_scan(rules_dir.unwrap_or_else(|| config.rules_dir.clone()), output)?
        }
        Command::RuleTypes => {
            run_rule_types(output)?;
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_fall_back_to_env_and_win_over_it() {
        std::env::set_var("ALERTPARAMS_OUTPUT", "json");
        std::env::set_var("ALERTPARAMS_RULES_DIR", "from-env");

        let cli = Cli::try_parse_from(["alertparams", "scan"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Command::Scan { rules_dir } => assert_eq!(rules_dir, Some(PathBuf::from("from-env"))),
            other => panic!("expected scan, got {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "alertparams",
            "--format",
            "text",
            "scan",
            "--rules-dir",
            "from-flag",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Text));
        match cli.command {
            Command::Scan { rules_dir } => assert_eq!(rules_dir, Some(PathBuf::from("from-flag"))),
            other => panic!("expected scan, got {other:?}"),
        }

        std::env::remove_var("ALERTPARAMS_OUTPUT");
        std::env::remove_var("ALERTPARAMS_RULES_DIR");
    }
}
