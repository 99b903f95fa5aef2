//! SBC CLI
//!
//! Feeds JSON squads to sbc_core and prints the results. Stands in for the
//! page-automation layer when checking rule books or squads by hand.

mod rules;
mod telemetry;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use rules::resolve_rules;
use sbc_core::{api, RuleBook, SCHEMA_VERSION};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Parser)]
#[command(name = "sbc")]
#[command(about = "Squad chemistry and SBC requirement checks", long_about = None)]
struct Cli {
    /// Rule book file (YAML, or JSON with a .json extension). Falls back to
    /// SBC_RULES_PATH, then the built-in FC 26 rules.
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a squad request and validate it against its requirements
    Evaluate {
        /// Request JSON file, or "-" for stdin
        #[arg(long)]
        request: PathBuf,

        /// Pretty-print the response
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Print a blank request for a formation
    Blank {
        #[arg(long, default_value = "4-3-3")]
        formation: String,
    },

    /// Summarise the active rule book and any one-way links in it
    Rules,

    /// Print the JSON Schema of evaluate requests
    Schema,
}

fn main() -> Result<()> {
    telemetry::init_telemetry();
    let cli = Cli::parse();
    let rules = resolve_rules(cli.rules.as_deref())?;
    println!("{}", run(cli.command, &rules)?);
    Ok(())
}

fn run(command: Commands, rules: &RuleBook) -> Result<String> {
    match command {
        Commands::Evaluate { request, pretty } => {
            let body = read_request(&request)?;
            let response = api::evaluate_squad_json_with(rules, &body)
                .with_context(|| format!("Failed to evaluate '{}'", request.display()))?;
            if pretty {
                let value: serde_json::Value = serde_json::from_str(&response)?;
                Ok(serde_json::to_string_pretty(&value)?)
            } else {
                Ok(response)
            }
        }
        Commands::Blank { formation } => {
            let edition = rules.edition();
            let graph = rules
                .formations()
                .get(&formation)
                .ok_or_else(|| {
                    anyhow!("Unknown formation '{formation}' in rule book '{edition}'")
                })?;
            let slots: Vec<_> = graph
                .positions()
                .iter()
                .map(|p| json!({ "position": p }))
                .collect();
            let request = json!({
                "schemaVersion": SCHEMA_VERSION,
                "formation": formation,
                "slots": slots,
                "requirements": {},
            });
            Ok(serde_json::to_string_pretty(&request)?)
        }
        Commands::Rules => {
            let summary = json!({
                "edition": rules.edition(),
                "config": rules.config(),
                "formations": rules.formations().ids().collect::<Vec<_>>(),
                "asymmetries": rules.asymmetry_report(),
            });
            Ok(serde_json::to_string_pretty(&summary)?)
        }
        Commands::Schema => Ok(api::request_schema()?),
    }
}

fn read_request(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read request from stdin")?;
        return Ok(body);
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read request '{}'", path.display()))
}
