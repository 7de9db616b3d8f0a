//! `hop find`: list ranked jump targets.

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{Candidates, Session, load_candidates};
use crate::args::{FormatArgs, ScanArgs};
use crate::config::{self, Config};
use crate::error::Result;
use crate::fuzzy::{self, Choice, SCORE_MAX};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct FindArgs {
    /// Fuzzy query (empty lists every candidate in scan order)
    #[arg(default_value = "")]
    query: String,

    /// Maximum rows to show (0 = unlimited)
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    #[command(flatten)]
    scan: ScanArgs,

    #[command(flatten)]
    format: FormatArgs,
}

#[derive(Serialize)]
struct ChoiceRow<'a> {
    path: &'a str,
    /// `None` for an exact match (infinite score)
    score: Option<f64>,
    exact: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    positions: Option<&'a [usize]>,
}

impl<'a> From<&'a Choice> for ChoiceRow<'a> {
    fn from(c: &'a Choice) -> Self {
        let exact = c.score == SCORE_MAX;
        ChoiceRow {
            path: &c.text,
            score: (!exact).then_some(c.score),
            exact,
            positions: c.positions.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct FindOutput<'a> {
    query: &'a str,
    root: String,
    candidates: usize,
    results: Vec<ChoiceRow<'a>>,
}

pub fn run(args: FindArgs) -> Result<()> {
    let format = args.format.resolve();
    let session = Session::open(args.scan.root.as_deref())?;
    let config = &session.config.config;

    let query = args.query.trim();
    let candidates = load_candidates(&session, &args.scan)?;
    let mut choices = fuzzy::filter(query, &candidates.list);

    let limit = args.limit.unwrap_or_else(|| config::display_limit(config));
    let total = choices.len();
    if limit > 0 {
        choices.truncate(limit);
    }

    match format {
        OutputFormat::Pretty => output_pretty(&choices, total, query, &candidates, config),
        OutputFormat::Plain => output_plain(&choices),
        OutputFormat::Json | OutputFormat::Yaml => {
            let out = FindOutput {
                query,
                root: candidates.base.to_string_lossy().to_string(),
                candidates: candidates.list.len(),
                results: choices.iter().map(ChoiceRow::from).collect(),
            };
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", serde_yaml::to_string(&out)?);
            }
            Ok(())
        }
    }
}

/// Row data for pretty output table.
#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "SCORE")]
    score: String,
    #[tabled(rename = "PATH")]
    path: String,
}

fn output_pretty(
    choices: &[Choice],
    total: usize,
    query: &str,
    candidates: &Candidates,
    config: &Config,
) -> Result<()> {
    let query_desc = if query.is_empty() {
        "all".to_string()
    } else {
        format!("query=\"{}\"", query)
    };
    println!("{}", candidates.base.display().to_string().bold());
    println!(
        "{} of {} directories ({})",
        total.to_string().bold(),
        candidates.list.len(),
        query_desc.dimmed()
    );
    if total > choices.len() {
        println!(
            "{}",
            format!("Showing top {} (use --limit 0 for all).", choices.len()).dimmed()
        );
    }
    println!();

    if choices.is_empty() {
        println!("{}", "No matches.".dimmed());
        return Ok(());
    }

    // Borders and the score column take roughly 20 columns.
    let path_max = output::terminal_width().saturating_sub(20).max(16);

    let rows: Vec<TableRow> = choices
        .iter()
        .map(|c| {
            let shown = output::truncate_front(&c.text, path_max);
            let path = match &c.positions {
                Some(p) if config.display.highlight => {
                    output::highlight(&shown, &output::shift_positions(&c.text, path_max, p))
                }
                _ => shown,
            };
            TableRow {
                score: fuzzy::format_score(c.score).dimmed().to_string(),
                path,
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    Ok(())
}

fn output_plain(choices: &[Choice]) -> Result<()> {
    for c in choices {
        println!("{}\t{}", fuzzy::format_score(c.score), c.text);
    }
    Ok(())
}
