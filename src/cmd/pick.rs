//! `hop pick`: print the single best jump target.
//!
//! Prints an absolute path and nothing else, so a shell wrapper can `cd` into
//! it (see `hop shell`).

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use super::{Session, load_candidates};
use crate::args::ScanArgs;
use crate::error::{Error, Result};
use crate::fuzzy;
use crate::workspace;

#[derive(Args)]
pub struct PickArgs {
    /// Fuzzy query; words are joined, so `hop pick web api` means "webapi"
    #[arg(num_args = 0..)]
    query: Vec<String>,

    #[command(flatten)]
    scan: ScanArgs,
}

pub fn run(args: PickArgs) -> Result<()> {
    let session = Session::open(args.scan.root.as_deref())?;
    let query: String = args.query.concat();
    let candidates = load_candidates(&session, &args.scan)?;

    let target = best_target(&query, &candidates.base, &candidates.list)?;
    println!("{}", target.display());
    Ok(())
}

/// Absolute path of the top-ranked candidate.
pub fn best_target(
    query: &str,
    base: &std::path::Path,
    candidates: &[String],
) -> Result<PathBuf> {
    let choices = fuzzy::filter(query.trim(), candidates);
    let Some(top) = choices.first() else {
        return Err(Error::NoMatch {
            query: query.to_string(),
        });
    };
    debug!(text = %top.text, score = top.score, "picked");
    Ok(workspace::target_path(base, &top.text))
}
