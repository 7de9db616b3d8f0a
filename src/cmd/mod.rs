//! Subcommands and the state they share.

pub mod config_cmd;
pub mod find;
pub mod pick;
pub mod shell;

use std::path::PathBuf;

use crate::args::ScanArgs;
use crate::config::{self, LoadedConfig};
use crate::discover;
use crate::error::Result;
use crate::input;
use crate::workspace::{self, Workspace};

/// Resolved workspace and configuration for one invocation.
pub struct Session {
    pub cwd: PathBuf,
    pub workspace: Workspace,
    pub config: LoadedConfig,
}

impl Session {
    pub fn open(root_flag: Option<&std::path::Path>) -> Result<Self> {
        let cwd = workspace::current_dir()?;
        let workspace = workspace::resolve(root_flag, &cwd)?;
        let config = config::load_config(&workspace.root, &cwd);
        Ok(Self {
            cwd,
            workspace,
            config,
        })
    }
}

/// Candidate list plus the directory its relative entries are relative to.
pub struct Candidates {
    pub base: PathBuf,
    pub list: Vec<String>,
}

/// Scan the workspace, or read stdin when `--stdin` is given.
///
/// Stdin entries are taken relative to the current directory.
pub fn load_candidates(session: &Session, scan: &ScanArgs) -> Result<Candidates> {
    if scan.stdin {
        return Ok(Candidates {
            base: session.cwd.clone(),
            list: discover::parse_list(&input::read_stdin()?),
        });
    }

    let options = scan.to_scan_options(&session.config.config)?;
    Ok(Candidates {
        base: session.workspace.root.clone(),
        list: discover::scan(&session.workspace.root, &options)?,
    })
}
