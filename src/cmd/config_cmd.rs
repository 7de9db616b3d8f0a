//! Configuration introspection command.
//!
//! Provides `hop config` subcommands:
//! - show: Display resolved configuration
//! - env: List environment variables
//! - schema: Output JSON schema
//! - init: Create template manifest

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use super::Session;
use crate::config::{
    self, CONFIG_DIR, ENV_VARS, LoadedConfig, MANIFEST_FILE, template_manifest, user_config_path,
};
use crate::error::{Error, Result};

#[derive(Args)]
pub struct ConfigArgs {
    /// Workspace root (default: $HOP_ROOT, git work tree, or cwd)
    #[arg(long, value_name = "PATH", global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show resolved configuration
    Show(ShowArgs),

    /// List environment variables
    Env,

    /// Output JSON schema for manifest validation
    Schema,

    /// Create template manifest file
    Init(InitArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// Show where each value came from
    #[arg(long)]
    effective: bool,
}

#[derive(Args)]
struct InitArgs {
    /// Directory to create the manifest in (default: workspace root)
    path: Option<PathBuf>,

    /// Overwrite existing manifest
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show(show_args) => {
            let session = Session::open(args.root.as_deref())?;
            run_show(&session.config, show_args.effective)
        }
        ConfigCommand::Env => run_env(),
        ConfigCommand::Schema => run_schema(),
        ConfigCommand::Init(init_args) => {
            let session = Session::open(args.root.as_deref())?;
            let target = match &init_args.path {
                Some(p) => session.cwd.join(p),
                None => session.workspace.root.clone(),
            };
            let manifest = init_manifest(&target, init_args.force)?;
            println!("Created: {}", manifest.display());
            if let Some(user_path) = user_config_path()
                && !user_path.exists()
            {
                println!(
                    "Hint: User global config can be placed at: {}",
                    user_path.display()
                );
            }
            Ok(())
        }
    }
}

fn run_show(loaded: &LoadedConfig, effective: bool) -> Result<()> {
    if effective {
        println!("# Resolved configuration");
        println!("# Sources (in order of precedence):");
        for source in &loaded.sources {
            println!("#   - {}", source);
        }
        println!();
    }

    let yaml = serde_yaml::to_string(&loaded.config)?;
    println!("{}", yaml.trim());
    Ok(())
}

fn run_env() -> Result<()> {
    println!("Environment Variables:");
    println!();

    for var in ENV_VARS {
        println!("  {}", var.name);
        println!("    {}", var.description);
        if let Some(values) = var.values {
            println!("    Values: {}", values);
        }
        println!("    Default: {}", var.default);
        println!("    Config path: {}", var.config_path);
        println!();
    }

    Ok(())
}

fn run_schema() -> Result<()> {
    println!("{}", config::json_schema());
    Ok(())
}

/// Write the commented template into `<dir>/.hop/config.yaml`.
pub fn init_manifest(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_dir = dir.join(CONFIG_DIR);
    let manifest_path = config_dir.join(MANIFEST_FILE);

    if manifest_path.exists() && !force {
        return Err(Error::Config(format!(
            "manifest already exists: {}\nUse --force to overwrite",
            manifest_path.display()
        )));
    }

    fs::create_dir_all(&config_dir).map_err(|e| Error::io(&config_dir, e))?;
    fs::write(&manifest_path, template_manifest()).map_err(|e| Error::io(&manifest_path, e))?;

    Ok(manifest_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = init_manifest(tmp.path(), false).unwrap();
        assert!(path.ends_with(".hop/config.yaml"));

        assert!(matches!(
            init_manifest(tmp.path(), false),
            Err(Error::Config(_))
        ));
        assert!(init_manifest(tmp.path(), true).is_ok());
    }
}
