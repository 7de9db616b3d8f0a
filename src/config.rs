//! Configuration system for the hop CLI.
//!
//! Configuration is loaded from multiple sources with the following precedence:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HOP_*)
//! 3. Project manifests (.hop/config.yaml, from workspace root down to cwd)
//! 4. User global (~/.config/hop/config.yaml)
//! 5. Built-in defaults (lowest priority)
//!
//! This module provides:
//! - `Config` struct with all settings
//! - `EnvVar` registry for documentation
//! - Helper functions for env var parsing
//! - Config loading and merging

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ============================================================================
// Config Structs
// ============================================================================

/// Root configuration for hop.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Directory scan settings
    pub scan: ScanConfig,
    /// Display settings
    pub display: DisplayConfig,
}

/// Which directories become candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum directory depth below the workspace root
    pub depth: usize,
    /// Include dot-directories
    pub hidden: bool,
    /// Regex patterns; directories whose name matches any of them are skipped
    pub ignore: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            hidden: false,
            ignore: vec![
                "^node_modules$".to_string(),
                "^target$".to_string(),
                "^__pycache__$".to_string(),
                "^(dist|build)$".to_string(),
                "^venv$".to_string(),
            ],
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum rows shown by `hop find` (0 = unlimited)
    pub limit: usize,
    /// Highlight matched characters in pretty output
    pub highlight: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: 20,
            highlight: true,
        }
    }
}

/// Where a configuration value came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Built-in default
    Default,
    /// User global config file
    UserGlobal,
    /// Project manifest (path relative to the workspace root)
    ProjectManifest(String),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::UserGlobal => write!(f, "~/.config/hop/config.yaml"),
            ConfigSource::ProjectManifest(path) => write!(f, "{}", path),
        }
    }
}

// ============================================================================
// Environment Variable Registry
// ============================================================================

/// Environment variable definition for documentation.
pub struct EnvVar {
    /// Variable name (e.g., "HOP_DEPTH")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Default value or behavior
    pub default: &'static str,
    /// Config path this maps to (e.g., "scan.depth")
    pub config_path: &'static str,
    /// Valid values (if enumerable)
    pub values: Option<&'static str>,
}

/// Registry of all supported environment variables.
pub const ENV_VARS: &[EnvVar] = &[
    EnvVar {
        name: "NO_COLOR",
        description: "Disable colored output (standard)",
        default: "unset",
        config_path: "display.highlight",
        values: Some("any non-empty value"),
    },
    EnvVar {
        name: "FORCE_COLOR",
        description: "Force colored output even when not a TTY",
        default: "unset",
        config_path: "display.highlight",
        values: Some("any non-empty value"),
    },
    EnvVar {
        name: "HOP_ROOT",
        description: "Workspace root to scan for directories",
        default: "enclosing git work tree, else cwd",
        config_path: "-",
        values: Some("path"),
    },
    EnvVar {
        name: "HOP_DEPTH",
        description: "Maximum scan depth below the workspace root",
        default: "3",
        config_path: "scan.depth",
        values: Some("number"),
    },
    EnvVar {
        name: "HOP_HIDDEN",
        description: "Include dot-directories when scanning",
        default: "false",
        config_path: "scan.hidden",
        values: Some("1/true/yes or 0/false/no"),
    },
    EnvVar {
        name: "HOP_LIMIT",
        description: "Maximum rows shown by hop find",
        default: "20",
        config_path: "display.limit",
        values: Some("number (0 = unlimited)"),
    },
    EnvVar {
        name: "HOP_LOG",
        description: "Log filter for diagnostics on stderr",
        default: "warn",
        config_path: "-",
        values: Some("error, warn, info, debug, trace, or a tracing filter directive"),
    },
];

// ============================================================================
// Environment Variable Helpers
// ============================================================================

/// Parse a boolean environment variable.
///
/// Returns `Some(true)` for 1/true/yes, `Some(false)` for 0/false/no,
/// and `None` if unset, empty, or unrecognized.
pub fn env_bool(name: &str) -> Option<bool> {
    let v = env_string(name)?;
    match v.to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Parse a string environment variable.
///
/// Returns `Some(value)` if set and non-empty, `None` otherwise.
pub fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Parse a usize environment variable.
pub fn env_usize(name: &str) -> Option<usize> {
    env_string(name).and_then(|v| v.parse().ok())
}

// ============================================================================
// Config Loading
// ============================================================================

/// Manifest file name within .hop/
pub const MANIFEST_FILE: &str = "config.yaml";

/// Project config directory name
pub const CONFIG_DIR: &str = ".hop";

/// Result of loading configuration with source tracking.
#[derive(Debug)]
pub struct LoadedConfig {
    /// The merged configuration
    pub config: Config,
    /// Sources that contributed to this config (in order of application)
    pub sources: Vec<ConfigSource>,
}

/// Load configuration from defaults, the user global file, and project
/// manifests between `root` and `cwd`.
///
/// Env vars and CLI flags are applied at point of use.
pub fn load_config(root: &Path, cwd: &Path) -> LoadedConfig {
    load_config_with(user_config_path().as_deref(), root, cwd)
}

/// [`load_config`] with an explicit user config location.
pub fn load_config_with(user_config: Option<&Path>, root: &Path, cwd: &Path) -> LoadedConfig {
    let mut config = Config::default();
    let mut sources = vec![ConfigSource::Default];

    if let Some(path) = user_config
        && let Some(user) = load_manifest(path)
    {
        merge(&mut config, &user);
        sources.push(ConfigSource::UserGlobal);
    }

    for path in collect_manifest_paths(root, cwd) {
        if let Some(manifest) = load_manifest(&path) {
            let rel_path = path
                .strip_prefix(root)
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|_| path.to_string_lossy().to_string());
            merge(&mut config, &manifest);
            sources.push(ConfigSource::ProjectManifest(rel_path));
        }
    }

    debug!(sources = sources.len(), "configuration loaded");
    LoadedConfig { config, sources }
}

/// Get the user config file path (~/.config/hop/config.yaml).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hop").join("config.yaml"))
}

/// Load a manifest file.
///
/// Missing files yield `None` silently; unparseable ones are logged and skipped.
/// An empty or comment-only manifest (the `hop config init` template) is all defaults.
pub fn load_manifest(path: &Path) -> Option<Config> {
    let content = fs::read_to_string(path).ok()?;
    match serde_yaml::from_str::<Option<Config>>(&content) {
        Ok(config) => Some(config.unwrap_or_default()),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unparseable config");
            None
        }
    }
}

/// Collect manifest paths from `root` to `cwd` (inclusive), root first.
fn collect_manifest_paths(root: &Path, cwd: &Path) -> Vec<PathBuf> {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let cwd = cwd.canonicalize().unwrap_or_else(|_| cwd.to_path_buf());

    let mut dirs = vec![root.clone()];
    if let Ok(rel) = cwd.strip_prefix(&root) {
        let mut current = root.clone();
        for component in rel.components() {
            current = current.join(component);
            dirs.push(current.clone());
        }
    }

    dirs.into_iter()
        .map(|d| d.join(CONFIG_DIR).join(MANIFEST_FILE))
        .filter(|p| p.exists())
        .collect()
}

/// Merge overlay config into base config.
///
/// Non-default values in overlay override values in base.
/// For Vec fields, overlay replaces entirely (not appended).
pub fn merge(base: &mut Config, overlay: &Config) {
    let default_scan = ScanConfig::default();
    if overlay.scan.depth != default_scan.depth {
        base.scan.depth = overlay.scan.depth;
    }
    if overlay.scan.hidden != default_scan.hidden {
        base.scan.hidden = overlay.scan.hidden;
    }
    if overlay.scan.ignore != default_scan.ignore {
        base.scan.ignore = overlay.scan.ignore.clone();
    }

    let default_display = DisplayConfig::default();
    if overlay.display.limit != default_display.limit {
        base.display.limit = overlay.display.limit;
    }
    if overlay.display.highlight != default_display.highlight {
        base.display.highlight = overlay.display.highlight;
    }
}

/// Scan depth after applying `HOP_DEPTH`.
pub fn scan_depth(config: &Config) -> usize {
    env_usize("HOP_DEPTH").unwrap_or(config.scan.depth)
}

/// Whether to scan dot-directories after applying `HOP_HIDDEN`.
pub fn scan_hidden(config: &Config) -> bool {
    env_bool("HOP_HIDDEN").unwrap_or(config.scan.hidden)
}

/// `hop find` row limit after applying `HOP_LIMIT`.
pub fn display_limit(config: &Config) -> usize {
    env_usize("HOP_LIMIT").unwrap_or(config.display.limit)
}

/// Generate JSON schema for the config.
pub fn json_schema() -> String {
    let schema = schemars::schema_for!(Config);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
}

/// Generate a template manifest with comments.
pub fn template_manifest() -> String {
    r#"# hop configuration manifest
# Place in .hop/config.yaml at the workspace root (or any directory below it)

# Which directories become jump targets
# scan:
#   depth: 3            # levels below the workspace root
#   hidden: false       # include dot-directories
#   ignore:             # regexes matched against directory names
#     - ^node_modules$
#     - ^target$
#     - ^__pycache__$
#     - ^(dist|build)$
#     - ^venv$

# Display settings
# display:
#   limit: 20           # rows shown by `hop find` (0 = unlimited)
#   highlight: true     # highlight matched characters
"#
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
