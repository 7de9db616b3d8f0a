//! Output formatting utilities with TTY auto-detection and match highlighting.

use std::io::IsTerminal;

use clap::ValueEnum;
use colored::Colorize;

use crate::config::env_string;

/// Output format for commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-optimized: colors, table, highlighted matches
    #[default]
    Pretty,
    /// Script-friendly: `score<TAB>path`, no colors
    Plain,
    /// Machine-readable JSON
    Json,
    /// Machine-readable YAML
    Yaml,
}

impl OutputFormat {
    /// Resolve the output format, applying TTY auto-detection.
    ///
    /// If format is Pretty but stdout is not a TTY, returns Plain.
    pub fn resolve(self) -> Self {
        match self {
            OutputFormat::Pretty if !std::io::stdout().is_terminal() => OutputFormat::Plain,
            other => other,
        }
    }
}

/// Apply NO_COLOR / FORCE_COLOR to the global `colored` switch.
pub fn init_color() {
    if env_string("NO_COLOR").is_some() {
        colored::control::set_override(false);
    } else if env_string("FORCE_COLOR").is_some() {
        colored::control::set_override(true);
    }
}

/// Emphasize the chars of `text` at `positions` (char indices, ascending).
pub fn highlight(text: &str, positions: &[usize]) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut next = positions.iter().peekable();
    for (idx, c) in text.chars().enumerate() {
        if next.next_if_eq(&&idx).is_some() {
            out.push_str(&c.to_string().yellow().bold().to_string());
        } else {
            out.push(c);
        }
    }
    out
}

/// Get terminal width, defaulting to 80 if unavailable.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate a string from the front, showing "..suffix".
/// Useful for paths where the end is more meaningful.
pub fn truncate_front(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else if max_chars <= 2 {
        "..".to_string()
    } else {
        let skip = char_count - (max_chars - 2);
        let truncated: String = s.chars().skip(skip).collect();
        format!("..{}", truncated)
    }
}

/// Shift match positions after [`truncate_front`] cut `s` down to `max_chars`.
///
/// Positions that fell into the cut are dropped.
pub fn shift_positions(s: &str, max_chars: usize, positions: &[usize]) -> Vec<usize> {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        return positions.to_vec();
    }
    if max_chars <= 2 {
        return Vec::new();
    }
    let skip = char_count - (max_chars - 2);
    positions
        .iter()
        .filter(|&&p| p >= skip)
        .map(|&p| p - skip + 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test: the `colored` override is process-global.
    #[test]
    fn test_highlight() {
        colored::control::set_override(false);
        assert_eq!(highlight("src/lib", &[0, 4]), "src/lib");

        colored::control::set_override(true);
        let got = highlight("ab", &[1]);
        colored::control::unset_override();
        assert!(got.starts_with('a'));
        assert!(got.contains("\u{1b}["));
    }

    #[test]
    fn test_truncate_front() {
        assert_eq!(truncate_front("short", 10), "short");
        assert_eq!(truncate_front("abcdefghij", 6), "..ghij");
        assert_eq!(truncate_front("abc", 2), "..");
    }

    #[test]
    fn test_shift_positions_follow_truncation() {
        // "abcdefghij" -> "..ghij": g(6) lands on index 2
        assert_eq!(shift_positions("abcdefghij", 6, &[0, 6, 9]), vec![2, 5]);
        assert_eq!(shift_positions("abc", 10, &[1]), vec![1]);
    }
}
