//! `hop shell`: print a wrapper function that changes directory.
//!
//! A child process cannot change its parent's working directory, so the jump
//! itself happens in a shell function that `cd`s into `hop pick`'s output.

use clap::{Args, ValueEnum};
use regex::Regex;

use crate::error::{Error, Result};

#[derive(Args)]
pub struct ShellArgs {
    /// Shell to generate the wrapper for
    #[arg(value_enum)]
    shell: WrapperShell,

    /// Name of the generated function
    #[arg(long, default_value = "j")]
    name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WrapperShell {
    Bash,
    Zsh,
    Fish,
}

pub fn run(args: ShellArgs) -> Result<()> {
    print!("{}", wrapper(args.shell, &args.name)?);
    Ok(())
}

/// Shell source defining function `name`.
pub fn wrapper(shell: WrapperShell, name: &str) -> Result<String> {
    let valid = Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$")?;
    if !valid.is_match(name) {
        return Err(Error::Config(format!("invalid function name: {}", name)));
    }

    let body = match shell {
        WrapperShell::Bash | WrapperShell::Zsh => format!(
            r#"{name}() {{
    local target
    target="$(command hop pick "$@")" || return $?
    builtin cd -- "$target"
}}
"#
        ),
        WrapperShell::Fish => format!(
            r#"function {name}
    set -l target (command hop pick $argv); or return $status
    builtin cd -- $target
end
"#
        ),
    };
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_wrapper() {
        let src = wrapper(WrapperShell::Bash, "j").unwrap();
        assert!(src.starts_with("j() {"));
        assert!(src.contains("hop pick \"$@\""));
        assert_eq!(src, wrapper(WrapperShell::Zsh, "j").unwrap());
    }

    #[test]
    fn test_fish_wrapper() {
        let src = wrapper(WrapperShell::Fish, "go2").unwrap();
        assert!(src.starts_with("function go2"));
        assert!(src.contains("$argv"));
    }

    #[test]
    fn test_rejects_unsafe_name() {
        assert!(wrapper(WrapperShell::Bash, "j; rm -rf").is_err());
        assert!(wrapper(WrapperShell::Bash, "").is_err());
    }
}
