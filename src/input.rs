//! Stdin input utilities.

use std::io::{self, IsTerminal, Read};

use crate::error::{Error, Result};

/// Read all of stdin if it is piped.
///
/// Returns an empty string when stdin is a terminal, so `--stdin` typed at
/// an interactive prompt does not block waiting for EOF.
pub fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .map_err(|e| Error::io("<stdin>", e))?;
    Ok(buffer)
}
