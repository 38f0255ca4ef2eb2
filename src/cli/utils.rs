//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use dialoguer::Input;

/// First line of a file (`-` for stdin), without its line terminator.
pub fn read_first_line(path: &Path) -> Result<String> {
    let content = if path.as_os_str() == "-" {
        read_stdin()?
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    let line = content.lines().next().unwrap_or_default();
    Ok(line.to_string())
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Persist a string either to a file or stdout when `-` or no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        _ => {
            io::stdout().write_all(content.as_bytes())?;
            Ok(())
        }
    }
}

/// Ask for one line, through dialoguer on a terminal or plainly from piped stdin.
pub fn prompt(text: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        return Input::<String>::new()
            .with_prompt(text)
            .allow_empty(true)
            .interact_text()
            .context("failed to read from the terminal");
    }
    eprint!("{}: ", text);
    read_prompt_line(&mut io::stdin().lock())
}

/// One line from `reader`, without its line terminator. End of input is an error.
fn read_prompt_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Err(anyhow!("no input on stdin"));
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}
