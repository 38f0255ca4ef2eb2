//! Pack to message (`pack decode ...`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardpack::{Alphabet, BigNatural, Pack};
use clap::Args;
use serde::Serialize;

use crate::cli::common::FormatArg;
use crate::cli::utils::{prompt, read_first_line, write_output};

/// Arguments for `pack decode`.
#[derive(Args, Debug, Default)]
pub struct DecodeArgs {
    /// File whose first line is the pack (`-` for stdin). Prompts when omitted.
    pub input: Option<PathBuf>,
    /// Where to write the message (defaults to stdout).
    pub output: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
    /// Also print the pack's index to stderr.
    #[arg(long)]
    pub show_index: bool,
}

#[derive(Serialize)]
struct DecodeReport<'a> {
    message: &'a str,
    index: &'a BigNatural,
}

/// Execute a decode command.
pub fn handle(args: &DecodeArgs, alphabet: &Alphabet) -> Result<()> {
    match &args.input {
        Some(input) => batch(args, alphabet, input),
        None => interactive(args, alphabet),
    }
}

fn batch(args: &DecodeArgs, alphabet: &Alphabet, input: &Path) -> Result<()> {
    let line = read_first_line(input)?;
    let (message, index) = decode(alphabet, &line, args.show_index)?;
    let mut content = render(args, &message, &index)?;
    content.push('\n');
    write_output(args.output.as_deref(), &content)?;
    log::info!("decoded a pack into {} chars", message.chars().count());
    Ok(())
}

/// Prompt for a pack and print the message it holds.
pub fn interactive(args: &DecodeArgs, alphabet: &Alphabet) -> Result<()> {
    let line = prompt("Enter a pack to decode")?;
    let (message, index) = decode(alphabet, &line, args.show_index)?;
    if args.format == FormatArg::Json {
        println!("{}", render(args, &message, &index)?);
    } else {
        println!("\nThe message decodes as:\n");
        println!("{}", message);
    }
    Ok(())
}

fn decode(alphabet: &Alphabet, line: &str, show_index: bool) -> Result<(String, BigNatural)> {
    let pack = Pack::parse(line).context("cannot read pack")?;
    let index = pack.index();
    if show_index {
        eprintln!("index: {}", index);
    }
    Ok((alphabet.decode(&index), index))
}

fn render(args: &DecodeArgs, message: &str, index: &BigNatural) -> Result<String> {
    match args.format {
        FormatArg::Json => serde_json::to_string_pretty(&DecodeReport { message, index })
            .context("failed to serialize message"),
        FormatArg::Text => Ok(message.to_string()),
    }
}
