//! Message to pack (`pack encode ...`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardpack::{Alphabet, BigNatural, Pack, Spelling, encode_message};
use clap::Args;
use serde::Serialize;

use crate::cli::common::{FormatArg, StyleArg};
use crate::cli::utils::{prompt, read_first_line, write_output};

/// Arguments for `pack encode`.
#[derive(Args, Debug, Default)]
pub struct EncodeArgs {
    /// File whose first line is the message (`-` for stdin). Prompts when omitted.
    pub input: Option<PathBuf>,
    /// Where to write the pack (defaults to stdout).
    pub output: Option<PathBuf>,
    /// Suit spelling for the one-line pack.
    #[arg(long, value_enum, default_value_t = StyleArg::Unicode)]
    pub style: StyleArg,
    /// Lay the pack out as a numbered 4x13 grid.
    #[arg(long)]
    pub grid: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
    /// Also print the pack's index to stderr.
    #[arg(long)]
    pub show_index: bool,
}

#[derive(Serialize)]
struct EncodeReport<'a> {
    message: &'a str,
    index: BigNatural,
    cards: Pack,
}

/// Execute an encode command.
pub fn handle(args: &EncodeArgs, alphabet: &Alphabet) -> Result<()> {
    match &args.input {
        Some(input) => batch(args, alphabet, input),
        None => interactive(args, alphabet),
    }
}

fn batch(args: &EncodeArgs, alphabet: &Alphabet, input: &Path) -> Result<()> {
    let message = read_first_line(input)?;
    let pack = encode(alphabet, &message, args.show_index)?;
    let mut content = render(args, &message, &pack, Spelling::from(args.style))?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    write_output(args.output.as_deref(), &content)?;
    log::info!("encoded {} chars into a pack", message.chars().count());
    Ok(())
}

/// Prompt for a message and print its pack in both suit spellings.
pub fn interactive(args: &EncodeArgs, alphabet: &Alphabet) -> Result<()> {
    let message = prompt("Enter a message to encode")?;
    let pack = encode(alphabet, &message, args.show_index)?;
    if args.format == FormatArg::Json || args.grid {
        println!("{}", render(args, &message, &pack, Spelling::from(args.style))?);
        return Ok(());
    }
    println!("\nYour message is represented by the following pack of cards:\n");
    println!("{}", pack.one_line(Spelling::RankPictograph));
    println!("\n(without unicode)\n");
    println!("{}", pack.one_line(Spelling::RankLetter));
    Ok(())
}

fn encode(alphabet: &Alphabet, message: &str, show_index: bool) -> Result<Pack> {
    let pack = encode_message(alphabet, message)
        .with_context(|| format!("cannot encode message '{}'", message))?;
    if show_index {
        eprintln!("index: {}", pack.index());
    }
    Ok(pack)
}

fn render(args: &EncodeArgs, message: &str, pack: &Pack, spelling: Spelling) -> Result<String> {
    let text = match args.format {
        FormatArg::Json => serde_json::to_string_pretty(&EncodeReport {
            message,
            index: pack.index(),
            cards: *pack,
        })
        .context("failed to serialize pack")?,
        FormatArg::Text if args.grid => pack.grid(),
        FormatArg::Text => pack.one_line(spelling),
    };
    Ok(text)
}
