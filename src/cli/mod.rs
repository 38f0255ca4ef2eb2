//! Command-line interface wiring for the `pack` binary.
//!
//! Each mode lives in its own submodule; this module owns the clap
//! definitions, resolves the alphabet, and falls back to asking for a mode
//! when none is given.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use cardpack::Alphabet;

pub mod common;
pub mod decode;
pub mod encode;
pub mod utils;

use crate::cli::utils::prompt;

/// Parsed CLI entrypoint for the `pack` binary.
#[derive(Parser, Debug)]
#[command(
    name = "pack",
    version,
    about = "Hide a short message in the order of a pack of playing cards"
)]
pub struct Cli {
    /// Mode to run. Prompts for one when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Message symbols in index order (defaults to the reference alphabet).
    #[arg(long, global = true)]
    pub alphabet: Option<String>,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// The two directions of the codec.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn a message into a pack of cards.
    #[command(visible_alias = "enc")]
    Encode(encode::EncodeArgs),
    /// Turn a pack of cards back into its message.
    #[command(visible_alias = "dec")]
    Decode(decode::DecodeArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    let custom;
    let alphabet = match cli.alphabet.as_deref() {
        Some(symbols) => {
            custom = Alphabet::new(symbols).context("invalid --alphabet")?;
            &custom
        }
        None => Alphabet::reference(),
    };
    log::info!("using a {}-symbol alphabet", alphabet.len());

    match cli.command {
        Some(Command::Encode(args)) => encode::handle(&args, alphabet),
        Some(Command::Decode(args)) => decode::handle(&args, alphabet),
        None => ask_mode(alphabet),
    }
}

fn ask_mode(alphabet: &Alphabet) -> Result<()> {
    let mode = prompt("Enter 'enc' for encoding or 'dec' for decoding")?;
    match mode.trim() {
        "enc" | "encode" => encode::interactive(&encode::EncodeArgs::default(), alphabet),
        "dec" | "decode" => decode::interactive(&decode::DecodeArgs::default(), alphabet),
        other => {
            eprintln!("\nDidn't recognise action '{}'\n", other);
            Ok(())
        }
    }
}
