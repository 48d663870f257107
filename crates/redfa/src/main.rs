//! Thin CLI shell over the construction pipeline.

use std::fs;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use redfa::{Automaton, Error, Token, accepts, build_dfa, is_well_formed, to_postfix};

#[derive(Subcommand)]
enum Commands {
    /// Build a DFA from a regular expression and print it
    Build {
        /// The regular expression
        expr: String,
        /// Write the rendered DFA to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check whether words are accepted by the expression's DFA
    Check {
        /// The regular expression
        expr: String,
        /// Words to test
        words: Vec<String>,
    },
    /// Print the postfix (reverse polish) form of an expression
    Postfix {
        /// The regular expression
        expr: String,
    },
}

#[derive(Parser)]
#[command(about = "Compile regular expressions to DFAs and test words against them")]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

/// Build the DFA and refuse to hand it out unless it is well-formed.
fn compile(expr: &str) -> Result<Automaton> {
    let dfa = build_dfa(expr)?;
    if !is_well_formed(&dfa) {
        bail!(Error::InvalidAutomaton);
    }
    Ok(dfa)
}

fn main() -> Result<()> {
    match Args::parse().command {
        Commands::Build { expr, output } => {
            let dfa = compile(&expr)?;
            match output {
                Some(path) => fs::write(&path, dfa.render())?,
                None => print!("{dfa}"),
            }
        }
        Commands::Check { expr, words } => {
            let dfa = compile(&expr)?;
            for word in &words {
                println!("{word:?}: {}", accepts(&dfa, word));
            }
        }
        Commands::Postfix { expr } => {
            let postfix: String = to_postfix(&expr)?.into_iter().map(Token::glyph).collect();
            println!("{postfix}");
        }
    }
    Ok(())
}
