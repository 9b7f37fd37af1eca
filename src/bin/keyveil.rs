use std::fs;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use keyveil::digits::invert_string;
use keyveil::layout::parse_layout_toml;
use keyveil::pipeline::{convert, convert_with, derive_token, ConvertOptions};

#[derive(Parser)]
#[command(name = "keyveil", about = "Layout-remapped and hash-derived password strings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the hash token and the remapped rendering of an input
    Derive {
        /// The secret or site label to transform
        input: String,
        /// Seed for the 53-bit hash
        #[arg(long, default_value = "0")]
        seed: u32,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run the conversion pipeline only
    Remap {
        /// The string to remap
        input: String,
        /// Keep characters outside the allow-list
        #[arg(long)]
        keep_all: bool,
        /// Leave the first letter's case alone
        #[arg(long)]
        no_capitalize: bool,
        /// Path to a TOML file with a custom [layout] table
        #[arg(long)]
        layout: Option<String>,
    },

    /// Invert each decimal digit (d becomes 9 - d)
    Invert {
        /// Digit string to invert
        digits: String,
    },
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// JSON form of the `derive` output.
#[derive(Serialize)]
struct DeriveOutput<'a> {
    input: &'a str,
    hash: u64,
    token: String,
    converted: String,
}

fn main() {
    keyveil::trace_init::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Derive { input, seed, json } => {
            let derived = derive_token(&input, seed);
            let converted = convert(&input, ConvertOptions::default());
            if json {
                let out = DeriveOutput {
                    input: &input,
                    hash: derived.hash,
                    token: derived.token,
                    converted,
                };
                let rendered = die!(
                    serde_json::to_string_pretty(&out),
                    "Error rendering JSON: {}"
                );
                println!("{rendered}");
            } else {
                println!("{} {}", derived.hash, derived.token);
                println!("{converted}");
            }
        }

        Command::Remap {
            input,
            keep_all,
            no_capitalize,
            layout,
        } => {
            let opts = ConvertOptions {
                filter: !keep_all,
                capitalize: !no_capitalize,
            };
            let out = match layout {
                Some(path) => {
                    let text = die!(fs::read_to_string(&path), "Error reading layout file: {}");
                    let table = die!(parse_layout_toml(&text), "Error in layout file: {}");
                    convert_with(&table, &input, opts)
                }
                None => convert(&input, opts),
            };
            println!("{out}");
        }

        Command::Invert { digits } => {
            println!("{}", die!(invert_string(&digits), "Error: {}"));
        }
    }
}
