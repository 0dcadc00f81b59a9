//! TextPress CLI - Pure Rust Huffman text compression.
//!
//! The encoded format carries no embedded tree, so `decode` rebuilds the
//! coding tree from the same corpus the encoder was built from.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use textpress_huffman::HuffmanCoder;

#[derive(Parser)]
#[command(name = "textpress")]
#[command(version, about = "Pure Rust Huffman text compression")]
#[command(long_about = "
TextPress compresses ASCII text with Huffman coding. The packed format
is headerless: decoding rebuilds the tree from the corpus the encoder
was trained on (tree construction is deterministic, so the rebuild is
bit-exact).

Examples:
  textpress encode notes.txt notes.tp
  textpress decode notes.tp recovered.txt --corpus notes.txt
  textpress table notes.txt
  textpress table notes.txt --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a text file
    #[command(alias = "e")]
    Encode {
        /// Text file to encode (also the tree-building corpus)
        input: PathBuf,

        /// Destination for the packed bytes
        output: PathBuf,
    },

    /// Decode a packed file
    #[command(alias = "d")]
    Decode {
        /// Packed file produced by encode
        encoded: PathBuf,

        /// Destination for the recovered text
        output: PathBuf,

        /// Corpus the encoding tree was built from
        #[arg(short, long)]
        corpus: PathBuf,
    },

    /// Print the code table a file would be encoded with
    #[command(alias = "t")]
    Table {
        /// Text file to analyze
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode { input, output } => cmd_encode(&input, &output),
        Commands::Decode {
            encoded,
            output,
            corpus,
        } => cmd_decode(&encoded, &output, &corpus),
        Commands::Table { input, json } => cmd_table(&input, json),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "textpress", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_encode(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let coder = HuffmanCoder::from_file(input)?;
    coder.encode_file(input, output)?;

    let original = fs::metadata(input)?.len();
    let packed = fs::metadata(output)?.len();
    let ratio = if original > 0 {
        packed as f64 / original as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "{} -> {} ({} -> {} bytes, {:.1}%)",
        input.display(),
        output.display(),
        original,
        packed,
        ratio
    );
    Ok(())
}

fn cmd_decode(encoded: &Path, output: &Path, corpus: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let coder = HuffmanCoder::from_file(corpus)?;
    coder.decode_file(encoded, output)?;

    println!(
        "{} -> {} (tree rebuilt from {})",
        encoded.display(),
        output.display(),
        corpus.display()
    );
    Ok(())
}

/// JSON serializable code-table entry.
#[derive(Debug, Serialize)]
struct CodeJson {
    symbol: u8,
    display: String,
    probability: f64,
    code: String,
    bits: usize,
}

/// JSON output for the table command.
#[derive(Debug, Serialize)]
struct TableJson {
    input: String,
    total_symbols: u64,
    distinct_symbols: usize,
    entries: Vec<CodeJson>,
}

fn cmd_table(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let coder = HuffmanCoder::from_file(input)?;

    let probability_of = |symbol: u8| {
        coder
            .frequency_table()
            .entries()
            .iter()
            .find(|e| e.symbol == symbol)
            .map_or(0.0, |e| e.probability)
    };

    if json {
        let entries: Vec<CodeJson> = coder
            .code_table()
            .iter()
            .map(|(symbol, code)| CodeJson {
                symbol,
                display: display_symbol(symbol),
                probability: probability_of(symbol),
                code: code.to_string(),
                bits: code.len(),
            })
            .collect();
        let output = TableJson {
            input: input.display().to_string(),
            total_symbols: coder.frequency_table().total_symbols(),
            distinct_symbols: entries.len(),
            entries,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Code table: {}", input.display());
    println!();
    println!("{:<8} {:>10}  Code", "Symbol", "Prob");
    for (symbol, code) in coder.code_table().iter() {
        println!(
            "{:<8} {:>10.4}  {}",
            display_symbol(symbol),
            probability_of(symbol),
            code
        );
    }
    Ok(())
}

/// Printable representation of an alphabet symbol.
fn display_symbol(symbol: u8) -> String {
    match symbol {
        b'\n' => "'\\n'".to_string(),
        b'\r' => "'\\r'".to_string(),
        b'\t' => "'\\t'".to_string(),
        b' ' => "' '".to_string(),
        s if s.is_ascii_graphic() => format!("'{}'", s as char),
        s => format!("{:#04x}", s),
    }
}
