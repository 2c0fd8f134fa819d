//! # Etiketa CLI
//!
//! Command-line interface for sticker barcode encoding.
//!
//! ## Usage
//!
//! ```bash
//! # Encode codes from a file into a render payload
//! etiketa encode codes.txt
//!
//! # Read codes from stdin, keep hyphens for the HF product line
//! cat codes.txt | etiketa encode --dash-prefix HF
//!
//! # Load dash-significant prefixes from a file, skip the column header
//! etiketa encode codes.txt --prefix-file prefixes.txt --skip-header
//!
//! # One symbol string per line instead of the JSON payload
//! etiketa encode codes.txt --format symbols
//!
//! # List available render templates
//! etiketa templates
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use etiketa::{
    EtiketaError, RenderRequest,
    classify::PrefixRegistry,
    input,
    sticker::{self, Batch},
    template::Template,
};

/// Etiketa - product sticker barcode utility
#[derive(Parser, Debug)]
#[command(name = "etiketa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode product codes into render-ready sticker records
    Encode {
        /// File with one product code per line (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Prefix whose hyphens are significant (repeatable)
        #[arg(long = "dash-prefix", value_name = "PREFIX")]
        dash_prefixes: Vec<String>,

        /// File with one dash-significant prefix per line
        #[arg(long, value_name = "FILE")]
        prefix_file: Option<PathBuf>,

        /// Render template the payload is destined for
        #[arg(long, default_value = "hofat-front")]
        template: String,

        /// Discard the first non-blank line (column header)
        #[arg(long)]
        skip_header: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "payload")]
        format: OutputFormat,

        /// Fail on the first code that does not encode
        #[arg(long)]
        strict: bool,
    },

    /// List the registered render templates
    Templates,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Compact render payload JSON
    Payload,
    /// Indented render payload JSON
    Pretty,
    /// One barcode symbol string per line
    Symbols,
    /// code, barcode and prefix as tab-separated columns
    Tsv,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EtiketaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            file,
            dash_prefixes,
            prefix_file,
            template,
            skip_header,
            format,
            strict,
        } => {
            let template = Template::by_id(&template)
                .ok_or_else(|| EtiketaError::UnknownTemplate(template.clone()))?;

            let mut entries = dash_prefixes;
            if let Some(path) = prefix_file {
                entries.extend(input::read_codes(File::open(path)?, false)?);
            }
            let registry = PrefixRegistry::new(entries);

            let codes = match file {
                Some(path) => input::read_codes(File::open(path)?, skip_header)?,
                None => input::read_codes(io::stdin().lock(), skip_header)?,
            };

            let Batch { stickers, rejected } = sticker::assemble(&codes, &registry);

            for rejection in &rejected {
                eprintln!(
                    "skipping {:?} (line {}): {}",
                    rejection.code, rejection.position, rejection.error
                );
            }
            if strict {
                if let Some(first) = rejected.into_iter().next() {
                    return Err(first.error);
                }
            }
            if stickers.is_empty() {
                return Err(EtiketaError::EmptyBatch);
            }

            match format {
                OutputFormat::Payload => {
                    eprintln!(
                        "{} sticker(s) for {}",
                        stickers.len(),
                        RenderRequest::document_name(template)
                    );
                    println!("{}", RenderRequest::new(stickers).to_json()?);
                }
                OutputFormat::Pretty => {
                    eprintln!(
                        "{} sticker(s) for {}",
                        stickers.len(),
                        RenderRequest::document_name(template)
                    );
                    println!("{}", RenderRequest::new(stickers).to_json_pretty()?);
                }
                OutputFormat::Symbols => {
                    for sticker in &stickers {
                        println!("{}", sticker.barcode);
                    }
                }
                OutputFormat::Tsv => {
                    for sticker in &stickers {
                        println!("{}\t{}\t{}", sticker.code, sticker.barcode, sticker.prefix);
                    }
                }
            }
        }

        Commands::Templates => {
            println!("Available templates:");
            for template in Template::all() {
                println!("  {:<20} {} ({})", template.id, template.name, template.image);
            }
        }
    }

    Ok(())
}
