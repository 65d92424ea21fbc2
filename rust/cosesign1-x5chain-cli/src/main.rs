// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Prints the SHA-256 thumbprints of the certificate chain (`x5chain`)
//! carried in a COSE_Sign1 envelope, leaf first, as a JSON array.
//!
//! ```text
//! cert-chain-thumbprint -f ./cose_signature_envelope.sig
//! cert-chain-thumbprint --file_path ./cose_signature_envelope.sig
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use cosesign1_x5chain::{cert_chain_thumbprints_from_file, DecodeOptions, TagPolicy, DEFAULT_MAX_ENVELOPE_LEN};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "cert-chain-thumbprint")]
#[command(about = "Print SHA-256 thumbprints of the x5chain in a COSE_Sign1 envelope", long_about = None)]
#[command(version)]
struct Cli {
    /// File path of a single COSE signature envelope
    #[arg(short = 'f', long = "file_path", value_name = "file_path")]
    file_path: PathBuf,

    /// Reject envelopes without the COSE_Sign1 tag (18)
    #[arg(long)]
    require_tag: bool,

    /// Accept an x5chain holding a single certificate bstr instead of an array
    #[arg(long)]
    allow_single_certificate: bool,

    /// Largest envelope accepted, in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_ENVELOPE_LEN)]
    max_size: usize,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            tag_policy: if self.require_tag {
                TagPolicy::Required
            } else {
                TagPolicy::Optional
            },
            allow_single_certificate: self.allow_single_certificate,
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let thumbprints = cert_chain_thumbprints_from_file(&cli.file_path, cli.max_size, &cli.decode_options())
        .with_context(|| format!("failed to extract x5chain thumbprints from {}", cli.file_path.display()))?;
    tracing::info!(certificates = thumbprints.len(), "computed thumbprints");

    serde_json::to_string(&thumbprints).context("failed to serialize thumbprints")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
