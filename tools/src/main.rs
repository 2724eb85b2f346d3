use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{CodecLimits, Side, MAX_MSGLEN};
use jkanet_tools::{collect_packet_paths, decode_entities, inspect_packet, table_reports};
use serde::Serialize;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(
    name = "jkanet-tools",
    version,
    about = "jkanet inspection and debugging tools"
)]
struct Cli {
    /// Log decoding details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Huffman-compress a file with a length prefix.
    Compress {
        input: PathBuf,
        /// Output path; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decompress a length-prefixed Huffman buffer.
    Decompress {
        input: PathBuf,
        /// Output path; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Upper bound on the decompressed size.
        #[arg(long, default_value_t = MAX_MSGLEN)]
        max_len: usize,
    },
    /// Report framing and preamble of captured datagrams.
    Inspect {
        /// A datagram file, or a directory of them.
        path: PathBuf,
        /// The side that received the datagrams.
        #[arg(long, value_enum)]
        side: SideArg,
        /// Connection challenge used to de-obfuscate the body.
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        challenge: i32,
        /// Glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
    },
    /// Decode a run of entity deltas from a de-obfuscated message body.
    Entities { input: PathBuf },
    /// Print every field table with its fingerprint.
    Tables,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SideArg {
    Client,
    Server,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Client => Self::Client,
            SideArg::Server => Self::Server,
        }
    }
}

#[derive(Serialize)]
struct NamedReport {
    path: String,
    #[serde(flatten)]
    report: jkanet_tools::InspectReport,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_writer(io::stderr)
            .init();
    }

    match cli.command {
        Command::Compress { input, output } => {
            let bytes = read_file(&input)?;
            let compressed = huffman::compress(&bytes);
            debug!(input = bytes.len(), output = compressed.len(), "compressed");
            write_output(output.as_deref(), &compressed)?;
        }
        Command::Decompress {
            input,
            output,
            max_len,
        } => {
            let bytes = read_file(&input)?;
            let decompressed = huffman::decompress(&bytes, max_len);
            debug!(
                input = bytes.len(),
                output = decompressed.len(),
                "decompressed"
            );
            write_output(output.as_deref(), &decompressed)?;
        }
        Command::Inspect {
            path,
            side,
            challenge,
            glob,
        } => {
            let paths = if path.is_dir() {
                collect_packet_paths(&path, glob.as_deref())?
            } else {
                vec![path]
            };
            let mut reports = Vec::with_capacity(paths.len());
            for path in paths {
                let bytes = read_file(&path)?;
                let report = inspect_packet(
                    &bytes,
                    side.into(),
                    challenge,
                    &wire::Limits::default(),
                    &CodecLimits::default(),
                )
                .with_context(|| format!("inspect {}", path.display()))?;
                reports.push(NamedReport {
                    path: path.display().to_string(),
                    report,
                });
            }
            print_json(&reports)?;
        }
        Command::Entities { input } => {
            let bytes = read_file(&input)?;
            print_json(&decode_entities(&bytes))?;
        }
        Command::Tables => print_json(&table_reports())?,
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => fs::write(path, bytes).with_context(|| format!("write {}", path.display())),
        None => io::stdout().write_all(bytes).context("write stdout"),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{json}");
    Ok(())
}
