//! versealign - Verse word alignment tool

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use versealign::markup::{UsfmWriter, WriterConfig, parse_verse};
use versealign::morph::decode_morph_code;
use versealign::{
    AlignmentData, MergeConfig, Merger, VerseData, get_blank_alignment_data_for_verse, unmerge,
    verse_objects_from_json,
};

#[derive(Parser)]
#[command(name = "versealign")]
#[command(version, about = "Verse word alignment tool", long_about = None)]
#[command(after_help = "EXAMPLES:
    versealign merge alignment.json verse.txt       Build aligned verse objects
    versealign unmerge aligned.json -r ugnt.json    Recover alignments and word bank
    versealign export aligned.json                  Write aligned verse as USFM
    versealign morph Gr,N,,,,,GMS,                  Decode a morphology code

Use - to read an input from stdin.")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Merge alignment data into verse text
    Merge {
        /// Alignment data JSON ({alignments, wordBank})
        alignments: String,
        /// Target-language verse text
        verse: String,
        /// Return the parsed verse instead of null when blank data no longer matches
        #[arg(long)]
        use_verse_text: bool,
        /// Write USFM instead of JSON
        #[arg(long)]
        usfm: bool,
    },
    /// Split aligned verse objects into alignments and a word bank
    Unmerge {
        /// Aligned verse objects JSON
        verse: String,
        /// Original-language verse used for ordering (text or verse-object JSON)
        #[arg(short, long)]
        reference: String,
    },
    /// Generate blank alignment data for an unaligned verse
    Blank {
        /// Original-language verse objects JSON
        source: String,
        /// Target-language verse text
        target: String,
    },
    /// Parse a USFM verse fragment into verse objects
    Parse {
        /// USFM input
        input: String,
    },
    /// Write verse objects as a USFM verse fragment
    Export {
        /// Verse objects JSON
        input: String,
        /// Start each word and milestone on a new line
        #[arg(long)]
        forced_new_lines: bool,
    },
    /// Decode morphology codes into localization keys
    Morph {
        /// Codes such as Gr,N,,,,,GMS, or He,Vqp3fs
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> versealign::Result<()> {
    match &cli.command {
        Command::Merge {
            alignments,
            verse,
            use_verse_text,
            usfm,
        } => {
            let data: AlignmentData = serde_json::from_str(&read_input(alignments)?)?;
            let text = read_input(verse)?;
            let merger = Merger::new().with_config(MergeConfig {
                use_verse_text: *use_verse_text,
            });
            let merged = merger.merge(&data.alignments, &data.word_bank, text.trim_end_matches('\n'))?;
            match merged {
                Some(objects) if *usfm => write_usfm(&UsfmWriter::new(), &objects),
                merged => print_json(&merged, cli.pretty),
            }
        }
        Command::Unmerge { verse, reference } => {
            let objects = verse_objects_from_json(&read_input(verse)?)?;
            let reference = read_input(reference)?;
            let trimmed = reference.trim();
            let result = if trimmed.starts_with('[') || trimmed.starts_with('{') {
                let reference_objects = verse_objects_from_json(trimmed)?;
                unmerge(&objects, &reference_objects)
            } else {
                unmerge(&objects, VerseData::Text(trimmed))
            };
            print_json(&result, cli.pretty)
        }
        Command::Blank { source, target } => {
            let source = verse_objects_from_json(&read_input(source)?)?;
            let target = read_input(target)?;
            let data = get_blank_alignment_data_for_verse(&source, target.trim());
            print_json(&data, cli.pretty)
        }
        Command::Parse { input } => {
            let objects = parse_verse(&read_input(input)?);
            print_json(&objects, cli.pretty)
        }
        Command::Export {
            input,
            forced_new_lines,
        } => {
            let objects = verse_objects_from_json(&read_input(input)?)?;
            let writer = UsfmWriter::new().with_config(WriterConfig {
                forced_new_lines: *forced_new_lines,
            });
            write_usfm(&writer, &objects)
        }
        Command::Morph { codes } => {
            let decoded: Vec<Vec<String>> = codes.iter().map(|c| decode_morph_code(c)).collect();
            print_json(&decoded, cli.pretty)
        }
    }
}

/// Read a file, or stdin for `-`.
fn read_input(path: &str) -> versealign::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(fs::read_to_string(path)?)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> versealign::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn write_usfm(writer: &UsfmWriter, objects: &[versealign::VerseObject]) -> versealign::Result<()> {
    let mut stdout = io::stdout().lock();
    writer.write(objects, &mut stdout)?;
    writeln!(stdout)?;
    Ok(())
}
