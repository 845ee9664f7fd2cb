//! strata CLI - document outline inference tool
//!
//! Consumes JSON fragment dumps produced by an upstream layout
//! extractor and emits one outline record per document.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use strata::{
    batch::{run_batch, BatchJob, JsonFileSink},
    output, FeatureExtractor, FragmentSource, InferConfig, JsonFormat, JsonFragmentSource,
};

#[derive(Parser)]
#[command(name = "strata")]
#[command(version)]
#[command(about = "Infer document outlines from styled text fragments", long_about = None)]
struct Cli {
    /// Input fragment dump (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer the outline of a single document
    Outline {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Heading-candidate score threshold
        #[arg(long, env = "STRATA_THRESHOLD")]
        threshold: Option<f32>,
    },

    /// Process a directory of fragment dumps
    Batch {
        /// Directory containing .json fragment dumps
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory (defaults to <DIR>/outlines)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Heading-candidate score threshold
        #[arg(long, env = "STRATA_THRESHOLD")]
        threshold: Option<f32>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Outline {
            input,
            output,
            compact,
            threshold,
        }) => cmd_outline(&input, output.as_deref(), compact, threshold),
        Some(Commands::Batch {
            input,
            output,
            compact,
            threshold,
        }) => cmd_batch(&input, output.as_deref(), compact, threshold),
        Some(Commands::Version) => {
            println!("strata {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_outline(&input, cli.output.as_deref(), false, None)
            } else {
                println!("{}", "Usage: strata <FILE> [OUTPUT]".yellow());
                println!("       strata --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_config(threshold: Option<f32>) -> InferConfig {
    let mut config = InferConfig::default();
    if let Some(t) = threshold {
        config = config.with_score_threshold(t);
    }
    config
}

fn document_id(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    threshold: Option<f32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(threshold);
    let extractor = FeatureExtractor::new(&config);

    let file = File::open(input)?;
    let source = JsonFragmentSource::from_reader(document_id(input), BufReader::new(file), &extractor)?;
    let fragments = source.fragments()?;
    let outline = strata::infer_outline_with_config(&fragments, &config);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = output::to_json(&outline, format)?;

    if let Some(path) = output {
        fs::write(path, format!("{}\n", json))?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    input_dir: &Path,
    output_dir: Option<&Path>,
    compact: bool,
    threshold: Option<f32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(threshold);
    let extractor = FeatureExtractor::new(&config);

    let output_dir = output_dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input_dir.join("outlines"));
    fs::create_dir_all(&output_dir)?;

    let mut dumps: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    dumps.sort();

    if dumps.is_empty() {
        println!("{}", "No fragment dumps found.".yellow());
        return Ok(());
    }

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let pb = ProgressBar::new(dumps.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Reading a dump can fail independently of inference; count both
    // kinds of failure in the same summary.
    let mut unreadable = 0usize;
    let mut jobs: Vec<BatchJob> = Vec::with_capacity(dumps.len());
    for path in &dumps {
        pb.set_message(format!("reading {}", path.display()));
        let id = document_id(path);
        let source = File::open(path)
            .map_err(strata::Error::from)
            .and_then(|f| JsonFragmentSource::from_reader(&id, BufReader::new(f), &extractor));
        match source {
            Ok(source) => {
                let out_path = output_dir.join(format!("{}.outline.json", id));
                jobs.push(BatchJob::new(
                    Box::new(source),
                    Box::new(JsonFileSink::new(out_path, format)),
                ));
            }
            Err(e) => {
                log::warn!("{}: skipped: {}", id, e);
                unreadable += 1;
            }
        }
        pb.inc(1);
    }

    pb.set_message("inferring outlines");
    let summary = run_batch(&jobs, &config);
    pb.finish_with_message("done");

    let failed = summary.failed + unreadable;
    println!(
        "\n{} {} processed, {} failed",
        "Batch complete:".green().bold(),
        summary.processed,
        failed
    );
    println!("  {} {}", "Output:".dimmed(), output_dir.display());

    if failed > 0 && summary.processed == 0 {
        return Err("all documents in the batch failed".into());
    }

    Ok(())
}
