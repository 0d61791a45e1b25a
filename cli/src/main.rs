//! mdfront CLI - Markdown metadata table to front matter converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdfront::{
    convert_file, list_documents, ConvertOptions, ConvertReport, ExtractOptions, FileOutcome,
    HeaderExtractor, LabelMap,
};

#[derive(Parser)]
#[command(name = "mdfront")]
#[command(version)]
#[command(about = "Convert Markdown metadata tables to YAML front matter", long_about = None)]
struct Cli {
    /// Directory of Markdown files to convert
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Report changes without writing files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert all Markdown files in a directory
    Convert {
        /// Directory of Markdown files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Report changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// File extensions to process
        #[arg(long, value_name = "EXT", default_values = ["md"])]
        ext: Vec<String>,

        /// Use English field labels instead of the default Chinese set
        #[arg(long)]
        english: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which files would change, without writing anything
    Check {
        /// Directory of Markdown files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Use English field labels instead of the default Chinese set
        #[arg(long)]
        english: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Transform a single file
    File {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (rewrites the input in place if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the transformed document to stdout instead of writing
        #[arg(long)]
        stdout: bool,

        /// Use English field labels instead of the default Chinese set
        #[arg(long)]
        english: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            dir,
            dry_run,
            ext,
            english,
            json,
        }) => cmd_convert(&dir, dry_run, ext, english, json),
        Some(Commands::Check { dir, english, json }) => {
            cmd_convert(&dir, true, vec!["md".to_string()], english, json)
        }
        Some(Commands::File {
            input,
            output,
            stdout,
            english,
        }) => cmd_file(&input, output.as_deref(), stdout, english),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if a directory is provided
            if let Some(dir) = cli.dir {
                cmd_convert(&dir, cli.dry_run, vec!["md".to_string()], false, false)
            } else {
                println!("{}", "Usage: mdfront <DIR>".yellow());
                println!("       mdfront --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_extract_options(english: bool) -> ExtractOptions {
    if english {
        ExtractOptions::new().with_labels(LabelMap::english())
    } else {
        ExtractOptions::new()
    }
}

fn cmd_convert(
    dir: &Path,
    dry_run: bool,
    ext: Vec<String>,
    english: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConvertOptions::new()
        .with_extract_options(build_extract_options(english))
        .with_extensions(ext)
        .with_dry_run(dry_run);

    let documents = list_documents(dir, &options)?;

    if documents.is_empty() {
        println!("{} {}", "No Markdown files found in".yellow(), dir.display());
        return Ok(());
    }

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut report = ConvertReport::default();
    for path in documents {
        pb.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        match convert_file(&path, &options) {
            Ok(outcome) => report.record(&path, outcome),
            Err(err) => {
                log::warn!("failed to process {}: {err}", path.display());
                report.record(&path, FileOutcome::Failed(err.to_string()));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for file in &report.files {
        match &file.outcome {
            FileOutcome::Converted => {
                let verb = if dry_run { "would convert" } else { "converted" };
                println!("{} {}", verb.green(), file.path.display());
            }
            FileOutcome::Unchanged => {
                println!("{} {}", "unchanged".dimmed(), file.path.display());
            }
            FileOutcome::Failed(reason) => {
                println!(
                    "{} {} ({})",
                    "failed".red(),
                    file.path.display(),
                    reason
                );
            }
        }
    }

    println!();
    println!(
        "{} {} converted, {} unchanged, {} failed",
        "Done!".green().bold(),
        report.converted(),
        report.unchanged(),
        report.failed()
    );

    Ok(())
}

fn cmd_file(
    input: &Path,
    output: Option<&Path>,
    stdout: bool,
    english: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");

    let extractor = HeaderExtractor::new(build_extract_options(english));
    let converted = extractor.transform_named(&content, stem);

    if stdout {
        println!("{}", converted);
        return Ok(());
    }

    let target = output.unwrap_or(input);
    if converted == content && target == input {
        println!("{} {}", "unchanged".dimmed(), input.display());
        return Ok(());
    }

    fs::write(target, &converted)?;
    println!("{} {}", "Saved to".green(), target.display());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdfront".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown metadata table to front matter converter");
}
