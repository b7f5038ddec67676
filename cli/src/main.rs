//! outpdf CLI - extract document outlines from fragment dumps.
//!
//! Reads fragment-dump JSON files (per-page positioned text fragments, as
//! produced by an external extraction tool) and writes outline JSON:
//! `{"title": ..., "outline": [{"level", "text", "page"}, ...]}`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use outpdf::{ExtractOptions, MemorySource, Outline, OutlineExtractor};

#[derive(Parser)]
#[command(name = "outpdf")]
#[command(version)]
#[command(about = "Extract a document outline from a fragment dump", long_about = None)]
struct Cli {
    /// Input fragment dump (.json), or a directory of dumps
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file, or output directory when INPUT is a directory
    /// (stdout if not specified for a single file)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Vertical gap required below a heading, as a fraction of font size
    #[arg(long, default_value_t = 0.3)]
    gap_threshold: f32,

    /// Line-merge gap allowance, as a fraction of font size
    #[arg(long, default_value_t = 0.5)]
    line_merge_threshold: f32,

    /// Tolerance when clustering heading sizes into levels, in points
    #[arg(long, default_value_t = 1.5)]
    level_tolerance: f32,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let options = ExtractOptions::new()
        .with_gap_threshold(cli.gap_threshold)
        .with_line_merge_threshold(cli.line_merge_threshold)
        .with_level_tolerance(cli.level_tolerance);

    let result = if cli.input.is_dir() {
        run_batch(&cli.input, cli.output.as_deref(), options, cli.compact)
    } else {
        run_single(&cli.input, cli.output.as_deref(), options, cli.compact)
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_single(
    input: &Path,
    output: Option<&Path>,
    options: ExtractOptions,
    compact: bool,
) -> outpdf::Result<()> {
    let extractor = OutlineExtractor::with_options(options);
    let outline = extract_one(&extractor, input)?;
    let json = to_json(&outline, compact)?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!(
                "{} {} ({} headings)",
                "Saved".green(),
                path.display(),
                outline.len()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_batch(
    input_dir: &Path,
    output_dir: Option<&Path>,
    options: ExtractOptions,
    compact: bool,
) -> outpdf::Result<()> {
    let output_dir = output_dir.unwrap_or(input_dir);
    fs::create_dir_all(output_dir)?;

    let mut dumps: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension().is_some_and(|ext| ext == "json")
                && !p
                    .file_name()
                    .is_some_and(|n| n.to_string_lossy().ends_with(".outline.json"))
        })
        .collect();
    dumps.sort();

    if dumps.is_empty() {
        println!("{}", "No fragment dumps (*.json) found".yellow());
        return Ok(());
    }

    let extractor = OutlineExtractor::with_options(options);
    let bar = ProgressBar::new(dumps.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("invalid progress template"),
    );

    let start = Instant::now();
    let mut processed = 0usize;

    for dump in &dumps {
        let name = dump
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        bar.set_message(name.clone());

        match extract_one(&extractor, dump) {
            Ok(outline) => {
                let stem = dump
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let out_path = output_dir.join(format!("{stem}.outline.json"));
                fs::write(&out_path, to_json(&outline, compact)?)?;
                processed += 1;
            }
            Err(e) => {
                // One bad document never aborts the batch
                log::error!("failed to process {name}: {e}");
                bar.println(format!("{} {name}: {e}", "Failed".red()));
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!(
        "{} {}/{} documents in {:.2}s -> {}",
        "Processed".green(),
        processed,
        dumps.len(),
        start.elapsed().as_secs_f64(),
        output_dir.display()
    );
    Ok(())
}

fn extract_one(extractor: &OutlineExtractor, path: &Path) -> outpdf::Result<Outline> {
    let start = Instant::now();
    let data = fs::read(path)?;
    let mut source = MemorySource::from_json_slice(&data)?;

    let doc_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let outline = extractor.extract(&mut source, &doc_name);

    log::info!(
        "{doc_name}: {} headings in {:.2}s",
        outline.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(outline)
}

fn to_json(outline: &Outline, compact: bool) -> outpdf::Result<String> {
    let json = if compact {
        serde_json::to_string(outline)?
    } else {
        serde_json::to_string_pretty(outline)?
    };
    Ok(json)
}
