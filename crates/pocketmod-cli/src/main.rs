mod logger;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;
use log::LevelFilter;
use logger::ConsoleLogger;
use pocketmod::constants::pt_to_mm;
use pocketmod::{MarginSetting, PocketModOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pocketmod",
    about = "Convert the first eight pages of a PDF into a foldable PocketMod sheet",
    after_help = "Example: pocketmod input.pdf -o booklet.pdf --print-margin 3",
    version
)]
struct Cli {
    /// Input PDF file to convert
    input: PathBuf,

    /// Output PDF file (default: neo_pocketmod_<timestamp>.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target print margin in millimeters (approximate, default: ~3mm)
    #[arg(long, value_name = "MM")]
    print_margin: Option<f32>,

    /// Direct margin factor control (default: 1.020, lower = more margin)
    #[arg(long, value_name = "FACTOR")]
    margin_factor: Option<f32>,

    /// Draw dashed fold lines
    #[arg(long)]
    fold_lines: bool,

    /// Draw the centre cut line
    #[arg(long)]
    cut_line: bool,

    /// Load options from a JSON file (command-line flags take precedence)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show per-slot placement details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Info
        }
    }

    /// Merge command-line flags over the base options
    fn apply_to(&self, mut options: PocketModOptions) -> PocketModOptions {
        if self.margin_factor.is_some() || self.print_margin.is_some() {
            options.margin = MarginSetting {
                margin_factor: self.margin_factor,
                print_margin_mm: self.print_margin,
            };
        }
        options.marks.fold_lines |= self.fold_lines;
        options.marks.cut_line |= self.cut_line;
        options
    }
}

/// Default output file name for a run started at `now`
fn default_output_name(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("neo_pocketmod_{}.pdf", now.format("%Y%m%d%H%M%S")))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ConsoleLogger::new(cli.log_level())
        .init()
        .context("Failed to initialise logging")?;

    let base = match &cli.config {
        Some(path) => PocketModOptions::load(path)?,
        None => PocketModOptions::default(),
    };
    let options = cli.apply_to(base);
    options.validate()?;

    let source = pocketmod::load_source(&cli.input)?;
    if !cli.quiet {
        println!(
            "Input: {} ({} pages)",
            cli.input.display(),
            source.page_count()
        );
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_name(Local::now()));

    if !cli.quiet {
        if let Some(factor) = cli.margin_factor {
            println!("Using custom margin factor: {}", factor);
        } else if let Some(mm) = cli.print_margin {
            println!(
                "Target margin: {}mm → margin factor: {:.3}",
                mm,
                options.margin_factor()
            );
        }
    }

    let mut pocketmod = pocketmod::create_pocketmod(&source, &options)?;
    drop(source);
    pocketmod::save_pdf(&mut pocketmod.document, &output)?;

    if !cli.quiet {
        let stats = pocketmod::summarize(&pocketmod.layout);
        println!("PocketMod Statistics:");
        println!("  Source pages: {}", stats.source_pages);
        println!("  Pages placed: {}", stats.pages_used);
        println!("  Blank slots: {}", stats.blank_slots);
        if stats.ignored_pages > 0 {
            println!("  Pages ignored: {}", stats.ignored_pages);
        }
        println!("  Scale factor: {:.3}", stats.scale);
        if let Some((width, height)) = stats.scaled_size() {
            println!(
                "  Placed page size: {:.1} × {:.1} mm",
                pt_to_mm(width),
                pt_to_mm(height)
            );
        }
        println!();
        println!("PocketMod created → {}", output.display());
        println!("Print on Letter size paper (8.5\" × 11\") in landscape orientation, then fold.");
    }

    Ok(())
}
