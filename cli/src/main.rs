//! linkedin-pdf-to-json CLI - LinkedIn profile chunk to JSON converter

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use linkedin_pdf_to_json::{Locale, LocaleRegistry, ProfileExtractor, Section, DEFAULT_INDENT};

#[derive(Parser)]
#[command(name = "linkedin-pdf-to-json")]
#[command(version)]
#[command(about = "Convert LinkedIn profile PDF chunks to JSON", long_about = None)]
struct Cli {
    /// Chunk file extracted from a LinkedIn profile PDF
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Output JSON file (stdout if not specified)
    #[arg(value_name = "TARGET", value_parser = parse_target)]
    target: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single profile (same as running without a subcommand)
    Convert {
        /// Chunk file extracted from a LinkedIn profile PDF
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Output JSON file (stdout if not specified)
        #[arg(value_name = "TARGET", value_parser = parse_target)]
        target: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert many profiles in parallel
    Batch {
        /// Chunk files to convert
        #[arg(value_name = "SOURCES", required = true)]
        sources: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output_dir: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List bundled locales
    Locales {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Options shared by every converting command.
#[derive(Args, Clone, Debug)]
struct OutputArgs {
    /// Indentation width of the JSON output
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_INDENT)]
    space: usize,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Profile language (en, pt, es)
    #[arg(short, long, value_name = "TAG", env = "LINKEDIN_PDF_LOCALE", default_value = "en")]
    locale: String,

    /// Load the locale from a JSON file instead
    #[arg(long, value_name = "FILE")]
    locale_file: Option<PathBuf>,

    /// Keep localized dates and durations as printed
    #[arg(long)]
    keep_vocabulary: bool,

    /// Vertical gap that separates paragraphs
    #[arg(long, value_name = "GAP")]
    newline_gap: Option<f64>,
}

impl OutputArgs {
    fn extractor(&self) -> Result<ProfileExtractor, Box<dyn std::error::Error>> {
        let mut extractor = match &self.locale_file {
            Some(path) => ProfileExtractor::new().with_locale(Locale::from_path(path)?),
            None => ProfileExtractor::new().with_locale_tag(self.locale.as_str()),
        };

        extractor = if self.compact {
            extractor.compact()
        } else {
            extractor.with_indent(self.space)
        };
        if self.keep_vocabulary {
            extractor = extractor.keep_vocabulary();
        }
        if let Some(gap) = self.newline_gap {
            extractor = extractor.with_newline_gap(gap);
        }
        Ok(extractor)
    }
}

fn parse_target(value: &str) -> Result<PathBuf, String> {
    if value.ends_with(".json") {
        Ok(PathBuf::from(value))
    } else {
        Err(format!("target must be a .json file, got '{}'", value))
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            source,
            target,
            output,
        }) => cmd_convert(&source, target.as_deref(), &output),
        Some(Commands::Batch {
            sources,
            output_dir,
            output,
        }) => cmd_batch(&sources, &output_dir, &output),
        Some(Commands::Locales { json }) => cmd_locales(json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(source) = cli.source {
                cmd_convert(&source, cli.target.as_deref(), &cli.output)
            } else {
                println!(
                    "{}",
                    "Usage: linkedin-pdf-to-json <SOURCE> [TARGET]".yellow()
                );
                println!("       linkedin-pdf-to-json --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e.to_string().red());
        std::process::exit(1);
    }
}

fn cmd_convert(
    source: &Path,
    target: Option<&Path>,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = output.extractor()?.parse(source)?;

    if let Some(path) = target {
        result.write_json(path)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", result.to_json()?);
    }

    Ok(())
}

fn cmd_batch(
    sources: &[PathBuf],
    output_dir: &Path,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = output.extractor()?;
    fs::create_dir_all(output_dir)?;
    log::debug!("Writing {} profiles to {}", sources.len(), output_dir.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Converting {} profiles...", sources.len()));

    let results = extractor.convert_many(sources, output_dir)?;
    pb.finish_with_message("Done!");

    let mut failed = 0;
    println!("\n{}", "Output files:".green().bold());
    for (i, (source, result)) in sources.iter().zip(&results).enumerate() {
        let branch = if i + 1 == results.len() { "└─" } else { "├─" };
        match result {
            Ok(path) => println!("  {} {}", branch.dimmed(), path.display()),
            Err(e) => {
                failed += 1;
                println!(
                    "  {} {} {}",
                    branch.dimmed(),
                    source.display(),
                    e.to_string().red()
                );
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} profiles failed", failed, sources.len()).into());
    }
    Ok(())
}

fn cmd_locales(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = LocaleRegistry::with_defaults()?;
    let tags = registry.tags();

    if json {
        println!("{}", serde_json::to_string(&tags)?);
        return Ok(());
    }

    println!("{}", "Bundled locales".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for tag in tags {
        let locale = registry.get(tag)?;
        let experience = locale.header_label(Section::Experience).unwrap_or_default();
        println!("{:<4} {}", tag.bold(), experience.dimmed());
    }
    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "linkedin-pdf-to-json".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("LinkedIn profile PDF to JSON converter");
    println!();
    println!("License: MIT");
}
