//! CLI entry point for circscore.
//!
//! Every subcommand is a whole-file batch transform: the annotation stream is
//! decoded and grouped in memory, and the output file is only created once the
//! pipeline has succeeded.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn, Level};
use simple_logger::init_with_level;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use circscore::config::{Config, DEFAULT_CHILD_FEATURE, DEFAULT_PARENT_FEATURE};
use circscore::output::{write_groups, write_signatures};
use circscore::parser::{read_records, ScoreTable};
use circscore::pipeline::{build_groups, filter_groups, inject_scores};
use circscore::types::Group;

/// Group circRNA annotation records with their exons, join them to
/// external scores, and filter them by score.
#[derive(Parser, Debug)]
#[command(name = "circscore")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Feature type that opens a group
    #[arg(long = "parent-feature", global = true, default_value = DEFAULT_PARENT_FEATURE)]
    parent_feature: String,

    /// Feature type attached to the preceding parent
    #[arg(long = "child-feature", global = true, default_value = DEFAULT_CHILD_FEATURE)]
    child_feature: String,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write scores from a signature table onto each circRNA and its exons
    Inject {
        /// Annotation file (tab-separated, 9 columns; .gz supported)
        #[arg(short = 'i', long = "input")]
        input: PathBuf,

        /// Score table (CSV with header: circRNA_id,score)
        #[arg(short = 's', long = "scores")]
        scores: PathBuf,

        /// Output annotation file
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },

    /// Keep circRNAs whose score is strictly above a threshold
    Filter {
        /// Annotation file (tab-separated, 9 columns; .gz supported)
        #[arg(short = 'i', long = "input")]
        input: PathBuf,

        /// Output annotation file
        #[arg(short = 'o', long = "output")]
        output: PathBuf,

        /// Minimum circRNA score (exclusive)
        #[arg(short = 'm', long = "min-score", visible_alias = "min-coverage")]
        min_score: f64,
    },

    /// List the coordinate signature of every circRNA group
    Signatures {
        /// Annotation file (tab-separated, 9 columns; .gz supported)
        #[arg(short = 'i', long = "input")]
        input: PathBuf,

        /// Output CSV file
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Args::parse();

    let level = if args.quiet { Level::Warn } else { Level::Info };
    init_with_level(level).context("Failed to initialise logger")?;

    let config = Config {
        parent_feature: args.parent_feature.clone(),
        child_feature: args.child_feature.clone(),
        ..Config::default()
    };
    if let Err(msg) = config.validate() {
        bail!("{}", msg);
    }

    match &args.command {
        Command::Inject {
            input,
            scores,
            output,
        } => run_inject(input, scores, output, &config)?,
        Command::Filter {
            input,
            output,
            min_score,
        } => run_filter(input, output, *min_score, &config)?,
        Command::Signatures { input, output } => run_signatures(input, output, &config)?,
    }

    info!("Elapsed time: {:?}", start.elapsed());
    Ok(())
}

/// Score-join pipeline.
fn run_inject(input: &Path, scores: &Path, output: &Path, config: &Config) -> Result<()> {
    if !scores.exists() {
        bail!("Score table not found: {}", scores.display());
    }
    let mut groups = load_groups(input, config)?;

    info!("Reading score table: {}", scores.display());
    let table = ScoreTable::from_path(scores, config)
        .with_context(|| format!("Failed to load score table {}", scores.display()))?;
    info!("Loaded {} signatures", table.len());
    if table.duplicates() > 0 {
        warn!(
            "{} duplicate signatures in score table; possible coordinate collision",
            table.duplicates()
        );
    }

    inject_scores(&mut groups, &table).context("Score injection failed")?;

    let lines = write_output(output, |w| Ok(write_groups(w, &groups)?))?;
    info!("Wrote {} lines to {}", lines, output.display());
    Ok(())
}

/// Threshold-filter pipeline.
fn run_filter(input: &Path, output: &Path, min_score: f64, config: &Config) -> Result<()> {
    if min_score.is_nan() {
        bail!("The minimum score must be a number.");
    }
    let groups = load_groups(input, config)?;
    let total = groups.len();

    let kept = filter_groups(groups, min_score).context("Filtering failed")?;
    info!(
        "Kept {} of {} groups with score > {}",
        kept.len(),
        total,
        min_score
    );

    let lines = write_output(output, |w| Ok(write_groups(w, &kept)?))?;
    info!("Wrote {} lines to {}", lines, output.display());
    Ok(())
}

/// Signature listing.
fn run_signatures(input: &Path, output: &Path, config: &Config) -> Result<()> {
    let groups = load_groups(input, config)?;

    // Render in memory first so a bad coordinate leaves no output file.
    let mut buffer = Vec::new();
    write_signatures(&mut buffer, &groups).context("Failed to build signatures")?;

    let count = write_output(output, |w| {
        w.write_all(&buffer)?;
        Ok(groups.len())
    })?;
    info!("Wrote {} signatures to {}", count, output.display());
    Ok(())
}

/// Decode and group an annotation file.
fn load_groups(input: &Path, config: &Config) -> Result<Vec<Group>> {
    if !input.exists() {
        bail!("Annotation file not found: {}", input.display());
    }

    info!("Reading annotation file: {}", input.display());
    let records = read_records(input)
        .with_context(|| format!("Failed to read annotation file {}", input.display()))?;
    info!("Input records: {}", records.len());

    let groups = build_groups(records, config).context("Grouping failed")?;
    info!("Groups: {}", groups.len());
    Ok(groups)
}

/// Create the output file and hand a buffered writer to `write`.
fn write_output<F>(path: &Path, write: F) -> Result<usize>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<usize>,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let written = write(&mut writer)?;
    writer.flush()?;
    Ok(written)
}
