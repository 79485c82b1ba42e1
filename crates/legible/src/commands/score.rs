//! Score command: every readability metric plus reading ages for one file.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use legible_core::age::AgeScale;
use legible_core::config::Config;
use legible_core::readability::{self, ReadabilityReport, SmogMethod};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::read_input_file;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Minimum acceptable Flesch Reading Ease.
    #[arg(long, allow_negative_numbers = true)]
    pub min_ease: Option<f64>,

    /// Maximum acceptable reading age in years.
    #[arg(long)]
    pub max_age: Option<f64>,

    /// Apply Gunning's complex-word exclusions to the fog index.
    #[arg(long)]
    pub strict_fog: bool,

    /// Use McLaughlin's 30-sentence sample for SMOG when the text is long enough.
    #[arg(long)]
    pub smog_sampled: bool,
}

/// Score a file and enforce the configured thresholds.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        min_ease = ?args.min_ease,
        max_age = ?args.max_age,
        strict_fog = args.strict_fog,
        smog_sampled = args.smog_sampled,
        "executing score command"
    );

    let content = read_input_file(&args.file, max_input_bytes)?;

    let mut options = config
        .readability_options()
        .context("invalid pronunciation overrides")?;
    options.strip_markdown = args.file.extension() == Some("md");
    options.strict_fog |= args.strict_fog;
    options.smog_sampled |= args.smog_sampled;
    options.min_reading_ease = args.min_ease.or(options.min_reading_ease);
    options.max_reading_age = args.max_age.or(options.max_reading_age);

    let report = readability::check_readability(&content, &options)
        .with_context(|| format!("failed to score {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report);
    }

    let failures = gate_failures(&report);
    if !failures.is_empty() {
        bail!(
            "{} {}. Shorten sentences or use plainer words.",
            args.file,
            failures.join("; ")
        );
    }
    if !global_json && (report.min_reading_ease.is_some() || report.max_reading_age.is_some()) {
        println!("{} {} meets every threshold", "PASS:".green(), args.file);
    }

    Ok(())
}

fn gate_failures(report: &ReadabilityReport) -> Vec<String> {
    let mut failures = Vec::new();
    if let (true, Some(min)) = (report.below_min_ease, report.min_reading_ease) {
        failures.push(format!(
            "has reading ease {:.1} (min: {min:.0})",
            report.scores.fres
        ));
    }
    if let (true, Some(max)) = (report.over_max_age, report.max_reading_age) {
        match report.reading_age {
            Some(age) if age > max => {
                failures.push(format!("needs reading age {age:.1} (max: {max:.0})"));
            }
            _ => failures.push(format!("is harder than every reading age scale (max: {max:.0})")),
        }
    }
    failures
}

fn print_report(file: &Utf8Path, report: &ReadabilityReport) {
    let counts = &report.counts;
    println!(
        "{}: {} sentences, {} words, {} syllables",
        file.bold(),
        counts.sentences,
        counts.words,
        counts.syllables
    );

    let age_cell = |scale: AgeScale| match report.ages.get(scale) {
        Some(age) => format!("age {age:.1}"),
        None => "out of range".yellow().to_string(),
    };
    println!(
        "  {:<5}{:>7.1}  {}",
        "FRES".dimmed(),
        report.scores.fres,
        age_cell(AgeScale::Fres)
    );
    println!(
        "  {:<5}{:>7.1}  {}",
        "ARI".dimmed(),
        report.scores.ari,
        age_cell(AgeScale::Ari)
    );
    let smog_note = match (report.smog_method, report.smog_sample_too_small) {
        (SmogMethod::Sampled, _) => "sampled",
        (SmogMethod::Formula, true) => "fewer than 30 sentences",
        (SmogMethod::Formula, false) => "",
    };
    println!(
        "  {:<5}{:>7.1}  {}",
        "SMOG".dimmed(),
        report.scores.smog,
        smog_note.dimmed()
    );
    println!(
        "  {:<5}{:>7.1}  {}{}",
        "GFI".dimmed(),
        report.scores.gfi,
        age_cell(AgeScale::Gfi),
        if report.strict_fog { " (strict)" } else { "" }
    );

    match report.reading_age {
        Some(age) => println!("{}: {age:.1}", "Reading age".dimmed()),
        None => println!("{}: {}", "Reading age".dimmed(), "unknown".yellow()),
    }
}
