//! CLI command implementations.

use fixgen_accounts::io::{read_json, write_json_atomic};
use fixgen_accounts::{
    generate_accounts, write_partitions, AccountsError, MnemonicKeySource, PartitionNaming,
    PartitionPlan, PartitionSummary,
};
use fixgen_genesis::{GenesisError, GenesisMerger, MergeJob, MergeOptions, MergeReport};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Accounts(#[from] AccountsError),

    #[error(transparent)]
    Genesis(#[from] GenesisError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("progress bar template: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Generate `count` random accounts into `output`.
pub fn generate(count: u64, output: &Path) -> Result<()> {
    tracing::info!(count, output = %output.display(), "Generating accounts");

    let bar = ProgressBar::new(count);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let mut source = MnemonicKeySource::new();
    let accounts = generate_accounts(&mut source, count, |n| bar.set_position(n))?;
    bar.finish_and_clear();

    write_json_atomic(output, &accounts)?;
    println!("{} accounts saved to {}", accounts.len(), output.display());

    Ok(())
}

/// Split a record file into partition files.
///
/// Records are carried as opaque JSON objects, so fields this tool does not
/// know about survive the split.
pub fn split(
    input: &Path,
    plan: PartitionPlan,
    naming: &PartitionNaming,
) -> Result<Vec<PartitionSummary>> {
    tracing::info!(input = %input.display(), ?plan, "Splitting accounts");

    let records: Vec<serde_json::Value> = read_json(input)?;
    let written = write_partitions(&records, plan, naming)?;

    for partition in &written {
        println!(
            "Wrote {} accounts to {}",
            partition.records,
            partition.path.display()
        );
    }

    Ok(written)
}

/// Merge partition files into a genesis document.
pub fn merge(job: &MergeJob, options: MergeOptions) -> Result<MergeReport> {
    tracing::info!(
        partitions = job.partitions.len(),
        template = %job.template.display(),
        output = %job.output.display(),
        strict = options.strict,
        "Merging genesis accounts"
    );

    if let Some(skipped) = unlisted_partition(&job.partitions) {
        tracing::warn!(
            path = %skipped.display(),
            "Partition file exists past the last listed partition and will not be merged"
        );
    }

    let report = GenesisMerger::new(options).run(job)?;
    println!(
        "New genesis written to {} with {} unique accounts.",
        report.output.display(),
        report.appended
    );

    Ok(report)
}

/// Returns the file numbered one past the last listed partition if it exists.
///
/// `accounts5.json` as the last partition looks for `accounts6.json` beside it.
fn unlisted_partition(partitions: &[PathBuf]) -> Option<PathBuf> {
    let last = partitions.last()?;
    let stem = last.file_stem()?.to_str()?;
    let prefix = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let number: usize = stem[prefix.len()..].parse().ok()?;
    let following = number.checked_add(1)?;

    let mut next = last.with_file_name(format!("{prefix}{following}"));
    if let Some(extension) = last.extension() {
        next.set_extension(extension);
    }
    next.exists().then_some(next)
}
