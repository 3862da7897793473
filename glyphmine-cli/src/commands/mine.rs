//! Mine command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{discover_partitions, JsonlRecordSource};
use crate::output::write_json;
use anyhow::{Context, Result};
use clap::Args;
use glyphmine_core::{choose_workers, merge_reports, mine_all, Track};
use std::path::PathBuf;
use std::time::Instant;

/// Per-partition artifact file name.
const PARTITION_ARTIFACT: &str = "glyph_mine.json";
/// Merged main-track artifact file name.
const MERGED_MAIN_ARTIFACT: &str = "glyph_confusions_mined.json";
/// Merged matra-only artifact file name.
const MERGED_MATRA_ARTIFACT: &str = "glyph_confusions_mined_matra_only.json";

/// Arguments for the mine command
#[derive(Debug, Args)]
pub struct MineArgs {
    /// Data root containing <STATE>/ac=* partition directories
    #[arg(short, long, value_name = "DIR", default_value = "./data")]
    pub data_root: PathBuf,

    /// Partition-set (state) code, e.g. S27
    #[arg(short, long, value_name = "CODE", default_value = "S27")]
    pub state_code: String,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worker threads for the partition map phase (default: derived from
    /// hardware, clamped to [2, 12])
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl MineArgs {
    /// Execute the mine command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let mut config = cli_config.to_miner_config(self.state_code.clone());
        if self.workers.is_some() {
            config.workers = self.workers;
        }

        let state_dir = self.data_root.join(&self.state_code);
        if !state_dir.is_dir() {
            return Err(CliError::StateDirNotFound(state_dir.display().to_string()).into());
        }

        let partitions = discover_partitions(&state_dir)
            .with_context(|| format!("Failed to scan {}", state_dir.display()))?;
        if partitions.is_empty() {
            return Err(CliError::NoPartitions(state_dir.display().to_string()).into());
        }

        let workers = choose_workers(config.workers);
        log::info!(
            "Found {} partitions under {}, using {workers} workers",
            partitions.len(),
            state_dir.display()
        );

        let source = JsonlRecordSource::new(
            state_dir.clone(),
            cli_config.input.records_file.clone(),
            config.text_fields.clone(),
        );

        let started = Instant::now();
        let reports = mine_all(&source, &partitions, &config, workers)?;

        let mut ok_count = 0usize;
        for report in &reports {
            match (&report.stats, report.ok) {
                (Some(stats), true) => {
                    ok_count += 1;
                    log::info!(
                        "{}: accepted_pairs={} tokens={} in {}s",
                        report.ac,
                        stats.pairs_accepted,
                        stats.tokens,
                        stats.seconds
                    );
                }
                _ => {
                    log::warn!(
                        "{}: {}",
                        report.ac,
                        report.error.as_deref().unwrap_or("unknown failure")
                    );
                }
            }

            let artifact = state_dir.join(&report.ac).join(PARTITION_ARTIFACT);
            if let Err(err) = write_json(&artifact, report) {
                log::warn!("Failed to write {}: {err:#}", artifact.display());
            }
        }

        for (track, file_name) in [
            (Track::Main, MERGED_MAIN_ARTIFACT),
            (Track::MatraOnly, MERGED_MATRA_ARTIFACT),
        ] {
            let merged = merge_reports(&reports, track, &config, workers);
            let path = state_dir.join(file_name);
            match write_json(&path, &merged) {
                Ok(()) => log::info!(
                    "Merged {} entries ({} kept) into {}",
                    merged.merged_count,
                    merged.top.len(),
                    path.display()
                ),
                Err(err) => log::warn!("Failed to write {}: {err:#}", path.display()),
            }
        }

        log::info!(
            "Done: {ok_count}/{} partitions ok in {:.3}s",
            reports.len(),
            started.elapsed().as_secs_f64()
        );
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        let level = if self.quiet { "error" } else { log_level };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(level),
        )
        .try_init();
    }
}
