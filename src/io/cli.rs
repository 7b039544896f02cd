//! Command-line interface for replaying gesture scripts

use crate::algorithm::generation::{PatternGenerator, SupplyStrategy};
use crate::game::controller::SessionController;
use crate::game::level::LevelTable;
use crate::game::piece::Palette;
use crate::io::configuration::{DEFAULT_SEED, OUTPUT_SUFFIX, SCRIPT_EXTENSION};
use crate::io::error::{PuzzleError, Result, file_system, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::script::{GestureScript, ReplayReport, replay};
use crate::io::store::{JsonProgressStore, MemoryProgressStore, ProgressStore};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[derive(Parser, Debug)]
#[command(name = "slidetile")]
#[command(
    author,
    version,
    about = "Replay gesture scripts against the sliding-piece puzzle engine"
)]
/// Command-line arguments for the script replayer
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Gesture script (JSON) or directory of scripts
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for level generation, unless a script sets its own
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Level to play, unless a script sets its own
    #[arg(short, long)]
    pub level: Option<u32>,

    /// JSON file with a custom level table
    #[arg(long, value_name = "FILE")]
    pub levels: Option<PathBuf>,

    /// JSON file persisting best times and the unlocked level
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Draw extra piece colors uniformly instead of evenly
    #[arg(short, long)]
    pub uniform_supply: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process scripts even if a report exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing reports should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Extra-color strategy selected on the command line
    pub const fn supply_strategy(&self) -> SupplyStrategy {
        if self.uniform_supply {
            SupplyStrategy::Uniform
        } else {
            SupplyStrategy::Even {
                random_offset: false,
            }
        }
    }
}

/// Orchestrates batch replay of gesture scripts with progress tracking
pub struct ScriptProcessor {
    cli: Cli,
    levels: LevelTable,
    progress_manager: Option<ProgressManager>,
}

impl ScriptProcessor {
    /// Create a processor, loading the level table if one was given
    ///
    /// # Errors
    ///
    /// Returns an error if the level table file cannot be loaded.
    pub fn new(cli: Cli) -> Result<Self> {
        let levels = match &cli.levels {
            Some(path) => LevelTable::from_json_path(path)?,
            None => LevelTable::default(),
        };
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            levels,
            progress_manager,
        })
    }

    /// Replay every selected script and write its report
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, script loading, replay or report
    /// writing fails.
    pub fn process(&mut self) -> Result<Vec<ReplayReport>> {
        let scripts = self.collect_scripts()?;
        if scripts.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(scripts.len());
        }

        let mut reports = Vec::with_capacity(scripts.len());
        for (index, path) in scripts.iter().enumerate() {
            reports.push(self.process_script(path, index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(reports)
    }

    fn collect_scripts(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_script(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"must be a .json gesture script",
                ));
            }
            Ok(if self.should_process(target) {
                vec![target.clone()]
            } else {
                Vec::new()
            })
        } else if target.is_dir() {
            let entries =
                std::fs::read_dir(target).map_err(|e| file_system(target, "read directory", e))?;
            let mut scripts = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_script(&path) && self.should_process(&path) {
                    scripts.push(path);
                }
            }
            scripts.sort();
            Ok(scripts)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a gesture script or directory",
            ))
        }
    }

    fn should_process(&self, path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }
        let output_path = Self::get_output_path(path);
        if output_path.exists() {
            // Allow print for user feedback for skipped scripts
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (report exists)", path.display());
            }
            false
        } else {
            true
        }
    }

    #[instrument(skip_all, fields(script = %path.display()))]
    fn process_script(&self, path: &Path, index: usize) -> Result<ReplayReport> {
        let script = GestureScript::from_json_path(path)?;
        if let Some(ref pm) = self.progress_manager {
            pm.start_script(index, path, script.events.len());
        }

        let store: Box<dyn ProgressStore> = match &self.cli.store {
            Some(store_path) => Box::new(JsonProgressStore::open(store_path)),
            None => Box::new(MemoryProgressStore::new()),
        };
        let mut controller = SessionController::new(
            self.levels.clone(),
            Palette::default(),
            store,
            script.seed.unwrap_or(self.cli.seed),
        )
        .with_generator(PatternGenerator::new(self.cli.supply_strategy()));
        if let Some(level) = self.cli.level.filter(|_| script.level.is_none()) {
            controller.select_level(level);
        }

        let report = replay(&mut controller, &script, |applied| {
            if let Some(ref pm) = self.progress_manager {
                pm.update_events(index, applied);
            }
        })?;

        let output_path = Self::get_output_path(path);
        let json =
            serde_json::to_string_pretty(&report).map_err(|e| PuzzleError::Serialization {
                path: output_path.clone(),
                source: e,
            })?;
        std::fs::write(&output_path, json)
            .map_err(|e| file_system(&output_path, "write report", e))?;

        info!(
            level = report.level,
            state = ?report.state,
            moves = report.moves_made,
            "script replayed"
        );
        if let Some(ref pm) = self.progress_manager {
            pm.complete_script(index, &format!("{:?}", report.state));
        }
        Ok(report)
    }

    /// Report path written for a script: `<stem>_result.json` beside it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            SCRIPT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_script(path: &Path) -> bool {
    let is_json = path.extension().and_then(|s| s.to_str()) == Some(SCRIPT_EXTENSION);
    let is_report = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
    is_json && !is_report
}
