//! Command-line interface for batch stimulus generation

use crate::assets::{AssetLibrary, DirSource};
use crate::io::configuration::{DEFAULT_COMPONENT_DIR, DEFAULT_OUTPUT_DIR};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{export_stimulus, stimulus_path};
use crate::io::progress::ProgressManager;
use crate::stimuli::{FlowerFamily, InsectFamily, StimulusFamily, TurtleFamily};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which stimulus families to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyChoice {
    /// Flower stimuli only
    Flowers,
    /// Insect stimuli only
    Insects,
    /// Turtle stimuli only
    Turtles,
    /// Every family in sequence
    All,
}

#[derive(Parser)]
#[command(name = "stimgen")]
#[command(
    author,
    version,
    about = "Generate composited stimulus images for every feature combination"
)]
/// Command-line arguments for the stimulus generator
pub struct Cli {
    /// Directory containing component images
    #[arg(value_name = "COMPONENTS", default_value = DEFAULT_COMPONENT_DIR)]
    pub components: PathBuf,

    /// Directory for generated stimulus images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Stimulus family to generate
    #[arg(short, long, value_enum, default_value = "all")]
    pub family: FamilyChoice,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates generation of the selected families with progress tracking
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every combination of the selected families
    ///
    /// Fail-fast: the first missing asset or I/O failure aborts the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the component directory is missing, an asset
    /// cannot be resolved, or an output image cannot be written.
    pub fn process(&mut self) -> Result<()> {
        if !self.cli.components.is_dir() {
            return Err(invalid_parameter(
                "components",
                &self.cli.components.display(),
                &"component directory does not exist",
            ));
        }

        match self.cli.family {
            FamilyChoice::Flowers => self.run_family(&FlowerFamily::default()),
            FamilyChoice::Insects => self.run_family(&InsectFamily::default()),
            FamilyChoice::Turtles => self.run_family(&TurtleFamily::default()),
            FamilyChoice::All => {
                self.run_family(&FlowerFamily::default())?;
                self.run_family(&InsectFamily::default())?;
                self.run_family(&TurtleFamily::default())
            }
        }
    }

    fn run_family<F: StimulusFamily>(&mut self, family: &F) -> Result<()> {
        let source = DirSource::new(&self.cli.components);
        let mut assets = if family.keys_background() {
            AssetLibrary::new(source).with_background_keying()
        } else {
            AssetLibrary::new(source)
        };

        let combinations = family.combinations();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_family(family.name(), combinations.len());
        }

        for features in &combinations {
            let canvas = family.assemble(features, &mut assets)?;
            let path = stimulus_path(&self.cli.output, &family.file_stem(features));
            export_stimulus(&canvas, &path)?;

            if let Some(ref pm) = self.progress_manager {
                pm.tick();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_family();
        }

        Ok(())
    }
}
