use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_manifest::TrellisToml;

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to trellis.toml (defaults to ./trellis.toml)
    #[arg(short, long, default_value = "trellis.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [output].dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON snapshot of the pipeline state after each phase
    #[arg(long, value_name = "DIR")]
    pub visualize: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let trellis_toml = TrellisToml::open(&self.config).unwrap_or_exit();
        let snapshot = trellis_toml.load_snapshot().unwrap_or_exit();
        let manifest = trellis_toml.manifest();

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| trellis_toml.output_dir());
        let lang = LanguageSupport::get(manifest.output.language);

        let report = ops::generate(
            snapshot,
            manifest,
            lang,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                visualize: self.visualize.as_deref(),
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
