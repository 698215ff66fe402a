use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_manifest::TrellisToml;

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to trellis.toml (defaults to ./trellis.toml)
    #[arg(short, long, default_value = "trellis.toml")]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let trellis_toml = TrellisToml::open(&self.config).unwrap_or_exit();
        let snapshot = trellis_toml.load_snapshot().unwrap_or_exit();
        let manifest = trellis_toml.manifest();
        let lang = LanguageSupport::get(manifest.output.language);

        let report = ops::explain(snapshot, manifest, &lang, &self.config)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
