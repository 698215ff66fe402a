use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::Result;
use trellis_ir::EntryKind;
use trellis_manifest::TrellisToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TreeCommand {
    /// Path to trellis.toml (defaults to ./trellis.toml)
    #[arg(short, long, default_value = "trellis.toml")]
    pub config: PathBuf,

    /// Only print one namespace
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Library,
    Version,
    Bundle,
    Plugin,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Library => EntryKind::Library,
            KindArg::Version => EntryKind::Version,
            KindArg::Bundle => EntryKind::Bundle,
            KindArg::Plugin => EntryKind::Plugin,
        }
    }
}

impl TreeCommand {
    pub fn run(&self) -> Result<()> {
        let trellis_toml = TrellisToml::open(&self.config).unwrap_or_exit();
        let snapshot = trellis_toml.load_snapshot().unwrap_or_exit();

        let kinds = match self.kind {
            Some(kind) => vec![kind.into()],
            None => EntryKind::ALL.to_vec(),
        };

        let report = ops::tree(snapshot, &kinds)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
