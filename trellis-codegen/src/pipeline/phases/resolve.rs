//! Resolve phase - turns flat aliases into namespace trees.

use eyre::{Result, bail};

use crate::{
    pipeline::{CompilationContext, Diagnostic, Phase},
    resolve::NameResolver,
};

/// Phase that resolves the snapshot into one tree per entry kind.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve dotted aliases into namespace trees"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        match NameResolver::resolve(&ctx.snapshot.entries) {
            Ok(resolved) => {
                ctx.resolved = Some(resolved);
                Ok(())
            }
            Err(err) => {
                ctx.add_diagnostic(Diagnostic::from_error(self.name(), &err));
                bail!("Resolution failed: {}", err)
            }
        }
    }
}
