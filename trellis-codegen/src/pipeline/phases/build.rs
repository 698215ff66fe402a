//! Build phase - flattens the resolved trees into the accessor model.

use eyre::{Result, bail};

use crate::{
    accessors::build_model,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that builds the [`trellis_ir::AccessorModel`].
pub struct BuildPhase;

impl Phase for BuildPhase {
    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "Build accessor classes from the resolved trees"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let Some(resolved) = &ctx.resolved else {
            bail!("resolved catalog not set - did ResolvePhase run?");
        };

        match build_model(&ctx.snapshot.name, resolved) {
            Ok(model) => {
                ctx.model = Some(model);
                Ok(())
            }
            Err(err) => {
                ctx.add_diagnostic(Diagnostic::from_error(self.name(), &err));
                bail!("Building accessors failed: {}", err)
            }
        }
    }
}
