//! Pipeline orchestrator.

use eyre::Result;
use trellis_ir::CatalogSnapshot;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{BuildPhase, ResolvePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, resolve, build) followed by any user
/// phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".trellis/debug"))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(snapshot)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the default lints.
    pub fn new() -> Self {
        Self::with_validation(ValidatePhase::new())
    }

    /// Create a pipeline with a custom validate phase.
    pub fn with_validation(validate: ValidatePhase) -> Self {
        Self {
            validate,
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The validate phase, for listing its lints.
    pub fn validation(&self) -> &ValidatePhase {
        &self.validate
    }

    /// Information about every phase, in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        let mut info = vec![self.validate.info(), ResolvePhase.info(), BuildPhase.info()];
        info.extend(self.phases.iter().map(|p| p.info()));
        info
    }

    /// Run the pipeline on a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Use [`Pipeline::run_in`]
    /// to keep the diagnostics of a failed run.
    pub fn run(&self, snapshot: CatalogSnapshot) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(snapshot);
        self.run_in(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - lints aliases and values
    /// 2. ResolvePhase - builds the namespace trees
    /// 3. BuildPhase - builds the accessor model
    /// 4. User phases (if any)
    pub fn run_in(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin: [&dyn Phase; 3] = [&self.validate, &ResolvePhase, &BuildPhase];

        for phase in builtin {
            self.run_phase(phase, ctx)?;
        }
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), ctx)?;
        }

        Ok(())
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
