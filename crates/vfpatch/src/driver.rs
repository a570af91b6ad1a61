//! Sequential execution of patch directives.
//!
//! The driver applies directives strictly in order against one workspace.
//! There is no rollback: when a step fails, files rewritten by earlier steps
//! keep their new content and the error names the failing step.

use camino::Utf8PathBuf;
use thiserror::Error;
use tracing::{info, warn};
use vfpatch_config::MatchPolicy;
use vfpatch_core::{Directive, DirectiveOutcome, PatchError, Workspace};

/// Errors that stop a driver run.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A primitive failed to read, decode, or write its target.
    #[error("step {step} ({directive}) failed: {source}")]
    Step {
        /// One-based step number.
        step: usize,
        /// Description of the directive.
        directive: String,
        /// Underlying patch failure.
        #[source]
        source: PatchError,
    },
    /// A replacement matched nothing while the `require` policy was active.
    #[error("step {step} ({directive}) matched nothing in {path}")]
    UnmatchedReplacement {
        /// One-based step number.
        step: usize,
        /// Description of the directive.
        directive: String,
        /// File that was searched.
        path: Utf8PathBuf,
    },
}

impl DriverError {
    /// One-based number of the step that stopped the run.
    #[must_use]
    pub const fn step(&self) -> usize {
        match self {
            Self::Step { step, .. } | Self::UnmatchedReplacement { step, .. } => *step,
        }
    }
}

/// Record of one applied directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    step: usize,
    directive: String,
    outcome: DirectiveOutcome,
}

impl StepReport {
    /// One-based step number.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Description of the directive.
    #[must_use]
    pub fn directive(&self) -> &str {
        &self.directive
    }

    /// What the directive did.
    #[must_use]
    pub const fn outcome(&self) -> DirectiveOutcome {
        self.outcome
    }

    fn is_unmatched(&self) -> bool {
        matches!(self.outcome, DirectiveOutcome::Replaced(replacement) if replacement.is_noop())
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    steps: Vec<StepReport>,
}

impl RunSummary {
    /// Reports for every step, in execution order.
    #[must_use]
    pub fn steps(&self) -> &[StepReport] {
        &self.steps
    }

    /// Steps whose replacement matched nothing.
    pub fn unmatched(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|report| report.is_unmatched())
    }

    /// Total number of replaced occurrences across all steps.
    #[must_use]
    pub fn replaced_occurrences(&self) -> usize {
        self.steps
            .iter()
            .filter_map(|report| match report.outcome {
                DirectiveOutcome::Replaced(replacement) => Some(replacement.matches()),
                DirectiveOutcome::Inserted(_) => None,
            })
            .sum()
    }
}

/// Applies directives in order under a [`MatchPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Driver {
    policy: MatchPolicy,
}

impl Driver {
    /// Creates a driver with the given zero-match policy.
    #[must_use]
    pub const fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Runs every directive against `workspace`, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Step`] when a primitive fails, and
    /// [`DriverError::UnmatchedReplacement`] when a replacement matches
    /// nothing under [`MatchPolicy::Require`]. The zero-match file rewrite has
    /// already happened by then.
    pub fn run(
        &self,
        workspace: &Workspace,
        directives: &[Directive],
    ) -> Result<RunSummary, DriverError> {
        let mut summary = RunSummary::default();
        info!(
            root = %workspace.root(),
            steps = directives.len(),
            policy = %self.policy,
            "starting patch run"
        );

        for (index, directive) in directives.iter().enumerate() {
            let step = index + 1;
            let description = directive.to_string();
            info!(step, directive = %description, "applying directive");

            let outcome = directive
                .apply(workspace)
                .map_err(|source| DriverError::Step {
                    step,
                    directive: description.clone(),
                    source,
                })?;
            self.check_outcome(step, directive, &description, outcome)?;

            summary.steps.push(StepReport {
                step,
                directive: description,
                outcome,
            });
        }

        info!(
            steps = summary.steps.len(),
            replaced = summary.replaced_occurrences(),
            unmatched = summary.unmatched().count(),
            "patch run complete"
        );
        Ok(summary)
    }

    fn check_outcome(
        &self,
        step: usize,
        directive: &Directive,
        description: &str,
        outcome: DirectiveOutcome,
    ) -> Result<(), DriverError> {
        match outcome {
            DirectiveOutcome::Inserted(insertion) if insertion.was_clamped() => {
                warn!(
                    step,
                    path = %directive.path(),
                    requested = insertion.requested().get(),
                    landed = insertion.landed().get(),
                    "insertion position past end of file; appended instead"
                );
            }
            DirectiveOutcome::Replaced(replacement) if replacement.is_noop() => {
                if self.policy.is_strict() {
                    return Err(DriverError::UnmatchedReplacement {
                        step,
                        directive: description.to_owned(),
                        path: directive.path().to_path_buf(),
                    });
                }
                warn!(
                    step,
                    path = %directive.path(),
                    "replacement matched nothing; file content unchanged"
                );
            }
            DirectiveOutcome::Replaced(replacement) => {
                info!(step, matches = replacement.matches(), "replaced block");
            }
            DirectiveOutcome::Inserted(insertion) => {
                info!(step, line = insertion.landed().get(), "inserted text");
            }
        }
        Ok(())
    }
}
