//! Feature convergence engine.

use dedrift_core::{ApplyMode, Reporter, TracingReporter};

use crate::error::FeatureError;
use crate::provider::FeatureProvider;
use crate::types::{FeatureAction, FeatureOutcome, FeatureRequest};

/// Converges optional feature packages toward their desired state.
///
/// Presence is queried live through the provider on every call; when the
/// system already matches, the engine narrates the no-op and touches
/// nothing.
pub struct FeatureConverger<P> {
    provider: P,
    reporter: Box<dyn Reporter>,
    mode: ApplyMode,
}

impl<P: FeatureProvider> FeatureConverger<P> {
    /// Create an engine narrating through `tracing`.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            reporter: Box::new(TracingReporter),
            mode: ApplyMode::default(),
        }
    }

    /// Replace the narration sink.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Switch between enforcing and dry-run.
    pub fn with_mode(mut self, mode: ApplyMode) -> Self {
        self.mode = mode;
        self
    }

    /// The provider, for inspection.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Converge the feature to the requested action.
    #[tracing::instrument(skip(self, request), fields(feature = %request.feature_name))]
    pub fn converge(
        &mut self,
        request: &FeatureRequest,
        action: FeatureAction,
    ) -> Result<FeatureOutcome, FeatureError> {
        match action {
            FeatureAction::Install => self.install(request),
            FeatureAction::Remove => self.remove(request),
            FeatureAction::Delete => self.delete(request),
        }
    }

    fn install(&mut self, request: &FeatureRequest) -> Result<FeatureOutcome, FeatureError> {
        let name = &request.feature_name;

        if self.provider.installed(name)? {
            self.reporter
                .debug(&format!("feature '{name}' is already installed - nothing to do"));
            return Ok(FeatureOutcome::unchanged("already installed"));
        }

        if !self.mode.mutates() {
            self.reporter.info(&format!("would install feature '{name}'"));
            return Ok(FeatureOutcome::changed("would install"));
        }

        self.provider.install(name)?;
        self.reporter.info(&format!("installed feature '{name}'"));
        Ok(FeatureOutcome::changed("installed"))
    }

    fn remove(&mut self, request: &FeatureRequest) -> Result<FeatureOutcome, FeatureError> {
        let name = &request.feature_name;

        if !self.provider.installed(name)? {
            self.reporter
                .debug(&format!("feature '{name}' does not exist - nothing to do"));
            return Ok(FeatureOutcome::unchanged("does not exist"));
        }

        if !self.mode.mutates() {
            self.reporter.info(&format!("would remove feature '{name}'"));
            return Ok(FeatureOutcome::changed("would remove"));
        }

        self.provider.remove(name)?;
        self.reporter.info(&format!("removed feature '{name}'"));
        Ok(FeatureOutcome::changed("removed"))
    }

    fn delete(&mut self, request: &FeatureRequest) -> Result<FeatureOutcome, FeatureError> {
        let name = &request.feature_name;

        if !self.provider.available(name)? {
            self.reporter
                .debug(&format!("feature '{name}' is not installed - nothing to do"));
            return Ok(FeatureOutcome::unchanged("not installed"));
        }

        if !self.mode.mutates() {
            self.reporter.info(&format!("would delete feature '{name}'"));
            return Ok(FeatureOutcome::changed("would delete"));
        }

        self.provider.delete(name)?;
        self.reporter.info(&format!("deleted feature '{name}'"));
        Ok(FeatureOutcome::changed("deleted"))
    }
}
