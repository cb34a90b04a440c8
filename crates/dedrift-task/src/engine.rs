//! Task convergence engine.

use dedrift_core::{ApplyMode, Clock, Reporter, SystemClock, TracingReporter};

use crate::command::decompose_command;
use crate::error::TaskError;
use crate::gateway::TaskGateway;
use crate::logon::{ServiceAccounts, resolve_logon_type};
use crate::trigger::compile_trigger;
use crate::types::{LogonType, TaskDefinition, TaskPayload};

/// Lifecycle operations that act on the task name alone.
#[derive(Debug, Clone, Copy)]
enum Lifecycle {
    Start,
    Stop,
    Enable,
    Disable,
    Delete,
}

impl Lifecycle {
    fn operation(self) -> &'static str {
        match self {
            Lifecycle::Start => "start",
            Lifecycle::Stop => "stop",
            Lifecycle::Enable => "enable",
            Lifecycle::Disable => "disable",
            Lifecycle::Delete => "delete",
        }
    }

    fn done(self) -> &'static str {
        match self {
            Lifecycle::Start => "started",
            Lifecycle::Stop => "stopped",
            Lifecycle::Enable => "enabled",
            Lifecycle::Disable => "disabled",
            Lifecycle::Delete => "deleted",
        }
    }
}

/// Converges scheduled tasks toward their desired state.
///
/// Holds the scheduler gateway plus the injected clock, reporter, apply
/// mode, and service-account set. One convergence call performs at most one
/// gateway mutation; validation failures surface before anything is sent.
pub struct TaskConverger<G> {
    gateway: G,
    clock: Box<dyn Clock>,
    reporter: Box<dyn Reporter>,
    mode: ApplyMode,
    service_accounts: ServiceAccounts,
}

impl<G: TaskGateway> TaskConverger<G> {
    /// Create an engine with the system clock, tracing narration, and the
    /// built-in service-account set.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            clock: Box::new(SystemClock),
            reporter: Box::new(TracingReporter),
            mode: ApplyMode::default(),
            service_accounts: ServiceAccounts::default(),
        }
    }

    /// Replace the clock, for deterministic payload compilation.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
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

    /// Replace the well-known service-account set.
    pub fn with_service_accounts(mut self, accounts: ServiceAccounts) -> Self {
        self.service_accounts = accounts;
        self
    }

    /// The gateway, for inspection.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Compile the full payload for a definition without touching the
    /// gateway.
    ///
    /// Pure given a fixed clock: the same definition always compiles to the
    /// same payload. The password is included only when the resolved logon
    /// type requires one.
    pub fn plan(&self, def: &TaskDefinition) -> Result<TaskPayload, TaskError> {
        let trigger = compile_trigger(def, self.clock.as_ref())?;
        let logon_type = resolve_logon_type(
            &def.user,
            def.password.as_deref(),
            def.interactive_enabled,
            &self.service_accounts,
        )?;
        let exec_action = decompose_command(&def.command, &def.working_directory)?;

        let password = match logon_type {
            LogonType::Password | LogonType::InteractiveTokenOrPassword => def.password.clone(),
            LogonType::ServiceAccount => None,
        };

        Ok(TaskPayload {
            name: def.task_name.clone(),
            exec_action,
            force: def.force,
            logon_type,
            password,
            run_level: def.run_level,
            trigger,
            user: def.user.clone(),
        })
    }

    /// Converge the named task to the definition.
    ///
    /// Compiles the payload and submits it unconditionally; the gateway owns
    /// diffing against the live task. Create and update share this path.
    #[tracing::instrument(skip(self, def), fields(task = %def.task_name))]
    pub fn create_or_update(&mut self, def: &TaskDefinition) -> Result<TaskPayload, TaskError> {
        let payload = self.plan(def)?;

        if self.mode.mutates() {
            self.gateway
                .apply(&payload)
                .map_err(|source| TaskError::Gateway {
                    operation: "apply",
                    task: def.task_name.clone(),
                    source,
                })?;
            self.reporter
                .info(&format!("applied scheduled task '{}'", def.task_name));
        } else {
            self.reporter
                .info(&format!("would apply scheduled task '{}'", def.task_name));
        }

        Ok(payload)
    }

    /// Start the named task now.
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self, name: &str) -> Result<(), TaskError> {
        self.lifecycle(name, Lifecycle::Start)
    }

    /// Stop the named task.
    #[tracing::instrument(skip(self))]
    pub fn end(&mut self, name: &str) -> Result<(), TaskError> {
        self.lifecycle(name, Lifecycle::Stop)
    }

    /// Enable the named task's triggers.
    #[tracing::instrument(skip(self))]
    pub fn enable(&mut self, name: &str) -> Result<(), TaskError> {
        self.lifecycle(name, Lifecycle::Enable)
    }

    /// Disable the named task's triggers.
    #[tracing::instrument(skip(self))]
    pub fn disable(&mut self, name: &str) -> Result<(), TaskError> {
        self.lifecycle(name, Lifecycle::Disable)
    }

    /// Delete the named task.
    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, name: &str) -> Result<(), TaskError> {
        self.lifecycle(name, Lifecycle::Delete)
    }

    fn lifecycle(&mut self, name: &str, op: Lifecycle) -> Result<(), TaskError> {
        if !self.mode.mutates() {
            self.reporter.info(&format!(
                "would {} scheduled task '{name}'",
                op.operation()
            ));
            return Ok(());
        }

        let result = match op {
            Lifecycle::Start => self.gateway.start(name),
            Lifecycle::Stop => self.gateway.stop(name),
            Lifecycle::Enable => self.gateway.enable(name),
            Lifecycle::Disable => self.gateway.disable(name),
            Lifecycle::Delete => self.gateway.delete(name),
        };

        result.map_err(|source| TaskError::Gateway {
            operation: op.operation(),
            task: name.to_string(),
            source,
        })?;

        self.reporter
            .info(&format!("{} scheduled task '{name}'", op.done()));
        Ok(())
    }
}
