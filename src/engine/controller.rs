// Run controller: owns the list and drives one operation at a time

use super::constants::{MAX_LIST_SIZE, MIN_LIST_SIZE};
use super::errors::{AbortReason, Outcome, SimError};
use super::narration::Narration;
use super::ops::{build_operation, Step, StepContext, StepOperation};
use super::params::OperationParams;
use super::scheduler::{ControlHandle, PendingWait, Scheduler, WaitPoll};
use crate::catalog::OperationKind;
use crate::config::SimConfig;
use crate::history::OperationHistory;
use crate::structure::{ListStore, Markers, RandomValues, ValueSource};
use std::fmt;
use std::time::Duration;

const READY_MESSAGE: &str = "Pick an operation and press Start.";

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStatus::Idle => "Idle",
            RunStatus::Running => "Running",
            RunStatus::Paused => "Paused",
            RunStatus::Completed => "Completed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunState {
    pub status: RunStatus,
    pub step_count: usize,
    pub is_running: bool,
    pub is_paused: bool,
}

/// The operation in flight and the suspension it is waiting on
#[derive(Debug)]
struct ActiveRun {
    operation: Box<dyn StepOperation>,
    wait: Option<PendingWait>,
}

/// Read-only view for renderers
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub list: &'a ListStore,
    pub markers: &'a Markers,
    pub run_state: RunState,
    pub history: &'a OperationHistory,
    pub narration: &'a str,
    pub progress: u8,
    pub selected: OperationKind,
    pub speed: Duration,
    pub list_size: usize,
}

/// Result of a headless run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: Outcome,
    /// Number of suspensions the operation went through
    pub suspensions: usize,
    /// Every narration line of the run, in order
    pub narration: Vec<String>,
}

/// Owns the list, markers, history and run state, and drives the selected
/// operation through its suspensions.
///
/// Only one run is active at a time. Between runs the state may be read
/// through [`RunController::snapshot`] but only the controller mutates it.
pub struct RunController {
    list: ListStore,
    markers: Markers,
    history: OperationHistory,
    narration: Narration,
    state: RunState,
    selected: OperationKind,
    value_input: String,
    position_input: String,
    speed: Duration,
    list_size: usize,
    scheduler: Scheduler,
    active: Option<ActiveRun>,
    values: Box<dyn ValueSource>,
    suspensions: usize,
    last_outcome: Option<Outcome>,
}

impl RunController {
    /// Create a controller with a random list of `config.list_size` nodes
    pub fn new(config: SimConfig) -> Self {
        Self::with_values(config, Box::new(RandomValues::new(config.seed)))
    }

    /// Create a controller drawing node values from `values`
    pub fn with_values(config: SimConfig, mut values: Box<dyn ValueSource>) -> Self {
        let mut list = ListStore::new();
        list.initialize(config.list_size, values.as_mut());
        Self::with_list(config, list, values)
    }

    /// Create a controller around an existing list
    pub fn with_list(config: SimConfig, list: ListStore, values: Box<dyn ValueSource>) -> Self {
        let markers = Markers::with_head(list.head());
        RunController {
            list,
            markers,
            history: OperationHistory::new(),
            narration: Narration::new(READY_MESSAGE),
            state: RunState::default(),
            selected: OperationKind::default(),
            value_input: String::new(),
            position_input: String::new(),
            speed: config.speed(),
            list_size: config.list_size,
            scheduler: Scheduler::new(ControlHandle::new()),
            active: None,
            values,
            suspensions: 0,
            last_outcome: None,
        }
    }

    /// Clone of the pause/cancel flags, for cancelling from elsewhere
    pub fn control_handle(&self) -> ControlHandle {
        self.scheduler.handle().clone()
    }

    pub fn list(&self) -> &ListStore {
        &self.list
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn history(&self) -> &OperationHistory {
        &self.history
    }

    /// Run state with the pause flag read from the shared handle, so a pause
    /// raised through a cloned [`ControlHandle`] shows up immediately
    pub fn run_state(&self) -> RunState {
        let mut state = self.state;
        if state.is_running {
            state.is_paused = self.scheduler.handle().is_paused();
            state.status = if state.is_paused {
                RunStatus::Paused
            } else {
                RunStatus::Running
            };
        }
        state
    }

    pub fn narration(&self) -> &str {
        self.narration.current()
    }

    /// Narration lines of the current or latest run
    pub fn narration_log(&self) -> &[String] {
        self.narration.log()
    }

    pub fn selected(&self) -> OperationKind {
        self.selected
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn list_size(&self) -> usize {
        self.list_size
    }

    pub fn value_input(&self) -> &str {
        &self.value_input
    }

    pub fn position_input(&self) -> &str {
        &self.position_input
    }

    /// Outcome of the most recent run that finished
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Time left on the current suspension, if one is pending
    pub fn pending_wait(&self) -> Option<Duration> {
        self.active
            .as_ref()
            .and_then(|active| active.wait.as_ref())
            .map(PendingWait::remaining)
    }

    /// Completion estimate in percent
    pub fn progress(&self) -> u8 {
        if self.state.status == RunStatus::Completed {
            return 100;
        }
        let len = self.list.len();
        if len == 0 {
            return 0;
        }
        let percent = (self.state.step_count as f64 / len.max(1) as f64 * 100.0).round();
        percent.min(100.0) as u8
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            list: &self.list,
            markers: &self.markers,
            run_state: self.run_state(),
            history: &self.history,
            narration: self.narration.current(),
            progress: self.progress(),
            selected: self.selected,
            speed: self.speed,
            list_size: self.list_size,
        }
    }

    pub fn set_value_input(&mut self, text: impl Into<String>) {
        self.value_input = text.into();
    }

    pub fn set_position_input(&mut self, text: impl Into<String>) {
        self.position_input = text.into();
    }

    /// Change the step delay. Only later suspensions see the new value.
    pub fn set_speed(&mut self, speed_ms: u64) {
        self.speed = SimConfig::clamp_speed(speed_ms);
        tracing::debug!(speed_ms = self.speed.as_millis() as u64, "speed changed");
    }

    /// Change the size used by the next [`RunController::regenerate`]
    pub fn set_list_size(&mut self, size: usize) {
        self.list_size = size.clamp(MIN_LIST_SIZE, MAX_LIST_SIZE);
    }

    /// Choose another operation. Cancels any active run and resets.
    pub fn select_operation(&mut self, kind: OperationKind) {
        self.selected = kind;
        self.reset();
    }

    /// Start the selected operation with the current text inputs
    pub fn start(&mut self) -> Result<(), SimError> {
        let params = OperationParams::parse(&self.value_input, &self.position_input);
        self.start_with(self.selected, &params)
    }

    /// Start `kind` with explicit parameters
    pub fn start_with(
        &mut self,
        kind: OperationKind,
        params: &OperationParams,
    ) -> Result<(), SimError> {
        if self.state.is_running {
            return Err(SimError::RunInProgress);
        }

        self.selected = kind;
        self.scheduler.handle().arm();
        self.state = RunState {
            status: RunStatus::Running,
            step_count: 0,
            is_running: true,
            is_paused: false,
        };
        self.suspensions = 0;
        self.last_outcome = None;
        self.narration.take_log();
        tracing::info!(operation = %kind, ?params, "run started");

        let mut operation = build_operation(kind, params);
        let step = operation.step(&mut self.context());
        self.active = Some(ActiveRun {
            operation,
            wait: None,
        });
        self.apply(step);
        Ok(())
    }

    /// Freeze before the next step. `false` if there is nothing to pause.
    pub fn pause(&mut self) -> bool {
        self.sync_pause();
        if !self.state.is_running || self.state.is_paused {
            return false;
        }
        self.scheduler.handle().set_paused(true);
        self.state.is_paused = true;
        self.state.status = RunStatus::Paused;
        tracing::info!("run paused");
        true
    }

    /// Continue a paused run from its current step
    pub fn resume(&mut self) -> bool {
        self.sync_pause();
        if !self.state.is_running || !self.state.is_paused {
            return false;
        }
        self.scheduler.handle().set_paused(false);
        self.state.is_paused = false;
        self.state.status = RunStatus::Running;
        tracing::info!("run resumed");
        true
    }

    /// Start when idle, resume when paused, pause when running
    pub fn toggle(&mut self) -> Result<(), SimError> {
        if !self.state.is_running {
            self.start()
        } else {
            if !self.resume() {
                self.pause();
            }
            Ok(())
        }
    }

    /// Cancel the active run where it stands. Idempotent.
    ///
    /// Partial work is not rolled back; [`RunController::reset`] or
    /// [`RunController::regenerate`] restores a clean picture.
    pub fn hard_stop(&mut self) {
        self.scheduler.handle().hard_stop();
        if let Some(mut active) = self.active.take() {
            let step = active.operation.resume(&mut self.context(), false);
            debug_assert_eq!(
                step,
                Step::Finished(Outcome::Aborted(AbortReason::Cancelled))
            );
            self.last_outcome = Some(Outcome::Aborted(AbortReason::Cancelled));
            tracing::info!(operation = %active.operation.kind(), "run cancelled");
        }
        self.state.is_running = false;
        self.state.is_paused = false;
        if matches!(self.state.status, RunStatus::Running | RunStatus::Paused) {
            self.state.status = RunStatus::Idle;
        }
    }

    /// Stop, clear node statuses and markers, keep the structure
    pub fn reset(&mut self) {
        self.hard_stop();
        self.list.clear_statuses();
        self.markers = Markers::with_head(self.list.head());
        self.state.status = RunStatus::Idle;
        self.state.step_count = 0;
        self.narration.announce(format!("Reset. {}", READY_MESSAGE));
    }

    /// Stop and replace the list with `size` fresh nodes; clears the history
    pub fn regenerate(&mut self, size: usize) {
        self.hard_stop();
        self.set_list_size(size);
        self.list.initialize(self.list_size, self.values.as_mut());
        self.markers = Markers::with_head(self.list.head());
        self.history.clear();
        self.state.status = RunStatus::Idle;
        self.state.step_count = 0;
        self.narration
            .announce(format!("New list generated. {}", READY_MESSAGE));
        tracing::info!(size = self.list_size, "list regenerated");
    }

    /// Feed `dt` of elapsed time to the active run.
    ///
    /// Returns `true` when a step ran or the run ended, i.e. when the
    /// snapshot changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(mut active) = self.active.take() else {
            return false;
        };

        self.sync_pause();
        let poll = match active.wait.as_mut() {
            Some(wait) => self.scheduler.poll(wait, dt),
            None => WaitPoll::Elapsed,
        };
        let Some(waited) = poll.resolved() else {
            self.active = Some(active);
            return false;
        };

        active.wait = None;
        let step = active.operation.resume(&mut self.context(), waited);
        self.active = Some(active);
        self.apply(step);
        true
    }

    /// Start the selected operation and drive it to the end on virtual time
    pub fn run_to_end(&mut self) -> Result<RunReport, SimError> {
        self.start()?;
        Ok(self.finish_headless())
    }

    /// Headless [`RunController::start_with`]
    pub fn run_with(
        &mut self,
        kind: OperationKind,
        params: &OperationParams,
    ) -> Result<RunReport, SimError> {
        self.start_with(kind, params)?;
        Ok(self.finish_headless())
    }

    /// Drive the active run to its end, ignoring pauses
    pub fn finish_headless(&mut self) -> RunReport {
        while let Some(remaining) = self.active.as_ref().map(|_| self.pending_wait()) {
            if self.run_state().is_paused {
                self.resume();
            }
            self.tick(remaining.unwrap_or(Duration::ZERO));
        }
        RunReport {
            outcome: self
                .last_outcome
                .unwrap_or(Outcome::Aborted(AbortReason::Cancelled)),
            suspensions: self.suspensions,
            narration: self.narration.take_log(),
        }
    }

    fn sync_pause(&mut self) {
        self.state = self.run_state();
    }

    fn context(&mut self) -> StepContext<'_> {
        StepContext {
            list: &mut self.list,
            markers: &mut self.markers,
            history: &mut self.history,
            narration: &mut self.narration,
            step_count: &mut self.state.step_count,
            values: self.values.as_mut(),
        }
    }

    /// Act on what the operation asked for
    fn apply(&mut self, step: Step) {
        match step {
            Step::Suspend(delay) => {
                let duration = delay.resolve(self.speed);
                self.suspensions += 1;
                if let Some(active) = self.active.as_mut() {
                    active.wait = Some(self.scheduler.wait_with_control(duration));
                }
            }
            Step::Finished(outcome) => self.finish(outcome),
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        let operation = self.active.take().map(|active| active.operation.kind());
        self.last_outcome = Some(outcome);
        self.state.is_running = false;
        self.state.is_paused = false;
        self.scheduler.handle().set_paused(false);
        self.state.status = if outcome.is_completed() {
            RunStatus::Completed
        } else {
            RunStatus::Idle
        };
        if let Err(problem) = self.list.validate() {
            if outcome.is_completed() {
                tracing::warn!(%problem, "list inconsistent after completed run");
            }
        }
        tracing::info!(operation = ?operation, ?outcome, steps = self.state.step_count, "run finished");
    }
}
