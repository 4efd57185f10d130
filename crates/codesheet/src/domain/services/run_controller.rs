use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use super::EditorSession;
use super::RunConsole;
use super::RunConsoleHandle;
use crate::domain::models::ExecutionClientArc;
use crate::domain::models::RunRequest;
use crate::domain::models::RunResult;
use crate::domain::models::RunState;

#[cfg(test)]
#[path = "run_controller_test.rs"]
mod tests;

#[derive(Debug, Default)]
struct RunStatus {
    state: RunState,
    last_outcome: Option<RunState>,
}

/// Submits the session's code to the execution API and reports the result in
/// the run console. Only one run is in flight at a time: the trigger is
/// enabled exactly while the controller is idle.
pub struct RunController {
    session: Arc<EditorSession>,
    console: RunConsoleHandle,
    client: ExecutionClientArc,
    status: Mutex<RunStatus>,
}

impl RunController {
    pub fn new(
        session: Arc<EditorSession>,
        console: RunConsoleHandle,
        client: ExecutionClientArc,
    ) -> RunController {
        return RunController {
            session,
            console,
            client,
            status: Mutex::new(RunStatus::default()),
        };
    }

    fn status(&self) -> MutexGuard<'_, RunStatus> {
        return self.status.lock().unwrap_or_else(PoisonError::into_inner);
    }

    fn console(&self) -> MutexGuard<'_, RunConsole> {
        return self.console.lock().unwrap_or_else(PoisonError::into_inner);
    }

    pub fn state(&self) -> RunState {
        return self.status().state;
    }

    pub fn is_trigger_enabled(&self) -> bool {
        return self.state() == RunState::Idle;
    }

    /// Terminal state of the most recent run, if any has completed.
    pub fn last_outcome(&self) -> Option<RunState> {
        return self.status().last_outcome;
    }

    /// Runs the current code. Returns `None` without side effects when a run
    /// is already in flight.
    pub async fn submit_run(&self) -> Option<RunResult> {
        let request = self.begin_run()?;

        return Some(self.complete_run(request).await);
    }

    /// Takes the trigger and snapshots the request from the code and input as
    /// they are now. Returns `None` when a run is already in flight.
    pub fn begin_run(&self) -> Option<RunRequest> {
        {
            let mut status = self.status();
            if status.state != RunState::Idle {
                tracing::debug!(state = ?status.state, "run trigger is disabled, ignoring");
                return None;
            }
            status.state = RunState::Running;
        }

        let language = self.session.current_language();
        let mut console = self.console();
        console.clear_error();
        console.set_output(&format!("Running {language} code..."));
        console.force_output_expanded();

        return Some(RunRequest::new(
            language,
            self.session.current_code(),
            console.input().to_string(),
        ));
    }

    /// Sends a request taken by `begin_run`, shows its result and releases
    /// the trigger.
    pub async fn complete_run(&self, request: RunRequest) -> RunResult {
        tracing::info!(language = %request.language, bytes = request.code.len(), "submitting run");
        let res = self.client.run(&request).await;
        match &res {
            Ok(response) => tracing::debug!(response = ?response, "run response"),
            Err(err) => tracing::error!(error = %err, "run request failed"),
        }

        let result = RunResult::from_response(res);
        {
            let mut console = self.console();
            if result.is_error() {
                console.set_error_output(&result.output_text());
            } else {
                console.set_output(&result.output_text());
            }
        }

        let mut status = self.status();
        status.last_outcome = Some(RunState::from_result(&result));
        status.state = RunState::Idle;

        return result;
    }
}
