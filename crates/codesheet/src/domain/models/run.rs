use serde::Deserialize;
use serde::Serialize;

use super::LanguageId;
use super::TransportError;

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;

pub const SUCCESS_STATUS: &str = "Successful";
pub const TRANSPORT_FAILURE_TEXT: &str = "Some error happened. Please try again later.";

/// One submission to the execution API, built fresh per run click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub language: LanguageId,
    pub code: String,
    pub args: String,
}

impl RunRequest {
    pub fn new(language: LanguageId, code: String, args: String) -> RunRequest {
        return RunRequest {
            language,
            code,
            args,
        };
    }

    /// Path and query appended to the API base url: `/{language}?args={args}`.
    pub fn path_and_query(&self) -> String {
        return format!(
            "/{}?args={}",
            self.language,
            urlencoding::encode(&self.args)
        );
    }
}

/// JSON body returned by the execution API. Any JSON object is a report:
/// gateway errors such as `{"message":"Forbidden"}` carry no status and
/// classify as failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Success {
        stdout: Option<String>,
        stderr: Option<String>,
    },
    Failure {
        error: Option<String>,
        stdout: Option<String>,
        stderr: Option<String>,
    },
    TransportError {
        message: String,
    },
}

impl RunResult {
    pub fn from_response(res: Result<RunResponse, TransportError>) -> RunResult {
        let response = match res {
            Ok(response) => response,
            Err(err) => {
                return RunResult::TransportError {
                    message: err.to_string(),
                }
            }
        };

        if response.status == SUCCESS_STATUS {
            return RunResult::Success {
                stdout: response.stdout,
                stderr: response.stderr,
            };
        }

        return RunResult::Failure {
            error: response.error,
            stdout: response.stdout,
            stderr: response.stderr,
        };
    }

    pub fn is_error(&self) -> bool {
        return !matches!(self, RunResult::Success { .. });
    }

    /// Text shown in the console output area once the run settles.
    pub fn output_text(&self) -> String {
        match self {
            RunResult::Success { stdout, stderr } => {
                if let Some(out) = stdout.as_ref().filter(|e| !e.is_empty()) {
                    return out.to_string();
                }

                return stderr.clone().unwrap_or_default();
            }
            RunResult::Failure { error, stdout, .. } => {
                // Some interpreters print their diagnostics to stdout.
                let mut text = format!("Failed: {}", error.as_deref().unwrap_or_default());
                if let Some(out) = stdout {
                    text = format!("{text}\n{out}");
                }

                return text;
            }
            RunResult::TransportError { .. } => {
                return TRANSPORT_FAILURE_TEXT.to_string();
            }
        }
    }
}

/// Per-run lifecycle of the run controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
    TransportFailed,
}

impl RunState {
    pub fn from_result(result: &RunResult) -> RunState {
        return match result {
            RunResult::Success { .. } => RunState::Succeeded,
            RunResult::Failure { .. } => RunState::Failed,
            RunResult::TransportError { .. } => RunState::TransportFailed,
        };
    }
}
