use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::models::ExecutionClient;
use crate::domain::models::RunRequest;
use crate::domain::models::RunResponse;
use crate::domain::models::TransportError;

/// Answers every run with a fixed result and records what it was sent.
pub struct MockExecutionClient {
    response: Result<RunResponse, TransportError>,
    requests: Mutex<Vec<RunRequest>>,
    calls: AtomicUsize,
    gate: Option<Notify>,
}

impl MockExecutionClient {
    pub fn new(response: Result<RunResponse, TransportError>) -> MockExecutionClient {
        return MockExecutionClient {
            response,
            requests: Mutex::new(vec![]),
            calls: AtomicUsize::new(0),
            gate: None,
        };
    }

    pub fn gated(response: Result<RunResponse, TransportError>) -> MockExecutionClient {
        return MockExecutionClient {
            gate: Some(Notify::new()),
            ..MockExecutionClient::new(response)
        };
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        return self.calls.load(Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<RunRequest> {
        return self.requests.lock().unwrap().clone();
    }
}

#[async_trait]
impl ExecutionClient for MockExecutionClient {
    async fn run(&self, request: &RunRequest) -> Result<RunResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        return self.response.clone();
    }
}
