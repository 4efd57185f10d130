use std::sync::Arc;

use async_trait::async_trait;

use super::RunRequest;
use super::RunResponse;
use super::TransportError;

/// Remote service that runs submitted code out of process.
#[async_trait]
pub trait ExecutionClient: Send + Sync {
    async fn run(&self, request: &RunRequest) -> Result<RunResponse, TransportError>;
}

pub type ExecutionClientArc = Arc<dyn ExecutionClient>;
