use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::models::ModeFetcher;
use crate::domain::models::ModeId;

/// Counts fetches and, when gated, holds each one until `release` is called.
pub struct MockModeFetcher {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
    gate: Option<Notify>,
}

impl MockModeFetcher {
    pub fn new() -> MockModeFetcher {
        return MockModeFetcher {
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
            gate: None,
        };
    }

    pub fn gated() -> MockModeFetcher {
        return MockModeFetcher {
            gate: Some(Notify::new()),
            ..MockModeFetcher::new()
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
}

#[async_trait]
impl ModeFetcher for MockModeFetcher {
    async fn fetch(&self, mode: &ModeId) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail.load(Ordering::SeqCst) {
            bail!("404 Not Found");
        }

        return Ok(format!("mode:{mode}"));
    }
}

