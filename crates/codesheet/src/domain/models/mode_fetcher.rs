use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::ModeId;

/// Retrieves the asset that defines a syntax mode.
#[async_trait]
pub trait ModeFetcher: Send + Sync {
    async fn fetch(&self, mode: &ModeId) -> Result<String>;
}

pub type ModeFetcherArc = Arc<dyn ModeFetcher>;
