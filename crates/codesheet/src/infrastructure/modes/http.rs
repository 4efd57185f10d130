use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ModeFetcher;
use crate::domain::models::ModeId;

/// Fetches CodeMirror-style mode scripts laid out as
/// `{url}/{mode}/{mode}.js`.
pub struct HttpModeFetcher {
    url: String,
    client: reqwest::Client,
}

impl Default for HttpModeFetcher {
    fn default() -> HttpModeFetcher {
        return HttpModeFetcher::new(&Config::get(ConfigKey::ModeAssetsUrl));
    }
}

impl HttpModeFetcher {
    pub fn new(url: &str) -> HttpModeFetcher {
        return HttpModeFetcher {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        };
    }

    pub fn asset_url(&self, mode: &ModeId) -> String {
        return format!("{}/{mode}/{mode}.js", self.url);
    }
}

#[async_trait]
impl ModeFetcher for HttpModeFetcher {
    async fn fetch(&self, mode: &ModeId) -> Result<String> {
        let url = self.asset_url(mode);
        tracing::debug!(url = url.as_str(), "fetching syntax mode");

        let asset = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Error loading script {url}"))?
            .error_for_status()?
            .text()
            .await?;

        return Ok(asset);
    }
}
