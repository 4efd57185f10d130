use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ExecutionClient;
use crate::domain::models::RunRequest;
use crate::domain::models::RunResponse;
use crate::domain::models::TransportError;

#[cfg(test)]
#[path = "runmycode_test.rs"]
mod tests;

/// Client for the RunMyCode execution API:
/// `POST {url}/{language}?args={args}` with the source as the raw body.
pub struct RunMyCode {
    url: String,
    api_key: String,
    client: reqwest::Client,
}

impl Default for RunMyCode {
    fn default() -> RunMyCode {
        return RunMyCode::new(
            &Config::get(ConfigKey::ApiUrl),
            &Config::get(ConfigKey::ApiKey),
        );
    }
}

impl RunMyCode {
    pub fn new(url: &str, api_key: &str) -> RunMyCode {
        return RunMyCode {
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        };
    }

    pub fn endpoint(&self, request: &RunRequest) -> String {
        return format!("{}{}", self.url, request.path_and_query());
    }
}

#[async_trait]
impl ExecutionClient for RunMyCode {
    async fn run(&self, request: &RunRequest) -> Result<RunResponse, TransportError> {
        let url = self.endpoint(request);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .body(request.code.clone())
            .send()
            .await?;

        // The body is a run report whatever the HTTP status is.
        let status = response.status().as_u16();
        let body = response.text().await?;
        let res = serde_json::from_str::<RunResponse>(&body);
        if let Err(err) = &res {
            tracing::error!(status = status, error = %err, "execution API returned a non-JSON body");
        }

        return Ok(res?);
    }
}
