pub mod runmycode;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::ExecutionClientArc;

pub struct ExecutionClientManager {}

impl ExecutionClientManager {
    /// Builds the execution client for the configured API url.
    pub fn get(url: &str, api_key: &str) -> Result<ExecutionClientArc> {
        if url.is_empty() {
            bail!("Execution API url is not defined");
        }

        return Ok(std::sync::Arc::new(runmycode::RunMyCode::new(url, api_key)));
    }
}
