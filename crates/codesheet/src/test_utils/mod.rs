mod execution_client;
mod mode_fetcher;

pub use execution_client::MockExecutionClient;
pub use mode_fetcher::MockModeFetcher;
