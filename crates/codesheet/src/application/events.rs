use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::Codesheet;
use crate::domain::models::Disposition;
use crate::domain::models::Event;

/// Receives host events and dispatches them to a `Codesheet`. Every event is
/// applied in arrival order and answered with one disposition; only the
/// network wait of a language switch or a run is spawned, so pointer and
/// keyboard events keep flowing while it is in flight.
pub struct EventsService {}

impl EventsService {
    pub async fn start(
        codesheet: Arc<Codesheet>,
        rx: &mut mpsc::UnboundedReceiver<Event>,
        disposition_tx: Option<mpsc::UnboundedSender<Disposition>>,
    ) -> Result<()> {
        while let Some(event) = rx.recv().await {
            let dispatch = codesheet.dispatch(event);

            if let Some(work) = dispatch.pending {
                let worker = codesheet.clone();
                tokio::spawn(async move {
                    if let Err(err) = worker.complete(work).await {
                        tracing::error!(error = %err, "event handling failed");
                    }
                });
            }

            if let Some(tx) = &disposition_tx {
                tx.send(dispatch.disposition)?;
            }
        }

        return Ok(());
    }
}
