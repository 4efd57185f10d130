use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use futures::future::BoxFuture;
use futures::future::Shared;
use futures::FutureExt;

use crate::domain::models::EditorWidgetArc;
use crate::domain::models::ModeFetcherArc;
use crate::domain::models::ModeId;
use crate::domain::models::ModeLoadError;

#[cfg(test)]
#[path = "mode_loader_test.rs"]
mod tests;

type SharedLoad = Shared<BoxFuture<'static, Result<(), ModeLoadError>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeState {
    NotLoaded,
    Loading,
    Loaded,
}

enum Entry {
    Loading(SharedLoad),
    Loaded,
}

type Registry = Arc<Mutex<HashMap<ModeId, Entry>>>;

fn lock(registry: &Registry) -> MutexGuard<'_, HashMap<ModeId, Entry>> {
    return registry.lock().unwrap_or_else(PoisonError::into_inner);
}

/// Lazily fetches syntax modes and hands them to the editor widget. At most
/// one fetch is in flight per mode; concurrent callers await the same one.
pub struct ModeLoader {
    fetcher: ModeFetcherArc,
    editor: EditorWidgetArc,
    registry: Registry,
}

impl ModeLoader {
    pub fn new(fetcher: ModeFetcherArc, editor: EditorWidgetArc) -> ModeLoader {
        return ModeLoader {
            fetcher,
            editor,
            registry: Arc::new(Mutex::new(HashMap::new())),
        };
    }

    /// Records a mode the editor already ships with, so selecting it never
    /// triggers a fetch.
    pub fn mark_loaded(&self, mode: &ModeId) {
        lock(&self.registry).insert(mode.clone(), Entry::Loaded);
    }

    pub fn state(&self, mode: &ModeId) -> ModeState {
        return match lock(&self.registry).get(mode) {
            None => ModeState::NotLoaded,
            Some(Entry::Loading(_)) => ModeState::Loading,
            Some(Entry::Loaded) => ModeState::Loaded,
        };
    }

    pub fn is_loaded(&self, mode: &ModeId) -> bool {
        return self.state(mode) == ModeState::Loaded;
    }

    pub async fn ensure_loaded(&self, mode: &ModeId) -> Result<(), ModeLoadError> {
        let load = {
            let mut registry = lock(&self.registry);
            match registry.get(mode) {
                Some(Entry::Loaded) => return Ok(()),
                Some(Entry::Loading(load)) => {
                    tracing::debug!(mode = mode.as_str(), "joining in-flight mode load");
                    load.clone()
                }
                None => {
                    let load = self.start_load(mode);
                    registry.insert(mode.clone(), Entry::Loading(load.clone()));
                    load
                }
            }
        };

        return load.await;
    }

    // The registry transition happens inside the shared future, so it runs
    // exactly once no matter how many callers are waiting.
    fn start_load(&self, mode: &ModeId) -> SharedLoad {
        let fetcher = self.fetcher.clone();
        let editor = self.editor.clone();
        let registry = self.registry.clone();
        let mode = mode.clone();

        tracing::debug!(mode = mode.as_str(), "loading syntax mode");

        return async move {
            match fetcher.fetch(&mode).await {
                Ok(asset) => {
                    editor.register_mode(&mode, asset);
                    lock(&registry).insert(mode.clone(), Entry::Loaded);
                    tracing::debug!(mode = mode.as_str(), "syntax mode loaded");

                    return Ok(());
                }
                Err(err) => {
                    lock(&registry).remove(&mode);
                    tracing::error!(mode = mode.as_str(), error = %err, "syntax mode failed to load");

                    return Err(ModeLoadError {
                        mode,
                        message: format!("{err:#}"),
                    });
                }
            }
        }
        .boxed()
        .shared();
    }
}
