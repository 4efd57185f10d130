use std::sync::Arc;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Disposition;
use crate::domain::models::EditorWidgetArc;
use crate::domain::models::Event;
use crate::domain::models::ExecutionClientArc;
use crate::domain::models::LanguageId;
use crate::domain::models::ModeFetcherArc;
use crate::domain::models::RunRequest;
use crate::domain::services::EditorSession;
use crate::domain::services::ModeLoader;
use crate::domain::services::PendingSelection;
use crate::domain::services::RunConsole;
use crate::domain::services::RunConsoleHandle;
use crate::domain::services::RunController;
use crate::infrastructure::clients::ExecutionClientManager;
use crate::infrastructure::modes::HttpModeFetcher;

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

pub struct CodesheetProps {
    pub editor: EditorWidgetArc,
    pub fetcher: ModeFetcherArc,
    pub client: ExecutionClientArc,
    pub language: LanguageId,
    pub viewport_width: i32,
}

impl CodesheetProps {
    /// Props for `editor` with the fetcher, execution client, language and
    /// console placement taken from the loaded config.
    pub fn from_config(editor: EditorWidgetArc) -> Result<CodesheetProps> {
        return Ok(CodesheetProps {
            editor,
            fetcher: Arc::new(HttpModeFetcher::default()),
            client: ExecutionClientManager::get(
                &Config::get(ConfigKey::ApiUrl),
                &Config::get(ConfigKey::ApiKey),
            )?,
            language: Config::language(),
            viewport_width: Config::viewport_width(),
        });
    }
}

/// Network work started by an event and still to be awaited.
#[derive(Debug)]
pub enum PendingWork {
    Selection(PendingSelection),
    Run(RunRequest),
}

#[derive(Debug)]
pub struct Dispatch {
    pub disposition: Disposition,
    pub pending: Option<PendingWork>,
}

pub struct Codesheet {
    session: Arc<EditorSession>,
    console: RunConsoleHandle,
    runner: Arc<RunController>,
}

impl Codesheet {
    pub fn new(props: CodesheetProps) -> Codesheet {
        let loader = Arc::new(ModeLoader::new(props.fetcher, props.editor.clone()));
        let session = Arc::new(EditorSession::new(loader, props.editor, props.language));
        let console = RunConsole::new(props.viewport_width).into_handle();
        let runner = Arc::new(RunController::new(
            session.clone(),
            console.clone(),
            props.client,
        ));

        return Codesheet {
            session,
            console,
            runner,
        };
    }

    pub fn session(&self) -> Arc<EditorSession> {
        return self.session.clone();
    }

    pub fn runner(&self) -> Arc<RunController> {
        return self.runner.clone();
    }

    pub fn console(&self) -> MutexGuard<'_, RunConsole> {
        return self.console.lock().unwrap_or_else(PoisonError::into_inner);
    }

    /// Applies `event` to local state right away and returns the network
    /// work it started, if any. Language switches and runs take effect here,
    /// so events that follow them observe the new selection or the disabled
    /// trigger.
    pub fn dispatch(&self, event: Event) -> Dispatch {
        let pending = match event {
            Event::LanguageChanged(language) => self
                .session
                .begin_selection(language)
                .map(PendingWork::Selection),
            Event::RunClicked => self.runner.begin_run().map(PendingWork::Run),
            other => {
                return Dispatch {
                    disposition: self.handle_ui_event(other),
                    pending: None,
                };
            }
        };

        return Dispatch {
            disposition: Disposition::Default,
            pending,
        };
    }

    /// Waits for the network work started by `dispatch`.
    pub async fn complete(&self, work: PendingWork) -> Result<()> {
        match work {
            PendingWork::Selection(pending) => self.session.finish_selection(pending).await?,
            PendingWork::Run(request) => {
                self.runner.complete_run(request).await;
            }
        }

        return Ok(());
    }

    pub async fn handle_event(&self, event: Event) -> Result<Disposition> {
        let dispatch = self.dispatch(event);
        if let Some(work) = dispatch.pending {
            self.complete(work).await?;
        }

        return Ok(dispatch.disposition);
    }

    fn handle_ui_event(&self, event: Event) -> Disposition {
        match event {
            Event::EditorChanged(text) => self.session.set_code(&text),
            Event::InputChanged(text) => self.console().set_input(&text),
            Event::ConsoleTriggerClicked => {
                self.console().toggle();
                return Disposition::PreventDefault;
            }
            Event::ConsoleCloseClicked => self.console().close(),
            Event::KeyDown(key) => self.console().handle_key(key),
            Event::HandlePointerDown(pointer) => return self.console().begin_drag(pointer),
            Event::PointerMove(pointer) => return self.console().drag_to(pointer),
            Event::PointerUp => self.console().end_drag(),
            Event::SubPanelHeaderClicked(panel) => self.console().toggle_subpanel(panel),
            Event::LanguageChanged(_) | Event::RunClicked => {}
        }

        return Disposition::Default;
    }
}
