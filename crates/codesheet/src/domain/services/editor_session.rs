use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use super::ModeLoader;
use crate::domain::models::EditorWidgetArc;
use crate::domain::models::LanguageId;
use crate::domain::models::ModeId;
use crate::domain::models::SelectionError;

#[cfg(test)]
#[path = "editor_session_test.rs"]
mod tests;

pub const LOADING_PLACEHOLDER: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionStatus {
    Ready,
    Loading(ModeId),
    Failed(SelectionError),
}

#[derive(Debug)]
struct EditorState {
    language: LanguageId,
    mode: ModeId,
    status: SelectionStatus,
    // Bumped on every selection so a slow load cannot overwrite a newer one.
    selection: u64,
    edited: bool,
}

/// A language selection still waiting for its syntax mode.
#[derive(Debug)]
pub struct PendingSelection {
    language: LanguageId,
    mode: ModeId,
    selection: u64,
}

/// Owns the language selection and keeps the editor widget's mode and text in
/// step with it.
pub struct EditorSession {
    loader: Arc<ModeLoader>,
    editor: EditorWidgetArc,
    state: Mutex<EditorState>,
}

impl EditorSession {
    /// Starts a session on `language`, whose mode is assumed to ship with the
    /// editor widget.
    pub fn new(loader: Arc<ModeLoader>, editor: EditorWidgetArc, language: LanguageId) -> EditorSession {
        let mode = language.mode();
        loader.mark_loaded(&mode);
        editor.set_mode(&mode);
        editor.set_value(&language.sample_code());

        return EditorSession {
            loader,
            editor,
            state: Mutex::new(EditorState {
                language,
                mode,
                status: SelectionStatus::Ready,
                selection: 0,
                edited: false,
            }),
        };
    }

    fn state(&self) -> MutexGuard<'_, EditorState> {
        return self.state.lock().unwrap_or_else(PoisonError::into_inner);
    }

    /// Selects `language`, waiting for its syntax mode when it still has to be
    /// fetched.
    pub async fn select_language(&self, language: LanguageId) -> Result<(), SelectionError> {
        return match self.begin_selection(language) {
            Some(pending) => self.finish_selection(pending).await,
            None => Ok(()),
        };
    }

    /// Records the selection and updates the editor right away. When the mode
    /// is already loaded the selection is complete and `None` is returned;
    /// otherwise the editor shows the placeholder and the returned pending
    /// selection must be passed to `finish_selection`.
    pub fn begin_selection(&self, language: LanguageId) -> Option<PendingSelection> {
        let mode = language.mode();
        let mut state = self.state();
        state.language = language;
        state.selection += 1;
        state.edited = false;

        if self.loader.is_loaded(&mode) {
            self.apply(&mut state, &mode);
            return None;
        }

        state.status = SelectionStatus::Loading(mode.clone());
        self.editor.set_value(LOADING_PLACEHOLDER);

        return Some(PendingSelection {
            language,
            mode,
            selection: state.selection,
        });
    }

    pub async fn finish_selection(&self, pending: PendingSelection) -> Result<(), SelectionError> {
        let PendingSelection {
            language,
            mode,
            selection,
        } = pending;

        tracing::debug!(language = %language, mode = mode.as_str(), "waiting for syntax mode");
        let res = self.loader.ensure_loaded(&mode).await;

        let mut state = self.state();
        if state.selection != selection {
            tracing::debug!(language = %language, "language selection superseded");
            return res.map_err(|err| SelectionError::from_mode_error(language, err));
        }

        match res {
            Ok(()) => {
                self.apply(&mut state, &mode);
                return Ok(());
            }
            Err(err) => {
                let err = SelectionError::from_mode_error(language, err);
                tracing::error!(language = %language, error = %err, "language selection failed");
                state.status = SelectionStatus::Failed(err.clone());

                return Err(err);
            }
        }
    }

    fn apply(&self, state: &mut EditorState, mode: &ModeId) {
        state.mode = mode.clone();
        state.status = SelectionStatus::Ready;
        self.editor.set_mode(mode);
        // Text typed while the mode was loading replaces the sample.
        if !state.edited {
            self.editor.set_value(&state.language.sample_code());
        }
    }

    /// Live editor text, including the user's edits.
    pub fn current_code(&self) -> String {
        return self.editor.value();
    }

    pub fn set_code(&self, text: &str) {
        let mut state = self.state();
        state.edited = true;
        self.editor.set_value(text);
    }

    pub fn current_language(&self) -> LanguageId {
        return self.state().language;
    }

    pub fn current_mode(&self) -> ModeId {
        return self.state().mode.clone();
    }

    pub fn status(&self) -> SelectionStatus {
        return self.state().status.clone();
    }
}
