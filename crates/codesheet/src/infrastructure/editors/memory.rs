use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::domain::models::EditorWidget;
use crate::domain::models::ModeId;

#[derive(Default)]
struct MemoryEditorState {
    modes: HashMap<ModeId, String>,
    mode: Option<ModeId>,
    value: String,
}

/// Editor widget holding its text and mode registry in memory. Used by the
/// CLI front-end and as the widget under test.
#[derive(Default)]
pub struct MemoryEditor {
    state: Mutex<MemoryEditorState>,
}

impl MemoryEditor {
    /// Creates an editor with `mode` bundled and active, showing `value`.
    pub fn with_mode(mode: &ModeId, value: &str) -> MemoryEditor {
        let editor = MemoryEditor::default();
        editor.register_mode(mode, "".to_string());
        editor.set_mode(mode);
        editor.set_value(value);

        return editor;
    }

    fn state(&self) -> MutexGuard<'_, MemoryEditorState> {
        return self.state.lock().unwrap_or_else(PoisonError::into_inner);
    }

    pub fn mode_asset(&self, mode: &ModeId) -> Option<String> {
        return self.state().modes.get(mode).cloned();
    }
}

impl EditorWidget for MemoryEditor {
    fn register_mode(&self, mode: &ModeId, asset: String) {
        self.state().modes.insert(mode.clone(), asset);
    }

    fn has_mode(&self, mode: &ModeId) -> bool {
        return self.state().modes.contains_key(mode);
    }

    fn set_mode(&self, mode: &ModeId) {
        let mut state = self.state();
        if !state.modes.contains_key(mode) {
            tracing::warn!(mode = mode.as_str(), "activating a mode that was never registered");
        }
        state.mode = Some(mode.clone());
    }

    fn mode(&self) -> Option<ModeId> {
        return self.state().mode.clone();
    }

    fn set_value(&self, text: &str) {
        self.state().value = text.to_string();
    }

    fn value(&self) -> String {
        return self.state().value.clone();
    }
}
