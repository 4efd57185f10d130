use super::LanguageId;
use super::Position;
use super::SubPanel;

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;

/// Keys the console reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Maps a host key name (DOM `KeyboardEvent.key`, terminal key names).
    pub fn from_name(name: &str) -> Key {
        match name {
            "Escape" | "Esc" => return Key::Escape,
            _ => return Key::Other,
        }
    }
}

/// UI input delivered by a host adapter (page bindings, terminal, tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LanguageChanged(LanguageId),
    EditorChanged(String),
    InputChanged(String),
    ConsoleTriggerClicked,
    ConsoleCloseClicked,
    KeyDown(Key),
    HandlePointerDown(Position),
    PointerMove(Position),
    PointerUp,
    SubPanelHeaderClicked(SubPanel),
    RunClicked,
}

/// Whether the host should suppress the platform's default handling of the
/// event (for example text selection while dragging).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    #[default]
    Default,
    PreventDefault,
}
