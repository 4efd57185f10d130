use std::sync::Arc;
use std::sync::Mutex;

use super::DragController;
use crate::domain::models::Disposition;
use crate::domain::models::Key;
use crate::domain::models::PanelState;
use crate::domain::models::Position;
use crate::domain::models::SubPanel;
use crate::domain::models::Visibility;

#[cfg(test)]
#[path = "run_console_test.rs"]
mod tests;

pub type RunConsoleHandle = Arc<Mutex<RunConsole>>;

/// The popup panel hosting the run trigger, the argument input and the
/// output area.
#[derive(Debug)]
pub struct RunConsole {
    panel: PanelState,
    drag: DragController,
    input: String,
    output: String,
    output_error: bool,
}

impl RunConsole {
    pub fn new(viewport_width: i32) -> RunConsole {
        return RunConsole {
            panel: PanelState::new(viewport_width),
            drag: DragController::default(),
            input: "".to_string(),
            output: "".to_string(),
            output_error: false,
        };
    }

    pub fn into_handle(self) -> RunConsoleHandle {
        return Arc::new(Mutex::new(self));
    }

    pub fn panel(&self) -> &PanelState {
        return &self.panel;
    }

    pub fn is_visible(&self) -> bool {
        return self.panel.visibility == Visibility::Visible;
    }

    pub fn open(&mut self) {
        if self.is_visible() {
            return;
        }

        self.panel.visibility = Visibility::Visible;
        tracing::debug!(x = self.panel.position.x, y = self.panel.position.y, "run console opened");
    }

    pub fn close(&mut self) {
        if !self.is_visible() {
            return;
        }

        self.drag.end_drag();
        self.panel.visibility = Visibility::Hidden;
        tracing::debug!("run console closed");
    }

    /// The console trigger acts as a toggle: clicking it while the console is
    /// visible behaves like the close control.
    pub fn toggle(&mut self) {
        if self.is_visible() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Escape && self.is_visible() {
            self.close();
        }
    }

    pub fn toggle_subpanel(&mut self, panel: SubPanel) {
        match panel {
            SubPanel::Input => self.panel.input_collapsed = !self.panel.input_collapsed,
            SubPanel::Output => self.panel.output_collapsed = !self.panel.output_collapsed,
        }
    }

    pub fn force_output_expanded(&mut self) {
        self.panel.output_collapsed = false;
    }

    pub fn begin_drag(&mut self, pointer: Position) -> Disposition {
        if !self.is_visible() {
            return Disposition::Default;
        }

        self.drag.begin_drag(pointer, self.panel.position);

        return Disposition::PreventDefault;
    }

    pub fn drag_to(&mut self, pointer: Position) -> Disposition {
        if let Some(position) = self.drag.pointer_move(pointer) {
            self.panel.position = position;
        }

        if self.drag.suppresses_selection() {
            return Disposition::PreventDefault;
        }

        return Disposition::Default;
    }

    pub fn end_drag(&mut self) {
        self.drag.end_drag();
    }

    pub fn is_dragging(&self) -> bool {
        return self.drag.is_dragging();
    }

    pub fn input(&self) -> &str {
        return &self.input;
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn output(&self) -> &str {
        return &self.output;
    }

    pub fn has_error(&self) -> bool {
        return self.output_error;
    }

    pub fn set_output(&mut self, text: &str) {
        self.output = text.to_string();
    }

    pub fn set_error_output(&mut self, text: &str) {
        self.output_error = true;
        self.output = text.to_string();
    }

    pub fn clear_error(&mut self) {
        self.output_error = false;
    }
}
