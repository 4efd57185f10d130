use std::ops::Add;
use std::ops::Sub;

use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;

pub const PANEL_WIDTH: i32 = 350;
pub const PANEL_RIGHT_MARGIN: i32 = 200;

/// Client-space coordinates, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        return Position { x, y };
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        return Position::new(self.x + rhs.x, self.y + rhs.y);
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        return Position::new(self.x - rhs.x, self.y - rhs.y);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SubPanel {
    Input,
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub visibility: Visibility,
    pub position: Position,
    pub input_collapsed: bool,
    pub output_collapsed: bool,
}

impl PanelState {
    /// Hidden, Input collapsed, Output expanded, placed a fixed margin from
    /// the right edge of the viewport.
    pub fn new(viewport_width: i32) -> PanelState {
        return PanelState {
            visibility: Visibility::Hidden,
            position: Position::new(viewport_width - PANEL_WIDTH - PANEL_RIGHT_MARGIN, 0),
            input_collapsed: true,
            output_collapsed: false,
        };
    }

    pub fn is_collapsed(&self, panel: SubPanel) -> bool {
        return match panel {
            SubPanel::Input => self.input_collapsed,
            SubPanel::Output => self.output_collapsed,
        };
    }
}
