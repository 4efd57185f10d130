use crate::domain::models::Position;

/// Tracks a single pointer-drag gesture. The offset between the pointer and
/// the element's top-left corner is fixed when the gesture begins, so the
/// grabbed point stays under the cursor. There is no clamping to the
/// viewport.
#[derive(Debug, Default)]
pub struct DragController {
    offset: Option<Position>,
}

impl DragController {
    pub fn begin_drag(&mut self, pointer: Position, element: Position) {
        self.offset = Some(pointer - element);
    }

    /// New top-left for the element, or `None` when no gesture is active.
    pub fn pointer_move(&self, pointer: Position) -> Option<Position> {
        return self.offset.map(|offset| pointer - offset);
    }

    pub fn end_drag(&mut self) {
        self.offset = None;
    }

    pub fn is_dragging(&self) -> bool {
        return self.offset.is_some();
    }

    /// Text selection is suppressed for the duration of a gesture.
    pub fn suppresses_selection(&self) -> bool {
        return self.is_dragging();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_moves_by_the_pointer_delta_wherever_the_grab_started() {
        let element = Position::new(730, 0);

        for grab in [Position::new(731, 2), Position::new(1000, 25)] {
            let mut drag = DragController::default();
            drag.begin_drag(grab, element);

            let moved = drag.pointer_move(grab + Position::new(-40, 120)).unwrap();
            assert_eq!(moved - element, Position::new(-40, 120));
        }
    }

    #[test]
    fn it_ignores_moves_outside_a_gesture() {
        let mut drag = DragController::default();
        assert_eq!(drag.pointer_move(Position::new(5, 5)), None);

        drag.begin_drag(Position::new(10, 10), Position::new(0, 0));
        assert!(drag.suppresses_selection());
        drag.end_drag();

        assert!(!drag.is_dragging());
        assert!(!drag.suppresses_selection());
        assert_eq!(drag.pointer_move(Position::new(50, 50)), None);
    }
}
