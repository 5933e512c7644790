use bubble_scroller_core::{Point, PointerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleDebugPath,
    ResetSections,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('d'), KeyModifiers::NONE) => Action::ToggleDebugPath,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::ResetSections,
        _ => Action::None,
    }
}

/// Maps terminal cells inside the scroller widget to scroller units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGrid {
    pub area: Rect,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl CellGrid {
    pub fn new(area: Rect, cell_width: f32, cell_height: f32) -> Self {
        Self {
            area,
            cell_width,
            cell_height,
        }
    }

    /// The widget's bounds in scroller units, with the origin at its top-left cell
    pub fn bounds(&self) -> bubble_scroller_core::Rect {
        bubble_scroller_core::Rect::new(
            0.0,
            0.0,
            self.area.width as f32 * self.cell_width,
            self.area.height as f32 * self.cell_height,
        )
    }

    /// Centre of the cell at (`column`, `row`) in scroller units
    pub fn to_units(&self, column: u16, row: u16) -> Point {
        let x = (column as f32 - self.area.x as f32 + 0.5) * self.cell_width;
        let y = (row as f32 - self.area.y as f32 + 0.5) * self.cell_height;
        Point::new(x, y)
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }
}

/// Translate a mouse event into a pointer event for the scroller
///
/// Presses only count inside the widget; drags and releases are followed
/// anywhere so a drag that leaves the widget still tracks and retracts.
pub fn pointer_from_mouse(mouse: MouseEvent, grid: &CellGrid) -> Option<PointerEvent> {
    let point = grid.to_units(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if grid.contains(mouse.column, mouse.row) => {
            Some(PointerEvent::down(point.x, point.y))
        }
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::moved(point.x, point.y)),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::up(point.x, point.y)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_scroller_core::PointerKind;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn grid() -> CellGrid {
        CellGrid::new(Rect::new(40, 2, 60, 30), 10.0, 20.0)
    }

    #[test]
    fn test_keys() {
        let key = |code, modifiers| KeyEvent::new(code, modifiers);
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('d'), KeyModifiers::NONE)),
            Action::ToggleDebugPath
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
    }

    #[test]
    fn test_bounds() {
        let bounds = grid().bounds();
        assert_eq!(bounds.right, 600.0);
        assert_eq!(bounds.bottom, 600.0);
    }

    #[test]
    fn test_cell_mapping() {
        let grid = grid();
        assert_eq!(grid.to_units(40, 2), Point::new(5.0, 10.0));
        assert_eq!(grid.to_units(45, 12), Point::new(55.0, 210.0));
    }

    #[test]
    fn test_press_inside_only() {
        let grid = grid();
        let inside = pointer_from_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 10), &grid);
        assert_eq!(inside.map(|p| p.kind), Some(PointerKind::Down));
        let outside = pointer_from_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 10), &grid);
        assert_eq!(outside, None);
    }

    #[test]
    fn test_drag_and_release_anywhere() {
        let grid = grid();
        let drag = pointer_from_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 1), &grid);
        assert_eq!(drag.map(|p| p.kind), Some(PointerKind::Move));
        let up = pointer_from_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 1), &grid);
        assert_eq!(up.map(|p| p.kind), Some(PointerKind::Up));
        let right = pointer_from_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 50, 10), &grid);
        assert_eq!(right, None);
    }
}
