mod info_panel;
mod scroller;
mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use info_panel::InfoPanelWidget;
pub use scroller::{CanvasSink, Label, ScrollerWidget, Stroke};
pub use status_bar::StatusBarWidget;

/// Width of the side panel in columns
const PANEL_WIDTH: u16 = 28;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub scroller: Rect,
    pub panel: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(PANEL_WIDTH)])
            .split(rows[0]);

        Self {
            scroller: columns[0],
            panel: columns[1],
            status: rows[1],
        }
    }
}
