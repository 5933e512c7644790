use bubble_scroller_core::TrackingPhase;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Side panel showing the focused section and the bumper geometry
pub struct InfoPanelWidget;

impl InfoPanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(" Bumper ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey0))
            .style(Style::default().bg(theme.bg0));

        let state = app.scroller.state();
        let center = state.bumper_center();
        let hit = state.intersection();

        let label_style = Style::default().fg(theme.grey2);
        let value_style = Style::default().fg(theme.fg0);
        let row = |name: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{name:<10}"), label_style),
                Span::styled(value, value_style),
            ])
        };

        let focus = match app.scroller.focused_label() {
            Some(label) => Span::styled(
                label.to_string(),
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("-", Style::default().fg(theme.grey0)),
        };

        let phase = match app.scroller.phase() {
            TrackingPhase::Idle => "idle",
            TrackingPhase::Tracking => "tracking",
        };

        let span = if hit.has_bulge() {
            format!("{:.1} .. {:.1}", hit.y_low, hit.y_high)
        } else {
            "none".to_string()
        };

        let lines = vec![
            Line::from(vec![Span::styled(format!("{:<10}", "Focus"), label_style), focus]),
            Line::from(""),
            row("Phase", phase.to_string()),
            row(
                "Animating",
                if app.scroller.is_animating() { "yes" } else { "no" }.to_string(),
            ),
            row("Center", format!("{:.1}, {:.1}", center.x, center.y)),
            row("Baseline", format!("{:.1}", state.baseline())),
            row("Bulge", span),
            row("Sections", state.section_count().to_string()),
            row(
                "Path",
                if app.scroller.debug_path() { "shown" } else { "hidden" }.to_string(),
            ),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
