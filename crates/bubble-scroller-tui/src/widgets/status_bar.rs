use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const HELP_HINT: &str = " drag:scroll d:path r:reset q:quit ";

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn status_text(app: &App) -> String {
        if let Some(msg) = &app.status_message {
            return format!(" {msg}");
        }

        let mode = if app.scroller.is_animating() {
            "ANIMATING"
        } else {
            "READY"
        };
        let sections = match &app.section_labels {
            Some(_) => "custom",
            None => "A-Z",
        };
        format!(
            " {} | Sections: {} ({}) | Focus: {}",
            mode,
            app.scroller.state().section_count(),
            sections,
            app.scroller.focused_label().unwrap_or("-"),
        )
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let status_text = Self::status_text(app);
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + HELP_HINT.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(HELP_HINT, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use bubble_scroller_core::AppConfig;

    #[test]
    fn test_status_text() {
        let mut app = App::new(AppConfig::default(), Theme::dark()).unwrap();
        assert_eq!(
            StatusBarWidget::status_text(&app),
            " READY | Sections: 26 (A-Z) | Focus: -"
        );
        app.status_message = Some("Debug path on".to_string());
        assert_eq!(StatusBarWidget::status_text(&app), " Debug path on");
    }
}
