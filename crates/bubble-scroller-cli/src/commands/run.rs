use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use bubble_scroller_core::AppConfig;
use bubble_scroller_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    load_theme,
    widgets::{AppLayout, InfoPanelWidget, ScrollerWidget, StatusBarWidget},
};

type Backend = CrosstermBackend<io::Stdout>;

pub fn run(config: AppConfig, sections: Option<&str>) -> Result<()> {
    // Load theme from config
    let theme = load_theme(&config.ui.theme);
    let event_handler =
        EventHandler::with_animation_tick(config.ui.tick_rate_ms, config.ui.animation_tick_duration());

    // Create app state before touching the terminal so config errors print normally
    let mut app = App::new(config, theme)?;
    if let Some(labels) = sections {
        app = app.with_sections(labels);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Bubble Scroller"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(sections = app.scroller.state().section_count(), "tui started");
    let result = event_loop(&mut terminal, &mut app, &event_handler);
    if let Err(e) = &result {
        error!(error = %e, "tui stopped on error");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        // Lay the scroller out for the current frame before drawing it
        let size = terminal.size()?;
        let layout = AppLayout::split(ratatui::layout::Rect::new(0, 0, size.width, size.height));
        app.resize_scroller(ScrollerWidget::inner(layout.scroller))?;

        terminal.draw(|frame| {
            ScrollerWidget::render(frame, layout.scroller, app);
            InfoPanelWidget::render(frame, layout.panel, app);
            StatusBarWidget::render(frame, layout.status, app);
        })?;

        // Poll at the animation frame rate while the bumper is moving
        if let Some(event) = event_handler.next(app.needs_fast_update())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    if action != Action::None {
                        app.handle_action(action);
                    }
                }
                AppEvent::Mouse(mouse) => {
                    app.handle_mouse(mouse, Instant::now())?;
                }
                // The next frame picks the new size up from the terminal
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }
        app.tick(Instant::now())?;

        if app.should_quit {
            return Ok(());
        }
    }
}
