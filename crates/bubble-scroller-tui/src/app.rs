use std::time::Instant;

use anyhow::Result;
use bubble_scroller_core::{
    Alphabet, AppConfig, BubbleScroller, LabeledSections, PointerEvent, SectionModel,
};
use crossterm::event::MouseEvent;
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::input::{pointer_from_mouse, Action, CellGrid};
use crate::theme::Theme;

/// Terminal application state wrapped around one scroller
pub struct App {
    pub scroller: BubbleScroller,
    pub config: AppConfig,
    pub theme: Theme,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Cell grid of the scroller widget from the last frame, if drawn yet
    pub grid: Option<CellGrid>,
    /// Labels given on the command line; `None` means the alphabet
    pub section_labels: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Result<Self> {
        let scroller = BubbleScroller::new(&config)?;
        Ok(Self {
            scroller,
            config,
            theme,
            should_quit: false,
            status_message: None,
            grid: None,
            section_labels: None,
        })
    }

    /// Replace the alphabet with custom labels, comma or whitespace separated
    pub fn with_sections(mut self, labels: &str) -> Self {
        let sections = LabeledSections::parse(labels);
        if sections.is_empty() {
            self.status_message = Some("No section labels given, using A-Z".to_string());
            return self;
        }
        self.scroller.set_section_model(Box::new(sections));
        self.section_labels = Some(labels.to_string());
        self
    }

    /// Lay the scroller out for the widget area. Only re-lays out when the
    /// area actually changed, so a steady frame does not reset the bumper.
    pub fn resize_scroller(&mut self, area: Rect) -> Result<()> {
        let grid = CellGrid::new(area, self.config.ui.cell_width, self.config.ui.cell_height);
        if self.grid == Some(grid) {
            return Ok(());
        }
        debug!(width = area.width, height = area.height, "scroller area changed");
        self.scroller.layout(grid.bounds())?;
        self.grid = Some(grid);
        Ok(())
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleDebugPath => {
                let on = self.scroller.toggle_debug_path();
                self.status_message = Some(format!(
                    "Debug path {}",
                    if on { "on" } else { "off" }
                ));
            }
            Action::ResetSections => {
                let sections: Box<dyn SectionModel> = Box::new(Alphabet);
                self.scroller.set_section_model(sections);
                self.section_labels = None;
                self.status_message = Some("Sections reset to A-Z".to_string());
                info!("sections reset to alphabet");
            }
            Action::None => {}
        }
    }

    /// Route a mouse event to the scroller. Returns whether it was consumed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Result<bool> {
        let Some(grid) = self.grid else {
            return Ok(false);
        };
        match pointer_from_mouse(mouse, &grid) {
            Some(event) => self.handle_pointer(event, now),
            None => Ok(false),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> Result<bool> {
        let handled = self.scroller.handle_pointer(event, now)?;
        if handled {
            self.status_message = None;
        }
        Ok(handled)
    }

    /// Advance the bumper animation. Returns whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        Ok(self.scroller.tick(now)?)
    }

    /// Whether the event loop should poll at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.scroller.is_animating()
    }
}
