//! TUI application main loop.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lumiq_core::catalog;
use lumiq_core::picker::PickerController;
use lumiq_core::storage::FileStore;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use super::action::Action;
use super::components::{swatch_spans, DarkToggle, HelpOverlay, StatusBar, ThemeMenu, Trigger};
use super::event::{map_key_event, map_mouse_event};
use super::layout::{Hit, PickerLayout};
use super::theme::Palette;

/// How long to wait for input before redrawing. Keeps announcements
/// expiring on time.
const TICK_RATE: Duration = Duration::from_millis(100);

/// The interactive picker.
pub struct App {
    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Mounted picker controller
    picker: PickerController<FileStore>,
    /// Layout from the last draw, used for hit testing
    layout: Option<PickerLayout>,
    /// Whether the help overlay is showing
    help_visible: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Create the application and take over the terminal.
    pub fn new(picker: PickerController<FileStore>) -> Result<Self> {
        enable_raw_mode()?;
        let terminal = restore_on_error(Self::setup_terminal(), || {
            let mut stdout = io::stdout();
            let _ = stdout.execute(DisableMouseCapture);
            let _ = stdout.execute(LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;

        Ok(Self {
            terminal,
            picker,
            layout: None,
            help_visible: false,
            should_quit: false,
        })
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        Ok(Terminal::new(backend)?)
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            if event::poll(TICK_RATE)? {
                let event = event::read()?;
                self.handle_event(&event);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Borrow the picker controller.
    pub fn picker(&self) -> &PickerController<FileStore> {
        &self.picker
    }

    /// Draw the UI.
    fn draw(&mut self) -> Result<()> {
        let picker = &self.picker;
        let help_visible = self.help_visible;
        let mut computed = None;

        // presentation follows the markers, like any other theme consumer
        let palette = Palette::from_markers(&picker.applicator().board().snapshot());

        self.terminal.draw(|frame| {
            let size = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(palette.background)),
                size,
            );

            let layout = PickerLayout::compute(
                size,
                picker.is_open(),
                picker.shows_dark_mode(),
                catalog::list_themes().len(),
            );

            Self::render_header(frame, layout.header, &palette);
            Self::render_preview(frame, layout.preview, picker, &palette);

            Trigger::render(frame, layout.trigger, picker, &palette);
            if let Some(area) = layout.dark_toggle {
                DarkToggle::render(frame, area, picker.dark_mode(), &palette);
            }

            if let Some(area) = layout.menu {
                ThemeMenu::render(frame, area, picker, &palette);
            }

            StatusBar::render(frame, layout.status, picker, &palette);

            if help_visible {
                HelpOverlay::render(frame, size, picker.shows_dark_mode(), &palette);
            }

            computed = Some(layout);
        })?;

        self.layout = computed;
        Ok(())
    }

    /// Render the header bar.
    fn render_header(frame: &mut Frame, area: Rect, palette: &Palette) {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(" Lumiq v{version} ");

        let header = Paragraph::new(Span::styled(
            title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));

        frame.render_widget(header, area);
    }

    /// Render a sample of the active theme.
    fn render_preview(
        frame: &mut Frame,
        area: Rect,
        picker: &PickerController<FileStore>,
        palette: &Palette,
    ) {
        let record = picker.current_theme();
        let markers = picker
            .applicator()
            .board()
            .attributes()
            .into_iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ");

        let mut swatch = vec![Span::raw("  ")];
        swatch.extend(swatch_spans(record));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} {}", record.emoji, record.name),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                record.tagline,
                Style::default().fg(palette.text_secondary),
            )),
            Line::from(""),
            Line::from(swatch),
            Line::from(""),
            Line::from(vec![
                Span::styled("Best for: ", Style::default().fg(palette.text_muted)),
                Span::styled(record.best_for, Style::default().fg(palette.text_primary)),
            ]),
            Line::from(vec![
                Span::styled("Markers:  ", Style::default().fg(palette.text_muted)),
                Span::styled(markers, Style::default().fg(palette.accent)),
            ]),
            Line::from(vec![
                Span::styled("Palette:  ", Style::default().fg(palette.text_muted)),
                Span::styled(palette.name.clone(), Style::default().fg(palette.text_primary)),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }

    /// Handle a terminal event.
    fn handle_event(&mut self, event: &Event) {
        let action = match event {
            Event::Key(key) => map_key_event(*key, self.help_visible, self.picker.is_open()),
            Event::Mouse(mouse) => map_mouse_event(*mouse),
            _ => Action::None,
        };
        self.handle_action(action);
    }

    /// Apply an action to the picker.
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::Picker(key) => {
                if !self.help_visible {
                    self.picker.handle_key(key);
                }
            }
            Action::SelectIndex(index) => {
                if let Some(record) = catalog::list_themes().get(index) {
                    self.picker.select(record.id);
                }
            }
            Action::Click { column, row } => self.handle_click(column, row),
            Action::None => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.help_visible {
            self.help_visible = false;
            return;
        }

        let Some(layout) = self.layout else {
            return;
        };

        match layout.hit_test(column, row) {
            Hit::Trigger => self.picker.toggle(),
            Hit::DarkToggle => self.picker.toggle_dark_mode(),
            Hit::MenuItem(index) => self.handle_action(Action::SelectIndex(index)),
            Hit::Menu => {}
            Hit::Outside => self.picker.dismiss(),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = self.terminal.backend_mut().execute(LeaveAlternateScreen);
        let _ = self.terminal.backend_mut().execute(DisableMouseCapture);
        let _ = self.terminal.show_cursor();
    }
}

/// Run `restore` if terminal setup failed. `App` only exists after setup
/// succeeds, so its `Drop` cannot clean up a partial setup.
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> =
            restore_on_error(Err(anyhow::anyhow!("no tty")), || restored.set(true));

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = restore_on_error(Ok(7), || restored.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
