//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;

use smdcode_core::{decode, format_ohms_default, DecodeResult};

use crate::clipboard;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::prefs::UiPrefs;
use crate::styles::{ColorTheme, ThemeKind};

const APP_TITLE: &str = "SMD Resistor Decoder";
const EXAMPLES_HINT: &str = "Examples: 103  4R7  01C  1002  0R0";
const EMPTY_FIELD: &str = "—";

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// The code being typed.
    pub input: String,
    /// Last successful decode, if any.
    pub result: Option<DecodeResult>,
    /// Formatted resistance for display (or a placeholder dash).
    pub value_text: String,
    /// Scheme label for display (or a placeholder dash).
    pub scheme_text: String,
    /// Status bar message.
    pub status: String,
    /// Whether the status message is an error.
    pub status_is_error: bool,
    /// Decode on every keystroke.
    pub live: bool,
    /// Active color theme.
    pub theme: ThemeKind,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
}

impl TuiApp {
    /// Create a new TUI app from persisted preferences.
    #[must_use]
    pub fn new(prefs: &UiPrefs) -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            result: None,
            value_text: EMPTY_FIELD.to_string(),
            scheme_text: EMPTY_FIELD.to_string(),
            status: "Ready".to_string(),
            status_is_error: false,
            live: prefs.live,
            theme: prefs.theme,
            terminal_width: prefs.cols,
            terminal_height: prefs.rows,
        }
    }

    /// Snapshot the current preferences for persistence on exit.
    #[must_use]
    pub fn prefs(&self) -> UiPrefs {
        UiPrefs {
            theme: self.theme,
            live: self.live,
            cols: self.terminal_width,
            rows: self.terminal_height,
        }
    }

    /// Update the model with one message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Key(action) => self.handle_key_action(action),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::Input(c) => {
                self.input.push(c);
                if self.live {
                    self.decode_current();
                }
            }
            KeyAction::Backspace => {
                self.input.pop();
                if self.live {
                    self.decode_current();
                }
            }
            KeyAction::Clear => {
                self.input.clear();
                self.clear_result();
                self.set_status("Ready", false);
            }
            KeyAction::Submit => {
                self.decode_current();
            }
            KeyAction::ToggleLive => {
                self.live = !self.live;
                let msg = if self.live {
                    "Live decode on"
                } else {
                    "Live decode off"
                };
                self.set_status(msg, false);
                if self.live {
                    self.decode_current();
                }
            }
            KeyAction::ToggleTheme => {
                self.theme = self.theme.toggle();
                self.set_status(&format!("Theme: {}", self.theme.as_str()), false);
            }
            KeyAction::Copy => self.copy_result(),
            KeyAction::None => {}
        }
    }

    /// Decode whatever is currently in the input buffer.
    fn decode_current(&mut self) {
        if self.input.trim().is_empty() {
            self.clear_result();
            self.set_status("Please enter a code.", true);
            return;
        }
        match decode(&self.input) {
            Ok(result) => match format_ohms_default(result.ohms) {
                Ok(formatted) => {
                    self.value_text = formatted;
                    self.scheme_text = result.scheme.to_string();
                    self.result = Some(result);
                    self.set_status("Decoded successfully.", false);
                }
                Err(e) => {
                    self.clear_result();
                    self.set_status(&e.to_string(), true);
                }
            },
            Err(e) => {
                self.clear_result();
                self.set_status(&e.to_string(), true);
            }
        }
    }

    /// Copy the formatted result to the system clipboard.
    fn copy_result(&mut self) {
        if self.result.is_none() {
            self.set_status("Nothing to copy.", true);
            return;
        }
        match clipboard::copy(&self.value_text) {
            Ok(()) => self.set_status("Copied to clipboard", false),
            Err(e) => self.set_status(&format!("Copy failed: {e}"), true),
        }
    }

    fn clear_result(&mut self) {
        self.result = None;
        self.value_text = EMPTY_FIELD.to_string();
        self.scheme_text = EMPTY_FIELD.to_string();
    }

    fn set_status(&mut self, msg: &str, is_error: bool) {
        self.status = msg.to_string();
        self.status_is_error = is_error;
    }

    /// Compute the vertical layout.
    ///
    /// Returns (header, input, result, examples, status) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // input
                Constraint::Min(4),    // result
                Constraint::Length(1), // examples hint
                Constraint::Length(2), // status bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2], chunks[3], chunks[4])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let theme = ColorTheme::for_kind(self.theme);
        let (header_area, input_area, result_area, examples_area, status_area) =
            Self::compute_layout(frame.area());

        // Header
        let live_label = if self.live { "live" } else { "manual" };
        let header = Paragraph::new(Line::from(vec![
            Span::styled(APP_TITLE, theme.header_style()),
            Span::styled(
                format!("  [{live_label} | {} theme]", self.theme.as_str()),
                theme.muted_style(),
            ),
        ]))
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, header_area);

        // Input panel with a block cursor
        let input = Paragraph::new(Line::from(vec![
            Span::styled(self.input.as_str(), theme.text_style()),
            Span::styled("█", theme.muted_style()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Enter code "),
        );
        frame.render_widget(input, input_area);

        // Result panel
        let result_lines = vec![
            Line::from(vec![
                Span::styled("Value:  ", theme.muted_style()),
                Span::styled(self.value_text.as_str(), theme.value_style()),
            ]),
            Line::from(vec![
                Span::styled("Scheme: ", theme.muted_style()),
                Span::styled(self.scheme_text.as_str(), theme.text_style()),
            ]),
        ];
        let result = Paragraph::new(result_lines)
            .block(Block::default().borders(Borders::ALL).title(" Result "));
        frame.render_widget(result, result_area);

        // Examples hint
        let examples = Paragraph::new(Span::styled(EXAMPLES_HINT, theme.muted_style()));
        frame.render_widget(examples, examples_area);

        // Status bar + key hints
        let status = Paragraph::new(vec![
            Line::from(Span::styled(
                self.status.as_str(),
                theme.status_style(self.status_is_error),
            )),
            Line::from(Span::styled(
                "Enter: decode | ^L: live | ^T: theme | ^Y: copy | ^U: clear | Esc: quit",
                theme.muted_style(),
            )),
        ])
        .block(Block::default().borders(Borders::TOP));
        frame.render_widget(status, status_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events,
    /// update, render), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        self.handle_message(TuiMessage::Key(map_key(key_event)));
                    }
                    Event::Resize(w, h) => {
                        self.handle_message(TuiMessage::Resize {
                            width: w,
                            height: h,
                        });
                    }
                    _ => {}
                }
            } else {
                self.handle_message(TuiMessage::Tick);
            }
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn make_app() -> TuiApp {
        TuiApp::new(&UiPrefs::default())
    }

    fn type_code(app: &mut TuiApp, code: &str) {
        for c in code.chars() {
            app.handle_key_action(KeyAction::Input(c));
        }
    }

    #[test]
    fn initial_state() {
        let app = make_app();
        assert!(!app.should_quit);
        assert!(app.input.is_empty());
        assert!(app.result.is_none());
        assert_eq!(app.value_text, EMPTY_FIELD);
        assert_eq!(app.scheme_text, EMPTY_FIELD);
        assert!(app.live);
        assert_eq!(app.theme, ThemeKind::Light);
    }

    #[test]
    fn typing_with_live_decode() {
        let mut app = make_app();
        type_code(&mut app, "103");
        assert_eq!(app.input, "103");
        assert_eq!(app.value_text, "10kΩ");
        assert_eq!(app.scheme_text, "3-digit");
        assert!(!app.status_is_error);
    }

    #[test]
    fn live_decode_updates_per_keystroke() {
        let mut app = make_app();
        type_code(&mut app, "4R");
        assert_eq!(app.value_text, "4Ω");
        app.handle_key_action(KeyAction::Input('7'));
        assert_eq!(app.value_text, "4.7Ω");
    }

    #[test]
    fn manual_mode_waits_for_submit() {
        let prefs = UiPrefs {
            live: false,
            ..UiPrefs::default()
        };
        let mut app = TuiApp::new(&prefs);

        type_code(&mut app, "01C");
        assert_eq!(app.value_text, EMPTY_FIELD);

        app.handle_key_action(KeyAction::Submit);
        assert_eq!(app.value_text, "100Ω");
        assert_eq!(app.scheme_text, "EIA-96");
    }

    #[test]
    fn invalid_code_sets_error_status() {
        let mut app = make_app();
        type_code(&mut app, "zz");
        assert_eq!(app.value_text, EMPTY_FIELD);
        assert_eq!(app.scheme_text, EMPTY_FIELD);
        assert!(app.status_is_error);
    }

    #[test]
    fn submit_empty_input_reports_error() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Submit);
        assert!(app.status_is_error);
        assert!(app.status.contains("enter a code"));
    }

    #[test]
    fn backspace_edits_and_redecodes() {
        let mut app = make_app();
        type_code(&mut app, "1033");
        assert_eq!(app.scheme_text, "4-digit");
        app.handle_key_action(KeyAction::Backspace);
        assert_eq!(app.input, "103");
        assert_eq!(app.scheme_text, "3-digit");
    }

    #[test]
    fn clear_resets_input_and_result() {
        let mut app = make_app();
        type_code(&mut app, "103");
        app.handle_key_action(KeyAction::Clear);
        assert!(app.input.is_empty());
        assert!(app.result.is_none());
        assert_eq!(app.value_text, EMPTY_FIELD);
        assert!(!app.status_is_error);
    }

    #[test]
    fn toggle_live() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::ToggleLive);
        assert!(!app.live);
        assert!(app.status.contains("off"));
        app.handle_key_action(KeyAction::ToggleLive);
        assert!(app.live);
    }

    #[test]
    fn toggle_theme() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::ToggleTheme);
        assert_eq!(app.theme, ThemeKind::Dark);
        assert!(app.status.contains("dark"));
        app.handle_key_action(KeyAction::ToggleTheme);
        assert_eq!(app.theme, ThemeKind::Light);
    }

    #[test]
    fn copy_without_result_is_an_error() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Copy);
        assert!(app.status_is_error);
        assert!(app.status.contains("Nothing to copy"));
    }

    #[test]
    fn quit_action() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn resize_updates_geometry() {
        let mut app = make_app();
        app.handle_message(TuiMessage::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!(app.terminal_width, 120);
        assert_eq!(app.terminal_height, 40);
    }

    #[test]
    fn prefs_round_trip_through_app() {
        let prefs = UiPrefs {
            theme: ThemeKind::Dark,
            live: false,
            cols: 100,
            rows: 30,
        };
        let app = TuiApp::new(&prefs);
        assert_eq!(app.prefs(), prefs);
    }

    #[test]
    fn prefs_capture_toggles() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::ToggleTheme);
        app.handle_key_action(KeyAction::ToggleLive);
        let prefs = app.prefs();
        assert_eq!(prefs.theme, ThemeKind::Dark);
        assert!(!prefs.live);
    }

    #[test]
    fn layout_computation() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, input, result, examples, status) = TuiApp::compute_layout(area);
        assert_eq!(header.y, 0);
        assert_eq!(header.height, 3);
        assert_eq!(input.height, 3);
        assert!(result.height >= 4);
        assert_eq!(examples.height, 1);
        assert_eq!(status.height, 2);
        assert_eq!(
            header.height + input.height + result.height + examples.height + status.height,
            area.height
        );
    }

    #[test]
    fn render_does_not_panic() {
        let app = make_app();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }

    #[test]
    fn render_shows_decoded_value() {
        let mut app = make_app();
        type_code(&mut app, "103");
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal.draw(|frame| app.render(frame)).unwrap();

        let content: String = buf
            .buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(content.contains("10kΩ"));
        assert!(content.contains("3-digit"));
    }

    #[test]
    fn render_small_area_does_not_panic() {
        let app = make_app();
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }
}
