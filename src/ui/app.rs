//! Main TUI application state and logic

use crate::catalog::snippets::{export_snippet, BuiltinSnippets, Language, SnippetBank};
use crate::engine::constants::{PAUSE_POLL, SPEED_STEP_MS, WAIT_SLICE};
use crate::engine::RunController;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Minimum gap between two presses of a run hotkey
const HOTKEY_DEBOUNCE: Duration = Duration::from_millis(200);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    List,
    Code,
    History,
}

impl FocusedPane {
    /// Move focus to the next pane (list -> code -> history)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::List => FocusedPane::Code,
            FocusedPane::Code => FocusedPane::History,
            FocusedPane::History => FocusedPane::List,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::List => FocusedPane::History,
            FocusedPane::Code => FocusedPane::List,
            FocusedPane::History => FocusedPane::Code,
        }
    }
}

/// What keystrokes currently edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    EditValue,
    EditPosition,
}

/// The main application state
pub struct App {
    /// The engine being visualized
    pub controller: RunController,

    /// Source of the code pane text
    pub snippets: BuiltinSnippets,

    /// Language of the code pane and of exports
    pub language: Language,

    /// Directory `d` exports snippets into
    pub export_dir: PathBuf,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub list_scroll: usize,
    pub code_scroll: usize,
    pub history_scroll: usize,

    /// Whether keystrokes go to an input field
    pub input_mode: InputMode,

    /// Text being typed into the value or position field
    pub edit_buffer: String,

    /// App-level message shown instead of the narration until the next action
    pub notice: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Last time the engine was ticked
    pub last_tick: Instant,

    /// Last time a run hotkey was accepted (for debouncing)
    pub last_hotkey: Instant,
}

impl App {
    /// Create a new app around `controller`, exporting snippets into `export_dir`
    pub fn new(controller: RunController, export_dir: PathBuf) -> Self {
        App {
            controller,
            snippets: BuiltinSnippets,
            language: Language::default(),
            export_dir,
            focused_pane: FocusedPane::List,
            list_scroll: 0,
            code_scroll: 0,
            history_scroll: 0,
            input_mode: InputMode::Normal,
            edit_buffer: String::new(),
            notice: None,
            should_quit: false,
            last_tick: Instant::now(),
            last_hotkey: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let now = Instant::now();
            let dt = now.duration_since(self.last_tick);
            self.last_tick = now;
            self.controller.tick(dt);

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let timeout = if self.controller.run_state().is_paused {
                PAUSE_POLL
            } else {
                WAIT_SLICE
            };
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.controller.hard_stop();
        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: List (top) | Operation (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: Code (top) | History (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[1]);

        let snapshot = self.controller.snapshot();

        super::panes::render_list_pane(
            frame,
            left_rows[0],
            snapshot.list,
            snapshot.markers,
            self.focused_pane == FocusedPane::List,
            &mut self.list_scroll,
        );

        let editing = matches!(
            self.input_mode,
            InputMode::EditValue | InputMode::EditPosition
        );
        let value_input = if self.input_mode == InputMode::EditValue {
            self.edit_buffer.as_str()
        } else {
            self.controller.value_input()
        };
        let position_input = if self.input_mode == InputMode::EditPosition {
            self.edit_buffer.as_str()
        } else {
            self.controller.position_input()
        };
        super::panes::render_info_pane(
            frame,
            left_rows[1],
            &super::panes::InfoRenderData {
                selected: snapshot.selected,
                value_input,
                position_input,
                input_mode: self.input_mode,
                speed: snapshot.speed,
                list_size: snapshot.list_size,
                progress: snapshot.progress,
                narration: snapshot.narration,
            },
        );

        super::panes::render_snippet_pane(
            frame,
            right_rows[0],
            self.snippets.snippet(snapshot.selected, self.language),
            self.language,
            self.focused_pane == FocusedPane::Code,
            &mut self.code_scroll,
        );

        super::panes::render_history_pane(
            frame,
            right_rows[1],
            snapshot.history,
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        let message = match (&self.notice, editing) {
            (_, true) => "Type a number, Enter to confirm",
            (Some(notice), false) => notice.as_str(),
            (None, false) => snapshot.narration,
        };
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            message,
            snapshot.run_state,
            snapshot.progress,
            self.input_mode,
        );
    }

    /// Accept a run hotkey unless it comes too soon after the last one
    fn debounce(&mut self) -> bool {
        if self.last_hotkey.elapsed() < HOTKEY_DEBOUNCE {
            return false;
        }
        self.last_hotkey = Instant::now();
        true
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input_mode != InputMode::Normal {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                if self.debounce() {
                    self.notice = None;
                    if let Err(err) = self.controller.toggle() {
                        self.notice = Some(err.to_string());
                    }
                }
            }
            KeyCode::Char('r') => {
                if self.debounce() {
                    self.notice = None;
                    self.controller.reset();
                }
            }
            KeyCode::Char('n') => {
                if self.debounce() {
                    self.notice = None;
                    let size = self.controller.list_size();
                    self.controller.regenerate(size);
                }
            }
            KeyCode::Tab => {
                self.notice = None;
                let next = self.controller.selected().next();
                self.controller.select_operation(next);
                self.code_scroll = 0;
            }
            KeyCode::BackTab => {
                self.notice = None;
                let prev = self.controller.selected().prev();
                self.controller.select_operation(prev);
                self.code_scroll = 0;
            }
            KeyCode::Char('l') => {
                self.language = self.language.next();
                self.code_scroll = 0;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let ms = self.controller.speed().as_millis() as u64;
                self.controller.set_speed(ms.saturating_sub(SPEED_STEP_MS));
            }
            KeyCode::Char('-') => {
                let ms = self.controller.speed().as_millis() as u64;
                self.controller.set_speed(ms + SPEED_STEP_MS);
            }
            KeyCode::Char('[') => {
                self.notice = None;
                let size = self.controller.list_size().saturating_sub(1);
                self.controller.regenerate(size);
            }
            KeyCode::Char(']') => {
                self.notice = None;
                let size = self.controller.list_size() + 1;
                self.controller.regenerate(size);
            }
            KeyCode::Char('v') => {
                if self.controller.selected().needs_value() {
                    self.edit_buffer = self.controller.value_input().to_string();
                    self.input_mode = InputMode::EditValue;
                }
            }
            KeyCode::Char('p') => {
                if self.controller.selected().needs_position() {
                    self.edit_buffer = self.controller.position_input().to_string();
                    self.input_mode = InputMode::EditPosition;
                }
            }
            KeyCode::Char('d') => self.export(),
            KeyCode::Left => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Right => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Keys while the value or position field is being edited
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let text = std::mem::take(&mut self.edit_buffer);
                match self.input_mode {
                    InputMode::EditValue => self.controller.set_value_input(text),
                    InputMode::EditPosition => self.controller.set_position_input(text),
                    InputMode::Normal => {}
                }
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                self.edit_buffer.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) if !c.is_control() && self.edit_buffer.len() < 12 => {
                self.edit_buffer.push(c);
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::List => &mut self.list_scroll,
            FocusedPane::Code => &mut self.code_scroll,
            FocusedPane::History => &mut self.history_scroll,
        }
    }

    /// Write the visible snippet to the export directory
    fn export(&mut self) {
        let result = export_snippet(
            &self.snippets,
            self.controller.selected(),
            self.language,
            &self.export_dir,
        );
        self.notice = Some(match result {
            Ok(path) => format!("Exported {}", path.display()),
            Err(err) => {
                tracing::warn!(error = %err, "snippet export failed");
                format!("Export failed: {}", err)
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::structure::ListStore;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let mut next = 40;
        let values = Box::new(move || {
            next += 1;
            next
        });
        let controller = RunController::with_list(
            SimConfig::default(),
            ListStore::from_values(&[10, 20, 30]),
            values,
        );
        App::new(controller, std::env::temp_dir())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_focus_cycles_through_panes() {
        let mut pane = FocusedPane::List;
        for _ in 0..3 {
            pane = pane.next();
        }
        assert_eq!(pane, FocusedPane::List);
        assert_eq!(FocusedPane::List.prev(), FocusedPane::History);
    }

    #[test]
    fn test_tab_selects_next_operation() {
        let mut app = app();
        let first = app.controller.selected();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.controller.selected(), first.next());
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.controller.selected(), first);
    }

    #[test]
    fn test_value_edit_commits_on_enter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.input_mode, InputMode::EditValue);
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.controller.value_input(), "42");
    }

    #[test]
    fn test_escape_discards_edit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('v'));
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.controller.value_input(), "");
    }

    #[test]
    fn test_space_starts_then_pauses() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller.run_state().is_running);

        app.last_hotkey = Instant::now() - Duration::from_secs(1);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller.run_state().is_paused);
    }

    #[test]
    fn test_speed_keys_clamp() {
        let mut app = app();
        for _ in 0..50 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.controller.speed(), Duration::from_millis(80));
        for _ in 0..50 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.controller.speed(), Duration::from_millis(900));
    }
}
