//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;

use crate::core::{Config, ContactBook, ContactField, FormMode};
use crate::error::{Result, RoloError};
use crate::tui::event::{is_back_key, is_quit_key, AppEvent, EventHandler};
use crate::tui::ui;

/// Ticks a transient status message stays visible (~5s at the default rate)
const STATUS_MESSAGE_TICKS: u64 = 20;

/// List selection state
#[derive(Debug, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total items in the list
    pub total: usize,
}

impl ListState {
    pub fn new(total: usize) -> Self {
        Self { selected: 0, total }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + 1) % self.total;
        }
    }

    pub fn previous(&mut self) {
        if self.total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        }
    }
}

/// Which part of the main screen receives plain key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// Keys navigate the contact list
    List,
    /// Keys type into the search field
    Search,
}

/// Focusable elements of the contact form overlay, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Description,
    Save,
    /// Only present in edit mode
    Delete,
    Cancel,
}

impl FormField {
    /// The draft field behind this form element, if it is a text input
    pub fn contact_field(&self) -> Option<ContactField> {
        match self {
            FormField::Name => Some(ContactField::Name),
            FormField::Phone => Some(ContactField::Phone),
            FormField::Description => Some(ContactField::Description),
            _ => None,
        }
    }

    fn tab_order(editing: bool) -> &'static [FormField] {
        if editing {
            &[
                FormField::Name,
                FormField::Phone,
                FormField::Description,
                FormField::Save,
                FormField::Delete,
                FormField::Cancel,
            ]
        } else {
            &[
                FormField::Name,
                FormField::Phone,
                FormField::Description,
                FormField::Save,
                FormField::Cancel,
            ]
        }
    }

    fn next(self, editing: bool) -> FormField {
        let order = Self::tab_order(editing);
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(pos + 1) % order.len()]
    }

    fn previous(self, editing: bool) -> FormField {
        let order = Self::tab_order(editing);
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(pos + order.len() - 1) % order.len()]
    }
}

/// Blocking alert popup that must be acknowledged before any other input
#[derive(Debug, Clone)]
pub struct AlertPopup {
    /// Title of the alert (e.g., "Missing Information")
    pub title: String,
    /// The full message to display
    pub message: String,
}

/// Main TUI application
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Contact book session state
    pub book: ContactBook,
    /// Where plain keys go while the form overlay is closed
    pub focus: InputFocus,
    /// Selection within the filtered contact list
    pub list_selection: ListState,
    /// Focused element of the form overlay
    pub form_focus: FormField,
    /// Blocking alert (validation failure)
    pub alert: Option<AlertPopup>,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Transient status message
    pub status_message: Option<String>,
    /// Tick at which the status message was set
    status_message_tick: u64,
    /// Tick counter driving status message expiry
    pub tick_counter: u64,
    /// Event loop tick interval
    tick_rate: Duration,
}

impl App {
    /// Create a new app instance from configuration
    pub fn new(config: &Config) -> Self {
        let book = ContactBook::new(config.seeds.clone());
        let total = book.filtered().len();

        Self {
            running: true,
            book,
            focus: InputFocus::List,
            list_selection: ListState::new(total),
            form_focus: FormField::Name,
            alert: None,
            show_help: false,
            status_message: None,
            status_message_tick: 0,
            tick_counter: 0,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| RoloError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| RoloError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| RoloError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| RoloError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| RoloError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| RoloError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(self.tick_rate);

        // Main event loop
        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| RoloError::Terminal(e.to_string()))?;

            if let Some(event) = events.next().await {
                match event {
                    AppEvent::Key(key) => self.handle_key_event(key),
                    AppEvent::Resize(_, _) => {
                        // Terminal resize is handled automatically by ratatui
                    }
                    AppEvent::Tick => self.handle_tick(),
                }
            }
        }

        Self::restore_terminal(&mut terminal)?;
        Ok(())
    }

    fn handle_tick(&mut self) {
        self.tick_counter = self.tick_counter.wrapping_add(1);

        // Expire transient status messages
        if self.status_message.is_some()
            && self.tick_counter.wrapping_sub(self.status_message_tick) >= STATUS_MESSAGE_TICKS
        {
            self.status_message = None;
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_message_tick = self.tick_counter;
    }

    /// Keep the list selection in step with the filtered view
    fn sync_list_selection(&mut self) {
        let total = self.book.filtered().len();
        self.list_selection.total = total;
        if self.list_selection.selected >= total {
            self.list_selection.selected = total.saturating_sub(1);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C always quits, regardless of input mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        // The alert blocks everything: only acknowledgment keys get through
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                self.alert = None;
            }
            return;
        }

        // Form overlay swallows all input while open
        if self.book.is_popup_open() {
            self.handle_form_key(key);
            return;
        }

        // Search field input mode
        if self.focus == InputFocus::Search {
            self.handle_search_key(key);
            return;
        }

        // Global key handlers
        if key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        if is_quit_key(&key) {
            self.quit();
            return;
        }

        if is_back_key(&key) {
            // Esc clears an active filter before anything else
            if !self.book.search_term().is_empty() {
                self.book.set_search_term("");
                self.sync_list_selection();
            }
            return;
        }

        self.handle_list_key(key);
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.list_selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.list_selection.previous(),
            KeyCode::Enter => self.open_selected_for_edit(),
            KeyCode::Char('a') | KeyCode::Char('+') => {
                self.book.open_for_add();
                self.form_focus = FormField::Name;
            }
            KeyCode::Char('/') => {
                self.focus = InputFocus::Search;
            }
            // Call/SMS stubs: consumed here so they can never reach the
            // row-activation path above. Calling and texting are inactive.
            KeyCode::Char('c') | KeyCode::Char('m') => {}
            _ => {}
        }
    }

    /// Open the edit form for the selected row, mapped back to its true
    /// index in the unfiltered book.
    fn open_selected_for_edit(&mut self) {
        let index = self
            .book
            .filtered()
            .get(self.list_selection.selected)
            .map(|(i, _)| *i);
        if let Some(index) = index {
            self.book.open_for_edit(index);
            self.form_focus = FormField::Name;
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.focus = InputFocus::List;
            }
            KeyCode::Backspace => {
                let mut term = self.book.search_term().to_string();
                term.pop();
                self.book.set_search_term(term);
                self.sync_list_selection();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut term = self.book.search_term().to_string();
                term.push(c);
                self.book.set_search_term(term);
                self.sync_list_selection();
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let editing = matches!(self.book.form_mode(), FormMode::Editing(_));

        match key.code {
            KeyCode::Esc => {
                self.book.close_popup();
            }
            KeyCode::Tab => {
                self.form_focus = self.form_focus.next(editing);
            }
            KeyCode::BackTab => {
                self.form_focus = self.form_focus.previous(editing);
            }
            KeyCode::Enter => match self.form_focus {
                FormField::Delete => self.delete_from_form(),
                FormField::Cancel => self.book.close_popup(),
                // Text fields and the save button all submit
                _ => self.submit_form(),
            },
            // Ctrl+D deletes from anywhere in the edit form
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if editing {
                    self.delete_from_form();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.form_focus.contact_field() {
                    let mut value = self.book.draft_field(field).to_string();
                    value.pop();
                    self.book.set_draft_field(field, value);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.form_focus.contact_field() {
                    let mut value = self.book.draft_field(field).to_string();
                    value.push(c);
                    self.book.set_draft_field(field, value);
                }
            }
            _ => {}
        }
    }

    /// Submit the draft; a validation failure raises the blocking alert and
    /// leaves the form open.
    fn submit_form(&mut self) {
        let editing = matches!(self.book.form_mode(), FormMode::Editing(_));
        match self.book.submit_draft() {
            Ok(()) => {
                self.sync_list_selection();
                self.set_status(if editing {
                    "Contact saved"
                } else {
                    "Contact added"
                });
            }
            Err(e) => {
                self.alert = Some(AlertPopup {
                    title: "Missing Information".to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    fn delete_from_form(&mut self) {
        self.book.delete_current_edit();
        self.sync_list_selection();
        self.set_status("Contact deleted");
    }

    /// Quit the application
    pub fn quit(&mut self) {
        tracing::debug!("quitting");
        self.running = false;
    }
}
