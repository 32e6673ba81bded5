//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use crate::core::FormMode;
use crate::tui::app::{App, FormField, InputFocus};
use crate::tui::theme::Theme;

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    // Overlays, innermost last so the alert masks the form
    if app.book.is_popup_open() {
        render_contact_form(frame, app);
    }

    if let Some(alert) = &app.alert {
        render_alert_popup(frame, &alert.title, &alert.message);
    }

    if app.show_help {
        render_help_overlay(frame);
    }
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(" rolo-rs │ Contacts ({}) ", app.book.contacts().len());

    let header = Paragraph::new(title)
        .style(Theme::header())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Render the search field and the contact list
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search field
            Constraint::Min(0),    // Contact list
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    render_search_field(frame, chunks[0], app);
    render_contact_list(frame, chunks[1], app);

    let help_text = if app.focus == InputFocus::Search {
        " Type to filter by name  [Enter/Esc] Done"
    } else {
        " [a] Add  [/] Search  [j/k] Navigate  [Enter] Edit  [c] Call  [m] SMS  [q] Quit"
    };
    let help = Paragraph::new(help_text).style(Theme::muted());
    frame.render_widget(help, chunks[2]);
}

fn render_search_field(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == InputFocus::Search;
    let term = app.book.search_term();

    let text = if focused {
        Line::from(vec![
            Span::raw(format!(" {}", term)),
            Span::styled("▌", Theme::focused()),
        ])
    } else if term.is_empty() {
        Line::from(Span::styled(" Search contacts...", Theme::placeholder()))
    } else {
        Line::from(Span::raw(format!(" {}", term)))
    };

    let border_style = if focused {
        Theme::focused()
    } else {
        Theme::normal()
    };

    let search = Paragraph::new(text).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(search, area);
}

fn render_contact_list(frame: &mut Frame, area: Rect, app: &App) {
    let rows = app.book.filtered();

    let items: Vec<ListItem> = if app.book.contacts().is_empty() {
        vec![
            ListItem::new("  No contacts yet."),
            ListItem::new(""),
            ListItem::new("  Press [a] to add one."),
        ]
    } else if rows.is_empty() {
        vec![ListItem::new(format!(
            "  No contacts match '{}'",
            app.book.search_term()
        ))
        .style(Theme::muted())]
    } else {
        rows.iter()
            .enumerate()
            .map(|(row, (_, contact))| {
                let line = Line::from(vec![
                    Span::raw(format!(
                        "  {:<24} {:<16} {:<20}",
                        truncate(&contact.name, 24),
                        truncate(&contact.phone, 16),
                        truncate(&contact.description, 20),
                    )),
                    // Inactive call/SMS affordances
                    Span::styled(" ✆ ✉", Theme::muted()),
                ]);
                let item = ListItem::new(line);

                if app.focus == InputFocus::List && row == app.list_selection.selected {
                    item.style(Theme::selected())
                } else {
                    item
                }
            })
            .collect()
    };

    let title = if app.book.search_term().is_empty() {
        format!(" Contacts ({}) ", app.book.contacts().len())
    } else {
        format!(
            " Contacts ({} of {}) ",
            rows.len(),
            app.book.contacts().len()
        )
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );

    frame.render_widget(list, area);
}

/// Render the add/edit form overlay
fn render_contact_form(frame: &mut Frame, app: &App) {
    let editing = matches!(app.book.form_mode(), FormMode::Editing(_));
    let popup_area = centered_rect(frame.area(), 60, 16);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let title = if editing { " Edit Contact " } else { " Add Contact " };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Theme::header());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Description
            Constraint::Length(3), // Buttons
        ])
        .split(inner);

    render_form_input(frame, chunks[0], app, FormField::Name, "Enter name...");
    render_form_input(
        frame,
        chunks[1],
        app,
        FormField::Phone,
        "Enter phone number...",
    );
    render_form_input(
        frame,
        chunks[2],
        app,
        FormField::Description,
        "Enter contact description...",
    );

    // Button row: save, optional delete, cancel
    let button_constraints = if editing {
        vec![
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ]
    } else {
        vec![Constraint::Percentage(50), Constraint::Percentage(50)]
    };
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(button_constraints)
        .split(chunks[3]);

    let save_label = if editing {
        " Save Contact "
    } else {
        " Add Contact "
    };
    render_form_button(frame, button_chunks[0], app, FormField::Save, save_label);

    if editing {
        render_form_button(
            frame,
            button_chunks[1],
            app,
            FormField::Delete,
            " Delete Contact ",
        );
        render_form_button(frame, button_chunks[2], app, FormField::Cancel, " Cancel ");
    } else {
        render_form_button(frame, button_chunks[1], app, FormField::Cancel, " Cancel ");
    }
}

fn render_form_input(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    field: FormField,
    placeholder: &str,
) {
    let focused = app.form_focus == field;
    let contact_field = field.contact_field();
    let title = contact_field
        .map(|f| format!(" {} ", f.label()))
        .unwrap_or_default();
    let value = contact_field
        .map(|f| app.book.draft_field(f))
        .unwrap_or("");

    let text = if focused {
        Line::from(vec![
            Span::raw(format!(" {}", value)),
            Span::styled("▌", Theme::focused()),
        ])
    } else if value.is_empty() {
        Line::from(Span::styled(format!(" {}", placeholder), Theme::placeholder()))
    } else {
        Line::from(Span::raw(format!(" {}", value)))
    };

    let border_style = if focused {
        Theme::focused()
    } else {
        Theme::normal()
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

fn render_form_button(frame: &mut Frame, area: Rect, app: &App, field: FormField, label: &str) {
    let style = if app.form_focus == field {
        Theme::focused().add_modifier(Modifier::BOLD)
    } else if field == FormField::Delete {
        Style::default().fg(Theme::ERROR)
    } else {
        Theme::normal()
    };

    let button = Paragraph::new(format!("[{}]", label))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

/// Render the blocking alert popup
fn render_alert_popup(frame: &mut Frame, title: &str, message: &str) {
    let popup_area = centered_rect(frame.area(), 44, 7);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(format!("  {}", message)),
        Line::from(""),
        Line::from(Span::styled("  [Enter] OK", Theme::muted())),
    ];

    let alert = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ERROR)),
        );

    frame.render_widget(alert, popup_area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = if let Some(msg) = &app.status_message {
        format!(" {} ", msg)
    } else {
        format!(" {} contacts │ ? for help ", app.book.contacts().len())
    };

    let status = Paragraph::new(status_text)
        .style(Theme::status_bar())
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(status, area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(frame.area(), 50, 18);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let keys: &[(&str, &str)] = &[
        ("j / ↓", "Move down"),
        ("k / ↑", "Move up"),
        ("Enter", "Edit selected contact"),
        ("a / +", "Add a contact"),
        ("/", "Search by name"),
        ("Esc", "Clear filter / close form"),
        ("c", "Call (inactive)"),
        ("m", "SMS (inactive)"),
        ("Tab", "Next form field"),
        ("Ctrl+d", "Delete (edit form)"),
        ("q", "Quit"),
    ];

    let text: Vec<Line> = keys
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:10}", key), Style::default().fg(Theme::PRIMARY)),
                Span::raw(*desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Theme::focused()),
    );

    frame.render_widget(help, popup_area);
}

/// Centered popup area of at most the given size
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(area.x + x, area.y + y, width, height)
}

/// Truncate a string to max length with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long name here", 10), "a very ...");
    }

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(area, 60, 16);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 16);
        assert_eq!(popup.x, 10);
        assert_eq!(popup.y, 4);

        let small = Rect::new(0, 0, 20, 5);
        let clamped = centered_rect(small, 60, 16);
        assert!(clamped.width <= 20 && clamped.height <= 5);
    }
}
