//! Student list screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use crate::roster::FooterState;
use crate::tui::app::App;
use crate::tui::types::Screen;
use super::helpers::footer_label;

/// Renders the screen
pub fn render_student_list(f: &mut Frame, app: &App) {
    let size = f.size();
    let view = app.roster_view();
    let screen = &app.list_screen;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(5),     // Student list
            Constraint::Length(3),  // Footer / status
            Constraint::Length(3),  // Help text
        ])
        .split(size);

    // Title
    let label = Screen::StudentList.label();
    let title_text = if view.refreshing {
        format!("{} ({}) - refreshing…", label, view.students.len())
    } else {
        format!("{} ({})", label, view.students.len())
    };
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Student list
    if view.students.is_empty() {
        let empty_msg = Paragraph::new("No students loaded")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Roster"));
        f.render_widget(empty_msg, chunks[1]);
    } else {
        let items: Vec<ListItem> = view
            .students
            .iter()
            .map(|student| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{:>9}] ", student.avatar),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::styled(
                        student.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(student.email.clone(), Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Roster"))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("→ ");

        let mut state = ListState::default();
        state.select(Some(screen.selected_index.min(view.students.len() - 1)));
        f.render_stateful_widget(list, chunks[1], &mut state);
    }

    // Footer: loading state wins over the status message
    let footer_state = view.footer();
    let (footer_text, footer_style) = match footer_state {
        FooterState::Loading => (footer_label(footer_state).to_string(), Style::default().fg(Color::Yellow)),
        FooterState::Exhausted => (footer_label(footer_state).to_string(), Style::default().fg(Color::DarkGray)),
        FooterState::MoreAvailable => (
            screen.status_message.clone().unwrap_or_default(),
            Style::default().fg(Color::Green),
        ),
    };
    let footer = Paragraph::new(footer_text)
        .style(footer_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);

    // Help text
    let help = Paragraph::new(Screen::StudentList.help())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
