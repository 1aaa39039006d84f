//! Student detail screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use crate::tui::app::App;
use crate::tui::types::Screen;
use super::helpers::section_header;

/// Renders the screen
pub fn render_student_detail(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.detail_screen {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Length(3),  // Search input
                Constraint::Min(5),     // Sections
                Constraint::Length(3),  // Help text
            ])
            .split(size);

        // Header
        let header = Paragraph::new(screen.title().to_string())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(screen.student_id.clone()));
        f.render_widget(header, chunks[0]);

        // Search input (placeholder when empty)
        let query = screen.directory.query();
        let input = if query.is_empty() {
            Paragraph::new("Search courses").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(query.to_string()).style(Style::default().fg(Color::Yellow))
        };
        f.render_widget(input.block(Block::default().borders(Borders::ALL).title("Search")), chunks[1]);

        // Sections
        let sections = screen.directory.sections();
        if sections.is_empty() {
            let empty_msg = Paragraph::new("No courses match your search")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Courses"));
            f.render_widget(empty_msg, chunks[2]);
        } else {
            let mut items: Vec<ListItem> = Vec::new();
            for section in sections {
                items.push(ListItem::new(Line::from(Span::styled(
                    section_header(section.category),
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ))));
                for course in &section.courses {
                    items.push(ListItem::new(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(course.title, Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw("  "),
                        Span::styled(course.duration, Style::default().fg(Color::Gray)),
                    ])));
                }
                items.push(ListItem::new(Line::from("")));
            }

            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Courses ({})", screen.directory.match_count())),
            );
            f.render_widget(list, chunks[2]);
        }

        // Help text
        let help = Paragraph::new(Screen::StudentDetail.help())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}
