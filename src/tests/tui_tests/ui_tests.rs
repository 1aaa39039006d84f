// UI Tests - Testing UI helper functions and screen rendering

use super::app_tests::helpers::create_test_app as create_app;
use crate::roster::FooterState;
use crate::tui::ui::{footer_label, section_header, ui};
use crate::tui::App;
use ratatui::{backend::TestBackend, Terminal};

fn render(app: &App) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).expect("Failed to create terminal");
    terminal.draw(|f| ui(f, app)).expect("Failed to draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_footer_labels() {
    assert_eq!(footer_label(FooterState::Loading), "Loading more…");
    assert_eq!(footer_label(FooterState::Exhausted), "No more students available");
    assert_eq!(footer_label(FooterState::MoreAvailable), "");
}

#[test]
fn test_section_header_is_uppercase() {
    assert_eq!(section_header("Programming"), "PROGRAMMING");
    assert_eq!(section_header("Math"), "MATH");
}

#[test]
fn test_render_student_list() {
    let app = create_app();
    let screen = render(&app);

    assert!(screen.contains("Students (10)"));
    assert!(screen.contains("Student 1"));
    assert!(screen.contains("student1@example.edu"));
    assert!(screen.contains("meo1.png"));
    assert!(!screen.contains("No more students available"));
    assert!(screen.contains("Loaded 10 students"));
}

#[test]
fn test_render_exhausted_footer() {
    let mut app = create_app();
    while app.trigger_load_more() {
        app.wait_for_background();
    }
    app.wait_for_background();

    let screen = render(&app);
    assert!(screen.contains("Students (50)"));
    assert!(screen.contains("No more students available"));
}

#[test]
fn test_render_student_detail() {
    let mut app = create_app();
    app.next();
    app.open_selected_student();

    let screen = render(&app);
    assert!(screen.contains("Student 2"));
    assert!(screen.contains("Search courses"));
    assert!(screen.contains("PROGRAMMING"));
    assert!(screen.contains("DESIGN"));
    assert!(screen.contains("MATH"));
    assert!(screen.contains("Advanced React Native"));
    assert!(screen.contains("8 weeks"));
}

#[test]
fn test_render_student_detail_filtered() {
    let mut app = create_app();
    app.open_selected_student();
    if let Some(detail) = &mut app.detail_screen {
        detail.directory.set_query("react");
    }

    let screen = render(&app);
    assert!(screen.contains("PROGRAMMING"));
    assert!(!screen.contains("MATH"));
    assert!(!screen.contains("Intro to JavaScript"));
    assert!(screen.contains("Courses (1)"));
}

#[test]
fn test_render_student_detail_no_matches() {
    let mut app = create_app();
    app.open_selected_student();
    if let Some(detail) = &mut app.detail_screen {
        detail.directory.set_query("nothing matches this");
    }

    let screen = render(&app);
    assert!(screen.contains("No courses match your search"));
}
