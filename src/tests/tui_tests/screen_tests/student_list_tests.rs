// StudentListScreen Tests - Testing list navigation and status

use crate::tui::screens::StudentListScreen;
use chrono::{Local, TimeZone};

#[test]
fn test_student_list_screen_creation() {
    let screen = StudentListScreen::new();

    assert_eq!(screen.selected_index, 0, "Should start at index 0");
    assert!(screen.status_message.is_none());
    assert!(screen.last_refreshed.is_none());
}

#[test]
fn test_student_list_screen_navigation() {
    let mut screen = StudentListScreen::new();

    screen.next(3);
    screen.next(3);
    assert_eq!(screen.selected_index, 2);

    // Stops at the end instead of wrapping
    screen.next(3);
    assert_eq!(screen.selected_index, 2);

    screen.previous();
    assert_eq!(screen.selected_index, 1);

    // Empty list leaves selection alone
    screen.next(0);
    assert_eq!(screen.selected_index, 1);
}

#[test]
fn test_student_list_screen_clamp() {
    let mut screen = StudentListScreen::new();
    screen.selected_index = 25;

    screen.clamp(10);
    assert_eq!(screen.selected_index, 9);

    screen.clamp(0);
    assert_eq!(screen.selected_index, 0);
}

#[test]
fn test_student_list_screen_near_end() {
    let mut screen = StudentListScreen::new();

    assert!(screen.is_near_end(0, 5), "Empty list is always at its end");
    assert!(!screen.is_near_end(10, 5));

    screen.selected_index = 4;
    assert!(!screen.is_near_end(10, 5));

    screen.selected_index = 5;
    assert!(screen.is_near_end(10, 5));
}

#[test]
fn test_student_list_screen_status() {
    let mut screen = StudentListScreen::new();

    assert!(screen.status_message.is_none());

    screen.set_status("Test status".to_string());
    assert_eq!(screen.status_message.as_deref(), Some("Test status"));

    let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
    screen.mark_refreshed(at);
    assert_eq!(screen.status_message.as_deref(), Some("Refreshed at 09:05:07"));
}

#[test]
fn test_student_list_screen_mark_refreshed() {
    let mut screen = StudentListScreen::new();
    let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();

    screen.mark_refreshed(at);

    assert_eq!(screen.last_refreshed, Some(at));
    assert_eq!(screen.status_message.as_deref(), Some("Refreshed at 09:05:07"));
}
