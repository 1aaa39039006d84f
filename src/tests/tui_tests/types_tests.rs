// Types Tests - Testing the Screen enum

use crate::tui::Screen;

#[test]
fn test_screen_labels() {
    assert_eq!(Screen::StudentList.label(), "Students");
    assert_eq!(Screen::StudentDetail.label(), "Student");
}

#[test]
fn test_screen_help_mentions_keys() {
    assert!(Screen::StudentList.help().contains("Refresh"));
    assert!(Screen::StudentList.help().contains("Enter"));
    assert!(Screen::StudentDetail.help().contains("Esc: Back"));
}

#[test]
fn test_screen_equality() {
    assert_eq!(Screen::StudentList, Screen::StudentList);
    assert_ne!(Screen::StudentList, Screen::StudentDetail);
}
