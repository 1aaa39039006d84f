//! UI rendering module - screen-specific rendering functions
//!
//! Each screen has its own file for better maintainability.

mod student_list;
mod student_detail;
mod helpers;

use ratatui::Frame;
use crate::tui::types::Screen;
use crate::tui::app::App;

// Re-export render functions
pub use student_list::render_student_list;
pub use student_detail::render_student_detail;

// Re-export helper functions
pub use helpers::{footer_label, section_header};

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::StudentList => render_student_list(f, app),
        Screen::StudentDetail => render_student_detail(f, app),
    }
}
